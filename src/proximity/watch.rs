use crate::categories::CategoryCatalog;
use crate::geo::decoder;
use crate::geo::distance::distance_km;
use crate::geo::models::GeoPoint;
use crate::proximity::consts::{MAX_CONCURRENT_OBSERVATIONS, PROXIMITY_EVENTS_CHANNEL_CAPACITY};
use crate::proximity::models::{InsertedRecord, ProximityConfig, ProximityError, ProximityEvent};
use futures_util::{Stream, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::ReceiverStream;

pub type ProximityEvents = ReceiverStream<ProximityEvent>;

/// Classifies a single inserted record against the observer's location.
///
/// Returns `Ok(None)` when there is no observer location, when the record's point can't be
/// decoded, or when the record lies at or beyond the configured radius.
pub async fn observe(
    config: ProximityConfig,
    user_location: Option<GeoPoint>,
    record: &InsertedRecord,
    categories: &dyn CategoryCatalog,
) -> Result<Option<ProximityEvent>, ProximityError> {
    let Some(user_location) = user_location else {
        return Ok(None);
    };
    let Some(point) = decoder::decode_point(record.serialized_point.as_deref()) else {
        tracing::debug!(
            subject_id = record.subject_id,
            "Record has no decodable location, skipping it."
        );
        return Ok(None);
    };
    let distance_km = distance_km(user_location, point);
    if distance_km >= config.radius_km() {
        return Ok(None);
    }
    let category = categories
        .label(&record.record_type)
        .await
        .map_err(|source| ProximityError::CategoryLookup {
            subject_id: record.subject_id.clone(),
            source,
        })?;
    Ok(Some(ProximityEvent {
        subject_id: record.subject_id.clone(),
        point,
        distance_km,
        category,
    }))
}

/// Handle of a running proximity watch. Cancelling or dropping it stops the watch and releases
/// the feed.
pub struct Subscription {
    task: Option<JoinHandle<()>>,
}

impl Subscription {
    pub fn cancel(mut self) {
        self.abort();
    }

    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    fn abort(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.abort();
    }
}

pub fn start_proximity_watch<F>(
    config: ProximityConfig,
    user_location: Option<GeoPoint>,
    feed: F,
    categories: Arc<dyn CategoryCatalog>,
) -> (Subscription, ProximityEvents)
where
    F: Stream<Item = InsertedRecord> + Send + 'static,
{
    let (events_tx, events_rx) = mpsc::channel(PROXIMITY_EVENTS_CHANNEL_CAPACITY);
    let events = ReceiverStream::new(events_rx);
    let Some(user_location) = user_location else {
        tracing::info!("User location is unavailable, proximity alerts are disabled.");
        return (Subscription { task: None }, events);
    };
    let task = tokio::spawn(async move {
        feed.for_each_concurrent(MAX_CONCURRENT_OBSERVATIONS, |record| {
            let categories = Arc::clone(&categories);
            let events_tx = events_tx.clone();
            async move {
                let event =
                    match observe(config, Some(user_location), &record, categories.as_ref()).await
                    {
                        Ok(Some(event)) => event,
                        Ok(None) => return,
                        Err(e) => {
                            tracing::warn!("Skipping an inserted record: {e}");
                            return;
                        }
                    };
                tracing::info!(
                    task = "proximity_event",
                    subject_id = event.subject_id,
                    category = event.category,
                    distance_km = event.distance_km,
                );
                if events_tx.send(event).await.is_err() {
                    tracing::debug!("Proximity events receiver is gone, dropping an alert.");
                }
            }
        })
        .await;
    });
    (Subscription { task: Some(task) }, events)
}
