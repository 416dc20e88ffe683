use crate::proximity::models::InsertedRecord;
use futures_util::{Stream, StreamExt};
use tokio::sync::broadcast;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;

/// Change feed of inserted records. Every subscriber sees every record published after it
/// subscribed.
#[derive(Clone)]
pub struct InsertFeed {
    sender: broadcast::Sender<InsertedRecord>,
}

impl InsertFeed {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Returns how many subscribers the record was delivered to.
    pub fn publish(&self, record: InsertedRecord) -> usize {
        // Sending only fails when nobody is subscribed.
        self.sender.send(record).unwrap_or(0)
    }

    pub fn subscribe(&self) -> impl Stream<Item = InsertedRecord> + Send + 'static {
        BroadcastStream::new(self.sender.subscribe()).filter_map(|item| async move {
            match item {
                Ok(record) => Some(record),
                Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        "Feed subscriber lagged behind, {skipped} records were skipped."
                    );
                    None
                }
            }
        })
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
