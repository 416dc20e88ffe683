use crate::app_context::AppContext;
use crate::geo::models::GeoPoint;
use crate::http::requests::LocationQueryParams;
use crate::http::responses::reject;
use crate::proximity::message_types::{self, ClientSentSocketMessage, ServerSentSocketMessage};
use crate::proximity::models::ProximityConfig;
use crate::proximity::watch::start_proximity_watch;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};

pub async fn ws(
    ws: WebSocketUpgrade,
    Query(query_params): Query<LocationQueryParams>,
    State(app_context): State<AppContext>,
) -> Response {
    let config = match query_params.proximity_config(app_context.default_proximity) {
        Ok(config) => config,
        Err(reason) => return reject(StatusCode::BAD_REQUEST, reason),
    };
    let user_location = match query_params.user_location() {
        Ok(user_location) => user_location,
        Err(reason) => return reject(StatusCode::BAD_REQUEST, reason),
    };
    ws.on_upgrade(move |socket| {
        ProximityWsHandler::new(app_context, config, user_location).on_connected(socket)
    })
}

pub struct ProximityWsHandler {
    app_context: AppContext,
    config: ProximityConfig,
    user_location: Option<GeoPoint>,
}

impl ProximityWsHandler {
    pub fn new(
        app_context: AppContext,
        config: ProximityConfig,
        user_location: Option<GeoPoint>,
    ) -> Self {
        Self {
            app_context,
            config,
            user_location,
        }
    }

    pub async fn on_connected(self, socket: WebSocket) {
        let (mut socket_tx, mut socket_rx) = socket.split();
        let (subscription, mut events) = start_proximity_watch(
            self.config,
            self.user_location,
            self.app_context.feed.subscribe(),
            self.app_context.categories.clone(),
        );
        tracing::info!(
            task = "proximity_watch_started",
            radius_km = self.config.radius_km(),
            active = subscription.is_active(),
            feed_subscribers = self.app_context.feed.subscriber_count(),
        );
        let mut events_open = true;
        loop {
            tokio::select! {
                event = events.next(), if events_open => match event {
                    Some(event) => {
                        let alert = ServerSentSocketMessage::ProximityAlert {
                            r#type: message_types::ProximityAlert,
                            payload: event,
                        };
                        if send(&mut socket_tx, &alert).await.is_err() {
                            break;
                        }
                    }
                    None => events_open = false,
                },
                message = socket_rx.next() => match message {
                    Some(Ok(Message::Text(text))) => {
                        if self.on_new_message(&mut socket_tx, &text).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("Proximity websocket error: {e}");
                        break;
                    }
                },
            }
        }
        subscription.cancel();
        tracing::info!(task = "proximity_watch_stopped");
    }

    async fn on_new_message(
        &self,
        socket_tx: &mut SplitSink<WebSocket, Message>,
        raw_message: &str,
    ) -> Result<(), axum::Error> {
        match serde_json::from_str::<ClientSentSocketMessage>(raw_message) {
            Ok(ClientSentSocketMessage::Ping { .. }) => {
                let pong = ServerSentSocketMessage::Pong {
                    r#type: message_types::Pong,
                };
                send(socket_tx, &pong).await
            }
            Err(e) => {
                tracing::warn!("Unrecognized proximity socket message {raw_message:?}: {e}");
                Ok(())
            }
        }
    }
}

async fn send(
    socket_tx: &mut SplitSink<WebSocket, Message>,
    message: &ServerSentSocketMessage,
) -> Result<(), axum::Error> {
    let raw_message = match serde_json::to_string(message) {
        Ok(raw_message) => raw_message,
        Err(e) => {
            tracing::error!("Failed to serialize a socket message: {e}");
            return Ok(());
        }
    };
    socket_tx.send(Message::Text(raw_message)).await
}
