use crate::proximity::models::ProximityEvent;
use serde::{Deserialize, Serialize};
use serde_unit_struct::{Deserialize_unit_struct, Serialize_unit_struct};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ClientSentSocketMessage {
    Ping {
        #[allow(dead_code)]
        // Only here to be pattern-matched on while deserializing.
        r#type: Ping,
    },
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ServerSentSocketMessage {
    ProximityAlert {
        r#type: ProximityAlert,
        payload: ProximityEvent,
    },
    Pong {
        r#type: Pong,
    },
}

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct ProximityAlert;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct Ping;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct Pong;
