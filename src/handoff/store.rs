use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use uuid::Uuid;

struct HandoffEntry {
    payload: Value,
    expires_at: Instant,
}

impl HandoffEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

#[derive(Clone)]
pub struct HandoffStore {
    entries: Arc<RwLock<HashMap<String, HandoffEntry>>>,
    ttl: Duration,
}

impl HandoffStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::default(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Stores `payload` and returns the token that redeems it.
    pub async fn put(&self, payload: Value) -> String {
        let token = Uuid::new_v4().to_string();
        let entry = HandoffEntry {
            payload,
            expires_at: Instant::now() + self.ttl,
        };
        self.entries.write().await.insert(token.clone(), entry);
        token
    }

    /// Consumes the entry: a token can be redeemed at most once.
    pub async fn take(&self, token: &str) -> Option<Value> {
        let entry = self.entries.write().await.remove(token)?;
        (!entry.is_expired(Instant::now())).then_some(entry.payload)
    }

    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        before - entries.len()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
