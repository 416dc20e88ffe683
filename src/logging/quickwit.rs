//! A `tracing` layer that ships marked events to Quickwit in NDJSON batches.
//!
//! Only events carrying the marker field (e.g. `task = "http_request"`) with a value mapped to an
//! index are shipped; everything else is left to the other layers.

use crate::logging::consts::{DEFAULT_LOGGING_BATCH_SIZE, QUICKWIT_LOGGING_CHANNEL_CAPACITY};
use reqwest::Client;
use serde::Serialize;
use std::collections::HashMap;
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::mpsc;
use tracing::field::{Field, Visit};
use tracing_core::{Event, Subscriber};
use tracing_subscriber::layer::Context as TracingContext;
use tracing_subscriber::Layer;
use url::Url;

type LogRecord = serde_json::Map<String, serde_json::Value>;

pub struct QuickwitLoggingLayerBuilder {
    quickwit_url: Url,
    marker_field: String,
    marker_to_index: HashMap<String, String>,
    batch_size: usize,
}

impl QuickwitLoggingLayerBuilder {
    pub fn new(mut quickwit_url: Url) -> Self {
        // `Url::join` replaces the last path segment unless the base ends with a slash.
        if !quickwit_url.path().ends_with('/') {
            let path = format!("{}/", quickwit_url.path());
            quickwit_url.set_path(&path);
        }
        Self {
            quickwit_url,
            marker_field: String::new(),
            marker_to_index: HashMap::new(),
            batch_size: DEFAULT_LOGGING_BATCH_SIZE,
        }
    }

    pub fn marker_field(mut self, field: &str) -> Self {
        self.marker_field = field.to_string();
        self
    }

    pub fn map_marker_to_index(mut self, marker_value: &str, index_id: &str) -> Self {
        self.marker_to_index
            .insert(marker_value.to_string(), index_id.to_string());
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Must be called from within a tokio runtime: the shipping task is spawned right away.
    pub fn build(self) -> QuickwitLoggingLayer {
        let (sender, receiver) = mpsc::channel(QUICKWIT_LOGGING_CHANNEL_CAPACITY);
        tokio::spawn(ship_batches(self.quickwit_url, receiver, self.batch_size));
        QuickwitLoggingLayer {
            sender,
            marker_field: self.marker_field,
            marker_to_index: self.marker_to_index,
        }
    }
}

pub struct QuickwitLoggingLayer {
    sender: mpsc::Sender<QuickwitLogMessage>,
    marker_field: String,
    marker_to_index: HashMap<String, String>,
}

impl QuickwitLoggingLayer {
    fn index_for(&self, record: &LogRecord) -> Option<String> {
        record
            .get(&self.marker_field)
            .and_then(|value| value.as_str())
            .and_then(|marker| self.marker_to_index.get(marker))
            .cloned()
    }
}

impl<S: Subscriber> Layer<S> for QuickwitLoggingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: TracingContext<'_, S>) {
        let mut visitor = LogVisitor::default();
        event.record(&mut visitor);
        let Some(index_id) = self.index_for(&visitor.record) else {
            return;
        };
        let mut record = visitor.record;
        if let Ok(elapsed) = SystemTime::now().duration_since(UNIX_EPOCH) {
            record.insert("timestamp".to_string(), elapsed.as_secs().into());
        }
        // Dropping logs is preferable to blocking the instrumented code.
        let _ = self.sender.try_send(QuickwitLogMessage { index_id, record });
    }
}

#[derive(Debug)]
struct QuickwitLogMessage {
    index_id: String,
    record: LogRecord,
}

async fn ship_batches(
    quickwit_url: Url,
    mut receiver: mpsc::Receiver<QuickwitLogMessage>,
    batch_size: usize,
) {
    let http_client = Client::new();
    let mut buffers: HashMap<String, Vec<LogRecord>> = HashMap::new();
    while let Some(QuickwitLogMessage { index_id, record }) = receiver.recv().await {
        let buffer = buffers.entry(index_id.clone()).or_default();
        buffer.push(record);
        if buffer.len() >= batch_size {
            ingest(&http_client, &quickwit_url, &index_id, buffer).await;
        }
    }
    for (index_id, buffer) in buffers.iter_mut() {
        ingest(&http_client, &quickwit_url, index_id, buffer).await;
    }
}

/// Posts and clears the buffer. Failures are reported on stderr: logging them through `tracing`
/// would feed them back into this layer.
async fn ingest(
    http_client: &Client,
    quickwit_url: &Url,
    index_id: &str,
    buffer: &mut Vec<LogRecord>,
) {
    if buffer.is_empty() {
        return;
    }
    let mut ndjson_body = Vec::new();
    for record in buffer.drain(..) {
        if let Err(e) = serialize_to_ndjson(&mut ndjson_body, &record) {
            eprintln!("[quickwit]: failed to serialize a log record: {e}");
        }
    }
    let url = match ingest_url(quickwit_url, index_id) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("[quickwit]: invalid ingest URL for index {index_id}: {e}");
            return;
        }
    };
    if let Err(e) = http_client.post(url).body(ndjson_body).send().await {
        eprintln!("[quickwit]: failed to ingest logs into {index_id}: {e}");
    }
}

fn ingest_url(quickwit_url: &Url, index_id: &str) -> Result<Url, url::ParseError> {
    quickwit_url.join(&format!("api/v1/{index_id}/ingest"))
}

#[derive(Default)]
struct LogVisitor {
    record: LogRecord,
}

impl Visit for LogVisitor {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.record.insert(field.name().to_string(), value.into());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record.insert(field.name().to_string(), value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.record.insert(field.name().to_string(), value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.record.insert(field.name().to_string(), value.into());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record.insert(field.name().to_string(), value.into());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.record
            .insert(field.name().to_string(), format!("{value:?}").into());
    }
}

fn serialize_to_ndjson<W, V>(mut writer: W, value: &V) -> io::Result<()>
where
    W: io::Write,
    V: ?Sized + Serialize,
{
    serde_json::to_writer(&mut writer, value)?;
    writer.write_all(b"\n")
}
