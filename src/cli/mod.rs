use crate::proximity::consts::DEFAULT_RADIUS_KM;
use clap::Parser;
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Parser)]
#[command(about = "Realtime lost & found pet reports with proximity alerts.")]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// NDJSON file with `{"id": ..., "label": ...}` report categories.
    #[arg(long)]
    #[arg(default_value = "categories.example.ndjson")]
    pub categories: PathBuf,
    /// Proximity radius used when a subscriber doesn't ask for one.
    #[arg(long)]
    #[arg(default_value_t = DEFAULT_RADIUS_KM)]
    pub default_radius_km: f64,
    #[arg(long)]
    #[arg(default_value_t = 600)]
    pub handoff_ttl_secs: u64,
    /// How many inserted records the change feed buffers for slow subscribers.
    #[arg(long)]
    #[arg(default_value = "256")]
    pub feed_capacity: NonZeroUsize,
    #[arg(long = "allowed-origin")]
    #[arg(default_values = ["http://127.0.0.1:3000", "http://localhost:3000"])]
    pub allowed_origins: Vec<String>,
    /// Ship selected log events to this Quickwit instance.
    #[arg(long)]
    pub quickwit_url: Option<Url>,
}
