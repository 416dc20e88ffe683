use std::time::Duration;

pub const HANDOFF_PURGE_PERIOD: Duration = Duration::from_secs(60);
