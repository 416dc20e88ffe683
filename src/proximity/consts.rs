pub const DEFAULT_RADIUS_KM: f64 = 50.0;

/// Alerts buffered per subscription before the watch task waits on the consumer.
pub const PROXIMITY_EVENTS_CHANNEL_CAPACITY: usize = 64;

pub const MAX_CONCURRENT_OBSERVATIONS: usize = 16;
