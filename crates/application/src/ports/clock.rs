use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Injected time source.
///
/// Production wiring uses [`system_clock`]; tests inject a fixed or
/// stepping clock so validity boundaries are deterministic.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Wall-clock time in UTC.
pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}
