use chrono::{DateTime, Days, Utc};

/// Freshness rule for cached feed records.
///
/// A record is valid for seven calendar days after the timestamp the
/// store recorded at insert time. Day arithmetic is done on UTC
/// calendar days (`chrono::Days`), so the window is deterministic and
/// independent of the host timezone. The boundary is strict: a record
/// exactly seven days old is already expired.
///
/// Validity only ever decreases as time advances; nothing here (or
/// anywhere else) re-validates a record short of a fresh insert.
pub struct FeedCachePolicy;

const MAX_CACHE_AGE_DAYS: u64 = 7;

impl FeedCachePolicy {
    /// Returns whether a record written at `timestamp` is still fresh
    /// at `date`.
    pub fn validate(timestamp: DateTime<Utc>, date: DateTime<Utc>) -> bool {
        match timestamp.checked_add_days(Days::new(MAX_CACHE_AGE_DAYS)) {
            Some(max_age) => date < max_age,
            // Timestamp too close to the representable range to age out.
            None => false,
        }
    }
}
