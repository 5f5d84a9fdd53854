use std::sync::Mutex;

use chrono::{DateTime, Utc};
use feedvault_application::ports::{
    CachedFeed, DeletionCompletion, FeedStore, InsertionCompletion, PersistedFeedItem,
    RetrievalCompletion,
};
use tracing::debug;

struct CachedEntry {
    feed: Vec<PersistedFeedItem>,
    timestamp: DateTime<Utc>,
}

/// Reference [`FeedStore`] backed by process memory.
///
/// Holds at most one record, replaced wholesale by each insert and
/// removed by delete, so a retrieve can never observe a mix of two
/// writes. Completions fire exactly once, on the calling thread —
/// valid under the store contract, which leaves the completion context
/// unspecified.
#[derive(Default)]
pub struct InMemoryFeedStore {
    entry: Mutex<Option<CachedEntry>>,
}

impl InMemoryFeedStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeedStore for InMemoryFeedStore {
    fn delete_cached_feed(&self, completion: DeletionCompletion) {
        // The lock is released before completing: the deletion
        // completion of a save re-enters this store through `insert`.
        {
            let mut entry = self.entry.lock().unwrap();
            if entry.take().is_some() {
                debug!("deleted cached feed");
            }
        }
        completion(Ok(()));
    }

    fn insert(
        &self,
        feed: Vec<PersistedFeedItem>,
        timestamp: DateTime<Utc>,
        completion: InsertionCompletion,
    ) {
        {
            let mut entry = self.entry.lock().unwrap();
            debug!(items = feed.len(), %timestamp, "cached new feed");
            *entry = Some(CachedEntry { feed, timestamp });
        }
        completion(Ok(()));
    }

    fn retrieve(&self, completion: RetrievalCompletion) {
        let cached = {
            let entry = self.entry.lock().unwrap();
            entry.as_ref().map(|e| CachedFeed::Found {
                feed: e.feed.clone(),
                timestamp: e.timestamp,
            })
        };
        completion(Ok(cached.unwrap_or(CachedFeed::Empty)));
    }
}
