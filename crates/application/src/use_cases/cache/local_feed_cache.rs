use std::sync::Arc;

use feedvault_domain::{DomainError, FeedItem};
use tracing::debug;

use super::mapping;
use super::policy::FeedCachePolicy;
use crate::ports::{CachedFeed, Clock, FeedStore};

pub type SaveCompletion = Box<dyn FnOnce(Result<(), DomainError>) + Send>;
pub type LoadCompletion = Box<dyn FnOnce(Result<Vec<FeedItem>, DomainError>) + Send>;

/// Orchestrates the local feed cache on top of a [`FeedStore`].
///
/// Owns no state beyond the store reference and the injected clock.
/// `save` replaces the cached feed atomically (delete, then insert —
/// the store never holds a mix of old and new items) and `load`
/// applies the [`FeedCachePolicy`] freshness rule to whatever the
/// store returns.
///
/// The handle is the sole strong owner of its internals; every store
/// completion holds only a [`Weak`](std::sync::Weak) guard and checks
/// it before touching the caller's completion. Dropping the handle
/// while a store call is in flight therefore suppresses the pending
/// completion outright — it is never invoked, not even with an error.
pub struct LocalFeedCache {
    inner: Arc<CacheInner>,
}

struct CacheInner {
    store: Arc<dyn FeedStore>,
    clock: Clock,
}

impl LocalFeedCache {
    pub fn new(store: Arc<dyn FeedStore>, clock: Clock) -> Self {
        Self {
            inner: Arc::new(CacheInner { store, clock }),
        }
    }

    /// Replaces the cached feed with `feed`.
    ///
    /// Issues a delete against the store; only once the deletion is
    /// observed successful is the insert issued, timestamped with the
    /// clock read at that moment. A deletion failure completes
    /// immediately with that error and the insert is never issued.
    /// Saving an empty feed is valid: the cache ends up empty with a
    /// fresh timestamp.
    pub fn save(&self, feed: Vec<FeedItem>, completion: SaveCompletion) {
        debug!(items = feed.len(), "replacing cached feed");
        let guard = Arc::downgrade(&self.inner);
        self.inner
            .store
            .delete_cached_feed(Box::new(move |deletion| {
                let Some(inner) = guard.upgrade() else { return };
                match deletion {
                    Ok(()) => inner.cache_feed(feed, completion),
                    Err(error) => completion(Err(error)),
                }
            }));
    }

    /// Delivers the cached feed, or an empty one.
    ///
    /// Store failures propagate untouched. An absent record and an
    /// expired record both deliver `Ok` with an empty feed — callers
    /// cannot (and should not) tell the two apart. Never mutates the
    /// store: an expired record is left in place for the next `save`
    /// to replace.
    pub fn load(&self, completion: LoadCompletion) {
        let guard = Arc::downgrade(&self.inner);
        self.inner.store.retrieve(Box::new(move |retrieval| {
            let Some(inner) = guard.upgrade() else { return };
            match retrieval {
                Err(error) => completion(Err(error)),
                Ok(CachedFeed::Empty) => completion(Ok(Vec::new())),
                Ok(CachedFeed::Found { feed, timestamp }) => {
                    if FeedCachePolicy::validate(timestamp, (inner.clock)()) {
                        completion(Ok(mapping::to_domain(feed)))
                    } else {
                        debug!(%timestamp, "cached feed expired, delivering empty feed");
                        completion(Ok(Vec::new()))
                    }
                }
            }
        }));
    }
}

impl CacheInner {
    fn cache_feed(self: Arc<Self>, feed: Vec<FeedItem>, completion: SaveCompletion) {
        let guard = Arc::downgrade(&self);
        // Clock is read when the insert is issued, not when `save` was
        // called; the store may have taken arbitrarily long to delete.
        let timestamp = (self.clock)();
        self.store.insert(
            mapping::to_persisted(&feed),
            timestamp,
            Box::new(move |insertion| {
                if guard.upgrade().is_none() {
                    return;
                }
                completion(insertion);
            }),
        );
    }
}
