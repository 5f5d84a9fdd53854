use std::sync::Arc;

use feedvault_domain::DomainError;
use tokio::sync::oneshot;
use tracing::{info, instrument};

use crate::ports::FeedLoader;
use crate::use_cases::cache::LocalFeedCache;

/// Pulls the current remote feed and replaces the local cache with it.
pub struct RefreshFeedUseCase {
    remote: Arc<dyn FeedLoader>,
    cache: Arc<LocalFeedCache>,
}

impl RefreshFeedUseCase {
    pub fn new(remote: Arc<dyn FeedLoader>, cache: Arc<LocalFeedCache>) -> Self {
        Self { remote, cache }
    }

    /// Returns the number of items cached.
    ///
    /// A remote failure propagates without touching the store; a store
    /// failure propagates after the remote load succeeded.
    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<usize, DomainError> {
        let feed = self.remote.load().await?;
        let items = feed.len();

        let (tx, rx) = oneshot::channel();
        self.cache.save(
            feed,
            Box::new(move |result| {
                let _ = tx.send(result);
            }),
        );

        match rx.await {
            Ok(Ok(())) => {
                info!(items, "Feed refreshed and cached");
                Ok(items)
            }
            Ok(Err(error)) => Err(error),
            // We hold a strong cache handle, so its liveness guard
            // cannot have fired; the sender is only dropped unsent if
            // the store dropped a completion without invoking it.
            Err(_) => Err(DomainError::InsertionFailed(
                "store dropped the save completion".to_string(),
            )),
        }
    }
}
