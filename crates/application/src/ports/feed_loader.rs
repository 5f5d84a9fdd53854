use async_trait::async_trait;
use feedvault_domain::{DomainError, FeedItem};

/// Source of feed items, typically the remote API.
///
/// # Returns
///
/// * `Ok(Vec<FeedItem>)` - The current feed, possibly empty
/// * `Err(DomainError)` - If the source is unreachable or returned
///   invalid data
#[async_trait]
pub trait FeedLoader: Send + Sync {
    async fn load(&self) -> Result<Vec<FeedItem>, DomainError>;
}
