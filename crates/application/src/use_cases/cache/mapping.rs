//! Domain / persistence translation.
//!
//! Pure, total and order-preserving in both directions; schema changes
//! on the store side must stay contained here.

use feedvault_domain::FeedItem;

use crate::ports::PersistedFeedItem;

impl From<&FeedItem> for PersistedFeedItem {
    fn from(item: &FeedItem) -> Self {
        Self {
            id: item.id,
            description: item.description.clone(),
            location: item.location.clone(),
            url: item.url.clone(),
        }
    }
}

impl From<PersistedFeedItem> for FeedItem {
    fn from(item: PersistedFeedItem) -> Self {
        Self {
            id: item.id,
            description: item.description,
            location: item.location,
            url: item.url,
        }
    }
}

pub(crate) fn to_persisted(feed: &[FeedItem]) -> Vec<PersistedFeedItem> {
    feed.iter().map(PersistedFeedItem::from).collect()
}

pub(crate) fn to_domain(feed: Vec<PersistedFeedItem>) -> Vec<FeedItem> {
    feed.into_iter().map(FeedItem::from).collect()
}
