pub mod clock;
pub mod feed_loader;
pub mod feed_store;

pub use clock::{system_clock, Clock};
pub use feed_loader::FeedLoader;
pub use feed_store::{
    CachedFeed, DeletionCompletion, FeedStore, InsertionCompletion, PersistedFeedItem,
    RetrievalCompletion,
};
