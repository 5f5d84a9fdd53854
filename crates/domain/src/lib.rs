//! FeedVault Domain Layer
pub mod errors;
pub mod feed_item;

pub use errors::DomainError;
pub use feed_item::FeedItem;
