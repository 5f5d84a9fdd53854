//! FeedVault Infrastructure Layer
//!
//! Concrete adapters for the application ports.
pub mod stores;

pub use stores::InMemoryFeedStore;
