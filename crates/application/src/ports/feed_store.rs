use chrono::{DateTime, Utc};
use feedvault_domain::DomainError;
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// Feed item as handed to the store.
///
/// Structurally identical to `FeedItem`, kept separate so the domain
/// model can evolve without touching whatever wire shape a backend
/// persists. Conversions live in the cache use case and are total in
/// both directions. Serde derives are part of the contract: durable
/// backends serialize this shape, not the domain model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedFeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub url: Url,
}

/// Outcome of a successful retrieval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedFeed {
    /// No cache record exists (never written, or deleted).
    Empty,
    /// The full record written by the last successful insert.
    Found {
        feed: Vec<PersistedFeedItem>,
        timestamp: DateTime<Utc>,
    },
}

pub type DeletionCompletion = Box<dyn FnOnce(Result<(), DomainError>) + Send>;
pub type InsertionCompletion = Box<dyn FnOnce(Result<(), DomainError>) + Send>;
pub type RetrievalCompletion = Box<dyn FnOnce(Result<CachedFeed, DomainError>) + Send>;

/// Persistence contract consumed by the cache orchestration.
///
/// Every operation is single-shot: invoked at most once per request,
/// and the implementation must invoke the supplied completion exactly
/// once, on any thread it likes — possibly after the caller that
/// issued the request is gone. Completions are `FnOnce` callbacks
/// rather than returned futures so a caller that has been torn down
/// can drop out silently (see `LocalFeedCache`).
///
/// Implementations must also honor:
///
/// * `insert` replaces the previous record wholesale — never a merge;
/// * `retrieve` after a deletion (or before any insert) reports
///   `CachedFeed::Empty`, never stale partial data.
pub trait FeedStore: Send + Sync {
    /// Removes the cached record, if any. Deleting an empty store is
    /// a success.
    fn delete_cached_feed(&self, completion: DeletionCompletion);

    /// Writes a new record with the given write timestamp.
    fn insert(
        &self,
        feed: Vec<PersistedFeedItem>,
        timestamp: DateTime<Utc>,
        completion: InsertionCompletion,
    );

    /// Reads back whatever the last successful insert wrote.
    fn retrieve(&self, completion: RetrievalCompletion);
}
