use chrono::{DateTime, Utc};
use feedvault_application::ports::{
    CachedFeed, DeletionCompletion, FeedStore, InsertionCompletion, PersistedFeedItem,
    RetrievalCompletion,
};
use feedvault_domain::DomainError;
use std::sync::Mutex;

// ============================================================================
// FeedStoreSpy
// ============================================================================

/// Everything the orchestrator asked the store to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceivedMessage {
    DeleteCachedFeed,
    Insert(Vec<PersistedFeedItem>, DateTime<Utc>),
    Retrieve,
}

/// Test double for [`FeedStore`].
///
/// Records the message sequence and parks every completion so the test
/// decides when — and whether — each store call "finishes", in
/// whatever order it wants. Completions are taken out of their slot on
/// use, so completing the same request twice panics the test.
#[derive(Default)]
pub struct FeedStoreSpy {
    messages: Mutex<Vec<ReceivedMessage>>,
    deletion_completions: Mutex<Vec<Option<DeletionCompletion>>>,
    insertion_completions: Mutex<Vec<Option<InsertionCompletion>>>,
    retrieval_completions: Mutex<Vec<Option<RetrievalCompletion>>>,
}

impl FeedStoreSpy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<ReceivedMessage> {
        self.messages.lock().unwrap().clone()
    }

    // The zero-index methods cover the common one-request-per-test
    // case; the `_at` variants complete any pending request so a test
    // can finish overlapping requests in an adversarial order.

    pub fn complete_deletion_with_error(&self, error: DomainError) {
        self.complete_deletion_with_error_at(error, 0);
    }

    pub fn complete_deletion_with_error_at(&self, error: DomainError, index: usize) {
        self.take_deletion(index)(Err(error));
    }

    pub fn complete_deletion_successfully(&self) {
        self.complete_deletion_successfully_at(0);
    }

    pub fn complete_deletion_successfully_at(&self, index: usize) {
        self.take_deletion(index)(Ok(()));
    }

    pub fn complete_insertion_with_error(&self, error: DomainError) {
        self.complete_insertion_with_error_at(error, 0);
    }

    pub fn complete_insertion_with_error_at(&self, error: DomainError, index: usize) {
        self.take_insertion(index)(Err(error));
    }

    pub fn complete_insertion_successfully(&self) {
        self.complete_insertion_successfully_at(0);
    }

    pub fn complete_insertion_successfully_at(&self, index: usize) {
        self.take_insertion(index)(Ok(()));
    }

    pub fn complete_retrieval_with_error(&self, error: DomainError) {
        self.complete_retrieval_with_error_at(error, 0);
    }

    pub fn complete_retrieval_with_error_at(&self, error: DomainError, index: usize) {
        self.take_retrieval(index)(Err(error));
    }

    pub fn complete_retrieval_with_empty_cache(&self) {
        self.complete_retrieval_with_empty_cache_at(0);
    }

    pub fn complete_retrieval_with_empty_cache_at(&self, index: usize) {
        self.take_retrieval(index)(Ok(CachedFeed::Empty));
    }

    pub fn complete_retrieval_with(&self, feed: Vec<PersistedFeedItem>, timestamp: DateTime<Utc>) {
        self.complete_retrieval_with_at(feed, timestamp, 0);
    }

    pub fn complete_retrieval_with_at(
        &self,
        feed: Vec<PersistedFeedItem>,
        timestamp: DateTime<Utc>,
        index: usize,
    ) {
        self.take_retrieval(index)(Ok(CachedFeed::Found { feed, timestamp }));
    }

    // The lock is released before the completion runs: a save's
    // deletion completion re-enters the spy through `insert`.
    fn take_deletion(&self, index: usize) -> DeletionCompletion {
        self.deletion_completions.lock().unwrap()[index]
            .take()
            .unwrap_or_else(|| panic!("deletion at index {index} already completed"))
    }

    fn take_insertion(&self, index: usize) -> InsertionCompletion {
        self.insertion_completions.lock().unwrap()[index]
            .take()
            .unwrap_or_else(|| panic!("insertion at index {index} already completed"))
    }

    fn take_retrieval(&self, index: usize) -> RetrievalCompletion {
        self.retrieval_completions.lock().unwrap()[index]
            .take()
            .unwrap_or_else(|| panic!("retrieval at index {index} already completed"))
    }
}

impl FeedStore for FeedStoreSpy {
    fn delete_cached_feed(&self, completion: DeletionCompletion) {
        self.messages
            .lock()
            .unwrap()
            .push(ReceivedMessage::DeleteCachedFeed);
        self.deletion_completions
            .lock()
            .unwrap()
            .push(Some(completion));
    }

    fn insert(
        &self,
        feed: Vec<PersistedFeedItem>,
        timestamp: DateTime<Utc>,
        completion: InsertionCompletion,
    ) {
        self.messages
            .lock()
            .unwrap()
            .push(ReceivedMessage::Insert(feed, timestamp));
        self.insertion_completions
            .lock()
            .unwrap()
            .push(Some(completion));
    }

    fn retrieve(&self, completion: RetrievalCompletion) {
        self.messages.lock().unwrap().push(ReceivedMessage::Retrieve);
        self.retrieval_completions
            .lock()
            .unwrap()
            .push(Some(completion));
    }
}
