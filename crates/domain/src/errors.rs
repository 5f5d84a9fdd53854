use thiserror::Error;

/// Failures surfaced by the cache boundary.
///
/// The store-origin variants carry whatever message the backend
/// produced; orchestration code forwards them without inspecting the
/// payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Cache deletion failed: {0}")]
    DeletionFailed(String),

    #[error("Cache insertion failed: {0}")]
    InsertionFailed(String),

    #[error("Cache retrieval failed: {0}")]
    RetrievalFailed(String),

    #[error("Remote feed unavailable: {0}")]
    RemoteUnavailable(String),
}
