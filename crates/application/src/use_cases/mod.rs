pub mod cache;
pub mod sync;

pub use cache::{FeedCachePolicy, LoadCompletion, LocalFeedCache, SaveCompletion};
pub use sync::RefreshFeedUseCase;
