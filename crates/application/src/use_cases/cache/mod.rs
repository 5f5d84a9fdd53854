mod local_feed_cache;
mod mapping;
mod policy;

pub use local_feed_cache::{LoadCompletion, LocalFeedCache, SaveCompletion};
pub use policy::FeedCachePolicy;
