mod refresh_feed;

pub use refresh_feed::RefreshFeedUseCase;
