use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// A single entry of the remote feed.
///
/// Immutable value with structural equality. Produced by the remote
/// loader, cached and replayed by the local cache; nothing in here
/// knows where the item came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub url: Url,
}

impl FeedItem {
    pub fn new(id: Uuid, description: Option<String>, location: Option<String>, url: Url) -> Self {
        Self {
            id,
            description,
            location,
            url,
        }
    }
}
