use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::response::TimelineResponse;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub username: String,
    pub profile_image_url: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PublicMetrics {
    pub retweet_count: u32,
    pub reply_count: u32,
    pub like_count: u32,
    #[serde(default)]
    pub quote_count: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Tweet {
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub public_metrics: PublicMetrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Attachments>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Attachments {
    #[serde(default)]
    pub media_keys: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub media_key: String,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub preview_image_url: Option<String>,
}

/// The user's most recent posts with their attached media, in the order the
/// API returned them.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub tweets: Vec<Tweet>,
    pub media: Vec<MediaItem>,
}

// MARK: Conversions

impl From<TimelineResponse> for Timeline {
    fn from(response: TimelineResponse) -> Self {
        Timeline {
            tweets: response.data.unwrap_or_default(),
            media: response.includes.map(|i| i.media).unwrap_or_default(),
        }
    }
}
