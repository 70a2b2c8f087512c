use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use twitter_client::{MediaItem, Tweet, UserProfile};

/// Everything the landing page needs to render its timeline section.
/// Replaced wholesale on every successful refresh; never partially mutated.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TimelinePayload {
    pub user: UserProfile,
    pub tweets: Vec<Tweet>,
    pub media: Vec<MediaItem>,
    #[serde(rename = "cachedAt")]
    pub cached_at: DateTime<Utc>,
}

/// One cache slot entry: the payload plus the time it was stored.
/// Staleness is a read-time comparison against this timestamp.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CachedTimeline {
    pub data: TimelinePayload,
    pub timestamp: DateTime<Utc>,
}

impl CachedTimeline {
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.timestamp
    }
}

/// How the returned payload relates to the cache slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
    Stale,
}

impl CacheStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheStatus::Hit => "HIT",
            CacheStatus::Miss => "MISS",
            CacheStatus::Stale => "STALE",
        }
    }
}
