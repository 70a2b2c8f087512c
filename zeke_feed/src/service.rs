use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use twitter_client::{Timeline, UserProfile};

use crate::error::{Error, Result};
use crate::model::{CacheStatus, CachedTimeline, TimelinePayload};
use crate::source::TweetSource;
use crate::store::CacheStore;

/// Number of posts kept in the payload, a prefix of the upstream order.
const TIMELINE_KEEP_COUNT: usize = 4;

/// Result of one `get_timeline` call.
#[derive(Debug)]
pub struct TimelineSnapshot {
    pub payload: TimelinePayload,
    pub status: CacheStatus,
    pub age: Duration,
}

/// The tweet cache proxy. Serves the cached timeline while fresh, refreshes
/// it from upstream otherwise, and falls back to the last good copy when
/// upstream is down.
pub struct TimelineService {
    source: Option<Box<dyn TweetSource>>,
    store: Box<dyn CacheStore>,
    username: String,
    fresh_ttl: Duration,
    stale_ttl: Duration,
    /// Serializes refreshes: at most one upstream fetch is in flight, while
    /// fresh-window readers never touch the guard.
    refresh_guard: Mutex<()>,
}

impl TimelineService {
    pub fn new(
        source: Option<Box<dyn TweetSource>>,
        store: Box<dyn CacheStore>,
        username: impl Into<String>,
        fresh_ttl: Duration,
        stale_ttl: Duration,
    ) -> Self {
        TimelineService {
            source,
            store,
            username: username.into(),
            fresh_ttl,
            stale_ttl,
            refresh_guard: Mutex::new(()),
        }
    }

    pub async fn get_timeline(&self) -> Result<TimelineSnapshot> {
        let Some(source) = self.source.as_deref() else {
            return Err(Error::NotConfigured);
        };

        let now = Utc::now();
        if let Some(entry) = self.load_slot().await {
            let age = entry.age(now);
            if age < self.fresh_ttl {
                return Ok(snapshot(entry, CacheStatus::Hit, age));
            }
        }

        let _guard = self.refresh_guard.lock().await;

        // A refresh may have completed while this request waited for the guard.
        let now = Utc::now();
        let cached = self.load_slot().await;
        if let Some(entry) = &cached {
            let age = entry.age(now);
            if age < self.fresh_ttl {
                return Ok(snapshot(entry.clone(), CacheStatus::Hit, age));
            }
        }

        tracing::info!("Fetching fresh timeline for @{}", self.username);
        match source.latest_timeline(&self.username).await {
            Ok((user, timeline)) => {
                let entry = CachedTimeline {
                    data: assemble(user, timeline, now),
                    timestamp: now,
                };
                if let Err(err) = self.store.save(&entry).await {
                    tracing::warn!("Cannot persist timeline cache: {}", err);
                }
                tracing::info!("Stored {} tweets to cache", entry.data.tweets.len());
                Ok(snapshot(entry, CacheStatus::Miss, Duration::zero()))
            }
            Err(twitter_client::Error::UserNotFound(username)) => Err(Error::UserNotFound(username)),
            Err(err) => {
                if let Some(entry) = cached {
                    let age = entry.age(now);
                    if age < self.stale_ttl {
                        tracing::warn!("Upstream failed, serving stale timeline: {}", err);
                        return Ok(snapshot(entry, CacheStatus::Stale, age));
                    }
                }
                Err(Error::UpstreamUnavailable(err))
            }
        }
    }

    async fn load_slot(&self) -> Option<CachedTimeline> {
        match self.store.load().await {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("Cannot read timeline cache: {}", err);
                None
            }
        }
    }
}

fn snapshot(entry: CachedTimeline, status: CacheStatus, age: Duration) -> TimelineSnapshot {
    TimelineSnapshot {
        payload: entry.data,
        status,
        age,
    }
}

fn assemble(user: UserProfile, timeline: Timeline, now: DateTime<Utc>) -> TimelinePayload {
    let mut tweets = timeline.tweets;
    tweets.truncate(TIMELINE_KEEP_COUNT);
    TimelinePayload {
        user,
        tweets,
        media: timeline.media,
        cached_at: now,
    }
}
