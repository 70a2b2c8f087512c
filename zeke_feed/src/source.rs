use async_trait::async_trait;

use twitter_client::{Timeline, TwitterClient, UserProfile};

/// Number of posts requested from upstream per refresh.
pub(crate) const TIMELINE_FETCH_COUNT: u32 = 5;

/// Upstream capable of producing the latest timeline for a username.
/// The service is written against this seam so tests can stub the API.
#[async_trait]
pub trait TweetSource: Send + Sync {
    async fn latest_timeline(&self, username: &str) -> twitter_client::Result<(UserProfile, Timeline)>;
}

#[async_trait]
impl TweetSource for TwitterClient {
    /// Resolve the username to a user id, then fetch the most recent posts
    /// with their attached media. Both calls are signed.
    async fn latest_timeline(&self, username: &str) -> twitter_client::Result<(UserProfile, Timeline)> {
        let user = self.user_by_username(username).await?;
        let timeline = self.user_tweets(&user.id, TIMELINE_FETCH_COUNT).await?;
        Ok((user, timeline))
    }
}
