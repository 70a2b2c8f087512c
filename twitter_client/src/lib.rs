mod auth;
mod consts;
mod error;
mod response;
mod result;

use reqwest::{header, Client, Response, Url};
use std::time::Duration;

use consts::*;
use response::{TimelineResponse, UserLookupResponse};
pub use result::*;

pub use crate::auth::{Credentials, OAuth1Signer, Signer};
pub use crate::error::Error;
pub use crate::error::Result;

/// Client for the Twitter v2 API. Every request carries a fresh OAuth 1.0a
/// signature computed by the signer.
pub struct TwitterClient {
    client: reqwest::Client,
    signer: Box<dyn Signer>,
}

impl TwitterClient {
    pub fn new(credentials: Credentials) -> Result<TwitterClient> {
        Self::with_signer(Box::new(OAuth1Signer::new(credentials)))
    }

    pub fn with_signer(signer: Box<dyn Signer>) -> Result<TwitterClient> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(TwitterClient { client, signer })
    }

    /// Resolve a username to its profile.
    pub async fn user_by_username(&self, username: &str) -> Result<UserProfile> {
        let url = Url::parse_with_params(
            &format!("{}/users/by/username/{}", API_BASE, username),
            [("user.fields", USER_FIELDS)],
        )?;
        let response: UserLookupResponse = self.signed_get(url).await?;
        response.data.ok_or_else(|| Error::UserNotFound(username.to_string()))
    }

    /// Fetch the user's most recent posts, including attached media.
    pub async fn user_tweets(&self, user_id: &str, count: u32) -> Result<Timeline> {
        let url = Url::parse_with_params(
            &format!("{}/users/{}/tweets", API_BASE, user_id),
            [
                ("max_results", count.to_string().as_str()),
                ("tweet.fields", TWEET_FIELDS),
                ("expansions", TWEET_EXPANSIONS),
                ("media.fields", MEDIA_FIELDS),
            ],
        )?;
        let response: TimelineResponse = self.signed_get(url).await?;
        Ok(response.into())
    }
}

impl TwitterClient {
    async fn signed_get<R>(&self, url: Url) -> Result<R>
    where
        R: serde::de::DeserializeOwned,
    {
        let authorization = self.signer.authorization("GET", &url);
        tracing::debug!("GET {}", url);
        let response: Response = self
            .client
            .get(url)
            .header(header::AUTHORIZATION, authorization)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        let content = response.text().await?;
        if !status.is_success() {
            return Err(Error::Upstream {
                status: status.as_u16(),
                body: content,
            });
        }
        serde_json::from_str(&content).map_err(|e| e.into())
    }
}
