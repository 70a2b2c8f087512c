use axum::{extract::State, response::Json, routing::get, Router};

use zeke_feed::TimelinePayload;

use crate::{error::Result, state::AppState};

pub fn api_router() -> Router<AppState> {
    Router::new().route("/api/tweets", get(get_tweets))
}

/// The landing page's timeline section polls this endpoint.
async fn get_tweets(
    State(app_state): State<AppState>,
) -> Result<([(&'static str, String); 2], Json<TimelinePayload>)> {
    let snapshot = app_state.timeline.get_timeline().await?;
    let headers = [
        ("x-cache", snapshot.status.as_str().to_string()),
        ("x-cache-age", snapshot.age.num_seconds().max(0).to_string()),
    ];
    Ok((headers, Json(snapshot.payload)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::state::AppState;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::{Duration, Utc};
    use std::sync::Arc;
    use tower::ServiceExt;
    use twitter_client::{PublicMetrics, Timeline, Tweet, UserProfile};
    use zeke_feed::{MemoryStore, TimelineService, TweetSource};

    struct StubSource;

    #[async_trait]
    impl TweetSource for StubSource {
        async fn latest_timeline(&self, _username: &str) -> twitter_client::Result<(UserProfile, Timeline)> {
            let user = UserProfile {
                id: "1".to_string(),
                name: "Zeke".to_string(),
                username: "ZekePrivacy".to_string(),
                profile_image_url: None,
            };
            let tweets = vec![Tweet {
                id: "10".to_string(),
                text: "gm, stay shielded".to_string(),
                created_at: Utc::now(),
                public_metrics: PublicMetrics {
                    retweet_count: 1,
                    reply_count: 2,
                    like_count: 3,
                    quote_count: 0,
                },
                attachments: None,
            }];
            Ok((user, Timeline { tweets, media: vec![] }))
        }
    }

    fn app(source: Option<Box<dyn TweetSource>>) -> Router {
        let service = TimelineService::new(
            source,
            Box::new(MemoryStore::new()),
            "ZekePrivacy",
            Duration::seconds(60),
            Duration::seconds(3600),
        );
        api_router().with_state(AppState {
            timeline: Arc::new(service),
        })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_get_tweets_returns_payload_with_cache_headers() {
        let app = app(Some(Box::new(StubSource)));
        let response = app
            .oneshot(Request::builder().uri("/api/tweets").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-cache"], "MISS");
        assert_eq!(response.headers()["x-cache-age"], "0");

        let json = body_json(response).await;
        assert_eq!(json["user"]["username"], "ZekePrivacy");
        assert_eq!(json["tweets"][0]["public_metrics"]["like_count"], 3);
        assert!(json["cachedAt"].is_string());
    }

    #[tokio::test]
    async fn test_get_tweets_without_credentials_is_not_configured() {
        let app = app(None);
        let response = app
            .oneshot(Request::builder().uri("/api/tweets").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Twitter API not configured");
    }
}
