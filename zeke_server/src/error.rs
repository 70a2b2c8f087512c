use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Value};

use zeke_feed::Error as FeedError;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug)]
pub struct ServerError(anyhow::Error);

impl<E> From<E> for ServerError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        let (status, body) = self.response_parts();
        (status, Json(body)).into_response()
    }
}

impl ServerError {
    /// Error bodies keep the exact strings the landing page matches on.
    fn response_parts(&self) -> (StatusCode, Value) {
        for cause in self.0.chain() {
            if let Some(err) = cause.downcast_ref::<FeedError>() {
                return match err {
                    FeedError::NotConfigured => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        json!({"error": "Twitter API not configured"}),
                    ),
                    FeedError::UserNotFound(_) => (StatusCode::NOT_FOUND, json!({"error": "User not found"})),
                    FeedError::UpstreamUnavailable(detail) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        json!({"error": "Failed to fetch tweets", "details": detail.to_string()}),
                    ),
                    _ => (StatusCode::INTERNAL_SERVER_ERROR, json!({"error": "Internal server error"})),
                };
            }
        }
        (StatusCode::INTERNAL_SERVER_ERROR, json!({"error": "Internal server error"}))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parts(err: FeedError) -> (StatusCode, Value) {
        ServerError::from(err).response_parts()
    }

    #[test]
    fn test_not_configured_maps_to_500() {
        let (status, body) = parts(FeedError::NotConfigured);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Twitter API not configured");
        assert!(body.get("details").is_none());
    }

    #[test]
    fn test_user_not_found_maps_to_404() {
        let (status, body) = parts(FeedError::UserNotFound("nobody".to_string()));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");
    }

    #[test]
    fn test_upstream_unavailable_maps_to_500_with_details() {
        let (status, body) = parts(FeedError::UpstreamUnavailable(twitter_client::Error::Upstream {
            status: 503,
            body: "over capacity".to_string(),
        }));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to fetch tweets");
        assert!(body["details"].as_str().unwrap().contains("503"));
    }

    #[test]
    fn test_unrelated_errors_map_to_500() {
        let err = ServerError::from(anyhow::anyhow!("boom"));
        let (status, body) = err.response_parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }
}
