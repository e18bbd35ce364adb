//! Classification of unsuccessful API responses.
//!
//! Lookups that fail are never retried; the classification only serves to
//! explain in the logs why a piece of release metadata was omitted.

use reqwest::{Response, StatusCode};

const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

/// An API request that completed with a non-success status.
#[derive(Debug, PartialEq)]
pub enum ApiError {
    /// Rate limit exceeded (HTTP 403 with no remaining quota, or 429)
    RateLimitExceeded(String),
    /// Authentication failed (HTTP 401)
    AuthenticationFailed(String),
    /// Resource not found (HTTP 404)
    NotFound(String),
    /// Forbidden access (HTTP 403 non-rate-limit)
    Forbidden(String),
    /// Other 4xx responses
    ClientError(String),
    /// 5xx responses
    ServerError(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::RateLimitExceeded(msg) => {
                write!(
                    f,
                    "Rate limit exceeded: {}. Try again later or set GITHUB_TOKEN environment variable.",
                    msg
                )
            }
            ApiError::AuthenticationFailed(msg) => {
                write!(f, "Authentication failed: {}. Check your GITHUB_TOKEN.", msg)
            }
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Forbidden(msg) => {
                write!(f, "Access forbidden: {}. You may need authentication.", msg)
            }
            ApiError::ClientError(msg) => write!(f, "Request error: {}", msg),
            ApiError::ServerError(msg) => write!(f, "Server error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Classify a response. Returns `None` for success statuses.
    pub fn from_response(response: &Response) -> Option<ApiError> {
        let status = response.status();
        if status.is_success() {
            return None;
        }

        let quota_exhausted = response
            .headers()
            .get(RATE_LIMIT_REMAINING)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.trim() == "0");

        Some(classify_status(status, quota_exhausted, response.url().path()))
    }
}

fn classify_status(status: StatusCode, quota_exhausted: bool, path: &str) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::AuthenticationFailed(format!(
            "Invalid or missing authentication token for {}",
            path
        )),
        StatusCode::FORBIDDEN if quota_exhausted => {
            ApiError::RateLimitExceeded("GitHub API rate limit exceeded".to_string())
        }
        StatusCode::FORBIDDEN => ApiError::Forbidden(format!("Access to {} is forbidden", path)),
        StatusCode::TOO_MANY_REQUESTS => {
            ApiError::RateLimitExceeded("Too many requests".to_string())
        }
        StatusCode::NOT_FOUND => ApiError::NotFound(path.to_string()),
        s if s.is_client_error() => ApiError::ClientError(format!("HTTP {} error", s.as_u16())),
        s => ApiError::ServerError(format!("HTTP {} error", s.as_u16())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn response_with(
        status: usize,
        headers: &[(&'static str, &'static str)],
    ) -> (mockito::ServerGuard, Response) {
        let mut server = mockito::Server::new_async().await;
        let mut mock = server.mock("GET", "/resource").with_status(status);
        for (name, value) in headers {
            mock = mock.with_header(*name, *value);
        }
        let _mock = mock.create_async().await;

        let response = reqwest::Client::new()
            .get(format!("{}/resource", server.url()))
            .send()
            .await
            .unwrap();
        (server, response)
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::RateLimitExceeded("test".to_string());
        assert!(err.to_string().contains("Rate limit"));
        assert!(err.to_string().contains("GITHUB_TOKEN"));

        let err = ApiError::AuthenticationFailed("test".to_string());
        assert!(err.to_string().contains("Authentication"));

        let err = ApiError::NotFound("test".to_string());
        assert!(err.to_string().contains("Not found"));

        let err = ApiError::Forbidden("test".to_string());
        assert!(err.to_string().contains("forbidden"));

        let err = ApiError::ClientError("HTTP 400".to_string());
        assert!(err.to_string().contains("HTTP 400"));

        let err = ApiError::ServerError("HTTP 502".to_string());
        assert!(err.to_string().contains("Server error"));
    }

    #[tokio::test]
    async fn test_success_is_not_classified() {
        let (_server, response) = response_with(200, &[]).await;
        assert_eq!(ApiError::from_response(&response), None);
    }

    #[tokio::test]
    async fn test_classify_unauthorized() {
        let (_server, response) = response_with(401, &[]).await;
        assert!(matches!(
            ApiError::from_response(&response),
            Some(ApiError::AuthenticationFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_classify_forbidden() {
        let (_server, response) = response_with(403, &[("x-ratelimit-remaining", "12")]).await;
        assert!(matches!(
            ApiError::from_response(&response),
            Some(ApiError::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn test_classify_rate_limit_from_header() {
        let (_server, response) = response_with(403, &[("x-ratelimit-remaining", "0")]).await;
        assert!(matches!(
            ApiError::from_response(&response),
            Some(ApiError::RateLimitExceeded(_))
        ));
    }

    #[tokio::test]
    async fn test_classify_too_many_requests() {
        let (_server, response) = response_with(429, &[]).await;
        assert!(matches!(
            ApiError::from_response(&response),
            Some(ApiError::RateLimitExceeded(_))
        ));
    }

    #[tokio::test]
    async fn test_classify_not_found() {
        let (_server, response) = response_with(404, &[]).await;
        assert_eq!(
            ApiError::from_response(&response),
            Some(ApiError::NotFound("/resource".to_string()))
        );
    }

    #[tokio::test]
    async fn test_classify_other_client_error() {
        let (_server, response) = response_with(422, &[]).await;
        assert!(matches!(
            ApiError::from_response(&response),
            Some(ApiError::ClientError(_))
        ));
    }

    #[tokio::test]
    async fn test_classify_server_error() {
        let (_server, response) = response_with(503, &[]).await;
        assert!(matches!(
            ApiError::from_response(&response),
            Some(ApiError::ServerError(_))
        ));
    }
}
