//! HTTP-backed feed source.
//!
//! Talks to a running Amoria server over its public notification API.
//! Used by the `watch` CLI command; in-process callers use
//! [`crate::LocalFeedSource`] instead.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use amoria_core::error::{AppError, ErrorKind};
use amoria_core::result::AppResult;
use amoria_entity::notification::{Notification, NotificationCounts, NotificationKey};

use crate::source::FeedSource;

const REQUEST_TIMEOUT_SECONDS: u64 = 10;

/// Success envelope wrapping every API payload.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    code: String,
    message: String,
}

#[derive(Debug, Deserialize)]
struct MarkReadData {
    navigate_to: String,
}

#[derive(Debug, Deserialize)]
struct MarkAllData {
    marked: u64,
}

/// [`FeedSource`] implementation over the server's notification API.
#[derive(Debug, Clone)]
pub struct ApiFeedSource {
    client: Client,
    base_url: String,
    token: String,
}

impl ApiFeedSource {
    /// Create a source against `base_url`, authenticating with `token`.
    pub fn new(base_url: &str, token: impl Into<String>) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn decode<T: DeserializeOwned>(&self, response: reqwest::Response) -> AppResult<T> {
        if !response.status().is_success() {
            return Err(error_from(response).await);
        }
        let envelope: Envelope<T> = response.json().await.map_err(|e| {
            AppError::with_source(ErrorKind::Upstream, "Failed to decode API response", e)
        })?;
        Ok(envelope.data)
    }

    async fn expect_success(&self, response: reqwest::Response) -> AppResult<()> {
        if !response.status().is_success() {
            return Err(error_from(response).await);
        }
        Ok(())
    }
}

#[async_trait]
impl FeedSource for ApiFeedSource {
    async fn fetch_counts(&self) -> AppResult<NotificationCounts> {
        let response = self
            .client
            .get(self.url("/api/notifications/counts"))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(request_failed)?;
        self.decode(response).await
    }

    async fn fetch_feed(&self, limit: Option<u32>) -> AppResult<Vec<Notification>> {
        let mut request = self
            .client
            .get(self.url("/api/notifications"))
            .bearer_auth(&self.token);
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }
        let response = request.send().await.map_err(request_failed)?;
        self.decode(response).await
    }

    async fn mark_read(&self, key: NotificationKey) -> AppResult<String> {
        let response = self
            .client
            .put(self.url(&format!("/api/notifications/{key}/read")))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(request_failed)?;
        let data: MarkReadData = self.decode(response).await?;
        Ok(data.navigate_to)
    }

    async fn mark_all_read(&self) -> AppResult<u64> {
        let response = self
            .client
            .put(self.url("/api/notifications/read-all"))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(request_failed)?;
        let data: MarkAllData = self.decode(response).await?;
        Ok(data.marked)
    }

    async fn dismiss(&self, key: NotificationKey) -> AppResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/notifications/{key}")))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(request_failed)?;
        self.expect_success(response).await
    }
}

fn request_failed(error: reqwest::Error) -> AppError {
    AppError::with_source(ErrorKind::Upstream, "Feed API request failed", error)
}

/// Map a non-2xx response to an [`AppError`], preferring the server's
/// own error message when the body parses.
async fn error_from(response: reqwest::Response) -> AppError {
    let status = response.status();
    let kind = kind_for_status(status);
    let message = match response.json::<ErrorEnvelope>().await {
        Ok(envelope) => envelope.error.message,
        Err(_) => format!("Feed API returned HTTP {status}"),
    };
    AppError::new(kind, message)
}

fn kind_for_status(status: StatusCode) -> ErrorKind {
    match status {
        StatusCode::UNAUTHORIZED => ErrorKind::Unauthorized,
        StatusCode::FORBIDDEN => ErrorKind::Forbidden,
        StatusCode::NOT_FOUND => ErrorKind::NotFound,
        StatusCode::BAD_REQUEST => ErrorKind::Validation,
        _ => ErrorKind::Upstream,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let source = ApiFeedSource::new("http://localhost:8080/", "token").unwrap();
        assert_eq!(
            source.url("/api/notifications/counts"),
            "http://localhost:8080/api/notifications/counts"
        );
    }

    #[test]
    fn test_status_kind_mapping() {
        assert_eq!(
            kind_for_status(StatusCode::UNAUTHORIZED),
            ErrorKind::Unauthorized
        );
        assert_eq!(kind_for_status(StatusCode::FORBIDDEN), ErrorKind::Forbidden);
        assert_eq!(kind_for_status(StatusCode::NOT_FOUND), ErrorKind::NotFound);
        assert_eq!(
            kind_for_status(StatusCode::BAD_REQUEST),
            ErrorKind::Validation
        );
        assert_eq!(
            kind_for_status(StatusCode::INTERNAL_SERVER_ERROR),
            ErrorKind::Upstream
        );
    }

    #[test]
    fn test_envelope_shapes_match_the_wire() {
        let counts: Envelope<NotificationCounts> = serde_json::from_str(
            r#"{"data":{"matches":1,"messages":2,"favorites":0,"match_requests":3}}"#,
        )
        .unwrap();
        assert_eq!(counts.data.total(), 6);

        let mark: Envelope<MarkReadData> =
            serde_json::from_str(r#"{"data":{"navigate_to":"/messages"}}"#).unwrap();
        assert_eq!(mark.data.navigate_to, "/messages");

        let error: ErrorEnvelope =
            serde_json::from_str(r#"{"error":{"code":"FORBIDDEN","message":"Admin only"}}"#)
                .unwrap();
        assert_eq!(error.error.message, "Admin only");
    }
}
