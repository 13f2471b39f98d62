//! HTTP client for the review service

use std::time::Duration;

use reqwest::Url;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{
    ErrorBody, PredictRequest, Prediction, SearchRequest, Source, Summary, SummaryRequest,
    TopLists,
};
use crate::error::RevuError;

/// Errors from a single service call
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Connection refused, DNS failure, timeout
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx status
    #[error("Service error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Body was not the expected JSON shape
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),

    /// Superseded before the service answered
    #[error("Request cancelled")]
    Cancelled,
}

/// Client for the review service endpoints
#[derive(Debug, Clone)]
pub struct ReviewClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ReviewClient {
    /// Create a client rooted at `base_url`
    ///
    /// A path prefix in the base URL is kept: `http://host/api` sends
    /// searches to `http://host/api/search`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RevuError> {
        let base_url = parse_base_url(base_url)?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RevuError::HttpClient(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Item names containing `query`, in service order
    pub async fn search(
        &self,
        query: &str,
        source: Option<Source>,
    ) -> Result<Vec<String>, ServiceError> {
        self.post("search", Some(&SearchRequest { query, source }))
            .await
    }

    pub async fn summary(
        &self,
        selected: &str,
        source: Option<Source>,
    ) -> Result<Summary, ServiceError> {
        self.post("summary", Some(&SummaryRequest { selected, source }))
            .await
    }

    /// Classify and store a review for `selected`
    pub async fn predict(
        &self,
        review: &str,
        selected: Option<&str>,
    ) -> Result<Prediction, ServiceError> {
        self.post("predict", Some(&PredictRequest { review, selected }))
            .await
    }

    pub async fn top_places(&self) -> Result<TopLists, ServiceError> {
        self.post::<(), _>("top-places", None).await
    }

    async fn post<B, T>(&self, endpoint: &str, body: Option<&B>) -> Result<T, ServiceError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let request = match body {
            Some(body) => self.http.post(url).json(body),
            None => self.http.post(url).header(CONTENT_TYPE, "application/json"),
        };

        log::debug!("POST /{}", endpoint);
        let response = request
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ServiceError::Api {
                code: status.as_u16(),
                message: error_message(&text, status.canonical_reason()),
            });
        }

        serde_json::from_str(&text).map_err(|e| ServiceError::InvalidResponse(e.to_string()))
    }
}

fn parse_base_url(raw: &str) -> Result<Url, RevuError> {
    let invalid = |reason: String| RevuError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("cannot be used as a base URL".to_string()));
    }

    // Url::join replaces the last path segment unless the path ends in '/'
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Prefer the service's `{"error": ...}` body, then the raw body, then the
/// status reason
fn error_message(body: &str, reason: Option<&str>) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.chars().take(200).collect();
    }
    reason.unwrap_or("Unknown error").to_string()
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
