use std::time::Duration;

use reqwest::{StatusCode, Url};
use tracing::{debug, warn};

use crate::course::Course;

pub const DEFAULT_ENDPOINT: &str =
    "https://srivishwaa55-course-recommendation-api.hf.space/search";

#[derive(Clone, Debug)]
pub struct SearchApiConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub max_error_body_bytes: usize,
}

impl Default for SearchApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
            max_error_body_bytes: 8 * 1024,
        }
    }
}

impl SearchApiConfig {
    /// Optional:
    /// - `COURSE_SEARCH_ENDPOINT` (default: the hosted recommendation API)
    /// - `COURSE_SEARCH_TIMEOUT_SECS` (default: 30)
    /// - `COURSE_SEARCH_MAX_ERROR_BODY_BYTES` (default: 8192)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let endpoint = std::env::var("COURSE_SEARCH_ENDPOINT").unwrap_or(defaults.endpoint);

        let timeout = std::env::var("COURSE_SEARCH_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        let max_error_body_bytes = std::env::var("COURSE_SEARCH_MAX_ERROR_BODY_BYTES")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(defaults.max_error_body_bytes);

        Self {
            endpoint,
            timeout,
            max_error_body_bytes,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SearchApiError {
    #[error("invalid search endpoint {endpoint}: {message}")]
    InvalidEndpoint { endpoint: String, message: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid response JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("upstream returned error: status={status} body={body}")]
    Upstream { status: StatusCode, body: String },
}

/// Thin client for the remote course search endpoint.
///
/// One GET per search, `q` as the only query parameter, a JSON array of
/// [`Course`] expected back.
#[derive(Clone)]
pub struct SearchApiClient {
    config: SearchApiConfig,
    endpoint: Url,
    http: reqwest::Client,
}

impl SearchApiClient {
    pub fn new(config: SearchApiConfig) -> Result<Self, SearchApiError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| SearchApiError::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
            message: e.to_string(),
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(SearchApiError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                message: format!("unsupported scheme `{}`", endpoint.scheme()),
            });
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("course-search/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            config,
            endpoint,
            http,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Course>, SearchApiError> {
        debug!(endpoint = %self.endpoint, query, "sending search request");
        let resp = self
            .http
            .get(self.endpoint.clone())
            .query(&[("q", query)])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::to_upstream_error(resp, self.config.max_error_body_bytes).await);
        }

        let body = resp.bytes().await?;
        let courses: Vec<Course> = serde_json::from_slice(&body)?;
        debug!(results = courses.len(), "search response decoded");
        Ok(courses)
    }

    async fn to_upstream_error(resp: reqwest::Response, max_error_body_bytes: usize) -> SearchApiError {
        let status = resp.status();
        let body = read_limited_text(resp, max_error_body_bytes).await;
        SearchApiError::Upstream { status, body }
    }
}

async fn read_limited_text(resp: reqwest::Response, max_bytes: usize) -> String {
    match resp.bytes().await {
        Ok(mut b) => {
            if b.len() > max_bytes {
                b.truncate(max_bytes);
            }
            String::from_utf8_lossy(&b).to_string()
        }
        Err(e) => {
            warn!(error = %e, "failed to read upstream error body");
            "<failed to read error body>".to_string()
        }
    }
}
