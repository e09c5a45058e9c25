use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use course_common::course::Course;
use course_common::mock::mock_courses;
use course_common::search_api::SearchApiClient;

use crate::config::Config;
use crate::error::AppError;

/// Where a set of results came from. Callers render both the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Live(Vec<Course>),
    Fallback(Vec<Course>),
}

impl SearchOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, SearchOutcome::Fallback(_))
    }

    pub fn into_courses(self) -> Vec<Course> {
        match self {
            SearchOutcome::Live(courses) | SearchOutcome::Fallback(courses) => courses,
        }
    }
}

pub struct SearchEngine {
    client: Arc<SearchApiClient>,
    fallback_delay: Duration,
}

impl SearchEngine {
    pub fn new(client: Arc<SearchApiClient>, fallback_delay: Duration) -> Self {
        Self {
            client,
            fallback_delay,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = SearchApiClient::new(config.api.clone())?;
        Ok(Self::new(Arc::new(client), config.fallback_delay))
    }

    /// Runs one search. Backend failures are logged and answered with the
    /// mock catalogue after `fallback_delay`; this never fails.
    pub async fn search(&self, query: &str) -> SearchOutcome {
        match self.client.search(query).await {
            Ok(courses) => {
                info!(query, results = courses.len(), "search completed");
                SearchOutcome::Live(courses)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    endpoint = %self.client.endpoint(),
                    query,
                    "search backend unavailable, returning mock courses"
                );
                tokio::time::sleep(self.fallback_delay).await;
                SearchOutcome::Fallback(mock_courses())
            }
        }
    }
}
