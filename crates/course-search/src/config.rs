use std::time::Duration;

use course_common::mock::DEFAULT_FALLBACK_DELAY;
use course_common::search_api::SearchApiConfig;

use crate::args::Cli;
use crate::error::AppError;
use crate::theme::Theme;

#[derive(Debug, Clone)]
pub struct Config {
    pub api: SearchApiConfig,
    /// Pause before mock results are returned for a failed search.
    pub fallback_delay: Duration,
    pub theme: Theme,
}

impl Config {
    /// Optional:
    /// - `COURSE_SEARCH_ENDPOINT`, `COURSE_SEARCH_TIMEOUT_SECS`,
    ///   `COURSE_SEARCH_MAX_ERROR_BODY_BYTES` (see [`SearchApiConfig::from_env`])
    /// - `COURSE_SEARCH_FALLBACK_DELAY_MS` (default: 800)
    /// - `COURSE_SEARCH_THEME` (default: "dark")
    pub fn from_env() -> Result<Self, AppError> {
        let fallback_delay = match std::env::var("COURSE_SEARCH_FALLBACK_DELAY_MS") {
            Ok(raw) => raw.trim().parse::<u64>().map(Duration::from_millis).map_err(|_| {
                AppError::Config(format!(
                    "COURSE_SEARCH_FALLBACK_DELAY_MS must be a whole number of milliseconds, got `{raw}`"
                ))
            })?,
            Err(_) => DEFAULT_FALLBACK_DELAY,
        };

        let theme = match std::env::var("COURSE_SEARCH_THEME") {
            Ok(raw) => raw
                .parse::<Theme>()
                .map_err(|e| AppError::Config(format!("COURSE_SEARCH_THEME: {e}")))?,
            Err(_) => Theme::default(),
        };

        Ok(Self {
            api: SearchApiConfig::from_env(),
            fallback_delay,
            theme,
        })
    }

    /// Command-line flags win over the environment. A zero HTTP timeout is
    /// rejected, from either source.
    pub fn with_cli(mut self, cli: &Cli) -> Result<Self, AppError> {
        if let Some(endpoint) = &cli.endpoint {
            self.api.endpoint = endpoint.clone();
        }
        if let Some(secs) = cli.timeout {
            self.api.timeout = Duration::from_secs(secs);
        }
        if let Some(theme) = cli.theme {
            self.theme = theme;
        }
        if self.api.timeout.is_zero() {
            return Err(AppError::Config(
                "HTTP timeout must be at least one second".to_string(),
            ));
        }
        Ok(self)
    }
}
