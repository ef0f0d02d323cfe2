#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.artic.edu/api/v1";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://www.artic.edu/iiif/2";
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_USER_AGENT: &str = concat!("artic-client/", env!("CARGO_PKG_VERSION"));

const MAX_TIMEOUT_SECS: f64 = 300.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub image_base_url: String,
    /// Bound for the connectivity probe.
    pub probe_timeout: Duration,
    /// Bound for every data call.
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_image_base_url(mut self, url: impl Into<String>) -> Self {
        self.image_base_url = url.into();
        self
    }

    pub fn with_timeouts(mut self, probe: Duration, request: Duration) -> Self {
        self.probe_timeout = probe;
        self.request_timeout = request;
        self
    }

    /// Base URL without the trailing slash, so paths can be appended verbatim.
    pub fn api_base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    pub fn image_base(&self) -> &str {
        self.image_base_url.trim_end_matches('/')
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.api_base_url)?;
        validate_url("api.image_base_url", &self.image_base_url)?;
        validate_range(
            "timeouts.probe_seconds",
            self.probe_timeout.as_secs_f64(),
            0.001,
            MAX_TIMEOUT_SECS,
        )?;
        validate_range(
            "timeouts.request_seconds",
            self.request_timeout.as_secs_f64(),
            0.001,
            MAX_TIMEOUT_SECS,
        )?;
        validate_non_empty_string("http.user_agent", &self.user_agent)?;
        Ok(())
    }
}
