use crate::config::ClientConfig;
use crate::utils::error::{ArticError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// On-disk configuration, e.g.
///
/// ```toml
/// [api]
/// base_url = "https://api.artic.edu/api/v1"
/// image_base_url = "https://www.artic.edu/iiif/2"
///
/// [timeouts]
/// probe_seconds = 5
/// request_seconds = 10
///
/// [http]
/// user_agent = "${ARTIC_USER_AGENT}"
///
/// [logging]
/// level = "debug"
/// json = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: Option<ApiConfig>,
    pub timeouts: Option<TimeoutConfig>,
    pub http: Option<HttpConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub image_base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub probe_seconds: Option<f64>,
    pub request_seconds: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ArticError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ArticError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left untouched so validation can point at them.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Layer the file over the built-in defaults.
    pub fn to_client_config(&self) -> Result<ClientConfig> {
        let mut config = ClientConfig::default();

        if let Some(api) = &self.api {
            if let Some(base_url) = &api.base_url {
                config.api_base_url = base_url.clone();
            }
            if let Some(image_base_url) = &api.image_base_url {
                config.image_base_url = image_base_url.clone();
            }
        }

        if let Some(timeouts) = &self.timeouts {
            if let Some(secs) = timeouts.probe_seconds {
                config.probe_timeout = seconds("timeouts.probe_seconds", secs)?;
            }
            if let Some(secs) = timeouts.request_seconds {
                config.request_timeout = seconds("timeouts.request_seconds", secs)?;
            }
        }

        if let Some(user_agent) = self.http.as_ref().and_then(|h| h.user_agent.as_ref()) {
            config.user_agent = user_agent.clone();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

fn seconds(field: &str, secs: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(secs).map_err(|e| ArticError::InvalidConfigValueError {
        field: field.to_string(),
        value: secs.to_string(),
        reason: e.to_string(),
    })
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.to_client_config().map(|_| ())
    }
}
