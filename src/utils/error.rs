use std::error::Error as StdError;
use std::time::Duration;
use thiserror::Error;

pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Substrings that mark a transport failure as a timeout even when the
/// underlying stack does not say so through its type.
const TIMEOUT_PATTERNS: &[&str] = &["timed out", "err_timed_out", "deadline has elapsed"];

const CROSS_ORIGIN_PATTERNS: &[&str] = &["cors", "cross-origin"];

#[derive(Error, Debug)]
pub enum ArticError {
    #[error("{message}")]
    TimeoutError {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("HTTP error! status: {status} - {reason}")]
    HttpError { status: u16, reason: String },

    #[error("Network error: {cause}")]
    NetworkError {
        cause: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Failed to decode response: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Timeout,
    Http,
    Network,
    Data,
    Configuration,
    Io,
}

impl ArticError {
    /// The request bound elapsed before a response arrived.
    pub fn timeout_after(bound: Duration) -> Self {
        Self::TimeoutError {
            message: format!("API request timed out after {} seconds", bound.as_secs_f32()),
            source: None,
        }
    }

    /// Classify a transport-level failure by walking its message chain.
    ///
    /// Timeout-looking messages become `TimeoutError`, cross-origin rejections
    /// become a `NetworkError` with a readable cause, anything else is a plain
    /// `NetworkError`. The original error is kept as the source.
    pub fn from_transport<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let chain = error_chain_text(&err);
        let lowered = chain.to_lowercase();

        if TIMEOUT_PATTERNS.iter().any(|p| lowered.contains(p)) {
            return Self::TimeoutError {
                message: "Network timeout. The Art Institute API may be temporarily unavailable."
                    .to_string(),
                source: Some(Box::new(err)),
            };
        }

        let cause = if CROSS_ORIGIN_PATTERNS.iter().any(|p| lowered.contains(p)) {
            "Cross-origin request blocked".to_string()
        } else {
            chain
        };

        Self::NetworkError {
            cause,
            source: Some(Box::new(err)),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::TimeoutError { .. })
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TimeoutError { .. } => ErrorCategory::Timeout,
            Self::HttpError { .. } => ErrorCategory::Http,
            Self::NetworkError { .. } => ErrorCategory::Network,
            Self::DecodeError(_) | Self::ValidationError { .. } => ErrorCategory::Data,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) | Self::CsvError(_) => ErrorCategory::Io,
        }
    }

    /// Whether repeating the same call could reasonably succeed.
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::TimeoutError { .. } | Self::NetworkError { .. } => true,
            Self::HttpError { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::TimeoutError { .. } => {
                "API request timed out. Please check your internet connection and try again."
                    .to_string()
            }
            Self::HttpError { status: 404, .. } => "The requested artwork was not found.".to_string(),
            Self::HttpError { status, .. } => {
                format!("The Art Institute API returned an error (HTTP {}).", status)
            }
            Self::NetworkError { cause, .. } => format!("Failed to reach the API: {}", cause),
            Self::DecodeError(_) => "The API returned a response that could not be read.".to_string(),
            Self::ValidationError { message } => message.clone(),
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            Self::IoError(_) | Self::CsvError(_) => format!("Could not write output: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Timeout => {
                "Run `artic ping` to check connectivity; the API may be temporarily unavailable"
            }
            ErrorCategory::Http => "Check the artwork id or query, then retry later for 5xx errors",
            ErrorCategory::Network => "Check your internet connection and the configured base URL",
            ErrorCategory::Data => "Verify the request parameters and the API base URL",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::Io => "Check that the output destination is writable",
        }
    }
}

fn error_chain_text(err: &(dyn StdError + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut current = err.source();
    while let Some(source) = current {
        let text = source.to_string();
        if !parts.iter().any(|p| p.contains(&text)) {
            parts.push(text);
        }
        current = source.source();
    }
    parts.join(": ")
}

pub type Result<T> = std::result::Result<T, ArticError>;
