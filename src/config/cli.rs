use crate::app::export::OutputFormat;
use crate::config::toml_config::TomlConfig;
use crate::config::ClientConfig;
use crate::domain::model::DEFAULT_IMAGE_SIZE;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "artic")]
#[command(about = "Browse the Art Institute of Chicago collection from the terminal")]
pub struct Cli {
    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Override the API base URL")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "Override the IIIF image base URL")]
    pub image_base_url: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check that the API answers within the probe timeout
    Ping,

    /// List artworks page by page
    List {
        #[arg(long, default_value = "10")]
        limit: u32,
        #[arg(long, default_value = "1")]
        page: u32,
        #[arg(long, help = "Comma-separated fields to return")]
        fields: Option<String>,
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Show one artwork in detail
    Get { id: i64 },

    /// Full-text search
    Search {
        query: String,
        #[arg(long, default_value = "10")]
        limit: u32,
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Print the IIIF URL for an image id
    ImageUrl {
        image_id: String,
        #[arg(long, default_value = DEFAULT_IMAGE_SIZE)]
        size: String,
    },

    /// Featured gallery: artworks that have images
    Featured {
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// A random artwork from the first hundred pages
    Random,

    /// Exercise every endpoint once
    Smoke {
        #[arg(long, default_value = "1000", help = "Pause between requests")]
        pause_ms: u64,
    },
}

impl Cli {
    /// The `--config` file, if one was given.
    pub fn file_config(&self) -> Result<Option<TomlConfig>> {
        self.config
            .as_ref()
            .map(|path| TomlConfig::from_file(path))
            .transpose()
    }

    /// `--json-logs` or `json = true` under `[logging]`.
    pub fn use_json_logs(&self, file: Option<&TomlConfig>) -> bool {
        self.json_logs || file.is_some_and(TomlConfig::json_logs)
    }

    pub fn client_config(&self) -> Result<ClientConfig> {
        self.client_config_with(self.file_config()?.as_ref())
    }

    /// Defaults, then the config file, then command-line overrides.
    pub fn client_config_with(&self, file: Option<&TomlConfig>) -> Result<ClientConfig> {
        let mut config = match file {
            Some(file) => file.to_client_config()?,
            None => ClientConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.api_base_url = base_url.clone();
        }
        if let Some(image_base_url) = &self.image_base_url {
            config.image_base_url = image_base_url.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ArticError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_list_defaults() {
        let cli = Cli::parse_from(["artic", "list"]);
        match cli.command {
            Command::List {
                limit,
                page,
                fields,
                format,
            } => {
                assert_eq!(limit, 10);
                assert_eq!(page, 1);
                assert!(fields.is_none());
                assert_eq!(format, OutputFormat::Table);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_overrides_apply_after_defaults() {
        let cli = Cli::parse_from([
            "artic",
            "--base-url",
            "http://localhost:9000/api/v1",
            "search",
            "water lilies",
            "--format",
            "csv",
        ]);
        let config = cli.client_config().unwrap();
        assert_eq!(config.api_base_url, "http://localhost:9000/api/v1");
        assert!(matches!(
            cli.command,
            Command::Search { ref query, limit: 10, format: OutputFormat::Csv } if query == "water lilies"
        ));
    }

    #[test]
    fn test_logging_section_from_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[logging]\nlevel = \"debug\"\njson = true\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap();

        let cli = Cli::parse_from(["artic", "--config", path, "ping"]);
        let file = cli.file_config().unwrap();

        assert_eq!(file.as_ref().and_then(TomlConfig::log_level), Some("debug"));
        assert!(cli.use_json_logs(file.as_ref()));
        assert_eq!(cli.client_config_with(file.as_ref()).unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_json_logs_default_off() {
        let cli = Cli::parse_from(["artic", "ping"]);
        assert!(cli.file_config().unwrap().is_none());
        assert!(!cli.use_json_logs(None));
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let cli = Cli::parse_from(["artic", "--config", "/nonexistent/artic.toml", "ping"]);
        assert!(matches!(cli.file_config(), Err(ArticError::IoError(_))));
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let cli = Cli::parse_from(["artic", "--base-url", "ftp://nope", "ping"]);
        assert!(cli.client_config().is_err());
    }
}
