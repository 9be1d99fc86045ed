use crate::config::ClientConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    Palette,
    TextColor,
    Combo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "image-palette")]
#[command(about = "Derive a palette and readable text colors for a hosted image")]
pub struct CliConfig {
    /// Image URL on a service that answers `?palette=json`
    pub url: String,

    #[arg(long, value_enum, default_value = "combo")]
    pub mode: OutputMode,

    #[arg(long, help = "TOML file with client settings")]
    pub config: Option<String>,

    #[arg(long, help = "Overrides the config file timeout")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, value_enum, default_value = "compact")]
    pub log_format: LogFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Pretty-print the JSON result")]
    pub pretty: bool,
}

impl CliConfig {
    /// Config file (or defaults) with command line overrides applied.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };
        if let Some(timeout_seconds) = self.timeout_seconds {
            config.timeout_seconds = timeout_seconds;
        }
        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("url", &self.url)
    }
}
