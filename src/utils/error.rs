use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Palette request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Palette endpoint {url} answered with status {status}")]
    HttpStatusError { status: u16, url: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Malformed palette: {message}")]
    MalformedPaletteError { message: String },

    #[error("Palette has no swatches")]
    EmptyPaletteError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The image service could not be reached or refused the request.
    Fetch,
    /// The service answered, but with something that is not a usable palette.
    Data,
    Config,
}

impl PaletteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PaletteError::RequestError(_) | PaletteError::HttpStatusError { .. } => {
                ErrorCategory::Fetch
            }
            PaletteError::SerializationError(_)
            | PaletteError::MalformedPaletteError { .. }
            | PaletteError::EmptyPaletteError => ErrorCategory::Data,
            PaletteError::InvalidUrlError(_)
            | PaletteError::IoError(_)
            | PaletteError::TomlError(_)
            | PaletteError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PaletteError::RequestError(e) if e.is_timeout() => {
                "The image service did not answer in time".to_string()
            }
            PaletteError::RequestError(_) => "Could not reach the image service".to_string(),
            PaletteError::HttpStatusError { status, .. } => {
                format!("The image service refused the palette request (HTTP {})", status)
            }
            PaletteError::SerializationError(_) | PaletteError::MalformedPaletteError { .. } => {
                "The image service returned an unreadable palette".to_string()
            }
            PaletteError::EmptyPaletteError => "The image palette contains no colors".to_string(),
            PaletteError::InvalidUrlError(_) => "The image URL is not valid".to_string(),
            PaletteError::IoError(_) | PaletteError::TomlError(_) => {
                "The configuration file could not be loaded".to_string()
            }
            PaletteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PaletteError>;
