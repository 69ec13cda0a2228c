use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to run '{program}': {source}")]
    ProcessError {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Rendering {path} failed: {message}", path = input.display())]
    RenderError { input: PathBuf, message: String },
}

impl ConvertError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::IoError(e) => format!("File system problem: {}", e),
            ConvertError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            ConvertError::ConfigError { message } => message.clone(),
            ConvertError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            ConvertError::ProcessError { program, .. } => {
                format!("Could not start '{}'", program)
            }
            ConvertError::RenderError { input, .. } => {
                format!("Could not render {}", input.display())
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvertError::IoError(_) => "Check that the directory exists and is writable",
            ConvertError::TomlError(_) | ConvertError::ConfigError { .. } => {
                "Fix the configuration file or run without --config to use the defaults"
            }
            ConvertError::InvalidConfigValueError { .. } => {
                "Input files must be non-empty .html names and at least one browser must be listed"
            }
            ConvertError::ProcessError { .. } => "Make sure the browser executable can be launched",
            ConvertError::RenderError { .. } => "Open the HTML file in a browser and print it to PDF",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
