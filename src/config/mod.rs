pub mod toml_config;

pub use toml_config::{BrowserCandidate, ConvertConfig};

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "contract-pdf")]
#[command(about = "Convert the HTML contracts to PDF")]
pub struct CliConfig {
    /// Directory holding the HTML contracts
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Optional TOML file overriding files, browsers and print flags
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_convert_config(&self) -> crate::Result<ConvertConfig> {
        match &self.config {
            Some(path) => ConvertConfig::from_file(path),
            None => Ok(ConvertConfig::default()),
        }
    }
}
