pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{try_load_renderer, SystemRunner};
pub use config::{BrowserCandidate, ConvertConfig};
pub use crate::core::orchestrator::Orchestrator;
pub use domain::model::{
    BatchReport, ContractFile, FileOutcome, RunSummary, StrategyKind, StrategyOutcome,
};
pub use domain::ports::{HtmlRenderer, ProcessOutput, ProcessRunner, Strategy};
pub use utils::error::{ConvertError, Result};
