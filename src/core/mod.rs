pub mod browser_strategy;
pub mod library_strategy;
pub mod manual;
pub mod orchestrator;

pub use crate::domain::model::{BatchReport, ContractFile, FileOutcome, RunSummary, StrategyOutcome};
pub use crate::domain::ports::{HtmlRenderer, ProcessRunner, Strategy};
pub use crate::utils::error::Result;

use std::fmt::Display;
use std::io::Write;

/// 寫一行進度訊息；輸出端壞掉（例如管線關閉）不應中斷轉換
pub(crate) fn say(out: &mut dyn Write, line: impl Display) {
    if let Err(e) = writeln!(out, "{}", line) {
        tracing::warn!("Failed to write progress line: {}", e);
    }
}
