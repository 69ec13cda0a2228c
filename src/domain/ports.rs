use crate::domain::model::{ContractFile, StrategyKind, StrategyOutcome};
use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;

/// 將單一 HTML 檔渲染成 PDF 的能力
pub trait HtmlRenderer {
    fn name(&self) -> &str;
    fn render(&self, input: &Path, output: &Path) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// None 表示程序被訊號終止
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

pub trait ProcessRunner {
    /// 執行並等待子程序結束。無法啟動時回傳 `ConvertError::ProcessError`
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput>;
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for &T {
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput> {
        (**self).run(program, args)
    }
}

pub trait Strategy {
    fn kind(&self) -> StrategyKind;

    /// 完成時顯示的名稱，例如 "Conversion completed with browser!"
    fn label(&self) -> String;

    fn attempt(&self, files: &[ContractFile], out: &mut dyn Write) -> StrategyOutcome;
}
