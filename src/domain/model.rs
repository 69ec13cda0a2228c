use std::fmt;
use std::path::{Path, PathBuf};

/// 一份待轉換的合約：HTML 輸入與同名的 PDF 輸出
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractFile {
    pub html: PathBuf,
    pub pdf: PathBuf,
}

impl ContractFile {
    pub fn new(base_dir: &Path, file_name: &str) -> Self {
        let html = base_dir.join(file_name);
        let pdf = html.with_extension("pdf");
        Self { html, pdf }
    }

    pub fn exists(&self) -> bool {
        self.html.is_file()
    }

    pub fn html_name(&self) -> String {
        file_name(&self.html)
    }

    pub fn pdf_name(&self) -> String {
        file_name(&self.pdf)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Converted { pdf: PathBuf },
    NotFound { html: PathBuf },
    Failed { html: PathBuf, error: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub files: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn push(&mut self, outcome: FileOutcome) {
        self.files.push(outcome);
    }

    pub fn converted(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Converted { .. }))
    }

    pub fn missing(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::NotFound { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|o| pred(o)).count()
    }
}

/// 策略的三種結果；Skipped 與 Failed 必須分開，表示「沒嘗試」與「嘗試但失敗」
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyOutcome {
    Skipped { reason: String },
    Succeeded(BatchReport),
    Failed { reason: String },
}

impl StrategyOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, StrategyOutcome::Succeeded(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Library,
    Browser,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Library => write!(f, "library"),
            StrategyKind::Browser => write!(f, "browser"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub attempts: Vec<(StrategyKind, StrategyOutcome)>,
    /// 成功策略的名稱（例如 "browser"）
    pub completed_with: Option<String>,
    pub manual_instructions: bool,
}

impl RunSummary {
    pub fn attempted(&self, kind: StrategyKind) -> bool {
        self.attempts.iter().any(|(k, _)| *k == kind)
    }

    pub fn outcome(&self, kind: StrategyKind) -> Option<&StrategyOutcome> {
        self.attempts
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, outcome)| outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_name_replaces_extension() {
        let file = ContractFile::new(Path::new("/tmp/contratos"), "contrato-transporte-petroleo.html");
        assert_eq!(
            file.pdf,
            PathBuf::from("/tmp/contratos/contrato-transporte-petroleo.pdf")
        );
        assert_eq!(
            file.html,
            PathBuf::from("/tmp/contratos/contrato-transporte-petroleo.html")
        );
        assert_eq!(file.pdf_name(), "contrato-transporte-petroleo.pdf");
        assert_eq!(file.html_name(), "contrato-transporte-petroleo.html");
    }

    #[test]
    fn test_batch_report_counts() {
        let mut report = BatchReport::default();
        report.push(FileOutcome::Converted { pdf: "a.pdf".into() });
        report.push(FileOutcome::NotFound { html: "b.html".into() });
        report.push(FileOutcome::Failed {
            html: "c.html".into(),
            error: "boom".to_string(),
        });
        report.push(FileOutcome::Converted { pdf: "d.pdf".into() });

        assert_eq!(report.converted(), 2);
        assert_eq!(report.missing(), 1);
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn test_skipped_is_not_success() {
        let skipped = StrategyOutcome::Skipped {
            reason: "absent".to_string(),
        };
        assert!(!skipped.is_success());
        assert!(StrategyOutcome::Succeeded(BatchReport::default()).is_success());
    }
}
