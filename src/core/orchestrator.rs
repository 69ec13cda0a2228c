use crate::config::ConvertConfig;
use crate::core::browser_strategy::BrowserStrategy;
use crate::core::library_strategy::LibraryStrategy;
use crate::core::{manual, say};
use crate::domain::model::{ContractFile, RunSummary};
use crate::domain::ports::{HtmlRenderer, ProcessRunner, Strategy};
use std::io::Write;

/// 依序嘗試各策略，第一個成功的策略結束整個流程
pub struct Orchestrator<'a> {
    strategies: Vec<Box<dyn Strategy + 'a>>,
}

impl<'a> Orchestrator<'a> {
    pub fn new(strategies: Vec<Box<dyn Strategy + 'a>>) -> Self {
        Self { strategies }
    }

    /// 函式庫渲染器 → 瀏覽器子程序 → 手動說明
    pub fn standard<R: ProcessRunner + 'a>(
        renderer: Option<Box<dyn HtmlRenderer>>,
        runner: R,
        config: &ConvertConfig,
    ) -> Self {
        Self::new(vec![
            Box::new(LibraryStrategy::new(renderer)),
            Box::new(BrowserStrategy::from_config(runner, config)),
        ])
    }

    pub fn run(&self, files: &[ContractFile], out: &mut dyn Write) -> RunSummary {
        say(out, "Converting HTML contracts to PDF...");
        let mut summary = RunSummary::default();

        for strategy in &self.strategies {
            let kind = strategy.kind();
            tracing::debug!("Trying {} strategy", kind);

            let outcome = strategy.attempt(files, out);
            let succeeded = outcome.is_success();
            tracing::info!("{} strategy finished: {:?}", kind, outcome);
            summary.attempts.push((kind, outcome));

            if succeeded {
                let label = strategy.label();
                say(out, format_args!("Conversion completed with {}!", label));
                summary.completed_with = Some(label);
                return summary;
            }
        }

        tracing::warn!("All automatic strategies failed, printing manual instructions");
        manual::print_instructions(files, out);
        summary.manual_instructions = true;
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{BatchReport, StrategyKind, StrategyOutcome};
    use std::cell::Cell;

    struct Scripted {
        kind: StrategyKind,
        outcome: StrategyOutcome,
        calls: Cell<usize>,
    }

    impl Scripted {
        fn new(kind: StrategyKind, outcome: StrategyOutcome) -> Self {
            Self {
                kind,
                outcome,
                calls: Cell::new(0),
            }
        }
    }

    impl Strategy for &Scripted {
        fn kind(&self) -> StrategyKind {
            self.kind
        }

        fn label(&self) -> String {
            self.kind.to_string()
        }

        fn attempt(&self, _files: &[ContractFile], _out: &mut dyn Write) -> StrategyOutcome {
            self.calls.set(self.calls.get() + 1);
            self.outcome.clone()
        }
    }

    fn failed() -> StrategyOutcome {
        StrategyOutcome::Failed {
            reason: "nope".to_string(),
        }
    }

    #[test]
    fn test_first_success_short_circuits() {
        let library = Scripted::new(StrategyKind::Library, StrategyOutcome::Succeeded(BatchReport::default()));
        let browser = Scripted::new(StrategyKind::Browser, failed());
        let orchestrator = Orchestrator::new(vec![Box::new(&library), Box::new(&browser)]);
        let mut out = Vec::new();

        let summary = orchestrator.run(&[], &mut out);

        assert_eq!(browser.calls.get(), 0);
        assert_eq!(summary.completed_with.as_deref(), Some("library"));
        assert!(!summary.attempted(StrategyKind::Browser));
        assert!(!summary.manual_instructions);
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("Conversion completed with library!\n"));
    }

    #[test]
    fn test_skip_then_success() {
        let library = Scripted::new(
            StrategyKind::Library,
            StrategyOutcome::Skipped {
                reason: "absent".to_string(),
            },
        );
        let browser = Scripted::new(StrategyKind::Browser, StrategyOutcome::Succeeded(BatchReport::default()));
        let orchestrator = Orchestrator::new(vec![Box::new(&library), Box::new(&browser)]);
        let mut out = Vec::new();

        let summary = orchestrator.run(&[], &mut out);

        assert_eq!(browser.calls.get(), 1);
        assert!(matches!(
            summary.outcome(StrategyKind::Library),
            Some(StrategyOutcome::Skipped { .. })
        ));
        assert_eq!(summary.completed_with.as_deref(), Some("browser"));
    }

    #[test]
    fn test_total_failure_prints_manual_instructions() {
        let library = Scripted::new(StrategyKind::Library, failed());
        let browser = Scripted::new(StrategyKind::Browser, failed());
        let orchestrator = Orchestrator::new(vec![Box::new(&library), Box::new(&browser)]);
        let mut out = Vec::new();

        let summary = orchestrator.run(&[], &mut out);

        assert!(summary.manual_instructions);
        assert!(summary.completed_with.is_none());
        assert_eq!(summary.attempts.len(), 2);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Converting HTML contracts to PDF...\n"));
        assert!(text.contains("Ctrl+P"));
    }
}
