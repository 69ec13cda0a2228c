use crate::config::{BrowserCandidate, ConvertConfig};
use crate::core::say;
use crate::domain::model::{BatchReport, ContractFile, FileOutcome, StrategyKind, StrategyOutcome};
use crate::domain::ports::{ProcessRunner, Strategy};
use crate::utils::error::Result;
use crate::utils::paths;
use std::io::Write;

/// 以已安裝的瀏覽器（headless 模式）列印成 PDF
pub struct BrowserStrategy<R: ProcessRunner> {
    runner: R,
    candidates: Vec<BrowserCandidate>,
    print_flags: Vec<String>,
}

impl<R: ProcessRunner> BrowserStrategy<R> {
    pub fn new(runner: R, candidates: Vec<BrowserCandidate>, print_flags: Vec<String>) -> Self {
        Self {
            runner,
            candidates,
            print_flags,
        }
    }

    pub fn from_config(runner: R, config: &ConvertConfig) -> Self {
        Self::new(runner, config.browsers.clone(), config.print_flags.clone())
    }

    /// 第一個對探測參數正常回應的瀏覽器
    pub fn find_browser(&self) -> Option<&BrowserCandidate> {
        self.candidates.iter().find(|candidate| {
            match self.runner.run(&candidate.command, &candidate.probe_args) {
                Ok(output) if output.success() => {
                    tracing::info!(
                        "🔍 Found browser {}: {}",
                        candidate.command,
                        output.stdout.trim()
                    );
                    true
                }
                Ok(output) => {
                    tracing::debug!(
                        "{} exited with {:?} on probe",
                        candidate.command,
                        output.exit_code
                    );
                    false
                }
                Err(e) => {
                    tracing::debug!("{} not available: {}", candidate.command, e);
                    false
                }
            }
        })
    }

    pub fn print_args(&self, file: &ContractFile) -> Result<Vec<String>> {
        let abs_pdf = paths::absolute(&file.pdf)?;
        let abs_html = paths::absolute(&file.html)?;

        let mut args = self.print_flags.clone();
        args.push(format!("--print-to-pdf={}", abs_pdf.display()));
        args.push(paths::file_url(&abs_html));
        Ok(args)
    }

    fn convert_all(
        &self,
        browser: &BrowserCandidate,
        files: &[ContractFile],
        out: &mut dyn Write,
    ) -> Result<BatchReport> {
        let mut report = BatchReport::default();

        for file in files {
            if !file.exists() {
                say(out, format_args!("File not found: {}", file.html_name()));
                report.push(FileOutcome::NotFound {
                    html: file.html.clone(),
                });
                continue;
            }

            let args = self.print_args(file)?;
            let output = self.runner.run(&browser.command, &args)?;

            if output.success() {
                say(out, format_args!("Converted: {}", file.pdf_name()));
                report.push(FileOutcome::Converted {
                    pdf: file.pdf.clone(),
                });
            } else {
                tracing::warn!(
                    "{} exited with {:?} for {}",
                    browser.command,
                    output.exit_code,
                    file.html.display()
                );
                say(
                    out,
                    format_args!(
                        "Error converting {}: {}",
                        file.html_name(),
                        output.stderr.trim_end()
                    ),
                );
                report.push(FileOutcome::Failed {
                    html: file.html.clone(),
                    error: output.stderr,
                });
            }
        }

        Ok(report)
    }
}

impl<R: ProcessRunner> Strategy for BrowserStrategy<R> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Browser
    }

    fn label(&self) -> String {
        StrategyKind::Browser.to_string()
    }

    fn attempt(&self, files: &[ContractFile], out: &mut dyn Write) -> StrategyOutcome {
        let Some(browser) = self.find_browser() else {
            say(out, "No browser found");
            return StrategyOutcome::Failed {
                reason: "no browser found".to_string(),
            };
        };

        match self.convert_all(browser, files, out) {
            Ok(report) => StrategyOutcome::Succeeded(report),
            Err(e) => {
                tracing::error!("❌ Browser conversion aborted: {}", e);
                say(out, format_args!("Browser error: {}", e));
                StrategyOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
