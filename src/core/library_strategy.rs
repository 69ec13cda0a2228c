use crate::core::say;
use crate::domain::model::{BatchReport, ContractFile, FileOutcome, StrategyKind, StrategyOutcome};
use crate::domain::ports::{HtmlRenderer, Strategy};
use std::io::Write;

/// 使用函式庫渲染器轉換；渲染器不存在時略過
pub struct LibraryStrategy {
    renderer: Option<Box<dyn HtmlRenderer>>,
}

impl LibraryStrategy {
    pub fn new(renderer: Option<Box<dyn HtmlRenderer>>) -> Self {
        Self { renderer }
    }
}

impl Strategy for LibraryStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Library
    }

    fn label(&self) -> String {
        self.renderer
            .as_ref()
            .map(|r| r.name().to_string())
            .unwrap_or_else(|| StrategyKind::Library.to_string())
    }

    fn attempt(&self, files: &[ContractFile], out: &mut dyn Write) -> StrategyOutcome {
        let Some(renderer) = &self.renderer else {
            tracing::info!("No HTML renderer library available, skipping");
            return StrategyOutcome::Skipped {
                reason: "no HTML renderer library available".to_string(),
            };
        };

        tracing::info!("Rendering with {}", renderer.name());
        let mut report = BatchReport::default();

        for file in files {
            if !file.exists() {
                say(out, format_args!("File not found: {}", file.html_name()));
                report.push(FileOutcome::NotFound {
                    html: file.html.clone(),
                });
                continue;
            }

            // 渲染錯誤視為整個策略失敗，交給下一個策略
            if let Err(e) = renderer.render(&file.html, &file.pdf) {
                tracing::error!("❌ {} failed on {}: {}", renderer.name(), file.html.display(), e);
                say(out, format_args!("Renderer error: {}", e));
                return StrategyOutcome::Failed {
                    reason: e.to_string(),
                };
            }

            say(out, format_args!("Converted: {}", file.pdf_name()));
            report.push(FileOutcome::Converted {
                pdf: file.pdf.clone(),
            });
        }

        StrategyOutcome::Succeeded(report)
    }
}
