use crate::domain::ports::HtmlRenderer;

/// 偵測可用的函式庫渲染器；只在啟動時呼叫一次
pub fn try_load_renderer() -> Option<Box<dyn HtmlRenderer>> {
    #[cfg(feature = "chrome-renderer")]
    {
        match chrome::ChromeRenderer::launch() {
            Ok(renderer) => return Some(Box::new(renderer)),
            Err(e) => tracing::info!("Chrome renderer not available: {}", e),
        }
    }

    #[cfg(not(feature = "chrome-renderer"))]
    tracing::debug!("Built without a library renderer");

    None
}

#[cfg(feature = "chrome-renderer")]
mod chrome {
    use crate::domain::ports::HtmlRenderer;
    use crate::utils::error::{ConvertError, Result};
    use crate::utils::paths;
    use headless_chrome::types::PrintToPdfOptions;
    use headless_chrome::Browser;
    use std::path::Path;

    pub struct ChromeRenderer {
        browser: Browser,
    }

    impl ChromeRenderer {
        pub fn launch() -> anyhow::Result<Self> {
            Ok(Self {
                browser: Browser::default()?,
            })
        }

        fn print(&self, input: &Path) -> anyhow::Result<Vec<u8>> {
            let url = paths::file_url(&paths::absolute(input)?);

            let tab = self.browser.new_tab()?;
            tab.navigate_to(&url)?;
            tab.wait_until_navigated()?;

            let options = PrintToPdfOptions {
                print_background: Some(true),
                prefer_css_page_size: Some(true),
                ..Default::default()
            };
            let bytes = tab.print_to_pdf(Some(options))?;
            let _ = tab.close(true);
            Ok(bytes)
        }
    }

    impl HtmlRenderer for ChromeRenderer {
        fn name(&self) -> &str {
            "headless_chrome"
        }

        fn render(&self, input: &Path, output: &Path) -> Result<()> {
            let bytes = self.print(input).map_err(|e| ConvertError::RenderError {
                input: input.to_path_buf(),
                message: e.to_string(),
            })?;
            std::fs::write(output, bytes)?;
            Ok(())
        }
    }
}
