use crate::domain::model::ContractFile;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_FILES: [&str; 3] = [
    "contrato-exploracao-sustentavel.html",
    "contrato-transporte-petroleo.html",
    "contrato-refinaria-distribuicao.html",
];

/// 依序嘗試的瀏覽器；順序即優先順序
pub const DEFAULT_BROWSERS: [&str; 6] = [
    "chrome",
    "google-chrome",
    "chromium",
    "msedge",
    r"C:\Program Files\Google\Chrome\Application\chrome.exe",
    r"C:\Program Files (x86)\Microsoft\Edge\Application\msedge.exe",
];

pub const DEFAULT_PRINT_FLAGS: [&str; 3] = ["--headless", "--disable-gpu", "--no-sandbox"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserCandidate {
    pub command: String,
    #[serde(default = "default_probe_args")]
    pub probe_args: Vec<String>,
}

impl BrowserCandidate {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            probe_args: default_probe_args(),
        }
    }
}

fn default_probe_args() -> Vec<String> {
    vec!["--version".to_string()]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    pub files: Vec<String>,
    pub browsers: Vec<BrowserCandidate>,
    pub print_flags: Vec<String>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            files: DEFAULT_FILES.iter().map(|f| f.to_string()).collect(),
            browsers: DEFAULT_BROWSERS
                .iter()
                .map(|b| BrowserCandidate::new(*b))
                .collect(),
            print_flags: DEFAULT_PRINT_FLAGS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl ConvertConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConvertError::ConfigError {
            message: format!("Cannot read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 未列出的欄位使用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 依 base_dir 解析出所有合約檔案
    pub fn contract_files(&self, base_dir: &Path) -> Vec<ContractFile> {
        self.files
            .iter()
            .map(|name| ContractFile::new(base_dir, name))
            .collect()
    }
}

impl Validate for ConvertConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_list("files", &self.files)?;
        for file in &self.files {
            validation::validate_path("files", file)?;
        }
        validation::validate_file_extensions("files", &self.files, &["html", "htm"])?;

        validation::validate_non_empty_list("browsers", &self.browsers)?;
        for browser in &self.browsers {
            validation::validate_non_empty_string("browsers.command", &browser.command)?;
        }

        Ok(())
    }
}
