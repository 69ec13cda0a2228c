use crate::utils::error::Result;
use std::path::{Path, PathBuf};
use url::Url;

/// 相對路徑以目前工作目錄展開，不解析符號連結
pub fn absolute(path: &Path) -> Result<PathBuf> {
    Ok(std::path::absolute(path)?)
}

/// `file://` URL；無法轉換時退回直接拼接
pub fn file_url(abs_path: &Path) -> String {
    match Url::from_file_path(abs_path) {
        Ok(url) => url.to_string(),
        Err(()) => format!("file://{}", abs_path.display()),
    }
}
