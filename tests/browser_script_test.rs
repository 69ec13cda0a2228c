//! 以 shell 腳本模擬瀏覽器，透過真正的子程序執行整個流程
#![cfg(unix)]

use anyhow::Result;
use contract_pdf::{BrowserCandidate, ConvertConfig, Orchestrator, SystemRunner};
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

const FAKE_BROWSER: &str = r#"#!/bin/sh
out=""
for arg in "$@"; do
  case "$arg" in
    --version) echo "Fake Chromium 1.0"; exit 0 ;;
    --print-to-pdf=*) out="${arg#--print-to-pdf=}" ;;
    *refinaria*) echo "refused to print $arg" >&2; exit 21 ;;
  esac
done
printf '%%PDF-1.4 fake\n' > "$out"
"#;

fn install_fake_browser(dir: &Path) -> Result<String> {
    let path = dir.join("fake-chromium");
    std::fs::write(&path, FAKE_BROWSER)?;
    let mut permissions = std::fs::metadata(&path)?.permissions();
    permissions.set_mode(0o755);
    std::fs::set_permissions(&path, permissions)?;
    Ok(path.to_string_lossy().into_owned())
}

#[test]
fn test_script_browser_converts_through_system_runner() -> Result<()> {
    let bin_dir = TempDir::new()?;
    let docs_dir = TempDir::new()?;
    let browser = install_fake_browser(bin_dir.path())?;

    let mut config = ConvertConfig::default();
    config.browsers = vec![
        BrowserCandidate::new("contract-pdf-missing-browser"),
        BrowserCandidate::new(browser),
    ];
    for name in &config.files {
        std::fs::write(docs_dir.path().join(name), "<html><body>contrato</body></html>")?;
    }

    let files = config.contract_files(docs_dir.path());
    let orchestrator = Orchestrator::standard(None, SystemRunner, &config);
    let mut out = Vec::new();
    let summary = orchestrator.run(&files, &mut out);
    let output = String::from_utf8(out)?;

    assert_eq!(summary.completed_with.as_deref(), Some("browser"));
    assert!(docs_dir.path().join("contrato-exploracao-sustentavel.pdf").exists());
    assert!(docs_dir.path().join("contrato-transporte-petroleo.pdf").exists());
    assert!(!docs_dir.path().join("contrato-refinaria-distribuicao.pdf").exists());
    assert!(output.contains("Error converting contrato-refinaria-distribuicao.html: refused to print file://"));

    let pdf = std::fs::read(docs_dir.path().join("contrato-transporte-petroleo.pdf"))?;
    assert!(pdf.starts_with(b"%PDF-1.4"));
    Ok(())
}
