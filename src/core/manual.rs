use crate::core::say;
use crate::domain::model::ContractFile;
use std::io::Write;

pub const MANUAL_STEPS: [&str; 4] = [
    "1. Open each .html file in your browser",
    "2. Press Ctrl+P to print",
    "3. Choose 'Save as PDF'",
    "4. Save with the same name, using the .pdf extension",
];

/// 自動轉換全部失敗時，印出手動轉換步驟
pub fn print_instructions(files: &[ContractFile], out: &mut dyn Write) {
    say(out, "Could not convert automatically.");
    say(out, "");
    say(out, "Manual instructions:");
    for step in MANUAL_STEPS {
        say(out, step);
    }

    if !files.is_empty() {
        say(out, "");
        say(out, "Files to convert:");
        for file in files {
            say(out, format_args!("  {} -> {}", file.html_name(), file.pdf_name()));
        }
    }
}
