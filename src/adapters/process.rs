use crate::domain::ports::{ProcessOutput, ProcessRunner};
use crate::utils::error::{ConvertError, Result};
use std::process::{Command, Stdio};

/// 以 `std::process::Command` 執行子程序，等待結束並收集輸出
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput> {
        tracing::debug!("Running {} {:?}", program, args);

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ConvertError::ProcessError {
                program: program.to_string(),
                source,
            })?;

        Ok(ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
