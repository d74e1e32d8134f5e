//! Async wrapper around external command invocation.

use std::ffi::OsStr;
use std::process::Stdio;

use tokio::process::Command;

use crate::error::{Error, Result};

/// Captured result of a successful command run.
#[derive(Debug, Clone)]
pub struct CmdOutput {
    pub stdout: Vec<u8>,
    pub code: i32,
}

impl CmdOutput {
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }
}

/// Run `program` with `args` to completion and capture its output.
///
/// Returns the complete stdout on success. A non-zero exit becomes
/// [`Error::CommandFailed`] carrying the exit code and stderr text.
pub async fn run_cmd<S, I, A>(program: S, args: I) -> Result<CmdOutput>
where
    S: AsRef<OsStr>,
    I: IntoIterator<Item = A>,
    A: AsRef<OsStr>,
{
    let program_name = program.as_ref().to_string_lossy().into_owned();

    let output = Command::new(program.as_ref())
        .args(args)
        .stdin(Stdio::null())
        .output()
        .await?;

    let code = output.status.code().unwrap_or(-1);
    if !output.status.success() {
        return Err(Error::CommandFailed {
            program: program_name,
            code,
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        });
    }

    Ok(CmdOutput {
        stdout: output.stdout,
        code,
    })
}
