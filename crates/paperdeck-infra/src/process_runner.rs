//! Run external commands and capture how they went.

use std::ffi::OsStr;
use std::process::{Command, Stdio};

/// Result of one external command. Spawn failures are folded in with
/// `exit_code: None` and the OS error text in `stderr`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutcome {
    fn spawn_failed(err: std::io::Error) -> Self {
        Self {
            success: false,
            exit_code: None,
            stdout: String::new(),
            stderr: err.to_string(),
        }
    }
}

/// Run `program args...` to completion with stdin closed. No timeout.
pub fn run<I, S>(program: &OsStr, args: I) -> CommandOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output();

    match output {
        Ok(out) => CommandOutcome {
            success: out.status.success(),
            exit_code: out.status.code(),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).trim_end().to_string(),
        },
        Err(err) => CommandOutcome::spawn_failed(err),
    }
}
