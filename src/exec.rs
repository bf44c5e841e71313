//! Synchronous external command execution.
//!
//! A [`Cmd`] is an ordered argv a build step accumulates piece by piece and
//! then runs to completion, inheriting the parent's stdio. No shell is
//! involved and no quoting is performed; arguments containing spaces are the
//! caller's problem. That keeps the command line identical to what gets
//! logged.

use crate::ui;
use anyhow::{Context, Result, bail};
use std::process::{Command, ExitStatus};

/// An ordered command line: program name first, then its arguments.
#[derive(Debug, Clone, Default)]
pub struct Cmd {
    argv: Vec<String>,
}

impl Cmd {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(&mut self, part: impl Into<String>) -> &mut Self {
        self.argv.push(part.into());
        self
    }

    pub fn args<I, S>(&mut self, parts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.argv.extend(parts.into_iter().map(Into::into));
        self
    }

    /// The command line as logged: argv joined by single spaces, unquoted.
    pub fn line(&self) -> String {
        self.argv.join(" ")
    }

    /// Spawn the command and block until it finishes.
    ///
    /// `Err` means the child never ran (executable not found, spawn
    /// failure); `Ok` means it ran, and the [`RunStatus`] says how it ended.
    /// A nonzero exit is not an `Err` - the caller decides whether that is
    /// fatal.
    pub fn run(&self) -> Result<RunStatus> {
        let Some((program, rest)) = self.argv.split_first() else {
            bail!("empty command line");
        };

        ui::command(&self.line());
        let status = spawn_wait(program, rest)
            .with_context(|| format!("failed to spawn '{program}'"))?;
        Ok(RunStatus::from(status))
    }
}

// Unix gets the argv vector handed straight to exec.
#[cfg(not(windows))]
fn spawn_wait(program: &str, rest: &[String]) -> std::io::Result<ExitStatus> {
    Command::new(program).args(rest).status()
}

// Windows process creation takes one command-line string, so hand it the
// pre-joined remainder verbatim instead of letting std re-quote each piece.
#[cfg(windows)]
fn spawn_wait(program: &str, rest: &[String]) -> std::io::Result<ExitStatus> {
    use std::os::windows::process::CommandExt;
    let mut cmd = Command::new(program);
    if !rest.is_empty() {
        cmd.raw_arg(rest.join(" "));
    }
    cmd.status()
}

/// Unified result of a finished child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    code: Option<i32>,
    signal: Option<i32>,
}

impl RunStatus {
    /// The child exited normally with status 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Exit code, if the child exited normally.
    pub fn code(&self) -> Option<i32> {
        self.code
    }

    /// Terminating signal, if the child was killed (Unix only).
    pub fn signal(&self) -> Option<i32> {
        self.signal
    }
}

impl From<ExitStatus> for RunStatus {
    fn from(status: ExitStatus) -> Self {
        #[cfg(unix)]
        let signal = {
            use std::os::unix::process::ExitStatusExt;
            status.signal()
        };
        #[cfg(not(unix))]
        let signal = None;

        Self {
            code: status.code(),
            signal,
        }
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.code, self.signal) {
            (Some(code), _) => write!(f, "exit code {code}"),
            (None, Some(signal)) => write!(f, "killed by signal {signal}"),
            (None, None) => write!(f, "terminated abnormally"),
        }
    }
}
