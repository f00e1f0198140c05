//! External command invocation.

use std::ffi::OsStr;
use std::process::Output;

use tokio::process::Command as TokioCommand;

use crate::error::{Error, Result};

/// Builder around a single external command invocation.
#[derive(Debug)]
pub struct Command {
    inner: TokioCommand,
    program: String,
}

impl Command {
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        Self {
            inner: TokioCommand::new(&program),
            program,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.inner.arg(arg);
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.inner.args(args);
        self
    }

    pub fn env<K, V>(mut self, key: K, val: V) -> Self
    where
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        self.inner.env(key, val);
        self
    }

    /// Run to completion and capture stdout/stderr.
    pub async fn capture(mut self) -> Result<Output> {
        self.inner.output().await.map_err(|e| Error::CommandFailed {
            cmd: self.program.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_new_keeps_program_name() {
        let cmd = Command::new("echo");
        assert_eq!(cmd.program, "echo");
    }

    #[test]
    fn command_collects_args() {
        let cmd = Command::new("echo").arg("hello").args(["a", "b"]);
        let args: Vec<_> = cmd.inner.as_std().get_args().collect();
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn command_sets_env() {
        let cmd = Command::new("echo").env("KEY", "value");
        assert!(cmd.inner.as_std().get_envs().count() > 0);
    }

    #[tokio::test]
    async fn capture_returns_output_for_known_command() {
        let output = Command::new("echo").arg("hello").capture().await;
        #[cfg(unix)]
        {
            let output = output.unwrap();
            assert!(output.status.success());
            assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "hello");
        }
        #[cfg(not(unix))]
        let _ = output;
    }

    #[tokio::test]
    async fn capture_fails_for_missing_command() {
        let result = Command::new("binhaul-no-such-command-12345").capture().await;
        assert!(matches!(result, Err(Error::CommandFailed { .. })));
    }
}
