//! Builder wrapper over `std::process::Command` with typed errors.

use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::process::{Child, Command as StdCommand, Output, Stdio};

#[derive(Debug)]
pub struct Command {
    inner: StdCommand,
    program: String,
}

impl Command {
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        Self {
            inner: StdCommand::new(&program),
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

    pub fn stdout(mut self, cfg: Stdio) -> Self {
        self.inner.stdout(cfg);
        self
    }

    pub fn stderr(mut self, cfg: Stdio) -> Self {
        self.inner.stderr(cfg);
        self
    }

    pub fn output(&mut self) -> Result<Output> {
        self.inner.output().map_err(|e| Error::CommandFailed {
            cmd: self.program.clone(),
            source: e,
        })
    }

    pub fn spawn(&mut self) -> Result<Child> {
        self.inner.spawn().map_err(|e| Error::CommandFailed {
            cmd: self.program.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_chain_preserves_order() {
        let cmd = Command::new("7z").arg("x").arg("-y").args(["-oout", "bd.zip"]);
        let args: Vec<_> = cmd
            .inner
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(args, ["x", "-y", "-oout", "bd.zip"]);
    }

    #[test]
    fn test_an_arg_with_spaces_stays_one_arg() {
        let cmd = Command::new("7z").arg("-oC:/Program Files/out");
        assert_eq!(cmd.inner.get_args().count(), 1);
    }

    #[test]
    fn test_spawn_names_the_failing_program() {
        let mut cmd = Command::new("bdinstall-no-such-binary");
        match cmd.spawn() {
            Err(Error::CommandFailed { cmd, .. }) => assert_eq!(cmd, "bdinstall-no-such-binary"),
            _ => panic!("expected CommandFailed"),
        }
    }

    #[test]
    fn test_output_names_the_failing_program() {
        let mut cmd = Command::new("bdinstall-no-such-binary");
        match cmd.output() {
            Err(Error::CommandFailed { cmd, .. }) => assert_eq!(cmd, "bdinstall-no-such-binary"),
            _ => panic!("expected CommandFailed"),
        }
    }
}
