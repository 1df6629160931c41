//! Command runner: echo a command line, run it, fail on a non-zero exit.

use anyhow::Result;
use log::debug;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::InstallError;
use crate::runtime::Runtime;

/// A fully described external command.
///
/// The working directory and environment overrides travel with the command
/// instead of being applied to this process, so installers never change
/// ambient process state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: OsString,
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
    envs: Vec<(OsString, OsString)>,
}

impl CommandLine {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
            cwd: None,
            envs: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Add an environment override on top of the inherited environment.
    pub fn env(mut self, key: impl AsRef<OsStr>, value: impl AsRef<OsStr>) -> Self {
        self.envs
            .push((key.as_ref().to_os_string(), value.as_ref().to_os_string()));
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    pub fn envs(&self) -> &[(OsString, OsString)] {
        &self.envs
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Echo `command` as `$ <tokens>` and run it to completion.
///
/// A non-zero exit becomes [`InstallError::CommandFailed`] carrying the code.
/// There is no retry and no timeout.
#[tracing::instrument(skip(runtime, command))]
pub async fn run<R: Runtime>(runtime: &R, command: &CommandLine) -> Result<()> {
    println!("$ {}", command);
    if let Some(dir) = command.cwd() {
        debug!("Working directory: {:?}", dir);
    }

    let code = runtime.execute(command).await?;
    if code != 0 {
        return Err(InstallError::CommandFailed {
            command: command.to_string(),
            code,
        }
        .into());
    }
    Ok(())
}
