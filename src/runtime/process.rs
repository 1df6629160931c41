//! External process execution.

use anyhow::{Context, Result};
use log::debug;
use std::process::ExitStatus;
use tokio::process::Command;

use super::RealRuntime;
use crate::command::CommandLine;

impl RealRuntime {
    #[tracing::instrument(skip(self, command))]
    pub(crate) async fn execute_impl(&self, command: &CommandLine) -> Result<i32> {
        let mut cmd = Command::new(command.program());
        cmd.args(command.get_args());
        if let Some(dir) = command.cwd() {
            cmd.current_dir(dir);
        }
        for (key, value) in command.envs() {
            cmd.env(key, value);
        }

        // status() inherits stdin/stdout/stderr
        let status = cmd
            .status()
            .await
            .with_context(|| format!("Failed to run {:?}", command.program()))?;

        debug!("{:?} finished with {}", command.program(), status);
        Ok(exit_code(status))
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
