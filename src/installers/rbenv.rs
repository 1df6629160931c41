//! rbenv, cloned from GitHub into the home directory.
//!
//! Unlike the other installers this one refuses to replace an existing
//! `~/.rbenv` unless the run is forced.

use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use super::RunContext;
use crate::command::{CommandLine, run};
use crate::error::InstallError;
use crate::runtime::Runtime;

const REPOSITORY: &str = "https://github.com/rbenv/rbenv.git";
const DEFAULT_SHELL: &str = "/bin/bash";

#[tracing::instrument(skip(runtime, ctx))]
pub async fn install<R: Runtime>(runtime: &R, ctx: &RunContext) -> Result<()> {
    let target = ctx.home.join(".rbenv");
    if runtime.exists(&target) {
        if !ctx.force {
            return Err(InstallError::AlreadyExists {
                name: "rbenv",
                path: target,
            }
            .into());
        }
        info!("Removing existing rbenv checkout {:?}", target);
        runtime
            .remove_dir_all(&target)
            .with_context(|| format!("Failed to remove {:?}", target))?;
    }

    run(
        runtime,
        &CommandLine::new("git").args(["clone", REPOSITORY]).arg(&target),
    )
    .await?;

    let shell = shell_name(runtime.env_var("SHELL").ok().as_deref());
    run(
        runtime,
        &CommandLine::new(target.join("bin").join("rbenv"))
            .args(["init", "-"])
            .arg(shell),
    )
    .await
}

/// File name of the login shell, falling back to bash when `SHELL` is unset or empty.
fn shell_name(shell: Option<&str>) -> String {
    let shell = shell.filter(|s| !s.is_empty()).unwrap_or(DEFAULT_SHELL);
    Path::new(shell)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| shell.to_string())
}
