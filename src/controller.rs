//! Execution controller: sequences the requested installers.
//!
//! Packages run strictly one after another in request order, since a later
//! installer may rely on something an earlier one put on the system. The
//! first failure stops the run; nothing after it is attempted.

use anyhow::Result;
use log::{debug, info};

use crate::error::{InstallError, PackageFailure};
use crate::installers::RunContext;
use crate::package::Package;
use crate::registry::{Installer, REGISTRY};
use crate::runtime::Runtime;

/// What happened to one requested package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Skipped,
    Installed,
}

/// Turn the command line request into the installers to run.
///
/// An empty request means every package in registry order. Repeated names
/// are run once, at their first position.
pub fn resolve(requested: &[Package]) -> Vec<&'static Installer> {
    if requested.is_empty() {
        return REGISTRY.to_vec();
    }

    let mut installers: Vec<&'static Installer> = Vec::with_capacity(requested.len());
    for package in requested {
        if installers.iter().any(|i| i.package == *package) {
            debug!("Ignoring repeated request for {}", package);
            continue;
        }
        installers.push(package.installer());
    }
    installers
}

#[tracing::instrument(skip(runtime, installers, ctx))]
pub async fn run<R: Runtime>(
    runtime: &R,
    installers: &[&'static Installer],
    ctx: &RunContext,
) -> Result<Vec<(Package, Outcome)>, PackageFailure> {
    let mut outcomes = Vec::with_capacity(installers.len());
    for installer in installers {
        let outcome = install_one(runtime, installer, ctx)
            .await
            .map_err(|source| PackageFailure {
                package: installer.package,
                source,
            })?;
        outcomes.push((installer.package, outcome));
    }
    Ok(outcomes)
}

async fn install_one<R: Runtime>(
    runtime: &R,
    installer: &Installer,
    ctx: &RunContext,
) -> Result<Outcome> {
    let name = installer.name();

    if !ctx.force && installer.is_installed(runtime) {
        println!(
            "{}: already installed, skipping (use --force to reinstall).",
            name
        );
        return Ok(Outcome::Skipped);
    }

    println!("==> Installing {} ({})", name, installer.description);
    if let Err(error) = installer.install(runtime, ctx).await {
        if let Some(InstallError::CommandFailed { command, code }) = error.downcast_ref() {
            debug!("{}: `{}` exited with code {}", name, command, code);
        }
        return Err(error);
    }
    println!("==> Completed {}", name);
    info!("Installed {}", name);

    Ok(Outcome::Installed)
}
