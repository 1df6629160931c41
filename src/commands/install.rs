use anyhow::{Context, Result};
use log::debug;
use tokio::signal::unix::{SignalKind, signal};

use crate::{
    config::Config,
    controller,
    installers::RunContext,
    package::Package,
    runtime::Runtime,
    scratch::ScratchDir,
};

/// Install the requested packages (all of them when `packages` is empty).
///
/// A scratch directory is created before the first installer runs and is
/// removed on every exit path: normal completion, a failed installer, or
/// Ctrl-C.
#[tracing::instrument(skip(runtime))]
pub async fn install<R: Runtime>(runtime: &R, packages: &[Package], force: bool) -> Result<()> {
    let config = Config::new(runtime, force)?;
    let installers = controller::resolve(packages);

    // Listen for SIGINT before the scratch directory exists, so an early
    // Ctrl-C can never leave it behind
    let mut interrupt =
        signal(SignalKind::interrupt()).context("Failed to install Ctrl-C handler")?;

    let scratch = ScratchDir::create()?;
    let scratch_for_handler = scratch.clone();
    let ctrl_c_handler = tokio::spawn(async move {
        if interrupt.recv().await.is_some() {
            eprintln!("\nInterrupted, cleaning up...");
            scratch_for_handler.release();
            std::process::exit(130); // Standard exit code for Ctrl-C
        }
    });

    let ctx = RunContext {
        force: config.force,
        workdir: scratch.path().to_path_buf(),
        home: config.home,
    };
    let result = controller::run(runtime, &installers, &ctx).await;

    ctrl_c_handler.abort();
    scratch.release();

    let outcomes = result?;
    debug!("Finished {} package(s)", outcomes.len());
    Ok(())
}
