use anyhow::Result;
use log::debug;

use crate::{
    registry::{Installer, REGISTRY},
    runtime::Runtime,
};

/// Print every known package with its description and detected state
#[tracing::instrument(skip(runtime))]
pub fn list<R: Runtime>(runtime: &R) -> Result<()> {
    debug!("Listing {} package(s)", REGISTRY.len());

    for installer in REGISTRY.iter() {
        println!("{}", format_entry(installer, installer.is_installed(runtime)));
    }

    Ok(())
}

fn format_entry(installer: &Installer, installed: bool) -> String {
    let state = if installed { "installed" } else { "missing" };
    format!(
        "{:<6} {:<54} [{}]",
        installer.name(),
        installer.description,
        state
    )
}
