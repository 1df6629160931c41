use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;

use crate::runtime::Runtime;

/// Settings resolved once per invocation, before any installer runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub force: bool,
    pub home: PathBuf,
}

impl Config {
    pub fn new<R: Runtime>(runtime: &R, force: bool) -> Result<Self> {
        let home = runtime
            .home_dir()
            .context("Could not find home directory")?;
        debug!("Using home directory {:?} (force={})", home, force);
        Ok(Self { force, home })
    }
}
