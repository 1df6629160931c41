//! Install procedures, one module per tool.
//!
//! Each procedure is a sequence of [`crate::command::run`] calls. Version
//! numbers are pinned constants in the owning module. Staged artifacts from
//! an earlier attempt are removed in-process before they are downloaded again.

use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};

use crate::runtime::Runtime;

pub mod fish;
pub mod gh;
pub mod node;
pub mod nvim;
pub mod pyenv;
pub mod rbenv;
pub mod ruff;
pub mod rust;

/// State shared by every install procedure in a run.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Reinstall even when already present; also lets installers replace
    /// directories they would otherwise refuse to touch.
    pub force: bool,
    /// Scratch directory, removed when the run ends.
    pub workdir: PathBuf,
    pub home: PathBuf,
}

/// Remove a previously staged file or directory so it can be fetched again.
pub(crate) fn clear_staged<R: Runtime>(runtime: &R, path: &Path) -> Result<()> {
    if runtime.is_dir(path) {
        debug!("Removing stale directory {:?}", path);
        runtime.remove_dir_all(path)?;
    } else if runtime.exists(path) {
        debug!("Removing stale file {:?}", path);
        runtime.remove_file(path)?;
    }
    Ok(())
}
