//! The per-run scratch directory.
//!
//! Both the normal exit path and the interrupt handler hold a clone of
//! [`ScratchDir`]; whichever calls [`ScratchDir::release`] first removes the
//! directory, the other finds the slot empty.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

const PREFIX: &str = "installer-";

#[derive(Clone, Debug)]
pub struct ScratchDir {
    slot: Arc<Mutex<Option<TempDir>>>,
    path: PathBuf,
}

impl ScratchDir {
    /// Create a scratch directory under the system temp directory (`TMPDIR`).
    pub fn create() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(PREFIX)
            .tempdir()
            .context("Failed to create scratch directory")?;
        Ok(Self::hold(dir))
    }

    pub fn create_in(parent: &Path) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(PREFIX)
            .tempdir_in(parent)
            .with_context(|| format!("Failed to create scratch directory in {:?}", parent))?;
        Ok(Self::hold(dir))
    }

    fn hold(dir: TempDir) -> Self {
        debug!("Scratch directory: {:?}", dir.path());
        Self {
            path: dir.path().to_path_buf(),
            slot: Arc::new(Mutex::new(Some(dir))),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the directory now. Later calls, from any clone, do nothing.
    pub fn release(&self) {
        let dir = match self.slot.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(dir) = dir {
            debug!("Removing scratch directory {:?}", self.path);
            if let Err(e) = dir.close() {
                warn!("Failed to remove scratch directory {:?}: {}", self.path, e);
            }
        }
    }
}
