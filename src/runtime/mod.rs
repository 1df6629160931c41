//! Runtime abstraction for system operations.
//!
//! Every side effect an installer has (reading the environment, probing and
//! clearing the filesystem, looking up executables, spawning processes) goes
//! through the [`Runtime`] trait, so installers and the controller can be
//! driven by a mock in tests.
//!
//! # Structure
//!
//! - `env` - Environment variables, home directory and executable lookup
//! - `fs` - File system probes and removal
//! - `process` - External process execution

mod env;
mod fs;
mod process;

use anyhow::Result;
use async_trait::async_trait;
use std::env as std_env;
use std::path::{Path, PathBuf};

use crate::command::CommandLine;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;

    // File System
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn remove_file(&self, path: &Path) -> Result<()>;
    fn remove_dir_all(&self, path: &Path) -> Result<()>;

    // Directories
    fn home_dir(&self) -> Option<PathBuf>;

    /// Locate an executable on the search path. Any lookup failure is `None`.
    fn which(&self, name: &str) -> Option<PathBuf>;

    // Processes
    /// Run a command to completion with inherited standard streams and
    /// return its exit code. A process killed by signal N reports 128 + N.
    async fn execute(&self, command: &CommandLine) -> Result<i32>;
}

pub struct RealRuntime;

#[async_trait]
impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.is_dir_impl(path)
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        self.remove_file_impl(path)
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        self.remove_dir_all_impl(path)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home_dir_impl()
    }

    fn which(&self, name: &str) -> Option<PathBuf> {
        self.which_impl(name)
    }

    async fn execute(&self, command: &CommandLine) -> Result<i32> {
        self.execute_impl(command).await
    }
}
