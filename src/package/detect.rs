//! Install detection predicates.
//!
//! A predicate only looks at the local machine: the search path and a few
//! well-known files. It cannot fail; anything that cannot be determined
//! counts as "not installed", which means the installer runs again.

use std::path::Path;

use crate::runtime::Runtime;

/// A single observation about the local machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// An executable with this name is on the search path.
    Executable(&'static str),
    /// This absolute path exists.
    AbsolutePath(&'static str),
    /// This path, relative to the home directory, exists.
    HomePath(&'static str),
}

impl Probe {
    pub fn check<R: Runtime>(&self, runtime: &R) -> bool {
        match self {
            Probe::Executable(name) => runtime.which(name).is_some(),
            Probe::AbsolutePath(path) => runtime.exists(Path::new(path)),
            Probe::HomePath(relative) => runtime
                .home_dir()
                .is_some_and(|home| runtime.exists(&home.join(relative))),
        }
    }
}

/// How a package's probes combine into "already installed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detect {
    All(&'static [Probe]),
    Any(&'static [Probe]),
}

impl Detect {
    #[tracing::instrument(skip(runtime))]
    pub fn is_installed<R: Runtime>(&self, runtime: &R) -> bool {
        match self {
            Detect::All(probes) => probes.iter().all(|p| p.check(runtime)),
            Detect::Any(probes) => probes.iter().any(|p| p.check(runtime)),
        }
    }
}
