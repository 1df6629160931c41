//! Package identifiers and install detection.

mod detect;

pub use detect::{Detect, Probe};

use std::fmt;

/// One of the fixed set of tools this installer knows about.
///
/// Parsing from the command line goes through [`clap::ValueEnum`], so an
/// unknown name is rejected before anything runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Package {
    Fish,
    Gh,
    Node,
    Nvim,
    Pyenv,
    Rust,
    Rbenv,
    Ruff,
}

impl Package {
    pub fn name(self) -> &'static str {
        match self {
            Package::Fish => "fish",
            Package::Gh => "gh",
            Package::Node => "node",
            Package::Nvim => "nvim",
            Package::Pyenv => "pyenv",
            Package::Rust => "rust",
            Package::Rbenv => "rbenv",
            Package::Ruff => "ruff",
        }
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
