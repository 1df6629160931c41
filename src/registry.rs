//! The installer registry: one descriptor per [`Package`].
//!
//! `REGISTRY` order is the default install order. [`Package::installer`]
//! is an exhaustive match, so every identifier the command line accepts has
//! exactly one descriptor.

use anyhow::Result;

use crate::installers::{self, RunContext};
use crate::package::{Detect, Package, Probe};
use crate::runtime::Runtime;

#[derive(Debug)]
pub struct Installer {
    pub package: Package,
    pub description: &'static str,
    pub detect: Detect,
}

impl Installer {
    pub fn name(&self) -> &'static str {
        self.package.name()
    }

    pub fn is_installed<R: Runtime>(&self, runtime: &R) -> bool {
        self.detect.is_installed(runtime)
    }

    pub async fn install<R: Runtime>(&self, runtime: &R, ctx: &RunContext) -> Result<()> {
        match self.package {
            Package::Fish => installers::fish::install(runtime, ctx).await,
            Package::Gh => installers::gh::install(runtime, ctx).await,
            Package::Node => installers::node::install(runtime, ctx).await,
            Package::Nvim => installers::nvim::install(runtime, ctx).await,
            Package::Pyenv => installers::pyenv::install(runtime, ctx).await,
            Package::Rust => installers::rust::install(runtime, ctx).await,
            Package::Rbenv => installers::rbenv::install(runtime, ctx).await,
            Package::Ruff => installers::ruff::install(runtime, ctx).await,
        }
    }
}

static FISH: Installer = Installer {
    package: Package::Fish,
    description: "Fish shell 4.1.2 from source",
    detect: Detect::All(&[Probe::Executable("fish")]),
};

static GH: Installer = Installer {
    package: Package::Gh,
    description: "GitHub CLI 2.83.0",
    detect: Detect::All(&[Probe::Executable("gh")]),
};

static NODE: Installer = Installer {
    package: Package::Node,
    description: "Node.js 22.x via NodeSource (includes global pyright)",
    detect: Detect::All(&[
        Probe::Executable("node"),
        Probe::Executable("npm"),
        Probe::Executable("pyright"),
    ]),
};

static NVIM: Installer = Installer {
    package: Package::Nvim,
    description: "Neovim latest prebuilt",
    detect: Detect::Any(&[
        Probe::Executable("nvim"),
        Probe::AbsolutePath("/opt/nvim/bin/nvim"),
    ]),
};

static PYENV: Installer = Installer {
    package: Package::Pyenv,
    description: "pyenv with Python 3.12.4",
    detect: Detect::Any(&[
        Probe::Executable("pyenv"),
        Probe::HomePath(".pyenv/bin/pyenv"),
    ]),
};

static RUST: Installer = Installer {
    package: Package::Rust,
    description: "Rust toolchain via rustup",
    detect: Detect::Any(&[Probe::Executable("rustup"), Probe::Executable("rustc")]),
};

static RBENV: Installer = Installer {
    package: Package::Rbenv,
    description: "rbenv from GitHub",
    detect: Detect::Any(&[
        Probe::Executable("rbenv"),
        Probe::HomePath(".rbenv/bin/rbenv"),
    ]),
};

static RUFF: Installer = Installer {
    package: Package::Ruff,
    description: "Ruff via official install script",
    detect: Detect::All(&[Probe::Executable("ruff")]),
};

pub static REGISTRY: [&Installer; 8] = [&FISH, &GH, &NODE, &NVIM, &PYENV, &RUST, &RBENV, &RUFF];

impl Package {
    pub fn installer(self) -> &'static Installer {
        match self {
            Package::Fish => &FISH,
            Package::Gh => &GH,
            Package::Node => &NODE,
            Package::Nvim => &NVIM,
            Package::Pyenv => &PYENV,
            Package::Rust => &RUST,
            Package::Rbenv => &RBENV,
            Package::Ruff => &RUFF,
        }
    }
}
