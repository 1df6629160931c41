use std::path::PathBuf;
use thiserror::Error;

use crate::package::Package;

/// Failures an install procedure classifies itself.
///
/// Anything else raised during an install (spawn errors, filesystem errors)
/// stays an unclassified `anyhow::Error`.
#[derive(Debug, Error)]
pub enum InstallError {
    /// A subprocess exited non-zero.
    #[error("command failed with exit code {code}")]
    CommandFailed { command: String, code: i32 },

    /// The install target is already present and `--force` was not given.
    #[error("{name} already exists; use --force to reinstall.")]
    AlreadyExists { name: &'static str, path: PathBuf },
}

/// An install procedure failed; the run stops here.
///
/// Displays as the package name only. The cause is the error source, so the
/// alternate form (`{:#}` through `anyhow`) reads `<package>: <cause>`.
#[derive(Debug, Error)]
#[error("{package}")]
pub struct PackageFailure {
    pub package: Package,
    pub source: anyhow::Error,
}

impl PackageFailure {
    pub fn exit_code(&self) -> i32 {
        match self.source.downcast_ref::<InstallError>() {
            Some(InstallError::CommandFailed { code, .. }) => *code,
            _ => 1,
        }
    }
}

/// Process exit code for an error that ended the run.
///
/// A failing subprocess passes its own code through; everything else is 1.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<PackageFailure>() {
        Some(failure) => failure.exit_code(),
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn report(failure: PackageFailure) -> String {
        format!("{:#}", anyhow::Error::from(failure))
    }

    #[test]
    fn test_command_failure_keeps_exit_code() {
        let failure = PackageFailure {
            package: Package::Gh,
            source: InstallError::CommandFailed {
                command: "curl -Lo gh.tar.gz".into(),
                code: 28,
            }
            .into(),
        };
        assert_eq!(failure.exit_code(), 28);

        let err = anyhow::Error::from(failure);
        assert_eq!(exit_code(&err), 28);
        assert_eq!(format!("{:#}", err), "gh: command failed with exit code 28");
    }

    #[test]
    fn test_already_exists_exits_with_one() {
        let failure = PackageFailure {
            package: Package::Rbenv,
            source: InstallError::AlreadyExists {
                name: "rbenv",
                path: PathBuf::from("/home/user/.rbenv"),
            }
            .into(),
        };
        assert_eq!(failure.exit_code(), 1);
        assert_eq!(
            report(failure),
            "rbenv: rbenv already exists; use --force to reinstall."
        );
    }

    #[test]
    fn test_cause_is_reported_once() {
        let failure = PackageFailure {
            package: Package::Ruff,
            source: anyhow::anyhow!("Failed to run \"bash\""),
        };
        assert_eq!(failure.to_string(), "ruff");
        assert_eq!(report(failure), "ruff: Failed to run \"bash\"");
    }

    #[test]
    fn test_context_wrapped_command_failure_is_still_found() {
        let inner: anyhow::Result<()> = Err(InstallError::CommandFailed {
            command: "make".into(),
            code: 2,
        }
        .into());
        let source = inner.context("building fish").unwrap_err();
        let failure = PackageFailure {
            package: Package::Fish,
            source,
        };
        assert_eq!(failure.exit_code(), 2);
        assert_eq!(
            report(failure),
            "fish: building fish: command failed with exit code 2"
        );
    }

    #[test]
    fn test_unclassified_errors_exit_with_one() {
        let err = anyhow::anyhow!("Could not find home directory");
        assert_eq!(exit_code(&err), 1);

        let failure = PackageFailure {
            package: Package::Fish,
            source: anyhow::anyhow!("Failed to run \"cmake\""),
        };
        assert_eq!(failure.exit_code(), 1);
    }
}
