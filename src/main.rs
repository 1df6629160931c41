use clap::Parser;
use devsetup::{commands, error::exit_code, package::Package, runtime::RealRuntime};
use std::process::ExitCode;

/// devsetup - Developer Tool Installer
///
/// Install fish, gh, node, nvim, pyenv, rust, rbenv and ruff from their
/// upstream releases and install scripts. Defaults to installing everything.
///
/// Examples:
///   devsetup                # Install every package not already present
///   devsetup gh nvim        # Install only gh and nvim, in that order
///   devsetup --force rbenv  # Reinstall rbenv, replacing ~/.rbenv
#[derive(Parser, Debug)]
#[command(author, version = env!("DEVSETUP_VERSION"), about)]
struct Cli {
    /// Subset of packages to install (default: all)
    #[arg(value_enum, value_name = "PACKAGE")]
    packages: Vec<Package>,

    /// Reinstall even if the package already appears to be installed
    #[arg(long)]
    force: bool,

    /// List known packages and whether they are installed, then exit
    #[arg(long, conflicts_with_all = ["packages", "force"])]
    list: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;

    let result = if cli.list {
        commands::list(&runtime)
    } else {
        commands::install(&runtime, &cli.packages, cli.force).await
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::from(u8::try_from(exit_code(&err)).unwrap_or(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_no_arguments_means_all() {
        let cli = Cli::try_parse_from(["devsetup"]).unwrap();
        assert!(cli.packages.is_empty());
        assert!(!cli.force);
        assert!(!cli.list);
    }

    #[test]
    fn test_cli_packages_keep_order() {
        let cli = Cli::try_parse_from(["devsetup", "rbenv", "fish", "--force"]).unwrap();
        assert_eq!(cli.packages, vec![Package::Rbenv, Package::Fish]);
        assert!(cli.force);
    }

    #[test]
    fn test_cli_unknown_package_fails() {
        let result = Cli::try_parse_from(["devsetup", "fish", "vim"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_list_conflicts_with_packages() {
        assert!(Cli::try_parse_from(["devsetup", "--list"]).is_ok());
        assert!(Cli::try_parse_from(["devsetup", "--list", "gh"]).is_err());
    }
}
