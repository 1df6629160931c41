//! pyenv via the pyenv.run bootstrap script, then a pinned CPython.

use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use super::RunContext;
use crate::command::{CommandLine, run};
use crate::runtime::Runtime;

const PYTHON_VERSION: &str = "3.12.4";
const BOOTSTRAP: &str = "curl https://pyenv.run | bash";

#[tracing::instrument(skip(runtime, ctx))]
pub async fn install<R: Runtime>(runtime: &R, ctx: &RunContext) -> Result<()> {
    let root = ctx.home.join(".pyenv");
    if ctx.force && runtime.exists(&root) {
        info!("Removing existing pyenv root {:?}", root);
        runtime
            .remove_dir_all(&root)
            .with_context(|| format!("Failed to remove {:?}", root))?;
    }

    let search_path = search_path(&root, &runtime.env_var("PATH").unwrap_or_default());
    let with_env = |cmd: CommandLine| cmd.env("PYENV_ROOT", &root).env("PATH", &search_path);

    run(runtime, &with_env(CommandLine::new("bash").args(["-c", BOOTSTRAP]))).await?;

    let pyenv = root.join("bin").join("pyenv");
    run(
        runtime,
        &with_env(CommandLine::new(&pyenv).args(["install", "-s", PYTHON_VERSION])),
    )
    .await?;
    run(
        runtime,
        &with_env(CommandLine::new(&pyenv).args(["global", PYTHON_VERSION])),
    )
    .await
}

/// `PATH` for pyenv commands: its bin and shims ahead of the inherited path.
fn search_path(root: &Path, inherited: &str) -> String {
    format!(
        "{}:{}:{}",
        root.join("bin").display(),
        root.join("shims").display(),
        inherited
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use crate::test_utils::{record_commands, test_context, test_home};
    use mockall::predicate::eq;
    use std::ffi::OsString;

    fn configure_path(runtime: &mut MockRuntime) {
        runtime
            .expect_env_var()
            .with(eq("PATH"))
            .returning(|_| Ok("/usr/bin:/bin".to_string()));
    }

    #[tokio::test]
    async fn test_install_sets_pyenv_environment() {
        let mut runtime = MockRuntime::new();
        configure_path(&mut runtime);
        runtime.expect_remove_dir_all().never();
        let commands = record_commands(&mut runtime, |_| 0);

        install(&runtime, &test_context(false)).await.unwrap();

        let commands = commands.lock().unwrap();
        let lines: Vec<String> = commands.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "bash -c curl https://pyenv.run | bash",
                "/home/user/.pyenv/bin/pyenv install -s 3.12.4",
                "/home/user/.pyenv/bin/pyenv global 3.12.4",
            ]
        );

        let expected_env = vec![
            (
                OsString::from("PYENV_ROOT"),
                OsString::from("/home/user/.pyenv"),
            ),
            (
                OsString::from("PATH"),
                OsString::from("/home/user/.pyenv/bin:/home/user/.pyenv/shims:/usr/bin:/bin"),
            ),
        ];
        for cmd in commands.iter() {
            assert_eq!(cmd.envs(), expected_env.as_slice());
        }
    }

    #[tokio::test]
    async fn test_force_removes_existing_root() {
        let mut runtime = MockRuntime::new();
        configure_path(&mut runtime);
        let root = test_home().join(".pyenv");
        runtime
            .expect_exists()
            .with(eq(root.clone()))
            .returning(|_| true);
        runtime
            .expect_remove_dir_all()
            .with(eq(root))
            .times(1)
            .returning(|_| Ok(()));
        record_commands(&mut runtime, |_| 0);

        install(&runtime, &test_context(true)).await.unwrap();
    }

    #[test]
    fn test_search_path_with_empty_inherited_path() {
        let path = search_path(Path::new("/root/.pyenv"), "");
        assert_eq!(path, "/root/.pyenv/bin:/root/.pyenv/shims:");
    }
}
