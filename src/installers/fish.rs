//! Fish shell, built from the release tarball with CMake.

use anyhow::Result;

use super::{RunContext, clear_staged};
use crate::command::{CommandLine, run};
use crate::runtime::Runtime;

const VERSION: &str = "4.1.2";

#[tracing::instrument(skip(runtime, ctx))]
pub async fn install<R: Runtime>(runtime: &R, ctx: &RunContext) -> Result<()> {
    let archive_name = format!("fish-{}.tar.xz", VERSION);
    let url = format!(
        "https://github.com/fish-shell/fish-shell/releases/download/{}/{}",
        VERSION, archive_name
    );
    let archive = ctx.workdir.join(&archive_name);
    let source_dir = ctx.workdir.join(format!("fish-{}", VERSION));

    clear_staged(runtime, &archive)?;
    clear_staged(runtime, &source_dir)?;

    run(runtime, &CommandLine::new("curl").arg("-Lo").arg(&archive).arg(&url)).await?;
    run(
        runtime,
        &CommandLine::new("tar")
            .arg("-xvf")
            .arg(&archive)
            .current_dir(&ctx.workdir),
    )
    .await?;
    run(runtime, &CommandLine::new("cmake").arg(".").current_dir(&source_dir)).await?;
    run(runtime, &CommandLine::new("make").current_dir(&source_dir)).await?;
    run(
        runtime,
        &CommandLine::new("sudo")
            .args(["make", "install"])
            .current_dir(&source_dir),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use crate::test_utils::{configure_empty_workdir, record_commands, test_context, test_workdir};

    #[tokio::test]
    async fn test_install_builds_from_source() {
        let mut runtime = MockRuntime::new();
        configure_empty_workdir(&mut runtime);
        let commands = record_commands(&mut runtime, |_| 0);

        install(&runtime, &test_context(false)).await.unwrap();

        let commands = commands.lock().unwrap();
        let lines: Vec<String> = commands.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "curl -Lo /tmp/installer-test/fish-4.1.2.tar.xz https://github.com/fish-shell/fish-shell/releases/download/4.1.2/fish-4.1.2.tar.xz",
                "tar -xvf /tmp/installer-test/fish-4.1.2.tar.xz",
                "cmake .",
                "make",
                "sudo make install",
            ]
        );

        let source_dir = test_workdir().join("fish-4.1.2");
        assert_eq!(commands[1].cwd(), Some(test_workdir().as_path()));
        for build_step in &commands[2..] {
            assert_eq!(build_step.cwd(), Some(source_dir.as_path()));
        }
    }

    #[tokio::test]
    async fn test_install_clears_previous_attempt() {
        let mut runtime = MockRuntime::new();
        let stale_dir = test_workdir().join("fish-4.1.2");
        let stale_archive = test_workdir().join("fish-4.1.2.tar.xz");
        {
            let stale_dir = stale_dir.clone();
            runtime
                .expect_is_dir()
                .returning(move |p| p == stale_dir.as_path());
        }
        runtime.expect_exists().returning(|_| true);
        runtime
            .expect_remove_file()
            .withf(move |p| p == stale_archive.as_path())
            .times(1)
            .returning(|_| Ok(()));
        runtime
            .expect_remove_dir_all()
            .withf(move |p| p == stale_dir.as_path())
            .times(1)
            .returning(|_| Ok(()));
        record_commands(&mut runtime, |_| 0);

        install(&runtime, &test_context(false)).await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_download_stops_before_build() {
        let mut runtime = MockRuntime::new();
        configure_empty_workdir(&mut runtime);
        let commands = record_commands(&mut runtime, |cmd| {
            if cmd.program() == "curl" { 6 } else { 0 }
        });

        let err = install(&runtime, &test_context(false)).await.unwrap_err();
        assert_eq!(err.to_string(), "command failed with exit code 6");
        assert_eq!(commands.lock().unwrap().len(), 1);
    }
}
