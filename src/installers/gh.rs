//! GitHub CLI, installed from the prebuilt linux/amd64 tarball.

use anyhow::Result;

use super::{RunContext, clear_staged};
use crate::command::{CommandLine, run};
use crate::runtime::Runtime;

const VERSION: &str = "2.83.0";
const TARGET: &str = "/usr/local/bin/gh";

#[tracing::instrument(skip(runtime, ctx))]
pub async fn install<R: Runtime>(runtime: &R, ctx: &RunContext) -> Result<()> {
    let stem = format!("gh_{}_linux_amd64", VERSION);
    let archive_name = format!("{}.tar.gz", stem);
    let url = format!(
        "https://github.com/cli/cli/releases/download/v{}/{}",
        VERSION, archive_name
    );
    let archive = ctx.workdir.join(&archive_name);
    let extract_dir = ctx.workdir.join(&stem);

    clear_staged(runtime, &archive)?;
    clear_staged(runtime, &extract_dir)?;

    run(runtime, &CommandLine::new("curl").arg("-Lo").arg(&archive).arg(&url)).await?;
    run(
        runtime,
        &CommandLine::new("tar")
            .arg("-xzvf")
            .arg(&archive)
            .current_dir(&ctx.workdir),
    )
    .await?;

    let binary = extract_dir.join("bin").join("gh");
    run(
        runtime,
        &CommandLine::new("sudo")
            .args(["install", "-m", "755"])
            .arg(&binary)
            .arg(TARGET),
    )
    .await
}
