//! Node.js 22.x from the NodeSource apt repository, plus a global pyright.

use anyhow::Result;

use super::{RunContext, clear_staged};
use crate::command::{CommandLine, run};
use crate::runtime::Runtime;

const SETUP_URL: &str = "https://deb.nodesource.com/setup_22.x";

#[tracing::instrument(skip(runtime, ctx))]
pub async fn install<R: Runtime>(runtime: &R, ctx: &RunContext) -> Result<()> {
    let script = ctx.workdir.join("nodesource_setup.sh");

    clear_staged(runtime, &script)?;

    run(
        runtime,
        &CommandLine::new("curl")
            .arg("-fsSL")
            .arg(SETUP_URL)
            .arg("-o")
            .arg(&script),
    )
    .await?;
    run(runtime, &CommandLine::new("sudo").args(["-E", "bash"]).arg(&script)).await?;
    run(
        runtime,
        &CommandLine::new("sudo").args(["apt-get", "install", "-y", "nodejs"]),
    )
    .await?;
    clear_staged(runtime, &script)?;

    run(runtime, &CommandLine::new("node").arg("-v")).await?;
    run(
        runtime,
        &CommandLine::new("sudo").args(["npm", "install", "-g", "pyright"]),
    )
    .await
}
