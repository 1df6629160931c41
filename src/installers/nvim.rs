//! Neovim, unpacked from the latest prebuilt tarball into /opt.

use anyhow::Result;

use super::{RunContext, clear_staged};
use crate::command::{CommandLine, run};
use crate::runtime::Runtime;

const ARCHIVE_NAME: &str = "nvim-linux-x86_64.tar.gz";
const PREFIX: &str = "/opt";
const INSTALL_DIR: &str = "/opt/nvim";

#[tracing::instrument(skip(runtime, ctx))]
pub async fn install<R: Runtime>(runtime: &R, ctx: &RunContext) -> Result<()> {
    let url = format!(
        "https://github.com/neovim/neovim/releases/latest/download/{}",
        ARCHIVE_NAME
    );
    let archive = ctx.workdir.join(ARCHIVE_NAME);

    clear_staged(runtime, &archive)?;

    run(runtime, &CommandLine::new("curl").arg("-Lo").arg(&archive).arg(&url)).await?;
    // The old tree is root-owned, so it goes through sudo as well
    run(runtime, &CommandLine::new("sudo").args(["rm", "-rf", INSTALL_DIR])).await?;
    run(
        runtime,
        &CommandLine::new("sudo")
            .args(["tar", "-C", PREFIX, "-xzf"])
            .arg(&archive),
    )
    .await
}
