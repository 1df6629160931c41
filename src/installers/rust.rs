//! Rust toolchain via rustup.

use anyhow::Result;

use super::RunContext;
use crate::command::{CommandLine, run};
use crate::runtime::Runtime;

const BOOTSTRAP: &str = "curl https://sh.rustup.rs -sSf | sh -s -- -y";

#[tracing::instrument(skip(runtime, _ctx))]
pub async fn install<R: Runtime>(runtime: &R, _ctx: &RunContext) -> Result<()> {
    run(runtime, &CommandLine::new("bash").args(["-c", BOOTSTRAP])).await
}
