//! Ruff via Astral's install script.

use anyhow::Result;

use super::RunContext;
use crate::command::{CommandLine, run};
use crate::runtime::Runtime;

const BOOTSTRAP: &str = "curl -LsSf https://astral.sh/ruff/install.sh | sh";

#[tracing::instrument(skip(runtime, _ctx))]
pub async fn install<R: Runtime>(runtime: &R, _ctx: &RunContext) -> Result<()> {
    run(runtime, &CommandLine::new("bash").args(["-c", BOOTSTRAP])).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use crate::test_utils::{record_commands, test_context};

    #[tokio::test]
    async fn test_install_failure_propagates() {
        let mut runtime = MockRuntime::new();
        let commands = record_commands(&mut runtime, |_| 22);

        let err = install(&runtime, &test_context(false)).await.unwrap_err();

        assert_eq!(err.to_string(), "command failed with exit code 22");
        assert_eq!(
            commands.lock().unwrap()[0].to_string(),
            "bash -c curl -LsSf https://astral.sh/ruff/install.sh | sh"
        );
    }
}
