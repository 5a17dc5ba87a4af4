use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use pulse_common::error::PulseError;
use pulse_common::tools::Invocation;
use tokio::process::Command;

/// What the driver keeps of a finished child process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExitSummary {
    pub success: bool,
    pub code: Option<i32>,
}

impl ExitSummary {
    pub const SUCCESS: ExitSummary = ExitSummary { success: true, code: Some(0) };

    pub fn failed(code: i32) -> Self {
        Self { success: false, code: Some(code) }
    }
}

impl From<std::process::ExitStatus> for ExitSummary {
    fn from(status: std::process::ExitStatus) -> Self {
        Self { success: status.success(), code: status.code() }
    }
}

/// Runs one external invocation to completion.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &Path, invocation: &Invocation) -> Result<ExitSummary, PulseError>;
}

/// Spawns real child processes.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner {
    /// Discard the tools' own output instead of passing it through.
    pub silence_output: bool,
}

impl SystemRunner {
    pub fn new(silence_output: bool) -> Self {
        Self { silence_output }
    }

    fn output(&self) -> Stdio {
        if self.silence_output { Stdio::null() } else { Stdio::inherit() }
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &Path, invocation: &Invocation) -> Result<ExitSummary, PulseError> {
        let status = Command::new(program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(self.output())
            .stderr(self.output())
            .status()
            .await
            .map_err(|source| PulseError::Spawn {
                program: invocation.tool.program().to_string(),
                source,
            })?;

        Ok(ExitSummary::from(status))
    }
}
