//! # Send Loop
//!
//! Sequences the two external tools against the configured target.
//!
//! ```text
//! checking-dependencies ──(both resolve)──▶ looping ──(interrupt | bound)──▶ terminated
//!          │                                                                     ▲
//!          └──────────────────────(a tool is missing)────────────────────────────┘
//! ```
//!
//! Every step runs to completion before the next begins. The outcome of an
//! invocation is logged and otherwise ignored.

use std::path::{Path, PathBuf};

use pulse_common::config::Config;
use pulse_common::error::PulseError;
use pulse_common::tools::{self, Invocation};
use tracing::{debug, info, warn};

use crate::resolver::{self, ResolvedTools, SearchPath};
use crate::runner::CommandRunner;
use crate::shutdown::Shutdown;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    CheckingDependencies,
    Looping,
    Terminated,
}

/// Outcome of a completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Iterations whose two invocations both finished.
    pub iterations: u64,
    /// Invocations that exited unsuccessfully or could not be started.
    pub failures: u64,
    /// The run ended because of an interrupt rather than its iteration bound.
    pub interrupted: bool,
}

pub struct Driver<R: CommandRunner> {
    cfg: Config,
    search_path: SearchPath,
    runner: R,
    state: DriverState,
    /// Resolved program and arguments per step. Empty until `check` passes.
    plan: Vec<(PathBuf, Invocation)>,
}

impl<R: CommandRunner> Driver<R> {
    pub fn new(cfg: Config, search_path: SearchPath, runner: R) -> Self {
        Self {
            cfg,
            search_path,
            runner,
            state: DriverState::CheckingDependencies,
            plan: Vec::new(),
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Resolves both tools. On failure the driver is terminated and
    /// `run` will not invoke anything.
    pub fn check(&mut self) -> Result<(), PulseError> {
        self.state = DriverState::CheckingDependencies;
        let resolved: ResolvedTools = match resolver::check_dependencies(&self.search_path) {
            Ok(resolved) => resolved,
            Err(e) => {
                self.state = DriverState::Terminated;
                return Err(e);
            }
        };

        self.plan = tools::iteration_plan(&self.cfg)
            .into_iter()
            .map(|invocation| (resolved.path(invocation.tool).to_path_buf(), invocation))
            .collect();
        Ok(())
    }

    /// Checks the dependencies unless `check` already passed, then loops
    /// until `shutdown` fires or the iteration bound is reached.
    pub async fn run(&mut self, mut shutdown: Shutdown) -> Result<RunSummary, PulseError> {
        if self.state == DriverState::Terminated || self.plan.is_empty() {
            self.check()?;
        }

        self.state = DriverState::Looping;
        info!(
            "Sending to {}:{} via {} every {:.2}s",
            self.cfg.target_ip,
            self.cfg.target_port,
            self.cfg.interface,
            self.cfg.interval.as_secs_f64()
        );

        let mut summary = RunSummary::default();
        loop {
            if self.cfg.is_exhausted(summary.iterations) {
                break;
            }
            if shutdown.is_triggered() {
                summary.interrupted = true;
                break;
            }

            for (program, invocation) in &self.plan {
                if !self.invoke(program, invocation).await {
                    summary.failures += 1;
                }
            }
            summary.iterations += 1;
            debug!("iteration {} complete", summary.iterations);

            if self.cfg.is_exhausted(summary.iterations) {
                break;
            }

            tokio::select! {
                biased;
                _ = shutdown.wait() => {
                    summary.interrupted = true;
                    break;
                }
                _ = tokio::time::sleep(self.cfg.interval) => {}
            }
        }

        self.state = DriverState::Terminated;
        Ok(summary)
    }

    /// Returns whether the invocation succeeded. Failures are only logged.
    async fn invoke(&self, program: &Path, invocation: &Invocation) -> bool {
        debug!("running {}", invocation);
        match self.runner.run(program, invocation).await {
            Ok(status) if status.success => true,
            Ok(status) => {
                match status.code {
                    Some(code) => warn!("{} exited with status {}", invocation.tool, code),
                    None => warn!("{} was terminated by a signal", invocation.tool),
                }
                false
            }
            Err(e) => {
                warn!("{}", e);
                false
            }
        }
    }
}
