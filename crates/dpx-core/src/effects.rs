use std::path::Path;

use anyhow::Result;

use crate::process::{run_command_passthrough, ExecStatus};

/// Capability to execute an external command and report its exit status.
///
/// The orchestrator sequences steps through this trait only, so tests can
/// substitute a recording fake instead of spawning processes.
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<ExecStatus>;
}

/// Production runner: spawns children with inherited stdio.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<ExecStatus> {
        Ok(run_command_passthrough(program, args, cwd)?)
    }
}
