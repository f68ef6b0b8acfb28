use std::{
    io,
    path::Path,
    process::{Command, Stdio},
};

/// Exit code reported when the program itself cannot be found. Matches the
/// shell convention so a missing interpreter is indistinguishable from any
/// other failing tool at this layer.
pub const COMMAND_NOT_FOUND_CODE: i32 = 127;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecStatus {
    pub code: i32,
}

impl ExecStatus {
    pub fn success(self) -> bool {
        self.code == 0
    }
}

#[derive(Debug, thiserror::Error)]
#[error("failed to start {program}")]
pub struct SpawnError {
    pub program: String,
    #[source]
    pub source: io::Error,
}

/// Execute a program with inherited stdio, blocking until it exits.
///
/// The child shares the orchestrator's streams, so its output interleaves
/// with ours instead of being captured. A missing executable is folded into
/// `ExecStatus` as exit code 127; only spawn failures that are not
/// command-not-found surface as errors.
pub fn run_command_passthrough(
    program: &str,
    args: &[String],
    cwd: &Path,
) -> Result<ExecStatus, SpawnError> {
    let mut command = Command::new(program);
    command.args(args);
    command.current_dir(cwd);
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    match command.status() {
        Ok(status) => Ok(ExecStatus {
            code: status.code().unwrap_or(-1),
        }),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(ExecStatus {
            code: COMMAND_NOT_FOUND_CODE,
        }),
        Err(err) => Err(SpawnError {
            program: program.to_string(),
            source: err,
        }),
    }
}
