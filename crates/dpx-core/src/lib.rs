#![deny(clippy::all, warnings)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

mod commands;
mod effects;
mod outcome;
mod process;
mod toolchain;

pub use commands::{execute, Operation};
pub use effects::{CommandRunner, SystemRunner};
pub use outcome::{
    format_status_message, missing_project_outcome, process_exit_code, to_json_response,
    CommandStatus, ExecutionOutcome,
};
pub use process::{ExecStatus, SpawnError, COMMAND_NOT_FOUND_CODE};
pub use toolchain::Toolchain;
