#![deny(clippy::all, warnings)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

pub mod plan;
pub mod project;

pub use plan::{Interpreter, Plan, SequencePolicy, Step, StepRecord};
pub use project::{
    current_project_root, ensure_setup_script_exists, is_missing_project_error,
    missing_project_guidance, MissingProjectGuidance, ProjectSnapshot, SETUP_SCRIPT, TEST_TARGET,
};
