mod clean;

use std::fmt;

use anyhow::Result;
use serde_json::json;

use dpx_domain::{
    is_missing_project_error, Plan, ProjectSnapshot, SequencePolicy, Step, StepRecord, SETUP_SCRIPT,
    TEST_TARGET,
};

use crate::effects::CommandRunner;
use crate::outcome::{missing_project_outcome, ExecutionOutcome};
use crate::toolchain::Toolchain;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Build,
    Publish,
    Install,
    Test,
    Clean,
}

impl Operation {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Operation::Build => "build",
            Operation::Publish => "publish",
            Operation::Install => "install",
            Operation::Test => "test",
            Operation::Clean => "clean",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run one named operation against the current directory's package.
///
/// Interpreter resolution happens here, once per invocation, so nothing
/// ambient leaks into the sequencing below it.
pub fn execute(operation: Operation, runner: &dyn CommandRunner) -> Result<ExecutionOutcome> {
    let project = match ProjectSnapshot::read_current() {
        Ok(project) => project,
        Err(err) if is_missing_project_error(&err) => return Ok(missing_project_outcome()),
        Err(err) => return Err(err),
    };
    let toolchain = Toolchain::resolve();
    run_operation(operation, &toolchain, &project, runner)
}

pub(crate) fn run_operation(
    operation: Operation,
    toolchain: &Toolchain,
    project: &ProjectSnapshot,
    runner: &dyn CommandRunner,
) -> Result<ExecutionOutcome> {
    let plan = operation_plan(operation, toolchain);
    let records = run_plan(&plan, project, runner)?;
    summarize(operation, project, &records)
}

fn operation_plan(operation: Operation, toolchain: &Toolchain) -> Plan {
    match operation {
        Operation::Build => Plan::fail_fast(vec![Step::new(
            toolchain.primary.clone(),
            &[SETUP_SCRIPT, "sdist"],
        )]),
        // Registration and upload are one atomic call as far as we can
        // observe; only the final exit code comes back.
        Operation::Publish => Plan::fail_fast(vec![Step::new(
            toolchain.primary.clone(),
            &[SETUP_SCRIPT, "register", "sdist", "upload"],
        )]),
        Operation::Install => Plan::best_effort(
            toolchain
                .both()
                .into_iter()
                .map(|interp| Step::new(interp, &[SETUP_SCRIPT, "install"]))
                .collect(),
        ),
        Operation::Test => Plan::best_effort(
            toolchain
                .both()
                .into_iter()
                .map(|interp| Step::new(interp, &["-m", "pytest", TEST_TARGET]))
                .collect(),
        ),
        Operation::Clean => Plan::fail_fast(vec![Step::new(
            toolchain.primary.clone(),
            &[SETUP_SCRIPT, "clean"],
        )]),
    }
}

fn run_plan(
    plan: &Plan,
    project: &ProjectSnapshot,
    runner: &dyn CommandRunner,
) -> Result<Vec<StepRecord>> {
    let mut records = Vec::new();
    for step in &plan.steps {
        tracing::debug!(
            interpreter = step.interpreter.name(),
            program = step.interpreter.program(),
            args = ?step.args,
            "running step"
        );
        let status = runner.run(step.interpreter.program(), &step.args, &project.root)?;
        records.push(StepRecord {
            interpreter: step.interpreter.name().to_string(),
            code: status.code,
        });
        if !status.success() && plan.policy == SequencePolicy::FailFast {
            break;
        }
    }
    Ok(records)
}

fn first_failure(records: &[StepRecord]) -> Option<&StepRecord> {
    records.iter().find(|record| !record.succeeded())
}

fn interpreter_list(records: &[StepRecord]) -> String {
    records
        .iter()
        .map(|record| record.interpreter.as_str())
        .collect::<Vec<_>>()
        .join(" and ")
}

fn summarize(
    operation: Operation,
    project: &ProjectSnapshot,
    records: &[StepRecord],
) -> Result<ExecutionOutcome> {
    let steps = serde_json::to_value(records)?;
    if let Some(failed) = first_failure(records) {
        let message = match operation {
            Operation::Build => format!("sdist build failed under {}", failed.interpreter),
            Operation::Publish => "register/upload failed".to_string(),
            Operation::Install => format!("install failed under {}", failed.interpreter),
            Operation::Test => format!("tests failed under {}", failed.interpreter),
            Operation::Clean => "clean failed".to_string(),
        };
        return Ok(ExecutionOutcome::failure(
            message,
            json!({ "steps": steps, "exit_code": failed.code }),
        ));
    }

    let outcome = match operation {
        Operation::Build => {
            let message = match &project.name {
                Some(name) => format!("{name} sdist built with {}", interpreter_list(records)),
                None => format!("sdist built with {}", interpreter_list(records)),
            };
            ExecutionOutcome::success(message, json!({ "steps": steps }))
        }
        Operation::Publish => {
            ExecutionOutcome::success("package registered and uploaded", json!({ "steps": steps }))
        }
        Operation::Install => ExecutionOutcome::success(
            format!("installed under {}", interpreter_list(records)),
            json!({ "steps": steps }),
        ),
        Operation::Test => ExecutionOutcome::success(
            format!("tests passed under {}", interpreter_list(records)),
            json!({ "steps": steps }),
        ),
        Operation::Clean => {
            let removed = clean::sweep_bytecode(&project.root)?;
            ExecutionOutcome::success(
                format!("cleaned; removed {removed} bytecode artifacts"),
                json!({ "steps": steps, "bytecode_removed": removed }),
            )
        }
    };
    Ok(outcome)
}
