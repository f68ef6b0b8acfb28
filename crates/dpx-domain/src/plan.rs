use serde::{Deserialize, Serialize};

/// A resolved interpreter execution target.
///
/// `program` is what actually reaches the process spawner: the absolute path
/// when the interpreter was found on `PATH`, otherwise the logical name so the
/// miss surfaces at spawn time as command-not-found rather than during
/// resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpreter {
    name: String,
    program: String,
}

impl Interpreter {
    pub fn resolved(name: impl Into<String>, program: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
        }
    }

    /// An interpreter that was not found on the host. Spawning it reports
    /// command-not-found; resolution itself never fails.
    pub fn unresolved(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            program: name.clone(),
            name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

/// One external invocation: an interpreter plus its argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub interpreter: Interpreter,
    pub args: Vec<String>,
}

impl Step {
    pub fn new(interpreter: Interpreter, args: &[&str]) -> Self {
        Self {
            interpreter,
            args: args.iter().map(ToString::to_string).collect(),
        }
    }
}

/// How a plan reacts to a failing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencePolicy {
    /// Halt the sequence at the first non-zero exit.
    FailFast,
    /// Attempt every step, then aggregate: first recorded failure wins.
    BestEffort,
}

/// An ordered step sequence owned by one named operation.
#[derive(Debug, Clone)]
pub struct Plan {
    pub steps: Vec<Step>,
    pub policy: SequencePolicy,
}

impl Plan {
    pub fn fail_fast(steps: Vec<Step>) -> Self {
        Self {
            steps,
            policy: SequencePolicy::FailFast,
        }
    }

    pub fn best_effort(steps: Vec<Step>) -> Self {
        Self {
            steps,
            policy: SequencePolicy::BestEffort,
        }
    }
}

/// Outcome of one executed step, kept for the operation's report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    pub interpreter: String,
    pub code: i32,
}

impl StepRecord {
    pub fn succeeded(&self) -> bool {
        self.code == 0
    }
}
