use dpx_domain::Interpreter;
use which::which;

const PRIMARY_CANDIDATES: [&str; 2] = ["python2", "python"];
const SECONDARY_CANDIDATES: [&str; 1] = ["python3"];

/// The pair of interpreter targets every operation sequences over.
#[derive(Debug, Clone)]
pub struct Toolchain {
    pub primary: Interpreter,
    pub secondary: Interpreter,
}

impl Toolchain {
    /// Resolve both interpreters from `PATH`. Never fails: a miss produces an
    /// unresolved interpreter whose spawn later reports command-not-found.
    /// Called once at orchestrator start, never cached across invocations.
    pub fn resolve() -> Self {
        Self {
            primary: resolve_interpreter(&PRIMARY_CANDIDATES),
            secondary: resolve_interpreter(&SECONDARY_CANDIDATES),
        }
    }

    /// Install/test order: primary first, then secondary.
    pub fn both(&self) -> [Interpreter; 2] {
        [self.primary.clone(), self.secondary.clone()]
    }
}

fn resolve_interpreter(candidates: &[&str]) -> Interpreter {
    for candidate in candidates {
        if let Ok(path) = which(candidate) {
            return Interpreter::resolved(*candidate, path.to_string_lossy().into_owned());
        }
    }
    Interpreter::unresolved(candidates[0])
}
