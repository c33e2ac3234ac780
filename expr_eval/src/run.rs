//! Run boundary: evaluate a whole program and report the outcome

use crate::environment::RuntimeEnvironment;
use crate::error::InterpreterError;
use crate::evaluator::Evaluator;
use expr_types::{Expression, RunId, Value};

/// Outcome of one program run
///
/// `output` holds every line printed before the run finished or failed.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub run_id: RunId,
    pub result: Option<Value>,
    pub output: Vec<String>,
    pub error: Option<InterpreterError>,
}

impl RunReport {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Runs `program` in a fresh standard-library environment
pub fn run(program: &Expression) -> RunReport {
    let mut env = RuntimeEnvironment::with_standard_library();
    run_with_environment(program, &mut env)
}

/// Runs `program` against a caller-supplied environment
///
/// Bindings made by the program remain in `env` afterwards, including
/// those made before a failure.
pub fn run_with_environment(program: &Expression, env: &mut RuntimeEnvironment) -> RunReport {
    let mut output = Vec::new();
    let outcome = Evaluator::new(&mut output).evaluate(program, env);
    let (result, error) = match outcome {
        Ok(result) => (result, None),
        Err(err) => (None, Some(err)),
    };
    RunReport {
        run_id: RunId::new(),
        result,
        output,
        error,
    }
}
