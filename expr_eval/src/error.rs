//! Interpreter failures

use expr_types::{BooleanOperator, UnknownOperator, ValueKind};
use thiserror::Error;

/// A failure detected while evaluating a program
///
/// The first failure aborts the run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpreterError {
    #[error("Variable '{name}' is not defined")]
    UndefinedVariable { name: String },

    #[error("Function '{name}' is not defined")]
    UndefinedFunction { name: String },

    #[error("Cannot assign null value to '{variable}'")]
    NullAssignment { variable: String },

    #[error("Cannot pass null value as argument to '{function}'")]
    NullArgument { function: String },

    #[error("Function '{function}' expects {expected} arguments, got {found}")]
    ArityMismatch {
        function: String,
        expected: usize,
        found: usize,
    },

    #[error("{operator} operator is missing an operand")]
    MissingOperand { operator: BooleanOperator },

    #[error("{context} must be {expected}")]
    TypeError { context: String, expected: ValueKind },

    #[error("division by zero")]
    DivisionByZero,

    #[error("Unknown boolean operator: {0}")]
    UnknownOperator(String),
}

impl From<UnknownOperator> for InterpreterError {
    fn from(err: UnknownOperator) -> Self {
        InterpreterError::UnknownOperator(err.0)
    }
}

impl InterpreterError {
    pub(crate) fn type_error(context: impl Into<String>, expected: ValueKind) -> Self {
        InterpreterError::TypeError {
            context: context.into(),
            expected,
        }
    }
}

/// Result of evaluating an expression
pub type EvalResult<T> = Result<T, InterpreterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = InterpreterError::ArityMismatch {
            function: "inc".to_string(),
            expected: 1,
            found: 2,
        };
        assert_eq!(err.to_string(), "Function 'inc' expects 1 arguments, got 2");

        let err = InterpreterError::type_error("if condition", ValueKind::Boolean);
        assert_eq!(err.to_string(), "if condition must be boolean");
    }

    #[test]
    fn test_unknown_operator_conversion() {
        let parse_err = "xor".parse::<BooleanOperator>().unwrap_err();
        let err: InterpreterError = parse_err.into();
        assert_eq!(err, InterpreterError::UnknownOperator("xor".to_string()));
        assert_eq!(err.to_string(), "Unknown boolean operator: xor");
    }
}
