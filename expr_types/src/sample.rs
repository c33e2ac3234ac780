//! Built-in sample program
//!
//! Hosts that start with content load this program: a counter loop that
//! prints a greeting three times and then copies it into `output`.

use crate::expression::{ExprRef, Expression};
use crate::ids::ExprId;
use crate::value::Value;
use std::sync::Arc;

fn id(n: u32) -> ExprId {
    ExprId::new(n.to_string())
}

fn var(n: u32, name: &str) -> ExprRef {
    Arc::new(Expression::Variable {
        id: id(n),
        variable_name: name.to_string(),
    })
}

fn lit(n: u32, value: impl Into<Value>) -> ExprRef {
    Arc::new(Expression::Value {
        id: id(n),
        value: value.into(),
    })
}

fn call(n: u32, name: &str, arguments: Vec<ExprRef>) -> ExprRef {
    Arc::new(Expression::FunctionCall {
        id: id(n),
        function_name: name.to_string(),
        arguments,
    })
}

fn assign(n: u32, name: &str, value: ExprRef) -> ExprRef {
    Arc::new(Expression::Assignment {
        id: id(n),
        variable_name: name.to_string(),
        value,
    })
}

/// Returns the sample program (ids `"0"` through `"17"`)
pub fn sample_program() -> ExprRef {
    Arc::new(Expression::Stack {
        id: id(0),
        expressions: vec![
            assign(1, "counter", lit(2, 0.0)),
            assign(3, "message", lit(4, "Hello, world!")),
            Arc::new(Expression::While {
                id: id(5),
                condition: call(6, "lessThan", vec![var(7, "counter"), lit(8, 3.0)]),
                body: Arc::new(Expression::Stack {
                    id: id(9),
                    expressions: vec![
                        call(10, "print", vec![var(11, "message")]),
                        assign(
                            12,
                            "counter",
                            call(13, "add", vec![var(14, "counter"), lit(15, 1.0)]),
                        ),
                    ],
                }),
            }),
            assign(16, "output", var(17, "message")),
        ],
    })
}

/// Returns an empty program: a root stack with no entries
pub fn empty_program() -> ExprRef {
    Arc::new(Expression::Stack {
        id: ExprId::generate(),
        expressions: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_program_root() {
        let program = sample_program();
        assert_eq!(program.id().as_str(), "0");
        assert_eq!(program.list_children().map(|c| c.len()), Some(4));
    }

    #[test]
    fn test_sample_program_renders() {
        assert_eq!(
            sample_program().to_string(),
            "counter = 0; message = \"Hello, world!\"; \
             while lessThan(counter, 3) { print(message); counter = add(counter, 1) }; \
             output = message"
        );
    }

    #[test]
    fn test_empty_program() {
        let program = empty_program();
        assert!(program.is_list());
        assert!(program.children().is_empty());
    }
}
