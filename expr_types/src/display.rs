//! Plain-text rendering of expressions in the surface syntax
//!
//! Operands of binary operators are printed without parentheses, so a
//! nested boolean such as `(a and b) == c` renders as `a and b == c` and
//! does not classify back to the same tree.

use crate::expression::{BooleanOperator, ExprRef, Expression};
use crate::value::Value;
use std::fmt;

fn write_operand(f: &mut fmt::Formatter<'_>, operand: &Option<ExprRef>) -> fmt::Result {
    match operand {
        Some(e) => write!(f, "{}", e),
        None => f.write_str("?"),
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[ExprRef], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Stack { expressions, .. } => write_joined(f, expressions, "; "),
            Expression::FunctionCall {
                function_name,
                arguments,
                ..
            } => {
                write!(f, "{}(", function_name)?;
                write_joined(f, arguments, ", ")?;
                f.write_str(")")
            }
            Expression::Value {
                value: Value::Text(s),
                ..
            } => write!(f, "\"{}\"", s),
            Expression::Value { value, .. } => write!(f, "{}", value),
            Expression::While {
                condition, body, ..
            } => write!(f, "while {} {{ {} }}", condition, body),
            Expression::Assignment {
                variable_name,
                value,
                ..
            } => write!(f, "{} = {}", variable_name, value),
            Expression::Variable { variable_name, .. } => f.write_str(variable_name),
            Expression::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                write!(f, "if {} {{ {} }}", condition, then_branch)?;
                if let Some(else_branch) = else_branch {
                    write!(f, " else {{ {} }}", else_branch)?;
                }
                Ok(())
            }
            Expression::FunctionDefinition {
                function_name,
                parameters,
                body,
                ..
            } => write!(
                f,
                "fn {}({}) {{ {} }}",
                function_name,
                parameters.join(", "),
                body
            ),
            Expression::Boolean {
                operator: BooleanOperator::Not,
                left,
                ..
            } => {
                f.write_str("not ")?;
                write_operand(f, left)
            }
            Expression::Boolean {
                operator,
                left,
                right,
                ..
            } => {
                write_operand(f, left)?;
                write!(f, " {} ", operator.symbol())?;
                write_operand(f, right)
            }
        }
    }
}
