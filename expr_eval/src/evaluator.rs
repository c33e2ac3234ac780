//! Tree-walking evaluator
//!
//! `evaluate` returns `Ok(None)` when an expression produces no value
//! (an empty stack, a function definition, an `if` without a taken
//! branch, a loop that never ran).

use crate::environment::{Callable, RuntimeEnvironment, UserFunction};
use crate::error::{EvalResult, InterpreterError};
use crate::output::OutputSink;
use expr_types::{BooleanOperator, ExprRef, Expression, Value, ValueKind};
use std::sync::Arc;

/// Evaluates expressions, sending `print` output to a sink
pub struct Evaluator<'o> {
    output: &'o mut dyn OutputSink,
}

impl<'o> Evaluator<'o> {
    pub fn new(output: &'o mut dyn OutputSink) -> Self {
        Self { output }
    }

    /// Evaluates `expr` against `env`
    pub fn evaluate(
        &mut self,
        expr: &Expression,
        env: &mut RuntimeEnvironment,
    ) -> EvalResult<Option<Value>> {
        match expr {
            Expression::Value { value, .. } => Ok(Some(value.clone())),

            Expression::Variable { variable_name, .. } => env
                .lookup(variable_name)
                .cloned()
                .map(Some)
                .ok_or_else(|| InterpreterError::UndefinedVariable {
                    name: variable_name.clone(),
                }),

            Expression::Assignment {
                variable_name,
                value,
                ..
            } => {
                let value = self.evaluate(value, env)?.ok_or_else(|| {
                    InterpreterError::NullAssignment {
                        variable: variable_name.clone(),
                    }
                })?;
                env.bind(variable_name.clone(), value.clone());
                Ok(Some(value))
            }

            Expression::FunctionCall {
                function_name,
                arguments,
                ..
            } => {
                let callable = env.function(function_name).cloned().ok_or_else(|| {
                    InterpreterError::UndefinedFunction {
                        name: function_name.clone(),
                    }
                })?;
                let mut args = Vec::with_capacity(arguments.len());
                for arg in arguments {
                    let value = self.evaluate(arg, env)?.ok_or_else(|| {
                        InterpreterError::NullArgument {
                            function: function_name.clone(),
                        }
                    })?;
                    args.push(value);
                }
                self.invoke(&callable, &args, env).map(Some)
            }

            Expression::Stack { expressions, .. } => {
                let mut last = None;
                for child in expressions {
                    last = self.evaluate(child, env)?;
                }
                Ok(last)
            }

            Expression::Boolean {
                operator,
                left,
                right,
                ..
            } => self
                .evaluate_boolean(*operator, left.as_ref(), right.as_ref(), env)
                .map(Some),

            Expression::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                if self.condition(condition, "if condition", env)? {
                    self.evaluate(then_branch, env)
                } else if let Some(else_branch) = else_branch {
                    self.evaluate(else_branch, env)
                } else {
                    Ok(None)
                }
            }

            // No iteration cap: a loop whose condition stays true never returns
            Expression::While {
                condition, body, ..
            } => {
                let mut result = None;
                while self.condition(condition, "while condition", env)? {
                    result = self.evaluate(body, env)?;
                }
                Ok(result)
            }

            Expression::FunctionDefinition {
                function_name,
                parameters,
                body,
                ..
            } => {
                env.define(Callable::User(Arc::new(UserFunction {
                    name: function_name.clone(),
                    parameters: parameters.clone(),
                    body: Arc::clone(body),
                })));
                Ok(None)
            }
        }
    }

    /// Calls `callable` with already evaluated arguments
    ///
    /// User functions run in a fork of `env`, the environment live at the
    /// call site, with parameters bound on top. A body that yields no value
    /// returns `false`.
    pub fn invoke(
        &mut self,
        callable: &Callable,
        args: &[Value],
        env: &RuntimeEnvironment,
    ) -> EvalResult<Value> {
        match callable {
            Callable::Native { func, .. } => func(args, &mut *self.output),
            Callable::User(function) => {
                if args.len() != function.parameters.len() {
                    return Err(InterpreterError::ArityMismatch {
                        function: function.name.clone(),
                        expected: function.parameters.len(),
                        found: args.len(),
                    });
                }
                let mut call_env = env.fork();
                for (param, arg) in function.parameters.iter().zip(args) {
                    call_env.bind(param.clone(), arg.clone());
                }
                let result = self.evaluate(&function.body, &mut call_env)?;
                Ok(result.unwrap_or(Value::Boolean(false)))
            }
        }
    }

    fn condition(
        &mut self,
        condition: &Expression,
        context: &str,
        env: &mut RuntimeEnvironment,
    ) -> EvalResult<bool> {
        match self.evaluate(condition, env)? {
            Some(Value::Boolean(b)) => Ok(b),
            _ => Err(InterpreterError::type_error(context, ValueKind::Boolean)),
        }
    }

    fn boolean_operand(
        &mut self,
        operator: BooleanOperator,
        operand: &Expression,
        env: &mut RuntimeEnvironment,
    ) -> EvalResult<bool> {
        match self.evaluate(operand, env)? {
            Some(Value::Boolean(b)) => Ok(b),
            _ => Err(InterpreterError::type_error(
                format!("{} operands", operator),
                ValueKind::Boolean,
            )),
        }
    }

    fn numeric_operand(
        &mut self,
        operator: BooleanOperator,
        operand: &Expression,
        env: &mut RuntimeEnvironment,
    ) -> EvalResult<f64> {
        match self.evaluate(operand, env)? {
            Some(Value::Number(n)) => Ok(n),
            _ => Err(InterpreterError::type_error(
                format!("{} operands", operator),
                ValueKind::Number,
            )),
        }
    }

    fn evaluate_boolean(
        &mut self,
        operator: BooleanOperator,
        left: Option<&ExprRef>,
        right: Option<&ExprRef>,
        env: &mut RuntimeEnvironment,
    ) -> EvalResult<Value> {
        let missing = || InterpreterError::MissingOperand { operator };
        let left = left.ok_or_else(missing)?;
        if operator == BooleanOperator::Not {
            return Ok(Value::Boolean(!self.boolean_operand(operator, left, env)?));
        }
        let right = right.ok_or_else(missing)?;

        let result = match operator {
            BooleanOperator::And => {
                self.boolean_operand(operator, left, env)?
                    && self.boolean_operand(operator, right, env)?
            }
            BooleanOperator::Or => {
                self.boolean_operand(operator, left, env)?
                    || self.boolean_operand(operator, right, env)?
            }
            BooleanOperator::Equals => {
                let l = self.evaluate(left, env)?;
                let r = self.evaluate(right, env)?;
                l == r
            }
            BooleanOperator::LessThan => {
                let l = self.numeric_operand(operator, left, env)?;
                let r = self.numeric_operand(operator, right, env)?;
                l < r
            }
            BooleanOperator::GreaterThan => {
                let l = self.numeric_operand(operator, left, env)?;
                let r = self.numeric_operand(operator, right, env)?;
                l > r
            }
            BooleanOperator::Not => unreachable!("handled above"),
        };
        Ok(Value::Boolean(result))
    }
}

/// Evaluates `expr` against `env`, collecting `print` output in `output`
pub fn evaluate(
    expr: &Expression,
    env: &mut RuntimeEnvironment,
    output: &mut dyn OutputSink,
) -> EvalResult<Option<Value>> {
    Evaluator::new(output).evaluate(expr, env)
}
