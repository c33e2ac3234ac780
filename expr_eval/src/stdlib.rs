//! Built-in functions present in every fresh environment

use crate::environment::{Callable, NativeFn};
use crate::error::{EvalResult, InterpreterError};
use crate::output::OutputSink;
use expr_types::{Value, ValueKind};
use std::collections::BTreeMap;

const BUILTINS: [(&str, NativeFn); 8] = [
    ("print", print),
    ("add", add),
    ("subtract", subtract),
    ("multiply", multiply),
    ("divide", divide),
    ("lessThan", less_than),
    ("greaterThan", greater_than),
    ("equals", equals),
];

/// Builds the function map of a fresh environment
pub fn standard_library() -> BTreeMap<String, Callable> {
    BUILTINS
        .iter()
        .map(|&(name, func)| (name.to_string(), Callable::Native { name, func }))
        .collect()
}

fn expect_arity(function: &str, args: &[Value], expected: usize) -> EvalResult<()> {
    if args.len() != expected {
        return Err(InterpreterError::ArityMismatch {
            function: function.to_string(),
            expected,
            found: args.len(),
        });
    }
    Ok(())
}

fn numeric_pair(function: &str, args: &[Value]) -> EvalResult<(f64, f64)> {
    expect_arity(function, args, 2)?;
    match (&args[0], &args[1]) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(InterpreterError::type_error(
            format!("{} arguments", function),
            ValueKind::Number,
        )),
    }
}

fn print(args: &[Value], output: &mut dyn OutputSink) -> EvalResult<Value> {
    let line = args
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    output.emit(line.clone());
    Ok(Value::Text(line))
}

fn add(args: &[Value], _: &mut dyn OutputSink) -> EvalResult<Value> {
    let (a, b) = numeric_pair("add", args)?;
    Ok(Value::Number(a + b))
}

fn subtract(args: &[Value], _: &mut dyn OutputSink) -> EvalResult<Value> {
    let (a, b) = numeric_pair("subtract", args)?;
    Ok(Value::Number(a - b))
}

fn multiply(args: &[Value], _: &mut dyn OutputSink) -> EvalResult<Value> {
    let (a, b) = numeric_pair("multiply", args)?;
    Ok(Value::Number(a * b))
}

fn divide(args: &[Value], _: &mut dyn OutputSink) -> EvalResult<Value> {
    let (a, b) = numeric_pair("divide", args)?;
    if b == 0.0 {
        return Err(InterpreterError::DivisionByZero);
    }
    Ok(Value::Number(a / b))
}

fn less_than(args: &[Value], _: &mut dyn OutputSink) -> EvalResult<Value> {
    let (a, b) = numeric_pair("lessThan", args)?;
    Ok(Value::Boolean(a < b))
}

fn greater_than(args: &[Value], _: &mut dyn OutputSink) -> EvalResult<Value> {
    let (a, b) = numeric_pair("greaterThan", args)?;
    Ok(Value::Boolean(a > b))
}

fn equals(args: &[Value], _: &mut dyn OutputSink) -> EvalResult<Value> {
    expect_arity("equals", args, 2)?;
    Ok(Value::Boolean(args[0] == args[1]))
}
