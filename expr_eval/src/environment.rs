//! Runtime environment: variable bindings and callable functions

use crate::error::EvalResult;
use crate::output::OutputSink;
use crate::stdlib;
use expr_types::{ExprRef, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Signature of a built-in function
pub type NativeFn = fn(&[Value], &mut dyn OutputSink) -> EvalResult<Value>;

/// A function defined by the program
#[derive(Debug, PartialEq)]
pub struct UserFunction {
    pub name: String,
    pub parameters: Vec<String>,
    pub body: ExprRef,
}

/// Anything that can be called by name
#[derive(Clone)]
pub enum Callable {
    Native { name: &'static str, func: NativeFn },
    User(Arc<UserFunction>),
}

impl Callable {
    pub fn name(&self) -> &str {
        match self {
            Callable::Native { name, .. } => name,
            Callable::User(f) => &f.name,
        }
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callable::Native { name, .. } => write!(f, "Native({})", name),
            Callable::User(func) => write!(f, "User({}/{})", func.name, func.parameters.len()),
        }
    }
}

/// Variables and functions visible to an evaluation
///
/// Maps are mutated in place while a program runs, so an environment must
/// never be shared between concurrent evaluations. User function calls run
/// in a [`fork`](Self::fork) of the caller's environment.
#[derive(Debug, Clone, Default)]
pub struct RuntimeEnvironment {
    pub variables: BTreeMap<String, Value>,
    pub functions: BTreeMap<String, Callable>,
}

impl RuntimeEnvironment {
    /// Creates an environment with no variables and no functions
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh environment holding the built-in functions
    pub fn with_standard_library() -> Self {
        Self {
            variables: BTreeMap::new(),
            functions: stdlib::standard_library(),
        }
    }

    /// Shallow copy of both maps
    pub fn fork(&self) -> Self {
        self.clone()
    }

    pub fn bind(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn define(&mut self, callable: Callable) {
        self.functions.insert(callable.name().to_string(), callable);
    }

    pub fn function(&self, name: &str) -> Option<&Callable> {
        self.functions.get(name)
    }
}
