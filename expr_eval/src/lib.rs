//! # Expression Evaluator
//!
//! Tree-walking interpreter for expression programs.
//!
//! ## Philosophy
//!
//! - The first failure aborts the run; nothing is retried
//! - `print` output goes to an [`OutputSink`], never to a global stream
//! - User function calls run in a copy of the caller's environment, so
//!   assignments inside a call never leak back out
//!
//! ## Example
//!
//! ```
//! use expr_eval::run;
//! use expr_types::{Expression, Value};
//!
//! let program = Expression::call("add", vec![Expression::number(2.0), Expression::number(3.0)]);
//! let report = run(&program);
//! assert_eq!(report.result, Some(Value::Number(5.0)));
//! ```

pub mod environment;
pub mod error;
pub mod evaluator;
pub mod output;
pub mod run;
mod stdlib;

pub use environment::{Callable, NativeFn, RuntimeEnvironment, UserFunction};
pub use error::{EvalResult, InterpreterError};
pub use evaluator::{evaluate, Evaluator};
pub use output::OutputSink;
pub use run::{run, run_with_environment, RunReport};
