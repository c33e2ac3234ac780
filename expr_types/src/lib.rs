//! # Expression Types
//!
//! This crate defines the program model shared by the editor, the query
//! library, the text classifier and the interpreter.
//!
//! ## Philosophy
//!
//! - **Ids are the only address**: every node carries a unique, stable id
//! - **Immutable nodes**: edits build a new root and share untouched subtrees
//! - **Closed variants**: nine expression kinds, three value kinds, matched
//!   exhaustively everywhere
//!
//! ## Key Types
//!
//! - [`Expression`]: a node of the program tree
//! - [`ExprRef`]: shared handle to a node
//! - [`ChildSlot`]: structural position of a child inside its parent
//! - [`Value`]: number, string or boolean
//! - [`ExprId`] / [`RunId`]: node and run identifiers

pub mod display;
pub mod expression;
pub mod ids;
pub mod sample;
pub mod value;

pub use expression::{BooleanOperator, ChildSlot, ExprRef, Expression, UnknownOperator};
pub use ids::{ExprId, RunId};
pub use sample::{empty_program, sample_program};
pub use value::{format_number, Value, ValueKind};
