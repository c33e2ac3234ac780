//! # Editor Core
//!
//! Structural (modal) editing over an expression tree.
//!
//! ## Philosophy
//!
//! - **Explicit session**: hosts own an `EditorCore`; there is no global store
//! - **Deterministic**: Same command trace => same editor state
//! - **Modal editing**: Normal and Insert modes
//! - **Always valid**: invalid edits are silent no-ops, never errors
//! - **Persistent tree**: every edit produces a new root that shares all
//!   untouched subtrees with the previous one
//!
//! ## Design
//!
//! The core provides:
//! - EditorCore: State machine for selection, mode and insertion
//! - CoreOutcome: Structured results from operations
//! - EditorSnapshot: Deterministic state for comparisons
//! - Key event abstraction: Platform-independent input representation

pub mod command;
pub mod core;
pub mod cursor;
pub mod key;
pub mod mode;
pub mod rewrite;
pub mod snapshot;

pub use command::EditorCommand;
pub use core::{CoreOutcome, EditorCore};
pub use cursor::InsertionCursor;
pub use key::Key;
pub use mode::EditorMode;
pub use snapshot::EditorSnapshot;
