//! # Expression Query Library
//!
//! Pure functions over an immutable program tree. Every lookup takes the
//! root and a target id and walks the tree; nothing is cached, since the
//! root is replaced on every edit.
//!
//! ## Operations
//!
//! - [`linearize`]: pre-order id sequence that defines left/right movement
//! - [`find_by_id`], [`find_parent`], [`find_slot`]
//! - Direct and recursive sibling lookups in both directions
//! - [`collect_variables`], [`node_count`]

pub mod siblings;
pub mod traverse;
pub mod variables;

pub use siblings::{
    find_direct_next_sibling, find_direct_previous_sibling, find_next_sibling_recursive,
    find_previous_sibling_recursive,
};
pub use traverse::{find_by_id, find_parent, find_slot, linearize, node_count};
pub use variables::collect_variables;
