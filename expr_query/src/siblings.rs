//! Sibling navigation
//!
//! Direct siblings are neighbours in the parent's child order: adjacent
//! entries of a stack or argument list, and for fixed-shape nodes the
//! slot order (while: condition, body; if: condition, then, else;
//! boolean: left, right). Recursive lookups climb to the parent when a
//! node has no sibling in the requested direction.

use crate::traverse::{find_parent, find_slot};
use expr_types::{ExprId, Expression};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Next,
    Previous,
}

fn direct_sibling(root: &Expression, id: &ExprId, direction: Direction) -> Option<ExprId> {
    let (parent, slot) = find_slot(root, id)?;
    let children = parent.children();
    let pos = children.iter().position(|(s, _)| *s == slot)?;
    let target = match direction {
        Direction::Next => pos.checked_add(1)?,
        Direction::Previous => pos.checked_sub(1)?,
    };
    children.get(target).map(|(_, child)| child.id().clone())
}

fn recursive_sibling(root: &Expression, id: &ExprId, direction: Direction) -> Option<ExprId> {
    let mut current = id.clone();
    loop {
        if let Some(sibling) = direct_sibling(root, &current, direction) {
            return Some(sibling);
        }
        current = find_parent(root, &current)?;
    }
}

/// Next node in the same parent
pub fn find_direct_next_sibling(root: &Expression, id: &ExprId) -> Option<ExprId> {
    direct_sibling(root, id, Direction::Next)
}

/// Previous node in the same parent
pub fn find_direct_previous_sibling(root: &Expression, id: &ExprId) -> Option<ExprId> {
    direct_sibling(root, id, Direction::Previous)
}

/// Next sibling of `id` or of its nearest ancestor that has one
pub fn find_next_sibling_recursive(root: &Expression, id: &ExprId) -> Option<ExprId> {
    recursive_sibling(root, id, Direction::Next)
}

/// Previous sibling of `id` or of its nearest ancestor that has one
pub fn find_previous_sibling_recursive(root: &Expression, id: &ExprId) -> Option<ExprId> {
    recursive_sibling(root, id, Direction::Previous)
}
