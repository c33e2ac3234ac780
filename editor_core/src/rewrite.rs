//! Structural-sharing tree rewrites
//!
//! Every rewrite copies only the ancestors of the edited node and reuses
//! all other subtrees. When nothing changes, the input root is returned
//! as-is so callers can compare with `Arc::ptr_eq`.

use expr_query::find_slot;
use expr_types::{ChildSlot, ExprId, ExprRef, Expression};
use std::sync::Arc;

/// Rebuilds the path from `node` down to `target`, replacing the target
/// with the result of `edit`
fn rewrite_at(
    node: &ExprRef,
    target: &ExprId,
    edit: &dyn Fn(&Expression) -> Option<Expression>,
) -> Option<ExprRef> {
    if node.id() == target {
        return edit(node).map(Arc::new);
    }
    node.children().into_iter().find_map(|(slot, child)| {
        let replaced = rewrite_at(child, target, edit)?;
        node.with_child(slot, replaced).map(Arc::new)
    })
}

fn rewrite(
    root: &ExprRef,
    target: &ExprId,
    edit: &dyn Fn(&Expression) -> Option<Expression>,
) -> ExprRef {
    rewrite_at(root, target, edit).unwrap_or_else(|| Arc::clone(root))
}

/// Appends `node` as the last child of the list-shaped `container`
pub fn append_child(root: &ExprRef, container: &ExprId, node: ExprRef) -> ExprRef {
    rewrite(root, container, &|target| {
        let mut children = target.list_children()?.to_vec();
        children.push(Arc::clone(&node));
        target.with_list_children(children)
    })
}

/// Appends `argument` to the call `function_id`; any other node kind is
/// left alone
pub fn append_argument(root: &ExprRef, function_id: &ExprId, argument: ExprRef) -> ExprRef {
    rewrite(root, function_id, &|target| match target {
        Expression::FunctionCall { .. } => {
            let mut arguments = target.list_children()?.to_vec();
            arguments.push(Arc::clone(&argument));
            target.with_list_children(arguments)
        }
        _ => None,
    })
}

/// Inserts `node` immediately before `sibling` in whichever list-shaped
/// container holds it
///
/// A sibling held in a fixed slot (or not present at all) leaves the tree
/// untouched.
pub fn insert_before(root: &ExprRef, sibling: &ExprId, node: ExprRef) -> ExprRef {
    let (parent_id, index) = match find_slot(root, sibling) {
        Some((parent, ChildSlot::StackEntry(i) | ChildSlot::Argument(i))) => {
            (parent.id().clone(), i)
        }
        _ => return Arc::clone(root),
    };
    rewrite(root, &parent_id, &|parent| {
        let mut children = parent.list_children()?.to_vec();
        children.insert(index, Arc::clone(&node));
        parent.with_list_children(children)
    })
}

/// Removes `id` from its parent if it sits in a list or optional slot
///
/// The root and required-slot occupants are never removed.
pub fn remove_node(root: &ExprRef, id: &ExprId) -> ExprRef {
    let (parent_id, slot) = match find_slot(root, id) {
        Some((parent, slot)) => (parent.id().clone(), slot),
        None => return Arc::clone(root),
    };
    rewrite(root, &parent_id, &|parent| parent.without_child(slot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use expr_query::{find_by_id, linearize};
    use expr_types::sample_program;

    fn id(s: &str) -> ExprId {
        ExprId::new(s)
    }

    fn node(name: &str) -> ExprRef {
        Expression::variable(name).with_id(name).into_ref()
    }

    #[test]
    fn test_append_to_root_stack() {
        let root = sample_program();
        let updated = append_child(&root, &id("0"), node("tail"));
        let ids = linearize(&updated);
        assert_eq!(ids.last(), Some(&id("tail")));
        assert_eq!(updated.list_children().map(|c| c.len()), Some(5));
        // Untouched entries are shared
        assert!(Arc::ptr_eq(
            &root.list_children().unwrap()[2],
            &updated.list_children().unwrap()[2]
        ));
    }

    #[test]
    fn test_append_to_leaf_is_noop() {
        let root = sample_program();
        let updated = append_child(&root, &id("2"), node("x"));
        assert!(Arc::ptr_eq(&root, &updated));
    }

    #[test]
    fn test_insert_before_list_entry() {
        let root = sample_program();
        // "10" is the first entry of the loop body
        let updated = insert_before(&root, &id("10"), node("first"));
        let body = find_by_id(&updated, &id("9")).unwrap();
        let ids: Vec<_> = body
            .list_children()
            .unwrap()
            .iter()
            .map(|c| c.id().clone())
            .collect();
        assert_eq!(ids, vec![id("first"), id("10"), id("12")]);
        // The sibling assignment before the loop is reused
        assert!(Arc::ptr_eq(
            &root.list_children().unwrap()[0],
            &updated.list_children().unwrap()[0]
        ));
    }

    #[test]
    fn test_insert_before_fixed_slot_is_noop() {
        let root = sample_program();
        // "6" is the while condition
        let updated = insert_before(&root, &id("6"), node("x"));
        assert!(Arc::ptr_eq(&root, &updated));
        let updated = insert_before(&root, &id("missing"), node("x"));
        assert!(Arc::ptr_eq(&root, &updated));
    }

    #[test]
    fn test_append_argument_only_on_calls() {
        let root = sample_program();
        let updated = append_argument(&root, &id("10"), node("extra"));
        let call = find_by_id(&updated, &id("10")).unwrap();
        assert_eq!(call.list_children().map(|c| c.len()), Some(2));

        let unchanged = append_argument(&root, &id("0"), node("extra"));
        assert!(Arc::ptr_eq(&root, &unchanged));
    }

    #[test]
    fn test_remove_list_entry() {
        let root = sample_program();
        let updated = remove_node(&root, &id("16"));
        assert!(find_by_id(&updated, &id("16")).is_none());
        assert!(find_by_id(&updated, &id("17")).is_none());
        assert_eq!(linearize(&updated).len(), linearize(&root).len() - 2);
    }

    #[test]
    fn test_remove_required_or_root_is_noop() {
        let root = sample_program();
        for target in ["0", "6", "9", "2", "13"] {
            let updated = remove_node(&root, &id(target));
            assert!(Arc::ptr_eq(&root, &updated), "removed {}", target);
        }
    }

    #[test]
    fn test_remove_else_branch() {
        let program = Expression::stack(vec![Expression::if_else(
            Expression::value(true).with_id("c"),
            Expression::number(1.0).with_id("t"),
            Some(Expression::number(2.0).with_id("e")),
        )
        .with_id("if")])
        .into_ref();
        let updated = remove_node(&program, &id("e"));
        match find_by_id(&updated, &id("if")) {
            Some(Expression::If {
                condition,
                then_branch,
                else_branch: None,
                ..
            }) => {
                assert_eq!(condition.id(), &id("c"));
                assert_eq!(then_branch.id(), &id("t"));
            }
            other => panic!("Expected if without else, got {:?}", other),
        }
    }
}
