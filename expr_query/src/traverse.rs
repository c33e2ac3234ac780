//! Lookup and flattening

use expr_types::{ChildSlot, ExprId, Expression};

/// Flattens the tree into its navigation order
///
/// A node comes before its children; children are visited in the fixed
/// per-kind order given by [`Expression::children`].
pub fn linearize(root: &Expression) -> Vec<ExprId> {
    let mut ids = Vec::new();
    collect_ids(root, &mut ids);
    ids
}

fn collect_ids(expr: &Expression, ids: &mut Vec<ExprId>) {
    ids.push(expr.id().clone());
    for (_, child) in expr.children() {
        collect_ids(child, ids);
    }
}

/// Number of nodes in the tree
pub fn node_count(root: &Expression) -> usize {
    1 + root
        .children()
        .into_iter()
        .map(|(_, child)| node_count(child))
        .sum::<usize>()
}

/// Finds the node with the given id
pub fn find_by_id<'a>(root: &'a Expression, id: &ExprId) -> Option<&'a Expression> {
    if root.id() == id {
        return Some(root);
    }
    root.children()
        .into_iter()
        .find_map(|(_, child)| find_by_id(child, id))
}

/// Finds the direct container of `id` and the slot it occupies
///
/// Returns `None` for the root and for ids not in the tree.
pub fn find_slot<'a>(root: &'a Expression, id: &ExprId) -> Option<(&'a Expression, ChildSlot)> {
    for (slot, child) in root.children() {
        if child.id() == id {
            return Some((root, slot));
        }
    }
    root.children()
        .into_iter()
        .find_map(|(_, child)| find_slot(child, id))
}

/// Id of the direct container of `id`
pub fn find_parent(root: &Expression, id: &ExprId) -> Option<ExprId> {
    find_slot(root, id).map(|(parent, _)| parent.id().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use expr_types::sample_program;

    fn ids(list: &[&str]) -> Vec<ExprId> {
        list.iter().map(|s| ExprId::from(*s)).collect()
    }

    #[test]
    fn test_linearize_sample() {
        let program = sample_program();
        let expected: Vec<String> = (0..=17).map(|n| n.to_string()).collect();
        let expected: Vec<&str> = expected.iter().map(|s| s.as_str()).collect();
        assert_eq!(linearize(&program), ids(&expected));
    }

    #[test]
    fn test_linearize_if_order() {
        let e = Expression::if_else(
            Expression::value(true).with_id("c"),
            Expression::number(1.0).with_id("t"),
            Some(Expression::number(2.0).with_id("e")),
        )
        .with_id("if");
        assert_eq!(linearize(&e), ids(&["if", "c", "t", "e"]));
    }

    #[test]
    fn test_node_count() {
        assert_eq!(node_count(&sample_program()), 18);
    }

    #[test]
    fn test_find_by_id() {
        let program = sample_program();
        let found = find_by_id(&program, &ExprId::from("10")).unwrap();
        assert_eq!(found.kind_name(), "FunctionCallExpression");
        assert!(find_by_id(&program, &ExprId::from("99")).is_none());
    }

    #[test]
    fn test_find_parent() {
        let program = sample_program();
        assert_eq!(find_parent(&program, &ExprId::from("6")), Some(ExprId::from("5")));
        assert_eq!(find_parent(&program, &ExprId::from("11")), Some(ExprId::from("10")));
        assert_eq!(find_parent(&program, &ExprId::from("0")), None);
        assert_eq!(find_parent(&program, &ExprId::from("99")), None);
    }

    #[test]
    fn test_find_slot() {
        let program = sample_program();
        let (parent, slot) = find_slot(&program, &ExprId::from("9")).unwrap();
        assert_eq!(parent.id().as_str(), "5");
        assert_eq!(slot, ChildSlot::WhileBody);

        let (_, slot) = find_slot(&program, &ExprId::from("15")).unwrap();
        assert_eq!(slot, ChildSlot::Argument(1));
    }
}
