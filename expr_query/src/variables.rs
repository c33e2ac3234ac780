//! Variable collection

use expr_types::Expression;

/// Every variable name read, assigned or bound as a parameter in the tree
///
/// Names are returned once, in order of first appearance.
pub fn collect_variables(root: &Expression) -> Vec<String> {
    let mut names = Vec::new();
    collect(root, &mut names);
    names
}

fn push_unique(names: &mut Vec<String>, name: &str) {
    if !names.iter().any(|n| n == name) {
        names.push(name.to_string());
    }
}

fn collect(expr: &Expression, names: &mut Vec<String>) {
    match expr {
        Expression::Assignment { variable_name, .. } | Expression::Variable { variable_name, .. } => {
            push_unique(names, variable_name)
        }
        Expression::FunctionDefinition { parameters, .. } => {
            for p in parameters {
                push_unique(names, p);
            }
        }
        _ => {}
    }
    for (_, child) in expr.children() {
        collect(child, names);
    }
}
