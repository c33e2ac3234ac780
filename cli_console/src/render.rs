//! Plain-text rendering of the editor state

use editor_core::{EditorCore, EditorMode};
use expr_types::{ChildSlot, ExprId, Expression};

const SELECTED: &str = "> ";
const UNSELECTED: &str = "  ";

/// One line per node, indented by depth, with the selected node marked
pub fn render_program(editor: &EditorCore) -> Vec<String> {
    let mut lines = Vec::new();
    render_node(editor.program(), None, 0, editor.selection(), &mut lines);
    lines
}

fn render_node(
    expr: &Expression,
    slot: Option<ChildSlot>,
    depth: usize,
    selection: Option<&ExprId>,
    lines: &mut Vec<String>,
) {
    let marker = if selection == Some(expr.id()) {
        SELECTED
    } else {
        UNSELECTED
    };
    let prefix = slot.and_then(slot_label).unwrap_or("");
    lines.push(format!(
        "{}{}{}{}",
        marker,
        "  ".repeat(depth),
        prefix,
        node_label(expr)
    ));
    for (child_slot, child) in expr.children() {
        render_node(child, Some(child_slot), depth + 1, selection, lines);
    }
}

fn slot_label(slot: ChildSlot) -> Option<&'static str> {
    match slot {
        ChildSlot::StackEntry(_) | ChildSlot::Argument(_) => None,
        ChildSlot::WhileCondition | ChildSlot::IfCondition => Some("cond: "),
        ChildSlot::WhileBody | ChildSlot::FunctionBody => Some("body: "),
        ChildSlot::AssignmentValue => None,
        ChildSlot::IfThen => Some("then: "),
        ChildSlot::IfElse => Some("else: "),
        ChildSlot::BooleanLeft => Some("left: "),
        ChildSlot::BooleanRight => Some("right: "),
    }
}

fn node_label(expr: &Expression) -> String {
    match expr {
        Expression::Stack { expressions, .. } if expressions.is_empty() => "{ }".to_string(),
        Expression::Stack { .. } => "{".to_string(),
        Expression::FunctionCall { function_name, .. } => format!("{}(..)", function_name),
        Expression::Value { .. } | Expression::Variable { .. } => expr.to_string(),
        Expression::While { .. } => "while".to_string(),
        Expression::Assignment { variable_name, .. } => format!("{} =", variable_name),
        Expression::If { .. } => "if".to_string(),
        Expression::FunctionDefinition {
            function_name,
            parameters,
            ..
        } => format!("fn {}({})", function_name, parameters.join(", ")),
        Expression::Boolean { operator, .. } => operator.symbol().to_string(),
    }
}

/// Mode, selection and pending insertion in one line
pub fn status_line(editor: &EditorCore) -> String {
    match editor.mode() {
        EditorMode::Normal => {
            let selected = editor
                .selected()
                .map(|e| format!("{} {}", e.kind_name(), e.id()))
                .unwrap_or_else(|| "nothing".to_string());
            format!("-- {} -- selected: {}", editor.mode().as_str(), selected)
        }
        EditorMode::Insert => {
            let cursor = editor
                .cursor()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string());
            format!(
                "-- {} -- at {}: {}_",
                editor.mode().as_str(),
                cursor,
                editor.insertion_text()
            )
        }
    }
}
