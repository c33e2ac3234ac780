//! Individual classification rules
//!
//! Each rule receives trimmed text and either produces a node or declines.
//! Rules that contain sub-texts classify them through [`crate::classify`]
//! and decline if any required sub-text fails.

use crate::classify;
use crate::split::{matching_close, split_top_level};
use expr_types::{BooleanOperator, Expression, Value};
use regex::Regex;
use std::sync::OnceLock;

fn cached(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("valid regex"))
}

fn identifier_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, r"^[A-Za-z_][A-Za-z0-9_]*$")
}

fn is_identifier(text: &str) -> bool {
    identifier_regex().is_match(text)
}

pub fn number(text: &str) -> Option<Expression> {
    static RE: OnceLock<Regex> = OnceLock::new();
    if !cached(&RE, r"^-?[0-9]+(\.[0-9]+)?$").is_match(text) {
        return None;
    }
    text.parse::<f64>().ok().map(Expression::number)
}

pub fn boolean(text: &str) -> Option<Expression> {
    match text {
        "true" => Some(Expression::value(true)),
        "false" => Some(Expression::value(false)),
        _ => None,
    }
}

pub fn string(text: &str) -> Option<Expression> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = cached(&RE, r#"^"([^"]*)"$"#).captures(text)?;
    Some(Expression::value(Value::Text(caps[1].to_string())))
}

pub fn while_loop(text: &str) -> Option<Expression> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = cached(&RE, r"(?s)^while\s+(.+?)\s*\{(.*)\}$").captures(text)?;
    let condition = classify(&caps[1])?;
    let body = classify(&caps[2])?;
    Some(Expression::while_loop(condition, body))
}

/// Branch bodies end at their balanced closing brace, so branches may hold
/// nested `if`/`else` blocks.
pub fn if_else(text: &str) -> Option<Expression> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let head = cached(&RE, r"(?s)^if\s+([^{]+?)\s*\{").captures(text)?;
    let (condition_text, open) = (head.get(1)?.as_str(), head.get(0)?.end() - 1);
    let close = matching_close(text, open)?;

    let condition = classify(condition_text)?;
    let then_branch = classify(&text[open + 1..close])?;
    let rest = text[close + 1..].trim();
    let else_branch = if rest.is_empty() {
        None
    } else {
        Some(else_block(rest)?)
    };
    Some(Expression::if_else(condition, then_branch, else_branch))
}

fn else_block(text: &str) -> Option<Expression> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let open = cached(&RE, r"^else\s*\{").find(text)?.end() - 1;
    if matching_close(text, open)? != text.len() - 1 {
        return None;
    }
    classify(&text[open + 1..text.len() - 1])
}

pub fn function_definition(text: &str) -> Option<Expression> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = cached(
        &RE,
        r"(?s)^fn\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(([^)]*)\)\s*\{(.*)\}$",
    )
    .captures(text)?;

    let mut parameters = Vec::new();
    for param in caps[2].split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if !is_identifier(param) {
            return None;
        }
        parameters.push(param.to_string());
    }
    let body = classify(&caps[3])?;
    Some(Expression::function_definition(&caps[1], parameters, body))
}

pub fn assignment(text: &str) -> Option<Expression> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = cached(&RE, r"(?s)^([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(.+)$").captures(text)?;
    let value = classify(&caps[2])?;
    Some(Expression::assignment(&caps[1], value))
}

/// Arguments are split on every comma, so a nested call with more than
/// one argument cannot appear inside an argument list.
pub fn call(text: &str) -> Option<Expression> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = cached(&RE, r"(?s)^([A-Za-z_][A-Za-z0-9_]*)\s*\((.*)\)$").captures(text)?;
    let inner = caps[2].trim();

    let mut arguments = Vec::new();
    if !inner.is_empty() {
        for arg in inner.split(',') {
            arguments.push(classify(arg)?);
        }
    }
    Some(Expression::call(&caps[1], arguments))
}

fn binary_regex(operator: BooleanOperator) -> Option<&'static Regex> {
    static AND: OnceLock<Regex> = OnceLock::new();
    static OR: OnceLock<Regex> = OnceLock::new();
    static EQUALS: OnceLock<Regex> = OnceLock::new();
    static LESS: OnceLock<Regex> = OnceLock::new();
    static GREATER: OnceLock<Regex> = OnceLock::new();
    match operator {
        BooleanOperator::And => Some(cached(&AND, r"(?s)^(.+?)\s+and\s+(.+)$")),
        BooleanOperator::Or => Some(cached(&OR, r"(?s)^(.+?)\s+or\s+(.+)$")),
        BooleanOperator::Equals => Some(cached(&EQUALS, r"(?s)^(.+?)\s*==\s*(.+)$")),
        BooleanOperator::LessThan => Some(cached(&LESS, r"(?s)^(.+?)\s*<\s*(.+)$")),
        BooleanOperator::GreaterThan => Some(cached(&GREATER, r"(?s)^(.+?)\s*>\s*(.+)$")),
        BooleanOperator::Not => None,
    }
}

/// Order in which binary operators are tried
pub const BINARY_OPERATORS: [BooleanOperator; 5] = [
    BooleanOperator::And,
    BooleanOperator::Or,
    BooleanOperator::Equals,
    BooleanOperator::LessThan,
    BooleanOperator::GreaterThan,
];

pub fn binary(text: &str) -> Option<Expression> {
    BINARY_OPERATORS.iter().find_map(|op| {
        let caps = binary_regex(*op)?.captures(text)?;
        let left = classify(&caps[1])?;
        let right = classify(&caps[2])?;
        Some(Expression::boolean(*op, Some(left), Some(right)))
    })
}

pub fn not(text: &str) -> Option<Expression> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = cached(&RE, r"(?s)^not\s+(.+)$").captures(text)?;
    let operand = classify(&caps[1])?;
    Some(Expression::boolean(BooleanOperator::Not, Some(operand), None))
}

/// `;`-separated statements become a stack. Empty statements are skipped.
pub fn sequence(text: &str) -> Option<Expression> {
    let parts = split_top_level(text, ';');
    if parts.len() < 2 {
        return None;
    }
    let mut expressions = Vec::new();
    for part in parts.into_iter().map(str::trim).filter(|p| !p.is_empty()) {
        expressions.push(classify(part)?);
    }
    if expressions.is_empty() {
        return None;
    }
    Some(Expression::stack(expressions))
}

pub fn identifier(text: &str) -> Option<Expression> {
    is_identifier(text).then(|| Expression::variable(text))
}
