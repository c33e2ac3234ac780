//! # Expression Classifier
//!
//! Turns a line of free-form text into a best-guess expression node.
//!
//! This is not a grammar. It is an ordered cascade of pattern rules with no
//! backtracking across rules: the first rule that matches and whose required
//! sub-texts all classify wins. Ambiguous or malformed input falls through
//! to later rules and finally yields `None`.
//!
//! ## Cascade
//!
//! 1. numeric literal
//! 2. `true` / `false`
//! 3. `"quoted string"`
//! 4. `while <cond> { <body> }`
//! 5. `if <cond> { <then> } [else { <else> }]`
//! 6. `fn <name>(<params>) { <body> }`
//! 7. `<name> = <value>`
//! 8. `<name>(<args>)` (arguments split on every comma)
//! 9. binary operators in order `and`, `or`, `==`, `<`, `>`
//! 10. `not <expr>`
//! 11. `;`-separated sequence
//! 12. bare identifier
//!
//! A `;` outside brackets and strings always separates statements, so text
//! containing one skips rules 4-10 and is read as a sequence.

pub mod rules;
pub mod split;

use expr_types::Expression;

/// A single classification attempt
pub type Rule = fn(&str) -> Option<Expression>;

/// Rules tried before statement splitting
const LITERAL_RULES: [Rule; 3] = [rules::number, rules::boolean, rules::string];

/// Rules that read a single statement
const STATEMENT_RULES: [Rule; 7] = [
    rules::while_loop,
    rules::if_else,
    rules::function_definition,
    rules::assignment,
    rules::call,
    rules::binary,
    rules::not,
];

const TRAILING_RULES: [Rule; 2] = [rules::sequence, rules::identifier];

/// Classifies `text` into an expression with freshly generated ids
pub fn classify(text: &str) -> Option<Expression> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(expr) = LITERAL_RULES.iter().find_map(|rule| rule(text)) {
        return Some(expr);
    }
    if !split::has_top_level(text, ';') {
        if let Some(expr) = STATEMENT_RULES.iter().find_map(|rule| rule(text)) {
            return Some(expr);
        }
    }
    TRAILING_RULES.iter().find_map(|rule| rule(text))
}
