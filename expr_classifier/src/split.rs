//! Bracket- and quote-aware splitting

/// Splits `text` at every `sep` that is outside parentheses, braces and
/// double-quoted strings.
pub fn split_top_level(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth: i32 = 0;
    let mut in_string = false;
    let mut start = 0;

    for (i, ch) in text.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            _ if in_string => {}
            '(' | '{' => depth += 1,
            ')' | '}' => depth -= 1,
            c if c == sep && depth == 0 => {
                parts.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Whether `text` contains `sep` outside brackets and strings
pub fn has_top_level(text: &str, sep: char) -> bool {
    split_top_level(text, sep).len() > 1
}

/// Byte index of the bracket closing the one at `open`, skipping strings
pub fn matching_close(text: &str, open: usize) -> Option<usize> {
    let mut depth: i32 = 0;
    let mut in_string = false;

    for (i, ch) in text[open..].char_indices() {
        match ch {
            '"' => in_string = !in_string,
            _ if in_string => {}
            '(' | '{' => depth += 1,
            ')' | '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}
