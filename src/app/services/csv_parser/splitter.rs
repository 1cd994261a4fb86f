//! Comma splitter for single CSV lines
//!
//! A `"` toggles quoted mode and is never copied into the field; commas inside
//! quoted mode are literal text. Each field is trimmed after quote removal.
//! Doubled quotes (`""`) are not treated as an escaped quote, and an
//! unterminated quote simply runs to the end of the line.

/// Split one line into trimmed fields
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    fields.push(current.trim().to_string());
    fields
}
