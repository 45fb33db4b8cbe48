//! Splitting shell lines into words.

use crate::error::CliError;

/// Splits a line into words on whitespace.
///
/// Double quotes group words, so `add "Rust Book" https://doc.rust-lang.org`
/// yields three words. Inside quotes `\"` and `\\` escape a quote and a
/// backslash; elsewhere a backslash is literal. An empty pair of quotes is an
/// empty word.
///
/// # Errors
///
/// Returns `InvalidArguments` if a quote is left open.
pub fn split_line(line: &str) -> Result<Vec<String>, CliError> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut quoted = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            '\\' if quoted => match chars.next() {
                Some(next @ ('"' | '\\')) => word.push(next),
                Some(next) => {
                    word.push('\\');
                    word.push(next);
                }
                None => word.push('\\'),
            },
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            c => {
                word.push(c);
                in_word = true;
            }
        }
    }

    if quoted {
        return Err(CliError::InvalidArguments(format!(
            "unterminated quote in '{line}'"
        )));
    }
    if in_word {
        words.push(word);
    }
    Ok(words)
}
