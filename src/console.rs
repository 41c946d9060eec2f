//! Prompt-and-read-line helper shared by the drill binaries.
//!
//! Every drill is a plain request/response console program: print a prompt,
//! block on one line of standard input, act on it. Reading through
//! `std::io::stdin` keeps the binaries usable with piped input in tests.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::str::FromStr;

/// Print `label` without a trailing newline, flush, and read one line from
/// standard input.
///
/// The trailing line terminator (`\n` or `\r\n`) is stripped; everything else
/// is returned verbatim. EOF before any input yields an empty string.
pub fn prompt(label: &str) -> Result<String> {
    Ok(prompt_opt(label)?.unwrap_or_default())
}

/// Like [`prompt`], but distinguishes EOF from an empty line: `None` means
/// standard input is exhausted. The menu drills use this to end their session
/// cleanly instead of spinning on an unreadable prompt.
pub fn prompt_opt(label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if bytes == 0 {
        return Ok(None);
    }

    trim_line_ending(&mut line);
    Ok(Some(line))
}

/// Prompt for a value and parse it, trimming surrounding whitespace first.
///
/// # Errors
///
/// Returns a user-facing error naming the rejected input when parsing fails.
pub fn prompt_parsed<T>(label: &str) -> Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    let line = prompt(label)?;
    let trimmed = line.trim();
    trimmed
        .parse::<T>()
        .with_context(|| format!("'{}' is not a valid value", trimmed))
}

/// Strip one trailing `\n` or `\r\n` in place. Interior whitespace is part of
/// the line and stays untouched.
fn trim_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_unix_line_ending() {
        let mut line = String::from("racecar\n");
        trim_line_ending(&mut line);
        assert_eq!(line, "racecar");
    }

    #[test]
    fn test_trim_windows_line_ending() {
        let mut line = String::from("153\r\n");
        trim_line_ending(&mut line);
        assert_eq!(line, "153");
    }

    #[test]
    fn test_trim_preserves_interior_whitespace() {
        let mut line = String::from("race car\n");
        trim_line_ending(&mut line);
        assert_eq!(line, "race car");
    }

    #[test]
    fn test_trim_no_terminator() {
        let mut line = String::from("9474");
        trim_line_ending(&mut line);
        assert_eq!(line, "9474");
    }

    #[test]
    fn test_trim_empty_line() {
        let mut line = String::from("\n");
        trim_line_ending(&mut line);
        assert_eq!(line, "");
    }
}
