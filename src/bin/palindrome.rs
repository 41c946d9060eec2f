//! Reads one line from standard input and reports whether it is a palindrome.
//!
//! The check is literal: case-sensitive, whitespace-sensitive, no
//! normalization. An empty line is a palindrome.

use anyhow::Result;
use colored::Colorize;
use drills::console;
use drills::palindrome::is_palindrome;

fn main() -> Result<()> {
    let input = console::prompt("Enter a string or number: ")?;

    if is_palindrome(&input) {
        println!("{}", format!("'{}' is a palindrome.", input).green());
    } else {
        println!("{}", format!("'{}' is not a palindrome.", input).red());
    }

    Ok(())
}
