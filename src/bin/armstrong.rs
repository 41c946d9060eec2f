//! Reads one integer from standard input and reports whether it is an
//! Armstrong number.

use anyhow::Result;
use colored::Colorize;
use drills::armstrong::{is_armstrong, parse_input};
use drills::console;

fn main() -> Result<()> {
    let line = console::prompt("Enter a number: ")?;
    let n = parse_input(&line)?;

    if is_armstrong(n) {
        println!("{}", format!("{} is an Armstrong number.", n).green());
    } else {
        println!("{}", format!("{} is not an Armstrong number.", n).red());
    }

    Ok(())
}
