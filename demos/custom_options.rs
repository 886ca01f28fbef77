//! Duplicate key policies and line endings with VarsOptions.
//!
//! Run with: cargo run --example custom_options

use serde_vars::{
    parse_entries, parse_with_options, to_string_with_options, DuplicateKeys, LineEnding,
    VarsOptions,
};
use std::error::Error;

const INPUT: &str = "CC=\"gcc\"\nCXX=\"g++\"\nCC=\"clang\"\n";

fn main() -> Result<(), Box<dyn Error>> {
    println!("Every line:");
    for entry in parse_entries(INPUT)? {
        println!("  {}", entry);
    }
    println!();

    // Default: the last value wins, at the position of the first occurrence
    let last = parse_with_options(INPUT, &VarsOptions::default())?;
    println!("LastWins: CC={:?}", last.get("CC"));

    let first = parse_with_options(
        INPUT,
        &VarsOptions::new().with_duplicates(DuplicateKeys::FirstWins),
    )?;
    println!("FirstWins: CC={:?}", first.get("CC"));

    let strict = VarsOptions::new().with_duplicates(DuplicateKeys::Reject);
    match parse_with_options(INPUT, &strict) {
        Ok(_) => println!("Reject: accepted"),
        Err(err) => println!("Reject: {}", err),
    }
    println!();

    // CRLF output for Windows tooling
    let crlf = VarsOptions::new().with_line_ending(LineEnding::CrLf);
    let text = to_string_with_options(&last, crlf)?;
    println!("CRLF output: {:?}", text);

    Ok(())
}
