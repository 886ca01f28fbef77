//! Converting raw values on demand and handling conversion errors.
//!
//! Run with: cargo run --example typed_values

use serde_vars::{format_float, parse, parse_float, ErrorKind, Kind};
use std::error::Error;

const INPUT: &str = r#"CGO_ENABLED="T"
RATIO="625e-3"
HUGE="1.7976931348623159e308"
TINY="4e-324"
LONG="2.22222222222222222222222222222222222222222222222222e+1"
BROKEN="1e"
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let vars = parse(INPUT)?;

    println!("CGO_ENABLED as bool: {:?}", vars.get_bool("CGO_ENABLED")?);
    println!("RATIO as value: {:?}\n", vars.get_as("RATIO", Kind::Float)?);

    for key in ["RATIO", "HUGE", "TINY", "LONG", "BROKEN"] {
        let raw = vars.get(key).unwrap_or_default();
        match parse_float(raw) {
            Ok(value) => println!("{key:>6}: {raw} -> {}", format_float(value)),
            Err(err) => {
                let value = err.saturated().unwrap_or(0.0);
                let kind = match err.kind() {
                    ErrorKind::Range => "range error",
                    ErrorKind::Syntax => "syntax error",
                    _ => "error",
                };
                println!("{key:>6}: {raw} -> {} ({kind}: {err})", format_float(value));
            }
        }
    }

    Ok(())
}
