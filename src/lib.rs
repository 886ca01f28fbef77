//! # serde_vars
//!
//! A Serde-compatible reader and writer for flat `KEY="VALUE"` variable files,
//! the format printed by tools such as `go env`, with exact typed conversions.
//!
//! ## What is a variables file?
//!
//! One entry per line, each a key and a double-quoted raw value:
//!
//! ```text
//! GOARCH="amd64"
//! CGO_ENABLED="1"
//! GOGCCFLAGS="-fPIC -m64 -pthread"
//! ```
//!
//! Values are always stored as raw strings. They are converted on demand into
//! a string (identity), a boolean (one of twelve canonical spellings) or a
//! double (correctly rounded, round-half-to-even).
//!
//! ## Key Features
//!
//! - **Ordered**: entries keep their line order through parse and write
//! - **Exact floats**: literals of any length round to the nearest double, and
//!   doubles print with the fewest digits that read back to the same value
//! - **Serde Compatible**: read flat structs with typed fields via
//!   `#[derive(Deserialize)]`, write them back with `#[derive(Serialize)]`
//! - **Lossless round-trip**: everything the writer emits parses back to the
//!   same entries
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! serde_vars = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Typed Structs
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_vars::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
//! struct GoEnv {
//!     goarch: String,
//!     cgo_enabled: bool,
//!     gomaxprocs: Option<f64>,
//! }
//!
//! let env: GoEnv = from_str("GOARCH=\"amd64\"\nCGO_ENABLED=\"1\"\n").unwrap();
//! assert!(env.cgo_enabled);
//! assert_eq!(env.gomaxprocs, None);
//!
//! let text = to_string(&env).unwrap();
//! assert_eq!(text, "GOARCH=\"amd64\"\nCGO_ENABLED=\"true\"\n");
//! assert_eq!(from_str::<GoEnv>(&text).unwrap(), env);
//! ```
//!
//! ### Raw Entries
//!
//! ```rust
//! use serde_vars::{parse, Kind, VarValue};
//!
//! let vars = parse("CC=\"gcc\"\nRATIO=\"1e23\"\n").unwrap();
//! assert_eq!(vars.get("CC"), Some("gcc"));
//! assert_eq!(vars.get_as("RATIO", Kind::Float).unwrap(), Some(VarValue::Float(1e23)));
//! ```
//!
//! ### Conversions
//!
//! ```rust
//! use serde_vars::{format_float, parse_bool, parse_float};
//!
//! assert_eq!(parse_bool("T").unwrap(), true);
//! assert_eq!(format_float(parse_float("0.1").unwrap()), "0.1");
//!
//! let err = parse_float("1.7976931348623159e308").unwrap_err();
//! assert!(err.is_range());
//! assert_eq!(err.saturated(), Some(f64::INFINITY));
//! ```
//!
//! ## Logging
//!
//! Parse boundaries emit [`tracing`] events at `debug` and `trace` level
//! (duplicate keys, failed field conversions, slow float path). The crate
//! never installs a subscriber.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`go_env.rs`** - Reading `go env` output into a typed struct
//! - **`typed_values.rs`** - Converting raw values and handling range errors
//! - **`custom_options.rs`** - Duplicate key policies and line endings
//!
//! Run any example with: `cargo run --example <name>`

pub mod convert;
pub mod de;
pub mod error;
pub mod float;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use convert::{convert, format_bool, parse_bool, parse_int, parse_string, to_raw};
pub use de::{parse_entries, Deserializer};
pub use error::{Error, ErrorKind, Result};
pub use float::{format_float, format_float32, parse_float, parse_float32};
pub use map::{Entry, VarMap};
pub use options::{DuplicateKeys, LineEnding, VarsOptions};
pub use ser::Serializer;
pub use value::{Kind, VarValue};

use serde::{Deserialize, Serialize};
use std::io;

/// Parse a document into an ordered [`VarMap`].
///
/// Duplicate keys keep the last value at the position of the first
/// occurrence; use [`parse_with_options`] to choose another policy.
///
/// # Examples
///
/// ```rust
/// use serde_vars::parse;
///
/// let vars = parse("GOOS=\"linux\"\nGOOS=\"darwin\"\n").unwrap();
/// assert_eq!(vars.len(), 1);
/// assert_eq!(vars.get("GOOS"), Some("darwin"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] for the first malformed line.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(input: &str) -> Result<VarMap> {
    parse_with_options(input, &VarsOptions::default())
}

/// Parse a document into an ordered [`VarMap`] with custom options.
///
/// # Errors
///
/// Returns [`Error::Syntax`] for the first malformed line, or for a repeated
/// key under [`DuplicateKeys::Reject`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(input: &str, options: &VarsOptions) -> Result<VarMap> {
    de::parse_map(input, options)
}

/// Write entries as lines, in order, without merging duplicates.
///
/// # Examples
///
/// ```rust
/// use serde_vars::{entries_to_string, parse_entries, Entry};
///
/// let entries = vec![Entry::new("A", "1"), Entry::new("A", "2")];
/// let text = entries_to_string(&entries).unwrap();
/// assert_eq!(text, "A=\"1\"\nA=\"2\"\n");
/// assert_eq!(parse_entries(&text).unwrap(), entries);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidEntry`] for an entry that would not parse back
/// unchanged.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn entries_to_string(entries: &[Entry]) -> Result<String> {
    entries_to_string_with_options(entries, &VarsOptions::default())
}

/// Write entries as lines with custom options.
///
/// # Errors
///
/// Returns [`Error::InvalidEntry`] for an entry that would not parse back
/// unchanged.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn entries_to_string_with_options(entries: &[Entry], options: &VarsOptions) -> Result<String> {
    let mut out = String::with_capacity(entries.len() * 32);
    for entry in entries {
        ser::write_entry(&mut out, &entry.key, &entry.value, options.line_ending)?;
    }
    Ok(out)
}

/// Serialize a flat struct or map to a variables document.
///
/// # Examples
///
/// ```rust
/// use serde_vars::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: f64, y: f64 }
///
/// let text = to_string(&Point { x: 0.5, y: 1e23 }).unwrap();
/// assert_eq!(text, "x=\"0.5\"\ny=\"1e+23\"\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value is not a flat struct or map, or if an entry
/// cannot be written losslessly.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, VarsOptions::default())
}

/// Serialize a flat struct or map with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_vars::{to_string_with_options, vars, LineEnding, VarsOptions};
///
/// let options = VarsOptions::new().with_line_ending(LineEnding::CrLf);
/// let text = to_string_with_options(&vars! { "GOOS": "windows" }, options).unwrap();
/// assert_eq!(text, "GOOS=\"windows\"\r\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value is not a flat struct or map, or if an entry
/// cannot be written losslessly.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: VarsOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(options);
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Serialize a flat struct or map to a writer.
///
/// # Examples
///
/// ```rust
/// use serde_vars::{to_writer, vars};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vars! { "CC": "gcc" }).unwrap();
/// assert_eq!(buffer, b"CC=\"gcc\"\n");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, VarsOptions::default())
}

/// Serialize a flat struct or map to a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: VarsOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from a variables document.
///
/// # Examples
///
/// ```rust
/// use serde_vars::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: f64, y: f64 }
///
/// let point: Point = from_str("x=\"1\"\ny=\"-2.5e-3\"\n").unwrap();
/// assert_eq!(point, Point { x: 1.0, y: -0.0025 });
/// ```
///
/// # Errors
///
/// Returns an error if a line is malformed or a field value cannot be
/// converted to its type. Line errors include line and column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    from_str_with_options(s, VarsOptions::default())
}

/// Deserialize an instance of type `T` with custom options.
///
/// # Errors
///
/// Returns an error if a line is malformed, a key repeats under
/// [`DuplicateKeys::Reject`], or a field value cannot be converted.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<'a, T>(s: &'a str, options: VarsOptions) -> Result<T>
where
    T: Deserialize<'a>,
{
    let mut deserializer = Deserializer::with_options(s, options);
    T::deserialize(&mut deserializer)
}

/// Deserialize an instance of type `T` from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use serde_vars::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Flags { verbose: bool }
///
/// let flags: Flags = from_reader(Cursor::new(b"verbose=\"F\"\n")).unwrap();
/// assert_eq!(flags, Flags { verbose: false });
/// ```
///
/// # Errors
///
/// Returns an error if reading from the reader fails, a line is malformed, or
/// the data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, a line is malformed, or
/// the data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}
