//! Error types for parsing, converting and writing variable files.
//!
//! Every failure falls into one of a small number of categories:
//!
//! - **Syntax errors**: a line does not have the `KEY="VALUE"` shape, or a raw
//!   value is not a valid boolean or numeral for the requested type
//! - **Range errors**: a numeral is well formed but does not fit the target
//!   type; float conversions still report the saturated value (`±Inf`)
//! - **Invalid entries**: an entry cannot be written without breaking the
//!   round-trip guarantee (bad key, value containing a line break)
//! - **I/O errors**: reading or writing failed
//!
//! ## Examples
//!
//! ```rust
//! use serde_vars::{parse_float, ErrorKind};
//!
//! let err = parse_float("1e").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Syntax);
//! assert_eq!(err.to_string(), "parse_float: parsing \"1e\": invalid syntax");
//!
//! let err = parse_float("1e400").unwrap_err();
//! assert!(err.is_range());
//! assert_eq!(err.saturated(), Some(f64::INFINITY));
//! ```

use std::fmt;
use thiserror::Error;

/// Broad classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input does not match the expected lexical form.
    Syntax,
    /// The input is well formed but its magnitude does not fit the target type.
    Range,
    /// Reading or writing failed.
    Io,
    /// Anything else: invalid entries, unsupported types, custom messages.
    Other,
}

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A line of the document is not a `KEY="VALUE"` entry.
    #[error("Syntax error at line {line}, column {col}: {msg}\n{context}")]
    Syntax {
        line: usize,
        col: usize,
        msg: String,
        context: String,
    },

    /// A raw value is not a valid spelling for the requested type.
    ///
    /// Float conversions carry their documented result (`0`) in `default`.
    #[error("{func}: parsing {input:?}: invalid syntax")]
    InvalidSyntax {
        func: &'static str,
        input: String,
        default: Option<f64>,
    },

    /// A raw value is a valid numeral that does not fit the requested type.
    ///
    /// Float conversions carry the saturated result (`±Inf`) in `saturated`.
    #[error("{func}: parsing {input:?}: value out of range")]
    OutOfRange {
        func: &'static str,
        input: String,
        saturated: Option<f64>,
    },

    /// An entry cannot be written as a single `KEY="VALUE"` line.
    #[error("Invalid entry {key:?}: {msg}")]
    InvalidEntry { key: String, msg: String },

    /// Unsupported type for serialization or deserialization
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a line syntax error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_vars::Error;
    ///
    /// let err = Error::syntax(3, 5, "expected '='", "GOOS");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str, context: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
            context: context.to_string(),
        }
    }

    /// Creates a conversion syntax error for `func` applied to `input`.
    pub fn invalid_syntax(func: &'static str, input: &str) -> Self {
        Error::InvalidSyntax {
            func,
            input: input.to_string(),
            default: None,
        }
    }

    /// Creates a float syntax error, which still reports the value `0`.
    pub fn invalid_float_syntax(func: &'static str, input: &str) -> Self {
        Error::InvalidSyntax {
            func,
            input: input.to_string(),
            default: Some(0.0),
        }
    }

    /// Creates a conversion range error, optionally carrying the saturated value.
    pub fn out_of_range(func: &'static str, input: &str, saturated: Option<f64>) -> Self {
        Error::OutOfRange {
            func,
            input: input.to_string(),
            saturated,
        }
    }

    /// Creates an error for an entry that cannot be written losslessly.
    pub fn invalid_entry(key: &str, msg: &str) -> Self {
        Error::InvalidEntry {
            key: key.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an unsupported type error.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_vars::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the broad category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Syntax { .. } | Error::InvalidSyntax { .. } => ErrorKind::Syntax,
            Error::OutOfRange { .. } => ErrorKind::Range,
            Error::Io(_) => ErrorKind::Io,
            Error::InvalidEntry { .. } | Error::UnsupportedType(_) | Error::Custom(_) => {
                ErrorKind::Other
            }
        }
    }

    /// Returns `true` for line and conversion syntax errors.
    #[inline]
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        self.kind() == ErrorKind::Syntax
    }

    /// Returns `true` for range errors.
    #[inline]
    #[must_use]
    pub fn is_range(&self) -> bool {
        self.kind() == ErrorKind::Range
    }

    /// The value a conversion produced despite failing.
    ///
    /// Range errors from float conversion report the signed infinity the input
    /// saturated to. Float syntax errors report `0`, matching the documented
    /// default. Everything else reports `None`.
    #[must_use]
    pub fn saturated(&self) -> Option<f64> {
        match self {
            Error::OutOfRange { saturated, .. } => *saturated,
            Error::InvalidSyntax { default, .. } => *default,
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
