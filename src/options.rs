//! Configuration options for reading and writing variable files.
//!
//! - [`VarsOptions`]: Main configuration struct
//! - [`DuplicateKeys`]: What to do when a key appears on more than one line
//! - [`LineEnding`]: Line terminator used when writing
//!
//! ## Examples
//!
//! ```rust
//! use serde_vars::{parse_with_options, DuplicateKeys, VarsOptions};
//!
//! let input = "GOOS=\"linux\"\nGOOS=\"darwin\"\n";
//!
//! let options = VarsOptions::new().with_duplicates(DuplicateKeys::FirstWins);
//! let vars = parse_with_options(input, &options).unwrap();
//! assert_eq!(vars.get("GOOS"), Some("linux"));
//!
//! let options = VarsOptions::new().with_duplicates(DuplicateKeys::Reject);
//! assert!(parse_with_options(input, &options).is_err());
//! ```

/// Policy for a key that appears on more than one line.
///
/// # Examples
///
/// ```rust
/// use serde_vars::DuplicateKeys;
///
/// assert_eq!(DuplicateKeys::default(), DuplicateKeys::LastWins);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// Keep the value of the last occurrence, at the position of the first.
    #[default]
    LastWins,
    /// Keep the first occurrence and ignore later ones.
    FirstWins,
    /// Fail with a syntax error naming the repeated line.
    Reject,
}

/// Line terminator written after every entry.
///
/// # Examples
///
/// ```rust
/// use serde_vars::LineEnding;
///
/// assert_eq!(LineEnding::Lf.as_str(), "\n");
/// assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Returns the string representation of this line ending.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Configuration for parsing and serialization.
///
/// # Examples
///
/// ```rust
/// use serde_vars::{DuplicateKeys, LineEnding, VarsOptions};
///
/// let options = VarsOptions::new()
///     .with_duplicates(DuplicateKeys::Reject)
///     .with_line_ending(LineEnding::CrLf);
/// assert_eq!(options.line_ending, LineEnding::CrLf);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VarsOptions {
    pub duplicates: DuplicateKeys,
    pub line_ending: LineEnding,
}

impl VarsOptions {
    /// Creates default options (last duplicate wins, `\n` line endings).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_vars::{DuplicateKeys, LineEnding, VarsOptions};
    ///
    /// let options = VarsOptions::new();
    /// assert_eq!(options.duplicates, DuplicateKeys::LastWins);
    /// assert_eq!(options.line_ending, LineEnding::Lf);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the duplicate key policy used when parsing.
    #[must_use]
    pub fn with_duplicates(mut self, duplicates: DuplicateKeys) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Sets the line ending used when writing.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}
