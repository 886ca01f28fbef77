//! Typed values derived from raw entries.
//!
//! Entries in a variables file are plain strings. A [`VarValue`] is what a raw
//! string becomes once it has been converted to one of the supported
//! [`Kind`]s: a string (unchanged), a boolean or a double.
//!
//! ## Usage Patterns
//!
//! ### Converting Raw Values
//!
//! ```rust
//! use serde_vars::{convert, Kind, VarValue};
//!
//! let value = convert("T", Kind::Bool).unwrap();
//! assert_eq!(value, VarValue::Bool(true));
//! assert_eq!(value.kind(), Kind::Bool);
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use serde_vars::VarValue;
//! use std::convert::TryFrom;
//!
//! let value = VarValue::from(0.625);
//! let float: f64 = f64::try_from(value).unwrap();
//! assert_eq!(float, 0.625);
//! ```
//!
//! ### Display
//!
//! `Display` prints the raw form a value converts back from: strings verbatim,
//! booleans as `true`/`false` and floats in shortest round-trip form.
//!
//! ```rust
//! use serde_vars::VarValue;
//!
//! assert_eq!(VarValue::from(1e23).to_string(), "1e+23");
//! assert_eq!(VarValue::from(f64::INFINITY).to_string(), "+Inf");
//! assert_eq!(VarValue::from(false).to_string(), "false");
//! ```

use crate::float::format_float;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Conversion target for a raw value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    String,
    Bool,
    Float,
}

impl Kind {
    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Bool => "bool",
            Kind::Float => "float",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw value converted to a string, boolean or double.
///
/// Floats compare with `==`, so `NaN` is never equal to itself.
///
/// # Examples
///
/// ```rust
/// use serde_vars::{Kind, VarValue};
///
/// let text = VarValue::String("amd64".to_string());
/// let flag = VarValue::Bool(true);
/// let num = VarValue::Float(22.5);
///
/// assert!(text.is_string());
/// assert!(flag.is_bool());
/// assert_eq!(num.kind(), Kind::Float);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum VarValue {
    String(String),
    Bool(bool),
    Float(f64),
}

impl VarValue {
    /// Returns the [`Kind`] this value was converted to.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            VarValue::String(_) => Kind::String,
            VarValue::Bool(_) => Kind::Bool,
            VarValue::Float(_) => Kind::Float,
        }
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, VarValue::String(_))
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, VarValue::Bool(_))
    }

    /// Returns `true` if the value is a float.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, VarValue::Float(_))
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_vars::VarValue;
    ///
    /// assert_eq!(VarValue::from("linux").as_str(), Some("linux"));
    /// assert_eq!(VarValue::from(true).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            VarValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            VarValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a float, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            VarValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for VarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarValue::String(s) => f.write_str(s),
            VarValue::Bool(b) => write!(f, "{}", b),
            VarValue::Float(fl) => f.write_str(&format_float(*fl)),
        }
    }
}

impl Serialize for VarValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            VarValue::String(s) => serializer.serialize_str(s),
            VarValue::Bool(b) => serializer.serialize_bool(*b),
            VarValue::Float(f) => serializer.serialize_f64(*f),
        }
    }
}

impl<'de> Deserialize<'de> for VarValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Visitor;

        struct VarValueVisitor;

        impl<'de> Visitor<'de> for VarValueVisitor {
            type Value = VarValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, boolean or number")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(VarValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(VarValue::Float(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(VarValue::Float(value as f64))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(VarValue::Float(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(VarValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(VarValue::String(value))
            }
        }

        deserializer.deserialize_any(VarValueVisitor)
    }
}

impl TryFrom<VarValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: VarValue) -> crate::Result<Self> {
        match value {
            VarValue::Float(f) => Ok(f),
            _ => Err(crate::Error::custom(format!(
                "expected float, found {}",
                value.kind()
            ))),
        }
    }
}

impl TryFrom<VarValue> for bool {
    type Error = crate::Error;

    fn try_from(value: VarValue) -> crate::Result<Self> {
        match value {
            VarValue::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {}",
                value.kind()
            ))),
        }
    }
}

impl TryFrom<VarValue> for String {
    type Error = crate::Error;

    fn try_from(value: VarValue) -> crate::Result<Self> {
        match value {
            VarValue::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {}",
                value.kind()
            ))),
        }
    }
}

impl From<bool> for VarValue {
    fn from(value: bool) -> Self {
        VarValue::Bool(value)
    }
}

impl From<i32> for VarValue {
    fn from(value: i32) -> Self {
        VarValue::Float(f64::from(value))
    }
}

impl From<u32> for VarValue {
    fn from(value: u32) -> Self {
        VarValue::Float(f64::from(value))
    }
}

impl From<f32> for VarValue {
    fn from(value: f32) -> Self {
        VarValue::Float(value as f64)
    }
}

impl From<f64> for VarValue {
    fn from(value: f64) -> Self {
        VarValue::Float(value)
    }
}

impl From<String> for VarValue {
    fn from(value: String) -> Self {
        VarValue::String(value)
    }
}

impl From<&str> for VarValue {
    fn from(value: &str) -> Self {
        VarValue::String(value.to_string())
    }
}
