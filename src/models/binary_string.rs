//! Validated most-significant-bit-first binary strings.
//!
//! Provides [`BinaryString`], a string made only of `'0'` and `'1'` with at
//! least one digit.

use crate::error::{BinaryError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref NON_BINARY: Regex = Regex::new(r"[^01]").expect("Invalid Regex?");
}

/// A non-empty string of binary digits, most significant bit first.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Hash)]
pub struct BinaryString(String);

impl BinaryString {
    /// Validate `input` and wrap it.
    ///
    /// # Examples
    /// ```
    /// use ipbits::BinaryString;
    /// assert_eq!(BinaryString::new("0101").unwrap().len(), 4);
    /// assert!(BinaryString::new("0121").is_err());
    /// ```
    pub fn new(input: impl Into<String>) -> Result<BinaryString> {
        let input = input.into();
        validate(&input)?;
        Ok(BinaryString(input))
    }

    /// Wrap a string already known to hold only binary digits.
    pub(crate) fn from_trusted(digits: String) -> BinaryString {
        debug_assert!(validate(&digits).is_ok(), "untrusted digits {digits:?}");
        BinaryString(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of bits, leading zeros included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Check that `input` is non-empty and contains only `'0'` / `'1'`.
pub(crate) fn validate(input: &str) -> Result<()> {
    if input.is_empty() {
        return Err(BinaryError::EmptyBinaryString);
    }
    if let Some(m) = NON_BINARY.find(input) {
        let character = input[m.start()..].chars().next().unwrap_or_default();
        return Err(BinaryError::InvalidBinaryDigit {
            input: input.to_string(),
            character,
            position: input[..m.start()].chars().count(),
        });
    }
    Ok(())
}

impl FromStr for BinaryString {
    type Err = BinaryError;

    fn from_str(s: &str) -> Result<BinaryString> {
        BinaryString::new(s)
    }
}

impl TryFrom<String> for BinaryString {
    type Error = BinaryError;

    fn try_from(value: String) -> Result<BinaryString> {
        BinaryString::new(value)
    }
}

impl TryFrom<&str> for BinaryString {
    type Error = BinaryError;

    fn try_from(value: &str) -> Result<BinaryString> {
        BinaryString::new(value)
    }
}

impl AsRef<str> for BinaryString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BinaryString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for BinaryString {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BinaryString {
    fn deserialize<D>(deserializer: D) -> std::result::Result<BinaryString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BinaryString::new(s).map_err(de::Error::custom)
    }
}
