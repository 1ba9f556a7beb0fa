//! Error types for binary conversions and CIDR arithmetic.
//!
//! Every failure is a precondition violation reported straight back to the
//! caller. [`BinaryError::kind`] groups the variants into the three
//! [`ErrorKind`]s callers usually branch on.

use thiserror::Error;

/// Coarse classification of a [`BinaryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input: bad binary digit, padding target too short, inexact log2.
    InvalidInput,
    /// A magnitude does not fit the fixed width of a grouped encoding.
    Overflow,
    /// A prefix length or generator bound outside its permitted range.
    Range,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BinaryError {
    #[error("binary string must contain at least one digit")]
    EmptyBinaryString,

    #[error("invalid binary string {input:?}: character {character:?} at position {position}")]
    InvalidBinaryDigit {
        input: String,
        character: char,
        position: usize,
    },

    #[error("string already longer than target length after padding: {target_length}")]
    PaddingTargetTooShort { target_length: usize, length: usize },

    #[error("{value} is not an exact power of two")]
    NotPowerOfTwo { value: String },

    #[error("value contains digits greater than {}", segment_name(.width))]
    SegmentOverflow { width: usize, bits: usize },

    #[error("value is greater than {width}")]
    PrefixOutOfRange { prefix: u8, width: usize },

    #[error("given max value {max} is greater than {ceiling}, the accepted maximum value of {family}")]
    BoundAboveCeiling {
        family: String,
        max: String,
        ceiling: String,
    },

    #[error("given min value {min} is greater than max value {max}")]
    InvertedBounds { min: String, max: String },

    #[error("invalid generator config: {0}")]
    InvalidGeneratorConfig(String),
}

impl BinaryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BinaryError::EmptyBinaryString
            | BinaryError::InvalidBinaryDigit { .. }
            | BinaryError::PaddingTargetTooShort { .. }
            | BinaryError::NotPowerOfTwo { .. }
            | BinaryError::InvalidGeneratorConfig(_) => ErrorKind::InvalidInput,
            BinaryError::SegmentOverflow { .. } => ErrorKind::Overflow,
            BinaryError::PrefixOutOfRange { .. }
            | BinaryError::BoundAboveCeiling { .. }
            | BinaryError::InvertedBounds { .. } => ErrorKind::Range,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, BinaryError>;

fn segment_name(width: &usize) -> String {
    match width {
        8 => "an octet".to_string(),
        16 => "a hextet".to_string(),
        w => format!("{w} bits"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octet_overflow_message() {
        let err = BinaryError::SegmentOverflow { width: 8, bits: 9 };
        assert_eq!(
            err.to_string(),
            "value contains digits greater than an octet"
        );
        assert_eq!(err.kind(), ErrorKind::Overflow);
    }

    #[test]
    fn test_other_width_overflow_message() {
        let err = BinaryError::SegmentOverflow { width: 16, bits: 17 };
        assert_eq!(err.to_string(), "value contains digits greater than a hextet");
        let err = BinaryError::SegmentOverflow { width: 12, bits: 13 };
        assert_eq!(err.to_string(), "value contains digits greater than 12 bits");
    }

    #[test]
    fn test_padding_message() {
        let err = BinaryError::PaddingTargetTooShort {
            target_length: 5,
            length: 9,
        };
        assert_eq!(
            err.to_string(),
            "string already longer than target length after padding: 5"
        );
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_prefix_message() {
        let err = BinaryError::PrefixOutOfRange {
            prefix: 33,
            width: 32,
        };
        assert_eq!(err.to_string(), "value is greater than 32");
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_generator_errors_are_range_errors() {
        let err = BinaryError::InvertedBounds {
            min: "10".to_string(),
            max: "1".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(
            BinaryError::InvalidGeneratorConfig("x".to_string()).kind(),
            ErrorKind::InvalidInput
        );
    }
}
