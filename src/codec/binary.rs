//! Decimal magnitude to binary string conversion and back.

use crate::error::{BinaryError, Result};
use crate::models::{validate, BinaryString, Magnitude};
use num_traits::Num;

/// Convert a magnitude to its minimal binary string.
///
/// Zero becomes `"0"`; every other value starts with `'1'`.
///
/// # Examples
/// ```
/// use ipbits::{to_binary_string, Magnitude};
/// assert_eq!(to_binary_string(&Magnitude::from(10u32)).as_str(), "1010");
/// ```
pub fn to_binary_string(value: &Magnitude) -> BinaryString {
    let digits = value.to_str_radix(2);
    log::trace!("to_binary_string({value}) -> {} bits", digits.len());
    BinaryString::from_trusted(digits)
}

/// Convert a machine-width number to its minimal binary string.
pub fn decimal_to_binary_string(value: u64) -> BinaryString {
    to_binary_string(&Magnitude::from(value))
}

/// Parse a string of `'0'`/`'1'` characters, leading zeros allowed.
pub fn parse_binary_string(input: &str) -> Result<Magnitude> {
    // BigUint's radix parser tolerates '_' separators, so validate first.
    validate(input)?;
    let value =
        Magnitude::from_str_radix(input, 2).map_err(|_| BinaryError::InvalidBinaryDigit {
            input: input.to_string(),
            character: input.chars().next().unwrap_or_default(),
            position: 0,
        })?;
    log::trace!("parse_binary_string({} bits) -> {value}", input.len());
    Ok(value)
}
