//! Left padding of binary strings to a fixed bit length.

use crate::error::{BinaryError, Result};
use crate::models::BinaryString;

/// Prepend `'0'` bits until `input` is `target_length` long.
///
/// Never truncates: an input longer than `target_length` is an error.
///
/// # Examples
/// ```
/// use ipbits::{left_pad_with_zero_bit, BinaryString};
/// let bits = BinaryString::new("10").unwrap();
/// assert_eq!(left_pad_with_zero_bit(&bits, 5).unwrap().as_str(), "00010");
/// ```
pub fn left_pad_with_zero_bit(input: &BinaryString, target_length: usize) -> Result<BinaryString> {
    let length = input.len();
    if length > target_length {
        return Err(BinaryError::PaddingTargetTooShort {
            target_length,
            length,
        });
    }
    if length == target_length {
        return Ok(input.clone());
    }
    let padded = format!("{}{}", "0".repeat(target_length - length), input);
    Ok(BinaryString::from_trusted(padded))
}
