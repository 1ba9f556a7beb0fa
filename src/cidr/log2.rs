//! Exact base-2 logarithm for range sizes.

use crate::error::{BinaryError, Result};
use crate::models::Magnitude;

/// Return `n` where `value == 2^n`.
///
/// Anything that is not an exact power of two, zero included, is rejected.
///
/// # Examples
/// ```
/// use ipbits::{exact_log2, Magnitude};
/// assert_eq!(exact_log2(&Magnitude::from(256u32)).unwrap(), 8);
/// assert!(exact_log2(&Magnitude::from(12u32)).is_err());
/// ```
pub fn exact_log2(value: &Magnitude) -> Result<u64> {
    match value.trailing_zeros() {
        Some(zeros) if value.bits() == zeros + 1 => Ok(zeros),
        _ => Err(BinaryError::NotPowerOfTwo {
            value: value.to_string(),
        }),
    }
}
