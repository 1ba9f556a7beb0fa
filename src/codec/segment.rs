//! Fixed-width segment encodings: octets (IPv4) and hextets (IPv6).

use super::binary::to_binary_string;
use super::padding::left_pad_with_zero_bit;
use crate::error::{BinaryError, Result};
use crate::models::{BinaryString, Magnitude};
use itertools::Itertools;

/// Bits in an IPv4 octet.
pub const OCTET_WIDTH: usize = 8;
/// Bits in an IPv6 hextet.
pub const HEXTET_WIDTH: usize = 16;

/// Encode `value` as exactly `width` bits, left padded with zeros.
///
/// Fails with an overflow error if the minimal binary form is wider than `width`.
pub fn to_segment_string(value: &Magnitude, width: usize) -> Result<BinaryString> {
    let binary = to_binary_string(value);
    if binary.len() > width {
        return Err(BinaryError::SegmentOverflow {
            width,
            bits: binary.len(),
        });
    }
    left_pad_with_zero_bit(&binary, width)
}

/// Encode `value` as an 8 bit octet string.
///
/// # Examples
/// ```
/// use ipbits::{to_octet_string, Magnitude};
/// assert_eq!(to_octet_string(&Magnitude::from(5u32)).unwrap().as_str(), "00000101");
/// assert!(to_octet_string(&Magnitude::from(256u32)).is_err());
/// ```
pub fn to_octet_string(value: &Magnitude) -> Result<BinaryString> {
    to_segment_string(value, OCTET_WIDTH)
}

/// Encode `value` as a 16 bit hextet string.
pub fn to_hextet_string(value: &Magnitude) -> Result<BinaryString> {
    to_segment_string(value, HEXTET_WIDTH)
}

/// Concatenate octets into one binary string, 8 bits per octet.
///
/// Returns `None` for an empty slice.
pub fn octets_to_binary_string(octets: &[u8]) -> Option<BinaryString> {
    if octets.is_empty() {
        return None;
    }
    let digits = octets.iter().map(|o| format!("{o:08b}")).join("");
    Some(BinaryString::from_trusted(digits))
}

/// Concatenate hextets into one binary string, 16 bits per hextet.
///
/// Returns `None` for an empty slice.
pub fn hextets_to_binary_string(hextets: &[u16]) -> Option<BinaryString> {
    if hextets.is_empty() {
        return None;
    }
    let digits = hextets.iter().map(|h| format!("{h:016b}")).join("");
    Some(BinaryString::from_trusted(digits))
}
