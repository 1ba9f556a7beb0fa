//! CIDR prefix length to subnet mask conversion.

use crate::codec::parse_binary_string;
use crate::error::Result;
use crate::models::{AddressFamily, BinaryString, Magnitude, PrefixLength};
use itertools::repeat_n;

/// `prefix` ones followed by `width - prefix` zeros.
///
/// Callers guarantee `prefix <= width`.
pub(crate) fn mask_bits(prefix: usize, width: usize) -> BinaryString {
    debug_assert!(prefix <= width, "prefix[{prefix}] > width[{width}]");
    let digits: String = repeat_n('1', prefix)
        .chain(repeat_n('0', width - prefix))
        .collect();
    BinaryString::from_trusted(digits)
}

/// Convert a CIDR prefix length to its mask as a binary string.
///
/// The result is always `family.width()` bits long.
///
/// # Examples
/// ```
/// use ipbits::{prefix_to_mask_binary_string, AddressFamily};
/// let mask = prefix_to_mask_binary_string(24, AddressFamily::IPv4).unwrap();
/// assert_eq!(mask.as_str(), "11111111111111111111111100000000");
/// assert!(prefix_to_mask_binary_string(33, AddressFamily::IPv4).is_err());
/// ```
pub fn prefix_to_mask_binary_string(prefix: u8, family: AddressFamily) -> Result<BinaryString> {
    let prefix = PrefixLength::new(prefix, family)?;
    let mask = prefix.mask_binary_string();
    log::trace!("prefix_to_mask_binary_string({prefix} {family}) -> {mask}");
    Ok(mask)
}

/// Convert a CIDR prefix length to its mask as a magnitude.
pub fn prefix_to_mask_magnitude(prefix: u8, family: AddressFamily) -> Result<Magnitude> {
    let mask = prefix_to_mask_binary_string(prefix, family)?;
    parse_binary_string(mask.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BinaryError, ErrorKind};
    use regex::Regex;

    #[test]
    fn test_ipv4_mask_shape() {
        for prefix in 0..=32u8 {
            let mask = prefix_to_mask_binary_string(prefix, AddressFamily::IPv4).unwrap();
            let re = Regex::new(&format!("^1{{{}}}0{{{}}}$", prefix, 32 - prefix)).unwrap();
            assert!(re.is_match(mask.as_str()), "prefix {prefix}: {mask}");
        }
    }

    #[test]
    fn test_ipv4_mask_edges() {
        assert_eq!(
            prefix_to_mask_binary_string(0, AddressFamily::IPv4)
                .unwrap()
                .as_str(),
            "0".repeat(32)
        );
        assert_eq!(
            prefix_to_mask_binary_string(32, AddressFamily::IPv4)
                .unwrap()
                .as_str(),
            "1".repeat(32)
        );
    }

    #[test]
    fn test_ipv4_mask_out_of_range() {
        let err = prefix_to_mask_binary_string(33, AddressFamily::IPv4).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.to_string(), "value is greater than 32");
    }

    #[test]
    fn test_ipv6_mask() {
        assert_eq!(
            prefix_to_mask_binary_string(64, AddressFamily::IPv6)
                .unwrap()
                .as_str(),
            format!("{}{}", "1".repeat(64), "0".repeat(64))
        );
        assert_eq!(
            prefix_to_mask_binary_string(128, AddressFamily::IPv6)
                .unwrap()
                .as_str(),
            "1".repeat(128)
        );
        assert_eq!(
            prefix_to_mask_binary_string(130, AddressFamily::IPv6).unwrap_err(),
            BinaryError::PrefixOutOfRange {
                prefix: 130,
                width: 128
            }
        );
    }

    #[test]
    fn test_mask_magnitude() {
        assert_eq!(
            prefix_to_mask_magnitude(24, AddressFamily::IPv4).unwrap(),
            Magnitude::from(0xFFFFFF00u32)
        );
        assert_eq!(
            prefix_to_mask_magnitude(0, AddressFamily::IPv4).unwrap(),
            Magnitude::from(0u32)
        );
        assert_eq!(
            prefix_to_mask_magnitude(128, AddressFamily::IPv6).unwrap(),
            Magnitude::from(u128::MAX)
        );
    }
}
