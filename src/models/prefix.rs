//! CIDR prefix lengths checked against their family width.

use crate::cidr::mask::mask_bits;
use crate::error::{BinaryError, Result};
use crate::models::{AddressFamily, BinaryString};
use std::fmt;

/// A prefix length known to lie in `[0, family.width()]`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct PrefixLength {
    len: u8,
    family: AddressFamily,
}

impl PrefixLength {
    /// Check `len` against the width of `family`.
    ///
    /// Prefix lengths are unsigned, so only the upper bound can fail.
    pub fn new(len: u8, family: AddressFamily) -> Result<PrefixLength> {
        let width = family.width();
        if usize::from(len) > width {
            return Err(BinaryError::PrefixOutOfRange { prefix: len, width });
        }
        Ok(PrefixLength { len, family })
    }

    pub fn value(self) -> u8 {
        self.len
    }

    pub fn family(self) -> AddressFamily {
        self.family
    }

    /// Number of host bits left after the prefix.
    pub fn host_bits(self) -> usize {
        self.family.width() - usize::from(self.len)
    }

    /// `len` ones followed by zeros, `family.width()` bits in total.
    pub fn mask_binary_string(self) -> BinaryString {
        mask_bits(usize::from(self.len), self.family.width())
    }
}

impl fmt::Display for PrefixLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "/{}", self.len)
    }
}
