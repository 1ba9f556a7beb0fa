//! Address family widths and number-family ceilings.

use crate::models::Magnitude;
use num_traits::One;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bit width of an IPv4 address and its masks.
pub const IPV4_WIDTH: usize = 32;
/// Bit width of an IPv6 address and its masks.
pub const IPV6_WIDTH: usize = 128;
/// Bit width of a 4-byte Autonomous System Number.
pub const ASN_WIDTH: usize = 32;

/// IP family, used to bound prefix lengths and size masks.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    IPv4,
    IPv6,
}

impl AddressFamily {
    /// Total number of bits in an address of this family.
    pub const fn width(self) -> usize {
        match self {
            AddressFamily::IPv4 => IPV4_WIDTH,
            AddressFamily::IPv6 => IPV6_WIDTH,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AddressFamily::IPv4 => write!(f, "IPv4"),
            AddressFamily::IPv6 => write!(f, "IPv6"),
        }
    }
}

/// Numbering space a generated magnitude belongs to.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberFamily {
    Asn,
    IPv4,
    IPv6,
}

impl NumberFamily {
    pub const fn bit_width(self) -> usize {
        match self {
            NumberFamily::Asn => ASN_WIDTH,
            NumberFamily::IPv4 => IPV4_WIDTH,
            NumberFamily::IPv6 => IPV6_WIDTH,
        }
    }

    /// Largest magnitude in this family: `2^bit_width - 1`.
    ///
    /// # Examples
    /// ```
    /// use ipbits::{Magnitude, NumberFamily};
    /// assert_eq!(NumberFamily::IPv4.ceiling(), Magnitude::from(u32::MAX));
    /// ```
    pub fn ceiling(self) -> Magnitude {
        (Magnitude::one() << self.bit_width()) - Magnitude::one()
    }
}

impl From<AddressFamily> for NumberFamily {
    fn from(family: AddressFamily) -> NumberFamily {
        match family {
            AddressFamily::IPv4 => NumberFamily::IPv4,
            AddressFamily::IPv6 => NumberFamily::IPv6,
        }
    }
}

impl fmt::Display for NumberFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NumberFamily::Asn => write!(f, "ASN"),
            NumberFamily::IPv4 => write!(f, "IPv4"),
            NumberFamily::IPv6 => write!(f, "IPv6"),
        }
    }
}
