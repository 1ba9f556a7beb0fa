//! Value types shared by the codecs and CIDR helpers.
//!
//! - [`Magnitude`] - arbitrary-precision non-negative integer
//! - [`BinaryString`] - validated `'0'`/`'1'` string
//! - [`AddressFamily`] and [`NumberFamily`] - bit widths and ceilings
//! - [`PrefixLength`] - prefix length checked against its family

mod binary_string;
mod family;
mod prefix;

/// Arbitrary-precision non-negative integer underlying an address or ASN.
pub type Magnitude = num_bigint::BigUint;

// Re-export public types
pub(crate) use binary_string::validate;
pub use binary_string::BinaryString;
pub use family::{AddressFamily, NumberFamily, ASN_WIDTH, IPV4_WIDTH, IPV6_WIDTH};
pub use prefix::PrefixLength;
