//! Binary representation and CIDR arithmetic for IPv4, IPv6 and ASN magnitudes.
//!
//! - [`codec`] - magnitude to binary string, octet/hextet encodings, padding
//! - [`cidr`] - prefix masks, matching bit count, exact log2
//! - [`generator`] - seeded, range-bounded value generators
//! - [`models`] - [`BinaryString`], [`Magnitude`], address families, prefix lengths
//!
//! Every operation is a pure function; failures come back as [`BinaryError`].

pub mod cidr;
pub mod codec;
pub mod error;
pub mod generator;
pub mod models;

pub use cidr::{
    exact_log2, matching_bit_count, prefix_to_mask_binary_string, prefix_to_mask_magnitude,
};
pub use codec::{
    decimal_to_binary_string, hextets_to_binary_string, left_pad_with_zero_bit,
    octets_to_binary_string, parse_binary_string, to_binary_string, to_hextet_string,
    to_octet_string, to_segment_string,
};
pub use error::{BinaryError, ErrorKind, Result};
pub use generator::{GeneratorConfig, ValueGenerator, Values};
pub use models::{AddressFamily, BinaryString, Magnitude, NumberFamily, PrefixLength};
