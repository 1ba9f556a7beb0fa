//! Binary string codecs.
//!
//! - [`binary`] - magnitude to minimal binary string and back
//! - [`segment`] - fixed-width octet/hextet encodings
//! - [`padding`] - left padding with zero bits

mod binary;
mod padding;
mod segment;

// Re-export public functions
pub use binary::{decimal_to_binary_string, parse_binary_string, to_binary_string};
pub use padding::left_pad_with_zero_bit;
pub use segment::{
    hextets_to_binary_string, octets_to_binary_string, to_hextet_string, to_octet_string,
    to_segment_string, HEXTET_WIDTH, OCTET_WIDTH,
};
