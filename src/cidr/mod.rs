//! CIDR arithmetic on binary strings.
//!
//! - [`mask`] - prefix length to subnet mask
//! - [`matching`] - matching leading bit count
//! - [`log2`] - exact log2 of range sizes

pub(crate) mod mask;
mod log2;
mod matching;

// Re-export public functions
pub use log2::exact_log2;
pub use mask::{prefix_to_mask_binary_string, prefix_to_mask_magnitude};
pub use matching::matching_bit_count;
