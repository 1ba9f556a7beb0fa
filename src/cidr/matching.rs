//! Longest common prefix of two binary strings.

/// Count the leading bits `a` and `b` share.
///
/// Comparison stops at the first mismatch or at the end of the shorter
/// string. Pad both sides to the same width first when the caller needs
/// CIDR alignment.
///
/// # Examples
/// ```
/// use ipbits::matching_bit_count;
/// assert_eq!(matching_bit_count("10101110100111010", "10101111101101110"), 7);
/// ```
pub fn matching_bit_count(a: impl AsRef<str>, b: impl AsRef<str>) -> usize {
    a.as_ref()
        .bytes()
        .zip(b.as_ref().bytes())
        .take_while(|(x, y)| x == y)
        .count()
}
