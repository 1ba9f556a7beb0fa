//! Randomized, range-bounded magnitude generators for ASN, IPv4 and IPv6.
//!
//! A [`ValueGenerator`] holds validated bounds and a seed. Each call to
//! [`ValueGenerator::iter`] starts a fresh, infinite [`Values`] sequence from
//! that seed, so two iterators from the same generator yield the same values
//! and never share state.
//!
//! - [`config`] - JSON configuration for generators

mod config;

pub use config::GeneratorConfig;

use crate::codec::to_segment_string;
use crate::error::{BinaryError, Result};
use crate::models::{BinaryString, Magnitude, NumberFamily};
use num_bigint::RandBigInt;
use num_traits::{One, Zero};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Validated inclusive bounds `[min, max]` within one number family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueGenerator {
    family: NumberFamily,
    min: Magnitude,
    max: Magnitude,
    seed: u64,
}

impl ValueGenerator {
    /// Build a generator over `[min, max]`.
    ///
    /// Fails when `max` exceeds the family ceiling or when `min > max`.
    /// The seed is drawn from OS entropy once; use [`with_seed`](Self::with_seed)
    /// for reproducible sequences.
    pub fn new(
        family: NumberFamily,
        min: impl Into<Magnitude>,
        max: impl Into<Magnitude>,
    ) -> Result<ValueGenerator> {
        let min = min.into();
        let max = max.into();
        let ceiling = family.ceiling();
        if max > ceiling {
            return Err(BinaryError::BoundAboveCeiling {
                family: family.to_string(),
                max: max.to_string(),
                ceiling: ceiling.to_string(),
            });
        }
        if min > max {
            return Err(BinaryError::InvertedBounds {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        let seed = rand::random();
        log::debug!("ValueGenerator::new({family} [{min}, {max}]) seed={seed}");
        Ok(ValueGenerator {
            family,
            min,
            max,
            seed,
        })
    }

    /// Generator over every value of `family`.
    pub fn full_range(family: NumberFamily) -> ValueGenerator {
        ValueGenerator {
            family,
            min: Magnitude::zero(),
            max: family.ceiling(),
            seed: rand::random(),
        }
    }

    pub fn asn(min: impl Into<Magnitude>, max: impl Into<Magnitude>) -> Result<ValueGenerator> {
        ValueGenerator::new(NumberFamily::Asn, min, max)
    }

    pub fn ipv4(min: impl Into<Magnitude>, max: impl Into<Magnitude>) -> Result<ValueGenerator> {
        ValueGenerator::new(NumberFamily::IPv4, min, max)
    }

    pub fn ipv6(min: impl Into<Magnitude>, max: impl Into<Magnitude>) -> Result<ValueGenerator> {
        ValueGenerator::new(NumberFamily::IPv6, min, max)
    }

    pub fn with_seed(mut self, seed: u64) -> ValueGenerator {
        self.seed = seed;
        self
    }

    pub fn family(&self) -> NumberFamily {
        self.family
    }

    pub fn min(&self) -> &Magnitude {
        &self.min
    }

    pub fn max(&self) -> &Magnitude {
        &self.max
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Start a new infinite sequence, uniform over `[min, max]`.
    pub fn iter(&self) -> Values {
        log::debug!(
            "ValueGenerator::iter({} [{}, {}]) seed={}",
            self.family,
            self.min,
            self.max,
            self.seed
        );
        Values {
            rng: ChaCha8Rng::seed_from_u64(self.seed),
            low: self.min.clone(),
            high: &self.max + Magnitude::one(),
        }
    }

    /// Like [`iter`](Self::iter), each value encoded at the family bit width.
    pub fn binary_strings(&self) -> impl Iterator<Item = BinaryString> {
        let width = self.family.bit_width();
        // max <= ceiling, so every value fits the family width
        self.iter()
            .filter_map(move |value| to_segment_string(&value, width).ok())
    }
}

impl<'a> IntoIterator for &'a ValueGenerator {
    type Item = Magnitude;
    type IntoIter = Values;

    fn into_iter(self) -> Values {
        self.iter()
    }
}

/// Infinite iterator of magnitudes drawn uniformly from `[low, high)`.
#[derive(Debug, Clone)]
pub struct Values {
    rng: ChaCha8Rng,
    low: Magnitude,
    high: Magnitude,
}

impl Iterator for Values {
    type Item = Magnitude;

    fn next(&mut self) -> Option<Magnitude> {
        Some(self.rng.gen_biguint_range(&self.low, &self.high))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::collections::HashSet;

    #[test]
    fn test_bounds_are_respected() {
        let gen = ValueGenerator::ipv4(1000u32, 2000u32).unwrap().with_seed(1);
        for value in gen.iter().take(1000) {
            assert!(value >= Magnitude::from(1000u32));
            assert!(value <= Magnitude::from(2000u32));
        }
    }

    #[test]
    fn test_max_is_inclusive() {
        let gen = ValueGenerator::asn(0u32, 3u32).unwrap().with_seed(2);
        let seen: HashSet<Magnitude> = gen.iter().take(500).collect();
        assert_eq!(seen.len(), 4);
        assert!(seen.contains(&Magnitude::from(3u32)));
    }

    #[test]
    fn test_single_value_range() {
        let gen = ValueGenerator::ipv6(42u32, 42u32).unwrap();
        assert!(gen.iter().take(10).all(|v| v == Magnitude::from(42u32)));
    }

    #[test]
    fn test_restartable() {
        let gen = ValueGenerator::ipv6(0u32, u128::MAX).unwrap().with_seed(99);
        let first: Vec<Magnitude> = gen.iter().take(20).collect();
        let second: Vec<Magnitude> = gen.iter().take(20).collect();
        assert_eq!(first, second);

        let mut a = gen.iter();
        let mut b = gen.iter();
        a.next();
        a.next();
        assert_eq!(b.next(), first.first().cloned());
    }

    #[test]
    fn test_different_seeds_differ() {
        let gen = ValueGenerator::ipv6(0u32, u128::MAX).unwrap();
        let a: Vec<Magnitude> = gen.clone().with_seed(1).iter().take(5).collect();
        let b: Vec<Magnitude> = gen.with_seed(2).iter().take(5).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_max_above_ceiling_fails() {
        let err = ValueGenerator::ipv4(0u32, 1u64 << 32).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(
            err.to_string(),
            "given max value 4294967296 is greater than 4294967295, the accepted maximum value of IPv4"
        );
        assert!(ValueGenerator::asn(0u32, 1u64 << 32).is_err());
        let too_big = Magnitude::from(u128::MAX) + 1u32;
        assert!(ValueGenerator::ipv6(0u32, too_big).is_err());
    }

    #[test]
    fn test_inverted_bounds_fail() {
        let err = ValueGenerator::ipv4(10u32, 9u32).unwrap_err();
        assert_eq!(
            err,
            BinaryError::InvertedBounds {
                min: "10".to_string(),
                max: "9".to_string()
            }
        );
    }

    #[test]
    fn test_full_range() {
        let gen = ValueGenerator::full_range(NumberFamily::IPv6);
        assert_eq!(gen.min(), &Magnitude::zero());
        assert_eq!(gen.max(), &Magnitude::from(u128::MAX));
        assert_eq!(gen.family(), NumberFamily::IPv6);
    }

    #[test]
    fn test_binary_strings_use_family_width() {
        let gen = ValueGenerator::ipv4(0u32, 255u32).unwrap().with_seed(5);
        for bits in gen.binary_strings().take(100) {
            assert_eq!(bits.len(), 32);
            assert!(bits.as_str().starts_with(&"0".repeat(24)));
        }
        let gen = ValueGenerator::full_range(NumberFamily::IPv6).with_seed(5);
        assert!(gen.binary_strings().take(20).all(|b| b.len() == 128));
    }

    #[test]
    fn test_into_iterator() {
        let gen = ValueGenerator::asn(7u32, 7u32).unwrap();
        let mut count = 0;
        for value in &gen {
            assert_eq!(value, Magnitude::from(7u32));
            count += 1;
            if count == 3 {
                break;
            }
        }
        assert_eq!(count, 3);
    }
}
