//! JSON configuration for [`ValueGenerator`].
//!
//! ```json
//! { "family": "ipv4", "min": "167772160", "max": 184549375, "seed": 42 }
//! ```
//!
//! `min` and `max` accept a JSON number or a decimal string, since IPv6
//! bounds do not fit a JSON number. Missing bounds default to the family range.

use super::ValueGenerator;
use crate::error::{BinaryError, Result};
use crate::models::{Magnitude, NumberFamily};
use lazy_static::lazy_static;
use num_traits::Zero;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

lazy_static! {
    static ref DECIMAL: Regex = Regex::new(r"^[0-9]+$").expect("Invalid Regex?");
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
enum DecimalBound {
    Number(u64),
    Text(String),
}

impl DecimalBound {
    fn to_magnitude(&self) -> Result<Magnitude> {
        match self {
            DecimalBound::Number(n) => Ok(Magnitude::from(*n)),
            DecimalBound::Text(s) => {
                let s = s.trim();
                if !DECIMAL.is_match(s) {
                    return Err(BinaryError::InvalidGeneratorConfig(format!(
                        "bound is not a decimal number: {s:?}"
                    )));
                }
                Magnitude::from_str(s).map_err(|e| {
                    BinaryError::InvalidGeneratorConfig(format!("invalid bound {s:?}: {e}"))
                })
            }
        }
    }
}

/// Serialized form of a [`ValueGenerator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    pub family: NumberFamily,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min: Option<DecimalBound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max: Option<DecimalBound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Config covering the whole of `family` with no fixed seed.
    pub fn new(family: NumberFamily) -> GeneratorConfig {
        GeneratorConfig {
            family,
            min: None,
            max: None,
            seed: None,
        }
    }

    pub fn with_min(mut self, min: &Magnitude) -> GeneratorConfig {
        self.min = Some(DecimalBound::Text(min.to_string()));
        self
    }

    pub fn with_max(mut self, max: &Magnitude) -> GeneratorConfig {
        self.max = Some(DecimalBound::Text(max.to_string()));
        self
    }

    pub fn with_seed(mut self, seed: u64) -> GeneratorConfig {
        self.seed = Some(seed);
        self
    }

    pub fn from_json(json: &str) -> Result<GeneratorConfig> {
        serde_json::from_str(json)
            .map_err(|e| BinaryError::InvalidGeneratorConfig(format!("Error parsing JSON: {e}")))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            BinaryError::InvalidGeneratorConfig(format!("Error serializing JSON: {e}"))
        })
    }

    /// Validate the bounds and build the generator.
    pub fn build(&self) -> Result<ValueGenerator> {
        let min = match &self.min {
            Some(bound) => bound.to_magnitude()?,
            None => Magnitude::zero(),
        };
        let max = match &self.max {
            Some(bound) => bound.to_magnitude()?,
            None => self.family.ceiling(),
        };
        let generator = ValueGenerator::new(self.family, min, max)?;
        Ok(match self.seed {
            Some(seed) => generator.with_seed(seed),
            None => generator,
        })
    }
}
