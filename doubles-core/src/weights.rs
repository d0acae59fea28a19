//! Fairness weights

use serde::{Deserialize, Deserializer, Serialize};

/// Largest value any weight may take
pub const MAX_WEIGHT: u8 = 5;

/// Clamp an arbitrary integer into `0..=MAX_WEIGHT`
pub fn clamp_weight(value: i64) -> u8 {
    value.clamp(0, MAX_WEIGHT as i64) as u8
}

fn deserialize_weight<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let raw = i64::deserialize(deserializer)?;
    Ok(clamp_weight(raw))
}

/// Weights of the three configurable scoring terms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightConfig {
    /// Repeated partners
    #[serde(deserialize_with = "deserialize_weight")]
    pub w_partner: u8,
    /// Repeated opponents
    #[serde(deserialize_with = "deserialize_weight")]
    pub w_opp: u8,
    /// Similarity to the previous round
    #[serde(deserialize_with = "deserialize_weight")]
    pub w_prev: u8,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            w_partner: 3,
            w_opp: 2,
            w_prev: 2,
        }
    }
}

impl WeightConfig {
    pub fn new(w_partner: i64, w_opp: i64, w_prev: i64) -> Self {
        Self {
            w_partner: clamp_weight(w_partner),
            w_opp: clamp_weight(w_opp),
            w_prev: clamp_weight(w_prev),
        }
    }

    /// All weights zero
    pub fn zero() -> Self {
        Self::new(0, 0, 0)
    }

    pub fn with_partner(mut self, value: i64) -> Self {
        self.w_partner = clamp_weight(value);
        self
    }

    pub fn with_opp(mut self, value: i64) -> Self {
        self.w_opp = clamp_weight(value);
        self
    }

    pub fn with_prev(mut self, value: i64) -> Self {
        self.w_prev = clamp_weight(value);
        self
    }
}
