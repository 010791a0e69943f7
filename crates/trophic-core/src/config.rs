//! Configuration for the encounter rule table.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;

/// Energy transfer divisors applied when one organism eats another
///
/// Divisors are non-zero by type, so every rules value is usable as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncounterRules {
    /// Divisor applied to a plant's vitality when it is eaten (1 = full transfer)
    pub plant_energy_loss: NonZeroU64,
    /// Divisor applied to an animal's vitality when it is eaten
    pub animal_energy_loss: NonZeroU64,
}

const fn divisor(value: u64) -> NonZeroU64 {
    match NonZeroU64::new(value) {
        Some(value) => value,
        None => panic!("divisor must be non-zero"),
    }
}

impl EncounterRules {
    pub const PLANT_ENERGY_LOSS: NonZeroU64 = divisor(1);
    pub const ANIMAL_ENERGY_LOSS: NonZeroU64 = divisor(2);

    /// Parse a JSON rules document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for EncounterRules {
    fn default() -> Self {
        Self {
            plant_energy_loss: Self::PLANT_ENERGY_LOSS,
            animal_energy_loss: Self::ANIMAL_ENERGY_LOSS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_default_rules() {
        let rules = EncounterRules::default();
        assert_eq!(rules.plant_energy_loss.get(), 1);
        assert_eq!(rules.animal_energy_loss.get(), 2);
    }

    #[test]
    fn test_zero_divisor_cannot_be_built() {
        assert!(NonZeroU64::new(0).is_none());

        let err = EncounterRules::from_json(r#"{"animal_energy_loss": 0}"#).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_rules_serialization() {
        let rules = EncounterRules::default();
        let json = serde_json::to_string(&rules).unwrap();
        assert_eq!(json, r#"{"plant_energy_loss":1,"animal_energy_loss":2}"#);
        let deserialized = EncounterRules::from_json(&json).unwrap();
        assert_eq!(rules, deserialized);
    }

    #[test]
    fn test_partial_rules_document() {
        let rules = EncounterRules::from_json(r#"{"animal_energy_loss": 4}"#).unwrap();
        assert_eq!(rules.plant_energy_loss.get(), 1);
        assert_eq!(rules.animal_energy_loss.get(), 4);

        let err = EncounterRules::from_json(r#"{"plant_energy_loss": 0}"#).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));

        let err = EncounterRules::from_json("not json").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
