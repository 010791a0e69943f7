//! Core type definitions shared by every encounter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use uuid::Uuid;

/// Vitality score of an organism
pub type Vitality = u64;

/// Saturation ceiling for vitality
pub const MAX_VITALITY: Vitality = Vitality::MAX;

/// Unique identifier for a species
///
/// Any `PartialEq + Clone` type can serve as a species identity; this one
/// is provided for callers that have no natural key of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeciesId(pub Uuid);

impl SpeciesId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SpeciesId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Add `amount` to `vitality`, clamping at [`MAX_VITALITY`]
pub fn saturating_feed(vitality: Vitality, amount: Vitality) -> Vitality {
    vitality.saturating_add(amount)
}

/// Vitality of a newborn: the floor of the parents' mean
pub fn offspring_vitality(first: Vitality, second: Vitality) -> Vitality {
    let mean = (u128::from(first) + u128::from(second)) / 2;
    mean.min(u128::from(MAX_VITALITY)) as Vitality
}

/// Energy a predator gains from a victim, given the loss divisor
///
/// A divisor of 1 transfers everything; 2 transfers half, rounded down.
pub fn energy_transfer(victim: Vitality, divisor: NonZeroU64) -> Vitality {
    victim / divisor
}
