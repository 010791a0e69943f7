//! Pairwise encounters between organisms.
//!
//! Organisms carry a species, a vitality score and a fixed diet. Meeting
//! another organism ends in nothing, predation, a mutual kill or mating,
//! decided by the rule table in [`rules`]. Every operation is pure and
//! returns new values.

pub mod organism;
pub mod rules;
pub mod encounter;
pub mod series;
pub mod specimen;

pub use organism::{Carnivore, Herbivore, Lifeform, Omnivore, Organism, Plant};
pub use rules::{decide, Contender, Outcome};
pub use encounter::{encounter, Resolver};
pub use series::{encounter_sequence, encounter_series, Opponent};
pub use specimen::{EncounterPair, Specimen};

pub use trophic_core::{
    CanMeet, Carnivorous, Diet, DietClass, EncounterRules, Error, Herbivorous, Omnivorous,
    Photosynthetic, Result, SpeciesId, Vitality, MAX_VITALITY,
};
