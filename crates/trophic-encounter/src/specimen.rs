//! Organisms whose diet is only known at run time.
//!
//! A [`Specimen`] carries its [`Diet`] as a value instead of a type tag. The
//! plant-plant restriction therefore moves from the type checker to
//! [`EncounterPair::new`], which refuses the pairing up front.

use crate::encounter::Resolver;
use crate::organism::{Lifeform, Organism};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};
use trophic_core::{saturating_feed, Diet, DietClass, Error, Result, Vitality};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Specimen<S> {
    species: S,
    vitality: Vitality,
    diet: Diet,
}

impl<S> Specimen<S> {
    pub fn new(species: S, vitality: Vitality, diet: Diet) -> Self {
        Self {
            species,
            vitality,
            diet,
        }
    }

    pub fn species(&self) -> &S {
        &self.species
    }

    pub fn vitality(&self) -> Vitality {
        self.vitality
    }

    pub fn diet(&self) -> Diet {
        self.diet
    }

    pub fn is_plant(&self) -> bool {
        self.diet.is_plant()
    }

    pub fn is_movable(&self) -> bool {
        self.diet.is_movable()
    }

    pub fn is_dead(&self) -> bool {
        self.vitality == 0
    }
}

impl<S: Clone> Specimen<S> {
    pub fn fed_with(&self, amount: Vitality) -> Self {
        Self::new(
            self.species.clone(),
            saturating_feed(self.vitality, amount),
            self.diet,
        )
    }

    pub fn dead(&self) -> Self {
        Self::new(self.species.clone(), 0, self.diet)
    }
}

impl<S: PartialEq + Clone> Specimen<S> {
    /// Checked series: fails before any step if a plant would face a plant
    pub fn encounter_series(self, opponents: &[Specimen<S>]) -> Result<Self> {
        Resolver::default().specimen_series(self, opponents)
    }
}

impl<S: PartialEq + Clone> Lifeform for Specimen<S> {
    type Species = S;

    fn species(&self) -> &S {
        &self.species
    }

    fn vitality(&self) -> Vitality {
        self.vitality
    }

    fn diet(&self) -> Diet {
        self.diet
    }

    fn fed_with(&self, amount: Vitality) -> Self {
        Specimen::fed_with(self, amount)
    }

    fn dead(&self) -> Self {
        Specimen::dead(self)
    }

    fn offspring(&self, vitality: Vitality) -> Self {
        Self::new(self.species.clone(), vitality, self.diet)
    }
}

impl<S, D: DietClass> From<Organism<S, D>> for Specimen<S> {
    fn from(organism: Organism<S, D>) -> Self {
        let vitality = organism.vitality();
        Self::new(organism.into_species(), vitality, D::DIET)
    }
}

impl<S, D: DietClass> TryFrom<Specimen<S>> for Organism<S, D> {
    type Error = Error;

    fn try_from(specimen: Specimen<S>) -> Result<Self> {
        if specimen.diet != D::DIET {
            return Err(Error::DietMismatch {
                expected: D::DIET,
                found: specimen.diet,
            });
        }
        Ok(Organism::new(specimen.species, specimen.vitality))
    }
}

fn check_movable(first: Diet, second: Diet) -> Result<()> {
    if first.is_movable() || second.is_movable() {
        Ok(())
    } else {
        Err(Error::ImmovablePair { first, second })
    }
}

/// Two specimens that are allowed to meet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterPair<S> {
    first: Specimen<S>,
    second: Specimen<S>,
}

impl<S> EncounterPair<S> {
    /// Refuses the pair when neither side can move
    pub fn new(first: Specimen<S>, second: Specimen<S>) -> Result<Self> {
        check_movable(first.diet, second.diet)?;
        Ok(Self { first, second })
    }
}

impl<S: PartialEq + Clone> EncounterPair<S> {
    /// Resolve under the default rules
    pub fn resolve(self) -> (Specimen<S>, Specimen<S>, Option<Specimen<S>>) {
        Resolver::default().encounter_pair(self)
    }
}

impl Resolver {
    pub fn encounter_pair<S: PartialEq + Clone>(
        &self,
        pair: EncounterPair<S>,
    ) -> (Specimen<S>, Specimen<S>, Option<Specimen<S>>) {
        self.resolve(pair.first, pair.second)
    }

    #[instrument(skip_all, fields(diet = %survivor.diet, opponents = opponents.len()))]
    pub fn specimen_series<S: PartialEq + Clone>(
        &self,
        survivor: Specimen<S>,
        opponents: &[Specimen<S>],
    ) -> Result<Specimen<S>> {
        for opponent in opponents {
            check_movable(survivor.diet, opponent.diet)?;
        }

        let mut steps = 0usize;
        let survivor = opponents.iter().fold(survivor, |survivor, opponent| {
            steps += 1;
            let (survivor, _, _) = self.resolve(survivor, opponent.clone());
            trace!(event = "series_step", step = steps, vitality = survivor.vitality, "Series step");
            survivor
        });

        trace!(event = "series_complete", steps, vitality = survivor.vitality, "Series complete");
        Ok(survivor)
    }
}
