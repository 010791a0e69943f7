//! Organism values.
//!
//! An organism never changes after construction. Feeding, dying and every
//! encounter hand back a new value with the same species and diet.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use trophic_core::{
    saturating_feed, Carnivorous, Diet, DietClass, Herbivorous, Omnivorous, Photosynthetic,
    Vitality,
};

pub type Carnivore<S> = Organism<S, Carnivorous>;
pub type Omnivore<S> = Organism<S, Omnivorous>;
pub type Herbivore<S> = Organism<S, Herbivorous>;
pub type Plant<S> = Organism<S, Photosynthetic>;

/// An organism whose diet is fixed by the type tag `D`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound(serialize = "S: Serialize", deserialize = "S: Deserialize<'de>"))]
pub struct Organism<S, D> {
    species: S,
    vitality: Vitality,
    #[serde(skip)]
    diet: PhantomData<D>,
}

impl<S, D: DietClass> Organism<S, D> {
    pub fn new(species: S, vitality: Vitality) -> Self {
        Self {
            species,
            vitality,
            diet: PhantomData,
        }
    }

    pub fn species(&self) -> &S {
        &self.species
    }

    pub fn vitality(&self) -> Vitality {
        self.vitality
    }

    pub fn diet(&self) -> Diet {
        D::DIET
    }

    pub fn is_plant(&self) -> bool {
        D::DIET.is_plant()
    }

    pub fn is_movable(&self) -> bool {
        D::DIET.is_movable()
    }

    pub fn is_dead(&self) -> bool {
        self.vitality == 0
    }

    pub fn into_species(self) -> S {
        self.species
    }
}

impl<S: Clone, D: DietClass> Organism<S, D> {
    /// Same organism after eating `amount`; saturates at `MAX_VITALITY`
    pub fn fed_with(&self, amount: Vitality) -> Self {
        Self::new(self.species.clone(), saturating_feed(self.vitality, amount))
    }

    pub fn dead(&self) -> Self {
        Self::new(self.species.clone(), 0)
    }
}

/// Anything the encounter rules can act on
///
/// Implemented by typed [`Organism`]s and by runtime-tagged
/// [`Specimen`](crate::Specimen)s so both share one rule table.
pub trait Lifeform: Sized {
    type Species: PartialEq;

    fn species(&self) -> &Self::Species;
    fn vitality(&self) -> Vitality;
    fn diet(&self) -> Diet;
    fn fed_with(&self, amount: Vitality) -> Self;
    fn dead(&self) -> Self;
    /// A newborn of the same species and diet
    fn offspring(&self, vitality: Vitality) -> Self;
}

impl<S: PartialEq + Clone, D: DietClass> Lifeform for Organism<S, D> {
    type Species = S;

    fn species(&self) -> &S {
        &self.species
    }

    fn vitality(&self) -> Vitality {
        self.vitality
    }

    fn diet(&self) -> Diet {
        D::DIET
    }

    fn fed_with(&self, amount: Vitality) -> Self {
        Organism::fed_with(self, amount)
    }

    fn dead(&self) -> Self {
        Organism::dead(self)
    }

    fn offspring(&self, vitality: Vitality) -> Self {
        Self::new(self.species.clone(), vitality)
    }
}
