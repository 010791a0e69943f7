//! Dietary capability classes.
//!
//! Every organism belongs to exactly one [`Diet`] for its whole lifetime.
//! The diet decides whether the organism can move, what it may eat and
//! which encounter rules apply to it.
//!
//! The same classes exist as zero-sized type tags ([`Carnivorous`],
//! [`Omnivorous`], [`Herbivorous`], [`Photosynthetic`]) so that typed
//! organisms carry their class in the type. [`CanMeet`] is implemented for
//! every ordered pair of tags except two plants, which lets generic
//! encounter code refuse a plant-plant meeting at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dietary capability class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diet {
    /// Eats meat only
    Carnivore,
    /// Eats meat and plants
    Omnivore,
    /// Eats plants only
    Herbivore,
    /// Eats neither, never moves
    Plant,
}

impl Diet {
    pub const fn eats_meat(self) -> bool {
        matches!(self, Diet::Carnivore | Diet::Omnivore)
    }

    pub const fn eats_plants(self) -> bool {
        matches!(self, Diet::Omnivore | Diet::Herbivore)
    }

    /// Anything that eats something can move
    pub const fn is_movable(self) -> bool {
        self.eats_meat() || self.eats_plants()
    }

    pub const fn is_plant(self) -> bool {
        !self.eats_meat() && !self.eats_plants()
    }

    /// True iff both capability flags match, i.e. the classes are identical
    pub const fn same_food_preferences(self, other: Diet) -> bool {
        self.eats_meat() == other.eats_meat() && self.eats_plants() == other.eats_plants()
    }

    pub fn all() -> [Diet; 4] {
        [Diet::Carnivore, Diet::Omnivore, Diet::Herbivore, Diet::Plant]
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Diet::Carnivore => "carnivore",
            Diet::Omnivore => "omnivore",
            Diet::Herbivore => "herbivore",
            Diet::Plant => "plant",
        };
        f.write_str(name)
    }
}

pub const fn is_movable(diet: Diet) -> bool {
    diet.is_movable()
}

pub const fn same_food_preferences(first: Diet, second: Diet) -> bool {
    first.same_food_preferences(second)
}

mod sealed {
    pub trait Sealed {}
}

/// Compile-time capability class tag
pub trait DietClass: sealed::Sealed + Copy + fmt::Debug + PartialEq + Eq + Default + 'static {
    const DIET: Diet;
}

/// Type tag for [`Diet::Carnivore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Carnivorous;

/// Type tag for [`Diet::Omnivore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Omnivorous;

/// Type tag for [`Diet::Herbivore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Herbivorous;

/// Type tag for [`Diet::Plant`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Photosynthetic;

macro_rules! diet_class {
    ($($tag:ty => $diet:expr),* $(,)?) => {
        $(
            impl sealed::Sealed for $tag {}

            impl DietClass for $tag {
                const DIET: Diet = $diet;
            }
        )*
    };
}

diet_class! {
    Carnivorous => Diet::Carnivore,
    Omnivorous => Diet::Omnivore,
    Herbivorous => Diet::Herbivore,
    Photosynthetic => Diet::Plant,
}

/// Marks that an organism tagged `Self` may encounter one tagged `Other`
///
/// Implemented for all ordered pairs where at least one side is movable.
/// `Photosynthetic: CanMeet<Photosynthetic>` does not exist.
pub trait CanMeet<Other: DietClass>: DietClass {}

macro_rules! can_meet {
    ($($first:ty => [$($second:ty),*]);* $(;)?) => {
        $($(impl CanMeet<$second> for $first {})*)*
    };
}

can_meet! {
    Carnivorous => [Carnivorous, Omnivorous, Herbivorous, Photosynthetic];
    Omnivorous => [Carnivorous, Omnivorous, Herbivorous, Photosynthetic];
    Herbivorous => [Carnivorous, Omnivorous, Herbivorous, Photosynthetic];
    Photosynthetic => [Carnivorous, Omnivorous, Herbivorous];
}
