//! The encounter rule table.
//!
//! Rules are evaluated in a fixed order and the first match wins:
//!
//! 1. either side dead: no effect
//! 2. same species and same diet: mating, both parents unchanged
//! 3. one side is a plant: a plant eater consumes it whole, otherwise no effect
//! 4. two meat eaters: the stronger eats half of the weaker, a tie kills both
//! 5. one meat eater: it eats half of the other only when strictly stronger
//! 6. no meat eaters: no effect

use crate::organism::Lifeform;
use std::cmp::Ordering;
use trophic_core::{energy_transfer, offspring_vitality, Diet, EncounterRules, Vitality};

/// The facts about one side that the rules look at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contender {
    pub diet: Diet,
    pub vitality: Vitality,
}

impl Contender {
    pub fn new(diet: Diet, vitality: Vitality) -> Self {
        Self { diet, vitality }
    }

    pub fn of<L: Lifeform>(lifeform: &L) -> Self {
        Self::new(lifeform.diet(), lifeform.vitality())
    }

    pub fn is_dead(&self) -> bool {
        self.vitality == 0
    }
}

/// Result of applying the rule table to one pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NoEffect,
    Mating { offspring: Vitality },
    FirstEatsSecond { gain: Vitality },
    SecondEatsFirst { gain: Vitality },
    BothDie,
}

impl Outcome {
    pub fn name(&self) -> &'static str {
        match self {
            Outcome::NoEffect => "no_effect",
            Outcome::Mating { .. } => "mating",
            Outcome::FirstEatsSecond { .. } => "first_eats_second",
            Outcome::SecondEatsFirst { .. } => "second_eats_first",
            Outcome::BothDie => "both_die",
        }
    }

    /// Build the post-encounter values; the inputs are consumed
    pub fn apply<A, B>(self, first: A, second: B) -> (A, B, Option<A>)
    where
        A: Lifeform,
        B: Lifeform,
    {
        match self {
            Outcome::NoEffect => (first, second, None),
            Outcome::Mating { offspring } => {
                let child = first.offspring(offspring);
                (first, second, Some(child))
            }
            Outcome::FirstEatsSecond { gain } => (first.fed_with(gain), second.dead(), None),
            Outcome::SecondEatsFirst { gain } => (first.dead(), second.fed_with(gain), None),
            Outcome::BothDie => (first.dead(), second.dead(), None),
        }
    }
}

/// Decide the outcome of `first` meeting `second`
///
/// Total over all inputs. Two plants are never handed in by the public
/// entry points; if they were, they would mate or be left alone.
pub fn decide(
    first: Contender,
    second: Contender,
    same_species: bool,
    rules: &EncounterRules,
) -> Outcome {
    if first.is_dead() || second.is_dead() {
        return Outcome::NoEffect;
    }

    if same_species && first.diet.same_food_preferences(second.diet) {
        return Outcome::Mating {
            offspring: offspring_vitality(first.vitality, second.vitality),
        };
    }

    if first.diet.is_plant() || second.diet.is_plant() {
        return if first.diet.eats_plants() {
            Outcome::FirstEatsSecond {
                gain: energy_transfer(second.vitality, rules.plant_energy_loss),
            }
        } else if second.diet.eats_plants() {
            Outcome::SecondEatsFirst {
                gain: energy_transfer(first.vitality, rules.plant_energy_loss),
            }
        } else {
            Outcome::NoEffect
        };
    }

    // Both sides are animals from here on
    let first_eats_second = Outcome::FirstEatsSecond {
        gain: energy_transfer(second.vitality, rules.animal_energy_loss),
    };
    let second_eats_first = Outcome::SecondEatsFirst {
        gain: energy_transfer(first.vitality, rules.animal_energy_loss),
    };

    match (first.diet.eats_meat(), second.diet.eats_meat()) {
        (true, true) => match first.vitality.cmp(&second.vitality) {
            Ordering::Greater => first_eats_second,
            Ordering::Less => second_eats_first,
            Ordering::Equal => Outcome::BothDie,
        },
        (true, false) if first.vitality > second.vitality => first_eats_second,
        (false, true) if second.vitality > first.vitality => second_eats_first,
        _ => Outcome::NoEffect,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::num::NonZeroU64;
    use trophic_core::MAX_VITALITY;

    fn carnivore(vitality: Vitality) -> Contender {
        Contender::new(Diet::Carnivore, vitality)
    }

    fn omnivore(vitality: Vitality) -> Contender {
        Contender::new(Diet::Omnivore, vitality)
    }

    fn herbivore(vitality: Vitality) -> Contender {
        Contender::new(Diet::Herbivore, vitality)
    }

    fn plant(vitality: Vitality) -> Contender {
        Contender::new(Diet::Plant, vitality)
    }

    fn canonical(first: Contender, second: Contender, same_species: bool) -> Outcome {
        decide(first, second, same_species, &EncounterRules::default())
    }

    #[test]
    fn test_dead_side_has_no_effect() {
        assert_eq!(canonical(carnivore(0), herbivore(5), false), Outcome::NoEffect);
        assert_eq!(canonical(carnivore(9), herbivore(0), false), Outcome::NoEffect);
        // Death takes priority over mating
        assert_eq!(canonical(carnivore(0), carnivore(5), true), Outcome::NoEffect);
    }

    #[test]
    fn test_mating_requires_species_and_diet() {
        assert_eq!(
            canonical(carnivore(10), carnivore(10), true),
            Outcome::Mating { offspring: 10 }
        );
        assert_eq!(
            canonical(herbivore(3), herbivore(4), true),
            Outcome::Mating { offspring: 3 }
        );
        // Same species, different diet: falls through to predation
        assert_eq!(
            canonical(carnivore(10), herbivore(4), true),
            Outcome::FirstEatsSecond { gain: 2 }
        );
    }

    #[test]
    fn test_plant_is_eaten_whole() {
        assert_eq!(
            canonical(herbivore(3), plant(7), false),
            Outcome::FirstEatsSecond { gain: 7 }
        );
        assert_eq!(
            canonical(plant(7), omnivore(3), false),
            Outcome::SecondEatsFirst { gain: 7 }
        );
    }

    #[test]
    fn test_plant_ignored_by_pure_carnivore() {
        assert_eq!(canonical(carnivore(10), plant(5), false), Outcome::NoEffect);
        assert_eq!(canonical(plant(5), carnivore(10), false), Outcome::NoEffect);
    }

    #[test]
    fn test_meat_eaters_fight() {
        assert_eq!(
            canonical(carnivore(10), omnivore(5), false),
            Outcome::FirstEatsSecond { gain: 2 }
        );
        assert_eq!(
            canonical(omnivore(3), carnivore(8), false),
            Outcome::SecondEatsFirst { gain: 1 }
        );
        assert_eq!(canonical(carnivore(5), carnivore(5), false), Outcome::BothDie);
    }

    #[test]
    fn test_single_meat_eater_needs_advantage() {
        assert_eq!(
            canonical(carnivore(10), herbivore(4), false),
            Outcome::FirstEatsSecond { gain: 2 }
        );
        assert_eq!(canonical(carnivore(4), herbivore(4), false), Outcome::NoEffect);
        assert_eq!(canonical(carnivore(3), herbivore(4), false), Outcome::NoEffect);
        assert_eq!(
            canonical(herbivore(4), omnivore(9), false),
            Outcome::SecondEatsFirst { gain: 2 }
        );
        assert_eq!(canonical(herbivore(9), omnivore(9), false), Outcome::NoEffect);
    }

    #[test]
    fn test_herbivores_ignore_each_other() {
        assert_eq!(canonical(herbivore(10), herbivore(1), false), Outcome::NoEffect);
    }

    #[test]
    fn test_custom_divisors() {
        let rules = EncounterRules {
            plant_energy_loss: NonZeroU64::new(2).unwrap(),
            animal_energy_loss: NonZeroU64::new(4).unwrap(),
        };
        assert_eq!(
            decide(herbivore(1), plant(9), false, &rules),
            Outcome::FirstEatsSecond { gain: 4 }
        );
        assert_eq!(
            decide(carnivore(20), herbivore(9), false, &rules),
            Outcome::FirstEatsSecond { gain: 2 }
        );
    }

    #[test]
    fn test_mating_with_huge_parents() {
        assert_eq!(
            canonical(omnivore(MAX_VITALITY), omnivore(MAX_VITALITY - 1), true),
            Outcome::Mating {
                offspring: MAX_VITALITY - 1
            }
        );
    }

    fn any_diet() -> impl Strategy<Value = Diet> {
        prop_oneof![
            Just(Diet::Carnivore),
            Just(Diet::Omnivore),
            Just(Diet::Herbivore),
            Just(Diet::Plant),
        ]
    }

    fn any_divisor() -> impl Strategy<Value = NonZeroU64> {
        (1..=u64::MAX).prop_map(|d| NonZeroU64::new(d).unwrap())
    }

    proptest! {
        #[test]
        fn proptest_decide_is_total_under_any_rules(
            first_diet in any_diet(),
            second_diet in any_diet(),
            v1 in any::<Vitality>(),
            v2 in any::<Vitality>(),
            same_species in any::<bool>(),
            plant_energy_loss in any_divisor(),
            animal_energy_loss in any_divisor(),
        ) {
            let rules = EncounterRules { plant_energy_loss, animal_energy_loss };
            let outcome = decide(
                Contender::new(first_diet, v1),
                Contender::new(second_diet, v2),
                same_species,
                &rules,
            );
            match outcome {
                Outcome::FirstEatsSecond { gain } => prop_assert!(gain <= v2),
                Outcome::SecondEatsFirst { gain } => prop_assert!(gain <= v1),
                _ => {}
            }
        }

        #[test]
        fn proptest_dead_means_no_effect(
            first_diet in any_diet(),
            second_diet in any_diet(),
            vitality in any::<Vitality>(),
            same_species in any::<bool>(),
            first_dead in any::<bool>(),
        ) {
            let (first, second) = if first_dead {
                (Contender::new(first_diet, 0), Contender::new(second_diet, vitality))
            } else {
                (Contender::new(first_diet, vitality), Contender::new(second_diet, 0))
            };
            prop_assert_eq!(canonical(first, second, same_species), Outcome::NoEffect);
        }

        #[test]
        fn proptest_carnivore_fight(v1 in 1..=MAX_VITALITY, v2 in 1..=MAX_VITALITY) {
            let outcome = canonical(carnivore(v1), carnivore(v2), false);
            let expected = match v1.cmp(&v2) {
                Ordering::Greater => Outcome::FirstEatsSecond { gain: v2 / 2 },
                Ordering::Less => Outcome::SecondEatsFirst { gain: v1 / 2 },
                Ordering::Equal => Outcome::BothDie,
            };
            prop_assert_eq!(outcome, expected);
        }

        #[test]
        fn proptest_weaker_carnivore_leaves_prey_alone(
            (v2, v1) in (1..=MAX_VITALITY).prop_flat_map(|v2| (Just(v2), 1..=v2)),
        ) {
            prop_assert_eq!(canonical(carnivore(v1), herbivore(v2), false), Outcome::NoEffect);
        }
    }
}
