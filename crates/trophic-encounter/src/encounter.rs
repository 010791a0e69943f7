//! Encounter resolution between two organisms.

use crate::organism::{Lifeform, Organism};
use crate::rules::{decide, Contender, Outcome};
use tracing::{debug, trace};
use trophic_core::{CanMeet, DietClass, EncounterRules};

/// Resolves encounters under a fixed set of [`EncounterRules`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolver {
    rules: EncounterRules,
}

impl Resolver {
    pub fn new(rules: EncounterRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &EncounterRules {
        &self.rules
    }

    /// Resolve one meeting of two typed organisms
    ///
    /// `D1: CanMeet<D2>` keeps two plants from ever reaching the rule table:
    ///
    /// ```compile_fail
    /// use trophic_encounter::{encounter, Plant};
    ///
    /// let moss = Plant::new("moss", 3);
    /// let fern = Plant::new("fern", 4);
    /// let _ = encounter(moss, fern);
    /// ```
    pub fn encounter<S, D1, D2>(
        &self,
        first: Organism<S, D1>,
        second: Organism<S, D2>,
    ) -> (Organism<S, D1>, Organism<S, D2>, Option<Organism<S, D1>>)
    where
        S: PartialEq + Clone,
        D1: CanMeet<D2>,
        D2: DietClass,
    {
        self.resolve(first, second)
    }

    /// Run the rule table on anything that implements [`Lifeform`]
    ///
    /// Callers are responsible for keeping plant-plant pairs out.
    pub(crate) fn resolve<A, B>(&self, first: A, second: B) -> (A, B, Option<A>)
    where
        A: Lifeform,
        B: Lifeform<Species = A::Species>,
    {
        let a = Contender::of(&first);
        let b = Contender::of(&second);
        let same_species = first.species() == second.species();
        let outcome = decide(a, b, same_species, &self.rules);

        trace!(
            event = "encounter",
            first_diet = %a.diet,
            first_vitality = a.vitality,
            second_diet = %b.diet,
            second_vitality = b.vitality,
            same_species,
            outcome = outcome.name(),
            "Encounter resolved"
        );

        match outcome {
            Outcome::NoEffect => {}
            Outcome::Mating { offspring } => {
                debug!(
                    event = "mating",
                    diet = %a.diet,
                    offspring_vitality = offspring,
                    "Offspring born"
                );
            }
            Outcome::FirstEatsSecond { gain } => {
                debug!(event = "predation", predator = %a.diet, prey = %b.diet, gain, "First ate second");
            }
            Outcome::SecondEatsFirst { gain } => {
                debug!(event = "predation", predator = %b.diet, prey = %a.diet, gain, "Second ate first");
            }
            Outcome::BothDie => {
                debug!(event = "mutual_kill", vitality = a.vitality, "Both organisms died");
            }
        }

        outcome.apply(first, second)
    }
}

/// Resolve one meeting under the default rules
pub fn encounter<S, D1, D2>(
    first: Organism<S, D1>,
    second: Organism<S, D2>,
) -> (Organism<S, D1>, Organism<S, D2>, Option<Organism<S, D1>>)
where
    S: PartialEq + Clone,
    D1: CanMeet<D2>,
    D2: DietClass,
{
    Resolver::default().encounter(first, second)
}
