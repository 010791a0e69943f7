//! Chained encounters of one survivor against a line of opponents.

use crate::encounter::Resolver;
use crate::organism::Organism;
use tracing::{instrument, trace};
use trophic_core::{CanMeet, DietClass};

/// Something a survivor of diet `D` can be made to face
///
/// Object safe, so opponents of different diets can share one slice of
/// `&dyn Opponent<S, D>`. Only organisms whose diet can meet `D` implement
/// it, which rules out a plant facing another plant:
///
/// ```compile_fail
/// use trophic_encounter::{encounter_series, Plant};
///
/// let _ = encounter_series(Plant::new("moss", 3), [Plant::new("fern", 4)]);
/// ```
pub trait Opponent<S, D> {
    /// The survivor's state after meeting this opponent
    fn confront(&self, survivor: Organism<S, D>, resolver: &Resolver) -> Organism<S, D>;
}

impl<S, D1, D2> Opponent<S, D1> for Organism<S, D2>
where
    S: PartialEq + Clone,
    D1: CanMeet<D2>,
    D2: DietClass,
{
    fn confront(&self, survivor: Organism<S, D1>, resolver: &Resolver) -> Organism<S, D1> {
        let (survivor, _, _) = resolver.encounter(survivor, self.clone());
        survivor
    }
}

impl<S, D, T: Opponent<S, D> + ?Sized> Opponent<S, D> for &T {
    fn confront(&self, survivor: Organism<S, D>, resolver: &Resolver) -> Organism<S, D> {
        (**self).confront(survivor, resolver)
    }
}

impl<S, D, T: Opponent<S, D> + ?Sized> Opponent<S, D> for Box<T> {
    fn confront(&self, survivor: Organism<S, D>, resolver: &Resolver) -> Organism<S, D> {
        (**self).confront(survivor, resolver)
    }
}

impl Resolver {
    /// Left fold of [`Resolver::encounter`] over `opponents`, in order
    ///
    /// Only the survivor's side is carried forward. Opponents' fates and
    /// any offspring are discarded. No opponents returns `survivor` as is.
    #[instrument(skip_all, fields(diet = %D::DIET, start = survivor.vitality()))]
    pub fn encounter_series<S, D, I>(&self, survivor: Organism<S, D>, opponents: I) -> Organism<S, D>
    where
        D: DietClass,
        I: IntoIterator,
        I::Item: Opponent<S, D>,
    {
        let mut steps = 0usize;
        let survivor = opponents.into_iter().fold(survivor, |survivor, opponent| {
            steps += 1;
            let survivor = opponent.confront(survivor, self);
            trace!(event = "series_step", step = steps, vitality = survivor.vitality(), "Series step");
            survivor
        });

        trace!(event = "series_complete", steps, vitality = survivor.vitality(), "Series complete");
        survivor
    }
}

/// [`Resolver::encounter_series`] under the default rules
pub fn encounter_series<S, D, I>(survivor: Organism<S, D>, opponents: I) -> Organism<S, D>
where
    D: DietClass,
    I: IntoIterator,
    I::Item: Opponent<S, D>,
{
    Resolver::default().encounter_series(survivor, opponents)
}

/// Series over a mixed slice of opponents; the target of [`encounter_series!`]
pub fn encounter_sequence<S, D: DietClass>(
    survivor: Organism<S, D>,
    opponents: &[&dyn Opponent<S, D>],
) -> Organism<S, D> {
    encounter_series(survivor, opponents)
}

/// Run a series against opponents of any mix of diets
///
/// ```
/// use trophic_encounter::{encounter_series, Carnivore, Herbivore, Omnivore};
///
/// let wolf = Carnivore::new("wolf", 10);
/// let after = encounter_series!(wolf, Herbivore::new("hare", 4), Omnivore::new("boar", 20));
/// assert_eq!(after.vitality(), 0);
/// ```
#[macro_export]
macro_rules! encounter_series {
    ($survivor:expr $(, $opponent:expr)* $(,)?) => {
        $crate::encounter_sequence($survivor, &[$(&$opponent),*])
    };
}
