use std::fmt;

use serde::Serialize;

use crate::{
    error::EvalError,
    eval::{aggregate, score_balance, score_compactness},
    partition::Partition,
    unit::Unit,
};

/// The three independent fitness criteria for one candidate partition.
///
/// No combined fitness is computed here; weighing the criteria against each
/// other is the calling optimizer's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    /// Minimum Polsby-Popper ratio across districts (higher is better).
    pub compactness: f64,
    /// Crime-count imbalance ratio in [0, 1] (lower is better).
    pub crime_balance: f64,
    /// Population imbalance ratio in [0, 1] (lower is better).
    pub population_balance: f64,
}

impl Evaluation {
    /// The scores as an ordered triple, for optimizers that carry tuple fitness.
    #[inline]
    pub fn into_tuple(self) -> (f64, f64, f64) {
        (self.compactness, self.crime_balance, self.population_balance)
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "compactness: {:.6}, crime balance: {:.6}, population balance: {:.6}",
            self.compactness, self.crime_balance, self.population_balance,
        )
    }
}

/// Score a candidate partition on compactness, crime balance, and population
/// balance. Aggregation runs once; both balance criteria reuse its output.
///
/// Pure: no cross-call state, identical inputs produce bit-identical results,
/// and neither `units` nor `partition` is mutated. Safe to call from many
/// threads at once, which is how an optimizer evaluates a population.
pub fn evaluate(units: &[Unit], partition: &Partition) -> Result<Evaluation, EvalError> {
    let districts = aggregate(units, partition)?;

    let compactness = score_compactness(districts.values())?;

    let crimes = districts.values().map(|d| d.crimes() as f64).collect::<Vec<_>>();
    let population = districts.values().map(|d| d.population() as f64).collect::<Vec<_>>();

    Ok(Evaluation {
        compactness,
        crime_balance: score_balance(&crimes),
        population_balance: score_balance(&population),
    })
}
