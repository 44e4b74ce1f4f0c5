use std::collections::BTreeMap;

use crate::{district::District, error::EvalError, partition::Partition, unit::Unit};

/// Group `units` by assigned district label and sum each district's area,
/// boundary length, crime count, and population.
///
/// The result is keyed by label in a `BTreeMap` so downstream scorers visit
/// districts in one fixed order and repeated evaluations of the same inputs
/// stay bit-identical.
///
/// Every unit must have an assignment: a missing entry is a caller error and
/// surfaces as `EvalError::InvalidPartition`, never a silent skip. Assignments
/// for unit ids not present in `units` are ignored.
pub fn aggregate(
    units: &[Unit],
    partition: &Partition,
) -> Result<BTreeMap<u32, District>, EvalError> {
    let mut districts: BTreeMap<u32, District> = BTreeMap::new();

    for unit in units {
        let label = partition
            .label_of(unit.id())
            .ok_or_else(|| EvalError::InvalidPartition(unit.id().clone()))?;

        districts
            .entry(label)
            .or_insert_with(|| District::empty(label))
            .absorb(unit);
    }

    Ok(districts)
}
