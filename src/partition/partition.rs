use std::collections::BTreeSet;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::unit::{Unit, UnitId};

/// An assignment of units to district labels.
///
/// Labels are opaque `u32` values: they need not be contiguous, ordered, or
/// zero-based. The map is the only state, so a `Partition` is cheap to clone
/// and safe to share across concurrent evaluations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Partition {
    assignments: AHashMap<UnitId, u32>,
}

impl Partition {
    /// An empty partition with no assignments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a partition from explicit (unit, label) pairs.
    pub fn from_assignments(assignments: impl IntoIterator<Item = (UnitId, u32)>) -> Self {
        Self { assignments: assignments.into_iter().collect() }
    }

    /// Zip a chromosome-style label vector against a unit collection, in order.
    /// This is the shape an optimizer's individuals arrive in.
    pub fn from_labels(units: &[Unit], labels: &[u32]) -> Self {
        assert!(labels.len() == units.len(), "labels.len() must equal number of units");

        Self {
            assignments: units.iter()
                .map(|unit| unit.id().clone())
                .zip(labels.iter().copied())
                .collect(),
        }
    }

    /// Number of assigned units.
    #[inline] pub fn len(&self) -> usize { self.assignments.len() }

    /// Check if no units are assigned.
    #[inline] pub fn is_empty(&self) -> bool { self.assignments.is_empty() }

    /// District label assigned to `unit`, if any.
    #[inline]
    pub fn label_of(&self, unit: &UnitId) -> Option<u32> {
        self.assignments.get(unit).copied()
    }

    /// Assign (or reassign) a unit to a district.
    pub fn assign(&mut self, unit: UnitId, label: u32) {
        self.assignments.insert(unit, label);
    }

    /// Iterate over (unit, label) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&UnitId, u32)> + '_ {
        self.assignments.iter().map(|(id, &label)| (id, label))
    }

    /// The set of distinct labels in use, in ascending order.
    pub fn labels(&self) -> BTreeSet<u32> {
        self.assignments.values().copied().collect()
    }
}
