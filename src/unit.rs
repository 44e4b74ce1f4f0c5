use std::{fmt, sync::Arc};

use geo::{Area, EuclideanLength, MultiPolygon};
use serde::{Deserialize, Serialize};

/// Stable key for a single unit (neighborhood, tract, precinct, etc.).
/// Keep the original id text but avoid repeated owned Strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(Arc<str>);

impl UnitId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    #[inline] pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for UnitId {
    fn from(id: &str) -> Self { Self::new(id) }
}

impl From<String> for UnitId {
    fn from(id: String) -> Self { Self::new(id) }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single geographic building block: polygon geometry plus the counts used
/// for balance scoring. Units are read-only inputs to the evaluator; fields
/// are private so nothing downstream can mutate them.
#[derive(Debug, Clone)]
pub struct Unit {
    id: UnitId,
    geometry: MultiPolygon<f64>,
    crimes: u64,
    population: u64,
}

impl Unit {
    pub fn new(id: impl Into<UnitId>, geometry: MultiPolygon<f64>, crimes: u64, population: u64) -> Self {
        Self { id: id.into(), geometry, crimes, population }
    }

    #[inline] pub fn id(&self) -> &UnitId { &self.id }

    #[inline] pub fn geometry(&self) -> &MultiPolygon<f64> { &self.geometry }

    #[inline] pub fn crimes(&self) -> u64 { self.crimes }

    #[inline] pub fn population(&self) -> u64 { self.population }

    /// Area of the unit's geometry, in the square of the coordinate unit.
    pub fn area(&self) -> f64 {
        self.geometry.unsigned_area()
    }

    /// Total boundary length of the unit's geometry, hole rings included.
    pub fn boundary_length(&self) -> f64 {
        self.geometry.0.iter()
            .map(|polygon| {
                polygon.exterior().euclidean_length()
                    + polygon.interiors().iter()
                        .map(|ring| ring.euclidean_length())
                        .sum::<f64>()
            })
            .sum()
    }
}
