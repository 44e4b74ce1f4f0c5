use crate::{district::District, error::EvalError};

/// Compactness score for a whole partition: the minimum Polsby-Popper ratio
/// across its districts. A partition is only as compact as its worst district.
///
/// Errors with `EvalError::EmptyPartition` when there are no districts, and
/// propagates `EvalError::DegenerateGeometry` from any zero-boundary district.
pub fn score_compactness<'a>(
    districts: impl IntoIterator<Item = &'a District>,
) -> Result<f64, EvalError> {
    let mut worst: Option<f64> = None;

    for district in districts {
        let compactness = district.compactness()?;
        worst = Some(match worst {
            Some(current) => current.min(compactness),
            None => compactness,
        });
    }

    worst.ok_or(EvalError::EmptyPartition)
}
