use thiserror::Error;

use crate::unit::UnitId;

/// Contract violations surfaced by the evaluator.
///
/// All of these indicate a malformed dataset or partition on the caller's
/// side. None are retried or recovered: a failed call produces no scores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A unit appears in the input collection with no district assignment.
    #[error("unit '{0}' has no district assignment")]
    InvalidPartition(UnitId),

    /// A district aggregated to zero boundary length (empty or degenerate geometry).
    #[error("district {0} has zero boundary length")]
    DegenerateGeometry(u32),

    /// There are no districts to score.
    #[error("partition contains no districts")]
    EmptyPartition,
}
