//! Recoverable generation-attempt failures.

use derive_more::{Display, Error};

/// Failure of a single generation attempt.
///
/// Every variant is recovered by the assembler's retry policy — the next
/// attempt runs with a freshly offset structure seed — and after the attempt
/// budget is exhausted the fallback puzzle is substituted. No attempt
/// failure ever reaches a caller of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum AttemptError {
    /// A structure search hit its step budget before completing.
    #[display("structure search exhausted its step budget")]
    SearchExhausted,
    /// Clue selection ran out of candidates or insertion attempts before
    /// reaching a unique solution.
    #[display("clue selection did not reach a unique solution")]
    UniquenessNotReached,
    /// Topology branch growth missed its coverage target within budget.
    #[display("topology growth missed its coverage target")]
    CoverageNotReached,
    /// The flow fill left unassigned cells within its pass budget.
    #[display("flow fill left unassigned cells")]
    FillIncomplete,
}
