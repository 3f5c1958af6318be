//! Solve status model.
//!
//! Classifies the outcome a solver reported for one instance. The
//! on-disk representation is an integer code; the mapping is a fixed
//! contract shared with the experiment runners.
//!
//! | Code | Status |
//! |------|--------|
//! | 0 | NoSolution |
//! | 1 | Optimal |
//! | 2 | Infeasible |
//! | 3 | Feasible |

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome reported by a solver for one instance.
///
/// Serialized as its integer code. Codes outside the table are rejected
/// at the deserialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SolveStatus {
    /// The solver terminated without finding any solution.
    NoSolution = 0,
    /// The solver found a solution and proved it optimal.
    Optimal = 1,
    /// The solver proved the instance has no feasible solution.
    Infeasible = 2,
    /// The solver found a solution without proving optimality.
    Feasible = 3,
}

/// An integer code outside the fixed status contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown solve status code: {0}")]
pub struct UnknownStatusCode(pub u8);

impl SolveStatus {
    /// Whether this status carries a usable solution (optimal or feasible).
    #[inline]
    pub fn has_solution(self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::Feasible)
    }
}

impl TryFrom<u8> for SolveStatus {
    type Error = UnknownStatusCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(SolveStatus::NoSolution),
            1 => Ok(SolveStatus::Optimal),
            2 => Ok(SolveStatus::Infeasible),
            3 => Ok(SolveStatus::Feasible),
            other => Err(UnknownStatusCode(other)),
        }
    }
}

impl From<SolveStatus> for u8 {
    fn from(status: SolveStatus) -> u8 {
        status as u8
    }
}
