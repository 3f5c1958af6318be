//! Result record models.
//!
//! Core data types for one experiment outcome: the closed solve-status
//! enumeration and the per-instance result record. Both mirror the JSON
//! wire format produced by the solver runners, so a loaded record can be
//! re-serialized without loss.

mod result;
mod status;

pub use result::SolverResult;
pub use status::{SolveStatus, UnknownStatusCode};
