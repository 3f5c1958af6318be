//! Result file loading.
//!
//! Reads one JSON result record per file. Loading is strict: a missing
//! file, malformed JSON, or an unknown status code is a fatal error, and
//! no partial record is ever returned.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::SolverResult;

/// Loads a single result record from `path`.
///
/// The file handle is dropped as soon as parsing finishes, so scanning
/// large result trees does not accumulate open descriptors.
pub fn load_result(path: &Path) -> AnalysisResult<SolverResult> {
    let file = File::open(path).map_err(|source| AnalysisError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| AnalysisError::ParseResult {
        path: path.to_path_buf(),
        source,
    })
}
