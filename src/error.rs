//! Error type definitions

use thiserror::Error;

/// Crate-wide error type.
///
/// Only hard import failures live here. Column mismatches are soft issues
/// and travel in [`crate::import::ImportReport`] instead; they never abort
/// an import.
#[derive(Error, Debug)]
pub enum Error {
    /// The upload produced zero rows. The caller keeps its previous
    /// catalog untouched.
    #[error("the uploaded file contains no rows")]
    EmptyFile,

    /// The decoding collaborator could not produce rows at all.
    #[error("could not decode the uploaded file: {0}")]
    Decode(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
