//! Error types for SteamID parsing and rendering.

use thiserror::Error;

/// Errors that can occur when parsing or rendering SteamIDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SteamIdError {
    /// The input matched none of the known SteamID encodings
    /// (decimal 64-bit, Steam2, Steam3).
    #[error("unknown SteamID input format '{0}'")]
    UnknownFormat(String),

    /// Steam2 rendering was requested for a SteamID whose type is not
    /// individual. Only individual accounts have a Steam2 form.
    #[error("cannot render a non-individual SteamID in Steam2 format")]
    NotIndividual,
}

impl SteamIdError {
    /// Returns true if this error indicates malformed parser input.
    pub fn is_format_error(&self) -> bool {
        matches!(self, SteamIdError::UnknownFormat(_))
    }
}
