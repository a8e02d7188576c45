// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the theory model.

use thiserror::Error;

use super::scale::Mode;

/// Failures raised by note and scale operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Mode name not recognised
    #[error("Invalid mode: {0:?}")]
    InvalidMode(String),

    /// Transposition between scales of different modes is undefined
    #[error("Cannot transpose between {from} and {to} scales")]
    IncompatibleModes { from: Mode, to: Mode },

    /// Accidental text outside flat/natural/sharp/double-sharp
    #[error("Malformed accidental: {0:?}")]
    MalformedAccidental(String),

    /// Note text that is not a letter followed by an accidental
    #[error("Malformed note: {0:?}")]
    MalformedNote(String),
}

/// Result alias for theory operations
pub type Result<T> = std::result::Result<T, TheoryError>;
