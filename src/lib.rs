// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! keyshift: transpose notated music between keys with conventional
//! note spellings.

pub mod config;
pub mod logging;
pub mod music;
pub mod score;

pub use music::{Accidental, LetterName, Mode, Note, NoteOrdering, Scale, TheoryError};
pub use score::{transpose_score, Score};
