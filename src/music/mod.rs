// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory for transposition.
//!
//! This module provides spelled notes, the two note-ordering rings,
//! diatonic scale construction and scale-to-scale transposition.

pub mod error;
pub mod note;
pub mod ordering;
pub mod pitch;
pub mod scale;

pub use error::{Result, TheoryError};
pub use note::Note;
pub use ordering::{fifths_of, note_for_fifths, NoteOrdering, CHROMATIC_RING, DISPLAY_RING};
pub use pitch::{Accidental, LetterName, NOTES_IN_OCTAVE, NOTES_IN_SCALE};
pub use scale::{Formula, Mode, Scale};
