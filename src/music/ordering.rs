// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Fixed note orderings used as lookup rings.
//!
//! The chromatic ring drives all distance arithmetic. The display ring lists
//! the flat spelling of each black key next to its sharp one; a note's
//! position there is the key-signature fifths value written to documents.

use super::note::{
    Note, A, A_FLAT, A_SHARP, B, B_FLAT, C, C_SHARP, D, D_FLAT, D_SHARP, E, E_FLAT, F, F_SHARP, G,
    G_FLAT, G_SHARP,
};

/// One note per semitone, naturals and sharps only, starting from A
pub const CHROMATIC_RING: [Note; 12] = [A, A_SHARP, B, C, C_SHARP, D, D_SHARP, E, F, F_SHARP, G, G_SHARP];

/// Every black key spelled sharp then flat, starting from C
pub const DISPLAY_RING: [Note; 17] = [
    C, C_SHARP, D_FLAT, D, D_SHARP, E_FLAT, E, F, F_SHARP, G_FLAT, G, G_SHARP, A_FLAT, A, A_SHARP,
    B_FLAT, B,
];

/// Selects one of the two rings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteOrdering {
    Chromatic,
    Display,
}

impl NoteOrdering {
    /// The ring's notes in order
    pub fn notes(self) -> &'static [Note] {
        match self {
            NoteOrdering::Chromatic => &CHROMATIC_RING,
            NoteOrdering::Display => &DISPLAY_RING,
        }
    }

    pub fn len(self) -> usize {
        self.notes().len()
    }

    pub fn is_empty(self) -> bool {
        self.notes().is_empty()
    }

    /// Index of the first entry equal to `note`
    pub fn position(self, note: &Note) -> usize {
        match self.notes().iter().position(|n| n == note) {
            Some(index) => index,
            // Both rings name all twelve pitch classes
            None => unreachable!("{:?} ring has no entry for {}", self, note),
        }
    }

    /// Entry at `index`, wrapping in both directions
    pub fn note_at(self, index: i32) -> Note {
        let notes = self.notes();
        notes[index.rem_euclid(notes.len() as i32) as usize]
    }
}

/// Key-signature fifths value for a tonic: its display-ring position
pub fn fifths_of(note: &Note) -> i32 {
    NoteOrdering::Display.position(note) as i32
}

/// Tonic for a key-signature fifths value; any integer wraps onto the ring
pub fn note_for_fifths(fifths: i32) -> Note {
    NoteOrdering::Display.note_at(fifths)
}
