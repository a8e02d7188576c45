// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Spelled notes.
//!
//! A [`Note`] is a letter name plus an accidental. Two notes that sound the
//! same (D-flat and C-sharp, F-double-sharp and G) compare and hash equal,
//! so any spelling can key a map or be looked up in an ordering ring.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::TheoryError;
use super::ordering::NoteOrdering;
use super::pitch::{Accidental, LetterName, NOTES_IN_OCTAVE};

/// A note spelled as letter + accidental
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Note {
    letter: LetterName,
    accidental: Accidental,
}

pub const C: Note = Note::natural(LetterName::C);
pub const C_SHARP: Note = Note::new(LetterName::C, Accidental::Sharp);
pub const D: Note = Note::natural(LetterName::D);
pub const D_SHARP: Note = Note::new(LetterName::D, Accidental::Sharp);
pub const E: Note = Note::natural(LetterName::E);
pub const F: Note = Note::natural(LetterName::F);
pub const F_SHARP: Note = Note::new(LetterName::F, Accidental::Sharp);
pub const G: Note = Note::natural(LetterName::G);
pub const G_SHARP: Note = Note::new(LetterName::G, Accidental::Sharp);
pub const A: Note = Note::natural(LetterName::A);
pub const A_SHARP: Note = Note::new(LetterName::A, Accidental::Sharp);
pub const B: Note = Note::natural(LetterName::B);

pub const D_FLAT: Note = Note::new(LetterName::D, Accidental::Flat);
pub const E_FLAT: Note = Note::new(LetterName::E, Accidental::Flat);
pub const G_FLAT: Note = Note::new(LetterName::G, Accidental::Flat);
pub const A_FLAT: Note = Note::new(LetterName::A, Accidental::Flat);
pub const B_FLAT: Note = Note::new(LetterName::B, Accidental::Flat);

pub const E_SHARP: Note = Note::new(LetterName::E, Accidental::Sharp);
pub const B_SHARP: Note = Note::new(LetterName::B, Accidental::Sharp);
pub const C_DOUBLE_SHARP: Note = Note::new(LetterName::C, Accidental::DoubleSharp);
pub const F_DOUBLE_SHARP: Note = Note::new(LetterName::F, Accidental::DoubleSharp);

impl Note {
    pub const fn new(letter: LetterName, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    pub const fn natural(letter: LetterName) -> Self {
        Self::new(letter, Accidental::Natural)
    }

    /// Get the letter name as written
    pub fn letter(&self) -> LetterName {
        self.letter
    }

    /// Get the accidental as written
    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    /// Letter name following this note's letter (G wraps to A)
    pub fn next_letter(&self) -> LetterName {
        self.letter.next()
    }

    /// Pitch class (0 = C ... 11 = B)
    pub fn pitch_class(&self) -> u8 {
        let semitones = self.letter.natural_pitch_class() as i8 + self.accidental.semitones();
        semitones.rem_euclid(NOTES_IN_OCTAVE as i8) as u8
    }

    /// The spelling this note has on a keyboard: a natural, or a sharp on a
    /// letter that has a black key above it.
    ///
    /// F## becomes G, Db becomes C#, E# becomes F and B# becomes C. Cb and Fb
    /// sit a half step above the previous letter and resolve to B and E.
    pub fn root(&self) -> Note {
        let letter = self.letter;
        match self.accidental {
            Accidental::Natural => *self,
            Accidental::Flat => {
                let previous = letter.previous();
                if previous.has_half_step_above() {
                    Note::natural(previous)
                } else {
                    Note::new(previous, Accidental::Sharp)
                }
            }
            Accidental::Sharp => {
                if letter.has_half_step_above() {
                    Note::natural(letter.next())
                } else {
                    *self
                }
            }
            Accidental::DoubleSharp => {
                // Bx and Ex land a whole step up, on a black key
                if letter.has_half_step_above() {
                    Note::new(letter.next(), Accidental::Sharp)
                } else {
                    Note::natural(letter.next())
                }
            }
        }
    }

    /// Note `n` semitones above this one on the chromatic ring
    pub fn note_n_steps_away(&self, n: i32) -> Note {
        self.note_n_steps_away_in(n, NoteOrdering::Chromatic)
    }

    /// Note `n` positions further along the given ring
    pub fn note_n_steps_away_in(&self, n: i32, ordering: NoteOrdering) -> Note {
        let index = ordering.position(self) as i32 + n;
        ordering.note_at(index)
    }

    /// Ascending chromatic distance from this note up to `other` (0-11)
    pub fn steps_from(&self, other: &Note) -> usize {
        self.steps_from_in(other, NoteOrdering::Chromatic)
    }

    /// Forward distance from this note to `other` along the given ring
    pub fn steps_from_in(&self, other: &Note, ordering: NoteOrdering) -> usize {
        let from = ordering.position(self) as i32;
        let to = ordering.position(other) as i32;
        (to - from).rem_euclid(ordering.len() as i32) as usize
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        let root = self.root();
        let other_root = other.root();
        root.letter == other_root.letter && root.accidental == other_root.accidental
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let root = self.root();
        root.letter.hash(state);
        root.accidental.hash(state);
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.accidental)
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    /// Parse a note from text (e.g., "C", "C#", "Db", "Fx", "F##")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars
            .next()
            .and_then(LetterName::from_char)
            .ok_or_else(|| TheoryError::MalformedNote(s.to_string()))?;
        let accidental = chars.as_str().parse::<Accidental>()?;
        Ok(Note::new(letter, accidental))
    }
}

impl TryFrom<String> for Note {
    type Error = TheoryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.to_string()
    }
}
