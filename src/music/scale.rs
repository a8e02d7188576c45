// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diatonic scales and scale-to-scale transposition.
//!
//! A [`Scale`] is a start note and a [`Mode`]. Its degrees are derived on
//! demand: first the naive chromatic picks for each step of the mode's
//! formula, then a spelling pass that puts each of the seven letters on
//! exactly one degree.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::error::{Result, TheoryError};
use super::note::Note;
use super::pitch::{Accidental, LetterName, NOTES_IN_OCTAVE, NOTES_IN_SCALE};

/// Step pattern of a diatonic scale
pub type Formula = [u8; NOTES_IN_SCALE];

/// Diatonic modes supported by the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[serde(alias = "major")]
    Ionian,
    #[serde(alias = "minor")]
    Aeolian,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Ionian, Mode::Aeolian];

    /// Semitone steps from each degree to the next, with a leading 0
    pub fn formula(self) -> Formula {
        match self {
            Mode::Ionian => [0, 2, 2, 1, 2, 2, 2],
            Mode::Aeolian => [0, 2, 1, 2, 2, 1, 2],
        }
    }

    /// The seven steps around the octave, closing step back to the start
    /// note included
    pub fn intervals(self) -> Formula {
        let formula = self.formula();
        let mut steps = [0; NOTES_IN_SCALE];
        steps[..NOTES_IN_SCALE - 1].copy_from_slice(&formula[1..]);
        let span: u8 = formula.iter().sum();
        steps[NOTES_IN_SCALE - 1] = NOTES_IN_OCTAVE as u8 - span;
        steps
    }

    /// Get a human-readable name for this mode
    pub fn name(self) -> &'static str {
        match self {
            Mode::Ionian => "ionian",
            Mode::Aeolian => "aeolian",
        }
    }
}

impl FromStr for Mode {
    type Err = TheoryError;

    /// Parse mode from string ("ionian"/"major", "aeolian"/"minor")
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match normalized.as_str() {
            "ionian" | "major" => Ok(Mode::Ionian),
            "aeolian" | "minor" | "naturalminor" => Ok(Mode::Aeolian),
            _ => Err(TheoryError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A diatonic scale: start note plus mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scale {
    start: Note,
    mode: Mode,
}

impl Scale {
    /// Create a new scale from start note and mode
    pub fn new(start: Note, mode: Mode) -> Self {
        Self { start, mode }
    }

    /// Major scale on `start`
    pub fn ionian(start: Note) -> Self {
        Self::new(start, Mode::Ionian)
    }

    /// Parse a scale from strings (e.g., "G#", "ionian")
    pub fn parse(start: &str, mode: &str) -> Result<Self> {
        Ok(Self::new(start.parse()?, mode.parse()?))
    }

    /// Get the start note as written
    pub fn start(&self) -> Note {
        self.start
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn formula(&self) -> Formula {
        self.mode.formula()
    }

    /// Semitone offset of each degree above the start note
    pub fn formula_cumulative(&self) -> Formula {
        let mut cumulative = self.formula();
        for i in 1..NOTES_IN_SCALE {
            cumulative[i] += cumulative[i - 1];
        }
        cumulative
    }

    /// All twelve chromatic notes, beginning at the start note
    pub fn note_ordering(&self) -> Vec<Note> {
        (0..NOTES_IN_OCTAVE as i32)
            .map(|step| self.start.note_n_steps_away(step))
            .collect()
    }

    /// The chromatic pick for each degree, before letters are sorted out.
    ///
    /// These are keyboard spellings, so two degrees may share a letter
    /// (G# ionian gives G# A# C C# D# F G).
    pub fn basic_scale(&self) -> [Note; NOTES_IN_SCALE] {
        self.formula_cumulative()
            .map(|offset| self.start.note_n_steps_away(offset as i32))
    }

    /// The seven spelled degrees, one per letter in order from the start
    /// note's letter
    pub fn degrees(&self) -> [Note; NOTES_IN_SCALE] {
        let basic = self.basic_scale();
        let mut notes = [self.start; NOTES_IN_SCALE];
        for degree in 1..NOTES_IN_SCALE {
            notes[degree] = spell_degree(notes[degree - 1], basic[degree]);
        }
        trace!(scale = %self, degrees = ?notes, "Spelled scale");
        notes
    }

    /// Get the 1-based degree a note occupies in this scale, if any
    pub fn degree_of(&self, note: &Note) -> Option<usize> {
        self.degrees().iter().position(|n| n == note).map(|i| i + 1)
    }

    /// Map each degree of this scale to the same degree of `other`
    pub fn transposition_map(&self, other: &Scale) -> Result<HashMap<Note, Note>> {
        self.check_same_mode(other)?;
        let map: HashMap<Note, Note> = self
            .degrees()
            .into_iter()
            .zip(other.degrees())
            .collect();
        debug!(from = %self, to = %other, "Built transposition map");
        Ok(map)
    }

    /// Move `notes` from `original` into this scale by chromatic distance.
    ///
    /// Each result is re-derived from its distance to the original start
    /// note, so it comes back in keyboard spelling (naturals and sharps)
    /// whatever the input spelling was.
    pub fn transpose_notes_from(&self, original: &Scale, notes: &[Note]) -> Result<Vec<Note>> {
        original.check_same_mode(self)?;
        Ok(notes
            .iter()
            .map(|note| {
                let steps = original.start.steps_from(note);
                self.start.note_n_steps_away(steps as i32)
            })
            .collect())
    }

    fn check_same_mode(&self, other: &Scale) -> Result<()> {
        if self.mode != other.mode {
            return Err(TheoryError::IncompatibleModes {
                from: self.mode,
                to: other.mode,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.start, self.mode)
    }
}

/// Spell the degree after `previous` whose naive chromatic pick is `naive`
fn spell_degree(previous: Note, naive: Note) -> Note {
    let expected = previous.next_letter();
    if naive.letter() == expected {
        return naive;
    }

    let distance = (naive.letter().ordinal() as i32 - expected.ordinal() as i32)
        .rem_euclid(NOTES_IN_SCALE as i32);
    if distance > 3 {
        // Naive pick sits on the letter below
        return Note::new(expected, Accidental::Flat);
    }

    match (expected, previous.letter(), previous.accidental()) {
        (LetterName::F, LetterName::E, Accidental::Sharp) => {
            Note::new(LetterName::F, Accidental::DoubleSharp)
        }
        (LetterName::C, LetterName::B, Accidental::Sharp) => {
            Note::new(LetterName::C, Accidental::DoubleSharp)
        }
        _ => Note::new(expected, Accidental::Sharp),
    }
}
