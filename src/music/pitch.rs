// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Letter names and accidentals.
//!
//! The two enumerations every spelled note is built from, with their
//! ordinal and semitone semantics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::TheoryError;

/// Number of letter names (and degrees in a diatonic scale)
pub const NOTES_IN_SCALE: usize = 7;

/// Number of semitones in an octave
pub const NOTES_IN_OCTAVE: usize = 12;

/// The seven note letters, ordered by a 1-based ordinal (A = 1 ... G = 7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LetterName {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl LetterName {
    /// All letters in ordinal order
    pub const ALL: [LetterName; NOTES_IN_SCALE] = [
        LetterName::A,
        LetterName::B,
        LetterName::C,
        LetterName::D,
        LetterName::E,
        LetterName::F,
        LetterName::G,
    ];

    /// 1-based ordinal (A = 1, G = 7)
    pub const fn ordinal(self) -> u8 {
        match self {
            LetterName::A => 1,
            LetterName::B => 2,
            LetterName::C => 3,
            LetterName::D => 4,
            LetterName::E => 5,
            LetterName::F => 6,
            LetterName::G => 7,
        }
    }

    /// Letter for a 1-based ordinal, wrapping in both directions
    pub fn from_ordinal(ordinal: i32) -> Self {
        LetterName::ALL[(ordinal - 1).rem_euclid(NOTES_IN_SCALE as i32) as usize]
    }

    /// Cyclic successor (G wraps to A)
    pub fn next(self) -> Self {
        LetterName::from_ordinal(self.ordinal() as i32 + 1)
    }

    /// Cyclic predecessor (A wraps to G)
    pub fn previous(self) -> Self {
        LetterName::from_ordinal(self.ordinal() as i32 - 1)
    }

    /// Pitch class of the natural letter, counted from C
    pub const fn natural_pitch_class(self) -> u8 {
        match self {
            LetterName::C => 0,
            LetterName::D => 2,
            LetterName::E => 4,
            LetterName::F => 5,
            LetterName::G => 7,
            LetterName::A => 9,
            LetterName::B => 11,
        }
    }

    /// Whether the next letter up is only a half step away (E-F, B-C)
    pub fn has_half_step_above(self) -> bool {
        matches!(self, LetterName::B | LetterName::E)
    }

    /// Parse a single letter, case-insensitive
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(LetterName::A),
            'B' => Some(LetterName::B),
            'C' => Some(LetterName::C),
            'D' => Some(LetterName::D),
            'E' => Some(LetterName::E),
            'F' => Some(LetterName::F),
            'G' => Some(LetterName::G),
            _ => None,
        }
    }
}

impl fmt::Display for LetterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            LetterName::A => 'A',
            LetterName::B => 'B',
            LetterName::C => 'C',
            LetterName::D => 'D',
            LetterName::E => 'E',
            LetterName::F => 'F',
            LetterName::G => 'G',
        };
        write!(f, "{}", c)
    }
}

/// Accidentals understood by the theory model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accidental {
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// Semitone offset from the letter's natural pitch
    pub const fn semitones(self) -> i8 {
        match self {
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    /// Short glyph used in note names ("b", "", "#", "x")
    pub const fn glyph(self) -> &'static str {
        match self {
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "x",
        }
    }

    /// Long name as used by notation documents
    pub const fn name(self) -> &'static str {
        match self {
            Accidental::Flat => "flat",
            Accidental::Natural => "natural",
            Accidental::Sharp => "sharp",
            Accidental::DoubleSharp => "double-sharp",
        }
    }

    /// Parse a glyph ("b", "#", "x", "##", "") or a long name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "b" | "flat" => Some(Accidental::Flat),
            "" | "n" | "natural" => Some(Accidental::Natural),
            "#" | "s" | "sharp" => Some(Accidental::Sharp),
            "x" | "##" | "double-sharp" | "double_sharp" => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }
}

impl FromStr for Accidental {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Accidental::parse(s).ok_or_else(|| TheoryError::MalformedAccidental(s.to_string()))
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
