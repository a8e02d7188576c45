// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Score documents.
//!
//! A plain part/measure/note structure that carries pitches and key
//! signatures in and out of the theory model. Scores are read from and
//! written to YAML.

pub mod transpose;

pub use transpose::{transpose_measure, transpose_part, transpose_score};

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::music::{note_for_fifths, Mode, Note, Scale};

/// Root of a score document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Score {
    /// Score title
    #[serde(default)]
    pub title: Option<String>,
    /// Parts in score order
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Score {
    /// Load a score from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read score file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a score from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse score YAML")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize score to YAML")
    }

    /// Save the score to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write score file: {:?}", path.as_ref()))
    }

    /// Key signature of the first measure of the first part, if written
    pub fn key_fifths(&self) -> Option<i32> {
        self.parts
            .first()
            .and_then(|part| part.measures.first())
            .and_then(|measure| measure.key_fifths)
    }

    /// Scale implied by the opening key signature (C when none is written)
    pub fn key_scale(&self, mode: Mode) -> Scale {
        let fifths = self.key_fifths().unwrap_or(0);
        Scale::new(note_for_fifths(fifths), mode)
    }

    /// Every pitched note in part, measure and note order
    pub fn pitches(&self) -> Vec<Note> {
        self.parts
            .iter()
            .flat_map(|part| part.measures.iter())
            .flat_map(|measure| measure.pitches())
            .collect()
    }
}

/// A single part (instrument or voice)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Part {
    /// Part identifier (e.g., "P1")
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Measures in order
    #[serde(default)]
    pub measures: Vec<Measure>,
}

/// One measure of a part
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Measure {
    /// Measure number as written
    pub number: u32,
    /// Key signature written at this measure, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_fifths: Option<i32>,
    /// Notes and rests in order
    #[serde(default)]
    pub notes: Vec<ScoreNote>,
}

impl Measure {
    /// Pitched notes of this measure, rests skipped
    pub fn pitches(&self) -> Vec<Note> {
        self.notes.iter().filter_map(ScoreNote::pitch).collect()
    }
}

/// A note or rest inside a measure
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreNote {
    /// Sounding note; octave numbering follows scientific pitch (C4 = middle C)
    Pitched { pitch: Note, octave: u8 },
    Rest,
}

impl ScoreNote {
    pub fn pitched(pitch: Note, octave: u8) -> Self {
        ScoreNote::Pitched { pitch, octave }
    }

    /// The pitch, if this is not a rest
    pub fn pitch(&self) -> Option<Note> {
        match self {
            ScoreNote::Pitched { pitch, .. } => Some(*pitch),
            ScoreNote::Rest => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::note::{C, C_SHARP, G};
    use tempfile::tempdir;

    const TWINKLE: &str = r#"
title: "Twinkle"
parts:
  - id: P1
    name: Music
    measures:
      - number: 1
        key_fifths: 0
        notes:
          - kind: pitched
            pitch: C
            octave: 4
          - kind: pitched
            pitch: G
            octave: 4
          - kind: rest
      - number: 2
        notes:
          - kind: pitched
            pitch: "C#"
            octave: 5
"#;

    #[test]
    fn test_parse_score() {
        let score = Score::from_yaml(TWINKLE).unwrap();
        assert_eq!(score.title, Some("Twinkle".to_string()));
        assert_eq!(score.parts.len(), 1);
        assert_eq!(score.parts[0].id, "P1");
        assert_eq!(score.parts[0].measures.len(), 2);
        assert_eq!(score.parts[0].measures[0].key_fifths, Some(0));
        assert_eq!(score.parts[0].measures[1].key_fifths, None);
        assert_eq!(score.parts[0].measures[0].notes[2], ScoreNote::Rest);
        assert_eq!(score.pitches(), vec![C, G, C_SHARP]);
    }

    #[test]
    fn test_parse_rejects_bad_pitch() {
        let yaml = r#"
parts:
  - id: P1
    measures:
      - number: 1
        notes:
          - kind: pitched
            pitch: "H#"
            octave: 4
"#;
        assert!(Score::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_key_scale() {
        let score = Score::from_yaml(TWINKLE).unwrap();
        assert_eq!(score.key_scale(Mode::Ionian), Scale::ionian(C));

        let mut in_g = score.clone();
        in_g.parts[0].measures[0].key_fifths = Some(10);
        assert_eq!(in_g.key_scale(Mode::Ionian), Scale::ionian(G));

        assert_eq!(Score::default().key_scale(Mode::Ionian), Scale::ionian(C));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("twinkle.yaml");

        let score = Score::from_yaml(TWINKLE).unwrap();
        score.save(&path).unwrap();
        let loaded = Score::load(&path).unwrap();

        assert_eq!(loaded, score);
        assert_eq!(loaded.pitches()[2].to_string(), "C#");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        assert!(Score::load(dir.path().join("missing.yaml")).is_err());
    }
}
