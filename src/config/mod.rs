// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for transposition jobs.
//!
//! A job names the key a score is written in (optional; the score's own key
//! signature is used otherwise), the key to move it into, and where output
//! files go. Jobs are YAML, or TOML when the file ends in `.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::music::{Mode, Note, Scale, DISPLAY_RING};

/// A key: tonic plus mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct KeyConfig {
    /// Tonic (e.g., "C", "F#", "Bb")
    pub key: Note,
    /// Mode ("ionian"/"major" or "aeolian"/"minor")
    #[serde(default = "default_mode")]
    pub mode: Mode,
}

fn default_mode() -> Mode {
    Mode::Ionian
}

impl KeyConfig {
    pub fn scale(&self) -> Scale {
        Scale::new(self.key, self.mode)
    }
}

/// Root configuration for a transposition job
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransposeJob {
    /// Key the score is written in; read from the score when absent
    #[serde(default)]
    pub source: Option<KeyConfig>,
    /// Key to transpose into
    pub target: KeyConfig,
    /// Directory for transposed files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Write one file per display-ring key instead of just the target
    #[serde(default)]
    pub all_keys: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl TransposeJob {
    /// Load a job from a YAML or TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read job file: {:?}", path))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&contents),
            _ => Self::from_yaml(&contents),
        }
    }

    /// Parse a job from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse job YAML")
    }

    /// Parse a job from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse job TOML")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize job to YAML")
    }

    pub fn source_scale(&self) -> Option<Scale> {
        self.source.map(|key| key.scale())
    }

    pub fn target_scale(&self) -> Scale {
        self.target.scale()
    }

    /// Every scale this job writes a file for
    pub fn target_scales(&self) -> Vec<Scale> {
        if self.all_keys {
            DISPLAY_RING
                .iter()
                .map(|&tonic| Scale::new(tonic, self.target.mode))
                .collect()
        } else {
            vec![self.target_scale()]
        }
    }

    /// Output path for `score_path` transposed into `scale`
    /// (e.g., `out/twinkle_Eb.yaml`)
    pub fn output_path(&self, score_path: &Path, scale: &Scale) -> PathBuf {
        let stem = score_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("score");
        self.output_dir.join(format!("{}_{}.yaml", stem, scale.start()))
    }
}

/// Load a job file, reporting the first problem found
pub fn validate_job<P: AsRef<Path>>(path: P) -> Result<TransposeJob> {
    TransposeJob::load(path)
}
