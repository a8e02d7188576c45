// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Score transposition.
//!
//! Every function borrows its input and builds a new value; the source
//! score is never modified, so one score can be transposed into many keys.

use tracing::{debug, info};

use super::{Measure, Part, Score, ScoreNote};
use crate::music::{fifths_of, Result, Scale};

/// Transpose one measure from `source` into `target`.
///
/// Pitches move by chromatic distance, octaves are carried as written and
/// a written key signature is replaced by the target's.
pub fn transpose_measure(measure: &Measure, target: &Scale, source: &Scale) -> Result<Measure> {
    let notes = measure
        .notes
        .iter()
        .map(|note| -> Result<ScoreNote> {
            match note {
                ScoreNote::Pitched { pitch, octave } => {
                    let moved = target.transpose_notes_from(source, std::slice::from_ref(pitch))?;
                    Ok(ScoreNote::pitched(moved[0], *octave))
                }
                ScoreNote::Rest => Ok(ScoreNote::Rest),
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Measure {
        number: measure.number,
        key_fifths: measure.key_fifths.map(|_| fifths_of(&target.start())),
        notes,
    })
}

/// Transpose every measure of a part
pub fn transpose_part(part: &Part, target: &Scale, source: &Scale) -> Result<Part> {
    let measures = part
        .measures
        .iter()
        .map(|measure| transpose_measure(measure, target, source))
        .collect::<Result<Vec<_>>>()?;
    debug!(part = %part.id, measures = measures.len(), "Transposed part");

    Ok(Part {
        id: part.id.clone(),
        name: part.name.clone(),
        measures,
    })
}

/// Transpose a whole score into `target`.
///
/// When `source` is `None` the source key is read from the score's opening
/// key signature, in the target's mode.
pub fn transpose_score(score: &Score, target: &Scale, source: Option<&Scale>) -> Result<Score> {
    let source = source
        .copied()
        .unwrap_or_else(|| score.key_scale(target.mode()));
    info!(from = %source, to = %target, parts = score.parts.len(), "Transposing score");

    let parts = score
        .parts
        .iter()
        .map(|part| transpose_part(part, target, &source))
        .collect::<Result<Vec<_>>>()?;

    Ok(Score {
        title: score.title.clone(),
        parts,
    })
}
