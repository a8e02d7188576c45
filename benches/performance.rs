// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for keyshift
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Note canonicalisation and ring navigation
//! - Scale spelling
//! - Bulk note and score transposition

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use keyshift::music::{Accidental, LetterName, Mode, Note, Scale, DISPLAY_RING};
use keyshift::score::{transpose_score, Measure, Part, Score, ScoreNote};

fn random_notes(count: usize, seed: u64) -> Vec<Note> {
    let accidentals = [
        Accidental::Flat,
        Accidental::Natural,
        Accidental::Sharp,
        Accidental::DoubleSharp,
    ];
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let letter = LetterName::ALL[rng.gen_range(0..LetterName::ALL.len())];
            let accidental = accidentals[rng.gen_range(0..accidentals.len())];
            Note::new(letter, accidental)
        })
        .collect()
}

/// Benchmark canonical spelling and chromatic stepping
fn bench_note_navigation(c: &mut Criterion) {
    let notes = random_notes(64, 7);

    c.bench_function("note_root", |b| {
        b.iter(|| {
            for note in &notes {
                black_box(note.root());
            }
        })
    });

    c.bench_function("note_n_steps_away", |b| {
        b.iter(|| {
            for (i, note) in notes.iter().enumerate() {
                black_box(note.note_n_steps_away(black_box(i as i32)));
            }
        })
    });
}

/// Benchmark spelling every display-ring scale
fn bench_scale_spelling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale_degrees");

    for mode in Mode::ALL {
        group.bench_with_input(BenchmarkId::new("all_keys", mode), &mode, |b, &mode| {
            b.iter(|| {
                for &tonic in DISPLAY_RING.iter() {
                    black_box(Scale::new(tonic, mode).degrees());
                }
            })
        });
    }

    group.finish();
}

/// Benchmark bulk note transposition
fn bench_transpose_notes(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose_notes_from");
    let from = Scale::ionian("C".parse().unwrap());
    let to = Scale::ionian("Eb".parse().unwrap());

    for size in [100, 1000, 10000].iter() {
        let notes = random_notes(*size, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &notes, |b, notes| {
            b.iter(|| black_box(to.transpose_notes_from(&from, notes).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark transposing a score into every key
fn bench_transpose_score(c: &mut Criterion) {
    let notes = random_notes(32, 3);
    let measures: Vec<Measure> = notes
        .chunks(4)
        .enumerate()
        .map(|(i, chunk)| Measure {
            number: i as u32 + 1,
            key_fifths: if i == 0 { Some(0) } else { None },
            notes: chunk.iter().map(|&n| ScoreNote::pitched(n, 4)).collect(),
        })
        .collect();
    let score = Score {
        title: None,
        parts: vec![Part {
            id: "P1".to_string(),
            name: "Melody".to_string(),
            measures,
        }],
    };

    c.bench_function("transpose_score_all_keys", |b| {
        b.iter(|| {
            for &tonic in DISPLAY_RING.iter() {
                black_box(transpose_score(&score, &Scale::ionian(tonic), None).unwrap());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_note_navigation,
    bench_scale_spelling,
    bench_transpose_notes,
    bench_transpose_score,
);
criterion_main!(benches);
