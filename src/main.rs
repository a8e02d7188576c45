// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tracing::info;

use keyshift::config::TransposeJob;
use keyshift::music::{fifths_of, Mode, Note, Scale};
use keyshift::score::{transpose_score, Score};

fn print_usage() {
    println!("keyshift - Key transposition for notated music");
    println!();
    println!("Usage: keyshift [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --scale <KEY> [MODE]                 Print the spelled degrees of a scale");
    println!("  --map <FROM> <TO> [MODE]             Print the degree mapping between two keys");
    println!("  --transpose <SCORE> <KEY> [MODE]     Print a score transposed into KEY");
    println!("  --job <JOB> <SCORE>                  Run a transposition job file on a score");
    println!("  --help                               Show this help message");
    println!();
    println!("MODE is ionian (major, default) or aeolian (minor).");
}

fn parse_scale(key: &str, mode: Option<&String>) -> Result<Scale> {
    let tonic: Note = key.parse()?;
    let mode: Mode = match mode {
        Some(m) => m.parse()?,
        None => Mode::Ionian,
    };
    Ok(Scale::new(tonic, mode))
}

fn print_scale(scale: &Scale) {
    let degrees: Vec<String> = scale.degrees().iter().map(|n| n.to_string()).collect();
    println!("{}: {}", scale, degrees.join(" "));
    println!("Key signature (fifths): {}", fifths_of(&scale.start()));
}

fn print_map(from: &Scale, to: &Scale) -> Result<()> {
    let map = from.transposition_map(to)?;
    println!("{} -> {}", from, to);
    for degree in from.degrees() {
        if let Some(target) = map.get(&degree) {
            println!("  {:<3} -> {}", degree.to_string(), target);
        }
    }
    Ok(())
}

fn print_transposed(score_path: &str, target: &Scale) -> Result<()> {
    let score = Score::load(score_path)?;
    let transposed = transpose_score(&score, target, None)?;
    print!("{}", transposed.to_yaml()?);
    Ok(())
}

fn run_job(job_path: &str, score_path: &str) -> Result<()> {
    let job = TransposeJob::load(job_path)?;
    let score = Score::load(score_path)?;
    let source = job.source_scale();

    fs::create_dir_all(&job.output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", job.output_dir))?;

    for target in job.target_scales() {
        let transposed = transpose_score(&score, &target, source.as_ref())?;
        let out_path = job.output_path(Path::new(score_path), &target);
        transposed.save(&out_path)?;
        info!(key = %target, path = ?out_path, "Wrote transposed score");
    }

    println!("Done!");
    Ok(())
}

fn main() -> Result<()> {
    keyshift::logging::init();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("keyshift - Key transposition for notated music");
        println!("Run with --help for usage information");
        return Ok(());
    }

    match args[1].as_str() {
        "--scale" => {
            let key = args
                .get(2)
                .ok_or_else(|| anyhow!("--scale requires a key (e.g., G# or Bb)"))?;
            let scale = parse_scale(key, args.get(3))?;
            print_scale(&scale);
        }
        "--map" => {
            if args.len() < 4 {
                eprintln!("Error: --map requires two keys");
                std::process::exit(1);
            }
            let from = parse_scale(&args[2], args.get(4))?;
            let to = parse_scale(&args[3], args.get(4))?;
            print_map(&from, &to)?;
        }
        "--transpose" => {
            if args.len() < 4 {
                eprintln!("Error: --transpose requires a score file and a key");
                std::process::exit(1);
            }
            let target = parse_scale(&args[3], args.get(4))?;
            print_transposed(&args[2], &target)?;
        }
        "--job" => {
            if args.len() < 4 {
                eprintln!("Error: --job requires a job file and a score file");
                std::process::exit(1);
            }
            run_job(&args[2], &args[3])?;
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
