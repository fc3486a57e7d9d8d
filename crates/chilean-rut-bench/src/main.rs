//! Throughput benchmark for RUT generation, formatting, parsing, and validation.
//!
//! Usage: `bench-ruts [ruts.json]`
//!
//! With a path, loads a JSON array of raw RUT strings and benchmarks them;
//! otherwise generates a seeded population. Writes a JSON summary next to the
//! input (or to `ruts-summary.json` in the working directory).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chilean_rut::{GeneratorConfig, Rut, RutFormat, RutGenerator};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const GENERATED_COUNT: usize = 1_000_000;
const SEED: u64 = 42;
const ITERS: u32 = 5;

#[derive(Debug, Serialize)]
struct StageTiming {
    stage: String,
    avg_micros: u128,
    per_second: f64,
}

#[derive(Debug, Serialize)]
struct Summary {
    source: String,
    count: usize,
    malformed: usize,
    invalid: usize,
    unique_bodies: usize,
    min: Option<Rut>,
    max: Option<Rut>,
    timings: Vec<StageTiming>,
}

fn timing(stage: &str, elapsed: Duration, count: usize) -> StageTiming {
    let timing = StageTiming {
        stage: stage.to_string(),
        avg_micros: elapsed.as_micros(),
        per_second: count as f64 / elapsed.as_secs_f64(),
    };
    println!(
        "{:<24} {:>12?}  ({:.2} M/s)",
        stage,
        elapsed,
        timing.per_second / 1_000_000.0
    );
    timing
}

/// Runs `f` ITERS times after warmup and returns the average duration.
fn bench<T>(mut f: impl FnMut() -> T) -> (T, Duration) {
    for _ in 0..2 {
        let _ = f();
    }
    let start = Instant::now();
    let mut out = f();
    for _ in 1..ITERS {
        out = f();
    }
    (out, start.elapsed() / ITERS)
}

fn load_raw(path: &Path) -> Vec<String> {
    let json = fs::read_to_string(path).expect("Failed to read input file");
    serde_json::from_str(&json).expect("Input must be a JSON array of strings")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let input = std::env::args().nth(1).map(PathBuf::from);
    let mut timings = Vec::new();

    println!("=== Source ===");
    let (source, raw, malformed) = match &input {
        Some(path) => {
            let raw = load_raw(path);
            let malformed = raw.iter().filter(|r| Rut::parse(r).is_err()).count();
            println!("Loaded {} ruts from {}", raw.len(), path.display());
            (path.display().to_string(), raw, malformed)
        }
        None => {
            let config = GeneratorConfig::default().with_seed(SEED);
            let (ruts, elapsed) = bench(|| {
                RutGenerator::new(&config)
                    .expect("default range is valid")
                    .many(GENERATED_COUNT)
            });
            timings.push(timing("generate", elapsed, GENERATED_COUNT));

            let (unique, elapsed) = bench(|| {
                RutGenerator::new(&config)
                    .expect("default range is valid")
                    .unique(GENERATED_COUNT)
            });
            timings.push(timing("generate unique", elapsed, GENERATED_COUNT));
            assert_eq!(unique.len(), GENERATED_COUNT);

            let raw: Vec<String> = ruts.iter().map(|r| r.format(RutFormat::Full)).collect();
            (format!("generated (seed {})", SEED), raw, 0)
        }
    };

    let ruts: Vec<Rut> = raw.iter().filter_map(|r| Rut::parse(r).ok()).collect();
    let count = ruts.len();

    println!("\n=== Stages ===");
    let (_, elapsed) = bench(|| {
        raw.iter()
            .filter_map(|r| Rut::parse(r).ok())
            .count()
    });
    timings.push(timing("parse", elapsed, raw.len()));

    for mode in RutFormat::ALL {
        let (rendered, elapsed) = bench(|| {
            ruts.iter().map(|r| r.format(mode)).collect::<Vec<_>>()
        });
        timings.push(timing(&format!("format {}", mode.name()), elapsed, count));

        // every rendering must parse back to the same value
        for (rut, text) in ruts.iter().zip(&rendered) {
            assert_eq!(Rut::parse(text).ok().as_ref(), Some(rut), "{}", text);
        }
    }

    let (invalid, elapsed) = bench(|| ruts.iter().filter(|r| !r.is_valid()).count());
    timings.push(timing("validate", elapsed, count));

    let (sorted, elapsed) = bench(|| {
        let mut sorted = ruts.clone();
        sorted.sort_unstable();
        sorted
    });
    timings.push(timing("sort", elapsed, count));

    let mut bodies: Vec<u32> = sorted.iter().map(Rut::body).collect();
    bodies.dedup();

    let summary = Summary {
        source,
        count,
        malformed,
        invalid,
        unique_bodies: bodies.len(),
        min: sorted.first().copied(),
        max: sorted.last().copied(),
        timings,
    };

    println!("\n=== Summary ===");
    println!("Ruts: {} ({} malformed, {} invalid)", count, malformed, invalid);
    println!("Unique bodies: {}", summary.unique_bodies);

    let output = match &input {
        Some(path) => {
            let stem = path.file_stem().unwrap_or_default().to_string_lossy();
            let parent = path.parent().unwrap_or(Path::new("."));
            parent.join(format!("{}-summary.json", stem))
        }
        None => PathBuf::from("ruts-summary.json"),
    };
    let json = serde_json::to_string_pretty(&summary).expect("Failed to serialize summary");
    fs::write(&output, json).expect("Failed to write summary");
    println!("Summary written to {}", output.display());
}
