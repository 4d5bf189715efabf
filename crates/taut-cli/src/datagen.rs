//! Sample dataset generator.
//!
//! Writes nine directed datasets (three each of small/medium/large) with
//! fixed seeds, so repeated runs produce identical files. Edge weights are
//! integers 1–5; self-loops are skipped; the query source is vertex 0.

use std::fs;
use std::path::Path;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::dataset::{Dataset, DatasetEdge};
use crate::report::OutputMode;

/// Size tiers: (prefix, count, min vertices, max vertices, seed).
const TIERS: &[(&str, usize, usize, usize, u64)] = &[
    ("small", 3, 6, 10, 0x7A07_0001),
    ("medium", 3, 10, 20, 0x7A07_0002),
    ("large", 3, 20, 50, 0x7A07_0003),
];

/// Cap on generated edges per dataset.
const MAX_EDGES: usize = 150;

/// Generate all sample datasets into `out`.
///
/// # Errors
///
/// Fails on I/O errors creating the directory or writing files.
pub fn run_gen(out: &Path, output: OutputMode) -> anyhow::Result<()> {
    fs::create_dir_all(out)
        .with_context(|| format!("creating output directory {}", out.display()))?;

    let mut written = Vec::new();
    for &(prefix, count, min_n, max_n, seed) in TIERS {
        let mut rng = StdRng::seed_from_u64(seed);
        for i in 1..=count {
            let dataset = generate(&mut rng, min_n, max_n);
            let path = out.join(format!("{prefix}-{i}.json"));
            let text = serde_json::to_string_pretty(&dataset)
                .context("serializing dataset")?;
            fs::write(&path, text)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), n = dataset.n, "dataset written");
            written.push(path);
        }
    }

    match output {
        OutputMode::Json => {
            let paths: Vec<String> = written.iter().map(|p| p.display().to_string()).collect();
            println!("{}", serde_json::to_string_pretty(&paths)?);
        }
        OutputMode::Human => {
            println!("Generated {} datasets into {}", written.len(), out.display());
        }
    }
    Ok(())
}

/// Generate one random directed dataset with `min_n..=max_n` vertices.
///
/// Tries up to `3n` edge slots (capped at [`MAX_EDGES`]); a slot that
/// lands on a self-loop is skipped rather than re-drawn, so the edge
/// count varies a little between datasets.
fn generate(rng: &mut StdRng, min_n: usize, max_n: usize) -> Dataset {
    let n = rng.gen_range(min_n..=max_n);
    let slots = (n * 3).min(MAX_EDGES);

    let mut edges = Vec::with_capacity(slots);
    for _ in 0..slots {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }
        let w = f64::from(rng.gen_range(1_u32..=5));
        edges.push(DatasetEdge { u, v, w });
    }

    Dataset {
        directed: true,
        n,
        source: 0,
        weight_model: "edge".to_string(),
        edges,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
