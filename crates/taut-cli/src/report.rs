//! Analysis driver and result rendering.
//!
//! `run_analyze` walks the requested files/directories, runs the pipeline
//! on each dataset, and renders either a human report or stable JSON.
//! A failing dataset is reported and skipped so one bad file does not
//! abort a directory run; the command exits non-zero if anything failed.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::Serialize;
use taut_core::{Analysis, GraphStats, StageCounters, analyze_with_counters};
use tracing::{error, info};

use crate::dataset;

/// Output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-optimized sections and tables.
    Human,
    /// Machine-readable JSON, one object per dataset.
    Json,
}

/// Everything reported for one dataset.
#[derive(Debug, Serialize)]
struct Report {
    file: String,
    stats: GraphStats,
    source: usize,
    analysis: Analysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    counters: Option<StageCounters>,
}

/// Analyze every dataset under `paths`.
///
/// # Errors
///
/// Fails if no dataset files are found, or if any dataset failed to load
/// or analyze (remaining datasets are still processed first).
pub fn run_analyze(paths: &[PathBuf], counters: bool, output: OutputMode) -> anyhow::Result<()> {
    let files = collect_dataset_files(paths)?;
    if files.is_empty() {
        bail!("no .json datasets found under the given paths");
    }

    let mut failures = 0_usize;
    for file in &files {
        match analyze_file(file, counters) {
            Ok(report) => render(&report, output)?,
            Err(err) => {
                failures += 1;
                error!(file = %file.display(), "dataset failed: {err:#}");
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} datasets failed", files.len());
    }
    Ok(())
}

/// Expand files and directories into a sorted list of `.json` files.
fn collect_dataset_files(paths: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let entries = std::fs::read_dir(path)
                .with_context(|| format!("reading directory {}", path.display()))?;
            for entry in entries {
                let entry = entry?;
                let p = entry.path();
                if p.extension().is_some_and(|ext| ext == "json") {
                    files.push(p);
                }
            }
        } else {
            files.push(path.clone());
        }
    }
    files.sort();
    Ok(files)
}

fn analyze_file(file: &Path, with_counters: bool) -> anyhow::Result<Report> {
    let dataset = dataset::load(file)?;
    let graph = dataset.to_graph();
    info!(
        file = %file.display(),
        n = dataset.n,
        edges = dataset.edges.len(),
        "dataset loaded"
    );

    let (analysis, counters) = analyze_with_counters(&graph, dataset.source)
        .with_context(|| format!("analyzing {}", file.display()))?;
    let stats = GraphStats::new(&graph, &analysis.scc, &analysis.condensation);

    Ok(Report {
        file: file.display().to_string(),
        stats,
        source: dataset.source,
        analysis,
        counters: with_counters.then_some(counters),
    })
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn render(report: &Report, output: OutputMode) -> anyhow::Result<()> {
    match output {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
            Ok(())
        }
        OutputMode::Human => {
            let stdout = io::stdout();
            let mut w = stdout.lock();
            render_human(report, &mut w)?;
            Ok(())
        }
    }
}

fn fmt_dist(d: f64) -> String {
    if d == f64::INFINITY {
        "∞".to_string()
    } else if d == f64::NEG_INFINITY {
        "-∞".to_string()
    } else {
        format!("{d:.2}")
    }
}

fn fmt_path(path: &[usize]) -> String {
    if path.is_empty() {
        "(unreached)".to_string()
    } else {
        path.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

#[allow(clippy::too_many_lines)]
fn render_human(report: &Report, w: &mut dyn Write) -> anyhow::Result<()> {
    let a = &report.analysis;
    let s = &report.stats;

    writeln!(w, "{:-<60}", "")?;
    writeln!(w, "Dataset: {}", report.file)?;
    writeln!(w, "{:-<60}", "")?;
    writeln!(
        w,
        "vertices={} edges={} density={:.3} sccs={} cycles={} isolated={}",
        s.vertex_count,
        s.edge_count,
        s.density,
        s.scc_count,
        s.cycle_count,
        s.isolated_vertex_count
    )?;

    writeln!(w, "\nComponents (reverse topological emission order):")?;
    for (id, members) in a.scc.components.iter().enumerate() {
        writeln!(
            w,
            "  C{id} = {members:?} (size {}, weight {:.2})",
            members.len(),
            a.condensation.component_weight[id]
        )?;
    }

    writeln!(w, "\nTopological order of components: {:?}", a.order)?;
    writeln!(w, "Derived order of vertices:       {:?}", a.vertex_order)?;

    writeln!(
        w,
        "\nSource vertex {} is in component C{}",
        report.source, a.source_component
    )?;

    writeln!(w, "\nShortest distances from C{}:", a.source_component)?;
    for (c, &d) in a.shortest.dist.iter().enumerate() {
        writeln!(w, "  C{c}: {}", fmt_dist(d))?;
    }

    writeln!(w, "\nLongest (critical) distances from C{}:", a.source_component)?;
    for (c, &d) in a.longest.dist.iter().enumerate() {
        writeln!(w, "  C{c}: {}", fmt_dist(d))?;
    }

    writeln!(w, "\nCritical length = {:.2}", a.critical.length)?;
    writeln!(
        w,
        "Critical path (components) = {}",
        fmt_path(&a.critical.components)
    )?;
    writeln!(
        w,
        "Critical path (vertices)   = {}",
        fmt_path(&a.critical.vertices)
    )?;

    if let Some(c) = &report.counters {
        writeln!(w, "\nStage counters:")?;
        writeln!(
            w,
            "  scc:      dfs={} edges={} sealed={}",
            c.scc.dfs_visits, c.scc.edges_seen, c.scc.components_sealed
        )?;
        writeln!(
            w,
            "  topo:     edges={} push={} pop={}",
            c.topo.edges_seen, c.topo.queue_pushes, c.topo.queue_pops
        )?;
        writeln!(
            w,
            "  shortest: edges={} relax={}",
            c.shortest.edges_seen, c.shortest.relaxations
        )?;
        writeln!(
            w,
            "  longest:  edges={} relax={}",
            c.longest.edges_seen, c.longest.relaxations
        )?;
    }

    writeln!(w)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
