//! JSON dataset model and loading.
//!
//! A dataset describes one graph analysis job:
//!
//! ```json
//! {
//!   "directed": true,
//!   "n": 5,
//!   "source": 0,
//!   "weight_model": "edge",
//!   "edges": [ { "u": 0, "v": 1, "w": 2.5 } ]
//! }
//! ```
//!
//! Loading validates every index before any graph construction, so the
//! core's fail-fast contracts are never tripped by bad input files —
//! malformed datasets surface as ordinary errors with file context.

use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use taut_core::Graph;

fn default_weight_model() -> String {
    "edge".to_string()
}

/// One edge of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetEdge {
    /// Source vertex.
    pub u: usize,
    /// Target vertex.
    pub v: usize,
    /// Edge weight.
    pub w: f64,
}

/// A persisted graph description plus the query source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// `true` for one-way edges.
    pub directed: bool,
    /// Vertex count.
    pub n: usize,
    /// Source vertex for the path queries.
    pub source: usize,
    /// Weighting scheme tag; only `"edge"` is produced today.
    #[serde(default = "default_weight_model")]
    pub weight_model: String,
    /// Edge list.
    pub edges: Vec<DatasetEdge>,
}

impl Dataset {
    /// Validate index ranges.
    ///
    /// # Errors
    ///
    /// Fails if the source or any edge endpoint is out of `[0, n)`.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.source >= self.n {
            bail!("source vertex {} out of range (n = {})", self.source, self.n);
        }
        for (i, e) in self.edges.iter().enumerate() {
            if e.u >= self.n || e.v >= self.n {
                bail!(
                    "edge #{i} ({} -> {}) out of range (n = {})",
                    e.u,
                    e.v,
                    self.n
                );
            }
        }
        Ok(())
    }

    /// Build the in-memory graph this dataset describes.
    ///
    /// Call [`Dataset::validate`] first; this assumes indices are in
    /// range.
    #[must_use]
    pub fn to_graph(&self) -> Graph {
        let mut g = Graph::new(self.n, self.directed);
        for e in &self.edges {
            g.add_edge(e.u, e.v, e.w);
        }
        g
    }
}

/// Load and validate a dataset from a JSON file.
///
/// # Errors
///
/// Fails on I/O errors, malformed JSON, or out-of-range indices; the
/// error chain names the offending file.
pub fn load(path: &Path) -> anyhow::Result<Dataset> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading dataset {}", path.display()))?;
    let dataset: Dataset = serde_json::from_str(&text)
        .with_context(|| format!("parsing dataset {}", path.display()))?;
    dataset
        .validate()
        .with_context(|| format!("validating dataset {}", path.display()))?;
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
