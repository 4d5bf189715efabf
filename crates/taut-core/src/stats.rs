//! Summary statistics for an analyzed graph.
//!
//! # Statistics Provided
//!
//! - **vertex_count / edge_count**: size of the original graph.
//! - **density**: `edge_count / (vertex_count * (vertex_count - 1))` for a
//!   directed graph; 0.0 for graphs with fewer than two vertices.
//! - **scc_count**: components in the condensation. Equals `vertex_count`
//!   when the graph is acyclic.
//! - **cycle_count**: components with more than one member.
//! - **isolated_vertex_count**: vertices with no in-edges and no
//!   out-edges.
//! - **max_in_degree / max_out_degree**: extremes over the original graph.
//! - **condensed_edge_count**: edges surviving condensation (duplicates
//!   between the same component pair suppressed).

use serde::Serialize;

use crate::condense::Condensation;
use crate::graph::Graph;
use crate::scc::SccResult;

/// Summary statistics for one graph and its condensation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    /// Vertices in the original graph.
    pub vertex_count: usize,
    /// Edges in the original graph.
    pub edge_count: usize,
    /// Edge density of the original directed graph, 0.0 to 1.0.
    pub density: f64,
    /// Strongly connected components.
    pub scc_count: usize,
    /// Components with more than one member (collapsed cycles).
    pub cycle_count: usize,
    /// Vertices with no edges at all.
    pub isolated_vertex_count: usize,
    /// Highest in-degree in the original graph.
    pub max_in_degree: usize,
    /// Highest out-degree in the original graph.
    pub max_out_degree: usize,
    /// Edges in the condensation DAG.
    pub condensed_edge_count: usize,
}

impl GraphStats {
    /// Compute statistics from the pipeline's first two stage outputs.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(g: &Graph, scc: &SccResult, condensation: &Condensation) -> Self {
        let n = g.len();
        let edge_count = g.edge_count();

        let mut in_degree = vec![0_usize; n];
        for (_, v, _) in g.edges() {
            in_degree[v] += 1;
        }

        let isolated_vertex_count = (0..n)
            .filter(|&v| in_degree[v] == 0 && g.neighbors(v).is_empty())
            .count();

        let density = if n < 2 {
            0.0
        } else {
            edge_count as f64 / (n * (n - 1)) as f64
        };

        Self {
            vertex_count: n,
            edge_count,
            density,
            scc_count: scc.component_count(),
            cycle_count: scc.cycle_count(),
            isolated_vertex_count,
            max_in_degree: in_degree.iter().copied().max().unwrap_or(0),
            max_out_degree: (0..n).map(|v| g.neighbors(v).len()).max().unwrap_or(0),
            condensed_edge_count: condensation.dag.edge_count(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
