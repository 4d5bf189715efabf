//! The whole four-stage analysis pipeline in one call.
//!
//! # Overview
//!
//! [`analyze`] chains the individual stages for the common case of "here
//! is a raw task graph, tell me everything":
//!
//! 1. SCC decomposition collapses cycles into components.
//! 2. Condensation builds the acyclic component DAG and per-component
//!    aggregate weights.
//! 3. Kahn's algorithm orders the components (and, derived from that, the
//!    original vertices).
//! 4. Shortest and longest DP run from the source vertex's component; the
//!    longest-path result, scored with the component weights, identifies
//!    the critical path.
//!
//! Every stage is a pure function of the previous stage's output; the
//! whole run is synchronous and deterministic.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::condense::{Condensation, condense};
use crate::graph::Graph;
use crate::paths::{PathResult, longest_paths_with_probe, shortest_paths_with_probe};
use crate::probe::Counters;
use crate::scc::{SccResult, strongly_connected_components_with_probe};
use crate::topo::{CycleError, topological_order_with_probe};

/// The maximum-weight dependency chain from the source component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriticalPath {
    /// Component at the end of the critical path.
    pub component: usize,
    /// Total weight of the path (edge weights plus component weights).
    pub length: f64,
    /// Components along the path, source first.
    pub components: Vec<usize>,
    /// The path expanded to original vertices: each component's members in
    /// ascending index order.
    pub vertices: Vec<usize>,
}

/// Everything the pipeline computes about one graph and source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Stage 1: the SCC partition.
    pub scc: SccResult,
    /// Stage 2: the component DAG and per-component weights.
    pub condensation: Condensation,
    /// Stage 3: topological order of the components.
    pub order: Vec<usize>,
    /// Stage 3, derived: original vertices in component-topological order
    /// (members of each component in ascending index order).
    pub vertex_order: Vec<usize>,
    /// Component containing the query's source vertex.
    pub source_component: usize,
    /// Stage 4: shortest distances between components.
    pub shortest: PathResult,
    /// Stage 4: longest distances, scored with component weights.
    pub longest: PathResult,
    /// The critical path identified from `longest`.
    pub critical: CriticalPath,
}

/// Per-stage operation counters from a pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StageCounters {
    /// SCC decomposition counters.
    pub scc: Counters,
    /// Topological-sort counters.
    pub topo: Counters,
    /// Shortest-path counters.
    pub shortest: Counters,
    /// Longest-path counters.
    pub longest: Counters,
}

/// Run the full pipeline on `g` from `source` (an original-graph vertex).
///
/// # Errors
///
/// Returns [`CycleError`] only if a stage receives a cyclic graph where a
/// DAG is required. The condensation feeding those stages is acyclic by
/// construction, so in practice this does not happen; the error path
/// exists for parity with the standalone stage functions.
///
/// # Panics
///
/// Panics if `source` is out of range.
pub fn analyze(g: &Graph, source: usize) -> Result<Analysis, CycleError> {
    analyze_with_counters(g, source).map(|(analysis, _)| analysis)
}

/// [`analyze`] with per-stage operation counters.
///
/// # Errors
///
/// As for [`analyze`].
///
/// # Panics
///
/// Panics if `source` is out of range.
#[instrument(skip_all, fields(n = g.len(), source))]
pub fn analyze_with_counters(
    g: &Graph,
    source: usize,
) -> Result<(Analysis, StageCounters), CycleError> {
    assert!(
        source < g.len(),
        "source vertex {source} out of range (n = {})",
        g.len()
    );

    let mut counters = StageCounters::default();

    let scc = strongly_connected_components_with_probe(g, &mut counters.scc);
    let condensation = condense(g, &scc);
    let order = topological_order_with_probe(&condensation.dag, &mut counters.topo)?;
    let vertex_order = derive_vertex_order(&scc, &order);

    let source_component = scc.component_of[source];
    let shortest =
        shortest_paths_with_probe(&condensation.dag, source_component, &mut counters.shortest)?;
    let longest = longest_paths_with_probe(
        &condensation.dag,
        source_component,
        Some(&condensation.component_weight),
        &mut counters.longest,
    )?;

    let critical = identify_critical(&scc, &longest);

    debug!(
        components = scc.component_count(),
        critical_length = critical.length,
        "pipeline complete"
    );

    let analysis = Analysis {
        scc,
        condensation,
        order,
        vertex_order,
        source_component,
        shortest,
        longest,
        critical,
    };
    Ok((analysis, counters))
}

/// Expand a component topological order to original vertices.
///
/// Components keep their topological order; members within a component
/// come out in ascending vertex index order.
fn derive_vertex_order(scc: &SccResult, order: &[usize]) -> Vec<usize> {
    let mut vertices = Vec::with_capacity(scc.component_of.len());
    for &comp in order {
        let mut members = scc.components[comp].clone();
        members.sort_unstable();
        vertices.extend(members);
    }
    vertices
}

/// Pick the critical path out of a longest-distance result.
///
/// The endpoint is the component with the maximum finite distance (ties
/// break to the first seen); the path is its predecessor walk, expanded
/// to original vertices.
fn identify_critical(scc: &SccResult, longest: &PathResult) -> CriticalPath {
    let (component, length) = longest
        .farthest()
        .expect("the source component is always reached");
    let components = longest.path_to(component);

    let mut vertices = Vec::new();
    for &comp in &components {
        let mut members = scc.components[comp].clone();
        members.sort_unstable();
        vertices.extend(members);
    }

    CriticalPath {
        component,
        length,
        components,
        vertices,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
