//! Single-source shortest paths over a DAG.

use tracing::instrument;

use crate::graph::Graph;
use crate::probe::{NoopProbe, Probe, ProbeEvent};
use crate::topo::{CycleError, topological_order};

use super::PathResult;

/// Compute shortest distances from `source` over the acyclic graph `dag`.
///
/// # Errors
///
/// Returns [`CycleError`] if `dag` is not actually acyclic.
///
/// # Panics
///
/// Panics if `source` is out of range.
pub fn shortest_paths(dag: &Graph, source: usize) -> Result<PathResult, CycleError> {
    shortest_paths_with_probe(dag, source, &mut NoopProbe)
}

/// [`shortest_paths`] with an instrumentation sink.
///
/// Processing vertices strictly in topological order makes every distance
/// final on first visit: by the time `u` is processed, every path into `u`
/// has already been relaxed.
///
/// # Errors
///
/// Returns [`CycleError`] if `dag` is not actually acyclic.
///
/// # Panics
///
/// Panics if `source` is out of range.
#[instrument(skip_all, fields(n = dag.len(), source))]
pub fn shortest_paths_with_probe(
    dag: &Graph,
    source: usize,
    probe: &mut dyn Probe,
) -> Result<PathResult, CycleError> {
    assert!(
        source < dag.len(),
        "source vertex {source} out of range (n = {})",
        dag.len()
    );

    let order = topological_order(dag)?;

    let mut dist = vec![f64::INFINITY; dag.len()];
    let mut predecessor: Vec<Option<usize>> = vec![None; dag.len()];
    dist[source] = 0.0;

    for u in order {
        if !dist[u].is_finite() {
            continue;
        }
        for e in dag.neighbors(u) {
            probe.record(ProbeEvent::EdgeSeen);
            let candidate = dist[u] + e.weight;
            if candidate < dist[e.to] {
                dist[e.to] = candidate;
                predecessor[e.to] = Some(u);
                probe.record(ProbeEvent::Relaxation);
            }
        }
    }

    Ok(PathResult {
        source,
        dist,
        predecessor,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
