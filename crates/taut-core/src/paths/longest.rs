//! Single-source longest (critical) paths over a DAG.

use tracing::instrument;

use crate::graph::Graph;
use crate::probe::{NoopProbe, Probe, ProbeEvent};
use crate::topo::{CycleError, topological_order};

use super::PathResult;

/// Compute longest distances from `source` over the acyclic graph `dag`.
///
/// This mirrors [`shortest_paths`](super::shortest_paths) with the
/// comparison and sentinel direction inverted, plus an optional additive
/// per-vertex term: when `node_weights` is supplied, every relaxation adds
/// the target's node weight and the source starts at its own node weight
/// instead of zero. The condensation pipeline uses this to score
/// components by their internal aggregate weight.
///
/// # Errors
///
/// Returns [`CycleError`] if `dag` is not actually acyclic.
///
/// # Panics
///
/// Panics if `source` is out of range, or if `node_weights` is supplied
/// with a length other than the vertex count.
pub fn longest_paths(
    dag: &Graph,
    source: usize,
    node_weights: Option<&[f64]>,
) -> Result<PathResult, CycleError> {
    longest_paths_with_probe(dag, source, node_weights, &mut NoopProbe)
}

/// [`longest_paths`] with an instrumentation sink.
///
/// # Errors
///
/// Returns [`CycleError`] if `dag` is not actually acyclic.
///
/// # Panics
///
/// Panics if `source` is out of range, or if `node_weights` is supplied
/// with a length other than the vertex count.
#[instrument(skip_all, fields(n = dag.len(), source))]
pub fn longest_paths_with_probe(
    dag: &Graph,
    source: usize,
    node_weights: Option<&[f64]>,
    probe: &mut dyn Probe,
) -> Result<PathResult, CycleError> {
    assert!(
        source < dag.len(),
        "source vertex {source} out of range (n = {})",
        dag.len()
    );
    if let Some(weights) = node_weights {
        assert_eq!(
            weights.len(),
            dag.len(),
            "node weights do not match graph size"
        );
    }

    let order = topological_order(dag)?;
    let node_weight = |v: usize| node_weights.map_or(0.0, |w| w[v]);

    let mut dist = vec![f64::NEG_INFINITY; dag.len()];
    let mut predecessor: Vec<Option<usize>> = vec![None; dag.len()];
    dist[source] = node_weight(source);

    for u in order {
        if !dist[u].is_finite() {
            continue;
        }
        for e in dag.neighbors(u) {
            probe.record(ProbeEvent::EdgeSeen);
            let candidate = dist[u] + e.weight + node_weight(e.to);
            if candidate > dist[e.to] {
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
