//! Kahn's topological sort.
//!
//! # Overview
//!
//! Produces one valid linear extension of a DAG in O(V + E): compute
//! in-degrees, seed a FIFO queue with the zero-in-degree vertices in index
//! order, then repeatedly dequeue, emit, and decrement successors,
//! enqueueing each the moment its in-degree hits zero.
//!
//! Tie-breaking among simultaneously-ready vertices follows queue order:
//! index order for the initial seed, discovery order after that. The
//! result is deterministic but not unique among valid orders.
//!
//! # Failure
//!
//! A cyclic input produces an order shorter than the vertex count. That is
//! reported as [`CycleError`] — the caller gets no partial order.

use std::collections::VecDeque;

use tracing::trace;

use crate::graph::Graph;
use crate::probe::{NoopProbe, Probe, ProbeEvent};

/// The input graph was not acyclic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("graph is not acyclic: only {ordered} of {vertices} vertices could be ordered")]
pub struct CycleError {
    /// Vertices that made it into the partial order before it stalled.
    pub ordered: usize,
    /// Total vertices in the graph.
    pub vertices: usize,
}

/// Compute a topological order of `g`.
///
/// # Errors
///
/// Returns [`CycleError`] if `g` contains a cycle.
pub fn topological_order(g: &Graph) -> Result<Vec<usize>, CycleError> {
    topological_order_with_probe(g, &mut NoopProbe)
}

/// [`topological_order`] with an instrumentation sink.
///
/// # Errors
///
/// Returns [`CycleError`] if `g` contains a cycle.
pub fn topological_order_with_probe(
    g: &Graph,
    probe: &mut dyn Probe,
) -> Result<Vec<usize>, CycleError> {
    let n = g.len();

    let mut in_degree = vec![0_usize; n];
    for (_, v, _) in g.edges() {
        in_degree[v] += 1;
        probe.record(ProbeEvent::EdgeSeen);
    }

    let mut queue: VecDeque<usize> = VecDeque::new();
    for (v, &deg) in in_degree.iter().enumerate() {
        if deg == 0 {
            queue.push_back(v);
            probe.record(ProbeEvent::QueuePush);
        }
    }

    let mut order = Vec::with_capacity(n);
    while let Some(u) = queue.pop_front() {
        probe.record(ProbeEvent::QueuePop);
        order.push(u);

        for e in g.neighbors(u) {
            in_degree[e.to] -= 1;
            if in_degree[e.to] == 0 {
                queue.push_back(e.to);
                probe.record(ProbeEvent::QueuePush);
            }
        }
    }

    if order.len() != n {
        return Err(CycleError {
            ordered: order.len(),
            vertices: n,
        });
    }

    trace!(n, "topological order computed");
    Ok(order)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::Counters;

    fn directed(n: usize, edges: &[(usize, usize)]) -> Graph {
        let mut g = Graph::directed(n);
        for &(u, v) in edges {
            g.add_edge(u, v, 1.0);
        }
        g
    }

    fn assert_valid_order(g: &Graph, order: &[usize]) {
        assert_eq!(order.len(), g.len(), "order covers every vertex");
        let position: Vec<usize> = {
            let mut pos = vec![0; g.len()];
            for (i, &v) in order.iter().enumerate() {
                pos[v] = i;
            }
            pos
        };
        for (u, v, _) in g.edges() {
            assert!(position[u] < position[v], "edge {u}→{v} respected");
        }
    }

    #[test]
    fn empty_graph_yields_empty_order() {
        let order = topological_order(&Graph::directed(0)).expect("empty graph is a DAG");
        assert!(order.is_empty());
    }

    #[test]
    fn chain_orders_in_sequence() {
        let g = directed(4, &[(0, 1), (1, 2), (2, 3)]);
        let order = topological_order(&g).expect("chain is a DAG");
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn diamond_order_is_valid_and_deterministic() {
        // 0 → {1, 2} → 3: both 1 and 2 become ready after 0; FIFO order
        // keeps index order among simultaneously-ready vertices.
        let g = directed(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let order = topological_order(&g).expect("diamond is a DAG");

        assert_valid_order(&g, &order);
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn disconnected_vertices_seed_in_index_order() {
        let g = directed(3, &[]);
        let order = topological_order(&g).expect("edgeless graph is a DAG");
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn two_vertex_cycle_is_a_structural_error() {
        let g = directed(2, &[(0, 1), (1, 0)]);
        let err = topological_order(&g).expect_err("cycle must be rejected");

        assert_eq!(err.ordered, 0);
        assert_eq!(err.vertices, 2);
    }

    #[test]
    fn partial_cycle_reports_progress() {
        // 0 → 1 ⇄ 2: vertex 0 orders, the cycle stalls the queue.
        let g = directed(3, &[(0, 1), (1, 2), (2, 1)]);
        let err = topological_order(&g).expect_err("cycle must be rejected");

        assert_eq!(err.ordered, 1);
        assert_eq!(err.vertices, 3);
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let g = directed(1, &[(0, 0)]);
        assert!(topological_order(&g).is_err());
    }

    #[test]
    fn error_message_names_counts() {
        let g = directed(2, &[(0, 1), (1, 0)]);
        let err = topological_order(&g).expect_err("cycle");
        assert_eq!(
            err.to_string(),
            "graph is not acyclic: only 0 of 2 vertices could be ordered"
        );
    }

    #[test]
    fn probe_counts_pushes_and_pops() {
        let g = directed(3, &[(0, 1), (1, 2)]);
        let mut counters = Counters::default();
        let order =
            topological_order_with_probe(&g, &mut counters).expect("chain is a DAG");

        assert_eq!(order.len(), 3);
        assert_eq!(counters.queue_pushes, 3);
        assert_eq!(counters.queue_pops, 3);
        assert_eq!(counters.edges_seen, 2);
    }
}
