//! Condensation: collapse each SCC into a single weighted node.
//!
//! # Overview
//!
//! Consumes the original graph plus an [`SccResult`] and produces a smaller
//! graph with one vertex per component. Edges whose endpoints share a
//! component contribute their weight to that component's internal weight;
//! edges crossing components become condensation edges.
//!
//! The output is acyclic by construction: component ids come from Tarjan's
//! reverse-topological emission order, so no sequence of cross-component
//! edges can return to its starting component.
//!
//! # Duplicate Cross-Component Edges
//!
//! At most one edge is kept per ordered component pair. The retained weight
//! is that of the **first** such edge encountered in insertion order; later
//! parallels are dropped, not aggregated. Callers that need min/max/sum
//! aggregation should pre-merge parallel edges before condensing.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::graph::Graph;
use crate::scc::SccResult;

/// The acyclic inter-component graph plus per-component internal weights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condensation {
    /// One vertex per component of the input, edges between distinct
    /// components only. Guaranteed acyclic.
    pub dag: Graph,
    /// Sum of the weights of all intra-component edges, per component.
    /// Components without internal edges (including isolated vertices)
    /// weigh zero.
    pub component_weight: Vec<f64>,
}

/// Build the condensation of `g` under the partition `scc`.
///
/// # Panics
///
/// Panics if `scc` was not produced from a graph with the same vertex
/// count as `g`.
#[must_use]
pub fn condense(g: &Graph, scc: &SccResult) -> Condensation {
    assert_eq!(
        scc.component_of.len(),
        g.len(),
        "scc result does not match graph size"
    );

    let compc = scc.component_count();
    let mut dag = Graph::directed(compc);
    let mut component_weight = vec![0.0_f64; compc];

    // Ordered component pairs already given an edge.
    let mut emitted: HashSet<(usize, usize)> = HashSet::new();

    for (u, v, w) in g.edges() {
        let cu = scc.component_of[u];
        let cv = scc.component_of[v];

        if cu == cv {
            component_weight[cu] += w;
        } else if emitted.insert((cu, cv)) {
            // First edge for this ordered pair wins; later parallels drop.
            dag.add_edge(cu, cv, w);
        }
    }

    debug!(
        components = compc,
        edges = dag.edge_count(),
        "condensation built"
    );

    Condensation {
        dag,
        component_weight,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::scc::strongly_connected_components;
    use crate::topo::topological_order;

    fn condense_edges(n: usize, edges: &[(usize, usize, f64)]) -> (Condensation, SccResult) {
        let mut g = Graph::directed(n);
        for &(u, v, w) in edges {
            g.add_edge(u, v, w);
        }
        let scc = strongly_connected_components(&g);
        (condense(&g, &scc), scc)
    }

    #[test]
    fn acyclic_graph_condenses_to_itself_shaped_dag() {
        let (cond, scc) = condense_edges(3, &[(0, 1, 2.0), (1, 2, 3.0)]);

        assert_eq!(cond.dag.len(), 3);
        assert_eq!(cond.dag.edge_count(), 2);
        assert_eq!(cond.component_weight, vec![0.0; 3]);

        // Every original cross edge survives under the component mapping.
        for (u, v, w) in [(0, 1, 2.0), (1, 2, 3.0)] {
            let cu = scc.component_of[u];
            let cv = scc.component_of[v];
            assert!(
                cond.dag
                    .neighbors(cu)
                    .iter()
                    .any(|e| e.to == cv && e.weight == w)
            );
        }
    }

    #[test]
    fn cycle_weights_sum_into_component() {
        // 0 → 1 → 2 → 0 with weights 1, 2, 3.
        let (cond, scc) = condense_edges(3, &[(0, 1, 1.0), (1, 2, 2.0), (2, 0, 3.0)]);

        assert_eq!(cond.dag.len(), 1);
        assert_eq!(cond.dag.edge_count(), 0);
        assert_eq!(cond.component_weight[scc.component_of[0]], 6.0);
    }

    #[test]
    fn self_loop_weight_counts_as_internal() {
        let (cond, scc) = condense_edges(2, &[(0, 0, 5.0), (0, 1, 1.0)]);

        assert_eq!(cond.component_weight[scc.component_of[0]], 5.0);
        assert_eq!(cond.component_weight[scc.component_of[1]], 0.0);
        assert_eq!(cond.dag.edge_count(), 1);
    }

    #[test]
    fn duplicate_cross_edges_keep_first_weight() {
        // Two components {0,1} and {2,3}; three parallel bridges in
        // insertion order 7.0, 1.0, 9.0 — the first survives.
        let (cond, scc) = condense_edges(
            4,
            &[
                (0, 1, 1.0),
                (1, 0, 1.0),
                (2, 3, 1.0),
                (3, 2, 1.0),
                (0, 2, 7.0),
                (1, 3, 1.5),
                (0, 3, 9.0),
            ],
        );

        let cu = scc.component_of[0];
        let cv = scc.component_of[2];
        let bridges: Vec<f64> = cond
            .dag
            .neighbors(cu)
            .iter()
            .filter(|e| e.to == cv)
            .map(|e| e.weight)
            .collect();

        assert_eq!(bridges, vec![7.0], "first-seen bridge weight retained");
    }

    #[test]
    fn isolated_vertex_becomes_zero_weight_component() {
        let (cond, _) = condense_edges(3, &[(0, 1, 4.0)]);

        assert_eq!(cond.dag.len(), 3);
        assert!(cond.component_weight.iter().all(|&w| w == 0.0));
    }

    #[test]
    fn condensation_is_always_acyclic() {
        // A messy graph with two cycles and bridges.
        let (cond, _) = condense_edges(
            6,
            &[
                (0, 1, 1.0),
                (1, 0, 1.0),
                (1, 2, 1.0),
                (2, 3, 1.0),
                (3, 4, 1.0),
                (4, 2, 1.0),
                (4, 5, 1.0),
            ],
        );

        assert!(
            topological_order(&cond.dag).is_ok(),
            "condensation must topo-sort cleanly"
        );
    }

    #[test]
    #[should_panic(expected = "scc result does not match graph size")]
    fn mismatched_scc_result_panics() {
        let g = Graph::directed(3);
        let scc = strongly_connected_components(&Graph::directed(2));
        let _ = condense(&g, &scc);
    }
}
