//! Tarjan's strongly connected components, iteratively.
//!
//! # Overview
//!
//! Partitions the vertices of a directed graph into maximal strongly
//! connected components in O(V + E) with a single depth-first traversal
//! carrying discovery-time and low-link bookkeeping.
//!
//! # Algorithm
//!
//! Roots are tried in index order. Each visited vertex gets a strictly
//! increasing discovery time, an initially equal low-link, and a slot on
//! the candidate stack. Edges to undiscovered vertices descend; on return
//! the child's low-link is folded into the parent's. Edges to vertices
//! still on the candidate stack lower the low-link to that vertex's
//! discovery time (back edge); edges to vertices already off the stack
//! belong to a sealed component and are ignored. A vertex whose low-link
//! equals its own discovery time is a component root: the candidate stack
//! is popped down to and including it, and the component is sealed.
//!
//! The recursion is expressed as an explicit stack of
//! `(vertex, edge cursor)` frames, so arbitrarily deep graphs cannot
//! overflow the call stack.
//!
//! # Emission Order
//!
//! Components are sealed leaf-first: a component is emitted only after
//! every component it has an edge into. Component ids therefore form a
//! **reverse topological** order of the condensation, which
//! [`crate::condense`] relies on.

#![allow(clippy::module_name_repetitions)]

use serde::Serialize;
use tracing::{debug, instrument};

use crate::graph::Graph;
use crate::probe::{NoopProbe, Probe, ProbeEvent};

/// Sentinel discovery time for vertices not yet visited.
const UNVISITED: usize = usize::MAX;

/// Partition of a graph's vertices into strongly connected components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SccResult {
    /// Components in emission (reverse topological) order; each holds its
    /// member vertices in the order they were popped off the candidate
    /// stack.
    pub components: Vec<Vec<usize>>,
    /// Component id of every vertex, indexed by vertex.
    pub component_of: Vec<usize>,
}

impl SccResult {
    /// Number of components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Number of components with more than one member (dependency cycles).
    #[must_use]
    pub fn cycle_count(&self) -> usize {
        self.components.iter().filter(|c| c.len() > 1).count()
    }

    /// `true` if `u` and `v` are mutually reachable.
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is out of range.
    #[must_use]
    pub fn same_component(&self, u: usize, v: usize) -> bool {
        self.component_of[u] == self.component_of[v]
    }
}

/// Decompose `g` into strongly connected components.
///
/// Total over every graph with valid indices: self-loops keep a vertex in
/// its own singleton component, multi-edges are harmless.
#[must_use]
pub fn strongly_connected_components(g: &Graph) -> SccResult {
    strongly_connected_components_with_probe(g, &mut NoopProbe)
}

/// [`strongly_connected_components`] with an instrumentation sink.
#[must_use]
#[instrument(skip_all, fields(n = g.len()))]
pub fn strongly_connected_components_with_probe(g: &Graph, probe: &mut dyn Probe) -> SccResult {
    let n = g.len();
    let mut disc = vec![UNVISITED; n];
    let mut low = vec![0_usize; n];
    let mut on_stack = vec![false; n];
    let mut candidates: Vec<usize> = Vec::new();

    let mut components: Vec<Vec<usize>> = Vec::new();
    let mut component_of = vec![0_usize; n];
    let mut time = 0_usize;

    // Explicit DFS frames: (vertex, index of the next edge to examine).
    let mut frames: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if disc[root] != UNVISITED {
            continue;
        }

        disc[root] = time;
        low[root] = time;
        time += 1;
        candidates.push(root);
        on_stack[root] = true;
        probe.record(ProbeEvent::DfsVisit);
        frames.push((root, 0));

        while let Some(frame) = frames.last_mut() {
            let u = frame.0;

            if frame.1 < g.neighbors(u).len() {
                let v = g.neighbors(u)[frame.1].to;
                frame.1 += 1;
                probe.record(ProbeEvent::EdgeSeen);

                if disc[v] == UNVISITED {
                    // Tree edge: descend.
                    disc[v] = time;
                    low[v] = time;
                    time += 1;
                    candidates.push(v);
                    on_stack[v] = true;
                    probe.record(ProbeEvent::DfsVisit);
                    frames.push((v, 0));
                } else if on_stack[v] {
                    // Back edge into the current open region.
                    low[u] = low[u].min(disc[v]);
                }
                // Otherwise v sits in an already-sealed component: ignore.
            } else {
                // All edges of u examined: close the frame.
                frames.pop();

                if let Some(parent) = frames.last() {
                    low[parent.0] = low[parent.0].min(low[u]);
                }

                if low[u] == disc[u] {
                    // u is the root of a finished component.
                    let id = components.len();
                    let mut members = Vec::new();
                    loop {
                        let x = candidates.pop().expect("candidate stack holds u");
                        on_stack[x] = false;
                        component_of[x] = id;
                        members.push(x);
                        if x == u {
                            break;
                        }
                    }
                    probe.record(ProbeEvent::ComponentSealed {
                        size: members.len(),
                    });
                    components.push(members);
                }
            }
        }
    }

    debug!(components = components.len(), "scc decomposition complete");

    SccResult {
        components,
        component_of,
    }
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

    // -----------------------------------------------------------------------
    // Partition shape
    // -----------------------------------------------------------------------

    #[test]
    fn empty_graph_has_no_components() {
        let res = strongly_connected_components(&Graph::directed(0));
        assert!(res.components.is_empty());
        assert!(res.component_of.is_empty());
    }

    #[test]
    fn edgeless_vertices_are_singletons() {
        let res = strongly_connected_components(&Graph::directed(4));
        assert_eq!(res.component_count(), 4);
        for comp in &res.components {
            assert_eq!(comp.len(), 1);
        }
    }

    #[test]
    fn every_vertex_in_exactly_one_component() {
        let g = directed(6, &[(0, 1), (1, 0), (1, 2), (3, 4), (4, 3), (4, 5)]);
        let res = strongly_connected_components(&g);

        let mut seen = vec![0_usize; 6];
        for comp in &res.components {
            for &v in comp {
                seen[v] += 1;
            }
        }
        assert_eq!(seen, vec![1; 6], "partition covers each vertex once");

        for (v, &c) in res.component_of.iter().enumerate() {
            assert!(res.components[c].contains(&v));
        }
    }

    // -----------------------------------------------------------------------
    // Cycle collapsing
    // -----------------------------------------------------------------------

    #[test]
    fn three_cycle_is_one_component() {
        let g = directed(3, &[(0, 1), (1, 2), (2, 0)]);
        let res = strongly_connected_components(&g);

        assert_eq!(res.component_count(), 1);
        assert_eq!(res.components[0].len(), 3);
        assert!(res.same_component(0, 2));
    }

    #[test]
    fn mutual_pair_plus_singletons() {
        // 0 ⇄ 1, 2 → 3
        let g = directed(4, &[(0, 1), (1, 0), (2, 3)]);
        let res = strongly_connected_components(&g);

        assert_eq!(res.component_count(), 3);
        assert!(res.same_component(0, 1));
        assert!(!res.same_component(1, 2));
        assert!(!res.same_component(2, 3));
    }

    #[test]
    fn one_way_reachability_does_not_merge() {
        // 0 → 1 → 2: reachable one way only.
        let g = directed(3, &[(0, 1), (1, 2)]);
        let res = strongly_connected_components(&g);

        assert_eq!(res.component_count(), 3);
        assert!(!res.same_component(0, 1));
        assert!(!res.same_component(1, 2));
    }

    #[test]
    fn self_loop_stays_singleton() {
        let g = directed(2, &[(0, 0), (0, 1)]);
        let res = strongly_connected_components(&g);

        assert_eq!(res.component_count(), 2);
        assert_eq!(res.components[res.component_of[0]], vec![0]);
    }

    #[test]
    fn multi_edges_are_harmless() {
        let g = directed(2, &[(0, 1), (0, 1), (1, 0)]);
        let res = strongly_connected_components(&g);
        assert_eq!(res.component_count(), 1);
    }

    // -----------------------------------------------------------------------
    // Emission order
    // -----------------------------------------------------------------------

    #[test]
    fn emission_order_is_reverse_topological() {
        // Chain 0 → 1 → 2: the sink's component must be sealed first, so
        // every cross-component edge points at a lower component id.
        let g = directed(3, &[(0, 1), (1, 2)]);
        let res = strongly_connected_components(&g);

        for (u, v, _) in g.edges() {
            if res.component_of[u] != res.component_of[v] {
                assert!(
                    res.component_of[u] > res.component_of[v],
                    "edge {u}→{v} must point at an earlier-sealed component"
                );
            }
        }
    }

    #[test]
    fn two_cycles_bridge_respects_emission_order() {
        // (0 ⇄ 1) → (2 ⇄ 3): downstream cycle sealed first.
        let g = directed(4, &[(0, 1), (1, 0), (1, 2), (2, 3), (3, 2)]);
        let res = strongly_connected_components(&g);

        assert_eq!(res.component_count(), 2);
        assert!(res.component_of[1] > res.component_of[2]);
    }

    // -----------------------------------------------------------------------
    // Deep graphs (iterative traversal)
    // -----------------------------------------------------------------------

    #[test]
    fn long_chain_does_not_overflow() {
        let n = 200_000;
        let mut g = Graph::directed(n);
        for v in 1..n {
            g.add_edge(v - 1, v, 1.0);
        }
        let res = strongly_connected_components(&g);
        assert_eq!(res.component_count(), n);
    }

    #[test]
    fn long_cycle_is_one_component() {
        let n = 100_000;
        let mut g = Graph::directed(n);
        for v in 0..n {
            g.add_edge(v, (v + 1) % n, 1.0);
        }
        let res = strongly_connected_components(&g);
        assert_eq!(res.component_count(), 1);
    }

    // -----------------------------------------------------------------------
    // Probe events
    // -----------------------------------------------------------------------

    #[test]
    fn probe_counts_visits_edges_and_seals() {
        let g = directed(3, &[(0, 1), (1, 2), (2, 0)]);
        let mut counters = Counters::default();
        let res = strongly_connected_components_with_probe(&g, &mut counters);

        assert_eq!(res.component_count(), 1);
        assert_eq!(counters.dfs_visits, 3);
        assert_eq!(counters.edges_seen, 3);
        assert_eq!(counters.components_sealed, 1);
    }
}
