//! Single-source path computations over acyclic graphs.
//!
//! # Overview
//!
//! Both computations run one relaxation pass over the vertices in
//! topological order, so each vertex's distance is final the first time it
//! is processed — O(V + E), no revisiting:
//!
//! - [`shortest_paths`] minimizes `dist[u] + w` with a `+∞` unreached
//!   sentinel.
//! - [`longest_paths`] maximizes `dist[u] + w + node_weight[v]` with a
//!   `-∞` sentinel; the optional node weights score condensation
//!   components by their internal aggregate weight.
//!
//! Acyclicity is verified by computing the topological order up front; a
//! cyclic input propagates [`CycleError`](crate::topo::CycleError) rather
//! than producing a meaningless partial result.
//!
//! Unreachability is not an error: unreached vertices keep their infinite
//! sentinel and an absent predecessor, and [`PathResult::path_to`] returns
//! an empty sequence for them.

mod longest;
mod shortest;

pub use longest::{longest_paths, longest_paths_with_probe};
pub use shortest::{shortest_paths, shortest_paths_with_probe};

use serde::Serialize;

/// Distances and predecessor links from a single source vertex.
///
/// Distance and predecessor maps are vertex-index-addressed arrays —
/// vertex counts are fixed up front, so there is no reason to pay for a
/// hash map. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// The query's source vertex.
    pub source: usize,
    /// Best-known distance per vertex; `±∞` marks unreached vertices
    /// (`+∞` for shortest-path queries, `-∞` for longest-path queries).
    pub dist: Vec<f64>,
    /// Predecessor per vertex on its best path; `None` for the source and
    /// for unreached vertices.
    pub predecessor: Vec<Option<usize>>,
}

impl PathResult {
    /// `true` if `v` was reached from the source.
    ///
    /// # Panics
    ///
    /// Panics if `v` is out of range.
    #[must_use]
    pub fn is_reached(&self, v: usize) -> bool {
        self.dist[v].is_finite()
    }

    /// Reconstruct the path from the source to `target`.
    ///
    /// Walks predecessor links backwards and reverses the result. Returns
    /// an empty sequence when `target` is unreached — never a partial
    /// path.
    ///
    /// # Panics
    ///
    /// Panics if `target` is out of range.
    #[must_use]
    pub fn path_to(&self, target: usize) -> Vec<usize> {
        assert!(
            target < self.dist.len(),
            "target vertex {target} out of range (n = {})",
            self.dist.len()
        );
        if !self.is_reached(target) {
            return Vec::new();
        }

        let mut path = vec![target];
        let mut cursor = target;
        while let Some(prev) = self.predecessor[cursor] {
            path.push(prev);
            cursor = prev;
        }
        path.reverse();
        path
    }

    /// The reached vertex with the maximum finite distance, if any.
    ///
    /// Ties break to the lowest vertex index (first seen in the scan).
    /// The longest-path query uses this to identify the critical path's
    /// endpoint.
    #[must_use]
    pub fn farthest(&self) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (v, &d) in self.dist.iter().enumerate() {
            if d.is_finite() && best.is_none_or(|(_, bd)| d > bd) {
                best = Some((v, d));
            }
        }
        best
    }
}

// ---------------------------------------------------------------------------
// Tests (shared PathResult behavior)
// ---------------------------------------------------------------------------
