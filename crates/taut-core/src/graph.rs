//! Adjacency-list container for weighted directed (or undirected) graphs.
//!
//! # Overview
//!
//! Vertices are `0..n` with `n` fixed at construction. Each vertex owns an
//! ordered list of outgoing [`Edge`]s; insertion order is preserved and
//! determines traversal order downstream (it never affects correctness).
//! Undirected graphs mirror every inserted edge.
//!
//! There is no edge removal and no resize — builders construct a graph once
//! and hand it to the analysis stages read-only.

#![allow(clippy::module_name_repetitions)]

use serde::{Deserialize, Serialize};

/// A single outgoing edge: target vertex and weight.
///
/// Weights are arbitrary finite `f64`s (fractional values are fine).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Target vertex index, in `[0, n)`.
    pub to: usize,
    /// Edge weight.
    pub weight: f64,
}

/// Weighted graph over vertices `0..n` in adjacency-list form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    n: usize,
    directed: bool,
    adj: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create a graph with `n` vertices and no edges.
    #[must_use]
    pub fn new(n: usize, directed: bool) -> Self {
        Self {
            n,
            directed,
            adj: vec![Vec::new(); n],
        }
    }

    /// Create a directed graph with `n` vertices.
    #[must_use]
    pub fn directed(n: usize) -> Self {
        Self::new(n, true)
    }

    /// Create an undirected graph with `n` vertices.
    #[must_use]
    pub fn undirected(n: usize) -> Self {
        Self::new(n, false)
    }

    /// Insert the edge `u → v` with weight `w`.
    ///
    /// On an undirected graph the mirror edge `v → u` is inserted as well.
    /// Self-loops and parallel edges are allowed.
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is out of range — that is a contract violation
    /// by the caller, not a recoverable condition.
    pub fn add_edge(&mut self, u: usize, v: usize, w: f64) {
        assert!(u < self.n, "source vertex {u} out of range (n = {})", self.n);
        assert!(v < self.n, "target vertex {v} out of range (n = {})", self.n);
        self.adj[u].push(Edge { to: v, weight: w });
        if !self.directed {
            self.adj[v].push(Edge { to: u, weight: w });
        }
    }

    /// Number of vertices.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.n
    }

    /// `true` if the graph has no vertices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// `true` if edges are one-way.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    /// Outgoing edges of `u`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `u` is out of range.
    #[must_use]
    pub fn neighbors(&self, u: usize) -> &[Edge] {
        &self.adj[u]
    }

    /// Total number of stored edges (mirrored edges count twice).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// Iterate all stored edges as `(from, to, weight)` triples.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(u, edges)| edges.iter().map(move |e| (u, e.to, e.weight)))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
