#![forbid(unsafe_code)]
//! taut-core: dependency-graph analysis.
//!
//! # Overview
//!
//! A four-stage pipeline over weighted directed graphs:
//!
//! ```text
//! Graph (may contain cycles)
//!        ↓  scc::strongly_connected_components()
//! SccResult (partition into SCCs, reverse-topological emission order)
//!        ↓  condense::condense()
//! Condensation (acyclic DAG of components + per-component weights)
//!        ↓  topo::topological_order()
//! Vec<usize> (one valid linear extension)
//!        ↓  paths::{shortest_paths, longest_paths}
//! PathResult (distances + predecessor links)
//! ```
//!
//! [`pipeline::analyze`] runs all stages and identifies the critical path.
//! Each stage is a pure function of its inputs; nothing here reads files,
//! prints, or blocks.
//!
//! # Conventions
//!
//! - **Errors**: module-local `thiserror` enums; structural errors (cyclic
//!   input to a stage requiring acyclicity) are `Result`s, contract
//!   violations (out-of-range vertex indices) panic.
//! - **Logging**: `tracing` macros (`debug!`, `trace!`); algorithms never
//!   print. Progress instrumentation goes through the [`probe::Probe`] sink.

pub mod condense;
pub mod graph;
pub mod paths;
pub mod pipeline;
pub mod probe;
pub mod scc;
pub mod stats;
pub mod topo;

pub use condense::{Condensation, condense};
pub use graph::{Edge, Graph};
pub use paths::{PathResult, longest_paths, shortest_paths};
pub use pipeline::{Analysis, CriticalPath, StageCounters, analyze, analyze_with_counters};
pub use probe::{Counters, NoopProbe, Probe, ProbeEvent};
pub use scc::{SccResult, strongly_connected_components};
pub use stats::GraphStats;
pub use topo::{CycleError, topological_order};
