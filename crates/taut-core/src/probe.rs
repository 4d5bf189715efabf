//! Structured instrumentation sink for the analysis algorithms.
//!
//! # Overview
//!
//! The algorithms never print. Instead, each `_with_probe` entry point
//! emits [`ProbeEvent`]s to a caller-supplied [`Probe`], so instrumentation
//! is opt-in and the algorithms stay deterministic and headless.
//!
//! Two implementations ship here:
//!
//! - [`NoopProbe`] — used by the plain entry points; compiles down to
//!   nothing.
//! - [`Counters`] — tallies events per kind, mirroring the operation
//!   counters the CLI reports alongside timings.

use serde::Serialize;

/// One structured event emitted by an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeEvent {
    /// A vertex was entered by the SCC depth-first traversal.
    DfsVisit,
    /// An edge was examined.
    EdgeSeen,
    /// A vertex was enqueued by Kahn's algorithm.
    QueuePush,
    /// A vertex was dequeued by Kahn's algorithm.
    QueuePop,
    /// A distance was improved during DAG path relaxation.
    Relaxation,
    /// An SCC was sealed with the given member count.
    ComponentSealed {
        /// Number of vertices in the sealed component.
        size: usize,
    },
}

/// Sink for [`ProbeEvent`]s.
///
/// Implementations must be cheap: probes sit on the hot path of every
/// algorithm.
pub trait Probe {
    /// Record one event.
    fn record(&mut self, event: ProbeEvent);
}

/// Probe that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProbe;

impl Probe for NoopProbe {
    #[inline]
    fn record(&mut self, _event: ProbeEvent) {}
}

/// Probe that counts events per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
    /// Vertices entered by depth-first traversal.
    pub dfs_visits: u64,
    /// Edges examined.
    pub edges_seen: u64,
    /// Queue insertions (Kahn).
    pub queue_pushes: u64,
    /// Queue removals (Kahn).
    pub queue_pops: u64,
    /// Successful relaxations (path DP).
    pub relaxations: u64,
    /// Components sealed (Tarjan).
    pub components_sealed: u64,
}

impl Probe for Counters {
    #[inline]
    fn record(&mut self, event: ProbeEvent) {
        match event {
            ProbeEvent::DfsVisit => self.dfs_visits += 1,
            ProbeEvent::EdgeSeen => self.edges_seen += 1,
            ProbeEvent::QueuePush => self.queue_pushes += 1,
            ProbeEvent::QueuePop => self.queue_pops += 1,
            ProbeEvent::Relaxation => self.relaxations += 1,
            ProbeEvent::ComponentSealed { .. } => self.components_sealed += 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_tally_per_kind() {
        let mut c = Counters::default();
        c.record(ProbeEvent::DfsVisit);
        c.record(ProbeEvent::EdgeSeen);
        c.record(ProbeEvent::EdgeSeen);
        c.record(ProbeEvent::ComponentSealed { size: 3 });

        assert_eq!(c.dfs_visits, 1);
        assert_eq!(c.edges_seen, 2);
        assert_eq!(c.components_sealed, 1);
        assert_eq!(c.relaxations, 0);
    }

    #[test]
    fn noop_probe_accepts_everything() {
        let mut p = NoopProbe;
        p.record(ProbeEvent::QueuePush);
        p.record(ProbeEvent::ComponentSealed { size: 1 });
    }
}
