//! Breadth-first distances over the transport graph.
//!
//! Distances count edges regardless of transport or ticket cost.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::core::{Location, TransportGraph};

/// Hop count from `source` to every reachable location, `source` included.
#[must_use]
pub fn distances_from(graph: &TransportGraph, source: Location) -> FxHashMap<Location, u32> {
    let mut distances = FxHashMap::default();
    if !graph.contains(source) {
        return distances;
    }

    let mut queue = VecDeque::new();
    distances.insert(source, 0);
    queue.push_back((source, 0));

    while let Some((current, distance)) = queue.pop_front() {
        for neighbour in graph.neighbours(current) {
            if !distances.contains_key(&neighbour) {
                distances.insert(neighbour, distance + 1);
                queue.push_back((neighbour, distance + 1));
            }
        }
    }
    distances
}

/// Distances from one location to a group of others.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DistanceSummary {
    /// Closest reachable target, if any.
    pub shortest: Option<u32>,
    /// Sum over reachable targets.
    pub total: u32,
    pub reachable: usize,
}

impl DistanceSummary {
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        (self.reachable > 0).then(|| f64::from(self.total) / self.reachable as f64)
    }
}

/// Summarize distances from `from` to each of `targets`. Unreachable
/// targets are left out.
#[must_use]
pub fn summarize(graph: &TransportGraph, from: Location, targets: &[Location]) -> DistanceSummary {
    let distances = distances_from(graph, from);
    targets
        .iter()
        .filter_map(|t| distances.get(t).copied())
        .fold(DistanceSummary::default(), |acc, d| DistanceSummary {
            shortest: Some(acc.shortest.map_or(d, |s| s.min(d))),
            total: acc.total + d,
            reachable: acc.reachable + 1,
        })
}
