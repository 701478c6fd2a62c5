//! Transport graph: locations and typed edges.
//!
//! The graph is built once at startup and then shared read-only (behind an
//! `Arc`) by the game state, views, and agents. Edges are directed;
//! `connect` adds both directions for the usual undirected board.
//!
//! ## Usage
//!
//! ```
//! use scotland_yard::core::{Location, Transport, TransportGraph};
//!
//! let mut graph = TransportGraph::new();
//! graph.connect(Location(1), Location(2), Transport::Taxi);
//! graph.connect(Location(2), Location(3), Transport::Bus);
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edges_from(Location(2)).len(), 2);
//! assert!(graph.edges_from(Location(99)).is_empty());
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ticket::Transport;

/// A node of the transport graph.
///
/// Real board locations are positive. `Location::HIDDEN` (0) stands in for
/// Mr. X's position before it has ever been revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location(pub u32);

impl Location {
    /// Placeholder for a location nobody has seen yet.
    pub const HIDDEN: Location = Location(0);

    /// Get the raw node number.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is the hidden placeholder.
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for Location {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Location({})", self.0)
    }
}

/// A directed, transport-typed edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: Location,
    pub destination: Location,
    pub transport: Transport,
}

impl Edge {
    #[must_use]
    pub const fn new(source: Location, destination: Location, transport: Transport) -> Self {
        Self {
            source,
            destination,
            transport,
        }
    }
}

/// Static weighted graph of the board.
///
/// Serializes as a flat node and edge list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GraphRepr", into = "GraphRepr")]
pub struct TransportGraph {
    /// Nodes in insertion order.
    nodes: Vec<Location>,

    /// Outgoing edges per node. Most board nodes have fewer than 8.
    adjacency: FxHashMap<Location, SmallVec<[Edge; 8]>>,
}

impl TransportGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from undirected `(a, b, transport)` links.
    pub fn from_links(links: impl IntoIterator<Item = (u32, u32, Transport)>) -> Self {
        let mut graph = Self::new();
        for (a, b, transport) in links {
            graph.connect(Location(a), Location(b), transport);
        }
        graph
    }

    /// Add a node. Returns `false` if it was already present.
    pub fn add_node(&mut self, location: Location) -> bool {
        if self.adjacency.contains_key(&location) {
            return false;
        }
        self.adjacency.insert(location, SmallVec::new());
        self.nodes.push(location);
        true
    }

    /// Add a directed edge, creating its endpoints if needed.
    pub fn add_edge(&mut self, edge: Edge) {
        self.add_node(edge.source);
        self.add_node(edge.destination);
        if let Some(edges) = self.adjacency.get_mut(&edge.source) {
            edges.push(edge);
        }
    }

    /// Add an edge in both directions.
    pub fn connect(&mut self, a: Location, b: Location, transport: Transport) {
        self.add_edge(Edge::new(a, b, transport));
        self.add_edge(Edge::new(b, a, transport));
    }

    /// Check if a node exists.
    #[must_use]
    pub fn contains(&self, location: Location) -> bool {
        self.adjacency.contains_key(&location)
    }

    /// Outgoing edges of a node. Unknown nodes have none.
    #[must_use]
    pub fn edges_from(&self, location: Location) -> &[Edge] {
        self.adjacency
            .get(&location)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    /// Distinct neighbouring nodes, in edge order.
    pub fn neighbours(&self, location: Location) -> SmallVec<[Location; 8]> {
        let mut out: SmallVec<[Location; 8]> = SmallVec::new();
        for edge in self.edges_from(location) {
            if !out.contains(&edge.destination) {
                out.push(edge.destination);
            }
        }
        out
    }

    /// All nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[Location] {
        &self.nodes
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Serialize, Deserialize)]
struct GraphRepr {
    nodes: Vec<Location>,
    edges: Vec<Edge>,
}

impl From<TransportGraph> for GraphRepr {
    fn from(graph: TransportGraph) -> Self {
        let edges = graph
            .nodes
            .iter()
            .flat_map(|&node| graph.edges_from(node).iter().copied())
            .collect();
        Self {
            nodes: graph.nodes,
            edges,
        }
    }
}

impl From<GraphRepr> for TransportGraph {
    fn from(repr: GraphRepr) -> Self {
        let mut graph = TransportGraph::new();
        for node in repr.nodes {
            graph.add_node(node);
        }
        for edge in repr.edges {
            graph.add_edge(edge);
        }
        graph
    }
}
