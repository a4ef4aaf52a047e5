//! The core graph engine for depviz.
//!
//! Uses petgraph to store module and data-file relationships and
//! provides the lookups the layout and scene stages need.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::types::*;

/// The dependency graph — directed, with typed nodes and typed edges.
///
/// Node identifiers are strings (dotted module names or data-file paths).
/// At most one edge exists per ordered (source, target) pair; re-adding
/// an edge overwrites its kind instead of creating a multi-edge.
pub struct DependencyGraph {
    /// The directed graph storing relationships.
    graph: DiGraph<NodeData, EdgeData>,
    /// Index: node id -> node index.
    id_index: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            id_index: HashMap::new(),
        }
    }

    // ─── Node Operations ────────────────────────────────────────

    /// Add a node to the graph. Returns the node index.
    ///
    /// Idempotent: if a node with this id already exists its index is
    /// returned and the existing kind is kept.
    pub fn add_node(&mut self, id: &str, kind: NodeKind) -> NodeIndex {
        if let Some(&idx) = self.id_index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(NodeData::new(id, kind));
        self.id_index.insert(id.to_string(), idx);
        idx
    }

    /// Look up a node index by id.
    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.id_index.get(id).copied()
    }

    /// Whether a node with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.id_index.contains_key(id)
    }

    // ─── Edge Operations ────────────────────────────────────────

    /// Add an edge between two nodes.
    ///
    /// If an edge already exists for this (source, target) pair its kind
    /// is overwritten; the pair never holds more than one edge.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, kind: EdgeKind) {
        self.graph.update_edge(from, to, EdgeData::new(kind));
    }

    /// The kind of the edge between two ids, if one exists.
    pub fn edge_kind(&self, source: &str, target: &str) -> Option<EdgeKind> {
        let s = self.index_of(source)?;
        let t = self.index_of(target)?;
        self.graph.find_edge(s, t).map(|e| self.graph[e].kind)
    }

    // ─── Queries ────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of incident edges (in-degree + out-degree).
    ///
    /// Recomputed from the graph on every call; degree is derived data
    /// and never stored on the node.
    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Outgoing).count()
            + self.graph.edges_directed(idx, Direction::Incoming).count()
    }

    /// Degree looked up by node id.
    pub fn degree_of(&self, id: &str) -> Option<usize> {
        self.index_of(id).map(|idx| self.degree(idx))
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &NodeData)> + '_ {
        self.graph.node_indices().map(|idx| (idx, &self.graph[idx]))
    }

    /// All edges as (source id, target id, kind).
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, EdgeKind)> + '_ {
        self.graph.edge_references().map(|e| {
            (
                self.graph[e.source()].id.as_str(),
                self.graph[e.target()].id.as_str(),
                e.weight().kind,
            )
        })
    }

    /// Edge endpoints as positional indices, matching `nodes()` order.
    ///
    /// This is the form the layout engine consumes.
    pub fn edge_endpoints(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
    }

    // ─── Stats ──────────────────────────────────────────────────

    /// Get graph statistics.
    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            total_nodes: self.graph.node_count(),
            total_edges: self.graph.edge_count(),
            ..Default::default()
        };
        for node in self.graph.node_weights() {
            match node.kind {
                NodeKind::Module => stats.module_count += 1,
                NodeKind::DataCsv => stats.data_csv_count += 1,
                NodeKind::DataJson => stats.data_json_count += 1,
            }
        }
        stats
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about the graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub module_count: usize,
    pub data_csv_count: usize,
    pub data_json_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = DependencyGraph::new();
        let stats = graph.stats();
        assert_eq!(stats.total_nodes, 0);
        assert_eq!(stats.total_edges, 0);
    }

    #[test]
    fn test_add_node_idempotent() {
        let mut graph = DependencyGraph::new();
        let a = graph.add_node("app", NodeKind::Module);
        let b = graph.add_node("app", NodeKind::Module);
        assert_eq!(a, b);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_duplicate_edge_overwrites_kind() {
        let mut graph = DependencyGraph::new();
        let a = graph.add_node("app", NodeKind::Module);
        let b = graph.add_node("util", NodeKind::Module);

        graph.add_edge(a, b, EdgeKind::Dependency);
        graph.add_edge(a, b, EdgeKind::DataReference);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_kind("app", "util"), Some(EdgeKind::DataReference));
    }

    #[test]
    fn test_degree_counts_both_directions() {
        let mut graph = DependencyGraph::new();
        let a = graph.add_node("a", NodeKind::Module);
        let b = graph.add_node("b", NodeKind::Module);
        let c = graph.add_node("c", NodeKind::Module);

        graph.add_edge(a, b, EdgeKind::Dependency);
        graph.add_edge(c, a, EdgeKind::Dependency);

        assert_eq!(graph.degree(a), 2);
        assert_eq!(graph.degree(b), 1);
        assert_eq!(graph.degree(c), 1);
        assert_eq!(graph.degree_of("a"), Some(2));
        assert_eq!(graph.degree_of("missing"), None);
    }

    #[test]
    fn test_stats_by_kind() {
        let mut graph = DependencyGraph::new();
        let a = graph.add_node("a", NodeKind::Module);
        let csv = graph.add_node("data.csv", NodeKind::DataCsv);
        graph.add_node("conf.json", NodeKind::DataJson);
        graph.add_edge(a, csv, EdgeKind::DataReference);

        let stats = graph.stats();
        assert_eq!(stats.total_nodes, 3);
        assert_eq!(stats.total_edges, 1);
        assert_eq!(stats.module_count, 1);
        assert_eq!(stats.data_csv_count, 1);
        assert_eq!(stats.data_json_count, 1);
    }
}
