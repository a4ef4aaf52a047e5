//! Core types for the depviz dependency graph.
//!
//! Defines node kinds, edge kinds, and the data structures that
//! represent modules, data files, and their relationships.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a node in the dependency graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A Python module (one source file).
    Module,
    /// A referenced CSV data file.
    DataCsv,
    /// A referenced JSON data file.
    DataJson,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Module => write!(f, "module"),
            NodeKind::DataCsv => write!(f, "data_csv"),
            NodeKind::DataJson => write!(f, "data_json"),
        }
    }
}

/// The kind of an edge (relationship) in the dependency graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Module imports another module (Module -> Module).
    Dependency,
    /// Module reads or writes a data file (Module -> DataCsv/DataJson).
    DataReference,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Dependency => write!(f, "dependency"),
            EdgeKind::DataReference => write!(f, "data_reference"),
        }
    }
}

/// Data stored in a graph node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeData {
    /// Unique identifier: a dotted module name or a data file path.
    pub id: String,
    /// What kind of node this is.
    pub kind: NodeKind,
}

impl NodeData {
    pub fn new(id: &str, kind: NodeKind) -> Self {
        Self {
            id: id.to_string(),
            kind,
        }
    }
}

/// Data stored on a graph edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeData {
    /// The kind of relationship.
    pub kind: EdgeKind,
}

impl EdgeData {
    pub fn new(kind: EdgeKind) -> Self {
        Self { kind }
    }
}

/// Facts discovered for one module by the scanner.
///
/// This is the intermediate representation between scanning and graph
/// construction. The lists are best-effort output of pattern matching
/// over source text; downstream code must not assume they are exhaustive
/// or accurate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleFacts {
    /// Names of modules this module imports.
    pub dependencies: Vec<String>,
    /// Paths of CSV files this module references.
    pub csv_refs: Vec<String>,
    /// Paths of JSON files this module references.
    pub json_refs: Vec<String>,
}
