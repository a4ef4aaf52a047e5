//! Renderer-facing scene assembly.
//!
//! depviz stops at a serializable scene: node positions plus the visual
//! attributes (marker size, kind color, edge style) a renderer needs to
//! draw the graph. Actual drawing is someone else's job.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::graph::{DependencyGraph, EdgeKind, NodeKind};
use crate::layout::Position;

/// Marker size for a node: grows with connectivity.
pub fn marker_size(degree: usize) -> f64 {
    10.0 + 10.0 * degree as f64
}

/// Display color for a node kind. Kinds added later should fall back to
/// grey.
pub fn node_color(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Module => "skyblue",
        NodeKind::DataCsv => "green",
        NodeKind::DataJson => "orange",
    }
}

/// Display style (color, line width) for an edge kind.
pub fn edge_style(kind: EdgeKind) -> (&'static str, f64) {
    match kind {
        EdgeKind::Dependency => ("green", 2.0),
        EdgeKind::DataReference => ("blue", 1.0),
    }
}

/// A positioned, styled node ready to draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneNode {
    pub id: String,
    pub kind: NodeKind,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: String,
}

/// A styled edge ready to draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneEdge {
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
    pub color: String,
    pub width: f64,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<SceneEdge>,
}

impl Scene {
    /// Assemble a scene from a graph and its computed positions.
    pub fn assemble(graph: &DependencyGraph, positions: &BTreeMap<String, Position>) -> Scene {
        let nodes = graph
            .nodes()
            .map(|(idx, data)| {
                let pos = positions.get(&data.id).copied().unwrap_or_default();
                SceneNode {
                    id: data.id.clone(),
                    kind: data.kind,
                    x: pos.x,
                    y: pos.y,
                    size: marker_size(graph.degree(idx)),
                    color: node_color(data.kind).to_string(),
                }
            })
            .collect();

        let edges = graph
            .edges()
            .map(|(source, target, kind)| {
                let (color, width) = edge_style(kind);
                SceneEdge {
                    source: source.to_string(),
                    target: target.to_string(),
                    kind,
                    color: color.to_string(),
                    width,
                }
            })
            .collect();

        Scene { nodes, edges }
    }
}
