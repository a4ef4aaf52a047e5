//! Force-directed layout for the dependency graph.
//!
//! Two phases: a seeded spring embedding places nodes so that connected
//! nodes sit close together, then a pairwise relaxation pushes apart any
//! nodes whose visual disks still overlap. Positions are ephemeral: they
//! are computed fresh for one graph snapshot and never persisted.

mod overlap;
mod spring;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::graph::DependencyGraph;

/// A 2D position assigned to one node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Parameters for a layout run.
///
/// The seed is an explicit parameter rather than hidden global state, so
/// the same graph and parameters always produce the same layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    /// Iteration count used by both the embedding and the overlap pass.
    pub iterations: usize,
    /// Target edge length for the spring embedding.
    pub k: f64,
    /// Seed for the randomized initial placement.
    pub seed: u64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            iterations: 200,
            k: 0.5,
            seed: 0,
        }
    }
}

/// Visual disk radius for overlap testing: half the rendered marker size,
/// so better-connected nodes claim more space.
pub fn node_radius(degree: usize) -> f64 {
    (10.0 + 10.0 * degree as f64) / 2.0
}

/// Compute a position for every node in the graph.
///
/// The result maps each node id to exactly one position; the graph is not
/// mutated. An empty graph yields an empty map and a single isolated node
/// lands at the origin.
pub fn compute_layout(
    graph: &DependencyGraph,
    params: &LayoutParams,
) -> BTreeMap<String, Position> {
    let mut positions = spring::embed(graph, params);

    let radii: Vec<f64> = graph
        .nodes()
        .map(|(idx, _)| node_radius(graph.degree(idx)))
        .collect();
    overlap::resolve(&mut positions, &radii, params.iterations);

    debug!(
        nodes = positions.len(),
        iterations = params.iterations,
        "layout complete"
    );

    graph
        .nodes()
        .zip(positions)
        .map(|((_, data), pos)| (data.id.clone(), pos))
        .collect()
}
