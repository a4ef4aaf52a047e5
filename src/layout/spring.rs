//! Phase 1: seeded spring embedding.
//!
//! Fruchterman-Reingold force simulation: every pair of nodes repels with
//! strength k²/d, adjacent nodes attract with d²/k, and per-iteration
//! movement is capped by a linearly cooling temperature. The initial
//! placement is drawn from a seeded RNG so runs are reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{LayoutParams, Position};
use crate::graph::DependencyGraph;

/// Distances are clamped to this floor before dividing, so coincident or
/// isolated nodes never produce a division by zero.
const MIN_DIST: f64 = 0.01;

/// Embed the graph in the plane. Returns one position per node, in
/// `nodes()` order.
pub(super) fn embed(graph: &DependencyGraph, params: &LayoutParams) -> Vec<Position> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        // No forces apply to a single node; pin it to the origin.
        return vec![Position::default()];
    }

    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut pos: Vec<Position> = (0..n)
        .map(|_| Position {
            x: rng.gen::<f64>(),
            y: rng.gen::<f64>(),
        })
        .collect();

    let edges: Vec<(usize, usize)> = graph.edge_endpoints().collect();
    let k = if params.k > 0.0 {
        params.k
    } else {
        1.0 / (n as f64).sqrt()
    };

    // Linear cooling from 10% of the unit frame down to zero.
    let mut t = 0.1;
    let dt = t / (params.iterations as f64 + 1.0);

    for _ in 0..params.iterations {
        let mut disp = vec![(0.0_f64, 0.0_f64); n];

        // Repulsion between all pairs.
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = pos[i].x - pos[j].x;
                let dy = pos[i].y - pos[j].y;
                let d = (dx * dx + dy * dy).sqrt().max(MIN_DIST);
                let f = k * k / d;
                let (fx, fy) = (dx / d * f, dy / d * f);
                disp[i].0 += fx;
                disp[i].1 += fy;
                disp[j].0 -= fx;
                disp[j].1 -= fy;
            }
        }

        // Attraction along edges.
        for &(a, b) in &edges {
            if a == b {
                continue;
            }
            let dx = pos[a].x - pos[b].x;
            let dy = pos[a].y - pos[b].y;
            let d = (dx * dx + dy * dy).sqrt().max(MIN_DIST);
            let f = d * d / k;
            let (fx, fy) = (dx / d * f, dy / d * f);
            disp[a].0 -= fx;
            disp[a].1 -= fy;
            disp[b].0 += fx;
            disp[b].1 += fy;
        }

        // Cap movement at the current temperature.
        for i in 0..n {
            let (dx, dy) = disp[i];
            let len = (dx * dx + dy * dy).sqrt().max(MIN_DIST);
            let step = len.min(t);
            pos[i].x += dx / len * step;
            pos[i].y += dy / len * step;
        }
        t -= dt;
    }

    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build_graph, ModuleFacts};
    use std::collections::BTreeMap;

    fn pair_graph() -> DependencyGraph {
        let mut facts = BTreeMap::new();
        facts.insert(
            "a".to_string(),
            ModuleFacts {
                dependencies: vec!["b".to_string()],
                ..Default::default()
            },
        );
        facts.insert("b".to_string(), ModuleFacts::default());
        facts.insert("loner".to_string(), ModuleFacts::default());
        build_graph(&facts)
    }

    #[test]
    fn test_embed_is_deterministic() {
        let graph = pair_graph();
        let params = LayoutParams {
            seed: 42,
            ..Default::default()
        };
        assert_eq!(embed(&graph, &params), embed(&graph, &params));
    }

    #[test]
    fn test_isolated_node_does_not_produce_nan() {
        let graph = pair_graph();
        let positions = embed(&graph, &LayoutParams::default());
        assert_eq!(positions.len(), 3);
        for p in positions {
            assert!(p.x.is_finite() && p.y.is_finite());
        }
    }

    #[test]
    fn test_connected_pair_closer_than_repelled_pair() {
        let graph = pair_graph();
        let positions = embed(&graph, &LayoutParams::default());
        // Node order is insertion order: a, b, loner.
        let ab = positions[0].distance_to(&positions[1]);
        let a_loner = positions[0].distance_to(&positions[2]);
        let b_loner = positions[1].distance_to(&positions[2]);
        assert!(ab < a_loner);
        assert!(ab < b_loner);
    }
}
