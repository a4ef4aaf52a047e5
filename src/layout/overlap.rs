//! Phase 2: pairwise overlap resolution.
//!
//! Each node carries a disk radius derived from its degree. Every pass
//! walks all unordered pairs and pushes overlapping disks directly apart
//! by half the overlap each, so the pair ends up exactly touching. The
//! dense O(V²) pair loop is fine for the graph sizes this tool targets
//! (tens to low hundreds of nodes).

use super::Position;

/// Below this separation a pair is treated as coincident.
const COINCIDENT_EPS: f64 = 1e-9;

/// Relax positions until disks (approximately) stop overlapping.
///
/// Convergence to a fully overlap-free state is not guaranteed for dense
/// graphs within a bounded iteration count; that is an accepted
/// approximation.
pub(super) fn resolve(positions: &mut [Position], radii: &[f64], iterations: usize) {
    let n = positions.len();
    debug_assert_eq!(n, radii.len());

    for _ in 0..iterations {
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = positions[i].x - positions[j].x;
                let dy = positions[i].y - positions[j].y;
                let d = (dx * dx + dy * dy).sqrt();
                let min_dist = radii[i] + radii[j];
                if d >= min_dist {
                    continue;
                }

                // Coincident nodes have no separation axis; derive a unit
                // direction from the pair's stable indices so the same
                // pair always separates the same way.
                let (ux, uy) = if d < COINCIDENT_EPS {
                    let angle = i as f64 * 2.399_963 + j as f64 * 0.710_113;
                    (angle.cos(), angle.sin())
                } else {
                    (dx / d, dy / d)
                };

                let push = (min_dist - d) / 2.0;
                positions[i].x += ux * push;
                positions[i].y += uy * push;
                positions[j].x -= ux * push;
                positions[j].y -= uy * push;
            }
        }
    }
}
