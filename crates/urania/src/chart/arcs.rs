//! Layering of aspect arcs into concentric, non-overlapping rings.
//!
//! Arcs are sorted shortest first and each takes the innermost-indexed layer
//! with no colliding member. Where an arc's spoke (the radial line from the
//! baseline down to its ring) crosses a lower layer's arc, that layer is
//! recorded as a bridge so the spoke can be drawn with a gap.

use crate::chart::layout::{BRIDGE_TOLERANCE, COLLISION_ANGLE};
use crate::math::{Angle, AngleSegment};
use std::collections::HashMap;

/// Pairwise collision between arcs, symmetric.
///
/// `check_collision` only tests the end of the earlier-ending arc, so two arcs
/// with equal ends or on opposite sides of the wheel can collide one way only.
/// Either direction counts, which keeps the layering independent of input
/// order.
pub fn collision_matrix(arcs: &[AngleSegment]) -> Vec<Vec<bool>> {
    arcs.iter()
        .map(|a| {
            arcs.iter()
                .map(|b| a.check_collision(*b, COLLISION_ANGLE) || b.check_collision(*a, COLLISION_ANGLE))
                .collect()
        })
        .collect()
}

/// Greedy first-fit layering, shortest arcs first.
///
/// Ties keep input order. Not optimal, but stable across runs.
pub fn layer_arcs(arcs: &[AngleSegment], matrix: &[Vec<bool>]) -> Vec<Vec<usize>> {
    let mut order: Vec<usize> = (0..arcs.len()).collect();
    order.sort_by(|&a, &b| arcs[a].length().total_cmp(&arcs[b].length()));

    let mut layers: Vec<Vec<usize>> = Vec::new();
    for i in order {
        let level = layers
            .iter()
            .position(|layer| !layer.iter().any(|&j| matrix[i][j]))
            .unwrap_or(layers.len());
        if level == layers.len() {
            layers.push(Vec::new());
        }
        layers[level].push(i);
    }
    layers
}

/// For every spoke angle, the radius indices (layer + 1) of lower-layer
/// arcs it passes through.
pub fn bridge_points(
    arcs: &[AngleSegment],
    matrix: &[Vec<bool>],
    layers: &[Vec<usize>],
) -> HashMap<Angle, Vec<usize>> {
    let mut bridges: HashMap<Angle, Vec<usize>> = HashMap::new();
    for (level, group) in layers.iter().enumerate() {
        for &i in group {
            for (lower, lower_group) in layers.iter().enumerate().take(level) {
                for &j in lower_group {
                    if !matrix[i][j] {
                        continue;
                    }
                    for spoke in arcs[i] {
                        if arcs[j]
                            .endpoints()
                            .iter()
                            .any(|end| spoke.distance(end) < BRIDGE_TOLERANCE)
                        {
                            continue;
                        }
                        if arcs[j].check_collision(spoke, COLLISION_ANGLE) {
                            bridges.entry(spoke).or_default().push(lower + 1);
                        }
                    }
                }
            }
        }
    }
    bridges
}

/// Consecutive radius-index pairs for a spoke reaching radius index
/// `current`, broken at each bridged layer.
pub fn bridge_spans(levels: &[usize], current: usize) -> Vec<(usize, usize)> {
    let mut parts = vec![0];
    let mut crossings: Vec<usize> = levels.iter().copied().filter(|&l| l < current).collect();
    crossings.sort_unstable();
    crossings.dedup();
    parts.extend(crossings);
    parts.push(current);
    parts.windows(2).map(|pair| (pair[0], pair[1])).collect()
}
