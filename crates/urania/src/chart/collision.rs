//! Collision rules for sign regions and body markers.

use crate::chart::layout::{COLLISION_ANGLE, NUDGE_ANGLE, ZODIAC_IN_RADIUS, ZODIAC_OUT_RADIUS};
use crate::math::{Angle, AngleSegment, UnionFind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// Which half of the sign ring a region claims at one point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Collision {
    /// Full ring width
    #[default]
    None,
    Outer,
    Inner,
}

/// Collision flags at the start, label and end of a sign region
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionState {
    pub begin: Collision,
    pub middle: Collision,
    pub end: Collision,
}

/// Collision state per sign arc.
///
/// `arcs[..main_count]` are the ecliptic signs, the rest are extra regions.
/// Extra regions take the outer half of the ring; a main sign moves to the
/// inner half wherever an extra region covers its start, end or label.
pub fn sign_collisions(arcs: &[AngleSegment], main_count: usize) -> Vec<CollisionState> {
    let mut states = vec![CollisionState::default(); arcs.len()];
    for (i, extra) in arcs.iter().enumerate().skip(main_count) {
        states[i] = CollisionState {
            begin: Collision::Outer,
            middle: Collision::Outer,
            end: Collision::Outer,
        };
        for (j, main) in arcs.iter().enumerate().take(main_count) {
            if j == i {
                continue;
            }
            if extra.check_collision(main.a1, 0.0) {
                states[j].begin = Collision::Inner;
            }
            if extra.check_collision(main.a2, 0.0) {
                states[j].end = Collision::Inner;
            }
            if extra.check_collision(main.middle(), COLLISION_ANGLE) {
                states[j].middle = Collision::Inner;
            }
        }
    }
    states
}

/// Inner and outer radius of the sign ring for a collision flag.
pub fn zodiac_radius(collision: Collision) -> (f64, f64) {
    let half = if collision == Collision::Outer { 1.0 } else { 0.0 };
    let parts = if collision == Collision::None { 1.0 } else { 2.0 };

    let width = ZODIAC_OUT_RADIUS - ZODIAC_IN_RADIUS;
    let in_radius = ZODIAC_IN_RADIUS + width * half / parts;
    (in_radius, in_radius + width / parts)
}

/// First angle in `avoid` closer than the nudge distance to `phi`.
pub fn find_collision(phi: &Angle, avoid: &[Angle]) -> Option<Angle> {
    avoid
        .iter()
        .find(|obstacle| phi.distance(obstacle) < NUDGE_ANGLE)
        .copied()
}

/// Moves `phi` a nudge distance away from the first obstacle it touches.
pub fn nudge(phi: Angle, avoid: &[Angle]) -> Angle {
    match find_collision(&phi, avoid) {
        None => phi,
        Some(obstacle) if obstacle > phi => Angle::new(obstacle.value() - NUDGE_ANGLE),
        Some(obstacle) => Angle::new(obstacle.value() + NUDGE_ANGLE),
    }
}

/// Shared marker position for every conjunction group.
///
/// Each group is placed at the angular mean of its members, measured from
/// the first member added. Keys outside any pair keep their own position.
pub fn merge_conjunctions<K: Clone + Eq + Hash>(
    positions: &[(K, Angle)],
    pairs: &[(K, K)],
) -> HashMap<K, Angle> {
    let lookup: HashMap<K, Angle> = positions.iter().cloned().collect();
    let mut groups = UnionFind::new();
    for (key, _) in positions {
        groups.add(key.clone());
    }
    for (a, b) in pairs {
        groups.union(a.clone(), b.clone());
    }

    let mut merged = HashMap::new();
    for group in groups.groups() {
        let Some(anchor) = group.first().and_then(|key| lookup.get(key)).copied() else {
            continue;
        };
        let offsets: Vec<f64> = group
            .iter()
            .filter_map(|key| lookup.get(key))
            .map(|angle| angle.compare(&anchor))
            .collect();
        let mean = offsets.iter().sum::<f64>() / offsets.len().max(1) as f64;
        let position = Angle::new(anchor.value() + mean);
        for key in group {
            merged.insert(key, position);
        }
    }
    merged
}
