//! Greedy maximal zig-zag trail decomposition.
//!
//! The unassigned edges form an owned worklist consumed in place: seed a
//! trail with the first remaining edge, then repeatedly scan the worklist for
//! an edge that extends the front (checked first) or the back of the trail.
//! A trail is finished when a full scan finds nothing.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::network::{Edge, Network};

use super::types::ZigzagTrail;

/// Decompose with a sorted worklist (reproducible trail order).
pub fn decompose(network: &Network) -> Vec<ZigzagTrail> {
    decompose_edges(network.edge_set().into_iter().collect())
}

/// Decompose with a worklist shuffled by `seed`. Exercises other tie-breaks;
/// on binary networks the resulting edge partition is the same.
pub fn decompose_with_seed(network: &Network, seed: u64) -> Vec<ZigzagTrail> {
    let mut remaining: Vec<Edge> = network.edge_set().into_iter().collect();
    remaining.shuffle(&mut StdRng::seed_from_u64(seed));
    decompose_edges(remaining)
}

/// Decompose an explicit worklist; its order decides seeds and tie-breaks.
/// Duplicate edges must already be removed.
pub fn decompose_edges(mut remaining: Vec<Edge>) -> Vec<ZigzagTrail> {
    let mut trails = Vec::new();
    while !remaining.is_empty() {
        let seed = remaining.remove(0);
        let mut trail: VecDeque<Edge> = VecDeque::from([seed]);
        while let Some(idx) = extend_once(&mut trail, &remaining) {
            remaining.remove(idx);
        }
        trails.push(ZigzagTrail::new(trail.into()));
    }
    tracing::debug!(trails = trails.len(), "zig-zag decomposition");
    trails
}

/// Attach the first worklist edge adjacent to either end of `trail`;
/// returns its worklist index.
fn extend_once(trail: &mut VecDeque<Edge>, remaining: &[Edge]) -> Option<usize> {
    let (&front, &back) = (trail.front()?, trail.back()?);
    for (idx, f) in remaining.iter().enumerate() {
        if f.is_zigzag_adjacent(&front) {
            trail.push_front(*f);
            return Some(idx);
        }
        if f.is_zigzag_adjacent(&back) {
            trail.push_back(*f);
            return Some(idx);
        }
    }
    None
}
