//! Level of a network and level minimization over candidate sets.
//!
//! Purpose
//! - `level`: the largest number of reticulations (in-degree > 1 nodes of
//!   the directed network) inside one biconnected component of the
//!   underlying undirected graph.
//! - `minimum_level`: linear scan for a level-minimizing candidate.
//! - `solve_min_level`: the exact algorithm for level minimization
//!   (enumerate the minimal support networks, keep one of least level),
//!   with a candidate cap, early exit and an optional parallel reduce.

mod solve;

pub use solve::{solve_min_level, LevelSolution, SolveCfg, SolveError};

use std::fmt;

use crate::network::Network;

/// `minimum_level` on an empty candidate set has no answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelError {
    EmptyCandidateSet,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCandidateSet => {
                f.write_str("cannot take the minimum level of zero candidates")
            }
        }
    }
}

impl std::error::Error for LevelError {}

/// Level of `network`; 0 for an edgeless network.
pub fn level(network: &Network) -> usize {
    network
        .biconnected_components()
        .iter()
        .map(|comp| comp.iter().filter(|&&n| network.in_degree(n) > 1).count())
        .max()
        .unwrap_or(0)
}

/// Least level over `candidates` and the first candidate attaining it.
pub fn minimum_level<I>(candidates: I) -> Result<(usize, Network), LevelError>
where
    I: IntoIterator<Item = Network>,
{
    let mut best: Option<(usize, Network)> = None;
    for candidate in candidates {
        let lv = level(&candidate);
        // Strict improvement only: ties keep the earlier candidate.
        if best.as_ref().map_or(true, |(b, _)| lv < *b) {
            best = Some((lv, candidate));
        }
    }
    best.ok_or(LevelError::EmptyCandidateSet)
}

#[cfg(test)]
mod tests;
