//! Admissible edge subsets of a single zig-zag trail.
//!
//! Purpose
//! - B-admissible subsets (minimal support networks): bit patterns with no
//!   `00` and no `111`; fences additionally start and end with `1`, crowns
//!   are read cyclically. Counts: Padovan(n) for fences, Perrin(n) for crowns.
//! - C-admissible subsets (minimum support networks): the maximal
//!   alternations. Counts: `n/2` for M-/W-fences, 1 for N-fences, 2 for
//!   crowns.
//!
//! A pattern is a `Vec<bool>` of trail length; `true` keeps `Z[i]`.
//! [`ZigzagTrail::select`] turns a pattern into an edge subset.

mod b;
mod c;

pub use b::{b_crown_patterns, b_fence_patterns, is_b_admissible_crown, is_b_admissible_fence};
pub use c::c_patterns;

use crate::network::Edge;
use crate::trail::{TrailType, ZigzagTrail};
use crate::SupportFamily;

/// Bit patterns of `family` for a trail of shape `kind` and length `n`.
pub fn patterns(kind: TrailType, n: usize, family: SupportFamily) -> Vec<Vec<bool>> {
    match family {
        SupportFamily::Minimal if kind.is_closed() => b_crown_patterns(n),
        SupportFamily::Minimal => b_fence_patterns(n),
        SupportFamily::Minimum => c_patterns(kind, n),
    }
}

/// Admissible edge subsets of `trail`, each in trail order.
pub fn family(trail: &ZigzagTrail, family: SupportFamily) -> Vec<Vec<Edge>> {
    patterns(trail.trail_type(), trail.len(), family)
        .iter()
        .map(|p| trail.select(p))
        .collect()
}

/// Render a pattern as `1`/`0` characters (logs and test messages).
pub fn pattern_string(pattern: &[bool]) -> String {
    pattern.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

#[cfg(test)]
mod tests;
