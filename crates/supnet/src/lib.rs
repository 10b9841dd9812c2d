//! Support networks of rooted phylogenetic networks: counting, enumeration,
//! and level minimization.
//!
//! The edge set of a network splits into maximal zig-zag trails. Each trail
//! is a fence (N, M or W) or a crown, and every question about support
//! networks factors over the trails:
//! - counts are products of Fibonacci/Lucas/Padovan/Perrin numbers
//!   (`count`), never materializing a subnetwork;
//! - explicit families are Cartesian products of per-trail admissible
//!   subsets (`admissible`, `enumerate`);
//! - the exact level-minimization algorithm scores every minimal support
//!   network by its level (`level`).
//!
//! References
//! - M. Hayamizu, "A structure theorem for rooted binary phylogenetic
//!   networks and its implications for tree-based networks" (2021),
//!   Algorithm 5.1 (maximal zig-zag trail decomposition).
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; prefer
//!   the curated re-exports in [`api`].

pub mod admissible;
pub mod api;
pub mod count;
pub mod enumerate;
pub mod level;
pub mod netgen;
pub mod network;
pub mod sequence;
pub mod trail;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use num_bigint::BigUint;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::count::{count_all, count_minimal, count_minimum, count_support_networks};
    pub use crate::enumerate::{enumerate_minimal, enumerate_minimum, Candidates};
    pub use crate::level::{level, minimum_level, solve_min_level, SolveCfg};
    pub use crate::network::{Edge, Network, NodeId};
    pub use crate::trail::{classify, decompose, TrailType, ZigzagTrail};
    pub use crate::SupportFamily;
}

/// Which family of support networks an operation works on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SupportFamily {
    /// Minimal support networks (B-admissible subsets per trail).
    #[default]
    Minimal,
    /// Minimum support networks (C-admissible subsets per trail).
    Minimum,
}

impl SupportFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            SupportFamily::Minimal => "minimal",
            SupportFamily::Minimum => "minimum",
        }
    }
}

impl std::fmt::Display for SupportFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
