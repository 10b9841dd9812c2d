//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI and
//!   experiments; breaking changes are allowed.

// Networks and text I/O
pub use crate::network::{
    parse_edge_list, Edge, EdgeList, MalformedLine, Network, NetworkError, NodeId,
};
// Trails
pub use crate::trail::{classify, decompose, decompose_with_seed, TrailType, ZigzagTrail};
// Counting
pub use crate::count::{
    count_all, count_minimal, count_minimum, count_support_networks, SupportCounts,
};
pub use crate::sequence::{Sequence, SequenceError, SequenceTable};
// Families and enumeration
pub use crate::admissible::{family as admissible_family, pattern_string, patterns};
pub use crate::enumerate::{enumerate_minimal, enumerate_minimum, Candidates};
// Level
pub use crate::level::{
    level, minimum_level, solve_min_level, LevelError, LevelSolution, SolveCfg, SolveError,
};
// Random networks
pub use crate::netgen::{
    GeneratorError, NetworkGenParams, NetworkGenerator, NetworkSample, SeedReplay,
};
pub use crate::SupportFamily;
