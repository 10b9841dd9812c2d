//! Maximal zig-zag trails: decomposition and classification.
//!
//! Purpose
//! - Partition a network's edges into maximal zig-zag trails, i.e. edge
//!   sequences in which neighbours share a source (divergence) or a target
//!   (convergence), never a source with a target.
//! - Label each trail N-, M-, W-fence or crown. Counting and enumeration
//!   both factor over this partition.
//!
//! References
//! - M. Hayamizu (2021), Algorithm 5.1 (maximal zig-zag trail decomposition).

mod decompose;
mod types;

pub use decompose::{decompose, decompose_edges, decompose_with_seed};
pub use types::{classify, TrailType, ZigzagTrail};
