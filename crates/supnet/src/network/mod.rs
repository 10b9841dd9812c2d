//! Directed networks: storage, queries, and the edge-list text format.
//!
//! Purpose
//! - Hold a rooted DAG as a `petgraph` graph map keyed by compact node ids,
//!   with the textual node labels kept on the side.
//! - Offer the graph primitives the core consumes: edge/node iteration,
//!   in-degree, reachability, the undirected view, and biconnected
//!   components.
//!
//! Conventions
//! - No parallel edges and no self-loops (precondition, not checked).
//!   Inserting an existing edge again is a no-op.
//! - Candidate support networks are fresh networks built from an edge subset
//!   (`Network::restrict_to`); they share the parent's label table.

mod bcc;
mod edgelist;
mod graph;
mod types;

pub use edgelist::{parse_edge_list, EdgeList, MalformedLine};
pub use graph::Network;
pub use types::{Edge, NodeId};

use std::fmt;

/// Labelled input with more distinct nodes than `NodeId` can address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetworkError {
    TooManyNodes { count: usize },
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyNodes { count } => {
                write!(f, "{count} distinct nodes exceed the u32 id space")
            }
        }
    }
}

impl std::error::Error for NetworkError {}

#[cfg(test)]
mod tests;
