//! Node and edge identifiers.

use std::fmt;

/// Compact node identifier. Labels live in the owning [`super::Network`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Id for the `index`-th interned label, if it fits in `u32`.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(NodeId)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Directed edge `tail → head`, compared and hashed by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub tail: NodeId,
    pub head: NodeId,
}

impl Edge {
    #[inline]
    pub fn new(tail: NodeId, head: NodeId) -> Self {
        Self { tail, head }
    }

    /// Shorthand for numeric endpoints (tests, generators).
    #[inline]
    pub fn from_raw(tail: u32, head: u32) -> Self {
        Self::new(NodeId(tail), NodeId(head))
    }

    /// True if `self` and `other` diverge from a common source or converge
    /// on a common target. Source-to-target contact does not count.
    #[inline]
    pub fn is_zigzag_adjacent(&self, other: &Edge) -> bool {
        self.tail == other.tail || self.head == other.head
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.tail, self.head)
    }
}
