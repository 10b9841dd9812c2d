//! Trail data and the four trail shapes.

use std::fmt;

use crate::network::Edge;

/// Ordered edge sequence `Z[0..n]`, `n >= 1`. Neighbouring edges share a
/// tail or a head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZigzagTrail {
    edges: Vec<Edge>,
}

impl ZigzagTrail {
    /// Wrap an edge sequence produced by the decomposer (or a test).
    pub fn new(edges: Vec<Edge>) -> Self {
        debug_assert!(!edges.is_empty(), "zig-zag trails are never empty");
        debug_assert!(
            edges.windows(2).all(|w| w[0].is_zigzag_adjacent(&w[1])),
            "neighbouring trail edges must share a tail or a head"
        );
        Self { edges }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn trail_type(&self) -> TrailType {
        classify(self)
    }

    /// Edges `Z[i]` with `pattern[i] == true`, in trail order.
    pub fn select(&self, pattern: &[bool]) -> Vec<Edge> {
        debug_assert_eq!(pattern.len(), self.edges.len());
        self.edges
            .iter()
            .zip(pattern)
            .filter_map(|(&e, &keep)| keep.then_some(e))
            .collect()
    }
}

impl fmt::Display for ZigzagTrail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.edges.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

/// Shape of a maximal zig-zag trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrailType {
    /// Odd length.
    NFence,
    /// Even length, first two edges share a tail.
    MFence,
    /// Even length, first two edges share a head.
    WFence,
    /// Even length ≥ 4 whose ends meet; the only closed shape.
    Crown,
}

impl TrailType {
    #[inline]
    pub fn is_closed(self) -> bool {
        matches!(self, TrailType::Crown)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TrailType::NFence => "N-fence",
            TrailType::MFence => "M-fence",
            TrailType::WFence => "W-fence",
            TrailType::Crown => "crown",
        }
    }
}

impl fmt::Display for TrailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a trail by its length and end edges.
pub fn classify(trail: &ZigzagTrail) -> TrailType {
    let z = trail.edges();
    let n = z.len();
    if n % 2 == 1 {
        return TrailType::NFence;
    }
    // n is even and >= 2 from here on.
    let (first, last) = (z[0], z[n - 1]);
    if n >= 4 && first.is_zigzag_adjacent(&last) {
        TrailType::Crown
    } else if z[0].tail == z[1].tail {
        TrailType::MFence
    } else {
        TrailType::WFence
    }
}
