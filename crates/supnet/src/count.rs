//! Closed-form support-network counts.
//!
//! With trails `Z_1..Z_k` of lengths `n_i`:
//! - `|A(N)| = ∏ (Lucas(n_i) if crown else Fibonacci(n_i))`
//! - `|B(N)| = ∏ (Perrin(n_i) if crown else Padovan(n_i))`
//! - `|C(N)| = ∏ (2 if crown, 1 if N-fence, n_i / 2 otherwise)`
//!
//! No subnetwork is materialized. The explicit families in `admissible`
//! have exactly these cardinalities.

use num_bigint::BigUint;

use crate::network::Network;
use crate::sequence::{product, Sequence, SequenceError, SequenceTable};
use crate::trail::{decompose, TrailType, ZigzagTrail};

/// All three counts from one decomposition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupportCounts {
    /// Support networks, `|A(N)|`.
    pub all: BigUint,
    /// Minimal support networks, `|B(N)|`.
    pub minimal: BigUint,
    /// Minimum support networks, `|C(N)|`.
    pub minimum: BigUint,
}

pub fn count_all(network: &Network) -> Result<BigUint, SequenceError> {
    count_all_trails(&decompose(network), &mut SequenceTable::new())
}

pub fn count_minimal(network: &Network) -> Result<BigUint, SequenceError> {
    count_minimal_trails(&decompose(network), &mut SequenceTable::new())
}

pub fn count_minimum(network: &Network) -> BigUint {
    count_minimum_trails(&decompose(network))
}

/// Decompose once and evaluate all three formulas with a shared memo table.
pub fn count_support_networks(network: &Network) -> Result<SupportCounts, SequenceError> {
    let trails = decompose(network);
    let mut table = SequenceTable::new();
    Ok(SupportCounts {
        all: count_all_trails(&trails, &mut table)?,
        minimal: count_minimal_trails(&trails, &mut table)?,
        minimum: count_minimum_trails(&trails),
    })
}

pub fn count_all_trails(
    trails: &[ZigzagTrail],
    table: &mut SequenceTable,
) -> Result<BigUint, SequenceError> {
    let factors = trails
        .iter()
        .map(|t| {
            let seq = match t.trail_type() {
                TrailType::Crown => Sequence::Lucas,
                _ => Sequence::Fibonacci,
            };
            table.get(seq, t.len())
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(product(factors))
}

pub fn count_minimal_trails(
    trails: &[ZigzagTrail],
    table: &mut SequenceTable,
) -> Result<BigUint, SequenceError> {
    let factors = trails
        .iter()
        .map(|t| {
            let seq = match t.trail_type() {
                TrailType::Crown => Sequence::Perrin,
                _ => Sequence::Padovan,
            };
            table.get(seq, t.len())
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(product(factors))
}

pub fn count_minimum_trails(trails: &[ZigzagTrail]) -> BigUint {
    product(trails.iter().map(|t| BigUint::from(minimum_multiplier(t))))
}

/// Per-trail factor of `|C(N)|`.
pub fn minimum_multiplier(trail: &ZigzagTrail) -> usize {
    match trail.trail_type() {
        TrailType::Crown => 2,
        TrailType::NFence => 1,
        TrailType::MFence | TrailType::WFence => trail.len() / 2,
    }
}
