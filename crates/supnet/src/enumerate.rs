//! Cartesian-product enumeration of candidate support networks.
//!
//! One admissible subset is chosen per trail; the union of the choices is a
//! candidate. `Candidates` walks the product lazily as an odometer (last
//! trail fastest), so callers can score and drop candidates one at a time.
//! The number of candidates is `∏ |family_i|`, i.e. `|B(N)|` or `|C(N)|`.

use num_bigint::BigUint;

use crate::admissible;
use crate::count::{count_minimal_trails, count_minimum_trails};
use crate::network::{Edge, Network};
use crate::sequence::{product, SequenceError, SequenceTable};
use crate::trail::{decompose, ZigzagTrail};
use crate::SupportFamily;

/// Lazy iterator over candidate support networks.
#[derive(Clone, Debug)]
pub struct Candidates {
    /// Edgeless network carrying the parent's labels.
    template: Network,
    families: Vec<Vec<Vec<Edge>>>,
    cursor: Vec<usize>,
    done: bool,
}

impl Candidates {
    /// Decompose `network` and build the per-trail families of `family`.
    pub fn new(network: &Network, family: SupportFamily) -> Self {
        Self::from_trails(network, &decompose(network), family)
    }

    /// Build the per-trail families of `family` for an existing
    /// decomposition of `network`.
    pub fn from_trails(
        network: &Network,
        trails: &[ZigzagTrail],
        family: SupportFamily,
    ) -> Self {
        let families: Vec<Vec<Vec<Edge>>> = trails
            .iter()
            .map(|t| admissible::family(t, family))
            .collect();
        tracing::debug!(
            family = %family,
            trails = families.len(),
            "built per-trail admissible families"
        );
        Self::from_families(network, families)
    }

    /// Enumerate an explicit list of per-trail families.
    pub fn from_families(network: &Network, families: Vec<Vec<Vec<Edge>>>) -> Self {
        let done = families.iter().any(|f| f.is_empty());
        Self {
            template: network.restrict_to(std::iter::empty()),
            cursor: vec![0; families.len()],
            families,
            done,
        }
    }

    /// Total number of candidates, `∏ |family_i|`.
    pub fn total(&self) -> BigUint {
        product(self.families.iter().map(|f| BigUint::from(f.len())))
    }

    fn current(&self) -> Network {
        let edges = self
            .cursor
            .iter()
            .zip(&self.families)
            .flat_map(|(&i, fam)| fam[i].iter().copied());
        self.template.restrict_to(edges)
    }

    fn advance(&mut self) {
        for k in (0..self.cursor.len()).rev() {
            self.cursor[k] += 1;
            if self.cursor[k] < self.families[k].len() {
                return;
            }
            self.cursor[k] = 0;
        }
        self.done = true;
    }
}

impl Iterator for Candidates {
    type Item = Network;

    fn next(&mut self) -> Option<Network> {
        if self.done {
            return None;
        }
        let candidate = self.current();
        self.advance();
        Some(candidate)
    }
}

/// Number of candidates `Candidates::from_trails(_, trails, family)` yields,
/// from the closed-form counts; no pattern is generated.
pub fn family_size(
    trails: &[ZigzagTrail],
    family: SupportFamily,
) -> Result<BigUint, SequenceError> {
    match family {
        SupportFamily::Minimal => count_minimal_trails(trails, &mut SequenceTable::new()),
        SupportFamily::Minimum => Ok(count_minimum_trails(trails)),
    }
}

/// All minimal support networks (B-admissible choice on every trail).
pub fn enumerate_minimal(network: &Network) -> Vec<Network> {
    Candidates::new(network, SupportFamily::Minimal).collect()
}

/// All minimum support networks (C-admissible choice on every trail).
pub fn enumerate_minimum(network: &Network) -> Vec<Network> {
    Candidates::new(network, SupportFamily::Minimum).collect()
}
