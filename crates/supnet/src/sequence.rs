//! Exact integer sequences indexed by trail length.
//!
//! - Fibonacci: F(0)=0, F(1)=1, F(n)=F(n-1)+F(n-2).
//! - Lucas:     L(0)=2, L(1)=1, L(n)=L(n-1)+L(n-2).
//! - Padovan:   P(1)=P(2)=P(3)=1, P(n)=P(n-2)+P(n-3); undefined at 0.
//! - Perrin:    Q(1)=0, Q(2)=2, Q(3)=3, Q(n)=Q(n-2)+Q(n-3); undefined at 0.
//!
//! Values are `BigUint`: support-network counts are products of these terms
//! and overflow any fixed width quickly.

use std::fmt;

use num_bigint::BigUint;
use num_traits::One;

/// The four sequences used by the counting formulas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sequence {
    Fibonacci,
    Lucas,
    Padovan,
    Perrin,
}

impl Sequence {
    /// Smallest defined index.
    pub fn first_index(self) -> usize {
        match self {
            Sequence::Fibonacci | Sequence::Lucas => 0,
            Sequence::Padovan | Sequence::Perrin => 1,
        }
    }

    /// Initial terms starting at `first_index`, in order.
    fn seeds(self) -> Vec<BigUint> {
        let v = |xs: &[u32]| -> Vec<BigUint> { xs.iter().map(|&x| BigUint::from(x)).collect() };
        match self {
            Sequence::Fibonacci => v(&[0, 1]),
            Sequence::Lucas => v(&[2, 1]),
            Sequence::Padovan => v(&[1, 1, 1]),
            Sequence::Perrin => v(&[0, 2, 3]),
        }
    }

    /// Term `n`, computed iteratively. Prefer [`SequenceTable`] for repeated
    /// lookups.
    pub fn value(self, n: usize) -> Result<BigUint, SequenceError> {
        SequenceTable::new().get(self, n)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sequence::Fibonacci => "Fibonacci",
            Sequence::Lucas => "Lucas",
            Sequence::Padovan => "Padovan",
            Sequence::Perrin => "Perrin",
        };
        f.write_str(name)
    }
}

/// Sequence index outside the domain. Trails have length at least one, so
/// hitting this from the counters means a broken invariant upstream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SequenceError {
    UndefinedIndex { sequence: Sequence, index: usize },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedIndex { sequence, index } => {
                write!(f, "{sequence} number undefined at index {index}")
            }
        }
    }
}

impl std::error::Error for SequenceError {}

/// Memo table: `terms[k]` holds the term at `first_index + k`.
#[derive(Clone, Debug, Default)]
pub struct SequenceTable {
    fibonacci: Vec<BigUint>,
    lucas: Vec<BigUint>,
    padovan: Vec<BigUint>,
    perrin: Vec<BigUint>,
}

impl SequenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn terms_mut(&mut self, seq: Sequence) -> &mut Vec<BigUint> {
        match seq {
            Sequence::Fibonacci => &mut self.fibonacci,
            Sequence::Lucas => &mut self.lucas,
            Sequence::Padovan => &mut self.padovan,
            Sequence::Perrin => &mut self.perrin,
        }
    }

    /// Term `n` of `seq`, extending the cached prefix as needed.
    pub fn get(&mut self, seq: Sequence, n: usize) -> Result<BigUint, SequenceError> {
        let first = seq.first_index();
        if n < first {
            return Err(SequenceError::UndefinedIndex {
                sequence: seq,
                index: n,
            });
        }
        let k = n - first;
        let terms = self.terms_mut(seq);
        if terms.is_empty() {
            *terms = seq.seeds();
        }
        while terms.len() <= k {
            let len = terms.len();
            let next = match seq {
                Sequence::Fibonacci | Sequence::Lucas => &terms[len - 1] + &terms[len - 2],
                Sequence::Padovan | Sequence::Perrin => &terms[len - 2] + &terms[len - 3],
            };
            terms.push(next);
        }
        Ok(terms[k].clone())
    }
}

/// Product of `factors`; the empty product is one.
pub(crate) fn product<I>(factors: I) -> BigUint
where
    I: IntoIterator<Item = BigUint>,
{
    factors.into_iter().fold(BigUint::one(), |acc, x| acc * x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{ToPrimitive, Zero};

    fn terms(seq: Sequence, range: std::ops::Range<usize>) -> Vec<u64> {
        let mut table = SequenceTable::new();
        range
            .map(|n| table.get(seq, n).unwrap().to_u64().unwrap())
            .collect()
    }

    #[test]
    fn first_terms() {
        assert_eq!(
            terms(Sequence::Fibonacci, 0..10),
            vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]
        );
        assert_eq!(
            terms(Sequence::Lucas, 0..10),
            vec![2, 1, 3, 4, 7, 11, 18, 29, 47, 76]
        );
        assert_eq!(
            terms(Sequence::Padovan, 1..13),
            vec![1, 1, 1, 2, 2, 3, 4, 5, 7, 9, 12, 16]
        );
        assert_eq!(
            terms(Sequence::Perrin, 1..13),
            vec![0, 2, 3, 2, 5, 5, 7, 10, 12, 17, 22, 29]
        );
    }

    #[test]
    fn undefined_index_is_an_error() {
        for seq in [Sequence::Padovan, Sequence::Perrin] {
            assert_eq!(
                seq.value(0),
                Err(SequenceError::UndefinedIndex {
                    sequence: seq,
                    index: 0
                })
            );
        }
        assert!(Sequence::Fibonacci.value(0).is_ok());
        assert!(Sequence::Lucas.value(0).is_ok());
    }

    #[test]
    fn large_indices_are_exact() {
        // F(100) = 354224848179261915075 exceeds u64.
        let f100 = Sequence::Fibonacci.value(100).unwrap();
        assert_eq!(f100.to_string(), "354224848179261915075");
        // Lucas identity: L(n) = F(n-1) + F(n+1).
        let mut table = SequenceTable::new();
        let l = table.get(Sequence::Lucas, 150).unwrap();
        let f = table.get(Sequence::Fibonacci, 149).unwrap()
            + table.get(Sequence::Fibonacci, 151).unwrap();
        assert_eq!(l, f);
    }

    #[test]
    fn table_answers_out_of_order_queries() {
        let mut table = SequenceTable::new();
        assert_eq!(table.get(Sequence::Perrin, 20).unwrap(), BigUint::from(277u32));
        assert_eq!(table.get(Sequence::Perrin, 4).unwrap(), BigUint::from(2u32));
        assert_eq!(table.get(Sequence::Padovan, 20).unwrap(), BigUint::from(151u32));
    }

    #[test]
    fn empty_product_is_one() {
        assert_eq!(product(std::iter::empty()), BigUint::one());
        assert!(product([BigUint::from(3u32), BigUint::zero()]).is_zero());
    }
}
