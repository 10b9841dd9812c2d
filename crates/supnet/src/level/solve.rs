//! Exact level minimization over a support-network family.
//!
//! Enumerate every candidate of the configured family, score it with
//! [`level`], and keep one of least level. The family size comes from the
//! closed-form counts of the decomposition, so an oversized instance is
//! rejected before any admissible pattern or candidate is built.
//!
//! Early exit: a candidate whose level is at most `target_level` (or 0,
//! which no candidate can beat) ends the scan.
//!
//! Parallel mode: candidates are produced on the calling thread and scored
//! on the rayon pool; the reduction picks the least `(level, index)`, so a
//! full scan returns the same witness as the sequential path.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use num_bigint::BigUint;
use rayon::iter::{ParallelBridge, ParallelIterator};

use super::{level, LevelError};
use crate::enumerate::{family_size, Candidates};
use crate::network::Network;
use crate::sequence::SequenceError;
use crate::trail::decompose;
use crate::SupportFamily;

/// Search configuration.
#[derive(Clone, Copy, Debug)]
pub struct SolveCfg {
    pub family: SupportFamily,
    /// Refuse families with more candidates than this.
    pub max_candidates: Option<u64>,
    /// Stop at the first candidate with level at most this.
    pub target_level: Option<usize>,
    pub parallel: bool,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            // Algorithm 1 scans minimal support networks.
            family: SupportFamily::Minimal,
            max_candidates: Some(1 << 24),
            target_level: None,
            parallel: false,
        }
    }
}

/// Best candidate found and scan statistics.
#[derive(Clone, Debug)]
pub struct LevelSolution {
    pub level: usize,
    pub witness: Network,
    /// Candidates scored before the scan ended.
    pub examined: u64,
    /// Size of the whole family.
    pub total: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    TooManyCandidates { total: BigUint, limit: u64 },
    Level(LevelError),
    Sequence(SequenceError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyCandidates { total, limit } => write!(
                f,
                "family has {total} candidates, more than the limit of {limit}"
            ),
            Self::Level(err) => write!(f, "{err}"),
            Self::Sequence(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Level(err) => Some(err),
            Self::Sequence(err) => Some(err),
            Self::TooManyCandidates { .. } => None,
        }
    }
}

impl From<LevelError> for SolveError {
    fn from(err: LevelError) -> Self {
        Self::Level(err)
    }
}

impl From<SequenceError> for SolveError {
    fn from(err: SequenceError) -> Self {
        Self::Sequence(err)
    }
}

/// Find a candidate of least level in `cfg.family` of `network`.
pub fn solve_min_level(network: &Network, cfg: &SolveCfg) -> Result<LevelSolution, SolveError> {
    let trails = decompose(network);
    let total = family_size(&trails, cfg.family)?;
    if let Some(limit) = cfg.max_candidates {
        if total > BigUint::from(limit) {
            return Err(SolveError::TooManyCandidates { total, limit });
        }
    }
    let candidates = Candidates::from_trails(network, &trails, cfg.family);
    tracing::info!(
        family = %cfg.family,
        total = %total,
        parallel = cfg.parallel,
        "scanning candidates"
    );

    let stop_at = cfg.target_level.unwrap_or(0);
    let (best, examined) = if cfg.parallel {
        scan_parallel(candidates, stop_at)
    } else {
        scan_sequential(candidates, stop_at)
    };
    let (level, witness) = best.ok_or(LevelError::EmptyCandidateSet)?;
    tracing::debug!(min_level = level, examined, "scan finished");
    Ok(LevelSolution {
        level,
        witness,
        examined,
        total,
    })
}

fn scan_sequential(candidates: Candidates, stop_at: usize) -> (Option<(usize, Network)>, u64) {
    let mut best: Option<(usize, Network)> = None;
    let mut examined = 0u64;
    for candidate in candidates {
        examined += 1;
        let lv = level(&candidate);
        if best.as_ref().map_or(true, |(b, _)| lv < *b) {
            best = Some((lv, candidate));
        }
        if lv <= stop_at {
            break;
        }
    }
    (best, examined)
}

fn scan_parallel(candidates: Candidates, stop_at: usize) -> (Option<(usize, Network)>, u64) {
    let stop = AtomicBool::new(false);
    let examined = AtomicU64::new(0);
    let best = candidates
        .enumerate()
        .take_while(|_| !stop.load(Ordering::Relaxed))
        .par_bridge()
        .map(|(idx, candidate)| {
            examined.fetch_add(1, Ordering::Relaxed);
            let lv = level(&candidate);
            if lv <= stop_at {
                stop.store(true, Ordering::Relaxed);
            }
            (lv, idx, candidate)
        })
        .min_by_key(|(lv, idx, _)| (*lv, *idx));
    (
        best.map(|(lv, _, candidate)| (lv, candidate)),
        examined.into_inner(),
    )
}
