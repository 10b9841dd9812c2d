//! C-admissible patterns: closed-form alternations, no search.

use crate::trail::TrailType;

/// Patterns for a trail of shape `kind` and length `n`.
///
/// - M-/W-fence: for `p` in `0..n/2`, `1 (01)^p (10)^q 1` with
///   `q = (n-2)/2 - p`.
/// - N-fence: `1010…1`.
/// - Crown: `1010…` and `0101…`.
pub fn c_patterns(kind: TrailType, n: usize) -> Vec<Vec<bool>> {
    match kind {
        TrailType::MFence | TrailType::WFence => {
            let half = n.saturating_sub(2) / 2;
            (0..n / 2)
                .map(|p| {
                    let mut bits = Vec::with_capacity(n);
                    bits.push(true);
                    for _ in 0..p {
                        bits.extend([false, true]);
                    }
                    for _ in 0..half - p {
                        bits.extend([true, false]);
                    }
                    bits.push(true);
                    bits
                })
                .collect()
        }
        TrailType::NFence => vec![alternation(n, true)],
        TrailType::Crown => vec![alternation(n, true), alternation(n, false)],
    }
}

fn alternation(n: usize, first: bool) -> Vec<bool> {
    (0..n).map(|i| (i % 2 == 0) == first).collect()
}
