//! B-admissible patterns by explicit-stack depth-first search.
//!
//! Partial assignments are extended one bit at a time; a bit is only pushed
//! if it keeps the prefix free of `00` and `111`. Zero branches are pushed
//! last so patterns come out in lexicographic order.

/// Fence patterns: `b[0] = b[n-1] = 1`, no `00`, no `111`.
pub fn b_fence_patterns(n: usize) -> Vec<Vec<bool>> {
    let mut out = Vec::new();
    if n == 0 {
        return out;
    }
    let mut stack: Vec<Vec<bool>> = vec![vec![true]];
    while let Some(prefix) = stack.pop() {
        let len = prefix.len();
        if len == n {
            out.push(prefix);
            continue;
        }
        let last = prefix[len - 1];
        let ends_in_11 = len >= 2 && prefix[len - 2] && last;
        // The final bit is forced to 1, so a 0 may not be placed there.
        let zero_ok = last && len + 1 < n;
        if !ends_in_11 {
            let mut one = prefix.clone();
            one.push(true);
            stack.push(one);
        }
        if zero_ok {
            let mut zero = prefix;
            zero.push(false);
            stack.push(zero);
        }
    }
    out
}

/// Crown patterns: no `00`, no `111`, indices taken mod `n`.
pub fn b_crown_patterns(n: usize) -> Vec<Vec<bool>> {
    let mut out = Vec::new();
    if n == 0 {
        return out;
    }
    let mut stack: Vec<Vec<bool>> = vec![Vec::with_capacity(n)];
    while let Some(prefix) = stack.pop() {
        let len = prefix.len();
        if len == n {
            // Wrap-around windows are only known once the cycle is closed.
            if is_b_admissible_crown(&prefix) {
                out.push(prefix);
            }
            continue;
        }
        let last = prefix.last().copied();
        let ends_in_11 = len >= 2 && prefix[len - 2] && prefix[len - 1];
        let zero_ok = last != Some(false);
        if !ends_in_11 {
            let mut one = prefix.clone();
            one.push(true);
            stack.push(one);
        }
        if zero_ok {
            let mut zero = prefix;
            zero.push(false);
            stack.push(zero);
        }
    }
    out
}

/// Linear check of the fence conditions.
pub fn is_b_admissible_fence(pattern: &[bool]) -> bool {
    let (Some(&first), Some(&last)) = (pattern.first(), pattern.last()) else {
        return false;
    };
    first
        && last
        && pattern.windows(2).all(|w| w[0] || w[1])
        && pattern.windows(3).all(|w| !(w[0] && w[1] && w[2]))
}

/// Cyclic check of the crown conditions.
pub fn is_b_admissible_crown(pattern: &[bool]) -> bool {
    let n = pattern.len();
    if n == 0 {
        return false;
    }
    (0..n).all(|i| {
        let (a, b, c) = (pattern[i], pattern[(i + 1) % n], pattern[(i + 2) % n]);
        (a || b) && !(a && b && c)
    })
}
