use super::*;
use crate::sequence::Sequence;
use num_bigint::BigUint;
use std::collections::BTreeSet;

fn strings(patterns: &[Vec<bool>]) -> Vec<String> {
    patterns.iter().map(|p| pattern_string(p)).collect()
}

fn count_is(n: usize, got: usize, seq: Sequence) {
    assert_eq!(
        BigUint::from(got),
        seq.value(n).unwrap(),
        "{seq} mismatch at n = {n}"
    );
}

#[test]
fn fence_patterns_small_cases() {
    assert_eq!(strings(&b_fence_patterns(1)), vec!["1"]);
    assert_eq!(strings(&b_fence_patterns(2)), vec!["11"]);
    assert_eq!(strings(&b_fence_patterns(3)), vec!["101"]);
    assert_eq!(strings(&b_fence_patterns(4)), vec!["1011", "1101"]);
    assert_eq!(strings(&b_fence_patterns(5)), vec!["10101", "11011"]);
    assert!(b_fence_patterns(0).is_empty());
}

#[test]
fn fence_patterns_count_padovan_and_keep_shape() {
    for n in 1..=24 {
        let pats = b_fence_patterns(n);
        count_is(n, pats.len(), Sequence::Padovan);
        for p in &pats {
            assert_eq!(p.len(), n);
            assert!(is_b_admissible_fence(p), "bad fence pattern {}", pattern_string(p));
        }
        let distinct: BTreeSet<_> = pats.iter().collect();
        assert_eq!(distinct.len(), pats.len());
    }
}

#[test]
fn crown_patterns_count_perrin_and_keep_shape() {
    for n in 1..=24 {
        let pats = b_crown_patterns(n);
        count_is(n, pats.len(), Sequence::Perrin);
        for p in &pats {
            assert!(is_b_admissible_crown(p), "bad crown pattern {}", pattern_string(p));
        }
    }
    assert_eq!(strings(&b_crown_patterns(4)), vec!["0101", "1010"]);
}

#[test]
fn crown_check_wraps_around() {
    // 1101: linear windows are fine, but 1-1-1 appears across the seam.
    assert!(is_b_admissible_fence(&[true, true, false, true]));
    assert!(!is_b_admissible_crown(&[true, true, false, true]));
    // 0110: 0-0 across the seam.
    assert!(!is_b_admissible_crown(&[false, true, true, false]));
}

#[test]
fn c_fence_patterns() {
    assert_eq!(strings(&c_patterns(TrailType::MFence, 2)), vec!["11"]);
    assert_eq!(
        strings(&c_patterns(TrailType::WFence, 6)),
        vec!["110101", "101101", "101011"]
    );
    for n in (2..=30).step_by(2) {
        let pats = c_patterns(TrailType::MFence, n);
        assert_eq!(pats.len(), n / 2);
        for p in &pats {
            assert_eq!(p.len(), n);
            assert!(is_b_admissible_fence(p));
        }
    }
}

#[test]
fn c_n_fence_and_crown_patterns() {
    assert_eq!(strings(&c_patterns(TrailType::NFence, 1)), vec!["1"]);
    assert_eq!(strings(&c_patterns(TrailType::NFence, 5)), vec!["10101"]);
    assert_eq!(
        strings(&c_patterns(TrailType::Crown, 6)),
        vec!["101010", "010101"]
    );
    for n in (4..=20).step_by(2) {
        for p in c_patterns(TrailType::Crown, n) {
            assert!(is_b_admissible_crown(&p));
        }
    }
}

#[test]
fn family_maps_patterns_to_edges() {
    let trail = ZigzagTrail::new(vec![
        Edge::from_raw(0, 1),
        Edge::from_raw(0, 2),
        Edge::from_raw(3, 2),
        Edge::from_raw(3, 4),
    ]);
    let minimal = family(&trail, SupportFamily::Minimal);
    assert_eq!(
        minimal,
        vec![
            vec![Edge::from_raw(0, 1), Edge::from_raw(3, 2), Edge::from_raw(3, 4)],
            vec![Edge::from_raw(0, 1), Edge::from_raw(0, 2), Edge::from_raw(3, 4)],
        ]
    );
    assert_eq!(family(&trail, SupportFamily::Minimum).len(), 2);
}

#[test]
fn dispatch_uses_crown_generator_only_for_crowns() {
    assert_eq!(patterns(TrailType::Crown, 6, SupportFamily::Minimal).len(), 5);
    assert_eq!(patterns(TrailType::WFence, 6, SupportFamily::Minimal).len(), 3);
    assert_eq!(patterns(TrailType::Crown, 6, SupportFamily::Minimum).len(), 2);
}
