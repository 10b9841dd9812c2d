use super::*;
use crate::enumerate::{enumerate_minimal, enumerate_minimum};
use crate::netgen::{NetworkGenParams, NetworkGenerator};
use crate::network::Edge;
use crate::sequence::Sequence;
use crate::trail::{decompose, TrailType};
use crate::SupportFamily;

fn diamond() -> Network {
    Network::from_edges([(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)])
}

#[test]
fn edgeless_and_tree_have_level_zero() {
    assert_eq!(level(&Network::new()), 0);
    let tree = Network::from_edges([(0, 1), (0, 2), (2, 3), (2, 4)]);
    assert_eq!(level(&tree), 0);
}

#[test]
fn one_reticulation_gives_level_one() {
    assert_eq!(level(&diamond()), 1);
}

#[test]
fn separate_blobs_do_not_add_up() {
    let net = Network::from_edges([
        (0, 1),
        (0, 2),
        (1, 3),
        (2, 3),
        (3, 4),
        (4, 5),
        (4, 6),
        (5, 7),
        (6, 7),
        (7, 8),
    ]);
    assert_eq!(net.reticulations().count(), 2);
    assert_eq!(level(&net), 1);
}

#[test]
fn nested_reticulations_share_a_blob() {
    let net = Network::from_edges([(0, 1), (0, 2), (1, 3), (2, 3), (1, 4), (3, 4), (4, 5)]);
    assert_eq!(level(&net), 2);
}

#[test]
fn in_degree_is_read_from_the_scored_network() {
    let net = diamond();
    let sub = net.restrict_to(net.edges().filter(|&e| e != Edge::from_raw(2, 3)));
    assert_eq!(level(&sub), 0);
}

#[test]
fn minimum_level_rejects_empty_input() {
    assert_eq!(
        minimum_level(Vec::<Network>::new()).err(),
        Some(LevelError::EmptyCandidateSet)
    );
}

#[test]
fn minimum_level_keeps_first_of_ties() {
    let a = Network::from_edges([(0, 1)]);
    let b = Network::from_edges([(0, 2)]);
    let (lv, witness) = minimum_level(vec![diamond(), a.clone(), b]).unwrap();
    assert_eq!(lv, 0);
    assert_eq!(witness.edge_set(), a.edge_set());
}

#[test]
fn solver_matches_plain_scan_on_generated_networks() {
    let mut generator = NetworkGenerator::new(NetworkGenParams::new(6, 3), 5).unwrap();
    for _ in 0..8 {
        let net = generator.generate_next().unwrap().network;
        let (expected, first) = minimum_level(enumerate_minimal(&net)).unwrap();

        let full = SolveCfg::default();
        let seq = solve_min_level(&net, &full).unwrap();
        assert_eq!(seq.level, expected);
        assert_eq!(seq.witness.edge_set(), first.edge_set());

        let par = solve_min_level(
            &net,
            &SolveCfg {
                parallel: true,
                ..full
            },
        )
        .unwrap();
        assert_eq!(par.level, expected);
        if expected > 0 {
            // No early exit: the whole family was scanned on both paths.
            assert_eq!(par.witness.edge_set(), seq.witness.edge_set());
            assert_eq!(par.examined, seq.examined);
        }
    }
}

#[test]
fn minimum_family_scan() {
    let net = NetworkGenerator::generate_single(&NetworkGenParams::new(5, 2), 17).unwrap();
    let cfg = SolveCfg {
        family: SupportFamily::Minimum,
        ..SolveCfg::default()
    };
    let sol = solve_min_level(&net, &cfg).unwrap();
    let (expected, _) = minimum_level(enumerate_minimum(&net)).unwrap();
    assert_eq!(sol.level, expected);
}

#[test]
fn candidate_cap_is_checked_before_scanning() {
    let cfg = SolveCfg {
        max_candidates: Some(0),
        ..SolveCfg::default()
    };
    let err = solve_min_level(&diamond(), &cfg).unwrap_err();
    assert!(matches!(err, SolveError::TooManyCandidates { limit: 0, .. }));
}

#[test]
fn target_level_stops_early() {
    let net = NetworkGenerator::generate_single(&NetworkGenParams::new(8, 4), 3).unwrap();
    let cfg = SolveCfg {
        target_level: Some(usize::MAX),
        ..SolveCfg::default()
    };
    let sol = solve_min_level(&net, &cfg).unwrap();
    assert_eq!(sol.examined, 1);
}

/// One W-fence of `2 * half` edges: tails `0..=half`, heads `1000..1000 + half`.
fn long_w_fence(half: u32) -> Network {
    Network::from_edges((0..half).flat_map(|k| [(k, 1000 + k), (k + 1, 1000 + k)]))
}

#[test]
fn candidate_cap_fires_before_patterns_are_built() {
    // Padovan(120) ~ 1e14 patterns: building the family first would not finish.
    let net = long_w_fence(60);
    let trails = decompose(&net);
    assert_eq!(trails.len(), 1);
    assert_eq!(trails[0].trail_type(), TrailType::WFence);

    let cfg = SolveCfg {
        max_candidates: Some(1),
        ..SolveCfg::default()
    };
    match solve_min_level(&net, &cfg) {
        Err(SolveError::TooManyCandidates { total, limit }) => {
            assert_eq!(limit, 1);
            assert_eq!(total, Sequence::Padovan.value(120).unwrap());
        }
        other => panic!("expected TooManyCandidates, got {other:?}"),
    }
}

#[test]
fn parallel_target_level_stops_early() {
    let net = NetworkGenerator::generate_single(&NetworkGenParams::new(8, 4), 3).unwrap();
    let exact = solve_min_level(&net, &SolveCfg::default()).unwrap();
    let cfg = SolveCfg {
        target_level: Some(usize::MAX),
        parallel: true,
        ..SolveCfg::default()
    };
    let sol = solve_min_level(&net, &cfg).unwrap();
    assert!(sol.examined >= 1);
    assert!(num_bigint::BigUint::from(sol.examined) <= sol.total);
    assert_eq!(sol.level, level(&sol.witness));
    assert!(sol.level >= exact.level);
}
