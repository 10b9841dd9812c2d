use super::*;
use std::collections::BTreeSet;

fn nodes(ids: &[u32]) -> BTreeSet<NodeId> {
    ids.iter().map(|&i| NodeId(i)).collect()
}

#[test]
fn duplicate_edges_collapse() {
    let net = Network::from_edges([(0, 1), (0, 1), (0, 2)]);
    assert_eq!(net.edge_count(), 2);
    assert_eq!(net.node_count(), 3);
}

#[test]
fn degrees_and_reachability() {
    // 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3, 3 -> 4
    let net = Network::from_edges([(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)]);
    assert_eq!(net.in_degree(NodeId(3)), 2);
    assert_eq!(net.out_degree(NodeId(0)), 2);
    assert_eq!(net.in_degree(NodeId(99)), 0);
    assert!(net.has_path(NodeId(0), NodeId(4)));
    assert!(!net.has_path(NodeId(4), NodeId(0)));
    assert!(net.has_path(NodeId(2), NodeId(2)));
    assert_eq!(net.reticulations().collect::<Vec<_>>(), vec![NodeId(3)]);
    assert_eq!(net.leaves().collect::<Vec<_>>(), vec![NodeId(4)]);
}

#[test]
fn restrict_to_shares_labels_and_keeps_only_endpoints() {
    let net = Network::from_labeled_edges([("r", "a"), ("r", "b"), ("b", "c")]).unwrap();
    let sub = net.restrict_to([Edge::from_raw(0, 1)]);
    assert_eq!(sub.edge_count(), 1);
    assert_eq!(sub.node_count(), 2);
    assert_eq!(sub.label(NodeId(1)), "a");
    assert_eq!(sub.to_edge_list(), "r a\n");
}

#[test]
fn biconnected_components_of_tree_are_bridges() {
    let net = Network::from_edges([(0, 1), (0, 2), (2, 3)]);
    let mut comps = net.biconnected_components();
    comps.sort();
    assert_eq!(comps, vec![nodes(&[0, 1]), nodes(&[0, 2]), nodes(&[2, 3])]);
}

#[test]
fn biconnected_components_split_at_cut_vertex() {
    // Two diamonds glued at node 3, plus a pendant edge.
    let net = Network::from_edges([
        (0, 1),
        (0, 2),
        (1, 3),
        (2, 3),
        (3, 4),
        (3, 5),
        (4, 6),
        (5, 6),
        (6, 7),
    ]);
    let mut comps = net.biconnected_components();
    comps.sort();
    assert_eq!(comps.len(), 3);
    assert!(comps.contains(&nodes(&[0, 1, 2, 3])));
    assert!(comps.contains(&nodes(&[3, 4, 5, 6])));
    assert!(comps.contains(&nodes(&[6, 7])));
}

#[test]
fn biconnected_components_empty_network() {
    assert!(Network::new().biconnected_components().is_empty());
}

#[test]
fn parse_skips_blank_and_reports_malformed() {
    let text = "r a\n\n  r b extra\nlonely\nb c\n";
    let parsed = parse_edge_list(text);
    assert_eq!(
        parsed.pairs,
        vec![
            ("r".to_string(), "a".to_string()),
            ("r".to_string(), "b".to_string()),
            ("b".to_string(), "c".to_string()),
        ]
    );
    assert_eq!(
        parsed.warnings,
        vec![MalformedLine {
            line_no: 4,
            content: "lonely".to_string()
        }]
    );
    let net = parsed.into_network().unwrap();
    assert_eq!(net.edge_count(), 3);
    assert_eq!(net.label(NodeId(0)), "r");
}

#[test]
fn edge_list_round_trip() {
    let net = Network::from_labeled_edges([("x", "y"), ("x", "z"), ("z", "w")]).unwrap();
    let again = parse_edge_list(&net.to_edge_list()).into_network().unwrap();
    assert_eq!(again.to_edge_list(), net.to_edge_list());
    assert_eq!(again.edge_count(), 3);
}

#[test]
fn numeric_networks_print_ids() {
    let net = Network::from_edges([(5, 7)]);
    assert_eq!(net.to_edge_list(), "5 7\n");
    assert_eq!(net.max_node(), Some(NodeId(7)));
}

#[test]
fn node_ids_stop_at_u32_range() {
    let last = u32::MAX as usize;
    assert_eq!(NodeId::from_index(last), Some(NodeId(u32::MAX)));
    if let Some(past) = last.checked_add(1) {
        assert_eq!(NodeId::from_index(past), None);
    }
    let err = NetworkError::TooManyNodes { count: last };
    assert!(err.to_string().contains("u32"));
}
