//! Biconnected components of an undirected graph map.
//!
//! Iterative Hopcroft–Tarjan with an explicit DFS stack and an edge stack, so
//! deep networks do not exhaust the call stack. Roots are visited in
//! ascending node order for reproducible output.

use std::collections::{BTreeSet, HashMap};

use petgraph::graphmap::UnGraphMap;

use super::types::NodeId;

struct Frame {
    node: NodeId,
    parent: Option<NodeId>,
    neighbors: Vec<NodeId>,
    next: usize,
}

impl Frame {
    fn new(g: &UnGraphMap<NodeId, ()>, node: NodeId, parent: Option<NodeId>) -> Self {
        let mut neighbors: Vec<NodeId> = g.neighbors(node).collect();
        neighbors.sort_unstable();
        Self {
            node,
            parent,
            neighbors,
            next: 0,
        }
    }
}

/// Node sets of all biconnected components with at least one edge.
pub(super) fn biconnected_components(g: &UnGraphMap<NodeId, ()>) -> Vec<BTreeSet<NodeId>> {
    let mut roots: Vec<NodeId> = g.nodes().collect();
    roots.sort_unstable();

    let mut disc: HashMap<NodeId, usize> = HashMap::with_capacity(roots.len());
    let mut low: HashMap<NodeId, usize> = HashMap::with_capacity(roots.len());
    let mut clock = 0usize;
    let mut edge_stack: Vec<(NodeId, NodeId)> = Vec::new();
    let mut components = Vec::new();

    for root in roots {
        if disc.contains_key(&root) {
            continue;
        }
        disc.insert(root, clock);
        low.insert(root, clock);
        clock += 1;
        let mut frames = vec![Frame::new(g, root, None)];

        while let Some(frame) = frames.last_mut() {
            let v = frame.node;
            if frame.next < frame.neighbors.len() {
                let w = frame.neighbors[frame.next];
                frame.next += 1;
                if Some(w) == frame.parent {
                    continue;
                }
                match disc.get(&w).copied() {
                    None => {
                        edge_stack.push((v, w));
                        disc.insert(w, clock);
                        low.insert(w, clock);
                        clock += 1;
                        frames.push(Frame::new(g, w, Some(v)));
                    }
                    Some(dw) if dw < disc[&v] => {
                        // back edge to an ancestor
                        edge_stack.push((v, w));
                        if dw < low[&v] {
                            low.insert(v, dw);
                        }
                    }
                    Some(_) => {}
                }
                continue;
            }

            let Some(u) = frame.parent else {
                frames.pop();
                continue;
            };
            frames.pop();
            let low_v = low[&v];
            if low_v < low[&u] {
                low.insert(u, low_v);
            }
            if low_v >= disc[&u] {
                let mut comp = BTreeSet::new();
                while let Some((a, b)) = edge_stack.pop() {
                    comp.insert(a);
                    comp.insert(b);
                    if (a, b) == (u, v) {
                        break;
                    }
                }
                components.push(comp);
            }
        }
    }
    components
}
