//! `Network`: a directed graph map plus a shared label table.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use petgraph::algo::has_path_connecting;
use petgraph::graphmap::{DiGraphMap, UnGraphMap};
use petgraph::Direction;

use super::bcc;
use super::types::{Edge, NodeId};
use super::NetworkError;

/// Rooted DAG modelling a reticulate evolutionary history.
///
/// Node labels are interned in first-appearance order; `labels[i]` names
/// `NodeId(i)`. A network built from numeric pairs has no label table and
/// prints its ids instead.
#[derive(Clone, Debug, Default)]
pub struct Network {
    graph: DiGraphMap<NodeId, ()>,
    labels: Arc<Vec<String>>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from numeric `(tail, head)` pairs.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut net = Self::new();
        for (t, h) in edges {
            net.add_edge(Edge::from_raw(t, h));
        }
        net
    }

    /// Build from labelled `(source, target)` pairs, interning labels.
    pub fn from_labeled_edges<I, S>(pairs: I) -> Result<Self, NetworkError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut ids: HashMap<String, NodeId> = HashMap::new();
        let mut labels: Vec<String> = Vec::new();
        let mut intern = |s: &str| -> Result<NodeId, NetworkError> {
            if let Some(&id) = ids.get(s) {
                return Ok(id);
            }
            let id = NodeId::from_index(labels.len()).ok_or(NetworkError::TooManyNodes {
                count: labels.len() + 1,
            })?;
            labels.push(s.to_string());
            ids.insert(s.to_string(), id);
            Ok(id)
        };
        let mut graph = DiGraphMap::new();
        for (s, t) in pairs {
            let tail = intern(s.as_ref())?;
            let head = intern(t.as_ref())?;
            graph.add_edge(tail, head, ());
        }
        Ok(Self {
            graph,
            labels: Arc::new(labels),
        })
    }

    /// Fresh network on `edges`, sharing this network's labels. Only the
    /// endpoints of `edges` become nodes.
    pub fn restrict_to<I>(&self, edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = DiGraphMap::new();
        for e in edges {
            graph.add_edge(e.tail, e.head, ());
        }
        Self {
            graph,
            labels: Arc::clone(&self.labels),
        }
    }

    /// Insert `e` (and its endpoints). Returns false if it was present.
    pub fn add_edge(&mut self, e: Edge) -> bool {
        self.graph.add_edge(e.tail, e.head, ()).is_none()
    }

    /// Remove `e`, keeping its endpoints. Returns false if it was absent.
    pub fn remove_edge(&mut self, e: Edge) -> bool {
        self.graph.remove_edge(e.tail, e.head).is_some()
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.nodes()
    }

    /// Edges in insertion order of their tails.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.graph.all_edges().map(|(t, h, _)| Edge::new(t, h))
    }

    /// Edges as an ordered set (deterministic, for comparisons and output).
    pub fn edge_set(&self) -> BTreeSet<Edge> {
        self.edges().collect()
    }

    pub fn in_degree(&self, n: NodeId) -> usize {
        if !self.graph.contains_node(n) {
            return 0;
        }
        self.graph.neighbors_directed(n, Direction::Incoming).count()
    }

    pub fn out_degree(&self, n: NodeId) -> usize {
        if !self.graph.contains_node(n) {
            return 0;
        }
        self.graph.neighbors_directed(n, Direction::Outgoing).count()
    }

    /// Nodes with in-degree greater than one.
    pub fn reticulations(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes().filter(move |&n| self.in_degree(n) > 1)
    }

    /// Nodes with out-degree zero.
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes().filter(move |&n| self.out_degree(n) == 0)
    }

    /// Is `to` reachable from `from` along directed edges? A node reaches
    /// itself.
    pub fn has_path(&self, from: NodeId, to: NodeId) -> bool {
        if !(self.graph.contains_node(from) && self.graph.contains_node(to)) {
            return false;
        }
        has_path_connecting(&self.graph, from, to, None)
    }

    /// Largest node id in use, if any.
    pub fn max_node(&self) -> Option<NodeId> {
        self.graph.nodes().max()
    }

    /// Underlying undirected simple graph.
    pub fn to_undirected(&self) -> UnGraphMap<NodeId, ()> {
        let mut un = UnGraphMap::with_capacity(self.node_count(), self.edge_count());
        for n in self.graph.nodes() {
            un.add_node(n);
        }
        for (t, h, _) in self.graph.all_edges() {
            un.add_edge(t, h, ());
        }
        un
    }

    /// Node sets of the biconnected components of the undirected view.
    /// Isolated nodes belong to no component.
    pub fn biconnected_components(&self) -> Vec<BTreeSet<NodeId>> {
        bcc::biconnected_components(&self.to_undirected())
    }

    /// Display label of `n`.
    pub fn label(&self, n: NodeId) -> Cow<'_, str> {
        match self.labels.get(n.index()) {
            Some(s) => Cow::Borrowed(s.as_str()),
            None => Cow::Owned(n.to_string()),
        }
    }

    /// One `source target` line per edge, sorted by edge.
    pub fn to_edge_list(&self) -> String {
        let mut out = String::new();
        for e in self.edge_set() {
            out.push_str(&self.label(e.tail));
            out.push(' ');
            out.push_str(&self.label(e.head));
            out.push('\n');
        }
        out
    }

    #[cfg(test)]
    pub(crate) fn graph(&self) -> &DiGraphMap<NodeId, ()> {
        &self.graph
    }
}
