//! Whitespace-delimited `source target` edge lists.

use std::fmt;

use super::graph::Network;
use super::NetworkError;

/// A non-blank line with fewer than two tokens. Skipped, never fatal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MalformedLine {
    /// 1-based line number.
    pub line_no: usize,
    pub content: String,
}

impl fmt::Display for MalformedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid line {}: {:?}", self.line_no, self.content)
    }
}

/// Parsed edge list: labelled pairs in file order plus skipped lines.
#[derive(Clone, Debug, Default)]
pub struct EdgeList {
    pub pairs: Vec<(String, String)>,
    pub warnings: Vec<MalformedLine>,
}

impl EdgeList {
    pub fn into_network(self) -> Result<Network, NetworkError> {
        Network::from_labeled_edges(self.pairs)
    }
}

/// Parse edge-list text. Extra tokens after the first two are ignored.
pub fn parse_edge_list(text: &str) -> EdgeList {
    let mut out = EdgeList::default();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(s), Some(t)) => out.pairs.push((s.to_string(), t.to_string())),
            _ => out.warnings.push(MalformedLine {
                line_no: i + 1,
                content: line.to_string(),
            }),
        }
    }
    out
}
