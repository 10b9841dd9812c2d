//! Edge-list files on disk.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use supnet::api::{parse_edge_list, Network};

/// Read a `source target` edge list. Malformed lines are logged and skipped.
pub fn read_network(path: &Path) -> Result<Network> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let parsed = parse_edge_list(&text);
    for w in &parsed.warnings {
        tracing::warn!(
            file = %path.display(),
            line = w.line_no,
            content = %w.content,
            "skipping malformed edge-list line"
        );
    }
    let net = parsed
        .into_network()
        .with_context(|| format!("building network from {}", path.display()))?;
    tracing::debug!(
        file = %path.display(),
        nodes = net.node_count(),
        edges = net.edge_count(),
        "network loaded"
    );
    Ok(net)
}

/// Write `net` as an edge list, creating parent directories.
pub fn write_network(path: &Path, net: &Network) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, net.to_edge_list()).with_context(|| format!("writing {}", path.display()))
}
