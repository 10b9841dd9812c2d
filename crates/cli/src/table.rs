//! Batch experiment rows and their tabular output.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use serde::Serialize;
use std::fs::{self, File};
use std::path::Path;
use std::time::Instant;
use supnet::api::{
    count_support_networks, decompose, level, solve_min_level, SolveCfg, SolveError,
};

use crate::input::read_network;

/// One input network's statistics. Counts are decimal strings: they do
/// not fit fixed-width integers in general.
#[derive(Clone, Debug, Serialize)]
pub struct BatchRow {
    pub file: String,
    pub nodes: u64,
    pub edges: u64,
    pub reticulations: u64,
    pub trails: u64,
    pub level: u64,
    pub count_all: String,
    pub count_minimal: String,
    pub count_minimum: String,
    pub min_level: Option<u64>,
    pub examined: Option<u64>,
    pub runtime_s: Option<f64>,
}

impl BatchRow {
    /// Load `path`, count, and optionally run the exact minimizer.
    pub fn measure(path: &Path, exact: Option<&SolveCfg>) -> Result<Self> {
        let net = read_network(path)?;
        let counts = count_support_networks(&net)?;
        let mut row = BatchRow {
            file: path.to_string_lossy().into_owned(),
            nodes: net.node_count() as u64,
            edges: net.edge_count() as u64,
            reticulations: net.reticulations().count() as u64,
            trails: decompose(&net).len() as u64,
            level: level(&net) as u64,
            count_all: counts.all.to_string(),
            count_minimal: counts.minimal.to_string(),
            count_minimum: counts.minimum.to_string(),
            min_level: None,
            examined: None,
            runtime_s: None,
        };
        if let Some(cfg) = exact {
            let start = Instant::now();
            match solve_min_level(&net, cfg) {
                Ok(sol) => {
                    row.runtime_s = Some(start.elapsed().as_secs_f64());
                    row.min_level = Some(sol.level as u64);
                    row.examined = Some(sol.examined);
                }
                Err(err @ SolveError::TooManyCandidates { .. }) => {
                    tracing::warn!(file = %row.file, %err, "skipping exact minimization");
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(row)
    }
}

/// Collect rows into a polars frame, one column per field.
pub fn to_frame(rows: &[BatchRow]) -> Result<DataFrame> {
    let ints = |f: fn(&BatchRow) -> u64| rows.iter().map(f).collect::<Vec<u64>>();
    let df = df!(
        "file" => rows.iter().map(|r| r.file.clone()).collect::<Vec<_>>(),
        "nodes" => ints(|r| r.nodes),
        "edges" => ints(|r| r.edges),
        "reticulations" => ints(|r| r.reticulations),
        "trails" => ints(|r| r.trails),
        "level" => ints(|r| r.level),
        "count_all" => rows.iter().map(|r| r.count_all.clone()).collect::<Vec<_>>(),
        "count_minimal" => rows.iter().map(|r| r.count_minimal.clone()).collect::<Vec<_>>(),
        "count_minimum" => rows.iter().map(|r| r.count_minimum.clone()).collect::<Vec<_>>(),
        "min_level" => rows.iter().map(|r| r.min_level).collect::<Vec<_>>(),
        "examined" => rows.iter().map(|r| r.examined).collect::<Vec<_>>(),
        "runtime_s" => rows.iter().map(|r| r.runtime_s).collect::<Vec<_>>()
    )?;
    Ok(df)
}

/// Write rows as CSV or Parquet, chosen by the extension of `out`.
pub fn write_table(rows: &[BatchRow], out: &Path) -> Result<()> {
    let mut df = to_frame(rows)?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let ext = out
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match ext.as_str() {
        "csv" => CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)
            .with_context(|| format!("writing {}", out.display()))?,
        "parquet" => {
            ParquetWriter::new(&mut file)
                .finish(&mut df)
                .with_context(|| format!("writing {}", out.display()))?;
        }
        other => bail!("unsupported table extension {other:?} (use .csv or .parquet)"),
    }
    tracing::info!(rows = rows.len(), out = %out.display(), "table written");
    Ok(())
}
