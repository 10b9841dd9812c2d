use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::time::Instant;
use supnet::api::{
    count_support_networks, decompose, level, solve_min_level, NetworkGenParams,
    NetworkGenerator, SolveCfg, SupportFamily,
};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod table;

use input::{read_network, write_network};
use provenance::{write_sidecar, Payload};
use table::{write_table, BatchRow};

#[derive(Parser)]
#[command(name = "supnet")]
#[command(about = "Support-network counting and level minimization for phylogenetic networks")]
struct Cmd {
    /// Log level for stderr output
    #[arg(long, default_value = "info")]
    log: tracing::Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FamilyArg {
    Minimal,
    Minimum,
}

impl From<FamilyArg> for SupportFamily {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::Minimal => SupportFamily::Minimal,
            FamilyArg::Minimum => SupportFamily::Minimum,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Print |A|, |B|, |C| for one network
    Count {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// List the zig-zag trails of one network
    Trails {
        #[arg(long)]
        input: PathBuf,
    },
    /// Minimize the level over a support-network family
    Exact {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = FamilyArg::Minimal)]
        family: FamilyArg,
        /// Refuse families larger than this (default: library cap)
        #[arg(long, conflicts_with = "no_cap")]
        max_candidates: Option<u64>,
        /// Scan every candidate regardless of family size
        #[arg(long)]
        no_cap: bool,
        /// Stop at the first candidate with level at most this
        #[arg(long)]
        target_level: Option<usize>,
        #[arg(long)]
        parallel: bool,
        /// Witness edge-list path; a provenance sidecar is written next to it
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write random binary networks as `<prefix>_<i>.txt`
    Generate {
        #[arg(long)]
        leaves: usize,
        #[arg(long)]
        reticulations: usize,
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long)]
        prefix: PathBuf,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Tabulate counts (and optionally min level) for many networks
    Batch {
        #[arg(long, num_args = 1.., required = true)]
        inputs: Vec<PathBuf>,
        /// `.csv` or `.parquet`
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        exact: bool,
        #[arg(long)]
        parallel: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Count { input, json } => count(&input, json),
        Action::Trails { input } => trails(&input),
        Action::Exact {
            input,
            family,
            max_candidates,
            no_cap,
            target_level,
            parallel,
            out,
        } => {
            let mut cfg = SolveCfg {
                family: family.into(),
                target_level,
                parallel,
                ..SolveCfg::default()
            };
            if no_cap {
                cfg.max_candidates = None;
            } else if max_candidates.is_some() {
                cfg.max_candidates = max_candidates;
            }
            exact(&input, &cfg, out.as_deref())
        }
        Action::Generate {
            leaves,
            reticulations,
            count,
            prefix,
            seed,
        } => generate(leaves, reticulations, count, &prefix, seed),
        Action::Batch {
            inputs,
            out,
            exact,
            parallel,
        } => batch(&inputs, &out, exact, parallel),
        Action::Report => report(),
    }
}

#[derive(Serialize)]
struct CountOutput {
    nodes: usize,
    edges: usize,
    trails: usize,
    all: String,
    minimal: String,
    minimum: String,
}

fn count(input: &Path, as_json: bool) -> Result<()> {
    let net = read_network(input)?;
    let counts = count_support_networks(&net)?;
    let out = CountOutput {
        nodes: net.node_count(),
        edges: net.edge_count(),
        trails: decompose(&net).len(),
        all: counts.all.to_string(),
        minimal: counts.minimal.to_string(),
        minimum: counts.minimum.to_string(),
    };
    if as_json {
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("support networks (A): {}", out.all);
        println!("minimal (B):          {}", out.minimal);
        println!("minimum (C):          {}", out.minimum);
    }
    Ok(())
}

fn trails(input: &Path) -> Result<()> {
    let net = read_network(input)?;
    for (i, trail) in decompose(&net).iter().enumerate() {
        let edges: Vec<String> = trail
            .edges()
            .iter()
            .map(|e| format!("{}->{}", net.label(e.tail), net.label(e.head)))
            .collect();
        println!(
            "{i}\t{}\t{}\t{}",
            trail.trail_type(),
            trail.len(),
            edges.join(" ")
        );
    }
    Ok(())
}

fn exact(input: &Path, cfg: &SolveCfg, out: Option<&Path>) -> Result<()> {
    let net = read_network(input)?;
    tracing::info!(
        input = %input.display(),
        level = level(&net),
        reticulations = net.reticulations().count(),
        "input network"
    );
    let start = Instant::now();
    let sol = solve_min_level(&net, cfg)?;
    let runtime = start.elapsed().as_secs_f64();
    println!("minimum level: {}", sol.level);
    println!("candidates examined: {} of {}", sol.examined, sol.total);
    println!("runtime: {runtime:.3}s");

    if let Some(out) = out {
        write_network(out, &sol.witness)?;
        let payload = Payload::new(
            "exact",
            json!({
                "family": cfg.family.as_str(),
                "max_candidates": cfg.max_candidates,
                "target_level": cfg.target_level,
                "parallel": cfg.parallel,
                "min_level": sol.level,
                "examined": sol.examined,
                "total": sol.total.to_string(),
                "runtime_s": runtime,
            }),
        )
        .with_inputs([input]);
        let prov = write_sidecar(out, payload)?;
        tracing::info!(witness = %out.display(), provenance = %prov.display(), "witness written");
    }
    Ok(())
}

fn generate(
    leaves: usize,
    reticulations: usize,
    count: usize,
    prefix: &Path,
    seed: u64,
) -> Result<()> {
    let params = NetworkGenParams::new(leaves, reticulations);
    let mut generator = NetworkGenerator::new(params, seed)?;
    let stem = prefix
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .context("--prefix must name a file stem")?;
    let mut files = Vec::with_capacity(count);
    let mut seeds = Vec::with_capacity(count);
    for i in 0..count {
        let sample = generator.generate_next()?;
        let path = prefix.with_file_name(format!("{stem}_{i}.txt"));
        write_network(&path, &sample.network)?;
        tracing::debug!(
            file = %path.display(),
            seed = sample.replay.seed,
            edges = sample.network.edge_count(),
            "network written"
        );
        seeds.push(sample.replay.seed);
        files.push(path);
    }
    let payload = Payload::new(
        "generate",
        json!({
            "leaves": leaves,
            "reticulations": reticulations,
            "count": count,
            "seed": seed,
            "sample_seeds": seeds,
        }),
    )
    .with_outputs(&files);
    write_sidecar(prefix, payload)?;
    tracing::info!(count, prefix = %prefix.display(), "networks generated");
    Ok(())
}

fn batch(inputs: &[PathBuf], out: &Path, exact: bool, parallel: bool) -> Result<()> {
    let cfg = SolveCfg {
        parallel,
        ..SolveCfg::default()
    };
    let rows = inputs
        .iter()
        .map(|path| BatchRow::measure(path, exact.then_some(&cfg)))
        .collect::<Result<Vec<_>>>()?;
    write_table(&rows, out)?;
    let payload = Payload::new(
        "batch",
        json!({
            "exact": exact,
            "parallel": parallel,
            "family": cfg.family.as_str(),
            "max_candidates": cfg.max_candidates,
        }),
    )
    .with_inputs(inputs);
    write_sidecar(out, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": supnet::VERSION,
        "families": [SupportFamily::Minimal.as_str(), SupportFamily::Minimum.as_str()],
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
