//! Xpander CLI entry point.
//!
//! Mirrors the classic generator contract: a parameter file with
//! three lines (`d`, `k`, `seed`; seed `0` = unseeded) in, an edge
//! list out. Flags can replace the parameter file entirely.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use xpander_core::{write_edge_list, GenSpec, LiftConfig, LiftGenerator};

#[derive(Parser)]
#[command(name = "xpander")]
#[command(version)]
#[command(about = "Generate a spectrally-validated random k-lift expander graph", long_about = None)]
struct Cli {
    /// Parameter file with three lines: degree, lift multiplicity,
    /// seed (0 = unseeded). Use "-" for stdin. Superseded by --degree.
    input: Option<PathBuf>,

    /// Output edge-list file (defaults to stdout)
    output: Option<PathBuf>,

    /// Graph degree d (with --lift or --nodes, replaces the input file)
    #[arg(long)]
    degree: Option<usize>,

    /// Lift multiplicity k
    #[arg(long, conflicts_with = "nodes")]
    lift: Option<usize>,

    /// Desired node count; k is rounded up to ceil(nodes / (d+1))
    #[arg(long)]
    nodes: Option<usize>,

    /// Deterministic seed (0 = unseeded)
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Cap on candidate builds before giving up (default: unbounded)
    #[arg(long)]
    max_attempts: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .with(EnvFilter::new(&cli.log_level))
        .init();

    let mut config = load_config(&cli)?;
    if let Some(cap) = cli.max_attempts {
        config = config.with_max_attempts(cap);
    }

    let generator = LiftGenerator::new(config)?;
    let graph = generator.run()?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_edge_list(&graph, &mut writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_edge_list(&graph, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}

/// Resolve the lift config from flags or from the parameter file.
fn load_config(cli: &Cli) -> anyhow::Result<LiftConfig> {
    let mut config = match (cli.degree, cli.lift, cli.nodes) {
        (Some(d), Some(k), None) => LiftConfig::new(d, k),
        (Some(d), None, Some(n)) => LiftConfig::for_node_count(d, n),
        (Some(_), Some(_), Some(_)) => bail!("--lift conflicts with --nodes"),
        (Some(_), None, None) => bail!("--degree requires either --lift or --nodes"),
        (None, Some(_), _) | (None, None, Some(_)) => {
            bail!("--lift/--nodes require --degree")
        }
        (None, None, None) => {
            let input = cli
                .input
                .as_ref()
                .context("either a parameter file or --degree with --lift/--nodes is required")?;
            let spec = if input.as_os_str() == "-" {
                GenSpec::from_reader(io::stdin().lock())?
            } else {
                let file = File::open(input)
                    .with_context(|| format!("cannot open parameter file {}", input.display()))?;
                GenSpec::from_reader(BufReader::new(file))?
            };
            spec.into_config()
        }
    };

    if let Some(seed) = cli.seed {
        if seed < 0 {
            bail!("seed must be non-negative (0 = unseeded), got {seed}");
        }
        config.seed = (seed != 0).then_some(seed as u64);
    }
    Ok(config)
}
