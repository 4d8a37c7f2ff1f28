// crates/sortviz-cli/src/main.rs

#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sortviz_core::{
    io::{read_trace_auto, stream_steps_auto, write_trace_auto},
    io_jsonl::write_steps_jsonl,
    Algorithm, Validator, Value,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "sortviz",
    about = "sortviz trace CLI",
    long_about = "sortviz trace CLI.\n\nUse this tool to generate sorting step traces, validate stored traces, and inspect merge-sort recursion trees.",
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Generate a step trace for one algorithm.
    /// If --out ends with `.jsonl`, writes one step per line for streaming.
    Generate {
        /// Algorithm to trace
        #[arg(value_enum, long)]
        algorithm: AlgoOpt,

        /// Comma-separated input values, e.g. "5,1,4,2,8"
        #[arg(long)]
        input: Option<String>,

        /// Generate a random input of this length instead of --input
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        random: Option<u32>,

        /// RNG seed for --random (same seed, same array)
        #[arg(long, default_value_t = 2024)]
        seed: u64,

        /// Output path for the trace (JSON/CBOR/JSONL)
        #[arg(long, default_value = "trace.json")]
        out: PathBuf,
    },

    /// Validate a stored trace against the engine contract
    Check {
        /// Input trace path (JSON/CBOR)
        #[arg(long)]
        trace: PathBuf,

        /// Skip the final-snapshot checks (accept prefixes captured mid-run)
        #[arg(long, default_value_t = false)]
        lenient: bool,
    },

    /// Build the merge-sort recursion tree for an input array
    Tree {
        /// Comma-separated input values, e.g. "5,1,4,2,8"
        #[arg(long)]
        input: Option<String>,

        /// Generate a random input of this length instead of --input
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        random: Option<u32>,

        /// RNG seed for --random (same seed, same array)
        #[arg(long, default_value_t = 2024)]
        seed: u64,

        /// Output path for the tree as pretty JSON (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Convert a trace (JSON/CBOR/JSONL) -> JSON Lines (NDJSON) of steps
    ExportJsonl {
        /// Input trace path (JSON/CBOR/JSONL)
        #[arg(long)]
        input: PathBuf,
        /// Output JSONL path
        #[arg(long)]
        output: PathBuf,
    },

    /// List the supported algorithms with their catalog entries
    List,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum AlgoOpt {
    /// Adjacent-compare passes that bubble maxima rightward
    Bubble,
    /// Scan for the minimum of the unsorted suffix, swap it into place
    Selection,
    /// Grow a sorted prefix by shifting and inserting
    Insertion,
    /// Recursive halving with an interleaved merge
    Merge,
    /// Lomuto partition around the last element
    Quick,
    /// Gapped insertion with halving gaps
    Shell,
    /// Histogram counts, rebuilt in one reveal pass
    Counting,
    /// Per-digit stable passes, least significant first
    Radix,
    /// Value-ranged buckets, insertion-sorted and concatenated
    Bucket,
    /// Max-heap build followed by repeated root extraction
    Heap,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Generate {
            algorithm,
            input,
            random,
            seed,
            out,
        } => generate(algorithm, input, random, seed, out),

        Cmd::Check { trace, lenient } => check(trace, lenient),

        Cmd::Tree {
            input,
            random,
            seed,
            out,
        } => tree(input, random, seed, out),

        Cmd::ExportJsonl { input, output } => export_jsonl(input, output),

        Cmd::List => list(),
    }
}

/// Initialize tracing with an env-driven filter (default INFO).
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_target(false).with_level(true).compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Ensure the parent directory for a file exists.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating parent directory {}", dir.display()))?;
        }
    }
    Ok(())
}

/// Parse a comma-separated list of values; empty fields are skipped.
fn parse_values(list: &str) -> Result<Vec<Value>> {
    list.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<Value>()
                .with_context(|| format!("invalid value {t:?} in --input"))
        })
        .collect()
}

/// Resolve the input array from `--input`/`--random`, defaulting to a
/// standard-length random array.
fn resolve_input(input: Option<String>, random: Option<u32>, seed: u64) -> Result<Vec<Value>> {
    use sortviz_engine::input::{random_array, STANDARD_LEN};

    match (input, random) {
        (Some(_), Some(_)) => bail!("--input and --random are mutually exclusive"),
        (Some(list), None) => parse_values(&list),
        (None, Some(len)) => Ok(random_array(len as usize, seed)),
        (None, None) => Ok(random_array(STANDARD_LEN, seed)),
    }
}

fn generate(
    algorithm: AlgoOpt,
    input: Option<String>,
    random: Option<u32>,
    seed: u64,
    out: PathBuf,
) -> Result<()> {
    use sortviz_engine::dispatch::generate_trace;

    let algorithm = match algorithm {
        AlgoOpt::Bubble => Algorithm::Bubble,
        AlgoOpt::Selection => Algorithm::Selection,
        AlgoOpt::Insertion => Algorithm::Insertion,
        AlgoOpt::Merge => Algorithm::Merge,
        AlgoOpt::Quick => Algorithm::Quick,
        AlgoOpt::Shell => Algorithm::Shell,
        AlgoOpt::Counting => Algorithm::Counting,
        AlgoOpt::Radix => Algorithm::Radix,
        AlgoOpt::Bucket => Algorithm::Bucket,
        AlgoOpt::Heap => Algorithm::Heap,
    };

    let values = resolve_input(input, random, seed)?;
    // The engine asserts this; fail with a friendly message instead.
    if algorithm == Algorithm::Radix && values.iter().any(|&v| v < 0) {
        bail!("radix sort requires non-negative values");
    }

    info!(%algorithm, n = values.len(), "generating trace");
    let trace = generate_trace(algorithm, &values);

    ensure_parent_dir(&out)?;

    // If the extension is .jsonl, write step-per-line NDJSON (no envelope).
    let ext = out
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase());

    if ext.as_deref() == Some("jsonl") {
        write_steps_jsonl(&out, &trace.steps)
            .with_context(|| format!("writing steps to {}", out.display()))?;
    } else {
        write_trace_auto(&out, &trace)
            .with_context(|| format!("writing trace to {}", out.display()))?;
    }

    println!(
        "Traced {} over {} values → {} steps → {}",
        algorithm,
        values.len(),
        trace.steps.len(),
        out.display()
    );
    Ok(())
}

fn check(trace: PathBuf, lenient: bool) -> Result<()> {
    info!(trace=%trace.display(), lenient, "validating trace");

    let tf = read_trace_auto(&trace)
        .with_context(|| format!("reading trace from {}", trace.display()))?;
    let validator = if lenient {
        Validator::new()
    } else {
        Validator::strict()
    };
    let report = validator
        .validate(&tf)
        .with_context(|| format!("validating {}", trace.display()))?;

    println!("OK: {} ({}, {})", trace.display(), tf.algorithm, report);
    Ok(())
}

fn tree(
    input: Option<String>,
    random: Option<u32>,
    seed: u64,
    out: Option<PathBuf>,
) -> Result<()> {
    use sortviz_engine::tree::build_merge_tree;

    let values = resolve_input(input, random, seed)?;
    info!(n = values.len(), "building merge tree");

    let root = build_merge_tree(&values);
    let json = serde_json::to_string_pretty(&root).context("serialize tree to JSON")?;

    match out {
        Some(path) => {
            ensure_parent_dir(&path)?;
            std::fs::write(&path, json.as_bytes())
                .with_context(|| format!("writing tree to {}", path.display()))?;
            println!(
                "Tree over {} values → depth {}, {} leaves → {}",
                values.len(),
                root.depth(),
                root.leaf_count(),
                path.display()
            );
        }
        None => {
            println!("{json}");
            println!(
                "Tree over {} values → depth {}, {} leaves",
                values.len(),
                root.depth(),
                root.leaf_count()
            );
        }
    }
    Ok(())
}

/// Convert any trace file (JSON/CBOR/JSONL) into JSON Lines of steps.
fn export_jsonl(input: PathBuf, output: PathBuf) -> Result<()> {
    info!(infile=%input.display(), outfile=%output.display(), "export to jsonl");
    let iter = stream_steps_auto(&input).context("open input stream")?;

    ensure_parent_dir(&output)?;
    let f = File::create(&output).with_context(|| format!("create {}", output.display()))?;
    let mut w = BufWriter::new(f);

    let mut n = 0usize;
    for item in iter {
        let step = item?;
        let line = serde_json::to_string(&step).context("serialize step to JSON line")?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
        n += 1;
    }
    w.flush()?;

    println!("Exported {n} steps → {}", output.display());
    Ok(())
}

fn list() -> Result<()> {
    for algorithm in Algorithm::ALL {
        println!("{} ({})", algorithm.name(), algorithm.id());
        println!("    {}", algorithm.description());
        println!("    Time Complexity: {}", algorithm.complexity());
        println!("    Video: {}", algorithm.video());
    }
    Ok(())
}
