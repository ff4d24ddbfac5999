use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use facepipe::{DuplicatePolicy, ImportConfig, JsonSink, RateColumn, TrackSink as _};

#[derive(Parser, Debug)]
#[command(name = "facepipe", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a blend-shape CSV into a track JSON document.
    Import(ImportArgs),
    /// Print the estimated rate and the channel name mapping of a CSV.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct ImportArgs {
    /// Input CSV.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Playback rate to bake the track to.
    #[arg(long)]
    target_fps: Option<f64>,

    /// Source rate to use when the CSV has no usable rate column.
    #[arg(long)]
    fallback_fps: Option<f64>,

    /// Field delimiter.
    #[arg(long)]
    delimiter: Option<char>,

    /// Track base name (defaults to the input file stem).
    #[arg(long)]
    name: Option<String>,

    /// Treat every column as a channel; requires --fallback-fps.
    #[arg(long)]
    no_rate_column: bool,

    /// Keep only the track at the recorded rate.
    #[arg(long)]
    no_bake: bool,

    /// Fail when two columns normalize to the same channel name.
    #[arg(long)]
    reject_duplicates: bool,

    /// JSON config file; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input CSV.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Field delimiter.
    #[arg(long, default_value_t = ',')]
    delimiter: char,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Import(args) => cmd_import(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn load_config(args: &ImportArgs) -> anyhow::Result<ImportConfig> {
    let mut cfg = match &args.config {
        Some(path) => ImportConfig::load(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => ImportConfig::default(),
    };
    if let Some(d) = args.delimiter {
        cfg.delimiter = d;
    }
    if args.target_fps.is_some() {
        cfg.target_rate = args.target_fps;
    }
    if args.fallback_fps.is_some() {
        cfg.fallback_rate = args.fallback_fps;
    }
    if args.name.is_some() {
        cfg.display_name = args.name.clone();
    }
    if args.no_rate_column {
        cfg.rate_column = RateColumn::Absent;
    }
    if args.no_bake {
        cfg.bake = false;
    }
    if args.reject_duplicates {
        cfg.duplicate_policy = DuplicatePolicy::Reject;
    }
    Ok(cfg)
}

fn cmd_import(args: ImportArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args)?;
    facepipe::logging::init_logging(&cfg.logging)?;

    let outcome = facepipe::import_csv_path(&args.in_path, &cfg)
        .with_context(|| format!("import '{}'", args.in_path.display()))?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(out).with_context(|| format!("create '{}'", out.display()))?;
            JsonSink::new(BufWriter::new(f))
                .accept(&outcome)
                .with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let stdout = std::io::stdout();
            JsonSink::new(stdout.lock()).accept(&outcome)?;
        }
    }
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    facepipe::logging::init_default_logging();

    let rows = read_table(&args.in_path, args.delimiter)?;
    let Some(header) = rows.first() else {
        anyhow::bail!("'{}' is empty", args.in_path.display());
    };

    let mut out = std::io::stdout().lock();
    let estimate = facepipe::detect_rate_column(&rows);
    match &estimate {
        Some(est) => writeln!(
            out,
            "rate: {} fps (mean of {} hints, min {}, max {})",
            facepipe::format_rate(est.mean),
            est.samples,
            est.min,
            est.max
        )?,
        None => writeln!(out, "rate: unavailable (no rate column)")?,
    }
    writeln!(out, "data rows: {}", rows.len() - 1)?;
    let rate_col = estimate.map(|_| header.len() - 1);
    for (i, raw) in header.iter().enumerate() {
        if Some(i) == rate_col {
            writeln!(out, "{i:>3}  {raw} (rate)")?;
        } else {
            writeln!(
                out,
                "{i:>3}  {raw} -> {}",
                facepipe::normalize_channel_name(raw)
            )?;
        }
    }
    Ok(())
}

fn read_table(path: &Path, delimiter: char) -> anyhow::Result<Vec<facepipe::Row>> {
    let opts = facepipe::ReaderOptions::with_delimiter(delimiter)?;
    let rows = facepipe::read_rows_from_path(path, opts)
        .with_context(|| format!("read csv '{}'", path.display()))?;
    Ok(rows)
}
