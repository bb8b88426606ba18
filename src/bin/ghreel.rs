use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use ghreel::animation::spring::overshoot_ratio;
use ghreel::composition::registry;
use ghreel::{EvalThreading, Evaluator, Fps, FrameIndex, FrameRange, Spring, SpringConfig};

#[derive(Parser, Debug)]
#[command(name = "ghreel", version, about = "Spring-animated GitHub activity reels")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the registered compositions.
    List,
    /// Evaluate one frame and write its scene graph as JSON.
    Frame(FrameArgs),
    /// Evaluate a frame range and write one scene graph per line (JSON Lines).
    Frames(FramesArgs),
    /// Tabulate a spring curve.
    Spring(SpringArgs),
}

#[derive(Args, Debug)]
struct CompositionArgs {
    /// Registered composition id (see `ghreel list`).
    #[arg(long, short = 'c')]
    composition: String,

    /// JSON file replacing the composition's seed props.
    #[arg(long)]
    props: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    comp: CompositionArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    comp: CompositionArgs,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); the composition end when omitted.
    #[arg(long)]
    end: Option<u64>,

    /// Output JSON Lines path.
    #[arg(long)]
    out: PathBuf,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames evaluated per chunk.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

#[derive(Args, Debug)]
struct SpringArgs {
    /// Oscillating mass.
    #[arg(long, default_value_t = SpringConfig::DEFAULT_MASS)]
    mass: f64,

    /// Spring constant.
    #[arg(long, default_value_t = SpringConfig::DEFAULT_STIFFNESS)]
    stiffness: f64,

    /// Damping coefficient.
    #[arg(long, default_value_t = SpringConfig::DEFAULT_DAMPING)]
    damping: f64,

    /// Initial velocity toward the target.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    velocity: f64,

    /// Clamp overshoot at the target.
    #[arg(long, default_value_t = false)]
    clamp: bool,

    /// Frame rate.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Start value.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    from: f64,

    /// Rest value.
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    to: f64,

    /// Frames to tabulate; the settle frame (at most 10000) when omitted.
    #[arg(long)]
    frames: Option<u64>,
}

/// Row cap when `--frames` is omitted.
const DEFAULT_MAX_ROWS: u64 = 10_000;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Spring(args) => cmd_spring(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_composition(args: &CompositionArgs) -> anyhow::Result<ghreel::Composition> {
    let props = match &args.props {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("read props '{}'", path.display()))?,
        ),
        None => None,
    };
    registry::build(&args.composition, props.as_deref())
        .with_context(|| format!("build composition '{}'", args.composition))
}

fn create_output(path: &Path) -> anyhow::Result<BufWriter<File>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    Ok(BufWriter::new(f))
}

fn cmd_list() -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for entry in registry::COMPOSITIONS {
        let comp = registry::build(entry.id, None)
            .with_context(|| format!("build composition '{}'", entry.id))?;
        writeln!(
            out,
            "{:<22}{:>5} frames  {} fps  {}x{}  {}",
            comp.id,
            comp.duration.0,
            comp.fps.as_f64(),
            comp.canvas.width,
            comp.canvas.height,
            entry.description
        )?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let comp = load_composition(&args.comp)?;
    let graph = Evaluator::eval_frame(&comp, FrameIndex(args.frame))?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&graph)
    } else {
        serde_json::to_string(&graph)
    }
    .context("serialize scene graph")?;

    match &args.out {
        Some(path) => {
            let mut out = create_output(path)?;
            writeln!(out, "{json}")?;
            out.flush()?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let comp = load_composition(&args.comp)?;
    let end = args.end.unwrap_or(comp.duration.0);
    let range = FrameRange::new(FrameIndex(args.start), FrameIndex(end))?;
    let threading = EvalThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };

    let mut out = create_output(&args.out)?;
    let mut written = 0u64;
    Evaluator::eval_range_with(&comp, range, &threading, |graph| {
        serde_json::to_writer(&mut out, &graph)
            .map_err(|e| ghreel::ReelError::serde(e.to_string()))?;
        out.write_all(b"\n")
            .map_err(|e| ghreel::ReelError::Other(e.into()))?;
        written += 1;
        Ok(())
    })?;
    out.flush()?;

    eprintln!("wrote {written} frames to {}", args.out.display());
    Ok(())
}

fn cmd_spring(args: SpringArgs) -> anyhow::Result<()> {
    let config = SpringConfig {
        mass: args.mass,
        stiffness: args.stiffness,
        damping: args.damping,
        initial_velocity: args.velocity,
        overshoot_clamping: args.clamp,
    };
    let fps = Fps::new(args.fps, 1)?;
    let spring = Spring::new(config)?;
    let settle = spring.settle_frames(fps);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "# regime: {:?}", spring.regime())?;
    writeln!(out, "# damping ratio: {:.4}", config.damping_ratio())?;
    writeln!(
        out,
        "# overshoot: {:.2}%",
        overshoot_ratio(config.damping_ratio()) * 100.0
    )?;
    writeln!(out, "# settle frame: {settle}")?;
    writeln!(out, "frame\tvalue")?;
    let last = match args.frames {
        Some(n) => n,
        None if settle > DEFAULT_MAX_ROWS => {
            tracing::warn!(settle, "settle frame past {DEFAULT_MAX_ROWS}, table truncated");
            DEFAULT_MAX_ROWS
        }
        None => settle,
    };
    for frame in 0..=last {
        let v = spring.value(frame as i64, fps, args.from, args.to);
        writeln!(out, "{frame}\t{v:.6}")?;
    }
    Ok(())
}
