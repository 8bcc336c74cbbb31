use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "shapefield", version)]
struct Cli {
    /// Log placement and morph diagnostics to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Place shapes and print the set as JSON.
    Generate(GenerateArgs),
    /// Render the backdrop at one point in time as a PNG.
    Frame(FrameArgs),
    /// Render a PNG sequence over simulated time.
    Frames(FramesArgs),
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Canvas width.
    #[arg(long)]
    width: f64,

    /// Canvas height.
    #[arg(long)]
    height: f64,

    /// Backdrop configuration JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed; overrides the config file.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Simulated milliseconds since the backdrop started.
    #[arg(long, default_value_t = 0.0)]
    at_ms: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Frames per second of simulated time.
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// Length of the sequence in milliseconds.
    #[arg(long, default_value_t = 4000.0)]
    duration_ms: f64,

    /// Directory receiving `frame_NNNNN.png`.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<shapefield::BackdropConfig> {
    let Some(path) = path else {
        return Ok(shapefield::BackdropConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    let cfg = shapefield::BackdropConfig::from_json(&text)
        .with_context(|| format!("parse config '{}'", path.display()))?;
    Ok(cfg)
}

fn make_backdrop(common: &CommonArgs) -> anyhow::Result<shapefield::Backdrop> {
    let mut cfg = read_config(common.config.as_deref())?;
    if common.seed.is_some() {
        cfg.seed = common.seed;
    }

    let mut backdrop = shapefield::Backdrop::new(cfg).context("build backdrop")?;
    backdrop.resize(shapefield::Canvas::new(common.width, common.height));
    Ok(backdrop)
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let backdrop = make_backdrop(&args.common)?;
    let set = backdrop.shapes();

    match &args.out {
        Some(out) => {
            ensure_parent(out)?;
            let f = File::create(out).with_context(|| format!("create '{}'", out.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, set).with_context(|| "serialize shape set")?;
            w.flush()
                .with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {} shapes to {}", set.len(), out.display());
        }
        None => {
            let json = serde_json::to_string_pretty(set).with_context(|| "serialize shape set")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.at_ms.is_finite() && args.at_ms >= 0.0,
        "--at-ms must be finite and >= 0"
    );
    let mut backdrop = make_backdrop(&args.common)?;

    // Replay every retarget before `at_ms` so transitions in flight show their progress.
    let interval = backdrop.config().timing.retarget_interval_ms;
    backdrop.start(shapefield::Millis::ZERO);
    let mut t = interval;
    while t < args.at_ms {
        backdrop.tick(shapefield::Millis(t));
        t += interval;
    }
    backdrop.tick(shapefield::Millis(args.at_ms));
    let frame = backdrop.render().context("render frame")?;

    ensure_parent(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let mut backdrop = make_backdrop(&args.common)?;
    let mut sink = shapefield::PngSequenceSink::new(&args.out_dir);

    let opts = shapefield::SequenceOpts {
        fps: args.fps,
        start: shapefield::Millis::ZERO,
        duration_ms: args.duration_ms,
    };
    let n = shapefield::render_sequence(&mut backdrop, opts, &mut sink)
        .context("render frame sequence")?;

    eprintln!("wrote {n} frames to {}", args.out_dir.display());
    Ok(())
}
