use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(name = "profile-page", version)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the profile page as a single HTML document.
    Render(RenderArgs),
    /// Print the entrance sequence evaluated frame by frame, as JSON.
    Timeline(TimelineArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Site config JSON. Defaults to the built-in profile.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output HTML path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Site config JSON. Defaults to the built-in profile.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Output JSON path. Prints to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Timeline(args) => cmd_timeline(args),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "profile_page=debug,info"
    } else {
        "profile_page=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<profile_page::SiteConfig> {
    match path {
        Some(path) => profile_page::SiteConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display())),
        None => Ok(profile_page::SiteConfig::default()),
    }
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let html = profile_page::Page::new(&config).render()?;

    create_parent_dir(&args.out)?;
    std::fs::write(&args.out, html)
        .with_context(|| format!("write html '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let fps = profile_page::Fps::new(args.fps, 1)?;
    let timeline = profile_page::entrance_timeline(&config.motion).resume();
    let frames: Vec<profile_page::FrameState> =
        profile_page::Playback::new(&timeline, fps)?.collect();

    let json = serde_json::to_string_pretty(&frames).context("serialize frames")?;
    match args.out {
        Some(out) => {
            create_parent_dir(&out)?;
            std::fs::write(&out, json)
                .with_context(|| format!("write frames '{}'", out.display()))?;
            eprintln!("wrote {} frames to {}", frames.len(), out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
