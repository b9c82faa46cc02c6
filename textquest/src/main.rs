use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use textquest::banner::BANNER;
use textquest::config::Config;
use textquest::output::sink::ConsoleSink;
use textquest::rendering::{MIN_WIDTH, Theme};
use textquest::{GameState, builtin_world, load_world_file};

#[derive(Debug, Parser)]
#[command(name = "textquest", version, about = "Play a room-and-item text adventure")]
struct Args {
    /// TOML config file (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// YAML world file (defaults to the built-in world)
    #[arg(long)]
    world: Option<PathBuf>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Wrap room text at this many columns
    #[arg(long)]
    width: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let cfg = match args.config.as_deref() {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let mut cfg = cfg.with_env()?;
    if let Some(world) = args.world {
        cfg.world_file = Some(world);
    }
    if args.no_color {
        cfg.color = false;
    }
    if let Some(width) = args.width {
        cfg.width = width.max(MIN_WIDTH);
    }

    init_tracing(&cfg.log_filter)?;

    let loaded = match cfg.world_file.as_deref() {
        Some(path) => load_world_file(path).with_context(|| format!("loading world {}", path.display()))?,
        None => builtin_world().context("loading built-in world")?,
    };
    let mut game = loaded
        .into_game()?
        .with_theme(Theme::for_color(cfg.color))
        .with_width(cfg.width)
        .with_prompt(cfg.prompt.clone());

    println!("{BANNER}");

    let mut sink = ConsoleSink::new(std::io::stdout().lock(), cfg.color);
    let state = game.run(std::io::stdin().lock(), &mut sink)?;
    tracing::info!(?state, won = state == GameState::Won, items = game.player().item_count(), "session ended");

    Ok(())
}

fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, prelude::*};

    color_eyre::install().map_err(|e| anyhow::anyhow!("{e}"))?;

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(tracing_error::ErrorLayer::default())
        .init();
    Ok(())
}
