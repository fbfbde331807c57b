use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use showcase::constants::{FPS, RENDER_HEIGHT, RENDER_WIDTH};
use showcase::{Deck, ManualClock, Status};

mod preview;

use crate::preview::WindowOptions;

#[derive(Debug, Parser)]
#[command(name = "showcase", version, about = "Preview rotating content widgets described by a deck file")]
struct Cli {
    #[arg(short, long, help = "Deck file (TOML), defaults to the built-in deck")]
    deck: Option<PathBuf>,

    #[arg(long, default_value_t = RENDER_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = RENDER_HEIGHT)]
    height: i32,

    #[arg(long, default_value_t = FPS)]
    fps: u32,

    #[arg(long, help = "Validate the deck, report each widget and exit")]
    check: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v debug, -vv trace)")]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn check(deck: &Deck) {
    let clock = ManualClock::new(0);
    for spec in &deck.carousels {
        let mut carousel = spec.mount(clock.clone());
        let state = match carousel.status() {
            Status::Active => "enabled",
            Status::Disabled => "disabled",
            Status::Disposed => "disposed",
        };
        let flavor = format!("{:?}", spec.flavor).to_lowercase();
        println!("{:<16} {:<9} {:<8} {} slides", spec.name, flavor, state, spec.slides.len());
        carousel.dispose();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (deck, base_dir) = match &cli.deck {
        Some(path) => {
            let deck = Deck::load(path).with_context(|| format!("loading deck {}", path.display()))?;
            let base_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
            (deck, base_dir)
        }
        None => (Deck::builtin().context("built-in deck is invalid")?, PathBuf::from(".")),
    };

    if cli.check {
        check(&deck);
        return Ok(());
    }

    let options = WindowOptions {
        width: cli.width,
        height: cli.height,
        fps: cli.fps,
    };
    preview::run(&deck, &base_dir, &options)
}
