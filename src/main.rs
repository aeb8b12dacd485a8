//! glitchwave CLI - Audio-domain glitch art for raw bitmaps

use clap::Parser;
use env_logger::Env;

use glitchwave::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    run(cli)
}
