//! ugen - play a unit-generator graph definition
//!
//! Run with: cargo run -- demos/tone.json --duration 2

mod app;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ugen")]
#[command(about = "Play a JSON unit-generator graph", long_about = None)]
struct Cli {
    /// Graph definition (JSON)
    definition: PathBuf,

    /// Seconds to play; plays until interrupted when omitted
    #[arg(short, long)]
    duration: Option<f64>,

    /// Engine config (JSON); the device sample rate always wins
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    app::Player::load(&cli.definition, cli.config.as_deref())?.run(cli.duration)
}
