//! Inpaint Studio - Headless Shell
//!
//! Drives the full edit pipeline from the command line:
//! - `normalize` crops and bounds an image the way the editor does
//! - `styles` lists the tearing styles
//! - `edit` replays recorded strokes into a mask and runs the generation
//!
//! The API key comes from `--api-key` or `GEMINI_API_KEY` and is only held
//! in memory for the duration of the run.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod strokes;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    info!("🚀 Inpaint Studio {} (built {})", env!("GIT_VERSION"), env!("BUILD_TIME"));

    commands::dispatch(cli.command, cli.config.as_deref()).await
}
