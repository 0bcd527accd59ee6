use clap::{Parser, Subcommand};
use inpaint_types::TearingStyle;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "inpaint",
    about = "Inpaint Studio - torn collage edits from the command line",
    version = env!("GIT_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Path to config JSON")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Crop and resize an image to the nearest supported aspect ratio")]
    Normalize {
        #[arg(help = "Input image (PNG, JPEG, WebP, GIF, BMP)")]
        input: PathBuf,

        #[arg(short, long, help = "Write the processed PNG here")]
        output: Option<PathBuf>,
    },

    #[command(about = "List available tearing styles")]
    Styles,

    #[command(about = "Paint a mask from recorded strokes and generate the edit")]
    Edit {
        #[arg(help = "Input image")]
        input: PathBuf,

        #[arg(short, long, help = "Stroke script JSON (pointer positions in client coordinates)")]
        strokes: PathBuf,

        #[arg(long, default_value = "wild", help = "Tearing style")]
        style: TearingStyle,

        #[arg(short, long, help = "Brush diameter in image pixels (default from config)")]
        brush: Option<u32>,

        #[arg(short, long, help = "Result PNG path (default: inpaint_result_<timestamp>.png)")]
        output: Option<PathBuf>,

        #[arg(long, help = "Also write the painted mask PNG here")]
        mask_out: Option<PathBuf>,

        #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, help = "Gemini API key")]
        api_key: Option<String>,
    },
}
