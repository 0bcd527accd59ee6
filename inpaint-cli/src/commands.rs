use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};
use inpaint_client::{style_fragment, GenerationClient, GenerationRequest};
use inpaint_core::{
    geometry::{normalize, plan_geometry},
    mask::MaskCanvas,
    read_upload, Session, SessionStore,
};
use inpaint_types::{ApiKey, AppConfig, GenerationError, TearingStyle};
use tracing::{debug, info, warn};

use crate::cli::Commands;
use crate::strokes::StrokeScript;

/// Run one subcommand. Only `edit` reads the config file.
pub async fn dispatch(command: Commands, config_path: Option<&Path>) -> Result<()> {
    match command {
        Commands::Normalize { input, output } => handle_normalize(&input, output.as_deref()),
        Commands::Styles => handle_styles(),
        Commands::Edit { input, strokes, style, brush, output, mask_out, api_key } => {
            let config = inpaint_core::load_config(config_path)?;
            debug!("Using model {} at {}", config.generation.model, config.generation.base_url);
            let args = EditArgs { input, strokes, style, brush, output, mask_out, api_key };
            handle_edit(&config, args).await
        }
    }
}

pub fn handle_normalize(input: &Path, output: Option<&Path>) -> Result<()> {
    let source = read_upload(input).with_context(|| format!("Failed to load {}", input.display()))?;
    let plan = plan_geometry(source.width(), source.height());
    let processed = normalize(&source);

    println!("{}", "Normalized image".cyan().bold());
    println!("  Source: {}x{}", source.width(), source.height());
    println!("  Ratio:  {}", plan.ratio.label);
    println!(
        "  Crop:   {:.1}x{:.1} at ({:.1}, {:.1})",
        plan.crop.width, plan.crop.height, plan.crop.x, plan.crop.y
    );
    println!("  Output: {}x{}", processed.width(), processed.height());

    if let Some(path) = output {
        processed.save_png(path)?;
        println!("{} Saved {}", "✓".green(), path.display());
    }
    Ok(())
}

pub fn handle_styles() -> Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Style", "Name", "Effect"]);
    for style in TearingStyle::ALL {
        table.add_row(vec![style.id(), style.label(), style_fragment(style)]);
    }
    println!("{table}");
    Ok(())
}

pub struct EditArgs {
    pub input: PathBuf,
    pub strokes: PathBuf,
    pub style: TearingStyle,
    pub brush: Option<u32>,
    pub output: Option<PathBuf>,
    pub mask_out: Option<PathBuf>,
    pub api_key: Option<String>,
}

pub async fn handle_edit(config: &AppConfig, args: EditArgs) -> Result<()> {
    let api_key = args
        .api_key
        .and_then(ApiKey::new)
        .ok_or(GenerationError::MissingApiKey)
        .context("Set GEMINI_API_KEY or pass --api-key")?;

    let brush = args.brush.unwrap_or(config.editor.default_brush_size);
    let store = SessionStore::new(
        Session::new(brush).with_api_key(api_key).select_style(args.style),
    );

    let source = read_upload(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;
    let processed = normalize(&source);
    let mut canvas = MaskCanvas::for_image(&processed, brush);
    store.update(|session| session.upload(processed));

    let script = StrokeScript::load(&args.strokes)?;
    for export in script.replay(&mut canvas)? {
        store.update(|session| session.mask_changed(export));
    }

    let painted = store.snapshot();
    if let (Some(path), Some(mask)) = (&args.mask_out, painted.mask()) {
        std::fs::write(path, mask.png())
            .with_context(|| format!("Failed to write mask {}", path.display()))?;
        info!("Mask written to {}", path.display());
    }

    let ticket = store.begin_generation()?;
    let request = GenerationRequest::from_png(
        &ticket.image().to_png()?,
        ticket.mask().png(),
        ticket.style(),
    )?;
    println!(
        "{} Generating {} edit ({} ratio)...",
        "…".cyan(),
        ticket.style().label(),
        request.aspect_ratio()
    );

    let client = GenerationClient::from_config(&config.generation)?;
    let result = client.generate(ticket.api_key(), &request).await;
    store.finish_generation(&ticket, result);

    let session = store.snapshot();
    let Some(image) = session.result() else {
        let message = session.error().unwrap_or("Generation failed.").to_string();
        warn!("{}", message);
        anyhow::bail!(message);
    };

    let output = args.output.unwrap_or_else(default_output_path);
    image.save_png(&output)?;
    println!("{} Result saved to {}", "✓".green(), output.display());
    Ok(())
}

fn default_output_path() -> PathBuf {
    PathBuf::from(format!("inpaint_result_{}.png", chrono::Local::now().format("%Y%m%d_%H%M%S")))
}
