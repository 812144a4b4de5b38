//! Render a preset scene to a PNG file.

mod cli_options;

use anyhow::{anyhow, Context, Result};
use env_logger::Env;
use prism_renderer::{RenderConfig, RenderSession};

use cli_options::{parse_args, CliOptions};

const DEFAULT_LOGGING_LEVEL: &str = "info";

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();

    let options = parse_args(std::env::args().skip(1)).map_err(|e| anyhow!(e))?;
    if options.help {
        println!("usage: {}", CliOptions::message());
        return Ok(());
    }

    let mut config = match &options.config {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("Failed to load render config {}", path.display()))?,
        None => RenderConfig::default(),
    };
    if let Some(parallel) = options.parallel {
        config.parallel = parallel;
    }

    log::info!(
        "Rendering preset {} at {}x{}",
        options.preset,
        options.width,
        options.height
    );

    let scene = options
        .preset
        .build()
        .with_context(|| format!("Failed to build preset {}", options.preset))?;
    let mut session = RenderSession::new(scene, options.width, options.height, config);
    session.render();

    session
        .image()
        .save_png(&options.output)
        .with_context(|| format!("Failed to save {}", options.output.display()))?;
    log::info!("Saved to {}", options.output.display());

    Ok(())
}
