// Desktop binary; public items are not a library surface.
#![allow(missing_docs)]

mod demo;
mod display;
mod input;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use embedded_graphics::prelude::*;
use gui_system::prelude::*;
use platform::mocks::ScriptedInput;
use platform::{InputError, InputSource};
use tracing_subscriber::EnvFilter;

use crate::display::PngDisplay;
use crate::input::LineInput;

#[derive(Parser)]
#[command(name = "signer-sim")]
#[command(about = "Run the signer UI on the desktop, writing each frame as PNG", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON config (canvas size, font/icon directories, theme)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Directory for frame_NNNN.png output
    #[arg(short, long, default_value = "frames")]
    out_dir: PathBuf,
    /// Keys to replay instead of reading stdin, e.g. "ddc" (u/d/l/r/c)
    #[arg(short, long)]
    keys: Option<String>,
}

fn load_config(path: Option<&PathBuf>) -> Result<GuiConfig> {
    let Some(path) = path else {
        return Ok(GuiConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating {}", cli.out_dir.display()))?;

    let mut input: Box<dyn InputSource> = match &cli.keys {
        Some(keys) => {
            let keys = input::parse_line(keys).map_err(anyhow::Error::msg)?;
            Box::new(ScriptedInput::from_keys(&keys))
        }
        None => {
            eprintln!("keys: u/d/l/r then enter; empty line confirms");
            Box::new(LineInput::new(std::io::stdin().lock()))
        }
    };

    let sink = run_demo(&config, &cli.out_dir, input.as_mut())?;
    tracing::info!(
        frames = sink.frames(),
        dir = %sink.dir().display(),
        last = ?sink.last_path(),
        "frames written"
    );
    Ok(())
}

/// Run the demo flow, writing frames into `out_dir`. Running out of input
/// ends the run like powering off does.
fn run_demo(config: &GuiConfig, out_dir: &Path, input: &mut dyn InputSource) -> Result<PngDisplay> {
    let mut resources = Resources::from_config(config);
    let mut renderer = Renderer::new(
        Size::new(config.canvas_width, config.canvas_height),
        PngDisplay::new(out_dir),
    );

    match demo::run(&mut renderer, &mut resources, input) {
        Ok(()) => tracing::info!("powered off"),
        Err(GuiError::Input(InputError::Closed)) => tracing::info!("input closed"),
        Err(e) => return Err(e).context("running the demo flow"),
    }
    Ok(renderer.into_display())
}
