//! Hamburger Morph preview
//!
//! Opens a window with four animated icon buttons, or prints the
//! transition plan between two states when run with `--plan`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use hamburger_morph::app::PreviewApp;
use hamburger_morph::{AnimatedButton, AnimatedState, ButtonConfig, Timeline};

/// Animated hamburger icon preview
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a button configuration JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the transition from FROM to TO as JSON instead of opening a window
    #[arg(long, num_args = 2, value_names = ["FROM", "TO"])]
    plan: Option<Vec<AnimatedState>>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.debug { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &args.config {
        Some(path) => {
            info!("Loading config from: {:?}", path);
            Some(ButtonConfig::load_from_file(path)?)
        }
        None => None,
    };

    if let Some(states) = &args.plan {
        let [from, to] = states[..] else {
            anyhow::bail!("--plan takes exactly two states");
        };
        return print_plan(config.unwrap_or_default(), from, to);
    }

    info!("Hamburger Morph preview starting...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([360.0, 480.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title("Hamburger Morph"),
        ..Default::default()
    };

    eframe::run_native(
        "Hamburger Morph",
        native_options,
        Box::new(move |cc| Ok(Box::new(PreviewApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))?;

    Ok(())
}

/// Build the transition headlessly and dump it to stdout
fn print_plan(config: ButtonConfig, from: AnimatedState, to: AnimatedState) -> Result<()> {
    let mut timeline = Timeline::new();
    let mut button = AnimatedButton::from_config(&config, &mut timeline);
    button.set_state(from, &mut timeline);

    let outcome = button.request_transition(to, &mut timeline);
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
