#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(clippy::collapsible_if)]

mod app;
mod canvas;

use std::path::PathBuf;

use app::CurveEditorApp;
use ce_editor::EditorConfig;
use clap::Parser;

#[derive(Parser)]
#[command(name = "ce-ui")]
#[command(about = "Interactive four-point curve editor", long_about = None)]
struct Args {
    /// Shareable link to open (absolute URL or bare query string)
    #[arg(long)]
    link: Option<String>,

    /// Editor configuration YAML
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = match args.config.as_deref().map(EditorConfig::load_yaml) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            tracing::error!(%err, "failed to load config, using defaults");
            EditorConfig::default()
        }
        None => EditorConfig::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 780.0])
            .with_title("Curve Editor"),
        ..Default::default()
    };

    eframe::run_native(
        "Curve Editor",
        options,
        Box::new(move |cc| Ok(Box::new(CurveEditorApp::new(cc, config, args.link)))),
    )
}
