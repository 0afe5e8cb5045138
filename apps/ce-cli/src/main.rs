use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ce_core::{PointRole, Real};
use ce_curve::sample_curve;
use ce_editor::{EditorConfig, EditorError};
use ce_link::LinkError;
use clap::{Parser, Subcommand};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error(transparent)]
    Link(#[from] LinkError),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "ce-cli")]
#[command(about = "Curve editor CLI - encode, decode and sample shareable curve links", long_about = None)]
struct Cli {
    /// Editor configuration YAML (defaults, sampling, base location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a shareable link from four control values
    Encode {
        p0: Real,
        p1: Real,
        p2: Real,
        p3: Real,
        /// Base location (overrides the configured one)
        #[arg(long)]
        base: Option<String>,
    },
    /// Print the control values carried by a link, defaults applied
    Decode {
        /// Absolute URL or bare query string
        link: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the sampled curve for a link
    Sample {
        /// Absolute URL or bare query string
        link: String,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Encode {
            p0,
            p1,
            p2,
            p3,
            base,
        } => cmd_encode(&config, [p0, p1, p2, p3], base.as_deref()),
        Commands::Decode { link, json } => cmd_decode(&config, &link, json),
        Commands::Sample { link, json } => cmd_sample(&config, &link, json),
    }
}

fn load_config(path: Option<&Path>) -> CliResult<EditorConfig> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            Ok(EditorConfig::load_yaml(path)?)
        }
        None => Ok(EditorConfig::default()),
    }
}

/// Values a link seeds the editor with: absent fields take the configured
/// defaults, everything is clamped into the value domain.
fn resolve(config: &EditorConfig, link: &str) -> [Real; 4] {
    ce_link::decode(link)
        .or(config.defaults.as_array())
        .map(ce_core::clamp_value)
}

fn cmd_encode(config: &EditorConfig, values: [Real; 4], base: Option<&str>) -> CliResult<()> {
    let base = base.unwrap_or(&config.base_location);
    let url = ce_link::encode(base, values)?;
    println!("{url}");
    Ok(())
}

fn cmd_decode(config: &EditorConfig, link: &str, json: bool) -> CliResult<()> {
    let values = resolve(config, link);
    if json {
        let named: BTreeMap<&str, Real> = PointRole::ALL
            .iter()
            .map(|role| (role.name(), values[role.index()]))
            .collect();
        println!("{}", serde_json::to_string_pretty(&named)?);
    } else {
        for role in PointRole::ALL {
            println!("{role} = {}", values[role.index()]);
        }
    }
    Ok(())
}

fn cmd_sample(config: &EditorConfig, link: &str, json: bool) -> CliResult<()> {
    let values = resolve(config, link);
    let points = sample_curve(values, &config.sampling);
    if json {
        println!("{}", serde_json::to_string(&points)?);
    } else {
        for p in &points {
            println!("{:.4}\t{:.4}", p.x, p.y);
        }
    }
    Ok(())
}
