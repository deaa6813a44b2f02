//! lamco-videowall - Video Wall Layout Inspector
//!
//! Entry point for the command-line tool. Loads a wall configuration,
//! optionally changes it, fits it into a container and prints the result.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lamco_videowall::config::EditorConfig;
use lamco_videowall::geometry::ScreenSize;
use lamco_videowall::settings::{JsonFileStore, SettingsStore};
use lamco_videowall::utils::format_user_error;
use lamco_videowall::wall::{Resolution, WallConfig};
use lamco_videowall::WallEditor;

/// Command-line arguments for lamco-videowall
#[derive(Parser, Debug)]
#[command(name = "lamco-videowall")]
#[command(version, about = "Video wall layout inspector", long_about = None)]
pub struct Args {
    /// Configuration file path (TOML)
    #[arg(short, long, env = "VIDEOWALL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Saved settings file (JSON)
    #[arg(short, long, env = "VIDEOWALL_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Output resolution (4k|2k); applied and saved
    #[arg(short, long)]
    pub resolution: Option<Resolution>,

    /// Output rows; applied and saved
    #[arg(long)]
    pub rows: Option<u32>,

    /// Output columns; applied and saved
    #[arg(long)]
    pub cols: Option<u32>,

    /// Container size the surface is fitted into (WxH)
    #[arg(long, value_parser = parse_size)]
    pub container: Option<ScreenSize>,

    /// Padding on each side of the container
    #[arg(long)]
    pub padding: Option<f64>,

    /// Print the render snapshot as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Verbose logging (can be specified multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log format (json|pretty|compact)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Write logs to file (in addition to stderr)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn parse_size(value: &str) -> std::result::Result<ScreenSize, String> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", value))?;
    let width: f64 = w.trim().parse().map_err(|e| format!("bad width '{}': {}", w, e))?;
    let height: f64 = h.trim().parse().map_err(|e| format!("bad height '{}': {}", h, e))?;
    Ok(ScreenSize::new(width, height))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EditorConfig::load(path),
        None => Ok(EditorConfig::default_config()),
    };
    let config = match config {
        Ok(config) => config.with_overrides(args.container, args.padding),
        Err(e) => {
            eprintln!("{}", format_user_error(&e));
            return Err(e);
        }
    };

    init_logging(&args, &config)?;

    info!("════════════════════════════════════════════════════════");
    info!("  lamco-videowall v{}", env!("CARGO_PKG_VERSION"));
    info!("  Built: {}", env!("BUILD_DATE"));
    info!("  Commit: {}", env!("GIT_HASH"));
    info!("════════════════════════════════════════════════════════");
    debug!("Config: {:?}", config);

    if let Err(e) = run(&args, &config) {
        eprintln!("{}", format_user_error(&e));
        return Err(e);
    }

    Ok(())
}

fn run(args: &Args, config: &EditorConfig) -> Result<()> {
    let settings_path = args
        .settings
        .clone()
        .or_else(|| config.wall.settings_path.clone());
    let mut store = settings_path.map(JsonFileStore::new);

    // Saved settings win over the config file
    let base = store
        .as_ref()
        .and_then(|s| s.load())
        .map(WallConfig::from)
        .unwrap_or_else(|| config.wall.wall_config());

    let mut editor = match WallEditor::new(base, config.editor_options()) {
        Ok(editor) => editor,
        Err(e) => {
            warn!("Saved wall configuration ignored: {}", e);
            WallEditor::new(config.wall.wall_config(), config.editor_options())?
        }
    };

    if args.resolution.is_some() || args.rows.is_some() || args.cols.is_some() {
        let current = *editor.config();
        let requested = WallConfig::new(
            args.resolution.unwrap_or(current.resolution),
            args.rows.unwrap_or(current.rows),
            args.cols.unwrap_or(current.cols),
        );

        editor
            .apply_config(requested)
            .context("Failed to apply wall configuration")?;

        if let Some(store) = store.as_mut() {
            editor.save_settings(store);
            info!("Saved wall configuration to {:?}", store.path());
        }
    }

    editor.set_container_size(config.container());

    let snapshot = editor.render_snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let wall = editor.config();
    println!(
        "Wall:    {}x{} @ {}",
        wall.rows,
        wall.cols,
        wall.resolution.display_name()
    );
    println!(
        "Canvas:  {} x {}",
        snapshot.canvas.total_width, snapshot.canvas.total_height
    );
    println!(
        "Surface: {:.1} x {:.1} (container {:.0} x {:.0})",
        snapshot.surface.width,
        snapshot.surface.height,
        config.surface.container_width,
        config.surface.container_height
    );
    println!();
    println!("{:<4} {:<24} {}", "#", "Virtual", "Screen");
    for (output, view) in editor.layout().outputs().zip(&snapshot.outputs) {
        let v = output.virtual_rect;
        let s = view.screen_rect;
        println!(
            "{:<4} {:<24} {:.1}x{:.1}+{:.1}+{:.1}",
            output.index,
            format!("{}x{}+{}+{}", v.width, v.height, v.x, v.y),
            s.width,
            s.height,
            s.x,
            s.y
        );
    }

    Ok(())
}

fn init_logging(args: &Args, config: &EditorConfig) -> Result<()> {
    let log_level = match args.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("lamco_videowall={},warn", log_level))
    });

    let format = args
        .log_format
        .clone()
        .unwrap_or_else(|| config.logging.format.clone());

    let log_file = args.log_file.clone().or_else(|| {
        config
            .logging
            .log_dir
            .as_ref()
            .map(|dir| dir.join("lamco-videowall.log"))
    });

    // If log file is specified, write to both stderr and file
    if let Some(log_file_path) = &log_file {
        let file = File::create(log_file_path)
            .with_context(|| format!("Failed to create log file: {}", log_file_path.display()))?;

        match format.as_str() {
            "json" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(std::io::stderr),
                    )
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(file)
                            .with_ansi(false),
                    )
                    .init();
            }
            "compact" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .compact()
                            .with_writer(std::io::stderr),
                    )
                    .with(
                        tracing_subscriber::fmt::layer()
                            .compact()
                            .with_writer(file)
                            .with_ansi(false),
                    )
                    .init();
            }
            _ => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .pretty()
                            .with_writer(std::io::stderr),
                    )
                    .with(
                        tracing_subscriber::fmt::layer()
                            .with_writer(file)
                            .with_ansi(false),
                    )
                    .init();
            }
        }
        info!("Logging to file: {}", log_file_path.display());
    } else {
        // Stderr only; stdout carries the report
        match format.as_str() {
            "json" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                    .init();
            }
            "compact" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .compact()
                            .with_writer(std::io::stderr),
                    )
                    .init();
            }
            _ => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .pretty()
                            .with_writer(std::io::stderr),
                    )
                    .init();
            }
        }
    }

    Ok(())
}
