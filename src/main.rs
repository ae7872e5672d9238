use anyhow::Context;
use clap::Parser;
use eframe::egui;
use log::{debug, info};

use mindmap::app::MindMapApp;
use mindmap::cli::Args;
use mindmap::config::{self, LOG_FILE, SETTINGS_FILE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments first (needed for log setup)
    let args = Args::parse();

    // Create path configuration from CLI args and environment
    let path_config = config::PathConfig::from_env_and_cli(args.config_dir.clone());

    // Ensure directories exist
    if let Err(e) = config::ensure_dirs(&path_config) {
        eprintln!("Warning: Failed to create application directories: {:#}", e);
    }

    let log_level = args.log_level();

    // Initialize logger based on --log flag
    if let Some(log_path_opt) = &args.log_file {
        let log_path = log_path_opt
            .as_ref()
            .cloned()
            .unwrap_or_else(|| config::data_file(LOG_FILE, &path_config));

        let file = std::fs::File::create(&log_path)
            .with_context(|| format!("Failed to create log file: {}", log_path.display()))?;

        env_logger::Builder::new()
            .filter_level(log_level)
            .filter_module("egui", log::LevelFilter::Info) // Suppress egui DEBUG spam
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();

        info!(
            "Logging to file: {} (level: {:?})",
            log_path.display(),
            log_level
        );
    } else {
        // Console logging (respects RUST_LOG if set)
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level.as_str().to_lowercase()),
        )
        .filter_module("egui", log::LevelFilter::Info)
        .format_timestamp_millis()
        .init();
    }

    info!("Mind map editor starting...");
    debug!("Command-line args: {:?}", args);
    info!(
        "Config path: {}",
        config::config_file(SETTINGS_FILE, &path_config).display()
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("Mind Map v{} • F1 for help", env!("CARGO_PKG_VERSION")))
            .with_inner_size([1024.0, 720.0])
            .with_resizable(true),
        persist_window: true,
        persistence_path: Some(config::config_file(SETTINGS_FILE, &path_config)),
        ..Default::default()
    };

    let seed = args.nodes;

    eframe::run_native(
        "Mind Map",
        native_options,
        Box::new(move |cc| {
            // Load persisted settings if available, otherwise create default
            let mut app: MindMapApp = cc
                .storage
                .and_then(|storage| storage.get_string(eframe::APP_KEY))
                .and_then(|json| serde_json::from_str(&json).ok())
                .unwrap_or_else(|| {
                    info!("No persisted state found, creating default app");
                    MindMapApp::default()
                });
            app.init(path_config, seed);
            Ok(Box::new(app))
        }),
    )?;

    Ok(())
}
