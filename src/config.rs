//! Application paths: where settings and logs live.
//!
//! Only settings (eframe storage) and the optional log file are written.
//! Mind maps are in-memory and never touch disk.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Directory name under the platform config/data roots
pub const APP_DIR_NAME: &str = "mindmap";

/// Environment override for the config directory
pub const CONFIG_DIR_ENV: &str = "MINDMAP_CONFIG_DIR";

/// eframe persistence file (window geometry + AppSettings)
pub const SETTINGS_FILE: &str = "mindmap.json";

/// Default log file name for `--log` without a path
pub const LOG_FILE: &str = "mindmap.log";

/// Files whose presence in the working directory makes it the config dir
const LOCAL_MARKERS: [&str; 2] = [SETTINGS_FILE, LOG_FILE];

/// Configuration for overriding default application paths
#[derive(Debug, Clone, Default)]
pub struct PathConfig {
    /// Custom config directory (from CLI or ENV)
    pub config_dir: Option<PathBuf>,
}

impl PathConfig {
    /// Create PathConfig from CLI arguments and environment variables
    ///
    /// Priority: CLI args → ENV var (MINDMAP_CONFIG_DIR) → None (use defaults)
    pub fn from_env_and_cli(cli_dir: Option<PathBuf>) -> Self {
        let config_dir = cli_dir.or_else(|| std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from));
        Self { config_dir }
    }
}

/// Get path to a configuration file
///
/// Priority:
/// 1. CLI --config-dir argument
/// 2. MINDMAP_CONFIG_DIR environment variable
/// 3. Local folder IF it already holds mindmap.json or mindmap.log
/// 4. Platform-specific config directory from dirs-next (default)
///
/// Platform paths:
/// - Linux: ~/.config/mindmap/{name}
/// - macOS: ~/Library/Application Support/mindmap/{name}
/// - Windows: %APPDATA%\mindmap\{name}
pub fn config_file(name: &str, config: &PathConfig) -> PathBuf {
    get_config_dir(config).join(name)
}

/// Get path to a data file (logs)
///
/// Same priority as `config_file`, falling back to the platform data dir:
/// - Linux: ~/.local/share/mindmap/{name}
/// - macOS: ~/Library/Application Support/mindmap/{name}
/// - Windows: %APPDATA%\mindmap\{name}
pub fn data_file(name: &str, config: &PathConfig) -> PathBuf {
    get_data_dir(config).join(name)
}

/// Ensure that configuration and data directories exist
pub fn ensure_dirs(config: &PathConfig) -> Result<()> {
    let config_dir = get_config_dir(config);
    let data_dir = get_data_dir(config);

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)
            .with_context(|| format!("Failed to create config directory: {}", config_dir.display()))?;
    }

    // Only create data_dir if it's different from config_dir
    if data_dir != config_dir && !data_dir.exists() {
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    }

    Ok(())
}

/// Check if any known app files exist in the given directory
fn has_local_config_files(dir: &Path) -> bool {
    LOCAL_MARKERS.iter().any(|f| dir.join(f).exists())
}

fn resolve_dir(config: &PathConfig, platform_root: Option<PathBuf>) -> PathBuf {
    // Priority 1: Custom directory from CLI or ENV
    if let Some(dir) = &config.config_dir {
        return dir.clone();
    }

    // Priority 2: Local folder IF app files exist there
    if let Ok(current_dir) = std::env::current_dir()
        && has_local_config_files(&current_dir)
    {
        return current_dir;
    }

    // Priority 3: Platform-specific directory, fallback "."
    platform_root
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn get_config_dir(config: &PathConfig) -> PathBuf {
    resolve_dir(config, dirs_next::config_dir())
}

fn get_data_dir(config: &PathConfig) -> PathBuf {
    resolve_dir(config, dirs_next::data_dir())
}
