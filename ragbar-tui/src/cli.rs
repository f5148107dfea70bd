//! Command-line arguments and config file discovery.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::Parser;

use ragbar_core::{ConfigError, RagbarConfig};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "RAGBAR_CONFIG";

#[derive(Debug, Parser)]
#[command(
    name = "ragbar",
    about = "RagBar — drag three thresholds across a Red/Amber/Green bar"
)]
pub struct Args {
    /// Path to a TOML config file. Overrides $RAGBAR_CONFIG.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for ragbar.log. Overrides [logging].directory.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

/// Where a config file is expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    /// Explicitly requested files must exist; the default one may not.
    pub required: bool,
}

/// Pick the config file: `--config`, then `$RAGBAR_CONFIG`, then
/// `<config_dir>/ragbar/config.toml`.
pub fn config_location(
    explicit: Option<&Path>,
    env: Option<OsString>,
    config_dir: Option<PathBuf>,
) -> Option<ConfigLocation> {
    if let Some(path) = explicit {
        return Some(ConfigLocation {
            path: path.to_path_buf(),
            required: true,
        });
    }
    if let Some(path) = env.filter(|p| !p.is_empty()) {
        return Some(ConfigLocation {
            path: PathBuf::from(path),
            required: true,
        });
    }
    config_dir.map(|dir| ConfigLocation {
        path: dir.join("ragbar").join("config.toml"),
        required: false,
    })
}

/// Load the config for `args`, falling back to defaults when no file is
/// found at the optional default location.
pub fn load_config(args: &Args) -> Result<RagbarConfig, ConfigError> {
    let location = config_location(
        args.config.as_deref(),
        std::env::var_os(CONFIG_ENV),
        dirs::config_dir(),
    );

    match location {
        Some(loc) if loc.required || loc.path.exists() => RagbarConfig::from_path(&loc.path),
        _ => Ok(RagbarConfig::default()),
    }
}
