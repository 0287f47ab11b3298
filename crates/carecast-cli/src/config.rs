//! Configuration file management for carecast.
//!
//! Provides a TOML-based config file at `~/.config/carecast/config.toml` and a
//! resolution chain: CLI flag > env var > config file > default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default bind address for `carecast serve`.
pub const DEFAULT_BIND: &str = "127.0.0.1";
/// Default port for `carecast serve`.
pub const DEFAULT_PORT: u16 = 3100;

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub brief: BriefSection,
    #[serde(default)]
    pub server: ServerSection,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct BriefSection {
    /// Brief file used when `--brief` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ServerSection {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the carecast config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/carecast` or `~/.config/carecast`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("carecast");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("carecast")
}

/// Return the path to the carecast config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file at `path`.
pub fn load_config_from(path: &Path) -> Result<ConfigFile> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file at {}", path.display()))?;
    Ok(config)
}

/// Load the config file, or `None` if it does not exist.
///
/// A file that exists but cannot be parsed is an error rather than being
/// silently ignored.
pub fn load_config() -> Result<Option<ConfigFile>> {
    let path = config_path();
    if !path.exists() {
        return Ok(None);
    }
    load_config_from(&path).map(Some)
}

/// Serialize and write the config file to `path`, creating parent dirs.
pub fn save_config_to(config: &ConfigFile, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create config directory {}", dir.display()))?;
    }
    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;
    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug, PartialEq)]
pub struct CarecastConfig {
    /// Brief file to load; `None` means the stock brief.
    pub brief_path: Option<PathBuf>,
    pub bind: String,
    pub port: u16,
}

impl CarecastConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config file > default.
    ///
    /// - Brief: `cli_brief` > `CARECAST_BRIEF` env > `brief.path` > none
    /// - Bind: `cli_bind` > `CARECAST_BIND` env > `server.bind` > [`DEFAULT_BIND`]
    /// - Port: `cli_port` > `CARECAST_PORT` env > `server.port` > [`DEFAULT_PORT`]
    pub fn resolve(
        cli_brief: Option<&Path>,
        cli_bind: Option<&str>,
        cli_port: Option<u16>,
    ) -> Result<Self> {
        let file_config = load_config()?.unwrap_or_default();
        Self::resolve_with(file_config, cli_brief, cli_bind, cli_port)
    }

    fn resolve_with(
        file_config: ConfigFile,
        cli_brief: Option<&Path>,
        cli_bind: Option<&str>,
        cli_port: Option<u16>,
    ) -> Result<Self> {
        let brief_path = if let Some(path) = cli_brief {
            Some(path.to_path_buf())
        } else if let Ok(path) = std::env::var("CARECAST_BRIEF") {
            Some(PathBuf::from(path))
        } else {
            file_config.brief.path
        };

        let bind = if let Some(bind) = cli_bind {
            bind.to_string()
        } else if let Ok(bind) = std::env::var("CARECAST_BIND") {
            bind
        } else {
            file_config.server.bind
        };

        let port = if let Some(port) = cli_port {
            port
        } else if let Ok(raw) = std::env::var("CARECAST_PORT") {
            raw.parse()
                .with_context(|| format!("CARECAST_PORT is not a valid port: {raw:?}"))?
        } else {
            file_config.server.port
        };

        Ok(Self {
            brief_path,
            bind,
            port,
        })
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
