//! Configuration types for wilayah.
//!
//! [`Config::load`] reads `~/.config/wilayah/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::load_from`] reads an
//! explicit file and never creates it. [`Config::defaults`] returns the same
//! defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[data]
path = "master.csv"

[server]
bind               = "127.0.0.1:8000"
cache_max_age_secs = 3600

[search]
suggestion_limit    = 20
result_limit        = 100
input_max_chars     = 50
highlight_min_chars = 2

[cache]
capacity = 1024

[watch]
enabled     = false
debounce_ms = 500
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchLimits,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub watch: WatchConfig,
}

/// `[data]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

fn default_data_path() -> PathBuf { PathBuf::from("master.csv") }

impl Default for DataConfig {
    fn default() -> Self {
        Self { path: default_data_path() }
    }
}

/// `[server]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// `max-age` advertised on result-table responses.
    #[serde(default = "default_cache_max_age_secs")]
    pub cache_max_age_secs: u64,
}

fn default_bind() -> String { "127.0.0.1:8000".to_string() }
fn default_cache_max_age_secs() -> u64 { 3600 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            cache_max_age_secs: default_cache_max_age_secs(),
        }
    }
}

/// `[search]` section of `config.toml`. Bounds applied by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SearchLimits {
    /// Maximum autocomplete candidates returned per call.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    /// Maximum projected rows returned per result-table call.
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
    /// Filter inputs are truncated to this many characters.
    #[serde(default = "default_input_max_chars")]
    pub input_max_chars: usize,
    /// Shorter inputs are not highlighted in result names.
    #[serde(default = "default_highlight_min_chars")]
    pub highlight_min_chars: usize,
}

fn default_suggestion_limit() -> usize { 20 }
fn default_result_limit() -> usize { 100 }
fn default_input_max_chars() -> usize { 50 }
fn default_highlight_min_chars() -> usize { 2 }

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            suggestion_limit: default_suggestion_limit(),
            result_limit: default_result_limit(),
            input_max_chars: default_input_max_chars(),
            highlight_min_chars: default_highlight_min_chars(),
        }
    }
}

/// `[cache]` section of `config.toml`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CacheConfig {
    /// Suggestion cache entries kept before least-recently-used eviction.
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,
}

fn default_cache_capacity() -> usize { 1024 }

impl Default for CacheConfig {
    fn default() -> Self {
        Self { capacity: default_cache_capacity() }
    }
}

/// `[watch]` section of `config.toml`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WatchConfig {
    /// Reload the dataset when its source file changes.
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 { 500 }

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/wilayah/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load an explicit config file layered on top of the built-in defaults.
    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("wilayah")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
