//! Configuration for the replay front-end.
//!
//! Layers, lowest first:
//! - built-in defaults,
//! - environment variables,
//! - an optional TOML file,
//! - command-line flags (applied by `main`).
//!
//! Environment variables:
//!
//! - `ENGINE_STRICT` (default: "false")
//! - `ENGINE_LOG`    (default: "warn")

use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use engine_core::EngineConfig;
use serde::Deserialize;

/// Default tracing filter when neither `RUST_LOG` nor `ENGINE_LOG` is set.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Front-end configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Strictness handed to the engine.
    pub engine: EngineConfig,

    /// `tracing` filter directive (e.g. "warn", "engine_core=debug").
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            engine: EngineConfig::permissive(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// On-disk TOML layout. Every key is optional.
///
/// ```toml
/// strict = false
/// log_level = "debug"
/// reject_quantity_underflow = true
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub strict: Option<bool>,
    pub log_level: Option<String>,
    pub reject_unknown_cancel: Option<bool>,
    pub reject_non_positive_quantity: Option<bool>,
    pub reject_non_positive_price: Option<bool>,
    pub reject_quantity_underflow: Option<bool>,
}

impl Config {
    /// Construct a `Config` from environment variables, falling back
    /// to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let strict = read_or_default(&lookup, "ENGINE_STRICT", false)?;
        let log_level = lookup("ENGINE_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config {
            engine: if strict {
                EngineConfig::strict()
            } else {
                EngineConfig::permissive()
            },
            log_level,
        })
    }

    /// Overlay settings from a TOML file.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let file: FileConfig = toml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        self.apply(file);
        Ok(())
    }

    /// Overlay an already-parsed file. `strict` is applied first so the
    /// individual flags can still switch single checks back off.
    pub fn apply(&mut self, file: FileConfig) {
        if let Some(strict) = file.strict {
            self.engine = if strict {
                EngineConfig::strict()
            } else {
                EngineConfig::permissive()
            };
        }
        if let Some(level) = file.log_level {
            self.log_level = level;
        }

        let engine = &mut self.engine;
        if let Some(v) = file.reject_unknown_cancel {
            engine.reject_unknown_cancel = v;
        }
        if let Some(v) = file.reject_non_positive_quantity {
            engine.reject_non_positive_quantity = v;
        }
        if let Some(v) = file.reject_non_positive_price {
            engine.reject_non_positive_price = v;
        }
        if let Some(v) = file.reject_quantity_underflow {
            engine.reject_quantity_underflow = v;
        }
    }
}

fn read_or_default<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(val) => val
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value {val:?} for {key}")),
        None => Ok(default),
    }
}
