// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI configuration
//!
//! Resolution order, highest first: command-line flags, `EW_*` environment
//! variables, the config file, built-in defaults. Paths inside a config file
//! are relative to the file's own directory.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Store used when nothing else names one, relative to the working directory
pub const DEFAULT_STORE: &str = "users.json";
/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG: &str = "ew.toml";
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub const STORE_ENV: &str = "EW_STORE";
pub const CONFIG_ENV: &str = "EW_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of an `ew.toml`
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub store: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_filter: Option<String>,
    pub open_links: Option<bool>,
}

/// Values given on the command line
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub store: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub open_links: bool,
}

/// Fully resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the account store
    pub store_path: PathBuf,
    /// Log destination; stderr when unset
    pub log_file: Option<PathBuf>,
    /// Default tracing filter, used when RUST_LOG is unset
    pub log_filter: String,
    /// Open task links in the system browser instead of printing them
    pub open_links: bool,
}

impl Config {
    /// Resolve configuration for a process running in `cwd`, reading
    /// environment variables through `env`.
    pub fn resolve(
        overrides: &Overrides,
        env: impl Fn(&str) -> Option<String>,
        cwd: &Path,
    ) -> Result<Self, ConfigError> {
        let (file, file_dir) = load_file_config(overrides, &env, cwd)?;
        let relative_to = |path: PathBuf, base: &Path| {
            if path.is_absolute() {
                path
            } else {
                base.join(path)
            }
        };

        let store_path = if let Some(store) = &overrides.store {
            relative_to(store.clone(), cwd)
        } else if let Some(store) = env(STORE_ENV).filter(|s| !s.is_empty()) {
            relative_to(PathBuf::from(store), cwd)
        } else if let Some(store) = file.store {
            relative_to(store, &file_dir)
        } else {
            cwd.join(DEFAULT_STORE)
        };

        Ok(Self {
            store_path,
            log_file: file.log_file.map(|path| relative_to(path, &file_dir)),
            log_filter: file
                .log_filter
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            open_links: overrides.open_links || file.open_links.unwrap_or(false),
        })
    }
}

/// Find and parse the config file, if any.
///
/// An explicitly named file must exist; the implicit `ew.toml` is optional.
fn load_file_config(
    overrides: &Overrides,
    env: &impl Fn(&str) -> Option<String>,
    cwd: &Path,
) -> Result<(FileConfig, PathBuf), ConfigError> {
    let explicit = overrides
        .config
        .clone()
        .or_else(|| env(CONFIG_ENV).filter(|s| !s.is_empty()).map(PathBuf::from))
        .map(|path| if path.is_absolute() { path } else { cwd.join(path) });

    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::NotFound(path));
            }
            path
        }
        None => {
            let implicit = cwd.join(DEFAULT_CONFIG);
            if !implicit.exists() {
                return Ok((FileConfig::default(), cwd.to_path_buf()));
            }
            implicit
        }
    };

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let file: FileConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    let dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cwd.to_path_buf());

    Ok((file, dir))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
