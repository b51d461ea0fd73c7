use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::MarkerGrammar;

pub const CONFIG_FILE_NAME: &str = ".callsiterc.json";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory base names skipped during traversal.
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub strip_prefix: usize,
    #[serde(default)]
    pub absolute_paths: bool,
    #[serde(default)]
    pub marker: MarkerGrammar,
}

impl Config {
    /// Validate configuration values.
    ///
    /// Exclusions are matched against directory base names, so entries
    /// containing a path separator can never match and are rejected.
    pub fn validate(&self) -> Result<()> {
        for name in &self.exclude {
            if name.is_empty() || name.contains('/') || name.contains('\\') {
                bail!(
                    "Invalid directory name in 'exclude': \"{}\" (expected a base name)",
                    name
                );
            }
        }

        self.marker
            .validate()
            .context("Invalid 'marker' configuration")?;

        Ok(())
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the loaded file, or None when using defaults.
    pub source: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                source: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        }),
    }
}
