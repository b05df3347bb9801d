use crate::checker::suggestions::DEFAULT_MAX_SUGGESTIONS;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".wordcheck.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Word list (`.txt`, one word per line) or compiled `.dict` file.
    /// The embedded word list is used when unset.
    pub wordlist: Option<PathBuf>,

    pub max_suggestions: usize,

    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wordlist: None,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            color: true,
        }
    }
}

/// A config file as written: keys that are absent stay `None` so they never
/// mask values from a lower-priority file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    pub wordlist: Option<PathBuf>,
    pub max_suggestions: Option<usize>,
    pub color: Option<bool>,
}

impl ConfigFile {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Values given on the command line; `None` means "not specified".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub wordlist: Option<PathBuf>,
    pub max_suggestions: Option<usize>,
    pub no_color: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                debug!("Reading global config {}", global_path.display());
                config = config.merge(ConfigFile::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            debug!("Reading local config {}", local_path.display());
            config = config.merge(ConfigFile::from_file(&local_path)?);
        }

        Ok(config.apply(overrides))
    }

    /// Layer a config file on top: every key present in `file` wins.
    pub fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(wordlist) = file.wordlist {
            self.wordlist = Some(wordlist);
        }
        if let Some(max) = file.max_suggestions {
            self.max_suggestions = max;
        }
        if let Some(color) = file.color {
            self.color = color;
        }
        self
    }

    fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(wordlist) = overrides.wordlist {
            self.wordlist = Some(wordlist);
        }
        if let Some(max) = overrides.max_suggestions {
            self.max_suggestions = max;
        }
        if overrides.no_color {
            self.color = false;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "wordcheck").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
