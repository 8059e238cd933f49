use crate::case::Case;
use crate::cli::output::OutputFormat;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".casekit.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Target used by `convert` when none is given on the command line
    pub default_target: Option<Case>,
    /// Source case hint; kept as text so an unknown hint is ignored, not rejected
    pub source_hint: Option<String>,
    pub format: OutputFormat,
    pub color: bool,
    pub trim_input: bool,
    pub skip_empty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_target: None,
            source_hint: None,
            format: OutputFormat::Text,
            color: true,
            trim_input: true,
            skip_empty: true,
        }
    }
}

/// One config file. Keys left out of the file stay `None` and leave the
/// lower layers untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    pub default_target: Option<Case>,
    pub source_hint: Option<String>,
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
    pub trim_input: Option<bool>,
    pub skip_empty: Option<bool>,
}

/// Values given on the command line, applied on top of every config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub source_hint: Option<String>,
    pub format: Option<OutputFormat>,
    pub no_color: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                log::debug!("loading global config from {}", global_path.display());
                config = config.merge(Self::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            log::debug!("loading local config from {}", local_path.display());
            config = config.merge(Self::from_file(&local_path)?);
        }

        Ok(config.apply(overrides))
    }

    pub fn from_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, layer: ConfigFile) -> Self {
        if let Some(target) = layer.default_target {
            self.default_target = Some(target);
        }
        if let Some(hint) = layer.source_hint {
            self.source_hint = Some(hint);
        }
        if let Some(format) = layer.format {
            self.format = format;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        if let Some(trim_input) = layer.trim_input {
            self.trim_input = trim_input;
        }
        if let Some(skip_empty) = layer.skip_empty {
            self.skip_empty = skip_empty;
        }
        self
    }

    fn apply(mut self, overrides: Overrides) -> Self {
        if overrides.source_hint.is_some() {
            self.source_hint = overrides.source_hint;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if overrides.no_color {
            self.color = false;
        }
        self
    }

    /// The configured source case, if the hint names one.
    pub fn source_case(&self) -> Option<Case> {
        let hint = self.source_hint.as_deref()?;
        let case = Case::from_hint(hint);
        if case.is_none() {
            log::warn!("unrecognized source case '{}', detecting instead", hint);
        }
        case
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "casekit").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
