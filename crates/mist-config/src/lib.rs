//! Mist configuration system
//!
//! This crate loads animation defaults and control metrics from `mist.toml`,
//! with environment variables as temporary overrides.

use std::path::{Path, PathBuf};

use mist_anim::{AnimationSettings, EasingFunction};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Default config file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "mist.toml";

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for `MistConfig`.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A step size is NaN or infinite.
    #[error("invalid value for {field}: {value} (must be finite)")]
    NonFinite { field: &'static str, value: f64 },
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MistConfig {
    /// Defaults for animation managers created by controls
    pub animation: AnimationSettings,
    /// Tab selector metrics and animation tuning
    pub tab_selector: TabSelectorConfig,
}

/// Tab selector configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabSelectorConfig {
    /// Control height in pixels
    pub height: i32,
    /// Horizontal padding on each side of a tab label
    pub header_padding: i32,
    /// Height of the selected-tab indicator bar
    pub indicator_height: i32,
    /// Left offset of the first tab
    pub form_padding: i32,
    /// Progress step per tick for the selection animation
    pub increment: f64,
    /// Easing for the selection animation
    pub easing: EasingFunction,
    /// Label alpha for the selected tab
    pub primary_text_alpha: u8,
    /// Label alpha for unselected tabs
    pub secondary_text_alpha: u8,
    /// Per-character advance used when no font metrics are available
    pub char_advance: i32,
}

impl Default for TabSelectorConfig {
    fn default() -> Self {
        Self {
            height: 48,
            header_padding: 24,
            indicator_height: 2,
            form_padding: 14,
            increment: 0.04,
            easing: EasingFunction::EaseInOut,
            primary_text_alpha: 255,
            secondary_text_alpha: 153,
            char_advance: 8,
        }
    }
}

impl MistConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject step sizes the animation manager cannot settle with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let steps = [
            ("animation.increment", self.animation.increment),
            ("animation.secondary_increment", self.animation.secondary_increment),
            ("tab_selector.increment", self.tab_selector.increment),
        ];
        for (field, value) in steps {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        Ok(())
    }

    /// Load configuration from the default location (mist.toml in the current directory)
    /// or return default configuration if it is missing or invalid
    pub fn load_or_default() -> Self {
        Self::load_from_path_or_default(DEFAULT_CONFIG_FILE)
    }

    /// Like `load_or_default`, for an explicit path.
    ///
    /// A missing file is silent; an unreadable or malformed one is logged.
    pub fn load_from_path_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::default()
            }
            Err(e) => {
                warn!(error = %e, "using default configuration");
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        self.merge_with_vars(|key| std::env::var(key).ok());
    }

    /// Merge overrides from an arbitrary variable lookup.
    ///
    /// Values that fail to parse are skipped with a warning.
    pub fn merge_with_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Animation settings
        if let Some(val) = finite(&lookup, "MIST_ANIM_INCREMENT") {
            self.animation.increment = val;
        }
        if let Some(val) = finite(&lookup, "MIST_ANIM_SECONDARY_INCREMENT") {
            self.animation.secondary_increment = val;
        }
        if let Some(val) = parsed(&lookup, "MIST_ANIM_EASING") {
            self.animation.easing = val;
        }
        if let Some(val) = lookup("MIST_ANIM_INTERRUPT") {
            self.animation.interrupt_allowed = val == "1" || val.eq_ignore_ascii_case("true");
        }
        if let Some(val) = parsed(&lookup, "MIST_TICK_INTERVAL_MS") {
            self.animation.tick_interval_ms = val;
        }

        // Tab selector settings
        if let Some(val) = parsed(&lookup, "MIST_TAB_HEIGHT") {
            self.tab_selector.height = val;
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from mist.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

fn parsed<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, value = %raw, error = %e, "ignoring invalid environment override");
            None
        }
    }
}

fn finite<F>(lookup: &F, key: &str) -> Option<f64>
where
    F: Fn(&str) -> Option<String>,
{
    let value: f64 = parsed(lookup, key)?;
    if value.is_finite() {
        Some(value)
    } else {
        warn!(key, value, "ignoring non-finite environment override");
        None
    }
}
