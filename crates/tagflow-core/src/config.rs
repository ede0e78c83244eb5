#![forbid(unsafe_code)]

//! Drag-and-drop configuration.
//!
//! One knob drives the visible behaviour: the animation duration. It is both
//! the length of the layout transition the renderer is asked to play after a
//! reorder and the window during which further swaps are suppressed.
//!
//! # Loading
//!
//! ```toml
//! # tagflow.toml
//! animation_duration_ms = 300
//! reenable_mode = "fixed-delay"
//! ```
//!
//! ```rust,ignore
//! let config = DndConfig::from_toml_file("tagflow.toml")?;
//! let config = DndConfig::from_env();
//! ```
//!
//! File loading requires the `config` feature.

use std::fmt;
use std::time::Duration;

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

/// Default animation duration in milliseconds.
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 250;

/// Longest accepted animation duration in milliseconds.
pub const MAX_ANIMATION_DURATION_MS: u64 = 10_000;

// ---------------------------------------------------------------------------
// ReenableMode
// ---------------------------------------------------------------------------

/// How a swap's reorder lock is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "kebab-case"))]
pub enum ReenableMode {
    /// Only the completion signal of the latest swap re-enables swaps.
    #[default]
    Token,
    /// Any completion signal re-enables swaps.
    FixedDelay,
}

impl ReenableMode {
    /// Parse `"token"` or `"fixed-delay"` (underscore and case variants accepted).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "token" => Some(Self::Token),
            "fixed-delay" | "fixed" => Some(Self::FixedDelay),
            _ => None,
        }
    }

    /// Canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::FixedDelay => "fixed-delay",
        }
    }
}

// ---------------------------------------------------------------------------
// DndConfig
// ---------------------------------------------------------------------------

/// Tunables of the drag controller.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct DndConfig {
    /// Layout transition length and swap suppression window, in milliseconds.
    pub animation_duration_ms: u64,
    /// How the suppression window is released.
    pub reenable_mode: ReenableMode,
}

impl Default for DndConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            reenable_mode: ReenableMode::default(),
        }
    }
}

impl DndConfig {
    /// Set the animation duration.
    #[must_use]
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the re-enable mode.
    #[must_use]
    pub fn with_reenable_mode(mut self, mode: ReenableMode) -> Self {
        self.reenable_mode = mode;
        self
    }

    /// Animation duration as a [`Duration`].
    #[inline]
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Load config from environment variables.
    ///
    /// Reads:
    /// - `TAGFLOW_ANIMATION_MS`: animation duration in milliseconds
    /// - `TAGFLOW_REENABLE_MODE`: `token` or `fixed-delay`
    ///
    /// Unparseable values are ignored; the result is [`validated`](Self::validated).
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("TAGFLOW_ANIMATION_MS")
            && let Ok(ms) = val.trim().parse::<u64>()
        {
            config.animation_duration_ms = ms;
        }

        if let Ok(val) = std::env::var("TAGFLOW_REENABLE_MODE")
            && let Some(mode) = ReenableMode::parse(&val)
        {
            config.reenable_mode = mode;
        }

        config.validated()
    }

    /// Clamp values to accepted ranges.
    ///
    /// `animation_duration_ms` is capped at [`MAX_ANIMATION_DURATION_MS`].
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.animation_duration_ms = self.animation_duration_ms.min(MAX_ANIMATION_DURATION_MS);
        self
    }

    /// Check all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors; empty means valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.animation_duration_ms > MAX_ANIMATION_DURATION_MS {
            errors.push(format!(
                "animation_duration_ms must be <= {MAX_ANIMATION_DURATION_MS}, got {}",
                self.animation_duration_ms
            ));
        }
        errors
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(ConfigError::Toml)?;
        config.checked()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s).map_err(ConfigError::Json)?;
        config.checked()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    #[cfg(feature = "config")]
    fn checked(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => write!(f, "validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
