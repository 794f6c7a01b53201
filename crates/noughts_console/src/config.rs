//! Console configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// File read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "noughts.toml";

/// Rendering and logging settings for the console.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Glyph drawn for a cross.
    #[serde(default = "default_cross_glyph")]
    cross_glyph: char,

    /// Glyph drawn for a naught.
    #[serde(default = "default_naught_glyph")]
    naught_glyph: char,

    /// Glyph drawn for an empty cell.
    #[serde(default = "default_empty_glyph")]
    empty_glyph: char,

    /// Draw empty cells as their 1-9 number instead of `empty_glyph`.
    #[serde(default)]
    show_positions: bool,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_cross_glyph() -> char {
    'x'
}

fn default_naught_glyph() -> char {
    'o'
}

fn default_empty_glyph() -> char {
    ' '
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            cross_glyph: default_cross_glyph(),
            naught_glyph: default_naught_glyph(),
            empty_glyph: default_empty_glyph(),
            show_positions: false,
            log_filter: default_log_filter(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(
            cross = %config.cross_glyph,
            naught = %config.naught_glyph,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if given, else `noughts.toml` if it exists, else defaults.
    ///
    /// An explicitly named file must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let glyphs = [self.cross_glyph, self.naught_glyph, self.empty_glyph];
        if glyphs[0] == glyphs[1] || glyphs[0] == glyphs[2] || glyphs[1] == glyphs[2] {
            return Err(ConfigError::new(format!(
                "Glyphs must be distinct, got {:?}",
                glyphs
            )));
        }
        if let Some(glyph) = glyphs.iter().find(|g| matches!(**g, '|' | '-')) {
            return Err(ConfigError::new(format!(
                "Glyph {:?} is reserved for the board grid",
                glyph
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
