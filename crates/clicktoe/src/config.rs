//! Presentation configuration: window, layout, fonts and colours.

use clicktoe_core::BoardGeometry;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// An opaque colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// How the game is drawn. Game rules are not configurable.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Window title.
    window_title: String,

    /// Window width in points.
    #[getter(copy)]
    window_width: f32,

    /// Window height in points.
    #[getter(copy)]
    window_height: f32,

    /// Board placement inside the window.
    #[getter(copy)]
    board: BoardGeometry,

    /// Thickness of the grid bars.
    #[getter(copy)]
    line_thickness: f32,

    /// Glyph size for X and O.
    #[getter(copy)]
    mark_font_size: f32,

    /// Glyph size for the turn/winner heading.
    #[getter(copy)]
    title_font_size: f32,

    /// Top edge of the heading; its left edge lines up with the board.
    #[getter(copy)]
    title_y: f32,

    /// Fill behind everything.
    #[getter(copy)]
    background: Rgb,

    /// Colour of grid, marks and heading.
    #[getter(copy)]
    foreground: Rgb,

    /// TrueType font used for all text. The built-in font when unset.
    font_path: Option<PathBuf>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window_title: "Tic Tac Toe".to_string(),
            window_width: 1000.0,
            window_height: 800.0,
            board: BoardGeometry::default(),
            line_thickness: 4.0,
            mark_font_size: 150.0,
            title_font_size: 100.0,
            title_y: 50.0,
            background: Rgb::new(25, 25, 25),
            foreground: Rgb::new(255, 255, 255),
            font_path: None,
        }
    }
}

impl DisplayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(title = %config.window_title, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the font path when `font_path` is set.
    #[instrument(skip(self))]
    pub fn with_font_path(mut self, font_path: Option<PathBuf>) -> Self {
        if let Some(path) = font_path {
            debug!(path = %path.display(), "Overriding font path");
            self.font_path = Some(path);
        }
        self
    }

    /// Rejects layouts that cannot be drawn or clicked.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("board.width", self.board.width),
            ("board.height", self.board.height),
            ("mark_font_size", self.mark_font_size),
            ("title_font_size", self.title_font_size),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::new(format!("{} must be positive, got {}", name, value)));
            }
        }
        if !(self.line_thickness.is_finite() && self.line_thickness >= 0.0) {
            return Err(ConfigError::new(format!(
                "line_thickness must not be negative, got {}",
                self.line_thickness
            )));
        }
        if !(self.board.x.is_finite() && self.board.y.is_finite() && self.title_y.is_finite()) {
            return Err(ConfigError::new("board origin and title_y must be finite".to_string()));
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
