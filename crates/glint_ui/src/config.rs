//! Engine configuration.
//!
//! Loaded once at startup from TOML. Every key is optional:
//!
//! ```toml
//! virtual_resolution = 1080.0
//! scroll_speed_drag = 2.0
//! scroll_speed_wheel = 16.0
//! drag_start_threshold = 8.0
//! mouse_always_active = true
//! text_color = "#FFFFFFFF"
//! ```

use std::path::Path;

use glint_shared::constants::{
    DEFAULT_DRAG_START_THRESHOLD, DEFAULT_SCROLL_SPEED_DRAG, DEFAULT_SCROLL_SPEED_WHEEL,
    DEFAULT_VIRTUAL_RESOLUTION,
};
use serde::{Deserialize, Serialize};

use crate::error::{UiError, UiResult};
use crate::style::Color;

/// Tunables for layout scaling and pointer handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Virtual units mapped onto the shorter window axis.
    pub virtual_resolution: f32,
    /// Scroll pixels per pixel of pointer drag.
    pub scroll_speed_drag: f32,
    /// Scroll pixels per wheel notch.
    pub scroll_speed_wheel: f32,
    /// Physical pixels a held pointer travels before a drag starts.
    pub drag_start_threshold: f32,
    /// Treat pointer 0 (the mouse) as active even when it reports nothing.
    ///
    /// Desktop hosts want hover on the mouse every frame. Touch-only hosts
    /// should turn this off so an idle finger slot never hovers anything.
    pub mouse_always_active: bool,
    /// Text color at the start of every frame.
    pub text_color: Color,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            virtual_resolution: DEFAULT_VIRTUAL_RESOLUTION,
            scroll_speed_drag: DEFAULT_SCROLL_SPEED_DRAG,
            scroll_speed_wheel: DEFAULT_SCROLL_SPEED_WHEEL,
            drag_start_threshold: DEFAULT_DRAG_START_THRESHOLD,
            mouse_always_active: true,
            text_color: Color::WHITE,
        }
    }
}

impl UiConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidConfig`] on malformed TOML, unknown keys or
    /// out-of-range values.
    pub fn from_toml_str(source: &str) -> UiResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| UiError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        tracing::debug!(?config, "ui configuration parsed");
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ConfigIo`] if the file cannot be read, otherwise the
    /// errors of [`UiConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> UiResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| UiError::ConfigIo(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidConfig`] naming the offending key.
    pub fn validate(&self) -> UiResult<()> {
        if !(self.virtual_resolution.is_finite() && self.virtual_resolution > 0.0) {
            return Err(UiError::InvalidConfig(format!(
                "virtual_resolution must be positive, got {}",
                self.virtual_resolution
            )));
        }
        if !self.scroll_speed_drag.is_finite() || !self.scroll_speed_wheel.is_finite() {
            return Err(UiError::InvalidConfig(
                "scroll speeds must be finite".to_string(),
            ));
        }
        if !(self.drag_start_threshold.is_finite() && self.drag_start_threshold >= 0.0) {
            return Err(UiError::InvalidConfig(format!(
                "drag_start_threshold must be >= 0, got {}",
                self.drag_start_threshold
            )));
        }
        Ok(())
    }
}
