use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::Result;

/// Smallest display font size reachable from the View menu.
pub const MIN_FONT_SIZE: u32 = 12;
/// Largest display font size reachable from the View menu.
pub const MAX_FONT_SIZE: u32 = 48;

/// Line spacing bounds, in tenths of the font size (10 = single spaced).
pub const MIN_LINE_SPACING_TENTHS: u32 = 10;
pub const MAX_LINE_SPACING_TENTHS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    SystemDefault,
}

/// Horizontal placement of each lyric line in the display view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Startup configuration.
///
/// Read once at launch and never written back: changes made from the menu
/// only last for the running session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    /// Font size of the lyrics in the display view
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_bold_display")]
    pub bold_display: bool,

    #[serde(default)]
    pub alignment: TextAlignment,

    /// Line height as a multiple of the font size
    #[serde(default = "default_line_spacing")]
    pub line_spacing: f32,

    #[serde(default = "default_window_width")]
    pub window_width: i32,

    #[serde(default = "default_window_height")]
    pub window_height: i32,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::SystemDefault
}

fn default_font_size() -> u32 {
    28
}

fn default_bold_display() -> bool {
    true
}

fn default_line_spacing() -> f32 {
    1.2
}

fn default_window_width() -> i32 {
    1200
}

fn default_window_height() -> i32 {
    800
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            font_size: default_font_size(),
            bold_display: default_bold_display(),
            alignment: TextAlignment::default(),
            line_spacing: default_line_spacing(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl AppSettings {
    /// Load settings from the config directory, falling back to defaults.
    pub fn load() -> Self {
        let config_path = Self::get_config_path();
        match Self::load_from(&config_path) {
            Ok(Some(settings)) => settings,
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!(
                    "Failed to read settings from {}: {}. Using defaults.",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Read settings from `path`. `Ok(None)` means there is no file.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let settings: Self = serde_json::from_str(&contents)?;
        Ok(Some(settings.sanitized()))
    }

    /// Clamp values a hand-edited file may have pushed out of range.
    pub fn sanitized(mut self) -> Self {
        self.font_size = self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        self.line_spacing = if self.line_spacing.is_finite() {
            self.line_spacing.clamp(
                MIN_LINE_SPACING_TENTHS as f32 / 10.0,
                MAX_LINE_SPACING_TENTHS as f32 / 10.0,
            )
        } else {
            default_line_spacing()
        };
        if self.window_width <= 0 {
            self.window_width = default_window_width();
        }
        if self.window_height <= 0 {
            self.window_height = default_window_height();
        }
        self
    }

    /// `line_spacing` rounded to the nearest tenth.
    pub fn line_spacing_tenths(&self) -> u32 {
        let tenths = (self.line_spacing * 10.0).round();
        if tenths.is_finite() && tenths > 0.0 {
            (tenths as u32).clamp(MIN_LINE_SPACING_TENTHS, MAX_LINE_SPACING_TENTHS)
        } else {
            12
        }
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("better-lyrics");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::error::AppError;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme_mode, ThemeMode::SystemDefault);
        assert_eq!(settings.font_size, 28);
        assert!(settings.bold_display);
        assert_eq!((settings.window_width, settings.window_height), (1200, 800));
        assert_eq!(settings.alignment, TextAlignment::Center);
        assert_eq!(settings.line_spacing_tenths(), 12);
    }

    #[test]
    fn test_alignment_and_spacing_from_file() {
        let json = r#"{"alignment": "Right", "line_spacing": 2.0}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.alignment, TextAlignment::Right);
        assert_eq!(settings.line_spacing_tenths(), 20);
    }

    #[test]
    fn test_line_spacing_is_clamped() {
        let json = r#"{"line_spacing": 9.5}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.sanitized().line_spacing_tenths(), MAX_LINE_SPACING_TENTHS);

        let settings = AppSettings {
            line_spacing: 0.1,
            ..Default::default()
        };
        assert_eq!(settings.line_spacing_tenths(), MIN_LINE_SPACING_TENTHS);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"theme_mode": "Dark"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
        assert_eq!(settings.font_size, 28);
        assert_eq!(settings.window_width, 1200);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings {
            theme_mode: ThemeMode::Light,
            font_size: 18,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"Light\""));
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = AppSettings::load_from(&dir.path().join("settings.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"font_size": 20, "bold_display": false}"#).unwrap();

        let loaded = AppSettings::load_from(&path).unwrap().unwrap();
        assert_eq!(loaded.font_size, 20);
        assert!(!loaded.bold_display);
        assert_eq!(loaded.theme_mode, ThemeMode::SystemDefault);
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let err = AppSettings::load_from(&path).unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let json = r#"{"font_size": 400, "window_width": -5, "window_height": 0}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        let settings = settings.sanitized();
        assert_eq!(settings.font_size, MAX_FONT_SIZE);
        assert_eq!(settings.window_width, 1200);
        assert_eq!(settings.window_height, 800);
    }
}
