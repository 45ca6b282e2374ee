//! Runtime settings
//!
//! Loaded from an optional JSON file; every field has a default so a partial
//! file is enough.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH, TITLE};

/// Window/playfield settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Headless demo run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Frames to simulate before exiting
    pub frames: u32,
    /// Target frames per second (also the fixed step used by the demo)
    pub frame_rate: u32,
    /// Log a summary every N frames (0 disables)
    pub summary_every: u32,
    /// Sleep between frames to run at wall-clock speed
    pub realtime: bool,
    /// Window resize to simulate partway through the run
    pub resize: Option<ResizeStep>,
}

/// A window resize applied before a given frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizeStep {
    pub frame: u32,
    pub width: f32,
    pub height: f32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            frames: 60 * 60,
            frame_rate: 60,
            summary_every: 300,
            realtime: false,
            resize: None,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    /// Fixed RNG seed; wall-clock seeded when absent
    pub seed: Option<u64>,
    pub demo: DemoSettings,
}

/// Errors from loading settings
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read settings: {}", err),
            Self::Parse(err) => write!(f, "malformed settings: {}", err),
            Self::Invalid(what) => write!(f, "invalid settings: {}", what),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("{} ({}), using defaults", err, path.display());
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let w = &self.window;
        if !(w.width.is_finite() && w.width > 0.0 && w.height.is_finite() && w.height > 0.0) {
            return Err(SettingsError::Invalid("window size must be positive"));
        }
        if let Some(step) = &self.demo.resize {
            if !(step.width.is_finite() && step.width > 0.0 && step.height.is_finite() && step.height > 0.0) {
                return Err(SettingsError::Invalid("resize size must be positive"));
            }
        }
        if self.demo.frame_rate == 0 {
            return Err(SettingsError::Invalid("frame rate must be non-zero"));
        }
        Ok(())
    }

    /// Fixed simulation step for the demo run
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.demo.frame_rate.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.window.title, "Gopher Shooter");
        assert_eq!(s.window.width, 800.0);
        assert_eq!(s.window.height, 450.0);
        assert_eq!(s.seed, None);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let s = Settings::from_json(r#"{ "seed": 42, "demo": { "frames": 10 } }"#).unwrap();
        assert_eq!(s.seed, Some(42));
        assert_eq!(s.demo.frames, 10);
        assert_eq!(s.demo.frame_rate, 60);
        assert_eq!(s.window, WindowSettings::default());
    }

    #[test]
    fn test_resize_step() {
        let s = Settings::from_json(
            r#"{ "demo": { "resize": { "frame": 120, "width": 640, "height": 360 } } }"#,
        )
        .unwrap();
        assert_eq!(
            s.demo.resize,
            Some(ResizeStep {
                frame: 120,
                width: 640.0,
                height: 360.0
            })
        );
        assert!(matches!(
            Settings::from_json(r#"{ "demo": { "resize": { "frame": 1, "width": 640, "height": -1 } } }"#),
            Err(SettingsError::Invalid(_))
        ));
    }

    #[test]
    fn test_round_trip() {
        let mut s = Settings::default();
        s.window.width = 1024.0;
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Settings::from_json(r#"{ "window": { "width": 0 } }"#),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "demo": { "frame_rate": 0 } }"#),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::path::Path::new("/nonexistent/gopher-shooter.json");
        assert!(matches!(
            Settings::load_from(path),
            Err(SettingsError::Io(_))
        ));
        assert_eq!(Settings::load_or_default(Some(path)), Settings::default());
    }

    #[test]
    fn test_frame_dt() {
        let s = Settings::default();
        assert!((s.frame_dt() - 1.0 / 60.0).abs() < 1e-9);
    }
}
