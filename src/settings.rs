//! Window and display preferences
//!
//! Read from a JSON file at startup. Game rules (win score, speeds) are
//! fixed constants and deliberately absent here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub window_title: String,
    /// Integer window scale; the frame itself stays 800x600
    pub scale: u32,
    /// Sync presentation to the display refresh
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Pixel Pong".to_string(),
            scale: 1,
            vsync: true,
        }
    }
}

impl Settings {
    /// Environment variable naming a settings file
    pub const PATH_ENV: &'static str = "PIXEL_PONG_SETTINGS";
    /// Settings file looked up in the working directory
    pub const DEFAULT_FILE: &'static str = "pixel_pong.json";

    /// Effective window scale (never below 1)
    pub fn scale(&self) -> u32 {
        self.scale.max(1)
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Where to look for the settings file
    pub fn locate() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(Self::PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from(Self::DEFAULT_FILE);
        local.exists().then_some(local)
    }

    /// Load from the located file, falling back to defaults
    pub fn load() -> Self {
        match Self::locate() {
            Some(path) => Self::load_from(&path),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load from `path`. Unreadable or invalid files fall back to defaults.
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Cannot read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.window_title, "Pixel Pong");
        assert_eq!(settings.scale(), 1);
        assert!(settings.vsync);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "scale": 2 }"#).unwrap();
        assert_eq!(settings.scale(), 2);
        assert_eq!(settings.window_title, "Pixel Pong");
        assert!(settings.vsync);
    }

    #[test]
    fn test_zero_scale_is_treated_as_one() {
        let settings = Settings::from_json(r#"{ "scale": 0, "vsync": false }"#).unwrap();
        assert_eq!(settings.scale(), 1);
        assert!(!settings.vsync);
    }

    #[test]
    fn test_round_trip() {
        let settings = Settings {
            window_title: "Pong".to_string(),
            scale: 3,
            vsync: false,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_load_from_bad_file_falls_back() {
        let dir = std::env::temp_dir().join(format!("pixel_pong_settings_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let bad = dir.join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        assert_eq!(Settings::load_from(&bad), Settings::default());

        let good = dir.join("good.json");
        std::fs::write(&good, r#"{ "window_title": "Test" }"#).unwrap();
        assert_eq!(Settings::load_from(&good).window_title, "Test");

        assert_eq!(Settings::load_from(&dir.join("missing.json")), Settings::default());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
