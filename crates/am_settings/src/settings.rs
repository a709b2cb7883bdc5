use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::defaults::*;

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // Frame / canvas dimensions (the canvas matches the camera frame)
    #[serde(default = "default_frame_width")]
    pub frame_width: u32,
    #[serde(default = "default_frame_height")]
    pub frame_height: u32,
    #[serde(default = "default_target_fps")]
    pub target_fps: u32,

    // Gesture stabilization
    #[serde(default = "default_stability_frames")]
    pub stability_frames: u32,
    #[serde(default = "default_gesture_cooldown_ms")]
    pub gesture_cooldown_ms: u64,

    // Drawing
    #[serde(default = "default_stroke_thickness")]
    pub stroke_thickness: i32,
    #[serde(default = "default_erase_radius")]
    pub erase_radius: i32,

    // OCR
    #[serde(default = "default_ocr_language")]
    pub ocr_language: String,
    #[serde(default = "default_models_dir")]
    pub models_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_width: default_frame_width(),
            frame_height: default_frame_height(),
            target_fps: default_target_fps(),

            stability_frames: default_stability_frames(),
            gesture_cooldown_ms: default_gesture_cooldown_ms(),

            stroke_thickness: default_stroke_thickness(),
            erase_radius: default_erase_radius(),

            ocr_language: default_ocr_language(),
            models_dir: default_models_dir(),
        }
    }
}

impl Settings {
    fn settings_dir() -> PathBuf {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".airmath")
    }

    fn settings_path() -> PathBuf {
        Self::settings_dir().join("settings.json")
    }

    /// Load settings from disk.
    ///
    /// Falls back to defaults (and persists them) if loading fails.
    pub fn load() -> Self {
        let path = Self::settings_path();
        if let Ok(content) = fs::read_to_string(&path)
            && let Ok(settings) = serde_json::from_str::<Settings>(&content)
        {
            return settings;
        }

        let default_settings = Self::default();
        let _ = default_settings.save();
        default_settings
    }

    /// Save settings to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::settings_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_interaction_contract() {
        let s = Settings::default();
        assert_eq!((s.frame_width, s.frame_height), (640, 480));
        assert_eq!(s.stability_frames, 3);
        assert_eq!(s.gesture_cooldown_ms, 300);
        assert_eq!(s.stroke_thickness, 3);
        assert_eq!(s.erase_radius, 24);
    }

    #[test]
    fn missing_fields_fall_back_per_field() {
        let s: Settings = serde_json::from_str(r#"{"frame_width": 320}"#).unwrap();
        assert_eq!(s.frame_width, 320);
        assert_eq!(s.frame_height, 480);
        assert_eq!(s.ocr_language, "english");
    }
}
