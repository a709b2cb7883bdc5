use std::sync::{Arc, RwLock};

use crate::Settings;

/// Unified config manager.
pub struct ConfigManager {
    settings: Arc<RwLock<Settings>>,
}

impl ConfigManager {
    /// Create a new config manager (loads settings once and caches them).
    pub fn new() -> Self {
        Self::with_settings(Settings::load())
    }

    /// Create a manager around explicit settings (tests, scripted runs).
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(settings)),
        }
    }

    /// Get a snapshot copy of current settings.
    pub fn get(&self) -> Settings {
        self.settings
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|_| Settings::default())
    }

    /// Get the shared settings reference.
    pub fn get_shared(&self) -> Arc<RwLock<Settings>> {
        Arc::clone(&self.settings)
    }

    /// Reload settings from disk.
    pub fn reload(&mut self) {
        let new_settings = Settings::load();
        if let Ok(mut guard) = self.settings.write() {
            *guard = new_settings;
        }
    }

    // Convenience accessors.

    #[inline]
    pub fn frame_size(&self) -> (u32, u32) {
        let s = self.get();
        (s.frame_width, s.frame_height)
    }

    #[inline]
    pub fn target_fps(&self) -> u32 {
        self.get().target_fps
    }

    #[inline]
    pub fn stability_frames(&self) -> u32 {
        self.get().stability_frames
    }

    #[inline]
    pub fn gesture_cooldown_ms(&self) -> u64 {
        self.get().gesture_cooldown_ms
    }

    #[inline]
    pub fn ocr_language(&self) -> String {
        self.get().ocr_language
    }

    #[inline]
    pub fn models_dir(&self) -> String {
        self.get().models_dir
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
