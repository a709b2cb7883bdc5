// Frame / canvas defaults
pub fn default_frame_width() -> u32 {
    640
}

pub fn default_frame_height() -> u32 {
    480
}

pub fn default_target_fps() -> u32 {
    30
}

// Gesture stabilization defaults
pub fn default_stability_frames() -> u32 {
    3
}

pub fn default_gesture_cooldown_ms() -> u64 {
    300
}

// Drawing defaults
pub fn default_stroke_thickness() -> i32 {
    3
}

pub fn default_erase_radius() -> i32 {
    24
}

// OCR defaults
pub fn default_ocr_language() -> String {
    "english".to_string()
}

pub fn default_models_dir() -> String {
    "models".to_string()
}
