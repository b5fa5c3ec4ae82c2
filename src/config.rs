use log::Level;

pub const BRAND_NAME: &str = "PK Heritage";

// Loading screen
pub const LOADING_VISIBLE_MS: u32 = 2200;
pub const LOADING_FADE_MS: u32 = 800;

// Slide deck
pub const TRANSITION_LOCK_MS: u32 = 900;
pub const EDGE_SCROLLS_TO_ADVANCE: u32 = 3;
pub const EDGE_TOLERANCE_PX: f64 = 5.0;
pub const OVERFLOW_TOLERANCE_PX: f64 = 10.0;
pub const MIN_SWIPE_PX: f64 = 50.0;

// Slide-in animation: base + delay * step + position * stagger
pub const REVEAL_BASE_MS: u32 = 150;
pub const REVEAL_DELAY_STEP_MS: u32 = 100;
pub const REVEAL_STAGGER_MS: u32 = 80;

pub const SPARKLE_COUNT: usize = 20;

// Forms
pub const ORDER_SUBMIT_MS: u32 = 1200;
pub const CUSTOM_SUBMIT_MS: u32 = 1500;
pub const MODAL_RESET_MS: u32 = 400;

pub const MAX_UPLOAD_FILES: usize = 5;
pub const MAX_UPLOAD_SIZE_MB: u64 = 10;

pub fn max_upload_bytes() -> u64 {
    MAX_UPLOAD_SIZE_MB * 1024 * 1024
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose gesture logging while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
