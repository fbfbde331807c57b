use crate::clock::Millis;

pub const RENDER_WIDTH: i32 = 1280;           // Default preview window width
pub const RENDER_HEIGHT: i32 = 720;           // Default preview window height
pub const FPS: u32 = 60;                      // Frames per second

pub const ADVANCE_INTERVAL_MS: Millis = 4_000;     // Dwell time of each slide before autoplay advances
pub const SELECTOR_SWAP_DELAY_MS: Millis = 150;    // Exit phase to content swap, selector widget
pub const CAROUSEL_SWAP_DELAY_MS: Millis = 60;     // Exit phase to content swap, carousel widget
pub const ENTER_DELAY_MS: Millis = 40;             // Content swap to enter phase
pub const INDICATOR_FILL_MS: Millis = 3_000;       // Underline fill duration of the active selector item
pub const RESUME_DELAY_MS: Millis = 150;           // Autoplay resumes this long after a button or swipe
pub const SWIPE_THRESHOLD_PX: f32 = 40.0;          // Horizontal travel a swipe must exceed

pub const REVEAL_THRESHOLD: f32 = 0.25;            // Visible fraction at which a section fades in
pub const ENTER_ANIMATION_MS: Millis = 700;        // Length of the enter tween drawn by the preview
