// Page element ids and asset paths used by the web runtime.
//
// The scene's own tuning lives in `universe_core::constants`; these are only
// the names the host page has to provide.
pub const CANVAS_ID: &str = "universe-canvas";
pub const LOADING_OVERLAY_ID: &str = "loading-overlay";
pub const WELCOME_OVERLAY_ID: &str = "welcome-overlay";
pub const INSTRUCTIONS_OVERLAY_ID: &str = "instructions-overlay";
pub const CONTROL_BADGE_ID: &str = "control-badge";
pub const ORBIT_BADGE_ID: &str = "orbit-badge";
pub const BACK_BUTTON_ID: &str = "back-button";
pub const MUTE_BUTTON_ID: &str = "mute-button";

// Content panels are `<section id="section-music">` etc.
pub const SECTION_ID_PREFIX: &str = "section-";
// Buttons carrying `data-nav="music"` navigate on click
pub const NAV_SELECTOR: &str = "[data-nav]";
pub const NAV_DATA_KEY: &str = "nav";

pub const HIDDEN_CLASS: &str = "hidden";
pub const TRANSITIONING_CLASS: &str = "transitioning";

pub const HIT_SOUND_URL: &str = "sounds/hit.mp3";
pub const SUCCESS_SOUND_URL: &str = "sounds/success.mp3";
pub const MUSIC_URL: &str = "sounds/background.mp3";

pub const CUE_VOLUME: f64 = 0.5;
pub const MUSIC_VOLUME: f64 = 0.3;

// Upper bound on a single frame step so a backgrounded tab does not teleport
// the character when it comes back.
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// WheelEvent.deltaMode scaling to pixels
pub const WHEEL_LINE_PX: f32 = 16.0;
pub const WHEEL_PAGE_PX: f32 = 800.0;

pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];

#[inline]
pub fn section_element_id(name: &str) -> String {
    format!("{}{}", SECTION_ID_PREFIX, name)
}
