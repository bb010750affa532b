// Page-wide constants: resource locations, scroll thresholds and animation timings.

pub const PRIMARY_DATA_URL: &str = "data/data.json";
pub const FALLBACK_DATA_URL: &str = "data/data.template.json";

/// Sections count as "current" this far before their top edge.
pub const SECTION_LOOKAHEAD: f64 = 100.0;
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;
pub const NAVBAR_SCROLLED_THRESHOLD: f64 = 50.0;
pub const SCROLL_DEBOUNCE_MS: u32 = 10;

pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_FRAME_MS: u32 = 16;

/// Scheduler tick driving card and toast transitions.
pub const TRANSITION_TICK_MS: u32 = 16;
pub const CARD_SHOW_DELAY_MS: u32 = 100;
pub const CARD_HIDE_DELAY_MS: u32 = 300;
pub const TOAST_ENTER_MS: u32 = 100;
pub const TOAST_LEAVE_MS: u32 = 300;
pub const FORM_MESSAGE_LIFETIME_MS: u32 = 5000;
pub const DATA_NOTICE_LIFETIME_MS: u32 = 10_000;

pub const HERO_REVEAL_DELAY_MS: i32 = 500;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const STAT_VISIBLE_THRESHOLD: f64 = 0.5;

pub const TILT_DIVISOR: f64 = 10.0;
pub const TILT_PERSPECTIVE_PX: u32 = 1000;
pub const TILT_SCALE: f64 = 1.02;

pub const FOCUS_OUTLINE: &str = "2px solid #667eea";
pub const FOCUS_OUTLINE_OFFSET: &str = "2px";

pub const FORM_SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";
pub const LOAD_FAILURE_ALERT: &str =
    "Failed to load portfolio data. Please check the console for details.";
