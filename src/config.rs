//! Application-level configuration constants.

use log::LevelFilter;

// UI Behavior
pub const DEBOUNCE_MS: u32 = 400;
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

// Resistor drawing, in SVG user units
pub const IMAGE_WIDTH: f64 = 420.0;
pub const IMAGE_HEIGHT: f64 = 140.0;
pub const LEAD_Y: f64 = 70.0;
pub const LEAD_WIDTH: f64 = 6.0;
pub const BODY_X: f64 = 90.0;
pub const BODY_Y: f64 = 35.0;
pub const BODY_WIDTH: f64 = 240.0;
pub const BODY_HEIGHT: f64 = 70.0;
pub const BODY_RADIUS: f64 = 18.0;
pub const BAND_WIDTH: f64 = 16.0;

/// Left edge of each band, indexed by `BandSlot::index`. The tolerance band
/// sits apart from the others.
pub const BAND_X: [f64; 6] = [112.0, 142.0, 172.0, 202.0, 262.0, 296.0];

pub const BODY_COLOR: &str = "#d9c59a";
pub const LEAD_COLOR: &str = "#9e9e9e";
