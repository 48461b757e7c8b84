//! Resistor color-code decoding and formatting.
//!
//! The Yew front end in `main.rs` drives this crate through [`BandSelection`];
//! JavaScript callers can use [`calculate_resistor`] directly.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

pub mod bands;
pub mod format;
pub mod palette;
pub mod parse;
pub mod resistor;

pub use bands::{
    colors_for, decode, encode, is_valid, BandColor, BandRole, DecodeError, UnknownColorError,
};
pub use format::{compute_resistance, format_magnitude, format_ppm, format_tolerance, ResistanceError};
pub use palette::{color_to_display_rgba, try_display_rgba, Rgba};
pub use parse::parse_band_code;
pub use resistor::{
    BandCount, BandSelection, BandSlot, ResistorSpec, ResistorValue, SpecError, SLOT_COUNT,
};

/// Starting state of the calculator: every dropdown on its first option.
pub mod defaults {
    use crate::bands::BandColor;
    use crate::resistor::BandCount;

    pub const BAND_COUNT: BandCount = BandCount::Four;
    pub const DIGIT: BandColor = BandColor::Black;
    pub const MULTIPLIER: BandColor = BandColor::Black;
    pub const TOLERANCE: BandColor = BandColor::Brown;
    pub const PPM: BandColor = BandColor::Violet;
}

/// Everything the UI shows for one resistor, flattened for JavaScript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResistorReport {
    pub band_count: usize,
    pub bands: Vec<BandColor>,
    pub ohms: f64,
    pub tolerance_percent: f64,
    pub ppm: Option<u32>,
    pub resistance_text: String,
    pub tolerance_text: String,
    pub ppm_text: Option<String>,
    pub summary: String,
    /// Indexed by [`BandSlot::index`].
    pub band_labels: Vec<String>,
    /// CSS colors indexed by [`BandSlot::index`].
    pub band_tints: Vec<String>,
}

impl From<&ResistorSpec> for ResistorReport {
    fn from(spec: &ResistorSpec) -> Self {
        let value = spec.evaluate();
        Self {
            band_count: spec.count().bands(),
            bands: spec.bands().to_vec(),
            ohms: value.ohms(),
            tolerance_percent: value.tolerance_percent(),
            ppm: value.ppm(),
            resistance_text: value.resistance_text(),
            tolerance_text: value.tolerance_text(),
            ppm_text: value.ppm_text(),
            summary: value.summary(),
            band_labels: spec.band_labels().to_vec(),
            band_tints: spec.band_tints().iter().map(Rgba::to_css).collect(),
        }
    }
}

/// Evaluates a list of color names (4, 5 or 6 of them, in reading order).
pub fn report<S: AsRef<str>>(colors: &[S]) -> Result<ResistorReport, SpecError> {
    let bands = colors
        .iter()
        .map(|name| name.as_ref().parse::<BandColor>().map_err(SpecError::from))
        .collect::<Result<Vec<_>, _>>()?;
    let spec = ResistorSpec::from_colors(bands)?;
    info!("Calculated {} for {}", spec.value(), spec);
    Ok(ResistorReport::from(&spec))
}

/// JavaScript entry point.
///
/// Takes an array of color names and returns a serialized [`ResistorReport`],
/// or an error message string.
#[wasm_bindgen]
pub fn calculate_resistor(colors_js: JsValue) -> JsValue {
    let colors: Vec<String> = match serde_wasm_bindgen::from_value(colors_js) {
        Ok(c) => c,
        Err(e) => {
            return serde_wasm_bindgen::to_value(&format!("Failed to read band colors: {}", e))
                .unwrap_or(JsValue::NULL);
        }
    };

    match report(colors.as_slice()) {
        Ok(result) => serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL),
        Err(e) => {
            warn!("Rejected band colors {:?}: {}", colors, e);
            serde_wasm_bindgen::to_value(&format!("Calculation failed: {}", e))
                .unwrap_or(JsValue::NULL)
        }
    }
}
