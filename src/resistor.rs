//! Resistor band layouts, validated band specs and their computed values.

use crate::bands::{self, first_option, is_valid, BandColor, BandRole, DecodeError, UnknownColorError};
use crate::defaults;
use crate::format::{compute_resistance, format_magnitude, format_ppm, format_tolerance, ResistanceError};
use crate::palette::{color_to_display_rgba, Rgba};
use crate::parse::parse_band_code;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SLOT_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub enum SpecError {
    UnsupportedBandCount(usize),
    BandCountMismatch { expected: usize, found: usize },
    UnknownColor(String),
    EmptyBandCode,
    BandIndexOutOfRange(usize),
    SlotDisabled(BandSlot),
    Decode(DecodeError),
    Resistance(ResistanceError),
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::UnsupportedBandCount(n) => {
                write!(f, "{} bands is not supported (use 4, 5 or 6)", n)
            }
            SpecError::BandCountMismatch { expected, found } => {
                write!(f, "Expected {} band colors, got {}", expected, found)
            }
            SpecError::UnknownColor(name) => write!(f, "'{}' is not a resistor band color", name),
            SpecError::EmptyBandCode => write!(f, "Band code cannot be empty"),
            SpecError::BandIndexOutOfRange(i) => write!(f, "There is no band at position {}", i + 1),
            SpecError::SlotDisabled(slot) => {
                write!(f, "{} is not used by the selected band count", slot.title())
            }
            SpecError::Decode(e) => write!(f, "{}", e),
            SpecError::Resistance(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SpecError {}

impl From<DecodeError> for SpecError {
    fn from(err: DecodeError) -> Self {
        SpecError::Decode(err)
    }
}

impl From<ResistanceError> for SpecError {
    fn from(err: ResistanceError) -> Self {
        SpecError::Resistance(err)
    }
}

impl From<UnknownColorError> for SpecError {
    fn from(err: UnknownColorError) -> Self {
        SpecError::UnknownColor(err.0)
    }
}

/// Number of bands printed on the resistor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BandCount {
    #[default]
    Four,
    Five,
    Six,
}

impl BandCount {
    pub const ALL: [BandCount; 3] = [BandCount::Four, BandCount::Five, BandCount::Six];

    pub fn bands(self) -> usize {
        match self {
            BandCount::Four => 4,
            BandCount::Five => 5,
            BandCount::Six => 6,
        }
    }

    pub fn digit_bands(self) -> usize {
        match self {
            BandCount::Four => 2,
            BandCount::Five | BandCount::Six => 3,
        }
    }

    pub fn has_ppm(self) -> bool {
        self == BandCount::Six
    }

    pub fn from_bands(n: usize) -> Result<Self, SpecError> {
        match n {
            4 => Ok(BandCount::Four),
            5 => Ok(BandCount::Five),
            6 => Ok(BandCount::Six),
            other => Err(SpecError::UnsupportedBandCount(other)),
        }
    }

    /// Position in the band-count dropdown.
    pub fn index(self) -> usize {
        self.bands() - 4
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Slots occupied by the bands, in reading order.
    pub fn slots(self) -> Vec<BandSlot> {
        BandSlot::ALL
            .iter()
            .copied()
            .filter(|slot| match slot {
                BandSlot::Digit3 => self.digit_bands() == 3,
                BandSlot::Ppm => self.has_ppm(),
                _ => true,
            })
            .collect()
    }

    pub fn roles(self) -> Vec<BandRole> {
        self.slots().into_iter().map(BandSlot::role).collect()
    }
}

impl TryFrom<usize> for BandCount {
    type Error = SpecError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::from_bands(n)
    }
}

impl fmt::Display for BandCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bands", self.bands())
    }
}

/// One of the six band positions on the drawing, each with its own dropdown.
///
/// A four-band resistor leaves `Digit3` and `Ppm` empty; a five-band one
/// leaves only `Ppm` empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BandSlot {
    Digit1,
    Digit2,
    Digit3,
    Multiplier,
    Tolerance,
    Ppm,
}

impl BandSlot {
    pub const ALL: [BandSlot; SLOT_COUNT] = [
        BandSlot::Digit1,
        BandSlot::Digit2,
        BandSlot::Digit3,
        BandSlot::Multiplier,
        BandSlot::Tolerance,
        BandSlot::Ppm,
    ];

    pub fn index(self) -> usize {
        match self {
            BandSlot::Digit1 => 0,
            BandSlot::Digit2 => 1,
            BandSlot::Digit3 => 2,
            BandSlot::Multiplier => 3,
            BandSlot::Tolerance => 4,
            BandSlot::Ppm => 5,
        }
    }

    pub fn role(self) -> BandRole {
        match self {
            BandSlot::Digit1 | BandSlot::Digit2 | BandSlot::Digit3 => BandRole::Digit,
            BandSlot::Multiplier => BandRole::Multiplier,
            BandSlot::Tolerance => BandRole::Tolerance,
            BandSlot::Ppm => BandRole::Ppm,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            BandSlot::Digit1 => "1st Digit",
            BandSlot::Digit2 => "2nd Digit",
            BandSlot::Digit3 => "3rd Digit",
            BandSlot::Multiplier => "Multiplier",
            BandSlot::Tolerance => "Tolerance",
            BandSlot::Ppm => "Temp. Coefficient",
        }
    }
}

/// Resistance, tolerance and temperature coefficient read off a resistor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResistorValue {
    ohms: f64,
    tolerance_percent: f64,
    ppm: Option<u32>,
}

impl ResistorValue {
    pub fn ohms(&self) -> f64 {
        self.ohms
    }

    pub fn tolerance_percent(&self) -> f64 {
        self.tolerance_percent
    }

    pub fn ppm(&self) -> Option<u32> {
        self.ppm
    }

    /// e.g. "4.7k Ω"
    pub fn resistance_text(&self) -> String {
        format!("{} Ω", format_magnitude(self.ohms))
    }

    /// e.g. "±5%"
    pub fn tolerance_text(&self) -> String {
        format!("±{}%", format_tolerance(self.tolerance_percent))
    }

    pub fn ppm_text(&self) -> Option<String> {
        self.ppm.map(format_ppm)
    }

    pub fn summary(&self) -> String {
        let mut text = format!("{} {}", self.resistance_text(), self.tolerance_text());
        if let Some(ppm) = self.ppm_text() {
            text.push(' ');
            text.push_str(&ppm);
        }
        text
    }
}

impl fmt::Display for ResistorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// A validated set of band colors.
///
/// Every color has been checked against the table of its role and the
/// resulting value is computed once on construction. Changing a band builds
/// a new spec.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResistorSpec {
    count: BandCount,
    bands: Vec<BandColor>,
    #[serde(skip)]
    decoded: Vec<f64>,
    #[serde(skip)]
    value: ResistorValue,
}

impl ResistorSpec {
    pub fn new(count: BandCount, bands: Vec<BandColor>) -> Result<Self, SpecError> {
        if bands.len() != count.bands() {
            return Err(SpecError::BandCountMismatch {
                expected: count.bands(),
                found: bands.len(),
            });
        }

        let decoded = count
            .roles()
            .into_iter()
            .zip(&bands)
            .map(|(role, &color)| bands::decode(role, color))
            .collect::<Result<Vec<f64>, DecodeError>>()?;

        let n = count.digit_bands();
        let digits: Vec<u8> = decoded[..n].iter().map(|&d| d as u8).collect();
        let ohms = compute_resistance(&digits, decoded[n])?;
        let value = ResistorValue {
            ohms,
            tolerance_percent: decoded[n + 1],
            ppm: decoded.get(n + 2).map(|&p| p as u32),
        };
        debug!(
            "Bands {:?} evaluated to {}",
            bands.iter().map(|c| c.name()).collect::<Vec<_>>(),
            value
        );

        Ok(Self {
            count,
            bands,
            decoded,
            value,
        })
    }

    /// Builds a spec whose band count is the number of colors given.
    pub fn from_colors(bands: Vec<BandColor>) -> Result<Self, SpecError> {
        let count = BandCount::from_bands(bands.len())?;
        Self::new(count, bands)
    }

    pub fn count(&self) -> BandCount {
        self.count
    }

    pub fn bands(&self) -> &[BandColor] {
        &self.bands
    }

    pub fn digits(&self) -> &[BandColor] {
        &self.bands[..self.count.digit_bands()]
    }

    pub fn multiplier(&self) -> BandColor {
        self.bands[self.count.digit_bands()]
    }

    pub fn tolerance(&self) -> BandColor {
        self.bands[self.count.digit_bands() + 1]
    }

    pub fn ppm(&self) -> Option<BandColor> {
        self.bands.get(self.count.digit_bands() + 2).copied()
    }

    pub fn value(&self) -> &ResistorValue {
        &self.value
    }

    pub fn evaluate(&self) -> ResistorValue {
        self.value.clone()
    }

    /// Returns a copy with the band at `index` (reading order) replaced.
    pub fn with_band(&self, index: usize, color: BandColor) -> Result<Self, SpecError> {
        if index >= self.bands.len() {
            return Err(SpecError::BandIndexOutOfRange(index));
        }
        let mut bands = self.bands.clone();
        bands[index] = color;
        Self::new(self.count, bands)
    }

    fn slot_colors(&self) -> impl Iterator<Item = (BandSlot, BandColor)> + '_ {
        self.count.slots().into_iter().zip(self.bands.iter().copied())
    }

    fn slot_values(&self) -> impl Iterator<Item = (BandSlot, f64)> + '_ {
        self.count.slots().into_iter().zip(self.decoded.iter().copied())
    }

    /// Display colors for the six slots; unused slots are transparent.
    pub fn band_tints(&self) -> [Rgba; SLOT_COUNT] {
        let mut tints = [Rgba::TRANSPARENT; SLOT_COUNT];
        for (slot, color) in self.slot_colors() {
            tints[slot.index()] = color_to_display_rgba(slot.role(), color);
        }
        tints
    }

    /// Text shown next to each of the six dropdowns.
    pub fn band_labels(&self) -> [String; SLOT_COUNT] {
        let mut labels = BandSlot::ALL.map(|slot| match slot.role() {
            BandRole::Ppm => "- ppm".to_string(),
            _ => "-".to_string(),
        });
        for (slot, value) in self.slot_values() {
            labels[slot.index()] = match slot.role() {
                BandRole::Digit => format!("{}", value as u8),
                BandRole::Multiplier => format!("{} Ω", format_magnitude(value)),
                BandRole::Tolerance => format!("±{}%", format_tolerance(value)),
                BandRole::Ppm => format_ppm(value as u32),
            };
        }
        labels
    }
}

impl Default for ResistorSpec {
    /// Four bands, each on the first option of its dropdown: 0 Ω ±1%.
    fn default() -> Self {
        Self {
            count: defaults::BAND_COUNT,
            bands: vec![
                defaults::DIGIT,
                defaults::DIGIT,
                defaults::MULTIPLIER,
                defaults::TOLERANCE,
            ],
            decoded: vec![0.0, 0.0, 1.0, 1.0],
            value: ResistorValue {
                ohms: 0.0,
                tolerance_percent: 1.0,
                ppm: None,
            },
        }
    }
}

impl fmt::Display for ResistorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.bands.iter().map(|c| c.name()).collect();
        f.write_str(&names.join("-"))
    }
}

impl FromStr for ResistorSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_colors(parse_band_code(s)?)
    }
}

/// State of the band dropdown panel: the band count plus one color per slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandSelection {
    count: BandCount,
    colors: [BandColor; SLOT_COUNT],
}

impl Default for BandSelection {
    fn default() -> Self {
        Self {
            count: BandCount::default(),
            colors: BandSlot::ALL.map(|slot| first_option(slot.role())),
        }
    }
}

impl BandSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> BandCount {
        self.count
    }

    /// Switches band count. Slots that become unused go back to their first
    /// option.
    pub fn set_count(&mut self, count: BandCount) {
        self.count = count;
        for slot in BandSlot::ALL {
            if !self.is_enabled(slot) {
                self.colors[slot.index()] = first_option(slot.role());
            }
        }
    }

    pub fn is_enabled(&self, slot: BandSlot) -> bool {
        match slot {
            BandSlot::Digit3 => self.count.digit_bands() == 3,
            BandSlot::Ppm => self.count.has_ppm(),
            _ => true,
        }
    }

    pub fn get(&self, slot: BandSlot) -> BandColor {
        self.colors[slot.index()]
    }

    pub fn set(&mut self, slot: BandSlot, color: BandColor) -> Result<(), SpecError> {
        if !self.is_enabled(slot) {
            return Err(SpecError::SlotDisabled(slot));
        }
        let role = slot.role();
        if !is_valid(role, color) {
            return Err(DecodeError::InvalidColorForRole { role, color }.into());
        }
        self.colors[slot.index()] = color;
        Ok(())
    }

    pub fn to_spec(&self) -> Result<ResistorSpec, SpecError> {
        let bands = self
            .count
            .slots()
            .into_iter()
            .map(|slot| self.get(slot))
            .collect();
        ResistorSpec::new(self.count, bands)
    }

    pub fn from_spec(spec: &ResistorSpec) -> Self {
        let mut selection = Self::default();
        selection.set_count(spec.count());
        for (slot, color) in spec.slot_colors() {
            selection.colors[slot.index()] = color;
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use BandColor::*;

    fn spec(code: &str) -> ResistorSpec {
        code.parse().unwrap()
    }

    #[test]
    fn four_band_value() {
        let s = spec("yellow violet red gold");
        assert_eq!(s.count(), BandCount::Four);
        assert_relative_eq!(s.value().ohms(), 4700.0);
        assert_relative_eq!(s.value().tolerance_percent(), 5.0);
        assert_eq!(s.value().ppm(), None);
        assert_eq!(s.value().summary(), "4.7k Ω ±5%");
    }

    #[test]
    fn five_and_six_band_values() {
        let five = spec("red violet brown brown brown");
        assert_relative_eq!(five.value().ohms(), 2710.0);
        assert_eq!(five.value().resistance_text(), "2.71k Ω");
        assert_eq!(five.value().tolerance_text(), "±1%");

        let six = spec("brown black black yellow blue orange");
        assert_eq!(six.count(), BandCount::Six);
        assert_relative_eq!(six.value().ohms(), 1_000_000.0);
        assert_eq!(six.value().ppm(), Some(15));
        assert_eq!(six.value().summary(), "1M Ω ±0.25% 15 ppm");
        assert_eq!(six.to_string(), "brown-black-black-yellow-blue-orange");
    }

    #[test]
    fn accessors_follow_band_layout() {
        let six = spec("brown black black yellow blue orange");
        assert_eq!(six.digits(), &[Brown, Black, Black]);
        assert_eq!(six.multiplier(), Yellow);
        assert_eq!(six.tolerance(), Blue);
        assert_eq!(six.ppm(), Some(Orange));

        let four = spec("brown black red gold");
        assert_eq!(four.digits(), &[Brown, Black]);
        assert_eq!(four.ppm(), None);
    }

    #[test]
    fn gold_multiplier_gives_fractional_ohms() {
        let s = spec("brown black gold gold");
        assert_relative_eq!(s.value().ohms(), 1.0);
        assert_eq!(s.value().resistance_text(), "1 Ω");
        let s = spec("red violet gold silver");
        assert_eq!(s.value().resistance_text(), "2.7 Ω");
        assert_eq!(s.value().tolerance_text(), "±10%");
    }

    #[test]
    fn invalid_colors_are_rejected() {
        assert_eq!(
            ResistorSpec::new(BandCount::Four, vec![Gold, Black, Red, Gold]),
            Err(SpecError::Decode(DecodeError::InvalidColorForRole {
                role: BandRole::Digit,
                color: Gold,
            }))
        );
        assert!(ResistorSpec::new(BandCount::Four, vec![Brown, Black, Red, Black]).is_err());
        assert!(ResistorSpec::new(BandCount::Six, vec![Brown, Black, Black, Red, Gold, Green]).is_err());
    }

    #[test]
    fn band_count_must_match() {
        assert_eq!(
            ResistorSpec::new(BandCount::Five, vec![Brown, Black, Red, Gold]),
            Err(SpecError::BandCountMismatch {
                expected: 5,
                found: 4
            })
        );
        assert_eq!(
            ResistorSpec::from_colors(vec![Brown, Black, Red]),
            Err(SpecError::UnsupportedBandCount(3))
        );
    }

    #[test]
    fn with_band_builds_a_new_spec() {
        let original = spec("brown black red gold");
        let changed = original.with_band(2, Orange).unwrap();
        assert_relative_eq!(changed.value().ohms(), 10_000.0);
        assert_relative_eq!(original.value().ohms(), 1_000.0);
        assert_eq!(
            original.with_band(4, Gold),
            Err(SpecError::BandIndexOutOfRange(4))
        );
        assert!(original.with_band(0, Silver).is_err());
    }

    #[test]
    fn default_matches_first_dropdown_options() {
        let built = ResistorSpec::new(BandCount::Four, vec![Black, Black, Black, Brown]).unwrap();
        assert_eq!(ResistorSpec::default(), built);
        assert_eq!(BandSelection::default().to_spec().unwrap(), built);
    }

    #[test]
    fn tints_leave_unused_slots_transparent() {
        let tints = spec("brown black red gold").band_tints();
        assert_eq!(tints[BandSlot::Digit1.index()].to_rgba8(), (125, 75, 0, 255));
        assert!(tints[BandSlot::Digit3.index()].is_transparent());
        assert_eq!(tints[BandSlot::Multiplier.index()].to_rgba8(), (255, 0, 0, 255));
        assert_eq!(tints[BandSlot::Tolerance.index()].to_rgba8(), (255, 206, 43, 255));
        assert!(tints[BandSlot::Ppm.index()].is_transparent());

        let six = spec("brown black black yellow blue orange").band_tints();
        assert!(six.iter().all(|t| !t.is_transparent()));
    }

    #[test]
    fn labels_for_each_slot() {
        let four = spec("yellow violet orange gold").band_labels();
        assert_eq!(four, ["4", "7", "-", "1k Ω", "±5%", "- ppm"].map(String::from));

        let six = spec("brown black black yellow blue orange").band_labels();
        assert_eq!(
            six,
            ["1", "0", "0", "10k Ω", "±0.25%", "15 ppm"].map(String::from)
        );
    }

    #[test]
    fn band_count_layouts() {
        assert_eq!(
            BandCount::Four.roles(),
            vec![BandRole::Digit, BandRole::Digit, BandRole::Multiplier, BandRole::Tolerance]
        );
        assert_eq!(BandCount::Five.slots().len(), 5);
        assert!(!BandCount::Five.slots().contains(&BandSlot::Ppm));
        assert_eq!(BandCount::Six.roles().last(), Some(&BandRole::Ppm));
        assert_eq!(BandCount::from_index(2), Some(BandCount::Six));
        assert_eq!(BandCount::Five.index(), 1);
        assert_eq!(BandCount::try_from(7usize), Err(SpecError::UnsupportedBandCount(7)));
    }

    #[test]
    fn selection_resets_slots_that_become_unused() {
        let mut selection = BandSelection::new();
        selection.set_count(BandCount::Six);
        selection.set(BandSlot::Digit3, White).unwrap();
        selection.set(BandSlot::Ppm, Red).unwrap();

        selection.set_count(BandCount::Five);
        assert_eq!(selection.get(BandSlot::Digit3), White);
        assert_eq!(selection.get(BandSlot::Ppm), Violet);
        assert!(!selection.is_enabled(BandSlot::Ppm));

        selection.set_count(BandCount::Four);
        assert_eq!(selection.get(BandSlot::Digit3), Black);
        assert_eq!(
            selection.set(BandSlot::Digit3, Red),
            Err(SpecError::SlotDisabled(BandSlot::Digit3))
        );
    }

    #[test]
    fn selection_rejects_colors_outside_the_role() {
        let mut selection = BandSelection::new();
        assert!(selection.set(BandSlot::Tolerance, Black).is_err());
        assert_eq!(selection.get(BandSlot::Tolerance), Brown);
        selection.set(BandSlot::Multiplier, Silver).unwrap();
        assert_eq!(selection.to_spec().unwrap().multiplier(), Silver);
    }

    #[test]
    fn selection_round_trips_through_spec() {
        let six = spec("brown black black yellow blue orange");
        let selection = BandSelection::from_spec(&six);
        assert_eq!(selection.count(), BandCount::Six);
        assert_eq!(selection.get(BandSlot::Ppm), Orange);
        assert_eq!(selection.to_spec().unwrap(), six);
    }

    #[test]
    fn band_code_text_normalizes_to_canonical_form() {
        let typed: ResistorSpec = "BROWN, Black / red gold".parse().unwrap();
        assert_eq!(typed, ResistorSpec::from_colors(vec![Brown, Black, Red, Gold]).unwrap());
        assert_eq!(typed.to_string(), "brown-black-red-gold");
        assert_eq!(typed.evaluate(), *typed.value());
    }

    #[test]
    fn band_count_dropdown_index() {
        for (i, count) in BandCount::ALL.into_iter().enumerate() {
            assert_eq!(count.index(), i);
            assert_eq!(BandCount::from_index(i), Some(count));
        }
        assert_eq!(BandCount::from_index(3), None);
    }

    #[test]
    fn spec_serializes_count_and_bands_only() {
        let json = serde_json::to_value(spec("brown black red gold")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "count": "Four", "bands": ["brown", "black", "red", "gold"] })
        );
    }
}
