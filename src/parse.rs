//! Parsing of typed band codes such as `"yellow violet red gold"`.

use crate::bands::BandColor;
use crate::resistor::SpecError;
use once_cell::sync::Lazy;
use regex::Regex;

// Whitespace, commas, semicolons, slashes and hyphens all separate bands.
static BAND_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s,;/\-]+").unwrap());

/// Splits a band code into colors, in reading order.
///
/// # Examples
/// ```
/// use resistor_calculator::{parse_band_code, BandColor};
///
/// let bands = parse_band_code("Brown, black / red-gold").unwrap();
/// assert_eq!(bands, vec![BandColor::Brown, BandColor::Black, BandColor::Red, BandColor::Gold]);
/// ```
pub fn parse_band_code(text: &str) -> Result<Vec<BandColor>, SpecError> {
    let colors = BAND_SEPARATOR_REGEX
        .split(text.trim())
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<BandColor>().map_err(SpecError::from))
        .collect::<Result<Vec<_>, _>>()?;

    if colors.is_empty() {
        return Err(SpecError::EmptyBandCode);
    }
    Ok(colors)
}
