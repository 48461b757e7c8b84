//! Resistance arithmetic and display formatting.

use std::fmt;

/// Most decimals printed for a scaled magnitude.
const MAGNITUDE_DECIMALS: usize = 6;

const MAX_TOLERANCE_DECIMALS: usize = 4;

const SI_PREFIXES: [(f64, &str); 3] = [(1e9, "G"), (1e6, "M"), (1e3, "k")];

#[derive(Debug, Clone, PartialEq)]
pub enum ResistanceError {
    NoDigits,
    DigitOutOfRange(u8),
    UnparsableDigits(String),
    InvalidMultiplier(f64),
}

impl fmt::Display for ResistanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResistanceError::NoDigits => write!(f, "At least one digit band is required"),
            ResistanceError::DigitOutOfRange(d) => {
                write!(f, "Digit value {} is out of range (must be 0-9)", d)
            }
            ResistanceError::UnparsableDigits(text) => {
                write!(f, "Unable to read '{}' as a base resistance", text)
            }
            ResistanceError::InvalidMultiplier(m) => {
                write!(f, "Multiplier {} must be a positive finite number", m)
            }
        }
    }
}

impl std::error::Error for ResistanceError {}

/// Concatenates the digit values into one decimal number and applies the
/// multiplier: `[2, 7, 1]` with `10.0` gives `2710.0`.
pub fn compute_resistance(digits: &[u8], multiplier: f64) -> Result<f64, ResistanceError> {
    if digits.is_empty() {
        return Err(ResistanceError::NoDigits);
    }
    if let Some(&d) = digits.iter().find(|&&d| d > 9) {
        return Err(ResistanceError::DigitOutOfRange(d));
    }
    if !multiplier.is_finite() || multiplier <= 0.0 {
        return Err(ResistanceError::InvalidMultiplier(multiplier));
    }

    let literal: String = digits.iter().map(|d| d.to_string()).collect();
    let base: f64 = literal
        .parse()
        .map_err(|_| ResistanceError::UnparsableDigits(literal.clone()))?;

    Ok(base * multiplier)
}

/// Prints `x` with at most `decimals` places and no trailing zeros.
fn fmt_trimmed(x: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, x);
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

/// Scales `value` by the largest SI prefix (k, M, G) it reaches.
///
/// Values below 1000 are printed unscaled, so `1.0` stays `"1"`. The prefix is
/// picked after rounding, so `999.9999999` prints as `"1k"`.
pub fn format_magnitude(value: f64) -> String {
    let rounded: f64 = fmt_trimmed(value, MAGNITUDE_DECIMALS)
        .parse()
        .unwrap_or(value);
    for &(factor, prefix) in &SI_PREFIXES {
        if rounded >= factor {
            return format!("{}{}", fmt_trimmed(rounded / factor, MAGNITUDE_DECIMALS), prefix);
        }
    }
    fmt_trimmed(rounded, MAGNITUDE_DECIMALS)
}

fn tolerance_tier_decimals(pct: f64) -> usize {
    if pct >= 1.0 {
        0
    } else if pct >= 0.1 {
        1
    } else if pct >= 0.01 {
        2
    } else if pct >= 0.001 {
        3
    } else {
        MAX_TOLERANCE_DECIMALS
    }
}

/// Formats a tolerance percentage with precision picked by magnitude.
///
/// The tier sets the minimum number of decimals. It is raised, up to four,
/// while the printed value would still differ from `pct`.
pub fn format_tolerance(pct: f64) -> String {
    let tier = tolerance_tier_decimals(pct);
    for decimals in tier..MAX_TOLERANCE_DECIMALS {
        let candidate = format!("{:.*}", decimals, pct);
        let exact = candidate
            .parse::<f64>()
            .map(|v| (v - pct).abs() < 1e-9)
            .unwrap_or(false);
        if exact {
            return candidate;
        }
    }
    format!("{:.*}", MAX_TOLERANCE_DECIMALS, pct)
}

pub fn format_ppm(ppm: u32) -> String {
    format!("{} ppm", ppm)
}
