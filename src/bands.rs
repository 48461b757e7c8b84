//! Band colors, band roles and the per-role lookup tables.
//!
//! Every role has its own table. A color that is missing from a role's table
//! is not a valid choice for that band, and asking for its value yields
//! [`DecodeError::InvalidColorForRole`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandColor {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Grey,
    White,
    Gold,
    Silver,
}

impl BandColor {
    pub const ALL: [BandColor; 12] = [
        BandColor::Black,
        BandColor::Brown,
        BandColor::Red,
        BandColor::Orange,
        BandColor::Yellow,
        BandColor::Green,
        BandColor::Blue,
        BandColor::Violet,
        BandColor::Grey,
        BandColor::White,
        BandColor::Gold,
        BandColor::Silver,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BandColor::Black => "black",
            BandColor::Brown => "brown",
            BandColor::Red => "red",
            BandColor::Orange => "orange",
            BandColor::Yellow => "yellow",
            BandColor::Green => "green",
            BandColor::Blue => "blue",
            BandColor::Violet => "violet",
            BandColor::Grey => "grey",
            BandColor::White => "white",
            BandColor::Gold => "gold",
            BandColor::Silver => "silver",
        }
    }
}

impl fmt::Display for BandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string is not one of the twelve band color names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColorError(pub String);

impl fmt::Display for UnknownColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a resistor band color", self.0)
    }
}

impl std::error::Error for UnknownColorError {}

impl FromStr for BandColor {
    type Err = UnknownColorError;

    /// Case-insensitive; "gray" is accepted for grey.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        if lowered == "gray" {
            return Ok(BandColor::Grey);
        }
        BandColor::ALL
            .iter()
            .copied()
            .find(|c| c.name() == lowered)
            .ok_or_else(|| UnknownColorError(s.trim().to_string()))
    }
}

/// What a band encodes. Selects the lookup table used to decode its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandRole {
    Digit,
    Multiplier,
    Tolerance,
    Ppm,
}

impl BandRole {
    pub const ALL: [BandRole; 4] = [
        BandRole::Digit,
        BandRole::Multiplier,
        BandRole::Tolerance,
        BandRole::Ppm,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BandRole::Digit => "digit",
            BandRole::Multiplier => "multiplier",
            BandRole::Tolerance => "tolerance",
            BandRole::Ppm => "ppm",
        }
    }
}

impl fmt::Display for BandRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    InvalidColorForRole { role: BandRole, color: BandColor },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidColorForRole { role, color } => {
                write!(f, "{} is not a valid {} band color", color, role)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

// Tables are kept in the order the dropdowns present them.

const DIGIT_TABLE: [(BandColor, u8); 10] = [
    (BandColor::Black, 0),
    (BandColor::Brown, 1),
    (BandColor::Red, 2),
    (BandColor::Orange, 3),
    (BandColor::Yellow, 4),
    (BandColor::Green, 5),
    (BandColor::Blue, 6),
    (BandColor::Violet, 7),
    (BandColor::Grey, 8),
    (BandColor::White, 9),
];

const MULTIPLIER_TABLE: [(BandColor, f64); 12] = [
    (BandColor::Black, 1.0),
    (BandColor::Brown, 10.0),
    (BandColor::Red, 100.0),
    (BandColor::Orange, 1_000.0),
    (BandColor::Yellow, 10_000.0),
    (BandColor::Green, 100_000.0),
    (BandColor::Blue, 1_000_000.0),
    (BandColor::Violet, 10_000_000.0),
    (BandColor::Grey, 100_000_000.0),
    (BandColor::White, 1_000_000_000.0),
    (BandColor::Gold, 0.1),
    (BandColor::Silver, 0.01),
];

/// Tolerance in percent (gold = ±5%).
const TOLERANCE_TABLE: [(BandColor, f64); 8] = [
    (BandColor::Brown, 1.0),
    (BandColor::Red, 2.0),
    (BandColor::Green, 0.5),
    (BandColor::Blue, 0.25),
    (BandColor::Violet, 0.1),
    (BandColor::Grey, 0.05),
    (BandColor::Gold, 5.0),
    (BandColor::Silver, 10.0),
];

const PPM_TABLE: [(BandColor, u32); 6] = [
    (BandColor::Violet, 5),
    (BandColor::Blue, 10),
    (BandColor::Orange, 15),
    (BandColor::Yellow, 25),
    (BandColor::Red, 50),
    (BandColor::Brown, 100),
];

fn lookup<T: Copy>(table: &[(BandColor, T)], color: BandColor) -> Option<T> {
    table.iter().find(|(c, _)| *c == color).map(|&(_, v)| v)
}

fn invalid(role: BandRole, color: BandColor) -> DecodeError {
    DecodeError::InvalidColorForRole { role, color }
}

pub fn digit_value(color: BandColor) -> Result<u8, DecodeError> {
    lookup(&DIGIT_TABLE, color).ok_or_else(|| invalid(BandRole::Digit, color))
}

pub fn multiplier_value(color: BandColor) -> Result<f64, DecodeError> {
    lookup(&MULTIPLIER_TABLE, color).ok_or_else(|| invalid(BandRole::Multiplier, color))
}

pub fn tolerance_percent(color: BandColor) -> Result<f64, DecodeError> {
    lookup(&TOLERANCE_TABLE, color).ok_or_else(|| invalid(BandRole::Tolerance, color))
}

pub fn ppm_value(color: BandColor) -> Result<u32, DecodeError> {
    lookup(&PPM_TABLE, color).ok_or_else(|| invalid(BandRole::Ppm, color))
}

/// Decodes `color` with the table for `role`.
///
/// Digits and PPM values are returned as whole numbers; tolerance is in
/// percent.
pub fn decode(role: BandRole, color: BandColor) -> Result<f64, DecodeError> {
    match role {
        BandRole::Digit => digit_value(color).map(f64::from),
        BandRole::Multiplier => multiplier_value(color),
        BandRole::Tolerance => tolerance_percent(color),
        BandRole::Ppm => ppm_value(color).map(f64::from),
    }
}

/// Returns the canonical color whose decoded value for `role` is `value`.
pub fn encode(role: BandRole, value: f64) -> Option<BandColor> {
    colors_for(role).into_iter().find(|&color| {
        decode(role, color)
            .map(|v| (v - value).abs() <= f64::EPSILON * v.abs().max(1.0))
            .unwrap_or(false)
    })
}

/// Valid colors for `role`, in dropdown order.
pub fn colors_for(role: BandRole) -> Vec<BandColor> {
    match role {
        BandRole::Digit => DIGIT_TABLE.iter().map(|&(c, _)| c).collect(),
        BandRole::Multiplier => MULTIPLIER_TABLE.iter().map(|&(c, _)| c).collect(),
        BandRole::Tolerance => TOLERANCE_TABLE.iter().map(|&(c, _)| c).collect(),
        BandRole::Ppm => PPM_TABLE.iter().map(|&(c, _)| c).collect(),
    }
}

pub fn is_valid(role: BandRole, color: BandColor) -> bool {
    decode(role, color).is_ok()
}

/// First dropdown option for `role`, used when a band is reset.
pub fn first_option(role: BandRole) -> BandColor {
    match role {
        BandRole::Digit => DIGIT_TABLE[0].0,
        BandRole::Multiplier => MULTIPLIER_TABLE[0].0,
        BandRole::Tolerance => TOLERANCE_TABLE[0].0,
        BandRole::Ppm => PPM_TABLE[0].0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn digits_decode_to_their_position() {
        for (expected, color) in colors_for(BandRole::Digit).into_iter().enumerate() {
            let value = digit_value(color).unwrap();
            assert_eq!(value as usize, expected);
            assert!(value <= 9);
            assert_eq!(decode(BandRole::Digit, color).unwrap(), expected as f64);
        }
    }

    #[test]
    fn gold_is_not_a_digit() {
        assert_eq!(
            decode(BandRole::Digit, BandColor::Gold),
            Err(DecodeError::InvalidColorForRole {
                role: BandRole::Digit,
                color: BandColor::Gold,
            })
        );
        assert!(!is_valid(BandRole::Digit, BandColor::Silver));
    }

    #[test]
    fn multiplier_table_covers_fractions() {
        assert_relative_eq!(multiplier_value(BandColor::Gold).unwrap(), 0.1);
        assert_relative_eq!(multiplier_value(BandColor::Silver).unwrap(), 0.01);
        assert_relative_eq!(multiplier_value(BandColor::White).unwrap(), 1e9);
        assert_relative_eq!(multiplier_value(BandColor::Orange).unwrap(), 1e3);
    }

    #[test]
    fn tolerance_and_ppm_tables() {
        assert_relative_eq!(tolerance_percent(BandColor::Gold).unwrap(), 5.0);
        assert_relative_eq!(tolerance_percent(BandColor::Grey).unwrap(), 0.05);
        assert_relative_eq!(tolerance_percent(BandColor::Blue).unwrap(), 0.25);
        assert!(tolerance_percent(BandColor::Black).is_err());

        assert_eq!(ppm_value(BandColor::Orange).unwrap(), 15);
        assert_eq!(ppm_value(BandColor::Brown).unwrap(), 100);
        assert!(ppm_value(BandColor::Green).is_err());
    }

    #[test]
    fn encode_returns_the_decoded_color() {
        for role in BandRole::ALL {
            for color in colors_for(role) {
                let value = decode(role, color).unwrap();
                assert_eq!(encode(role, value), Some(color), "{} {}", role, color);
            }
        }
        assert_eq!(encode(BandRole::Ppm, 20.0), None);
    }

    #[test]
    fn dropdown_order_matches_tables() {
        assert_eq!(
            colors_for(BandRole::Tolerance),
            vec![
                BandColor::Brown,
                BandColor::Red,
                BandColor::Green,
                BandColor::Blue,
                BandColor::Violet,
                BandColor::Grey,
                BandColor::Gold,
                BandColor::Silver,
            ]
        );
        assert_eq!(first_option(BandRole::Ppm), BandColor::Violet);
        assert_eq!(colors_for(BandRole::Multiplier).len(), 12);
    }

    #[test]
    fn color_names_parse_case_insensitively() {
        assert_eq!("Violet".parse::<BandColor>(), Ok(BandColor::Violet));
        assert_eq!(" GOLD ".parse::<BandColor>(), Ok(BandColor::Gold));
        assert_eq!("gray".parse::<BandColor>(), Ok(BandColor::Grey));
        assert_eq!(
            "purple".parse::<BandColor>(),
            Err(UnknownColorError("purple".to_string()))
        );
        for color in BandColor::ALL {
            assert_eq!(color.to_string().parse::<BandColor>(), Ok(color));
        }
    }

    #[test]
    fn decode_error_message_names_role_and_color() {
        let err = digit_value(BandColor::Gold).unwrap_err();
        assert_eq!(err.to_string(), "gold is not a valid digit band color");
    }
}
