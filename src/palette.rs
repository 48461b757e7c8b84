//! Display colors used to tint the band graphics.

use crate::bands::{is_valid, BandColor, BandRole, DecodeError};
use log::warn;
use serde::{Deserialize, Serialize};

/// RGBA color with every channel normalized to 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        )
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }

    /// CSS `rgba()` notation, usable directly as an SVG `fill`.
    pub fn to_css(&self) -> String {
        let (r, g, b, _) = self.to_rgba8();
        format!("rgba({}, {}, {}, {})", r, g, b, self.a)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

fn rgb8(color: BandColor) -> (u8, u8, u8) {
    match color {
        BandColor::Black => (0, 0, 0),
        BandColor::Brown => (125, 75, 0),
        BandColor::Red => (255, 0, 0),
        BandColor::Orange => (255, 128, 0),
        BandColor::Yellow => (255, 255, 0),
        BandColor::Green => (0, 255, 0),
        BandColor::Blue => (0, 0, 255),
        BandColor::Violet => (128, 0, 128),
        BandColor::Grey => (192, 192, 192),
        BandColor::White => (255, 255, 255),
        BandColor::Gold => (255, 206, 43),
        BandColor::Silver => (128, 128, 128),
    }
}

/// Display color of `color` in the palette of `role`.
///
/// Palettes share the same shades and differ only in which colors they
/// offer, so a color outside the role's table is rejected.
pub fn try_display_rgba(role: BandRole, color: BandColor) -> Result<Rgba, DecodeError> {
    if !is_valid(role, color) {
        return Err(DecodeError::InvalidColorForRole { role, color });
    }
    let (r, g, b) = rgb8(color);
    Ok(Rgba::from_rgba8(r, g, b, 255))
}

/// Like [`try_display_rgba`], but an invalid color renders fully transparent.
pub fn color_to_display_rgba(role: BandRole, color: BandColor) -> Rgba {
    try_display_rgba(role, color).unwrap_or_else(|e| {
        warn!("{}; drawing band transparent", e);
        Rgba::TRANSPARENT
    })
}
