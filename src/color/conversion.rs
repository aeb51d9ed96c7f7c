//! Color space conversion primitives
//!
//! Provides the conversions the rest of the engine is built on:
//! - Hex string to RGB and back
//! - RGB to XYZ (sRGB inverse companding, D65)
//! - XYZ to Lab (CIE piecewise f(t))
//! - Light Reflectance Value from the XYZ luminance channel
//!
//! All conversions are pure and run in constant time. RGB to Lab always
//! goes through XYZ so the intermediate stays available for LRV.

use serde::{Deserialize, Serialize};

use crate::constants::{cie, d65, srgb};
use crate::error::ParseError;
use crate::Result;

/// An 8-bit-per-channel sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// CIE XYZ tristimulus values scaled to the 0-100 range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// CIE L*a*b* coordinates under the D65 reference white
///
/// `l` is in [0, 100]; `a` and `b` are unbounded in principle but land
/// roughly in [-128, 127] for colors inside the sRGB gamut.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Rgb {
    /// Create an RGB color from its three channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from floating-point channels, clamping each
    /// into [0, 255] and rounding
    pub fn from_f64_clamped(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.round().clamp(0.0, 255.0) as u8,
            g: g.round().clamp(0.0, 255.0) as u8,
            b: b.round().clamp(0.0, 255.0) as u8,
        }
    }

    /// Parse a hex color string into RGB
    ///
    /// Accepts exactly six hex digits with an optional leading `#`,
    /// case-insensitive. Anything else is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidHex`] if the string has the wrong
    /// length or contains non-hex characters.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseError::invalid_hex(hex, "expected 6 hex digits"));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| ParseError::invalid_hex(hex, e.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Format as an uppercase, `#`-prefixed hex string (e.g. `"#FF8000"`)
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Convert to XYZ tristimulus values (D65)
    ///
    /// Channels are normalized to [0, 1], linearized with the sRGB inverse
    /// companding curve, multiplied by the D65 sRGB matrix and scaled to
    /// the 0-100 range.
    pub fn to_xyz(self) -> Xyz {
        let r = linearize(f64::from(self.r) / 255.0) * 100.0;
        let g = linearize(f64::from(self.g) / 255.0) * 100.0;
        let b = linearize(f64::from(self.b) / 255.0) * 100.0;

        let m = srgb::XYZ_MATRIX;
        Xyz {
            x: r * m[0][0] + g * m[0][1] + b * m[0][2],
            y: r * m[1][0] + g * m[1][1] + b * m[1][2],
            z: r * m[2][0] + g * m[2][1] + b * m[2][2],
        }
    }

    /// Convert to Lab by composing [`Rgb::to_xyz`] and [`Xyz::to_lab`]
    pub fn to_lab(self) -> Lab {
        self.to_xyz().to_lab()
    }

    /// Light Reflectance Value: the rounded XYZ luminance channel
    ///
    /// 0 is an ideal black surface, 100 an ideal white one.
    pub fn lrv(self) -> u8 {
        self.to_xyz().y.round().clamp(0.0, 100.0) as u8
    }
}

impl Xyz {
    /// Convert to Lab under the D65 reference white
    pub fn to_lab(self) -> Lab {
        let fx = pivot(self.x / d65::REF_X);
        let fy = pivot(self.y / d65::REF_Y);
        let fz = pivot(self.z / d65::REF_Z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl Lab {
    /// Create a Lab color from its three coordinates
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

/// sRGB inverse companding: linear below the breakpoint, gamma 2.4 above
fn linearize(channel: f64) -> f64 {
    if channel > srgb::LINEAR_THRESHOLD {
        ((channel + 0.055) / 1.055).powf(srgb::GAMMA)
    } else {
        channel / 12.92
    }
}

/// CIE f(t): cube root above epsilon, linear with slope kappa below
fn pivot(t: f64) -> f64 {
    if t > cie::EPSILON {
        t.cbrt()
    } else {
        (cie::KAPPA * t + 16.0) / 116.0
    }
}

/// Format raw integer channels as a hex string, clamping into [0, 255]
///
/// Convenience for callers holding unvalidated arithmetic results; the
/// typed [`Rgb::to_hex`] is preferred when an [`Rgb`] already exists.
pub fn rgb_to_hex(r: i32, g: i32, b: i32) -> String {
    Rgb::new(
        r.clamp(0, 255) as u8,
        g.clamp(0, 255) as u8,
        b.clamp(0, 255) as u8,
    )
    .to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_with_and_without_prefix() {
        assert_eq!(Rgb::from_hex("#FF0000").unwrap(), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from_hex("00ff00").unwrap(), Rgb::new(0, 255, 0));
        assert_eq!(Rgb::from_hex("  #0000FF ").unwrap(), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_from_hex_rejects_malformed_input() {
        assert!(Rgb::from_hex("not-a-color").is_err());
        assert!(Rgb::from_hex("#FFF").is_err());
        assert!(Rgb::from_hex("#GGGGGG").is_err());
        assert!(Rgb::from_hex("").is_err());
        assert!(Rgb::from_hex("#FF00001").is_err());
    }

    #[test]
    fn test_to_hex_is_uppercase_and_padded() {
        assert_eq!(Rgb::new(255, 128, 0).to_hex(), "#FF8000");
        assert_eq!(Rgb::new(0, 0, 10).to_hex(), "#00000A");
    }

    #[test]
    fn test_hex_round_trip() {
        for hex in ["#000000", "#FFFFFF", "#1A2B3C", "#ABCDEF"] {
            assert_eq!(Rgb::from_hex(hex).unwrap().to_hex(), hex);
        }
        // Lowercase input round-trips to the uppercase canonical form
        assert_eq!(Rgb::from_hex("#abcdef").unwrap().to_hex(), "#ABCDEF");
    }

    #[test]
    fn test_rgb_to_hex_clamps() {
        assert_eq!(rgb_to_hex(-5, 300, 128), "#00FF80");
    }

    #[test]
    fn test_white_xyz_matches_d65() {
        let xyz = Rgb::new(255, 255, 255).to_xyz();
        assert!((xyz.x - 95.047).abs() < 0.01);
        assert!((xyz.y - 100.0).abs() < 0.01);
        assert!((xyz.z - 108.883).abs() < 0.01);
    }

    #[test]
    fn test_white_and_black_lab() {
        let white = Rgb::new(255, 255, 255).to_lab();
        assert!((white.l - 100.0).abs() < 0.01);
        assert!(white.a.abs() < 0.01);
        assert!(white.b.abs() < 0.01);

        let black = Rgb::new(0, 0, 0).to_lab();
        assert!(black.l.abs() < 0.01);
    }

    #[test]
    fn test_mid_gray_lab_is_neutral() {
        let lab = Rgb::new(128, 128, 128).to_lab();
        assert!(lab.a.abs() < 0.01);
        assert!(lab.b.abs() < 0.01);
        assert!(lab.l > 50.0 && lab.l < 56.0);
    }

    #[test]
    fn test_primary_red_lab() {
        // Reference values for sRGB red under D65 (2 degree observer)
        let lab = Rgb::new(255, 0, 0).to_lab();
        assert!((lab.l - 53.24).abs() < 0.1);
        assert!((lab.a - 80.09).abs() < 0.1);
        assert!((lab.b - 67.20).abs() < 0.1);
    }

    #[test]
    fn test_lrv_extremes() {
        assert_eq!(Rgb::new(255, 255, 255).lrv(), 100);
        assert_eq!(Rgb::new(0, 0, 0).lrv(), 0);
    }

    #[test]
    fn test_lrv_mid_gray() {
        // 50% gray reflects roughly 21% of incident light
        let lrv = Rgb::new(128, 128, 128).lrv();
        assert!((20..=23).contains(&lrv), "unexpected LRV {lrv}");
    }
}
