//! Reference values and fixed parameter grids for the color engine
//!
//! This module contains compile-time constants for color conversion and
//! catalog synthesis: the D65 reference, the sRGB conversion matrix, CIE
//! function constants, match-confidence thresholds, and the NCS parameter
//! grids the catalog is generated from.

/// D65 Standard Illuminant Reference
///
/// CIE Standard Illuminant D65 represents average daylight with a correlated
/// color temperature of 6504K. All LAB coordinates in this crate are relative
/// to this white point; no other illuminant is modeled.
pub mod d65 {
    /// D65 reference white in XYZ, scaled to the 0-100 range
    /// Source: CIE 15:2004 Colorimetry, 3rd edition
    pub const REF_X: f64 = 95.047;
    pub const REF_Y: f64 = 100.0;
    pub const REF_Z: f64 = 108.883;
}

/// sRGB color space constants (IEC 61966-2-1)
pub mod srgb {
    /// Inverse companding breakpoint: channels at or below this are linear
    pub const LINEAR_THRESHOLD: f64 = 0.04045;

    /// Gamma exponent for the non-linear segment
    pub const GAMMA: f64 = 2.4;

    /// Row-major sRGB -> XYZ matrix for the D65 white point
    pub const XYZ_MATRIX: [[f64; 3]; 3] = [
        [0.4124564, 0.3575761, 0.1804375],
        [0.2126729, 0.7151522, 0.0721750],
        [0.0193339, 0.1191920, 0.9503041],
    ];
}

/// CIE L*a*b* function constants
pub mod cie {
    /// Threshold of the piecewise f(t) function (216/24389)
    pub const EPSILON: f64 = 0.008856;

    /// Linear-segment slope of f(t) (24389/27)
    pub const KAPPA: f64 = 903.3;
}

/// Match-confidence thresholds in CIEDE2000 units
///
/// Design decision, not derived: these approximate human just-noticeable
/// difference bands for surface colors viewed side by side.
pub mod thresholds {
    /// Delta E at or below which a match is considered exact to the eye
    pub const HIGH_CONFIDENCE_DELTA_E: f64 = 2.0;

    /// Delta E at or below which a match is close but distinguishable
    pub const MEDIUM_CONFIDENCE_DELTA_E: f64 = 5.0;
}

/// NCS parameter grids the standard catalog is synthesized from
///
/// The grids approximate which blackness/chromaticness combinations exist
/// in the published NCS 1950 catalog; the generated catalog is an
/// internally consistent approximation, not a licensed color database.
pub mod grid {
    /// Permitted blackness percentages
    pub const BLACKNESS: [u8; 13] = [0, 5, 10, 15, 20, 30, 40, 50, 60, 70, 80, 85, 90];

    /// Permitted chromaticness percentages (0 is reserved for neutrals)
    pub const CHROMATICNESS: [u8; 14] = [0, 2, 5, 10, 15, 20, 30, 40, 50, 60, 70, 80, 85, 90];

    /// Plausibility caps near the high-blackness end: (min blackness,
    /// max chromaticness) pairs, checked from darkest down
    pub const DARK_CAPS: [(u8, u8); 3] = [(85, 15), (80, 20), (70, 30)];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d65_reference_white() {
        // Values must match CIE 15:2004 exactly; conversions depend on them
        assert!((d65::REF_X - 95.047).abs() < 1e-9);
        assert!((d65::REF_Y - 100.0).abs() < 1e-9);
        assert!((d65::REF_Z - 108.883).abs() < 1e-9);
    }

    #[test]
    fn test_srgb_matrix_rows_sum_to_white() {
        // Each matrix row applied to (1,1,1) must reproduce the D65 white
        let white = [d65::REF_X, d65::REF_Y, d65::REF_Z];
        for (row, expected) in srgb::XYZ_MATRIX.iter().zip(white) {
            let sum: f64 = row.iter().sum::<f64>() * 100.0;
            assert!((sum - expected).abs() < 0.01);
        }
    }

    #[test]
    fn test_grids_are_sorted_and_in_range() {
        assert!(grid::BLACKNESS.windows(2).all(|w| w[0] < w[1]));
        assert!(grid::CHROMATICNESS.windows(2).all(|w| w[0] < w[1]));
        assert!(grid::BLACKNESS.iter().all(|&b| b <= 100));
        assert!(grid::CHROMATICNESS.iter().all(|&c| c <= 100));
    }

    #[test]
    fn test_confidence_thresholds_ordered() {
        assert!(thresholds::HIGH_CONFIDENCE_DELTA_E < thresholds::MEDIUM_CONFIDENCE_DELTA_E);
    }
}
