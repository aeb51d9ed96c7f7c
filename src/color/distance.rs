//! Perceptual color difference metrics
//!
//! Implements the two Delta E formulas the engine relies on:
//! - CIE76: plain Euclidean distance in Lab space
//! - CIEDE2000: the full 2000 revision with chroma compensation and the
//!   blue-region rotation term
//!
//! Catalog matching uses CIEDE2000 exclusively; CIE76 is kept for callers
//! that want the cheap metric. The CIEDE2000 implementation follows the
//! published formula with kL = kC = kH = 1 and must not be approximated:
//! small deviations change match rankings across the whole catalog.

use serde::{Deserialize, Serialize};

use crate::color::conversion::Lab;
use crate::constants::thresholds;

const POW7_25: f64 = 6_103_515_625.0; // 25^7

/// CIE76 color difference: Euclidean distance in Lab space
pub fn delta_e_76(lab1: &Lab, lab2: &Lab) -> f64 {
    let dl = lab1.l - lab2.l;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// CIEDE2000 color difference
///
/// Symmetric, zero for identical coordinates, and corrected for the known
/// non-uniformity of Lab near neutrals and in the blue region.
pub fn delta_e_2000(lab1: &Lab, lab2: &Lab) -> f64 {
    let c1 = (lab1.a * lab1.a + lab1.b * lab1.b).sqrt();
    let c2 = (lab2.a * lab2.a + lab2.b * lab2.b).sqrt();

    // G rescales the a axis based on mean chroma, compensating Lab's
    // exaggerated differences near neutral colors
    let c_mean = (c1 + c2) / 2.0;
    let c_mean7 = c_mean.powi(7);
    let g = 0.5 * (1.0 - (c_mean7 / (c_mean7 + POW7_25)).sqrt());

    let a1p = lab1.a * (1.0 + g);
    let a2p = lab2.a * (1.0 + g);
    let c1p = (a1p * a1p + lab1.b * lab1.b).sqrt();
    let c2p = (a2p * a2p + lab2.b * lab2.b).sqrt();
    let h1p = hue_angle(lab1.b, a1p);
    let h2p = hue_angle(lab2.b, a2p);

    let dl = lab2.l - lab1.l;
    let dc = c2p - c1p;

    // Hue difference takes the short way around the circle
    let dh = if c1p * c2p == 0.0 {
        0.0
    } else {
        let mut d = h2p - h1p;
        if d > 180.0 {
            d -= 360.0;
        } else if d < -180.0 {
            d += 360.0;
        }
        d
    };
    let dh_term = 2.0 * (c1p * c2p).sqrt() * (dh / 2.0).to_radians().sin();

    let l_mean = (lab1.l + lab2.l) / 2.0;
    let cp_mean = (c1p + c2p) / 2.0;

    // Mean hue is wraparound-aware; with one chroma at zero the lone hue
    // angle carries the full weight
    let h_mean = if c1p * c2p == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_mean).to_radians().cos()
        + 0.32 * (3.0 * h_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_mean - 63.0).to_radians().cos();

    let l_mean_sq = (l_mean - 50.0) * (l_mean - 50.0);
    let sl = 1.0 + 0.015 * l_mean_sq / (20.0 + l_mean_sq).sqrt();
    let sc = 1.0 + 0.045 * cp_mean;
    let sh = 1.0 + 0.015 * cp_mean * t;

    // Rotation term correcting the blue-region hue distortion
    let d_theta = 30.0 * (-((h_mean - 275.0) / 25.0).powi(2)).exp();
    let cp_mean7 = cp_mean.powi(7);
    let rc = 2.0 * (cp_mean7 / (cp_mean7 + POW7_25)).sqrt();
    let rt = -(2.0 * d_theta).to_radians().sin() * rc;

    let dl_w = dl / sl;
    let dc_w = dc / sc;
    let dh_w = dh_term / sh;

    (dl_w * dl_w + dc_w * dc_w + dh_w * dh_w + rt * dc_w * dh_w).sqrt()
}

/// Hue angle of (a', b) in degrees, normalized to [0, 360)
fn hue_angle(b: f64, ap: f64) -> f64 {
    if b == 0.0 && ap == 0.0 {
        return 0.0;
    }
    let deg = b.atan2(ap).to_degrees();
    if deg < 0.0 {
        deg + 360.0
    } else {
        deg
    }
}

/// How closely a matched catalog entry reproduces the query color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchConfidence {
    /// Delta E <= 2.0: indistinguishable in normal viewing
    High,
    /// Delta E <= 5.0: visibly close, same color family
    Medium,
    /// Anything larger: the snap changed the color noticeably
    Low,
}

impl MatchConfidence {
    /// Classify a CIEDE2000 distance into a confidence band
    pub fn from_delta_e(delta_e: f64) -> Self {
        if delta_e <= thresholds::HIGH_CONFIDENCE_DELTA_E {
            Self::High
        } else if delta_e <= thresholds::MEDIUM_CONFIDENCE_DELTA_E {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_e_76_identity_and_symmetry() {
        let a = Lab::new(50.0, 10.0, -20.0);
        let b = Lab::new(60.0, -5.0, 15.0);
        assert_eq!(delta_e_76(&a, &a), 0.0);
        assert_eq!(delta_e_76(&a, &b), delta_e_76(&b, &a));
    }

    #[test]
    fn test_delta_e_2000_identity() {
        let samples = [
            Lab::new(50.0, 2.6772, -79.7751),
            Lab::new(0.0, 0.0, 0.0),
            Lab::new(100.0, 0.0, 0.0),
            Lab::new(33.3, -40.0, 60.0),
        ];
        for lab in samples {
            assert!(delta_e_2000(&lab, &lab).abs() < 1e-12);
        }
    }

    #[test]
    fn test_delta_e_2000_symmetry() {
        let pairs = [
            (Lab::new(50.0, 2.6772, -79.7751), Lab::new(50.0, 0.0, -82.7485)),
            (Lab::new(22.7233, 20.0904, -46.694), Lab::new(23.0331, 14.973, -42.5619)),
            (Lab::new(90.8027, -2.0831, 1.441), Lab::new(91.1528, -1.6435, 0.0447)),
        ];
        for (a, b) in pairs {
            let fwd = delta_e_2000(&a, &b);
            let rev = delta_e_2000(&b, &a);
            assert!((fwd - rev).abs() < 1e-12, "asymmetric: {fwd} vs {rev}");
        }
    }

    #[test]
    fn test_delta_e_2000_sharma_reference_pairs() {
        // Published test pairs from Sharma, Wu & Dalal (2005), table 1
        let cases = [
            (Lab::new(50.0, 2.6772, -79.7751), Lab::new(50.0, 0.0, -82.7485), 2.0425),
            (Lab::new(50.0, 3.1571, -77.2803), Lab::new(50.0, 0.0, -82.7485), 2.8615),
            (Lab::new(50.0, 2.8361, -74.02), Lab::new(50.0, 0.0, -82.7485), 3.4412),
            (Lab::new(50.0, -1.3802, -84.2814), Lab::new(50.0, 0.0, -82.7485), 1.0),
            (Lab::new(50.0, 2.49, -0.001), Lab::new(50.0, -2.49, 0.0009), 7.1792),
            (Lab::new(50.0, -0.001, 2.49), Lab::new(50.0, 0.0009, -2.49), 4.8045),
            (Lab::new(50.0, 2.5, 0.0), Lab::new(50.0, 0.0, -2.5), 4.3065),
            (Lab::new(60.2574, -34.0099, 36.2677), Lab::new(60.4626, -34.1751, 39.4387), 1.2644),
            (Lab::new(63.0109, -31.0961, -5.8663), Lab::new(62.8187, -29.7946, -4.0864), 1.263),
            (Lab::new(35.0831, -44.1164, 3.7933), Lab::new(35.0232, -40.0716, 1.5901), 1.8731),
            (Lab::new(22.7233, 20.0904, -46.694), Lab::new(23.0331, 14.973, -42.5619), 2.0373),
            (Lab::new(36.4612, 47.858, 18.3852), Lab::new(36.2715, 50.5065, 21.2231), 1.4146),
            (Lab::new(90.8027, -2.0831, 1.441), Lab::new(91.1528, -1.6435, 0.0447), 1.4441),
            (Lab::new(90.9257, -0.5406, -0.9208), Lab::new(88.6381, -0.8985, -0.7239), 1.5381),
            (Lab::new(6.7747, -0.2908, -2.4247), Lab::new(5.8714, -0.0985, -2.2286), 0.6377),
            (Lab::new(2.0776, 0.0795, -1.135), Lab::new(0.9033, -0.0636, -0.5514), 0.9082),
        ];
        for (lab1, lab2, expected) in cases {
            let got = delta_e_2000(&lab1, &lab2);
            assert!(
                (got - expected).abs() < 1e-4,
                "expected {expected}, got {got} for {lab1:?} vs {lab2:?}"
            );
        }
    }

    #[test]
    fn test_delta_e_2000_zero_chroma_input() {
        // One neutral input exercises the zero-chroma hue averaging path
        let neutral = Lab::new(50.0, 0.0, 0.0);
        let blue = Lab::new(50.0, 10.0, -40.0);
        let d = delta_e_2000(&neutral, &blue);
        assert!(d.is_finite() && d > 0.0);
    }

    #[test]
    fn test_confidence_band_boundaries() {
        assert_eq!(MatchConfidence::from_delta_e(0.0), MatchConfidence::High);
        assert_eq!(MatchConfidence::from_delta_e(2.0), MatchConfidence::High);
        assert_eq!(MatchConfidence::from_delta_e(2.01), MatchConfidence::Medium);
        assert_eq!(MatchConfidence::from_delta_e(5.0), MatchConfidence::Medium);
        assert_eq!(MatchConfidence::from_delta_e(5.01), MatchConfidence::Low);
    }
}
