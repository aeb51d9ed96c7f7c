//! Standard catalog synthesis from the NCS parameter grids
//!
//! Builds every catalog entry from the fixed blackness/chromaticness grids
//! and the 40 hue tokens, via an inverse parametric model that
//! approximates NCS parameters as RGB. The model is this engine's
//! internally consistent approximation of the published catalog, not a
//! reproduction of it; matching guarantees depend on the exact formulas
//! below staying put.
//!
//! Generation runs once per process, has no external inputs and cannot
//! fail at runtime.

use std::collections::HashMap;
use std::time::Instant;

use tracing::debug;

use crate::catalog::code::{normalize, NcsCode};
use crate::catalog::entry::CatalogEntry;
use crate::catalog::hue::Hue;
use crate::catalog::Catalog;
use crate::color::Rgb;
use crate::constants::grid;

/// Build the full standard catalog and its exact-lookup index
///
/// The index is filled in the same pass that grows the entry vector, so
/// the two can never drift apart.
pub(crate) fn generate() -> Catalog {
    let start = Instant::now();
    let mut entries = Vec::new();
    let mut index = HashMap::new();

    let mut push = |entries: &mut Vec<CatalogEntry>, code: NcsCode| {
        let rgb = parametric_rgb(code.blackness, code.chromaticness, code.hue);
        let entry = CatalogEntry {
            code: code.to_string(),
            name: descriptive_name(code.blackness, code.chromaticness, code.hue),
            hex: rgb.to_hex(),
            rgb,
            lab: rgb.to_lab(),
            lrv: rgb.lrv(),
            blackness: code.blackness,
            chromaticness: code.chromaticness,
            hue: code.hue,
        };
        index.insert(normalize(&entry.code), entries.len());
        entries.push(entry);
    };

    // Achromatic axis: one entry per blackness step
    for &blackness in &grid::BLACKNESS {
        push(&mut entries, NcsCode::new(blackness, 0, Hue::Neutral));
    }

    // Chromatic entries: every plausible hue/blackness/chromaticness cell
    for hue in Hue::standard_tokens() {
        for &blackness in &grid::BLACKNESS {
            for &chromaticness in &grid::CHROMATICNESS {
                if chromaticness == 0 || !is_plausible(blackness, chromaticness) {
                    continue;
                }
                push(&mut entries, NcsCode::new(blackness, chromaticness, hue));
            }
        }
    }

    debug!(
        entries = entries.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "generated standard color catalog"
    );

    Catalog { entries, index }
}

/// Whether a blackness/chromaticness pair exists in the catalog
///
/// The triangle constraint is exact; the dark-end caps are empirical
/// bounds approximating which combinations the published catalog carries.
fn is_plausible(blackness: u8, chromaticness: u8) -> bool {
    if u16::from(blackness) + u16::from(chromaticness) > 100 {
        return false;
    }
    grid::DARK_CAPS
        .iter()
        .all(|&(min_b, max_c)| blackness < min_b || chromaticness <= max_c)
}

/// Inverse parametric model: NCS parameters to RGB
///
/// Neutrals and zero-chroma colors collapse to a pure gray scaled by
/// blackness. Chromatic colors go through an HSL intermediate: the NCS
/// hue angle is remapped onto the HSL wheel segment by segment (the two
/// circles traverse colors in different rotational order), lightness and
/// saturation are derived from the whiteness/blackness split, and the
/// standard HSL algorithm produces the final channels.
pub(crate) fn parametric_rgb(blackness: u8, chromaticness: u8, hue: Hue) -> Rgb {
    let angle = match hue.angle() {
        Some(angle) if chromaticness > 0 => angle,
        _ => {
            let gray = 255.0 * (1.0 - f64::from(blackness) / 100.0);
            return Rgb::from_f64_clamped(gray, gray, gray);
        }
    };

    let whiteness = 100.0 - f64::from(blackness) - f64::from(chromaticness);
    let lightness = ((whiteness + 50.0 - f64::from(blackness)) / 2.0).clamp(0.0, 100.0);
    let saturation = (f64::from(chromaticness) * 1.5).clamp(0.0, 100.0);

    hsl_to_rgb(ncs_angle_to_hsl_hue(angle), saturation, lightness)
}

/// Map an NCS hue angle onto the HSL wheel
///
/// One linear segment per NCS quadrant: Y..R covers HSL 60 down to 0,
/// R..B covers 360 down to 240, B..G covers 240 down to 120, G..Y covers
/// 120 down to 60.
fn ncs_angle_to_hsl_hue(angle: f64) -> f64 {
    let hue = if angle < 90.0 {
        60.0 - angle / 90.0 * 60.0
    } else if angle < 180.0 {
        360.0 - (angle - 90.0) / 90.0 * 120.0
    } else if angle < 270.0 {
        240.0 - (angle - 180.0) / 90.0 * 120.0
    } else {
        120.0 - (angle - 270.0) / 90.0 * 60.0
    };
    hue % 360.0
}

/// Standard HSL to RGB conversion; `h` in degrees, `s`/`l` as percentages
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = (h % 360.0) / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    if s == 0.0 {
        let gray = l * 255.0;
        return Rgb::from_f64_clamped(gray, gray, gray);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::from_f64_clamped(
        hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_channel(p, q, h) * 255.0,
        hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
    )
}

impl NcsCode {
    /// RGB approximation of this code via the inverse parametric model
    ///
    /// Works for any syntactically valid code, including off-grid values
    /// that have no catalog entry; snapping relies on that.
    pub fn approximate_rgb(self) -> Rgb {
        parametric_rgb(self.blackness, self.chromaticness, self.hue)
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Generate the descriptive label for an entry
///
/// Three independent word choices: a lightness band from blackness, a
/// saturation band from chromaticness and the hue family words. Neutrals
/// get White/Black/Grey. Purely cosmetic; names play no part in matching.
fn descriptive_name(blackness: u8, chromaticness: u8, hue: Hue) -> String {
    if hue == Hue::Neutral || chromaticness == 0 {
        return match blackness {
            0 => "White".to_string(),
            90.. => "Black".to_string(),
            1..=20 => "Light Grey".to_string(),
            70..=89 => "Dark Grey".to_string(),
            _ => "Grey".to_string(),
        };
    }

    let lightness = match blackness {
        0..=10 => "Light",
        11..=40 => "Medium",
        41..=70 => "Dark",
        _ => "Deep",
    };
    let saturation = match chromaticness {
        0..=10 => "Muted",
        11..=30 => "Soft",
        31..=60 => "Strong",
        _ => "Vivid",
    };

    format!("{lightness} {saturation} {}", hue.family_words())
}
