//! Nearest-entry matching and code snapping against the catalog
//!
//! Every query is a bounded linear scan over the generated catalog using
//! CIEDE2000. The catalog is small and fixed, so no spatial index is
//! used; a scan keeps the ranking exact and the code trivial. Malformed
//! input never fails loudly here: bad hex or an unparseable code yields
//! an empty result, which callers treat as a normal outcome.

use serde::Serialize;

use crate::catalog::{Catalog, CatalogEntry, NcsCode};
use crate::color::{delta_e_2000, MatchConfidence, Rgb};

/// A catalog entry paired with its CIEDE2000 distance to a query color
#[derive(Debug, Clone, Serialize)]
pub struct ColorMatch<'a> {
    pub entry: &'a CatalogEntry,
    pub delta_e: f64,
}

impl ColorMatch<'_> {
    /// Confidence band for this match distance
    pub fn confidence(&self) -> MatchConfidence {
        MatchConfidence::from_delta_e(self.delta_e)
    }
}

/// Result of snapping an external code onto the catalog
///
/// A `delta_e` of zero means the input was already a valid catalog code
/// and has only been enriched with the entry's full data; a positive
/// distance means the input was off-catalog and was corrected to the
/// nearest valid entry. Confidence must be recomputed from the distance
/// either way.
#[derive(Debug, Clone, Serialize)]
pub struct Snapped<'a> {
    /// The input string as supplied by the caller
    pub original: String,
    /// The catalog entry the input was snapped to
    pub entry: &'a CatalogEntry,
    /// CIEDE2000 distance from the input's synthesized color to `entry`
    pub delta_e: f64,
}

impl Snapped<'_> {
    /// Confidence band for this snap distance
    pub fn confidence(&self) -> MatchConfidence {
        MatchConfidence::from_delta_e(self.delta_e)
    }
}

impl Catalog {
    /// The `k` catalog entries nearest to a hex color, closest first
    ///
    /// Returns an empty vector when the hex string is malformed.
    pub fn find_nearest(&self, hex: &str, k: usize) -> Vec<ColorMatch<'_>> {
        let Ok(rgb) = Rgb::from_hex(hex) else {
            return Vec::new();
        };
        let mut matches = self.scan(rgb);
        matches.truncate(k);
        matches
    }

    /// All catalog entries within `max_delta_e` of a hex color, closest
    /// first
    ///
    /// Returns an empty vector for malformed hex or when no entry
    /// qualifies.
    pub fn find_similar(&self, hex: &str, max_delta_e: f64) -> Vec<ColorMatch<'_>> {
        let Ok(rgb) = Rgb::from_hex(hex) else {
            return Vec::new();
        };
        let mut matches = self.scan(rgb);
        matches.retain(|m| m.delta_e <= max_delta_e);
        matches
    }

    /// Snap an external (possibly malformed, possibly off-grid) NCS code
    /// onto the catalog
    ///
    /// Exact codes return their entry with distance zero. Parseable but
    /// off-grid codes are synthesized through the inverse parametric
    /// model and matched to the single nearest entry. Unparseable input
    /// returns `None`.
    pub fn snap_to_standard(&self, code: &str) -> Option<Snapped<'_>> {
        if let Some(entry) = self.get_by_code(code) {
            return Some(Snapped {
                original: code.to_string(),
                entry,
                delta_e: 0.0,
            });
        }

        let parsed = NcsCode::parse(code).ok()?;
        let lab = parsed.approximate_rgb().to_lab();
        let nearest = self
            .entries
            .iter()
            .map(|entry| (entry, delta_e_2000(&lab, &entry.lab)))
            .min_by(|a, b| a.1.total_cmp(&b.1))?;

        Some(Snapped {
            original: code.to_string(),
            entry: nearest.0,
            delta_e: nearest.1,
        })
    }

    /// Distance to every entry, sorted ascending
    fn scan(&self, rgb: Rgb) -> Vec<ColorMatch<'_>> {
        let lab = rgb.to_lab();
        let mut matches: Vec<ColorMatch<'_>> = self
            .entries
            .iter()
            .map(|entry| ColorMatch {
                entry,
                delta_e: delta_e_2000(&lab, &entry.lab),
            })
            .collect();
        matches.sort_by(|a, b| a.delta_e.total_cmp(&b.delta_e));
        matches
    }
}
