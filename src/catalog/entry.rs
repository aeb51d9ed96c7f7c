//! Catalog entry: one standardized color with all derived representations

use serde::{Deserialize, Serialize};

use crate::catalog::hue::Hue;
use crate::color::{Lab, Rgb};

/// One standardized color in the generated catalog
///
/// All derived representations (`hex`, `rgb`, `lab`, `lrv`) are computed
/// once at generation time and never recomputed; entries are immutable
/// for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Canonical notation, e.g. `"S 1050-Y90R"`
    pub code: String,
    /// Generated descriptive label, e.g. `"Light Strong Yellowish Red"`
    pub name: String,
    /// Uppercase `#`-prefixed hex form
    pub hex: String,
    pub rgb: Rgb,
    pub lab: Lab,
    /// Light Reflectance Value, 0-100
    pub lrv: u8,
    /// Blackness percentage; with `chromaticness` sums to at most 100
    pub blackness: u8,
    pub chromaticness: u8,
    /// Hue token (`N` for the achromatic axis)
    pub hue: Hue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_json_round_trip() {
        let entry = CatalogEntry {
            code: "S 1050-Y90R".to_string(),
            name: "Light Strong Yellowish Red".to_string(),
            hex: "#D94A3C".to_string(),
            rgb: Rgb::new(217, 74, 60),
            lab: Lab::new(52.0, 55.0, 40.0),
            lrv: 20,
            blackness: 10,
            chromaticness: 50,
            hue: Hue::parse("Y90R").unwrap(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"code\":\"S 1050-Y90R\""));
        assert!(json.contains("\"hue\":\"Y90R\""));

        let back: CatalogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
