//! The generated standard color catalog
//!
//! An ordered, append-only sequence of [`CatalogEntry`] values plus an
//! exact-lookup index over normalized codes, synthesized once per process
//! from the parameter grids in [`crate::constants::grid`]. Immutable after
//! generation; all access is read-only and safe for unbounded concurrent
//! callers.

pub mod code;
pub mod entry;
mod generator;
pub mod hue;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use code::NcsCode;
pub use entry::CatalogEntry;
pub use hue::{Anchor, Hue};

use crate::catalog::code::normalize;

static STANDARD: OnceLock<Catalog> = OnceLock::new();

/// The full generated color catalog with its exact-lookup index
///
/// The entry vector and the index are built in the same pass and never
/// rebuilt independently of each other.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) entries: Vec<CatalogEntry>,
    pub(crate) index: HashMap<String, usize>,
}

impl Catalog {
    /// The process-wide standard catalog
    ///
    /// Generated lazily on first use and memoized for the process
    /// lifetime; concurrent first callers block on a single generation
    /// and all observe the same fully-built value.
    pub fn standard() -> &'static Catalog {
        STANDARD.get_or_init(generator::generate)
    }

    /// Number of entries in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in generation order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Iterate entries in generation order
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    /// Exact lookup by code, O(1)
    ///
    /// The query is normalized (uppercased, whitespace stripped) before
    /// the index probe, so `" s 1050-y90r "` finds `"S 1050-Y90R"`.
    pub fn get_by_code(&self, code: &str) -> Option<&CatalogEntry> {
        self.index.get(&normalize(code)).map(|&i| &self.entries[i])
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_is_memoized() {
        let first = Catalog::standard() as *const Catalog;
        let second = Catalog::standard() as *const Catalog;
        assert_eq!(first, second);
        assert!(!Catalog::standard().is_empty());
    }

    #[test]
    fn test_get_by_code_normalizes() {
        let catalog = Catalog::standard();
        let entry = catalog.get_by_code("S 1050-Y90R").expect("grid entry");
        assert_eq!(entry.code, "S 1050-Y90R");
        assert_eq!(entry.blackness, 10);
        assert_eq!(entry.chromaticness, 50);

        for variant in ["s 1050-y90r", "S1050-Y90R", " S 10 50-Y90R "] {
            assert_eq!(
                catalog.get_by_code(variant).map(|e| &e.code),
                Some(&entry.code),
                "lookup failed for {variant:?}"
            );
        }
    }

    #[test]
    fn test_get_by_code_misses() {
        let catalog = Catalog::standard();
        assert!(catalog.get_by_code("S 1051-Y91R").is_none());
        assert!(catalog.get_by_code("garbage").is_none());
        assert!(catalog.get_by_code("").is_none());
    }
}
