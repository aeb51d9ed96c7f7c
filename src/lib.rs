//! # ncs_snap
//!
//! A color-science engine for NCS-style standardized colors:
//! - Converts between hex, RGB, XYZ and Lab (D65, sRGB gamma)
//! - Measures perceptual distance with CIE76 and CIEDE2000
//! - Synthesizes the full standard color catalog from parametric grids
//! - Matches arbitrary colors to the nearest catalog entry and snaps
//!   malformed or off-grid codes onto valid ones
//!
//! The engine is a pure in-process library: no I/O, no configuration, no
//! wire format. The only state is the standard catalog, generated once
//! per process and read-only thereafter. Image capture, persistence and
//! the vision model that produces raw color codes all live outside this
//! crate and talk to it through plain color values.
//!
//! ## Example
//!
//! ```rust
//! use ncs_snap::{Catalog, MatchConfidence};
//!
//! let catalog = Catalog::standard();
//!
//! // Rank catalog entries against an arbitrary color
//! let nearest = catalog.find_nearest("#D94A3C", 3);
//! assert_eq!(nearest.len(), 3);
//!
//! // Snap an off-grid AI-produced code onto a valid entry
//! let snapped = catalog.snap_to_standard("S 1051-Y91R").expect("parseable code");
//! assert!(snapped.delta_e > 0.0);
//! let _confidence: MatchConfidence = snapped.confidence();
//! ```

pub mod catalog;
pub mod color;
pub mod constants;
pub mod error;
pub mod matcher;

pub use catalog::{Catalog, CatalogEntry, Hue, NcsCode};
pub use color::{delta_e_2000, delta_e_76, rgb_to_hex, Lab, MatchConfidence, Rgb, Xyz};
pub use error::{ParseError, Result};
pub use matcher::{ColorMatch, Snapped};
