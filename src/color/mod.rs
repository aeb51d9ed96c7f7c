//! Color conversion and perceptual distance
//!
//! The two stateless leaves of the engine: color space conversions
//! (hex, RGB, XYZ, Lab) and the Delta E metrics built on top of them.

pub mod conversion;
pub mod distance;

pub use conversion::{rgb_to_hex, Lab, Rgb, Xyz};
pub use distance::{delta_e_2000, delta_e_76, MatchConfidence};
