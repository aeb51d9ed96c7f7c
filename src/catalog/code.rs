//! NCS notation parsing and normalization
//!
//! Canonical notation is `"S BBCC-H"`: the `S` edition marker, two-digit
//! blackness, two-digit chromaticness, a separator and a hue token. The
//! parser is a small explicit tokenizer over that fixed grammar rather
//! than a regex; it accepts the exact character set the engine supports
//! (digits, `-` and the en-dash `–`, hue letters Y/R/B/G/N) and nothing
//! else. Off-grid values parse fine; grid validity is the generator's
//! concern, not the parser's.

use serde::{Deserialize, Serialize};

use crate::catalog::hue::Hue;
use crate::error::ParseError;
use crate::Result;

/// A parsed NCS notation: blackness, chromaticness and hue
///
/// This is a syntactic value. It may name a color that is not in the
/// generated catalog (off-grid percentages, implausible combinations);
/// snapping exists to bring such values back onto the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NcsCode {
    pub blackness: u8,
    pub chromaticness: u8,
    pub hue: Hue,
}

impl NcsCode {
    /// Create a code from raw parameters
    pub const fn new(blackness: u8, chromaticness: u8, hue: Hue) -> Self {
        Self {
            blackness,
            chromaticness,
            hue,
        }
    }

    /// Parse an NCS notation string
    ///
    /// Accepts an optional leading `S`, two digits of blackness, two
    /// digits of chromaticness, `-` or `–`, and a hue token. Whitespace
    /// around tokens and lowercase input are tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidCode`] or
    /// [`ParseError::InvalidHueToken`] when the input does not fit the
    /// grammar.
    pub fn parse(input: &str) -> Result<Self> {
        let compact: String = input
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        let body = compact.strip_prefix('S').unwrap_or(&compact);

        let mut chars = body.chars();
        let mut digits = [0u8; 4];
        for slot in &mut digits {
            let c = chars
                .next()
                .ok_or_else(|| ParseError::invalid_code(input, "truncated before hue token"))?;
            *slot = c
                .to_digit(10)
                .ok_or_else(|| ParseError::invalid_code(input, format!("expected digit, got {c:?}")))?
                as u8;
        }

        match chars.next() {
            Some('-') | Some('\u{2013}') => {}
            Some(c) => {
                return Err(ParseError::invalid_code(
                    input,
                    format!("expected separator, got {c:?}"),
                ))
            }
            None => return Err(ParseError::invalid_code(input, "missing separator and hue")),
        }

        let hue = Hue::parse(chars.as_str())?;

        Ok(Self {
            blackness: digits[0] * 10 + digits[1],
            chromaticness: digits[2] * 10 + digits[3],
            hue,
        })
    }
}

impl std::fmt::Display for NcsCode {
    /// Canonical `"S BBCC-H"` form
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "S {:02}{:02}-{}",
            self.blackness, self.chromaticness, self.hue
        )
    }
}

impl std::str::FromStr for NcsCode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Normalize a code string for exact-index lookup: uppercase, all
/// whitespace stripped, en-dash folded to `-`
pub fn normalize(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            if c == '\u{2013}' {
                '-'
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}
