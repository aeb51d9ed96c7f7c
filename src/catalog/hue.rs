//! NCS hue circle: anchor letters, compound tokens and angles
//!
//! The NCS hue circle places Yellow at 0°, Red at 90°, Blue at 180° and
//! Green at 270°. A compound token such as `Y20R` sits 20% of the way
//! through the 90° quadrant from Y toward R. Forty fixed compound tokens
//! (steps of 10%) span the circle; the separate neutral token `N` marks
//! the achromatic axis.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::Result;

/// One of the four NCS elementary chromatic colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Yellow,
    Red,
    Blue,
    Green,
}

impl Anchor {
    /// All four anchors in circle order
    pub const ALL: [Anchor; 4] = [Anchor::Yellow, Anchor::Red, Anchor::Blue, Anchor::Green];

    /// Angle of this anchor on the NCS hue circle
    pub fn base_angle(self) -> f64 {
        match self {
            Anchor::Yellow => 0.0,
            Anchor::Red => 90.0,
            Anchor::Blue => 180.0,
            Anchor::Green => 270.0,
        }
    }

    /// The next anchor going around the circle (Y -> R -> B -> G -> Y)
    pub fn next(self) -> Anchor {
        match self {
            Anchor::Yellow => Anchor::Red,
            Anchor::Red => Anchor::Blue,
            Anchor::Blue => Anchor::Green,
            Anchor::Green => Anchor::Yellow,
        }
    }

    /// Single-letter notation
    pub fn letter(self) -> char {
        match self {
            Anchor::Yellow => 'Y',
            Anchor::Red => 'R',
            Anchor::Blue => 'B',
            Anchor::Green => 'G',
        }
    }

    fn from_letter(letter: char) -> Option<Anchor> {
        match letter {
            'Y' => Some(Anchor::Yellow),
            'R' => Some(Anchor::Red),
            'B' => Some(Anchor::Blue),
            'G' => Some(Anchor::Green),
            _ => None,
        }
    }

    /// Color family noun, for descriptive names
    pub fn family(self) -> &'static str {
        match self {
            Anchor::Yellow => "Yellow",
            Anchor::Red => "Red",
            Anchor::Blue => "Blue",
            Anchor::Green => "Green",
        }
    }

    /// Color family adjective, for descriptive names
    pub fn qualifier(self) -> &'static str {
        match self {
            Anchor::Yellow => "Yellowish",
            Anchor::Red => "Reddish",
            Anchor::Blue => "Bluish",
            Anchor::Green => "Greenish",
        }
    }
}

/// A hue position: neutral, or a percentage through one quadrant
///
/// `percent` 0 is the pure anchor (token `Y`); any value up to 99 is
/// accepted so that off-grid tokens from external sources (e.g. `Y91R`)
/// can still be placed on the circle and snapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Hue {
    Neutral,
    Chromatic { from: Anchor, percent: u8 },
}

impl Hue {
    /// The 40 standard compound tokens, in circle order starting at `Y`
    pub fn standard_tokens() -> impl Iterator<Item = Hue> {
        Anchor::ALL.into_iter().flat_map(|from| {
            (0u8..10).map(move |step| Hue::Chromatic {
                from,
                percent: step * 10,
            })
        })
    }

    /// Angle on the NCS hue circle in [0, 360), or `None` for neutral
    pub fn angle(self) -> Option<f64> {
        match self {
            Hue::Neutral => None,
            Hue::Chromatic { from, percent } => {
                Some(from.base_angle() + f64::from(percent) / 100.0 * 90.0)
            }
        }
    }

    /// Parse a hue token (`N`, `Y`, `Y20R`, ...)
    ///
    /// The second letter of a compound token must be the next anchor on
    /// the circle; `Y20B` is rejected because the quadrant it names does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidHueToken`] for any other shape.
    pub fn parse(token: &str) -> Result<Hue> {
        let invalid = || ParseError::InvalidHueToken {
            token: token.to_string(),
        };

        let mut chars = token.chars();
        let first = chars.next().ok_or_else(invalid)?;
        if first == 'N' {
            return if chars.next().is_none() {
                Ok(Hue::Neutral)
            } else {
                Err(invalid())
            };
        }

        let from = Anchor::from_letter(first).ok_or_else(invalid)?;
        let rest: String = chars.collect();
        if rest.is_empty() {
            return Ok(Hue::Chromatic { from, percent: 0 });
        }
        if !rest.is_ascii() {
            return Err(invalid());
        }

        // Compound form: 1-2 digits, then exactly the next anchor letter
        let (digits, tail) = rest.split_at(rest.len().saturating_sub(1));
        if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if tail.chars().next() != Some(from.next().letter()) {
            return Err(invalid());
        }
        let percent: u8 = digits.parse().map_err(|_| invalid())?;
        if percent == 0 {
            return Ok(Hue::Chromatic { from, percent: 0 });
        }
        Ok(Hue::Chromatic { from, percent })
    }

    /// Canonical token string
    pub fn token(self) -> String {
        match self {
            Hue::Neutral => "N".to_string(),
            Hue::Chromatic { from, percent: 0 } => from.letter().to_string(),
            Hue::Chromatic { from, percent } => {
                format!("{}{:02}{}", from.letter(), percent, from.next().letter())
            }
        }
    }

    /// Hue family words for descriptive names, picked by the dominant
    /// component of the blend
    pub fn family_words(self) -> String {
        match self {
            Hue::Neutral => "Neutral".to_string(),
            Hue::Chromatic { from, percent: 0 } => from.family().to_string(),
            Hue::Chromatic { from, percent } if percent < 50 => {
                format!("{} {}", from.next().qualifier(), from.family())
            }
            Hue::Chromatic { from, .. } => {
                format!("{} {}", from.qualifier(), from.next().family())
            }
        }
    }
}

impl std::fmt::Display for Hue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.token())
    }
}

impl From<Hue> for String {
    fn from(hue: Hue) -> String {
        hue.token()
    }
}

impl TryFrom<String> for Hue {
    type Error = ParseError;

    fn try_from(token: String) -> Result<Hue> {
        Hue::parse(&token)
    }
}
