//! Category Colors
//!
//! Deterministic string → HSL mapping for category badges.

use std::fmt;

/// An HSL color with percentages stored as whole numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub hue: u32,
    pub saturation: u32,
    pub lightness: u32,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// Base-31 rolling hash over UTF-16 code units.
///
/// The shift operand is truncated to 32 bits on every step while the
/// accumulator itself is not, which is what a browser computes for
/// `hash = code + ((hash << 5) - hash)`.
fn category_hash(category_id: &str) -> i64 {
    category_id.encode_utf16().fold(0i64, |hash, code| {
        let shifted = (hash as i32).wrapping_shl(5) as i64;
        code as i64 + shifted - hash
    })
}

/// Color for a category id
pub fn color_for(category_id: &str) -> Hsl {
    let hash = category_hash(category_id);
    let hue = (hash % 360).unsigned_abs() as u32;
    let saturation = 45 + (hash.unsigned_abs() % 20) as u32;
    let lightness = 55 + ((hash as i32 >> 8) as i64).unsigned_abs() as u32 % 15;
    Hsl { hue, saturation, lightness }
}
