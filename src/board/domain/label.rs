//! Display colours for card labels.
//!
//! Colours are derived from the label text at render time and are never
//! persisted. The same text always maps to the same colour.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Palette of label colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelColor {
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Purple.
    Purple,
    /// Yellow.
    Yellow,
    /// Red.
    Red,
    /// Pink.
    Pink,
}

impl LabelColor {
    /// Every palette entry in order.
    pub const ALL: [Self; 6] = [
        Self::Blue,
        Self::Green,
        Self::Purple,
        Self::Yellow,
        Self::Red,
        Self::Pink,
    ];

    /// Picks the colour for a label from an FNV-1a hash of its text.
    #[must_use]
    pub fn for_label(text: &str) -> Self {
        let palette_len = Self::ALL.len() as u64;
        fnv1a(text)
            .checked_rem(palette_len)
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| Self::ALL.get(index).copied())
            .unwrap_or(Self::Blue)
    }

    /// Returns the colour name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Pink => "pink",
        }
    }
}

impl fmt::Display for LabelColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 64-bit FNV-1a.
fn fnv1a(text: &str) -> u64 {
    text.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
    })
}
