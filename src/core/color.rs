//! Facelet colors.
//!
//! Six symbolic values, one per face of a solved cube. Pure data - the
//! engine never interprets colors, it only permutes them.

use serde::{Deserialize, Serialize};

/// One of the six sticker colors.
///
/// The single-letter spellings (W/Y/G/B/R/O) are what the text renderer
/// prints and match the usual color scheme: white up, yellow down, green
/// left, blue right, red front, orange back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Red,
    Orange,
}

impl Color {
    /// All six colors, in declaration order.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Red,
        Color::Orange,
    ];

    /// Single-letter spelling used by the text renderer.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Orange => 'O',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_are_distinct() {
        let letters: Vec<char> = Color::ALL.iter().map(|c| c.letter()).collect();
        for (i, a) in letters.iter().enumerate() {
            for b in &letters[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_display_matches_letter() {
        for color in Color::ALL {
            assert_eq!(format!("{}", color), color.letter().to_string());
        }
    }
}
