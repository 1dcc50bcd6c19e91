//! Move representation: face + direction.
//!
//! A move is one quarter-turn of one face. The notation here is the minimal
//! face-letter grammar: a face letter, optionally followed by an apostrophe
//! for counterclockwise (`"U"`, `"F'"`). Anything richer (double turns,
//! wide moves, slice moves) is a driver concern, not modeled.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::CubeError;
use super::face::Face;
use super::rng::CubeRng;

/// A single quarter-turn of one face.
///
/// `clockwise` is the direction as viewed looking at the face from outside
/// the cube.
///
/// ```
/// use rust_cube::core::{Face, Move};
///
/// let m: Move = "F'".parse().unwrap();
/// assert_eq!(m, Move::new(Face::Front, false));
/// assert_eq!(m.inverse().to_string(), "F");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub face: Face,
    pub clockwise: bool,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(face: Face, clockwise: bool) -> Self {
        Self { face, clockwise }
    }

    /// The move that undoes this one: same face, opposite direction.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            face: self.face,
            clockwise: !self.clockwise,
        }
    }

    /// Parse a move token.
    ///
    /// The first character is the face letter (case-insensitive); an
    /// apostrophe immediately after it selects counterclockwise. Trailing
    /// characters beyond that are ignored, matching the forgiving way an
    /// interactive driver reads commands.
    pub fn parse(token: &str) -> Result<Self, CubeError> {
        let mut chars = token.chars();
        let letter = chars.next().ok_or(CubeError::EmptyMove)?;
        let face = Face::from_letter(letter)?;
        let clockwise = chars.next() != Some('\'');
        Ok(Self { face, clockwise })
    }

    /// Draw a uniformly random move: any of the 6 faces, either direction.
    #[must_use]
    pub fn random(rng: &mut CubeRng) -> Self {
        let face = Face::ALL[rng.gen_range_usize(0..Face::COUNT)];
        let clockwise = rng.gen_bool(0.5);
        Self { face, clockwise }
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Move::parse(token)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.clockwise {
            write!(f, "{}", self.face)
        } else {
            write!(f, "{}'", self.face)
        }
    }
}
