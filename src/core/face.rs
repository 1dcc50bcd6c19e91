//! Face identification and per-face data storage.
//!
//! ## Face
//!
//! Type-safe identifier for the six faces of the cube. A closed set -
//! invalid faces are unrepresentable, so the turn engine itself is total.
//! Only the notation boundary (parsing a face letter) can fail.
//!
//! ## FaceMap
//!
//! Per-face data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Face`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::color::Color;
use super::error::CubeError;

/// One of the six faces of the cube.
///
/// Externally spelled as single letters: U, D, L, R, F, B.
///
/// ```
/// use rust_cube::core::Face;
///
/// assert_eq!(Face::from_letter('U').unwrap(), Face::Up);
/// assert_eq!(Face::Front.letter(), 'F');
/// assert!(Face::from_letter('X').is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Up,
    Down,
    Left,
    Right,
    Front,
    Back,
}

impl Face {
    /// Number of faces.
    pub const COUNT: usize = 6;

    /// All six faces, in declaration order (the `FaceMap` index order).
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
    ];

    /// Array index of this face (0-based, stable).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Face::Up => 0,
            Face::Down => 1,
            Face::Left => 2,
            Face::Right => 3,
            Face::Front => 4,
            Face::Back => 5,
        }
    }

    /// Single-letter spelling (U, D, L, R, F, B).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }

    /// Parse a face letter, case-insensitively.
    ///
    /// Anything outside the six-letter alphabet is rejected with
    /// [`CubeError::InvalidFace`].
    pub fn from_letter(letter: char) -> Result<Self, CubeError> {
        match letter.to_ascii_uppercase() {
            'U' => Ok(Face::Up),
            'D' => Ok(Face::Down),
            'L' => Ok(Face::Left),
            'R' => Ok(Face::Right),
            'F' => Ok(Face::Front),
            'B' => Ok(Face::Back),
            other => Err(CubeError::InvalidFace(other)),
        }
    }

    /// The uniform color this face holds in the solved state.
    #[must_use]
    pub const fn solved_color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Left => Color::Green,
            Face::Right => Color::Blue,
            Face::Front => Color::Red,
            Face::Back => Color::Orange,
        }
    }

    /// The face on the opposite side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }
}

impl TryFrom<char> for Face {
    type Error = CubeError;

    fn try_from(letter: char) -> Result<Self, CubeError> {
        Face::from_letter(letter)
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Per-face data storage with O(1) access.
///
/// Backed by a fixed `[T; 6]` with one entry per face.
/// Use `FaceMap::new()` to create with a factory function,
/// or `FaceMap::with_value()` to initialize all entries to the same value.
///
/// ## Example
///
/// ```
/// use rust_cube::core::{Face, FaceMap};
///
/// let mut counts: FaceMap<u32> = FaceMap::with_value(0);
///
/// counts[Face::Up] = 3;
/// assert_eq!(counts[Face::Up], 3);
/// assert_eq!(counts[Face::Down], 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceMap<T> {
    data: [T; 6],
}

impl<T> FaceMap<T> {
    /// Create a new FaceMap with values from a factory function.
    ///
    /// The factory receives the `Face` for each entry.
    pub fn new(factory: impl Fn(Face) -> T) -> Self {
        Self {
            data: Face::ALL.map(factory),
        }
    }

    /// Create a new FaceMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a face's data.
    #[must_use]
    pub fn get(&self, face: Face) -> &T {
        &self.data[face.index()]
    }

    /// Get a mutable reference to a face's data.
    pub fn get_mut(&mut self, face: Face) -> &mut T {
        &mut self.data[face.index()]
    }

    /// Iterate over (Face, &T) pairs in `Face::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        Face::ALL.iter().copied().zip(self.data.iter())
    }
}

impl<T> Index<Face> for FaceMap<T> {
    type Output = T;

    fn index(&self, face: Face) -> &Self::Output {
        self.get(face)
    }
}

impl<T> IndexMut<Face> for FaceMap<T> {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        self.get_mut(face)
    }
}
