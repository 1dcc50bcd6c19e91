//! Cube state and the turn engine.
//!
//! `CubeState` owns the six face grids and exposes one mutating operation:
//! [`turn`](CubeState::turn). A turn does exactly two things:
//!
//! 1. rotates the turned face's own 3x3 grid 90 degrees in place, and
//! 2. cycles the four neighbor edge strips listed in the adjacency table
//!    (`core::edge`), reading all four old strips before writing any.
//!
//! Both steps only permute the 54 facelets, so every color keeps its count
//! of nine through any move sequence. Turns are atomic from the caller's
//! perspective: there is no partially-applied state, and a turn never fails
//! for a typed `Face`.
//!
//! ```
//! use rust_cube::core::{CubeState, Face};
//!
//! let mut cube = CubeState::new();
//! cube.turn(Face::Right, true);
//! cube.turn(Face::Right, false);
//! assert!(cube.is_solved());
//! ```

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::edge::adjacent_strips;
use super::error::CubeError;
use super::face::{Face, FaceMap};
use super::grid::{FaceGrid, Strip};
use super::moves::Move;
use super::rng::CubeRng;

/// The full mechanical state of a 3x3x3 cube.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeState {
    faces: FaceMap<FaceGrid>,
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeState {
    /// Create a solved cube: each face a uniform grid of its canonical color.
    #[must_use]
    pub fn new() -> Self {
        Self {
            faces: FaceMap::new(|face| FaceGrid::solid(face.solved_color())),
        }
    }

    /// Apply one quarter-turn of `face` in the given direction.
    ///
    /// `clockwise` is as viewed looking at `face` from outside the cube.
    /// Total for any `Face`; four applications of the same turn, or a
    /// turn followed by its inverse, restore the prior state exactly.
    pub fn turn(&mut self, face: Face, clockwise: bool) {
        // (a) Rotate the face's own grid in place.
        if clockwise {
            self.faces[face].rotate_cw();
        } else {
            self.faces[face].rotate_ccw();
        }

        // (b) Cycle the four neighbor strips. All four old strips are read
        // before any write, otherwise a strip consumed later in the loop
        // would see an already-overwritten value.
        let strips = adjacent_strips(face);
        let old: [Strip; 4] = strips.map(|(neighbor, selector)| self.faces[neighbor].strip(selector));

        for (i, (neighbor, selector)) in strips.into_iter().enumerate() {
            // Clockwise shifts forward through the cycle, counterclockwise
            // backward.
            let source = if clockwise { (i + 3) % 4 } else { (i + 1) % 4 };
            self.faces[neighbor].set_strip(selector, old[source]);
        }
    }

    /// Apply a [`Move`].
    pub fn apply(&mut self, mv: Move) {
        self.turn(mv.face, mv.clockwise);
    }

    /// Apply a move given in face-letter notation (`"U"`, `"F'"`, ...).
    ///
    /// On error the cube is left untouched.
    pub fn apply_token(&mut self, token: &str) -> Result<(), CubeError> {
        let mv = Move::parse(token)?;
        self.apply(mv);
        Ok(())
    }

    /// Scramble with `steps` uniformly random quarter-turns.
    ///
    /// Face and direction are drawn independently per step from the injected
    /// RNG, so a fixed seed reproduces the scramble exactly. Returns the
    /// moves that were applied, in order, for replay or undo.
    pub fn shuffle(&mut self, steps: usize, rng: &mut CubeRng) -> Vec<Move> {
        let mut applied = Vec::with_capacity(steps);
        for _ in 0..steps {
            let mv = Move::random(rng);
            self.apply(mv);
            applied.push(mv);
        }
        applied
    }

    /// A read-only copy of all 54 facelets for rendering.
    ///
    /// The snapshot is detached from the cube: later turns do not affect it,
    /// and nothing a renderer does to it can corrupt the live state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { faces: self.faces }
    }

    /// The grid of a single face.
    #[must_use]
    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.faces[face]
    }

    /// Whether every face is a single uniform color.
    ///
    /// Note this accepts any uniform coloring, not only the canonical one;
    /// since turns cannot permute center facelets off their faces, a cube
    /// reached by turns is uniform only in the canonical coloring anyway.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|(_, grid)| grid.is_uniform())
    }

    /// Count how often `color` appears across all 54 facelets.
    ///
    /// Always 9 for every color; exposed for the conservation tests.
    #[must_use]
    pub fn color_count(&self, color: Color) -> usize {
        self.faces
            .iter()
            .flat_map(|(_, grid)| grid.facelets())
            .filter(|&c| c == color)
            .count()
    }
}

/// An immutable copy of the six face grids, taken by [`CubeState::snapshot`].
///
/// This is the entire interface renderers get: they can read any facelet
/// but hold no alias into the live cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    faces: FaceMap<FaceGrid>,
}

impl Snapshot {
    /// The grid of a single face.
    #[must_use]
    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.faces[face]
    }

    /// The color at (row, col) of a face.
    #[must_use]
    pub fn get(&self, face: Face, row: usize, col: usize) -> Color {
        self.faces[face].get(row, col)
    }
}
