//! Core engine types: colors, faces, grids, edge addressing, moves, RNG, state.
//!
//! This module contains the whole rotation engine. Everything else in the
//! crate (rendering, drivers) is a read-only consumer of `CubeState`'s
//! snapshot and never mutates state directly.

pub mod color;
pub mod cube;
pub mod edge;
pub mod error;
pub mod face;
pub mod grid;
pub mod moves;
pub mod rng;

pub use color::Color;
pub use cube::{CubeState, Snapshot};
pub use edge::{adjacent_strips, EdgeSelector};
pub use error::CubeError;
pub use face::{Face, FaceMap};
pub use grid::{FaceGrid, Strip};
pub use moves::Move;
pub use rng::CubeRng;
