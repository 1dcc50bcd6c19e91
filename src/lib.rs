//! # rust-cube
//!
//! The mechanical state of a 3x3x3 combination puzzle and the rotation
//! engine that applies face turns to it.
//!
//! ## Design Principles
//!
//! 1. **Typed faces, total turns**: `Face` is a closed enum, so the turn
//!    engine has no failure path. `Result` exists only where untyped input
//!    (a face letter, a move token) enters the system.
//!
//! 2. **Geometry as literal data**: which neighbor strips a turn drags, and
//!    in what cycle order, is a fixed table in `core::edge` - expressed once
//!    and covered exhaustively by tests, never derived at runtime.
//!
//! 3. **Injected randomness**: shuffling takes an explicit seeded `CubeRng`,
//!    so every scramble is reproducible.
//!
//! 4. **Read-only consumers**: renderers and drivers see the cube through
//!    `snapshot()`, an owned copy with no alias into the live state.
//!
//! ## Modules
//!
//! - `core`: colors, faces, grids, edge addressing, moves, RNG, cube state
//! - `render`: text rendering of a snapshot as an unfolded net
//!
//! ## Quick Start
//!
//! ```
//! use rust_cube::{CubeRng, CubeState, Face};
//!
//! let mut cube = CubeState::new();
//! let mut rng = CubeRng::new(42);
//!
//! let scramble = cube.shuffle(20, &mut rng);
//! assert_eq!(scramble.len(), 20);
//!
//! // Undo the scramble by replaying it backwards, inverted.
//! for mv in scramble.iter().rev() {
//!     cube.apply(mv.inverse());
//! }
//! assert!(cube.is_solved());
//!
//! cube.turn(Face::Up, true);
//! println!("{}", rust_cube::render::render_text(&cube.snapshot()));
//! ```

pub mod core;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    adjacent_strips, Color, CubeError, CubeRng, CubeState, EdgeSelector, Face, FaceGrid, FaceMap,
    Move, Snapshot, Strip,
};

pub use crate::render::render_text;
