//! Shuffle tests: determinism under a fixed seed, divergence across seeds,
//! and replayability of the returned move list.

use rust_cube::{Color, CubeRng, CubeState};

/// Identical seed and step count produce identical states and move lists.
#[test]
fn test_fixed_seed_reproduces_scramble() {
    let mut cube1 = CubeState::new();
    let mut cube2 = CubeState::new();

    let moves1 = cube1.shuffle(50, &mut CubeRng::new(42));
    let moves2 = cube2.shuffle(50, &mut CubeRng::new(42));

    assert_eq!(moves1, moves2);
    assert_eq!(cube1, cube2);
}

/// Different seeds diverge (for any pair of seeds worth testing with).
#[test]
fn test_different_seeds_diverge() {
    let mut cube1 = CubeState::new();
    let mut cube2 = CubeState::new();

    cube1.shuffle(50, &mut CubeRng::new(1));
    cube2.shuffle(50, &mut CubeRng::new(2));

    assert_ne!(cube1, cube2);
}

/// The returned move list replays to the same state.
#[test]
fn test_returned_moves_replay_scramble() {
    let mut shuffled = CubeState::new();
    let moves = shuffled.shuffle(30, &mut CubeRng::new(7));

    let mut replayed = CubeState::new();
    for mv in &moves {
        replayed.apply(*mv);
    }

    assert_eq!(replayed, shuffled);
}

/// Replaying the move list backwards, inverted, returns to solved.
#[test]
fn test_inverted_replay_solves() {
    let mut cube = CubeState::new();
    let moves = cube.shuffle(40, &mut CubeRng::new(99));
    assert!(!cube.is_solved(), "40 random moves left the cube solved");

    for mv in moves.iter().rev() {
        cube.apply(mv.inverse());
    }
    assert!(cube.is_solved());
}

/// A shuffle requests exactly `steps` moves and preserves color counts.
#[test]
fn test_shuffle_step_count_and_conservation() {
    let mut cube = CubeState::new();
    let moves = cube.shuffle(17, &mut CubeRng::new(5));

    assert_eq!(moves.len(), 17);
    for color in Color::ALL {
        assert_eq!(cube.color_count(color), 9);
    }
}

/// Zero steps is a no-op.
#[test]
fn test_zero_step_shuffle_is_noop() {
    let mut cube = CubeState::new();
    let moves = cube.shuffle(0, &mut CubeRng::new(42));

    assert!(moves.is_empty());
    assert!(cube.is_solved());
}
