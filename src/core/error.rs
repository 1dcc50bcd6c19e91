//! Error types for the notation boundary.
//!
//! The turn engine itself is total: a `Face` argument cannot be invalid, so
//! `CubeState::turn` never fails. Errors only arise when arbitrary input
//! (a face letter, a move token) crosses into the typed core, and they are
//! always caller-recoverable - the cube is left untouched.

use thiserror::Error;

/// Failure to interpret external input as a face or move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CubeError {
    /// The letter is not one of U, D, L, R, F, B.
    #[error("invalid face letter '{0}': expected one of U, D, L, R, F, B")]
    InvalidFace(char),

    /// A move token with no face letter at all.
    #[error("empty move token")]
    EmptyMove,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_face_message_names_letter() {
        let msg = CubeError::InvalidFace('X').to_string();
        assert!(msg.contains('X'));
        assert!(msg.contains("U, D, L, R, F, B"));
    }
}
