//! Text rendering of a cube snapshot.
//!
//! Draws the unfolded net of the cube as plain text: the Up face on top,
//! the Left/Front/Right/Back band in the middle, the Down face below.
//!
//! ```text
//!     W W W
//!     W W W
//!     W W W
//! G G G  R R R  B B B  O O O
//! G G G  R R R  B B B  O O O
//! G G G  R R R  B B B  O O O
//!     Y Y Y
//!     Y Y Y
//!     Y Y Y
//! ```
//!
//! Renderers consume [`Snapshot`] only; they hold no alias into the live
//! cube and cannot mutate it. Any future renderer (graphical included) is
//! just another function of this shape.

use crate::core::{Face, Snapshot};

/// Format one row of one face as `"X X X"`.
fn face_row(snapshot: &Snapshot, face: Face, row: usize) -> String {
    let strip = snapshot.face(face).row(row);
    let letters: Vec<String> = strip.iter().map(|c| c.letter().to_string()).collect();
    letters.join(" ")
}

/// Render the snapshot as an unfolded net.
///
/// Pure function of the snapshot; the caller decides where the text goes.
#[must_use]
pub fn render_text(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    for row in 0..3 {
        out.push_str("    ");
        out.push_str(&face_row(snapshot, Face::Up, row));
        out.push('\n');
    }
    for row in 0..3 {
        out.push_str(&format!(
            "{}  {}  {}  {}\n",
            face_row(snapshot, Face::Left, row),
            face_row(snapshot, Face::Front, row),
            face_row(snapshot, Face::Right, row),
            face_row(snapshot, Face::Back, row),
        ));
    }
    for row in 0..3 {
        out.push_str("    ");
        out.push_str(&face_row(snapshot, Face::Down, row));
        out.push('\n');
    }

    out
}
