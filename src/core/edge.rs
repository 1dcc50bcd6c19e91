//! Edge-strip addressing and the face adjacency table.
//!
//! ## EdgeSelector
//!
//! A neighbor strip is either a full row or a full column of the neighbor's
//! grid. The tagged variant replaces the loosely-typed "row number or column
//! marker" field this kind of table is often written with, so the get/set
//! routines match exhaustively.
//!
//! ## Adjacency table
//!
//! Turning a face drags the four neighbor strips that border it. Which
//! strip of which neighbor, and in what cycle order, is fixed cube geometry:
//! it is expressed once below as literal data and covered exhaustively by
//! tests rather than derived at runtime.

use serde::{Deserialize, Serialize};

use super::face::Face;

/// Addresses one row or one column of a face grid.
///
/// `Row(k)` is the three facelets of row `k`, indices 0..3 left-to-right as
/// stored; `Col(k)` is column `k`, top-to-bottom as stored. Reads and writes
/// through a selector are always value-for-value in that fixed orientation -
/// no reversal happens during edge cycling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeSelector {
    Row(usize),
    Col(usize),
}

/// The four neighbor strips dragged by turning `face`, in cycle order.
///
/// A clockwise turn shifts contents forward through this list (entry 1
/// receives entry 0's old strip, and entry 0 receives entry 3's);
/// counterclockwise shifts backward.
#[must_use]
pub const fn adjacent_strips(face: Face) -> [(Face, EdgeSelector); 4] {
    use EdgeSelector::{Col, Row};

    match face {
        Face::Up => [
            (Face::Back, Row(0)),
            (Face::Right, Row(0)),
            (Face::Front, Row(0)),
            (Face::Left, Row(0)),
        ],
        Face::Down => [
            (Face::Front, Row(2)),
            (Face::Right, Row(2)),
            (Face::Back, Row(2)),
            (Face::Left, Row(2)),
        ],
        Face::Front => [
            (Face::Up, Row(2)),
            (Face::Right, Col(0)),
            (Face::Down, Row(0)),
            (Face::Left, Col(2)),
        ],
        Face::Back => [
            (Face::Up, Row(0)),
            (Face::Left, Col(0)),
            (Face::Down, Row(2)),
            (Face::Right, Col(2)),
        ],
        Face::Left => [
            (Face::Up, Col(0)),
            (Face::Front, Col(0)),
            (Face::Down, Col(0)),
            (Face::Back, Col(2)),
        ],
        Face::Right => [
            (Face::Up, Col(2)),
            (Face::Back, Col(0)),
            (Face::Down, Col(2)),
            (Face::Front, Col(2)),
        ],
    }
}
