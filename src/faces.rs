//! Face identities, sticker colors and their fixed orderings
//!
//! The cube is always mounted the same way in the rig, so each physical face
//! position has a fixed canonical letter and a fixed center sticker color.
//! The mapping below (yellow front, red left, white back, orange right, blue
//! up, green down) matches the rig's mounting orientation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical face position, identified by its solver letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Up,
    Right,
    Front,
    Down,
    Left,
    Back,
}

/// One of the six sticker colors
///
/// Variants are declared in lexicographic label order; `Ord` and reference
/// table iteration rely on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CubeColor {
    Blue,
    Green,
    Orange,
    Red,
    White,
    Yellow,
}

/// Faces in the order they are shown to the camera
pub const FACE_ORDER_SCAN: [Face; 6] = [
    Face::Front,
    Face::Left,
    Face::Back,
    Face::Right,
    Face::Up,
    Face::Down,
];

/// Faces in the order the solver expects them concatenated
pub const FACE_ORDER_SOLVER: [Face; 6] = [
    Face::Up,
    Face::Right,
    Face::Front,
    Face::Down,
    Face::Left,
    Face::Back,
];

/// Colors in the order the operator calibrates them
pub const CALIBRATION_COLOR_ORDER: [CubeColor; 6] = [
    CubeColor::White,
    CubeColor::Red,
    CubeColor::Blue,
    CubeColor::Green,
    CubeColor::Orange,
    CubeColor::Yellow,
];

impl Face {
    /// Canonical single-character identifier used in the solver string
    pub fn letter(&self) -> char {
        match self {
            Face::Up => 'U',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Back => 'B',
        }
    }

    /// Center sticker color of this face in the rig's mounting orientation
    pub fn center_color(&self) -> CubeColor {
        match self {
            Face::Front => CubeColor::Yellow,
            Face::Left => CubeColor::Red,
            Face::Back => CubeColor::White,
            Face::Right => CubeColor::Orange,
            Face::Up => CubeColor::Blue,
            Face::Down => CubeColor::Green,
        }
    }
}

impl CubeColor {
    /// Lowercase label used as the reference table key
    pub fn label(&self) -> &'static str {
        match self {
            CubeColor::Blue => "blue",
            CubeColor::Green => "green",
            CubeColor::Orange => "orange",
            CubeColor::Red => "red",
            CubeColor::White => "white",
            CubeColor::Yellow => "yellow",
        }
    }

    /// Face whose center carries this color
    pub fn face(&self) -> Face {
        match self {
            CubeColor::Yellow => Face::Front,
            CubeColor::Red => Face::Left,
            CubeColor::White => Face::Back,
            CubeColor::Orange => Face::Right,
            CubeColor::Blue => Face::Up,
            CubeColor::Green => Face::Down,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl fmt::Display for CubeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
