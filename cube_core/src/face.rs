use std::fmt;

use crate::vector::{
    Axis,
    Coordinate::{self, Neg, Pos, Zero},
    Direction, Vector3,
};

/// The six faces of the cube in standard notation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    U,
    D,
    F,
    B,
    R,
    L,
}

impl Face {
    /// Every face, in the order the solved state is laid out
    pub const ALL: [Face; 6] = [Face::U, Face::D, Face::F, Face::B, Face::R, Face::L];

    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
            Face::R => 'R',
            Face::L => 'L',
        }
    }

    /// Parse a face letter. Letters are case sensitive since lowercase letters conventionally mean wide turns.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Face> {
        Face::ALL.into_iter().find(|face| face.letter() == letter)
    }

    /// Find the face whose outward normal is `normal`
    #[must_use]
    pub fn from_normal(normal: Vector3) -> Option<Face> {
        Face::ALL
            .into_iter()
            .find(|face| face.config().normal == normal)
    }

    #[must_use]
    pub fn config(self) -> &'static FaceConfig {
        &FACE_CONFIGS[self as usize]
    }

    #[must_use]
    pub fn move_spec(self) -> MoveSpec {
        MOVE_SPECS[self as usize]
    }

    /// The axis that turning this face rotates around
    #[must_use]
    pub fn axis(self) -> Axis {
        self.move_spec().axis
    }

    /// The colour every sticker of this face has in the solved state
    #[must_use]
    pub fn color(self) -> Color {
        self.config().color
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Face::U => "Up",
            Face::D => "Down",
            Face::F => "Front",
            Face::B => "Back",
            Face::R => "Right",
            Face::L => "Left",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Red,
    Orange,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Red,
        Color::Orange,
    ];

    #[must_use]
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::White => (0xff, 0xff, 0xff),
            Color::Yellow => (0xff, 0xd5, 0x00),
            Color::Green => (0x00, 0x9e, 0x60),
            Color::Blue => (0x00, 0x51, 0xba),
            Color::Red => (0xc4, 0x1e, 0x3a),
            Color::Orange => (0xff, 0x58, 0x00),
        }
    }

    /// The colour as a CSS hex string, e.g. `#009e60`
    #[must_use]
    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Orange => "orange",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a face is laid out in 3D and how to flatten it into a 3x3 grid.
///
/// Reading coordinates off naively would draw the back, left, and down faces mirrored, so each face carries its own
/// coordinate order for rows and columns such that the grid matches the usual net diagrams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceConfig {
    pub normal: Vector3,
    pub fixed_axis: Axis,
    pub fixed_value: Coordinate,
    pub row_axis: Axis,
    pub row_coords: [Coordinate; 3],
    pub col_axis: Axis,
    pub col_coords: [Coordinate; 3],
    pub color: Color,
}

impl FaceConfig {
    /// The grid row a coordinate along `row_axis` is drawn in
    #[must_use]
    pub fn row_index(&self, coordinate: Coordinate) -> Option<usize> {
        self.row_coords.iter().position(|&c| c == coordinate)
    }

    /// The grid column a coordinate along `col_axis` is drawn in
    #[must_use]
    pub fn col_index(&self, coordinate: Coordinate) -> Option<usize> {
        self.col_coords.iter().position(|&c| c == coordinate)
    }

    /// The position of the facelet drawn at `row`, `col` in the solved state
    #[must_use]
    pub fn position_of(&self, row: usize, col: usize) -> Vector3 {
        Vector3::ZERO
            .with(self.fixed_axis, self.fixed_value)
            .with(self.row_axis, self.row_coords[row])
            .with(self.col_axis, self.col_coords[col])
    }
}

/// Which layer a face turn rotates, and which way a plain turn goes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveSpec {
    pub axis: Axis,
    pub layer: Coordinate,
    /// The direction of a quarter turn that looks clockwise from outside the face
    pub clockwise: Direction,
}

const fn face_config(
    fixed_axis: Axis,
    fixed_value: Coordinate,
    (row_axis, row_coords): (Axis, [Coordinate; 3]),
    (col_axis, col_coords): (Axis, [Coordinate; 3]),
    color: Color,
) -> FaceConfig {
    FaceConfig {
        normal: Vector3::unit(fixed_axis, fixed_value),
        fixed_axis,
        fixed_value,
        row_axis,
        row_coords,
        col_axis,
        col_coords,
        color,
    }
}

// Indexed by `Face as usize`
#[rustfmt::skip]
static FACE_CONFIGS: [FaceConfig; 6] = [
    face_config(Axis::Y, Pos, (Axis::Z, [Neg, Zero, Pos]), (Axis::X, [Neg, Zero, Pos]), Color::White),
    face_config(Axis::Y, Neg, (Axis::Z, [Pos, Zero, Neg]), (Axis::X, [Pos, Zero, Neg]), Color::Yellow),
    face_config(Axis::Z, Pos, (Axis::Y, [Pos, Zero, Neg]), (Axis::X, [Neg, Zero, Pos]), Color::Green),
    face_config(Axis::Z, Neg, (Axis::Y, [Pos, Zero, Neg]), (Axis::X, [Pos, Zero, Neg]), Color::Blue),
    face_config(Axis::X, Pos, (Axis::Y, [Pos, Zero, Neg]), (Axis::Z, [Pos, Zero, Neg]), Color::Red),
    face_config(Axis::X, Neg, (Axis::Y, [Pos, Zero, Neg]), (Axis::Z, [Neg, Zero, Pos]), Color::Orange),
];

const fn move_spec(axis: Axis, layer: Coordinate, clockwise: Direction) -> MoveSpec {
    MoveSpec {
        axis,
        layer,
        clockwise,
    }
}

static MOVE_SPECS: [MoveSpec; 6] = [
    move_spec(Axis::Y, Pos, Direction::Negative),
    move_spec(Axis::Y, Neg, Direction::Positive),
    move_spec(Axis::Z, Pos, Direction::Negative),
    move_spec(Axis::Z, Neg, Direction::Positive),
    move_spec(Axis::X, Pos, Direction::Negative),
    move_spec(Axis::X, Neg, Direction::Positive),
];
