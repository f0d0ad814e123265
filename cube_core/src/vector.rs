use std::{fmt, ops::Neg};

/// A single component of a facelet position or normal. Only the three values a 3x3x3 cube needs are representable, so
/// no sequence of rotations can ever produce anything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i8)]
pub enum Coordinate {
    Neg = -1,
    Zero = 0,
    Pos = 1,
}

impl Coordinate {
    pub const ALL: [Coordinate; 3] = [Coordinate::Neg, Coordinate::Zero, Coordinate::Pos];

    /// Get the integer value of the coordinate
    #[must_use]
    pub fn value(self) -> i8 {
        self as i8
    }

    /// Convert an integer into a coordinate, returning `None` if it isn't one of -1, 0, or 1
    #[must_use]
    pub fn from_value(value: i8) -> Option<Coordinate> {
        match value {
            -1 => Some(Coordinate::Neg),
            0 => Some(Coordinate::Zero),
            1 => Some(Coordinate::Pos),
            _ => None,
        }
    }
}

impl Neg for Coordinate {
    type Output = Coordinate;

    fn neg(self) -> Coordinate {
        match self {
            Coordinate::Neg => Coordinate::Pos,
            Coordinate::Zero => Coordinate::Zero,
            Coordinate::Pos => Coordinate::Neg,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}

/// The sign of a quarter turn around a principal axis.
///
/// `Positive` follows the right hand rule: with the thumb along the positive end of the axis, the fingers curl in the
/// direction of the turn. Seen from the positive end of the axis that is counter-clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    #[must_use]
    pub fn inverse(self) -> Direction {
        match self {
            Direction::Positive => Direction::Negative,
            Direction::Negative => Direction::Positive,
        }
    }

    /// Get the direction as `1` or `-1`
    #[must_use]
    pub fn sign(self) -> i8 {
        match self {
            Direction::Positive => 1,
            Direction::Negative => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vector3 {
    pub x: Coordinate,
    pub y: Coordinate,
    pub z: Coordinate,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(Coordinate::Zero, Coordinate::Zero, Coordinate::Zero);

    #[must_use]
    pub const fn new(x: Coordinate, y: Coordinate, z: Coordinate) -> Vector3 {
        Vector3 { x, y, z }
    }

    /// The unit vector pointing along the given end of an axis
    #[must_use]
    pub const fn unit(axis: Axis, value: Coordinate) -> Vector3 {
        Vector3::ZERO.with(axis, value)
    }

    #[must_use]
    pub const fn get(&self, axis: Axis) -> Coordinate {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Return a copy of the vector with one component replaced
    #[must_use]
    pub const fn with(mut self, axis: Axis, value: Coordinate) -> Vector3 {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
        self
    }

    /// The number of non-zero components
    #[must_use]
    pub fn nonzero_count(&self) -> usize {
        Axis::ALL
            .iter()
            .filter(|&&axis| self.get(axis) != Coordinate::Zero)
            .count()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Rotate a vector a quarter turn around a principal axis.
///
/// The rotation only swaps and negates components, so the result is exact and stays on the integer lattice no matter
/// how many times it is applied.
#[must_use]
pub fn rotate_vector(vector: Vector3, axis: Axis, direction: Direction) -> Vector3 {
    let Vector3 { x, y, z } = vector;

    match (axis, direction) {
        (Axis::X, Direction::Positive) => Vector3::new(x, -z, y),
        (Axis::X, Direction::Negative) => Vector3::new(x, z, -y),
        (Axis::Y, Direction::Positive) => Vector3::new(z, y, -x),
        (Axis::Y, Direction::Negative) => Vector3::new(-z, y, x),
        (Axis::Z, Direction::Positive) => Vector3::new(-y, x, z),
        (Axis::Z, Direction::Negative) => Vector3::new(y, -x, z),
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, Coordinate, Direction, Vector3, rotate_vector};

    fn all_vectors() -> impl Iterator<Item = Vector3> {
        Coordinate::ALL.into_iter().flat_map(|x| {
            Coordinate::ALL.into_iter().flat_map(move |y| {
                Coordinate::ALL
                    .into_iter()
                    .map(move |z| Vector3::new(x, y, z))
            })
        })
    }

    #[test]
    fn quarter_turns_have_order_four() {
        for axis in Axis::ALL {
            for direction in [Direction::Positive, Direction::Negative] {
                for vector in all_vectors() {
                    let mut rotated = vector;
                    for _ in 0..4 {
                        rotated = rotate_vector(rotated, axis, direction);
                    }
                    assert_eq!(rotated, vector);
                }
            }
        }
    }

    #[test]
    fn directions_are_inverse() {
        for axis in Axis::ALL {
            for vector in all_vectors() {
                let there = rotate_vector(vector, axis, Direction::Positive);
                assert_eq!(rotate_vector(there, axis, Direction::Negative), vector);
            }
        }
    }

    #[test]
    fn follows_right_hand_rule() {
        let x = Vector3::unit(Axis::X, Coordinate::Pos);
        let y = Vector3::unit(Axis::Y, Coordinate::Pos);
        let z = Vector3::unit(Axis::Z, Coordinate::Pos);

        assert_eq!(rotate_vector(y, Axis::X, Direction::Positive), z);
        assert_eq!(rotate_vector(z, Axis::Y, Direction::Positive), x);
        assert_eq!(rotate_vector(x, Axis::Z, Direction::Positive), y);
    }

    #[test]
    fn rotation_keeps_the_axis_component() {
        for axis in Axis::ALL {
            for vector in all_vectors() {
                let rotated = rotate_vector(vector, axis, Direction::Negative);
                assert_eq!(rotated.get(axis), vector.get(axis));
                assert_eq!(rotated.nonzero_count(), vector.nonzero_count());
            }
        }
    }

    #[test]
    fn coordinate_values() {
        for coordinate in Coordinate::ALL {
            assert_eq!(Coordinate::from_value(coordinate.value()), Some(coordinate));
            assert_eq!((-coordinate).value(), -coordinate.value());
        }
        assert_eq!(Coordinate::from_value(2), None);
    }
}
