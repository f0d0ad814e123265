use std::{fmt, str::FromStr};

use itertools::Itertools;
use log::{debug, trace};
use thiserror::Error;

use crate::{
    face::Face,
    sticker::{Sticker, StickerSet},
    vector::{Axis, Coordinate, Direction, rotate_vector},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Invalid move token `{0}`, expected one of U D F B R L optionally followed by ' or 2")]
    InvalidMoveToken(String),
}

/// The suffix of a move token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    /// No suffix: a clockwise quarter turn
    Plain,
    /// `'`: a counter-clockwise quarter turn
    Prime,
    /// `2`: a half turn
    Double,
}

impl Modifier {
    pub const ALL: [Modifier; 3] = [Modifier::Plain, Modifier::Prime, Modifier::Double];

    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Modifier::Plain => "",
            Modifier::Prime => "'",
            Modifier::Double => "2",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Modifier> {
        Modifier::ALL
            .into_iter()
            .find(|modifier| modifier.suffix() == suffix)
    }
}

/// A face turn such as `R`, `U'`, or `F2`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub face: Face,
    pub modifier: Modifier,
}

impl Move {
    #[must_use]
    pub const fn new(face: Face, modifier: Modifier) -> Move {
        Move { face, modifier }
    }

    /// All 18 face turns
    pub const ALL: [Move; 18] = {
        let mut out = [Move::new(Face::U, Modifier::Plain); 18];
        let mut i = 0;
        while i < 18 {
            out[i] = Move::new(Face::ALL[i / 3], Modifier::ALL[i % 3]);
            i += 1;
        }
        out
    };

    /// The move that undoes this one. Half turns are their own inverse.
    #[must_use]
    pub fn inverse(self) -> Move {
        let modifier = match self.modifier {
            Modifier::Plain => Modifier::Prime,
            Modifier::Prime => Modifier::Plain,
            Modifier::Double => Modifier::Double,
        };

        Move::new(self.face, modifier)
    }

    /// The direction each quarter turn of this move rotates the layer
    #[must_use]
    pub fn direction(self) -> Direction {
        let clockwise = self.face.move_spec().clockwise;

        match self.modifier {
            Modifier::Prime => clockwise.inverse(),
            Modifier::Plain | Modifier::Double => clockwise,
        }
    }

    /// How many quarter turns the move consists of
    #[must_use]
    pub fn turns(self) -> usize {
        match self.modifier {
            Modifier::Double => 2,
            Modifier::Plain | Modifier::Prime => 1,
        }
    }

    /// The token as shown to a person, with a typographic prime
    #[must_use]
    pub fn label(self) -> String {
        self.to_string().replace('\'', "′")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.modifier.suffix())
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(token: &str) -> Result<Move, MoveError> {
        let invalid = || MoveError::InvalidMoveToken(token.to_owned());

        let mut chars = token.chars();
        let face = chars.next().and_then(Face::from_letter).ok_or_else(invalid)?;
        let modifier = Modifier::from_suffix(chars.as_str()).ok_or_else(invalid)?;

        Ok(Move::new(face, modifier))
    }
}

/// The moves of each face in the order a move pad lists them
#[must_use]
pub fn move_groups() -> [(Face, [Move; 3]); 6] {
    Face::ALL.map(|face| (face, Modifier::ALL.map(|modifier| Move::new(face, modifier))))
}

/// Parse a whitespace separated sequence of moves such as `R U R' U'`.
///
/// # Errors
///
/// Returns the first token that isn't a valid move. Nothing is returned for the valid tokens in that case.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, MoveError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Write a move sequence the way `parse_moves` reads it
#[must_use]
pub fn format_moves(moves: &[Move]) -> String {
    moves.iter().join(" ")
}

/// The sequence that undoes `moves`
#[must_use]
pub fn invert_moves(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().copied().map(Move::inverse).collect()
}

/// Rotate every sticker on one layer a quarter turn. Stickers are read from `stickers` and written to a new list, so
/// the whole layer turns at once.
fn rotate_layer(
    stickers: &[Sticker],
    axis: Axis,
    layer: Coordinate,
    direction: Direction,
) -> Vec<Sticker> {
    stickers
        .iter()
        .map(|sticker| {
            if sticker.position.get(axis) != layer {
                return *sticker;
            }

            let mut rotated = *sticker;
            rotated.position = rotate_vector(sticker.position, axis, direction);
            rotated.normal = rotate_vector(sticker.normal, axis, direction);
            rotated
        })
        .collect()
}

/// Perform one move, returning the new state
#[must_use]
pub fn apply_single_move(stickers: &StickerSet, move_: Move) -> StickerSet {
    let spec = move_.face.move_spec();
    let direction = move_.direction();

    trace!(
        "Applying {move_} as {} turn(s) of {}={} ({direction:?})",
        move_.turns(),
        spec.axis,
        spec.layer
    );

    let mut current = stickers.stickers().to_vec();
    for _ in 0..move_.turns() {
        current = rotate_layer(&current, spec.axis, spec.layer, direction);
    }

    StickerSet::from_stickers_unchecked(current)
}

/// Perform a sequence of moves from left to right. An empty sequence leaves the state as is.
#[must_use]
pub fn apply_moves(stickers: &StickerSet, moves: &[Move]) -> StickerSet {
    debug!("Applying {} move(s): {}", moves.len(), format_moves(moves));

    moves
        .iter()
        .fold(stickers.clone(), |current, &move_| apply_single_move(&current, move_))
}

/// Parse and perform a single move token.
///
/// # Errors
///
/// Returns an error if the token isn't a valid move.
pub fn apply_move_token(stickers: &StickerSet, token: &str) -> Result<StickerSet, MoveError> {
    let move_ = token.parse::<Move>()?;

    Ok(apply_single_move(stickers, move_))
}

/// Parse and perform a sequence of move tokens. Every token is checked before any of them is performed.
///
/// # Errors
///
/// Returns the first invalid token.
pub fn apply_move_tokens<T: AsRef<str>>(
    stickers: &StickerSet,
    tokens: &[T],
) -> Result<StickerSet, MoveError> {
    let moves = tokens
        .iter()
        .map(|token| token.as_ref().parse::<Move>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(apply_moves(stickers, &moves))
}
