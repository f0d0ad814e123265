#![warn(clippy::pedantic)]
#![allow(clippy::similar_names, clippy::missing_panics_doc)]

//! The state of a 3x3x3 cube as 54 coloured stickers, and the face turns that move them around.
//!
//! Every operation takes a `StickerSet` and returns a new one:
//!
//! ```
//! use cube_core::{Face, apply_moves, create_initial_cube_state, parse_moves};
//!
//! let solved = create_initial_cube_state();
//! let moved = apply_moves(&solved, &parse_moves("U R2").unwrap());
//! assert!(!moved.is_solved());
//! // Face turns never move the centres
//! assert_eq!(moved.face_stickers(Face::L)[4], Face::L.color());
//!
//! let back = apply_moves(&moved, &parse_moves("R2 U'").unwrap());
//! assert_eq!(back, solved);
//! ```

pub mod face;
pub mod moves;
pub mod projection;
pub mod scramble;
pub mod sticker;
pub mod vector;

pub use face::{Color, Face, FaceConfig, MoveSpec};
pub use moves::{
    Modifier, Move, MoveError, apply_move_token, apply_move_tokens, apply_moves,
    apply_single_move, format_moves, invert_moves, move_groups, parse_moves,
};
pub use projection::{FaceGrid, ProjectionError, get_face_stickers, net, try_face_stickers};
pub use scramble::{DEFAULT_SCRAMBLE_LENGTH, generate_scramble, generate_scramble_with};
pub use sticker::{
    STICKER_COUNT, STICKERS_PER_FACE, Sticker, StickerId, StickerSet, StickerSetError,
    create_initial_cube_state,
};
pub use vector::{Axis, Coordinate, Direction, Vector3, rotate_vector};
