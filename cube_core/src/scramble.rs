use log::{debug, trace};

use crate::{
    face::Face,
    moves::{Modifier, Move, format_moves},
    vector::Axis,
};

/// The scramble length used when nothing else is asked for
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 25;

/// Generate a random scramble using the thread-local generator
#[must_use]
pub fn generate_scramble(length: usize) -> Vec<Move> {
    generate_scramble_with(&mut fastrand::Rng::new(), length)
}

/// Generate a random scramble of `length` moves.
///
/// Consecutive moves never turn the same face or two faces on the same axis, which rules out pairs that cancel or
/// merge such as `R R'` or `U D`. This is a random walk and says nothing about how far from solved the result is.
pub fn generate_scramble_with(rng: &mut fastrand::Rng, length: usize) -> Vec<Move> {
    let mut scramble = Vec::with_capacity(length);
    let mut last_face: Option<Face> = None;
    let mut last_axis: Option<Axis> = None;

    for _ in 0..length {
        // At most two of the six faces are excluded, so this terminates
        let face = loop {
            let candidate = Face::ALL[rng.usize(..Face::ALL.len())];

            if Some(candidate) != last_face && Some(candidate.axis()) != last_axis {
                break candidate;
            }

            trace!("Rejected {candidate} after {last_face:?}");
        };

        let modifier = Modifier::ALL[rng.usize(..Modifier::ALL.len())];

        scramble.push(Move::new(face, modifier));
        last_face = Some(face);
        last_axis = Some(face.axis());
    }

    debug!("Generated scramble {}", format_moves(&scramble));

    scramble
}
