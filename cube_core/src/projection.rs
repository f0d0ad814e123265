use log::warn;
use thiserror::Error;

use crate::{
    face::{Color, Face},
    sticker::{STICKERS_PER_FACE, Sticker, StickerSet},
};

/// The colours of one face, row-major, so index `row * 3 + col`
pub type FaceGrid = [Color; STICKERS_PER_FACE];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("Slot {slot} of face {face} is covered by {found} stickers instead of exactly one")]
    InconsistentProjection { face: Face, slot: usize, found: usize },
}

/// The colour and sticker count of every slot of a face
fn place(stickers: &[Sticker], face: Face) -> [(Option<Color>, usize); STICKERS_PER_FACE] {
    let config = face.config();
    let mut slots = [(None, 0); STICKERS_PER_FACE];

    for sticker in stickers.iter().filter(|s| s.normal == config.normal) {
        let row = config.row_index(sticker.position.get(config.row_axis));
        let col = config.col_index(sticker.position.get(config.col_axis));

        let (Some(row), Some(col)) = (row, col) else {
            warn!(
                "Sticker {} at {} faces {face} but has no grid slot",
                sticker.id(),
                sticker.position
            );
            continue;
        };

        let slot = &mut slots[row * 3 + col];
        slot.0 = Some(sticker.color());
        slot.1 += 1;
    }

    slots
}

/// Project a face into a grid of colours, failing if any slot isn't covered by exactly one sticker.
///
/// # Errors
///
/// Returns the first slot that is empty or covered more than once.
pub fn try_face_stickers(stickers: &[Sticker], face: Face) -> Result<FaceGrid, ProjectionError> {
    let slots = place(stickers, face);

    if let Some((slot, &(_, found))) = slots.iter().enumerate().find(|(_, (_, n))| *n != 1) {
        return Err(ProjectionError::InconsistentProjection { face, slot, found });
    }

    Ok(slots.map(|(color, _)| color.unwrap_or(face.color())))
}

/// Project a face into a grid of colours for drawing.
///
/// This never fails. A slot that no sticker covers is drawn in the face's own colour, and a slot covered twice shows
/// the last sticker found. Either case means the stickers don't describe a real cube, so it is logged.
#[must_use]
pub fn get_face_stickers(stickers: &[Sticker], face: Face) -> FaceGrid {
    let slots = place(stickers, face);

    for (slot, &(_, found)) in slots.iter().enumerate() {
        if found != 1 {
            warn!("{}", ProjectionError::InconsistentProjection { face, slot, found });
        }
    }

    slots.map(|(color, _)| color.unwrap_or(face.color()))
}

/// Project every face, in the order of `Face::ALL`
#[must_use]
pub fn net(stickers: &[Sticker]) -> [(Face, FaceGrid); 6] {
    Face::ALL.map(|face| (face, get_face_stickers(stickers, face)))
}

impl StickerSet {
    /// The colours showing on a face, row-major
    #[must_use]
    pub fn face_stickers(&self, face: Face) -> FaceGrid {
        get_face_stickers(self.stickers(), face)
    }
}
