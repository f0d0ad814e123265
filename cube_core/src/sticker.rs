use std::{collections::BTreeMap, fmt};

use itertools::Itertools;
use thiserror::Error;

use crate::{
    face::{Color, Face},
    vector::Vector3,
};

/// The number of facelets on a 3x3x3 cube
pub const STICKER_COUNT: usize = 54;
/// The number of facelets on each face
pub const STICKERS_PER_FACE: usize = 9;

/// Names a sticker by the face, row, and column it occupies in the solved state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StickerId {
    pub face: Face,
    pub row: u8,
    pub col: u8,
}

impl fmt::Display for StickerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.face, self.row, self.col)
    }
}

/// A single facelet. The colour is painted on once; turning the cube only moves and reorients the sticker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sticker {
    id: StickerId,
    color: Color,
    pub position: Vector3,
    pub normal: Vector3,
}

impl Sticker {
    #[must_use]
    pub fn new(id: StickerId, color: Color, position: Vector3, normal: Vector3) -> Sticker {
        Sticker {
            id,
            color,
            position,
            normal,
        }
    }

    #[must_use]
    pub fn id(&self) -> StickerId {
        self.id
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The face the sticker currently points out of, if the normal is a face normal
    #[must_use]
    pub fn current_face(&self) -> Option<Face> {
        Face::from_normal(self.normal)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StickerSetError {
    #[error("Expected 54 stickers but got {0}")]
    WrongStickerCount(usize),
    #[error("Sticker {0} has normal {1}, which is not the normal of any face")]
    InvalidNormal(StickerId, Vector3),
    #[error("Expected 9 stickers facing {0} but got {1}")]
    WrongFaceCount(Face, usize),
    #[error("Sticker {0} at {1} is not on the surface of the face it points out of")]
    OffSurface(StickerId, Vector3),
    #[error("Stickers {0} and {1} occupy the same facelet")]
    Collision(StickerId, StickerId),
}

/// The full state of the cube as 54 stickers.
///
/// A `StickerSet` is a value: moves produce a new set rather than altering this one. The order of the stickers never
/// changes, so two sets compare equal exactly when every sticker is in the same place.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StickerSet {
    stickers: Vec<Sticker>,
}

impl StickerSet {
    /// Build a sticker set from stickers that came from elsewhere, verifying that they describe a physical cube.
    ///
    /// # Errors
    ///
    /// Returns an error if there aren't 54 stickers, if any face doesn't have exactly 9 stickers pointing out of it, if a
    /// sticker isn't on the surface it points out of, or if two stickers occupy the same facelet.
    pub fn from_stickers(stickers: Vec<Sticker>) -> Result<StickerSet, StickerSetError> {
        check_invariants(&stickers)?;

        Ok(StickerSet { stickers })
    }

    pub(crate) fn from_stickers_unchecked(stickers: Vec<Sticker>) -> StickerSet {
        debug_assert_eq!(check_invariants(&stickers), Ok(()));

        StickerSet { stickers }
    }

    #[must_use]
    pub fn stickers(&self) -> &[Sticker] {
        &self.stickers
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sticker> {
        self.stickers.iter()
    }

    /// Whether every face shows a single colour, namely that face's own colour
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.stickers
            .iter()
            .all(|sticker| sticker.current_face().map(Face::color) == Some(sticker.color))
    }

    /// How many stickers of each colour the set contains
    #[must_use]
    pub fn color_counts(&self) -> BTreeMap<Color, usize> {
        self.stickers.iter().map(Sticker::color).counts().into_iter().collect()
    }

    /// Find a sticker by its solved-state name
    #[must_use]
    pub fn get(&self, id: StickerId) -> Option<&Sticker> {
        self.stickers.iter().find(|sticker| sticker.id == id)
    }
}

impl AsRef<[Sticker]> for StickerSet {
    fn as_ref(&self) -> &[Sticker] {
        &self.stickers
    }
}

impl<'a> IntoIterator for &'a StickerSet {
    type Item = &'a Sticker;
    type IntoIter = std::slice::Iter<'a, Sticker>;

    fn into_iter(self) -> Self::IntoIter {
        self.stickers.iter()
    }
}

impl Default for StickerSet {
    fn default() -> Self {
        create_initial_cube_state()
    }
}

fn check_invariants(stickers: &[Sticker]) -> Result<(), StickerSetError> {
    if stickers.len() != STICKER_COUNT {
        return Err(StickerSetError::WrongStickerCount(stickers.len()));
    }

    let mut per_face = BTreeMap::<Face, usize>::new();
    let mut occupied = BTreeMap::<(Vector3, Vector3), StickerId>::new();

    for sticker in stickers {
        let Some(face) = sticker.current_face() else {
            return Err(StickerSetError::InvalidNormal(sticker.id, sticker.normal));
        };

        let config = face.config();
        if sticker.position.get(config.fixed_axis) != config.fixed_value {
            return Err(StickerSetError::OffSurface(sticker.id, sticker.position));
        }

        if let Some(other) = occupied.insert((sticker.position, sticker.normal), sticker.id) {
            return Err(StickerSetError::Collision(other, sticker.id));
        }

        *per_face.entry(face).or_default() += 1;
    }

    for face in Face::ALL {
        let count = per_face.get(&face).copied().unwrap_or(0);
        if count != STICKERS_PER_FACE {
            return Err(StickerSetError::WrongFaceCount(face, count));
        }
    }

    Ok(())
}

/// Build the solved cube.
///
/// Each face's grid is walked in its own row and column order, so sticker `F-0-0` is the top left of the front face
/// as drawn in a net.
#[must_use]
pub fn create_initial_cube_state() -> StickerSet {
    let mut stickers = Vec::with_capacity(STICKER_COUNT);

    for face in Face::ALL {
        let config = face.config();

        for (row, col) in (0..3_u8).cartesian_product(0..3_u8) {
            stickers.push(Sticker {
                id: StickerId { face, row, col },
                color: config.color,
                position: config.position_of(usize::from(row), usize::from(col)),
                normal: config.normal,
            });
        }
    }

    StickerSet::from_stickers_unchecked(stickers)
}

/// Whether a position is one of the 26 positions on the outside of the cube. Every component is already one of -1, 0,
/// or 1, so only the centre of the cube is excluded.
#[must_use]
pub fn is_surface_position(position: Vector3) -> bool {
    position != Vector3::ZERO
}
