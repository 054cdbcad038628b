//! SA profile keycap silhouettes, used for clearance previews.

use crate::errors::BoardError;
use crate::float_types::Real;
use crate::solid::Solid;
use crate::traits::CSG;

/// Gap between the top of the plate and the bottom of the cap.
pub const CAP_CLEARANCE: Real = 5.0;
/// Height of the cap's top face above its bottom face.
pub const CAP_HEIGHT: Real = 12.0;
const SLAB: Real = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeycapSize {
    One,
    OneAndHalf,
    Two,
}

impl KeycapSize {
    /// Preset for a width in key units; only 1, 1.5 and 2 exist.
    pub fn from_units(units: Real) -> Result<Self, BoardError> {
        match units {
            u if u == 1.0 => Ok(KeycapSize::One),
            u if u == 1.5 => Ok(KeycapSize::OneAndHalf),
            u if u == 2.0 => Ok(KeycapSize::Two),
            _ => Err(BoardError::UnsupportedKeycapWidth(units)),
        }
    }

    /// Half extents `(x, y)` of the bottom footprint and of the top face.
    const fn footprints(self) -> ([Real; 2], [Real; 2]) {
        match self {
            KeycapSize::One => ([18.5 / 2.0, 18.5 / 2.0], [6.0, 6.0]),
            KeycapSize::OneAndHalf => ([27.94 / 2.0, 18.25 / 2.0], [11.0, 6.0]),
            KeycapSize::Two => ([18.25 / 2.0, 37.5 / 2.0], [6.0, 16.0]),
        }
    }
}

/// Tapered hull from the cap's footprint to its top face, sitting
/// [`CAP_CLEARANCE`] above a plate of `plate_thickness`.
pub fn sa_cap(size: KeycapSize, plate_thickness: Real) -> Solid {
    let ([bx, by], [tx, ty]) = size.footprints();
    let bottom = Solid::extrude_rectangle(bx, by, SLAB).translate(0.0, 0.0, SLAB / 2.0);
    let top = Solid::extrude_rectangle(tx, ty, SLAB).translate(0.0, 0.0, CAP_HEIGHT);
    bottom
        .hull(&top)
        .translate(0.0, 0.0, CAP_CLEARANCE + plate_thickness)
}
