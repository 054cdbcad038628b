//! Housings for the cable connectors that exit through the back wall.

use crate::float_types::Real;
use crate::placement::Anchor;
use crate::solid::Solid;
use crate::traits::CSG;

pub const RJ9_SIZE: [Real; 3] = [14.78, 13.0, 22.38];
/// Height of the RJ9 housing's center above the floor.
pub const RJ9_CENTER_Z: Real = 11.0;
const RJ9_WALL: Real = 2.0;
const RJ9_NOTCH_HEIGHT: Real = 5.0;

/// Inner USB cavity.
pub const USB_HOLDER_SIZE: [Real; 3] = [6.5, 10.0, 13.6];
pub const USB_HOLDER_THICKNESS: Real = 4.0;

/// Outer envelope of the RJ9 housing, subtracted from the case to make room.
pub fn rj9_cube() -> Solid {
    let [x, y, z] = RJ9_SIZE;
    Solid::cuboid(x, y, z)
}

/// RJ9 housing: the envelope with a socket cavity pushed toward the back,
/// leaving a cable-pass wall in front and a notch for the wire at half depth.
pub fn rj9_housing() -> Solid {
    let [x, y, z] = RJ9_SIZE;
    let inner_x = x - 2.0 * RJ9_WALL;
    let cavity = Solid::cuboid(inner_x, y - 2.0 * RJ9_WALL, z - 2.0 * RJ9_WALL)
        .translate(0.0, RJ9_WALL, 0.0);
    let wire_notch = Solid::cuboid(inner_x, y, RJ9_NOTCH_HEIGHT).translate(0.0, 0.0, RJ9_NOTCH_HEIGHT);
    rj9_cube().difference_all([cavity, wire_notch])
}

fn at_rj9_height(anchor: &Anchor, solid: &Solid) -> Solid {
    solid.translate(anchor.position.x, anchor.position.y, RJ9_CENTER_Z)
}

/// Room for the RJ9 housing above `anchor`.
pub fn rj9_space(anchor: &Anchor) -> Solid {
    at_rj9_height(anchor, &rj9_cube())
}

pub fn rj9_holder(anchor: &Anchor) -> Solid {
    at_rj9_height(anchor, &rj9_housing())
}

fn usb_center_z() -> Real {
    (USB_HOLDER_SIZE[2] + USB_HOLDER_THICKNESS) / 2.0
}

/// Solid block around the USB cavity, standing on the floor under `anchor`.
pub fn usb_holder(anchor: &Anchor) -> Solid {
    let [x, y, z] = USB_HOLDER_SIZE;
    Solid::cuboid(x + USB_HOLDER_THICKNESS, y, z + USB_HOLDER_THICKNESS).translate(
        anchor.position.x,
        anchor.position.y,
        usb_center_z(),
    )
}

/// The USB cavity itself, subtracted from [`usb_holder`] and the case wall.
pub fn usb_holder_hole(anchor: &Anchor) -> Solid {
    let [x, y, z] = USB_HOLDER_SIZE;
    Solid::cuboid(x, y, z).translate(anchor.position.x, anchor.position.y, usb_center_z())
}
