//! Mounting holes for a Raspberry Pi Pico style controller board.

use crate::config::Side;
use crate::float_types::Real;
use crate::solid::Solid;
use crate::traits::CSG;

/// Center-to-center distance of the mounting holes across the board.
pub const SBC_HOLE_DISTANCE_X: Real = 11.4;
/// Center-to-center distance of the mounting holes along the board.
pub const SBC_HOLE_DISTANCE_Y: Real = 47.0;
pub const SBC_HOLE_RADIUS: Real = 2.1 / 2.0;
pub const SBC_RESET_RADIUS: Real = 2.0;
/// Reset button position on the right half; X flips on the left half.
pub const SBC_RESET_OFFSET: [Real; 2] = [3.75, 15.0];

/// Four corner screw holes and the reset button access hole, `depth` tall,
/// centered on the board's middle.
pub fn sbc_mount_holes(side: Side, depth: Real, segments: usize) -> Solid {
    let dx = SBC_HOLE_DISTANCE_X / 2.0;
    let dy = SBC_HOLE_DISTANCE_Y / 2.0;
    let hole = Solid::cylinder(SBC_HOLE_RADIUS, depth, segments);
    let corners = [(-dx, -dy), (dx, -dy), (-dx, dy), (dx, dy)]
        .map(|(x, y)| hole.translate(x, y, 0.0));

    let [reset_x, reset_y] = SBC_RESET_OFFSET;
    let reset = Solid::cylinder(SBC_RESET_RADIUS, depth, segments).translate(
        side.sign() * reset_x,
        reset_y,
        0.0,
    );
    Solid::union_all(corners.into_iter().chain([reset]))
}
