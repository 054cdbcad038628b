//! Screw bosses and the voids cut into them.

use crate::float_types::{FRAC_PI_3, Real};
use crate::solid::Solid;
use crate::traits::CSG;

pub const SCREW_INSERT_HEIGHT: Real = 3.8;
pub const SCREW_INSERT_BOTTOM_RADIUS: Real = 5.31 / 2.0;
pub const SCREW_INSERT_TOP_RADIUS: Real = 5.1 / 2.0;
/// Material left around the insert in the case boss.
pub const SCREW_INSERT_WALL: Real = 1.6;
pub const SCREW_INSERT_OUTER_EXTRA_HEIGHT: Real = 1.5;

/// Across-flats width of the bolt head pocket (M3).
pub const HEX_ACROSS_FLATS: Real = 5.5;
pub const SCREW_SHAFT_RADIUS: Real = 1.7;

/// Bottom plate hole: shaft plus a counterbore for the screw head.
pub const PLATE_HOLE_HEIGHT: Real = 3.0;
pub const PLATE_HOLE_HEAD_RADIUS: Real = 3.0;
pub const PLATE_HOLE_HEAD_HEIGHT: Real = 1.5;

/// The three shapes that share one screw position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InsertKind {
    /// Boss added to the case wall.
    Outer,
    /// Void cut into the boss that holds a hex bolt head.
    BoltHole,
    /// Counterbored hole through the bottom plate.
    PlateHole,
}

impl InsertKind {
    pub fn height(self) -> Real {
        match self {
            InsertKind::Outer => SCREW_INSERT_HEIGHT + SCREW_INSERT_OUTER_EXTRA_HEIGHT,
            InsertKind::BoltHole => SCREW_INSERT_HEIGHT,
            InsertKind::PlateHole => PLATE_HOLE_HEIGHT,
        }
    }

    /// The shape centered on the origin, `height()` tall.
    pub fn shape(self, segments: usize) -> Solid {
        match self {
            InsertKind::Outer => screw_insert_shape(
                SCREW_INSERT_BOTTOM_RADIUS + SCREW_INSERT_WALL,
                SCREW_INSERT_TOP_RADIUS + SCREW_INSERT_WALL,
                self.height(),
                segments,
            ),
            InsertKind::BoltHole => hex_bolt_hole(self.height(), segments),
            InsertKind::PlateHole => plate_screw_hole(segments),
        }
    }
}

/// Tapered cylinder capped with a dome.
pub fn screw_insert_shape(
    bottom_radius: Real,
    top_radius: Real,
    height: Real,
    segments: usize,
) -> Solid {
    Solid::frustum(bottom_radius, top_radius, height, segments).union(
        &Solid::sphere(top_radius, segments).translate(0.0, 0.0, height / 2.0),
    )
}

/// Hex pocket built from three slits at 60° steps, a domed top and the shaft
/// running up through it.
pub fn hex_bolt_hole(height: Real, segments: usize) -> Solid {
    let side = HEX_ACROSS_FLATS / (3.0 as Real).sqrt();
    let slit = Solid::cuboid(side, HEX_ACROSS_FLATS, height);
    let slits = (0..3).map(|i| slit.rotate_z(FRAC_PI_3 * i as Real));
    let dome = Solid::sphere(HEX_ACROSS_FLATS / 2.0, segments).translate(0.0, 0.0, height / 2.0);
    let shaft = Solid::cylinder(SCREW_SHAFT_RADIUS, height * 2.0, segments)
        .translate(0.0, 0.0, height);
    Solid::union_all(slits.chain([dome, shaft]))
}

/// Shaft through the plate with a wider counterbore at the bottom.
pub fn plate_screw_hole(segments: usize) -> Solid {
    let shaft = Solid::cylinder(SCREW_SHAFT_RADIUS, PLATE_HOLE_HEIGHT, segments);
    let head = Solid::cylinder(PLATE_HOLE_HEAD_RADIUS, PLATE_HOLE_HEAD_HEIGHT, segments)
        .translate(0.0, 0.0, (PLATE_HOLE_HEAD_HEIGHT - PLATE_HOLE_HEIGHT) / 2.0);
    shaft.union(&head)
}
