//! Switch plates: the four-wall frame a switch clips into, with the family
//! specific retention feature and an optional hotswap cradle underneath.

use crate::config::BoardConfig;
use crate::float_types::{FRAC_PI_2, Real};
use crate::solid::Solid;
use crate::switch::{HotswapCradle, SwitchGeometry, WallFeature};
use crate::traits::CSG;
use nalgebra::Vector3;

/// Height of the block the MX side nub is hulled onto.
pub const SIDE_NUB_THICKNESS: Real = 4.0;
pub const SIDE_NUB_RADIUS: Real = 1.0;
pub const SIDE_NUB_LENGTH: Real = 2.75;
/// Thickness of the ledge the Alps clip hooks under.
pub const ALPS_LEDGE_THICKNESS: Real = 1.5;

/// The full plate for one key: the walls around the switch cutout, the
/// optional solid fill and the optional hotswap cradle.
pub fn single_plate(config: &BoardConfig) -> Solid {
    let geometry = config.geometry();
    let quadrant = plate_quadrant(&geometry, config.resolution);
    let opposite = quadrant
        .mirror(Vector3::x())
        .mirror(Vector3::y());

    let mut parts = vec![quadrant, opposite];
    if config.plate_projection {
        parts.push(fill_in(&geometry));
    }
    if config.use_hotswap {
        match geometry.hotswap {
            Some(cradle) => parts.push(hotswap_cradle(&geometry, &cradle, config.resolution)),
            None => tracing::warn!(
                switch_type = config.switch_type.name(),
                "switch type has no hotswap socket, building a soldered plate"
            ),
        }
    }
    Solid::union_all(parts)
}

/// Top wall and right wall with the retention feature. Mirroring it through
/// both X and Y yields the other two walls.
pub fn plate_quadrant(geometry: &SwitchGeometry, segments: usize) -> Solid {
    let thickness = geometry.plate_thickness;
    let rim = geometry.rim;
    let top_wall_y = rim / 2.0 + geometry.cutout_height / 2.0;
    let side_wall_x = rim / 2.0 + geometry.cutout_width / 2.0;

    let top_wall = Solid::cuboid(geometry.mount_width(), rim, thickness)
        .translate(0.0, top_wall_y, thickness / 2.0);
    let side_wall = Solid::cuboid(rim, geometry.mount_height(), thickness)
        .translate(side_wall_x, 0.0, thickness / 2.0);

    match geometry.wall_feature {
        WallFeature::Plain => Solid::union_all([top_wall, side_wall]),
        WallFeature::SideNub { raise } => {
            let nub = Solid::cylinder(SIDE_NUB_RADIUS, SIDE_NUB_LENGTH, segments)
                .rotate_x(FRAC_PI_2)
                .translate(geometry.cutout_width / 2.0, 0.0, 1.0)
                .hull(
                    &Solid::cuboid(rim, SIDE_NUB_LENGTH, SIDE_NUB_THICKNESS).translate(
                        side_wall_x,
                        0.0,
                        SIDE_NUB_THICKNESS / 2.0,
                    ),
                )
                .translate(0.0, 0.0, thickness - SIDE_NUB_THICKNESS + raise);
            Solid::union_all([top_wall, side_wall, nub])
        },
        WallFeature::AlpsNotch { width, height } => {
            let ledge = Solid::cuboid(ALPS_LEDGE_THICKNESS, geometry.mount_height(), height)
                .translate(
                    ALPS_LEDGE_THICKNESS / 2.0 + width / 2.0,
                    0.0,
                    thickness - height / 2.0,
                );
            Solid::union_all([top_wall, side_wall, ledge])
        },
        WallFeature::KailhCutout { width } => {
            let slot = Solid::cuboid(width, rim, thickness / 2.0)
                .translate(0.0, top_wall_y, thickness / 2.0);
            Solid::union_all([top_wall.difference(&slot), side_wall])
        },
    }
}

/// Solid square closing the cutout, for plates printed as one flat sheet.
pub fn fill_in(geometry: &SwitchGeometry) -> Solid {
    Solid::cuboid(
        geometry.cutout_width,
        geometry.cutout_height,
        geometry.plate_thickness,
    )
    .translate(0.0, 0.0, geometry.plate_thickness / 2.0)
}

/// Block under the plate with the socket holes cut through it: the switch
/// center post, both contact pins and the two friction pins.
pub fn hotswap_cradle(geometry: &SwitchGeometry, cradle: &HotswapCradle, segments: usize) -> Solid {
    let height = cradle.height;
    let base = Solid::cuboid(geometry.mount_width(), geometry.mount_height(), height)
        .translate(0.0, 0.0, -height / 2.0);

    let hole = |diameter: Real, [x, y]: [Real; 2]| {
        Solid::cylinder(diameter / 2.0, height + 2.0, segments).translate(x, y, -height / 2.0)
    };

    let mut holes = vec![hole(cradle.main_hole_diameter, [0.0, 0.0])];
    holes.extend(
        cradle
            .pin_offsets
            .iter()
            .map(|&at| hole(cradle.pin_hole_diameter, at)),
    );
    holes.extend(
        cradle
            .friction_offsets
            .iter()
            .map(|&at| hole(cradle.friction_hole_diameter, at)),
    );
    base.difference_all(holes)
}
