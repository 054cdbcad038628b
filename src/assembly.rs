//! Peripheral assembly: parts from [`crate::parts`] moved to where the board
//! needs them, using the key placement and the anchors derived from it.

use crate::anchors::{
    Edge, Facing, left_key_place, left_key_position, wall_locate1, wall_locate2, wall_locate3,
};
use crate::config::BoardConfig;
use crate::errors::BoardError;
use crate::float_types::Real;
use crate::parts::connectors;
use crate::parts::inserts::InsertKind;
use crate::parts::keycap::{KeycapSize, sa_cap};
use crate::parts::plate::single_plate;
use crate::parts::sbc::sbc_mount_holes;
use crate::parts::web::{Corner, web_post, web_post_at};
use crate::placement::{Anchor, Placement, Positioner, key_place, key_position};
use crate::solid::Solid;
use crate::traits::CSG;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Where the RJ9 housing sits relative to its wall anchor.
const RJ9_WALL_INSET: Real = -3.0;

/// Which way a screw insert is pushed to land on the case wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WallShift {
    Right,
    Left,
    Up,
    Down,
}

/// Column edges win over row edges; interior keys fall through to `Right`.
pub fn wall_shift(config: &BoardConfig, column: usize, row: usize) -> WallShift {
    let shift_right = column == config.last_col();
    let shift_left = column == 0;
    let on_column_edge = shift_right || shift_left;
    if !on_column_edge && row == 0 {
        WallShift::Up
    } else if !on_column_edge && row >= config.last_row() {
        WallShift::Down
    } else if shift_left {
        WallShift::Left
    } else {
        WallShift::Right
    }
}

/// XY position (z is whatever the anchor math produced) of the screw insert
/// hung off key `(column, row)`.
pub fn screw_insert_position(
    config: &BoardConfig,
    column: usize,
    row: usize,
) -> Result<Point3<Real>, BoardError> {
    let half_width = config.mount_width() / 2.0;
    let half_height = config.mount_height() / 2.0;
    match wall_shift(config, column, row) {
        WallShift::Up => key_position(
            config,
            column,
            row,
            wall_locate2(Facing::Back) + Vector3::new(0.0, half_height, 0.0),
        ),
        WallShift::Down => key_position(
            config,
            column,
            row,
            wall_locate2(Facing::Front) - Vector3::new(0.0, half_height, 0.0),
        ),
        WallShift::Left => Ok(left_key_position(config, row, Edge::Middle)?
            + wall_locate3(config.wall_thickness, Facing::Left)),
        WallShift::Right => key_position(
            config,
            column,
            row,
            wall_locate2(Facing::Right) + Vector3::new(half_width, 0.0, 0.0),
        ),
    }
}

/// `shape` (centered, `height` tall) standing on the floor at the insert
/// position for key `(column, row)`.
pub fn screw_insert(
    config: &BoardConfig,
    column: usize,
    row: usize,
    shape: &Solid,
    height: Real,
) -> Result<Solid, BoardError> {
    let position = screw_insert_position(config, column, row)?;
    tracing::debug!(
        column,
        row,
        shift = ?wall_shift(config, column, row),
        x = position.x,
        y = position.y,
        "placing screw insert"
    );
    Ok(shape.translate(position.x, position.y, height / 2.0))
}

/// The keys screw inserts hang off: both left corners, the middle of the
/// front and back walls, and near the top of the right wall.
pub fn screw_insert_positions(config: &BoardConfig) -> Vec<(usize, usize)> {
    let last_col = config.last_col();
    let mut positions = vec![
        (0, 0),
        (0, config.corner_row()),
        (3.min(last_col), config.last_row()),
        (3.min(last_col), 0),
        (last_col, 1),
    ];
    positions.sort_unstable();
    positions.dedup();
    positions
}

pub fn screw_insert_all_shapes(config: &BoardConfig, kind: InsertKind) -> Result<Solid, BoardError> {
    let shape = kind.shape(config.resolution);
    let inserts = screw_insert_positions(config)
        .into_iter()
        .map(|(column, row)| screw_insert(config, column, row, &shape, kind.height()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Solid::union_all(inserts))
}

/// Bosses added to the case.
pub fn screw_insert_outers(config: &BoardConfig) -> Result<Solid, BoardError> {
    screw_insert_all_shapes(config, InsertKind::Outer)
}

/// Bolt voids subtracted from the bosses.
pub fn screw_insert_holes(config: &BoardConfig) -> Result<Solid, BoardError> {
    screw_insert_all_shapes(config, InsertKind::BoltHole)
}

/// Matching holes in the bottom plate.
pub fn screw_insert_screw_holes(config: &BoardConfig) -> Result<Solid, BoardError> {
    screw_insert_all_shapes(config, InsertKind::PlateHole)
}

/// Floor anchor for the RJ9 housing, just inside the back wall of column 0.
pub fn rj9_start(config: &BoardConfig) -> Result<Anchor, BoardError> {
    let position = key_position(
        config,
        0,
        0,
        wall_locate3(config.wall_thickness, Facing::Back)
            + Vector3::new(0.0, config.mount_height() / 2.0, 0.0),
    )?;
    Ok(Anchor::at(position + Vector3::new(0.0, RJ9_WALL_INSET, 0.0)))
}

pub fn rj9_space(config: &BoardConfig) -> Result<Solid, BoardError> {
    Ok(connectors::rj9_space(&rj9_start(config)?))
}

pub fn rj9_holder(config: &BoardConfig) -> Result<Solid, BoardError> {
    Ok(connectors::rj9_holder(&rj9_start(config)?))
}

/// Floor anchor for the USB housing, on the back wall of column 1.
pub fn usb_holder_position(config: &BoardConfig) -> Result<Anchor, BoardError> {
    let position = key_position(
        config,
        1,
        0,
        wall_locate2(Facing::Back) + Vector3::new(0.0, config.mount_height() / 2.0, 0.0),
    )?;
    Ok(Anchor::at(position))
}

pub fn usb_holder(config: &BoardConfig) -> Result<Solid, BoardError> {
    Ok(connectors::usb_holder(&usb_holder_position(config)?))
}

pub fn usb_holder_hole(config: &BoardConfig) -> Result<Solid, BoardError> {
    Ok(connectors::usb_holder_hole(&usb_holder_position(config)?))
}

/// Controller mounting holes for this board half, placed by `positioner`.
pub fn sbc_holes(
    config: &BoardConfig,
    anchor: &Anchor,
    positioner: Positioner,
    depth: Real,
) -> Solid {
    positioner(anchor, &sbc_mount_holes(config.side(), depth, config.resolution))
}

/// Geometry is authored as the right half; the left half is its mirror image.
pub fn for_side(config: &BoardConfig, solid: &Solid) -> Solid {
    if config.is_right {
        solid.clone()
    } else {
        solid.mirror(-Vector3::x())
    }
}

#[cfg(not(feature = "parallel"))]
fn place_at_keys(config: &BoardConfig, shape: &Solid) -> Result<Vec<Solid>, BoardError> {
    config
        .key_coordinates()
        .iter()
        .map(|&(column, row)| key_place(config, column, row, shape))
        .collect()
}

#[cfg(feature = "parallel")]
fn place_at_keys(config: &BoardConfig, shape: &Solid) -> Result<Vec<Solid>, BoardError> {
    config
        .key_coordinates()
        .par_iter()
        .map(|&(column, row)| key_place(config, column, row, shape))
        .collect()
}

/// A switch plate at every key.
pub fn key_holes(config: &BoardConfig) -> Result<Solid, BoardError> {
    Ok(Solid::union_all(place_at_keys(config, &single_plate(config))?))
}

/// Keycap previews at every key; the wide pinky key gets a 1.5u cap.
pub fn caps(config: &BoardConfig) -> Result<Solid, BoardError> {
    let plate_thickness = config.plate_thickness();
    let caps = config
        .key_coordinates()
        .into_iter()
        .map(|(column, row)| {
            let size = if config.use_wide_pinky
                && column == config.last_col()
                && row == config.last_row()
            {
                KeycapSize::OneAndHalf
            } else {
                KeycapSize::One
            };
            key_place(config, column, row, &sa_cap(size, plate_thickness))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Solid::union_all(caps))
}

/// Hulls of every three consecutive shapes, unioned. Stitches a strip of
/// posts into a continuous surface.
pub fn triangle_hulls(shapes: &[Solid]) -> Solid {
    Solid::union_all(
        shapes
            .windows(3)
            .map(|window| Solid::hull_all(window.iter().cloned())),
    )
}

fn post_at(
    config: &BoardConfig,
    column: usize,
    row: usize,
    corner: Corner,
) -> Result<Solid, BoardError> {
    key_place(config, column, row, &web_post_at(config, corner))
}

/// Web between neighbouring keys: across columns, down rows, and the
/// diagonal gaps where four keys meet.
pub fn connectors(config: &BoardConfig) -> Result<Solid, BoardError> {
    let exists = |column: usize, row: usize| config.key_exists(column, row);
    let mut strips = Vec::new();

    for column in 0..config.last_col() {
        for row in 0..config.nrows {
            if exists(column, row) && exists(column + 1, row) {
                strips.push(triangle_hulls(&[
                    post_at(config, column + 1, row, Corner::TopLeft)?,
                    post_at(config, column, row, Corner::TopRight)?,
                    post_at(config, column + 1, row, Corner::BottomLeft)?,
                    post_at(config, column, row, Corner::BottomRight)?,
                ]));
            }
        }
    }

    for column in 0..config.ncols {
        for row in 0..config.last_row() {
            if exists(column, row) && exists(column, row + 1) {
                strips.push(triangle_hulls(&[
                    post_at(config, column, row, Corner::BottomLeft)?,
                    post_at(config, column, row, Corner::BottomRight)?,
                    post_at(config, column, row + 1, Corner::TopLeft)?,
                    post_at(config, column, row + 1, Corner::TopRight)?,
                ]));
            }
        }
    }

    for column in 0..config.last_col() {
        for row in 0..config.last_row() {
            if exists(column, row)
                && exists(column, row + 1)
                && exists(column + 1, row)
                && exists(column + 1, row + 1)
            {
                strips.push(triangle_hulls(&[
                    post_at(config, column, row, Corner::BottomRight)?,
                    post_at(config, column, row + 1, Corner::TopRight)?,
                    post_at(config, column + 1, row, Corner::BottomLeft)?,
                    post_at(config, column + 1, row + 1, Corner::TopLeft)?,
                ]));
            }
        }
    }

    Ok(Solid::union_all(strips))
}

/// One end of a wall segment: a post, where it sits, and which way the wall
/// steps out from it.
#[derive(Clone, Debug, PartialEq)]
pub struct WallEnd {
    pub placement: Placement,
    pub facing: Facing,
    pub post: Solid,
}

impl WallEnd {
    pub fn key(
        config: &BoardConfig,
        column: usize,
        row: usize,
        facing: Facing,
        corner: Corner,
    ) -> Result<Self, BoardError> {
        Ok(Self {
            placement: Placement::key(config, column, row)?,
            facing,
            post: web_post_at(config, corner),
        })
    }

    /// A bare post on the left wall beside `row`.
    pub fn left(
        config: &BoardConfig,
        row: usize,
        edge: Edge,
        facing: Facing,
    ) -> Result<Self, BoardError> {
        let position = left_key_position(config, row, edge)?;
        Ok(Self {
            placement: Placement::new().then_translate(position.coords),
            facing,
            post: web_post(config),
        })
    }

    /// The post and its three skirt steps.
    fn skirt(&self, wall_thickness: Real) -> [Solid; 4] {
        [
            Vector3::zeros(),
            wall_locate1(wall_thickness, self.facing),
            wall_locate2(self.facing),
            wall_locate3(wall_thickness, self.facing),
        ]
        .map(|offset| self.placement.apply(&self.post.translate_vector(offset)))
    }
}

/// Skirt wall between two posts: the hull of both posts stepped out through
/// the three wall offsets.
pub fn wall_brace(config: &BoardConfig, from: &WallEnd, to: &WallEnd) -> Solid {
    let wall_thickness = config.wall_thickness;
    Solid::hull_all(
        from.skirt(wall_thickness)
            .into_iter()
            .chain(to.skirt(wall_thickness)),
    )
}

pub fn key_wall_brace(
    config: &BoardConfig,
    (column1, row1): (usize, usize),
    facing1: Facing,
    corner1: Corner,
    (column2, row2): (usize, usize),
    facing2: Facing,
    corner2: Corner,
) -> Result<Solid, BoardError> {
    Ok(wall_brace(
        config,
        &WallEnd::key(config, column1, row1, facing1, corner1)?,
        &WallEnd::key(config, column2, row2, facing2, corner2)?,
    ))
}

/// Lowest row with a key in `column`.
fn bottom_row(config: &BoardConfig, column: usize) -> usize {
    (0..config.nrows)
        .rev()
        .find(|&row| config.key_exists(column, row))
        .unwrap_or(0)
}

/// The skirt around the whole key well.
pub fn case_walls(config: &BoardConfig) -> Result<Solid, BoardError> {
    let last_col = config.last_col();
    let mut walls = Vec::new();

    // back
    for column in 0..config.ncols {
        walls.push(key_wall_brace(
            config,
            (column, 0),
            Facing::Back,
            Corner::TopLeft,
            (column, 0),
            Facing::Back,
            Corner::TopRight,
        )?);
        if column < last_col {
            walls.push(key_wall_brace(
                config,
                (column, 0),
                Facing::Back,
                Corner::TopRight,
                (column + 1, 0),
                Facing::Back,
                Corner::TopLeft,
            )?);
        }
    }
    walls.push(key_wall_brace(
        config,
        (last_col, 0),
        Facing::Back,
        Corner::TopRight,
        (last_col, 0),
        Facing::Right,
        Corner::TopRight,
    )?);

    // right
    let right_bottom = bottom_row(config, last_col);
    for row in 0..=right_bottom {
        walls.push(key_wall_brace(
            config,
            (last_col, row),
            Facing::Right,
            Corner::TopRight,
            (last_col, row),
            Facing::Right,
            Corner::BottomRight,
        )?);
        if row < right_bottom {
            walls.push(key_wall_brace(
                config,
                (last_col, row),
                Facing::Right,
                Corner::BottomRight,
                (last_col, row + 1),
                Facing::Right,
                Corner::TopRight,
            )?);
        }
    }
    walls.push(key_wall_brace(
        config,
        (last_col, right_bottom),
        Facing::Right,
        Corner::BottomRight,
        (last_col, right_bottom),
        Facing::Front,
        Corner::BottomRight,
    )?);

    // front
    for column in 0..config.ncols {
        let row = bottom_row(config, column);
        walls.push(key_wall_brace(
            config,
            (column, row),
            Facing::Front,
            Corner::BottomLeft,
            (column, row),
            Facing::Front,
            Corner::BottomRight,
        )?);
        if column < last_col {
            walls.push(key_wall_brace(
                config,
                (column, row),
                Facing::Front,
                Corner::BottomRight,
                (column + 1, bottom_row(config, column + 1)),
                Facing::Front,
                Corner::BottomLeft,
            )?);
        }
    }

    // left, hung off the left wall anchors
    let left_bottom = bottom_row(config, 0);
    let post = web_post(config);
    for row in 0..=left_bottom {
        walls.push(wall_brace(
            config,
            &WallEnd::left(config, row, Edge::Back, Facing::Left)?,
            &WallEnd::left(config, row, Edge::Front, Facing::Left)?,
        ));
        walls.push(Solid::hull_all([
            key_place(config, 0, row, &web_post_at(config, Corner::TopLeft))?,
            key_place(config, 0, row, &web_post_at(config, Corner::BottomLeft))?,
            left_key_place(config, row, Edge::Back, &post)?,
            left_key_place(config, row, Edge::Front, &post)?,
        ]));
        if row < left_bottom {
            walls.push(wall_brace(
                config,
                &WallEnd::left(config, row, Edge::Front, Facing::Left)?,
                &WallEnd::left(config, row + 1, Edge::Back, Facing::Left)?,
            ));
        }
    }
    walls.push(wall_brace(
        config,
        &WallEnd::key(config, 0, 0, Facing::Back, Corner::TopLeft)?,
        &WallEnd::left(config, 0, Edge::Back, Facing::Back)?,
    ));
    walls.push(wall_brace(
        config,
        &WallEnd::left(config, left_bottom, Edge::Front, Facing::Front)?,
        &WallEnd::key(config, 0, left_bottom, Facing::Front, Corner::BottomLeft)?,
    ));

    tracing::debug!(segments = walls.len(), "built case walls");
    Ok(Solid::union_all(walls))
}
