//! Reference points hung off the key placement: the left wall and index column
//! anchors, and the stepped offsets the case skirt is built from.

use crate::config::BoardConfig;
use crate::errors::BoardError;
use crate::float_types::Real;
use crate::placement::{Anchor, key_position};
use crate::solid::Solid;
use crate::traits::CSG;
use nalgebra::{Point3, Vector3};

/// How far the left wall sits outside column 0.
pub const LEFT_WALL_X_OFFSET: Real = 10.0;
/// How far the left wall is dropped below column 0.
pub const LEFT_WALL_Z_OFFSET: Real = 3.0;

/// Horizontal step of the second and third skirt rings.
pub const WALL_XY_OFFSET: Real = 5.0;
/// Drop of the second and third skirt rings.
pub const WALL_Z_OFFSET: Real = -15.0;

/// Which edge of a key, along Y, an anchor refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Toward row 0 (+Y).
    Back,
    Middle,
    /// Toward the thumb (-Y).
    Front,
}

impl Edge {
    pub const fn sign(self) -> Real {
        match self {
            Edge::Back => 1.0,
            Edge::Middle => 0.0,
            Edge::Front => -1.0,
        }
    }
}

/// Outward direction of a wall segment in the XY plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facing {
    Back,
    Front,
    Left,
    Right,
    BackLeft,
    BackRight,
    FrontLeft,
    FrontRight,
}

impl Facing {
    /// `(dx, dy)` with components in {-1, 0, 1}.
    pub const fn direction(self) -> (Real, Real) {
        match self {
            Facing::Back => (0.0, 1.0),
            Facing::Front => (0.0, -1.0),
            Facing::Left => (-1.0, 0.0),
            Facing::Right => (1.0, 0.0),
            Facing::BackLeft => (-1.0, 1.0),
            Facing::BackRight => (1.0, 1.0),
            Facing::FrontLeft => (-1.0, -1.0),
            Facing::FrontRight => (1.0, -1.0),
        }
    }
}

/// First skirt ring: one wall thickness out, 1mm down.
pub fn wall_locate1(wall_thickness: Real, facing: Facing) -> Vector3<Real> {
    let (dx, dy) = facing.direction();
    Vector3::new(dx * wall_thickness, dy * wall_thickness, -1.0)
}

/// Second skirt ring: the fixed XY step and Z drop.
pub fn wall_locate2(facing: Facing) -> Vector3<Real> {
    let (dx, dy) = facing.direction();
    Vector3::new(dx * WALL_XY_OFFSET, dy * WALL_XY_OFFSET, WALL_Z_OFFSET)
}

/// Third skirt ring: the second ring pushed out by one more wall thickness.
pub fn wall_locate3(wall_thickness: Real, facing: Facing) -> Vector3<Real> {
    let (dx, dy) = facing.direction();
    let step = WALL_XY_OFFSET + wall_thickness;
    Vector3::new(dx * step, dy * step, WALL_Z_OFFSET)
}

fn wall_anchor_position(
    config: &BoardConfig,
    column: usize,
    row: usize,
    edge: Edge,
) -> Result<Point3<Real>, BoardError> {
    let corner = Vector3::new(
        config.mount_width() * -0.5,
        edge.sign() * config.mount_height() * 0.5,
        0.0,
    );
    let position = key_position(config, column, row, corner)?;
    Ok(position - Vector3::new(LEFT_WALL_X_OFFSET, 0.0, LEFT_WALL_Z_OFFSET))
}

/// Point on the left wall beside `row`.
pub fn left_key_position(
    config: &BoardConfig,
    row: usize,
    edge: Edge,
) -> Result<Point3<Real>, BoardError> {
    wall_anchor_position(config, 0, row, edge)
}

/// Same as [`left_key_position`] but measured from the index column (column 1).
pub fn index_key_position(
    config: &BoardConfig,
    row: usize,
    edge: Edge,
) -> Result<Point3<Real>, BoardError> {
    wall_anchor_position(config, 1, row, edge)
}

pub fn left_anchor(config: &BoardConfig, row: usize, edge: Edge) -> Result<Anchor, BoardError> {
    Ok(Anchor::at(left_key_position(config, row, edge)?))
}

pub fn index_anchor(config: &BoardConfig, row: usize, edge: Edge) -> Result<Anchor, BoardError> {
    Ok(Anchor::at(index_key_position(config, row, edge)?))
}

/// Moves `shape` (unrotated) to the left wall beside `row`.
pub fn left_key_place(
    config: &BoardConfig,
    row: usize,
    edge: Edge,
    shape: &Solid,
) -> Result<Solid, BoardError> {
    Ok(shape.translate_vector(left_key_position(config, row, edge)?.coords))
}
