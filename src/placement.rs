//! Key placement: the translate/rotate sequence that takes a shape built at the
//! origin to a key's pose on the curved, tented board.
//!
//! A [`Placement`] is kept as the list of steps rather than a matrix, so the
//! same sequence can be emitted as `Translate`/`Rotate` nodes around a solid
//! (what the renderer sees) or folded into an isometry to move plain points
//! (what anchors and walls need). Both views always agree.

use crate::config::BoardConfig;
use crate::curvature::{column_radius, row_radius};
use crate::errors::BoardError;
use crate::float_types::Real;
use crate::solid::Solid;
use crate::traits::CSG;
use nalgebra::{Isometry3, Point3, Translation3, Unit, UnitQuaternion, Vector3};

/// Widening applied to the outer pinky key of the bottom row to make it 1.5u.
pub const WIDE_PINKY_OFFSET: Real = 5.5;

pub const DEFAULT_STAGGER_INDEX: [Real; 3] = [0.0, 0.0, 0.0];
pub const DEFAULT_STAGGER_MIDDLE: [Real; 3] = [0.0, 2.82, -4.5];
pub const DEFAULT_STAGGER_RING: [Real; 3] = [0.0, 0.0, 0.0];
pub const DEFAULT_STAGGER_PINKY: [Real; 3] = [0.0, -12.0, 5.64];

/// First column that uses the pinky curvature.
pub const PINKY_COLUMN: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn unit(self) -> Unit<Vector3<Real>> {
        match self {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        }
    }
}

/// One rigid motion in a placement sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    Translate(Vector3<Real>),
    Rotate { axis: Axis, angle: Real },
}

impl Step {
    pub fn apply(&self, solid: &Solid) -> Solid {
        match *self {
            Step::Translate(offset) => solid.translate_vector(offset),
            Step::Rotate { axis, angle } => solid.rotate_axis(axis.unit(), angle),
        }
    }

    pub fn isometry(&self) -> Isometry3<Real> {
        match *self {
            Step::Translate(offset) => Isometry3::from_parts(
                Translation3::from(offset),
                UnitQuaternion::identity(),
            ),
            Step::Rotate { axis, angle } => Isometry3::from_parts(
                Translation3::identity(),
                UnitQuaternion::from_axis_angle(&axis.unit(), angle),
            ),
        }
    }
}

/// An ordered sequence of steps; the first step is applied first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Placement {
    steps: Vec<Step>,
}

impl Placement {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pose of key `(column, row)`.
    ///
    /// Two nested cylindrical bends (rows around X, columns around Y), then
    /// the column stagger, then the board-wide tenting, X tilt and Z lift.
    pub fn key(config: &BoardConfig, column: usize, row: usize) -> Result<Self, BoardError> {
        let alpha = key_alpha(config, column);
        let beta = config.beta;
        let row_radius = row_radius(alpha, config.switch_type)?;
        let column_radius = column_radius(config, beta, config.switch_type)?;
        let row_angle = alpha * (config.center_row() - row as Real);
        let column_angle = beta * (config.centercol as Real - column as Real);

        tracing::trace!(column, row, row_angle, column_angle, "placing key");

        Ok(Self::new()
            .then_translate(Vector3::new(
                wide_pinky_offset(config, column, row),
                0.0,
                -row_radius,
            ))
            .then_rotate(Axis::X, row_angle)
            .then_translate(Vector3::new(0.0, 0.0, row_radius))
            .then_translate(Vector3::new(0.0, 0.0, -column_radius))
            .then_rotate(Axis::Y, column_angle)
            .then_translate(Vector3::new(0.0, 0.0, column_radius))
            .then_translate(column_offset(config, column))
            .then_rotate(Axis::Y, config.tenting_angle)
            .then_rotate(Axis::X, config.rotate_x_angle)
            .then_translate(Vector3::new(0.0, 0.0, config.z_offset)))
    }

    pub fn then(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn then_translate(self, offset: Vector3<Real>) -> Self {
        self.then(Step::Translate(offset))
    }

    pub fn then_rotate(self, axis: Axis, angle: Real) -> Self {
        self.then(Step::Rotate { axis, angle })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Wraps `solid` in one node per step.
    pub fn apply(&self, solid: &Solid) -> Solid {
        self.steps
            .iter()
            .fold(solid.clone(), |acc, step| step.apply(&acc))
    }

    pub fn isometry(&self) -> Isometry3<Real> {
        self.steps
            .iter()
            .fold(Isometry3::identity(), |acc, step| step.isometry() * acc)
    }

    pub fn transform_point(&self, point: &Point3<Real>) -> Point3<Real> {
        self.isometry().transform_point(point)
    }

    pub fn anchor(&self) -> Anchor {
        Anchor::from_isometry(&self.isometry())
    }
}

/// Row bend for a column: columns from [`PINKY_COLUMN`] on use the pinky angle.
pub fn key_alpha(config: &BoardConfig, column: usize) -> Real {
    if column >= PINKY_COLUMN {
        config.pinky_alpha()
    } else {
        config.alpha
    }
}

pub fn wide_pinky_offset(config: &BoardConfig, column: usize, row: usize) -> Real {
    if config.use_wide_pinky && column == config.last_col() && row == config.last_row() {
        WIDE_PINKY_OFFSET
    } else {
        0.0
    }
}

/// Per-finger stagger for `column`, zero unless `stagger?` is set.
pub fn column_offset(config: &BoardConfig, column: usize) -> Vector3<Real> {
    if !config.stagger {
        return Vector3::zeros();
    }
    let offset = match column {
        0 | 1 => config.stagger_index.unwrap_or(DEFAULT_STAGGER_INDEX),
        2 => config.stagger_middle.unwrap_or(DEFAULT_STAGGER_MIDDLE),
        3 => config.stagger_ring.unwrap_or(DEFAULT_STAGGER_RING),
        _ => config.stagger_pinky.unwrap_or(DEFAULT_STAGGER_PINKY),
    };
    Vector3::from(offset)
}

/// Moves `shape` from the origin to key `(column, row)`.
pub fn key_place(
    config: &BoardConfig,
    column: usize,
    row: usize,
    shape: &Solid,
) -> Result<Solid, BoardError> {
    Ok(Placement::key(config, column, row)?.apply(shape))
}

/// Where `position` (relative to an unplaced key) ends up for key `(column, row)`.
pub fn key_position(
    config: &BoardConfig,
    column: usize,
    row: usize,
    position: Vector3<Real>,
) -> Result<Point3<Real>, BoardError> {
    Ok(Placement::key(config, column, row)?.transform_point(&Point3::from(position)))
}

/// A reference frame in board space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub position: Point3<Real>,
    pub orientation: UnitQuaternion<Real>,
}

impl Anchor {
    pub fn at(position: Point3<Real>) -> Self {
        Self {
            position,
            orientation: UnitQuaternion::identity(),
        }
    }

    pub fn from_isometry(isometry: &Isometry3<Real>) -> Self {
        Self {
            position: Point3::from(isometry.translation.vector),
            orientation: isometry.rotation,
        }
    }

    pub fn isometry(&self) -> Isometry3<Real> {
        Isometry3::from_parts(Translation3::from(self.position.coords), self.orientation)
    }

    /// The same frame moved by `offset` in board space.
    pub fn shifted(&self, offset: Vector3<Real>) -> Self {
        Self {
            position: self.position + offset,
            orientation: self.orientation,
        }
    }
}

/// Places a part relative to an anchor.
pub type Positioner = fn(&Anchor, &Solid) -> Solid;

/// Rotates `solid` into the anchor's orientation, then moves it to the anchor.
pub fn posed(anchor: &Anchor, solid: &Solid) -> Solid {
    let rotated = match anchor.orientation.axis_angle() {
        Some((axis, angle)) => solid.rotate_axis(axis, angle),
        None => solid.clone(),
    };
    rotated.translate_vector(anchor.position.coords)
}

/// Moves `solid` to the anchor, ignoring its orientation.
pub fn translated(anchor: &Anchor, solid: &Solid) -> Solid {
    solid.translate_vector(anchor.position.coords)
}

/// Moves `solid` over the anchor's XY, keeping its own height.
pub fn on_floor(anchor: &Anchor, solid: &Solid) -> Solid {
    solid.translate(anchor.position.x, anchor.position.y, 0.0)
}
