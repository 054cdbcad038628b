//! Radii of the two cylinders the key well is bent around, and the row/column
//! bookkeeping the placement formulas share.

use crate::config::BoardConfig;
use crate::errors::BoardError;
use crate::float_types::{EPSILON, Real};
use crate::switch::SwitchType;

/// Gap between neighbouring keys along a column.
pub const EXTRA_HEIGHT: Real = 1.0;

/// Gap between neighbouring columns; boards taller than five rows get more room.
pub fn extra_width(nrows: usize) -> Real {
    if nrows > 5 { 3.5 } else { 2.5 }
}

/// Chord half-length over `sin(angle / 2)`: the radius of a circle on which
/// consecutive chords of `2 * half_chord` subtend `angle`.
fn arc_radius(half_chord: Real, angle: Real, name: &'static str) -> Result<Real, BoardError> {
    let sin = (angle / 2.0).sin();
    // full turns (2π, 4π, ...) collapse the arc just like zero does
    if !sin.is_finite() || sin.abs() < EPSILON {
        return Err(BoardError::ZeroBendAngle { name });
    }
    Ok(half_chord / sin)
}

/// Radius of the arc a column of keys sits on, measured to the keycap tops.
pub fn row_radius(alpha: Real, switch_type: SwitchType) -> Result<Real, BoardError> {
    let geometry = switch_type.geometry();
    let half_chord = (geometry.mount_height() + EXTRA_HEIGHT) / 2.0;
    Ok(arc_radius(half_chord, alpha, "alpha")? + geometry.cap_top_height())
}

/// Radius of the arc a row of keys sits on, measured to the keycap tops.
pub fn column_radius(
    config: &BoardConfig,
    beta: Real,
    switch_type: SwitchType,
) -> Result<Real, BoardError> {
    let geometry = switch_type.geometry();
    let half_chord = (geometry.mount_width() + extra_width(config.nrows)) / 2.0;
    Ok(arc_radius(half_chord, beta, "beta")? + geometry.cap_top_height())
}

/// The (possibly fractional) row with zero row bend, placed so the home row
/// sits at the bottom of the curve.
pub fn center_row(nrows: usize) -> Real {
    let subtractor = match nrows {
        3 => 2.5,
        2 => 2.0,
        _ => 3.0,
    };
    nrows as Real - subtractor
}

pub const fn last_row(nrows: usize) -> usize {
    nrows.saturating_sub(1)
}

pub const fn corner_row(nrows: usize) -> usize {
    nrows.saturating_sub(2)
}

pub const fn middle_row(nrows: usize) -> usize {
    nrows.saturating_sub(3)
}

pub const fn last_col(ncols: usize) -> usize {
    ncols.saturating_sub(1)
}
