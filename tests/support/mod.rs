//! Test support library
//! Provides reference board configurations and float helpers for tests.

#![allow(dead_code)]

use dactyl_csg::{BoardConfig, CSG, Solid, float_types::Real};
use nalgebra::{Point3, Vector3};

/// Returns the bounding box `[min_x, min_y, min_z, max_x, max_y, max_z]`
/// of a solid. Panics on an empty solid.
pub fn bounding_box(solid: &Solid) -> [Real; 6] {
    let bb = solid
        .bounding_box()
        .expect("solid should not be empty");
    [
        bb.mins.x, bb.mins.y, bb.mins.z, bb.maxs.x, bb.maxs.y, bb.maxs.z,
    ]
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

pub fn approx_eq_point(a: &Point3<Real>, b: &Point3<Real>, eps: Real) -> bool {
    (a - b).norm() < eps
}

pub fn approx_eq_vector(a: &Vector3<Real>, b: &Vector3<Real>, eps: Real) -> bool {
    (a - b).norm() < eps
}

/// A five row, six column MX board with a 13mm lift and a light tent.
pub const REFERENCE_JSON: &str = r#"{
    "nrows": 5,
    "ncols": 6,
    "alpha": 0.2967,
    "beta": 0.1396,
    "centercol": 2,
    "tenting-angle": 0.1047,
    "switch-type": "plain-mx",
    "z-offset": 13,
    "wall-thickness": 5,
    "web-thickness": 7,
    "rotate-x-angle": 0,
    "use-hotswap?": false,
    "use-wide-pinky?": false,
    "is-right?": false
}"#;

pub fn reference_config() -> BoardConfig {
    BoardConfig::from_json_str(REFERENCE_JSON).expect("reference config should parse")
}

/// The default board with tenting, tilt and lift all removed, so the
/// curvature is the only thing moving keys.
pub fn flat_config() -> BoardConfig {
    BoardConfig {
        tenting_angle: 0.0,
        rotate_x_angle: 0.0,
        z_offset: 0.0,
        ..BoardConfig::default()
    }
}
