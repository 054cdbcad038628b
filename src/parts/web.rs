//! Web posts: slivers at the corners of a key mount that neighbouring keys and
//! the case walls are hulled between.

use crate::config::BoardConfig;
use crate::float_types::Real;
use crate::solid::Solid;
use crate::traits::CSG;
use nalgebra::Vector3;

pub const POST_SIZE: Real = 0.1;
const POST_ADJ: Real = POST_SIZE / 2.0;

/// A corner of the key mount. Top is toward row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    const fn signs(self) -> (Real, Real) {
        match self {
            Corner::TopLeft => (-1.0, 1.0),
            Corner::TopRight => (1.0, 1.0),
            Corner::BottomLeft => (-1.0, -1.0),
            Corner::BottomRight => (1.0, -1.0),
        }
    }
}

/// A post `web-thickness` long hanging from the top of the plate.
pub fn web_post(config: &BoardConfig) -> Solid {
    let web_thickness = config.web_thickness;
    Solid::cuboid(POST_SIZE, POST_SIZE, web_thickness).translate(
        0.0,
        0.0,
        web_thickness / -2.0 + config.plate_thickness(),
    )
}

/// Offset of a corner post's center: half the mount minus half the post.
pub fn corner_offset(config: &BoardConfig, corner: Corner) -> Vector3<Real> {
    let (sx, sy) = corner.signs();
    Vector3::new(
        sx * (config.mount_width() / 2.0 - POST_ADJ),
        sy * (config.mount_height() / 2.0 - POST_ADJ),
        0.0,
    )
}

pub fn web_post_at(config: &BoardConfig, corner: Corner) -> Solid {
    web_post(config).translate_vector(corner_offset(config, corner))
}

pub fn web_post_tr(config: &BoardConfig) -> Solid {
    web_post_at(config, Corner::TopRight)
}

pub fn web_post_tl(config: &BoardConfig) -> Solid {
    web_post_at(config, Corner::TopLeft)
}

pub fn web_post_bl(config: &BoardConfig) -> Solid {
    web_post_at(config, Corner::BottomLeft)
}

pub fn web_post_br(config: &BoardConfig) -> Solid {
    web_post_at(config, Corner::BottomRight)
}
