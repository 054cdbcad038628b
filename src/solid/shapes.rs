//! Primitive constructors for `Solid`s

use crate::float_types::Real;
use crate::solid::Solid;
use geo::{LineString, Polygon as GeoPolygon};
use nalgebra::Vector3;

impl Solid {
    /// Box of `width` × `length` × `height` centered on the origin.
    ///
    /// # Example
    /// ```
    /// use dactyl_csg::solid::Solid;
    /// let plate = Solid::cuboid(17.4, 1.5, 4.0);
    /// ```
    pub fn cuboid(width: Real, length: Real, height: Real) -> Solid {
        Solid::Cuboid {
            size: Vector3::new(width, length, height),
        }
    }

    pub fn cube(width: Real) -> Solid {
        Self::cuboid(width, width, width)
    }

    /// Straight cylinder along Z, centered on the origin.
    ///
    /// `segments` is the facet count the renderer should use for the round faces.
    pub const fn cylinder(radius: Real, height: Real, segments: usize) -> Solid {
        Self::frustum(radius, radius, height, segments)
    }

    /// Truncated cone along Z, centered on the origin, `bottom_radius` at -height/2.
    pub const fn frustum(
        bottom_radius: Real,
        top_radius: Real,
        height: Real,
        segments: usize,
    ) -> Solid {
        Solid::Cylinder {
            bottom_radius,
            top_radius,
            height,
            segments,
        }
    }

    pub const fn sphere(radius: Real, segments: usize) -> Solid {
        Solid::Sphere { radius, segments }
    }

    /// Extrudes the polygon with boundary `points` (XY plane, in order) by `height`,
    /// centered on z = 0.
    ///
    /// # Example
    /// ```
    /// use dactyl_csg::solid::Solid;
    /// let pts = [[0.0, 0.0], [2.0, 0.0], [1.0, 1.5]];
    /// let prism = Solid::extrude_polygon(&pts, 0.1);
    /// ```
    pub fn extrude_polygon(points: &[[Real; 2]], height: Real) -> Solid {
        if points.len() < 3 {
            return Solid::Empty;
        }
        let ring: Vec<(Real, Real)> = points.iter().map(|&[x, y]| (x, y)).collect();
        // geo closes the ring for us
        let outline = GeoPolygon::new(LineString::from(ring), vec![]);
        Solid::LinearExtrude { outline, height }
    }

    /// Extruded rectangle of half extents `half_width` × `half_length`, the
    /// footprint shape keycaps are lofted between.
    pub fn extrude_rectangle(half_width: Real, half_length: Real, height: Real) -> Solid {
        Self::extrude_polygon(
            &[
                [half_width, half_length],
                [half_width, -half_length],
                [-half_width, -half_length],
                [-half_width, half_length],
            ],
            height,
        )
    }
}
