use crate::aabb::Aabb;
use crate::float_types::Real;
use nalgebra::{Unit, Vector3};

/// Boolean operations + transformations
pub trait CSG: Sized + Clone {
    fn new() -> Self;
    fn union(&self, other: &Self) -> Self;
    fn difference(&self, other: &Self) -> Self;
    fn hull(&self, other: &Self) -> Self;
    fn translate_vector(&self, vector: Vector3<Real>) -> Self;
    /// Rotation by `angle` radians about `axis` (right-hand rule).
    fn rotate_axis(&self, axis: Unit<Vector3<Real>>, angle: Real) -> Self;
    /// Reflect about the plane through the origin with normal `normal`.
    fn mirror(&self, normal: Vector3<Real>) -> Self;
    fn bounding_box(&self) -> Option<Aabb>;

    /// Returns a new Self translated by x, y, and z.
    fn translate(&self, x: Real, y: Real, z: Real) -> Self {
        self.translate_vector(Vector3::new(x, y, z))
    }

    fn rotate_x(&self, angle: Real) -> Self {
        self.rotate_axis(Vector3::x_axis(), angle)
    }

    fn rotate_y(&self, angle: Real) -> Self {
        self.rotate_axis(Vector3::y_axis(), angle)
    }

    fn rotate_z(&self, angle: Real) -> Self {
        self.rotate_axis(Vector3::z_axis(), angle)
    }

    /// Returns a new Self translated so that its bounding-box center is at the origin (0,0,0).
    fn center(&self) -> Self {
        match self.bounding_box() {
            Some(aabb) => self.translate_vector(-aabb.center().coords),
            None => self.clone(),
        }
    }

    /// Translates the object so that its bottommost point(s) sit exactly at z=0.
    fn float(&self) -> Self {
        match self.bounding_box() {
            Some(aabb) => self.translate(0.0, 0.0, -aabb.mins.z),
            None => self.clone(),
        }
    }
}
