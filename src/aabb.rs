use crate::float_types::Real;
use nalgebra::{Matrix4, Point3, Vector3};

/// Axis-aligned bounding box of a solid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}

impl Aabb {
    #[inline]
    pub const fn new(mins: Point3<Real>, maxs: Point3<Real>) -> Self {
        Self { mins, maxs }
    }

    /// Box centered on the origin with the given half extents.
    pub fn from_half_extents(half: Vector3<Real>) -> Self {
        Self::new(Point3::from(-half), Point3::from(half))
    }

    /// Smallest box containing every point, `None` for an empty iterator.
    pub fn from_points<I: IntoIterator<Item = Point3<Real>>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), |acc, p| Self {
            mins: acc.mins.inf(&p),
            maxs: acc.maxs.sup(&p),
        }))
    }

    #[inline]
    pub fn merged(&self, other: &Self) -> Self {
        Self::new(self.mins.inf(&other.mins), self.maxs.sup(&other.maxs))
    }

    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.maxs.x >= other.mins.x
            && self.mins.x <= other.maxs.x
            && self.maxs.y >= other.mins.y
            && self.mins.y <= other.maxs.y
            && self.maxs.z >= other.mins.z
            && self.mins.z <= other.maxs.z
    }

    #[inline]
    pub fn center(&self) -> Point3<Real> {
        nalgebra::center(&self.mins, &self.maxs)
    }

    #[inline]
    pub fn extents(&self) -> Vector3<Real> {
        self.maxs - self.mins
    }

    /// The eight corners, bottom face first.
    pub fn corners(&self) -> [Point3<Real>; 8] {
        let (a, b) = (self.mins, self.maxs);
        [
            Point3::new(a.x, a.y, a.z),
            Point3::new(b.x, a.y, a.z),
            Point3::new(b.x, b.y, a.z),
            Point3::new(a.x, b.y, a.z),
            Point3::new(a.x, a.y, b.z),
            Point3::new(b.x, a.y, b.z),
            Point3::new(b.x, b.y, b.z),
            Point3::new(a.x, b.y, b.z),
        ]
    }

    /// Box around the transformed corners. Exact for translations, mirrors and
    /// quarter turns, conservative for everything else.
    pub fn transformed(&self, matrix: &Matrix4<Real>) -> Self {
        let corners = self.corners().map(|c| matrix.transform_point(&c));
        let mut out = Self::new(corners[0], corners[0]);
        for c in &corners[1..] {
            out.mins = out.mins.inf(c);
            out.maxs = out.maxs.sup(c);
        }
        out
    }
}
