//! `Solid` operation tree and implementations of the `CSG` trait for `Solid`
//!
//! Nothing here evaluates booleans. A `Solid` is a description of primitives and
//! the operations that combine them, handed to whatever renderer consumes it.

use crate::aabb::Aabb;
use crate::float_types::{EPSILON, Real};
use crate::traits::CSG;
use geo::{BoundingRect, Polygon as GeoPolygon};
use nalgebra::{Matrix3, Matrix4, Rotation3, Unit, Vector3};

pub mod shapes;

#[derive(Clone, Debug, PartialEq)]
pub enum Solid {
    /// Identity of `union`; renders to nothing.
    Empty,
    /// Box centered on the origin.
    Cuboid { size: Vector3<Real> },
    /// Cylinder or frustum along Z, centered on the origin.
    Cylinder {
        bottom_radius: Real,
        top_radius: Real,
        height: Real,
        segments: usize,
    },
    Sphere { radius: Real, segments: usize },
    /// 2D outline in the XY plane extruded along Z, centered on z = 0.
    LinearExtrude {
        outline: GeoPolygon<Real>,
        height: Real,
    },
    Translate {
        offset: Vector3<Real>,
        child: Box<Solid>,
    },
    /// Rotation by `angle` radians about `axis`.
    Rotate {
        axis: Unit<Vector3<Real>>,
        angle: Real,
        child: Box<Solid>,
    },
    /// Reflection about the plane through the origin with this normal.
    Mirror {
        normal: Unit<Vector3<Real>>,
        child: Box<Solid>,
    },
    Union(Vec<Solid>),
    Difference {
        base: Box<Solid>,
        cutters: Vec<Solid>,
    },
    Hull(Vec<Solid>),
}

impl Solid {
    /// Union of every solid in `solids`, skipping empties.
    pub fn union_all<I: IntoIterator<Item = Solid>>(solids: I) -> Solid {
        let mut children: Vec<Solid> = solids
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        match children.len() {
            0 => Solid::Empty,
            1 => children.remove(0),
            _ => Solid::Union(children),
        }
    }

    /// Convex hull of every solid in `solids`, skipping empties.
    pub fn hull_all<I: IntoIterator<Item = Solid>>(solids: I) -> Solid {
        let children: Vec<Solid> = solids
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        if children.is_empty() {
            Solid::Empty
        } else {
            Solid::Hull(children)
        }
    }

    /// `self` minus every solid in `cutters`.
    pub fn difference_all<I: IntoIterator<Item = Solid>>(&self, cutters: I) -> Solid {
        if self.is_empty() {
            return Solid::Empty;
        }
        let cutters: Vec<Solid> = cutters.into_iter().filter(|s| !s.is_empty()).collect();
        if cutters.is_empty() {
            return self.clone();
        }
        Solid::Difference {
            base: Box::new(self.clone()),
            cutters,
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Solid::Empty)
    }

    /// Number of nodes in the tree, this one included.
    pub fn node_count(&self) -> usize {
        1 + match self {
            Solid::Translate { child, .. }
            | Solid::Rotate { child, .. }
            | Solid::Mirror { child, .. } => child.node_count(),
            Solid::Union(children) | Solid::Hull(children) => {
                children.iter().map(Solid::node_count).sum()
            },
            Solid::Difference { base, cutters } => {
                base.node_count() + cutters.iter().map(Solid::node_count).sum::<usize>()
            },
            _ => 0,
        }
    }
}

/// Householder reflection `I - 2nnᵀ` as a homogeneous matrix.
fn reflection(normal: &Unit<Vector3<Real>>) -> Matrix4<Real> {
    let n = normal.into_inner();
    let reflect_3 = Matrix3::identity() - 2.0 * n * n.transpose();
    let mut reflect_4 = Matrix4::identity();
    reflect_4.fixed_view_mut::<3, 3>(0, 0).copy_from(&reflect_3);
    reflect_4
}

fn merge_boxes<'a, I: IntoIterator<Item = &'a Solid>>(solids: I) -> Option<Aabb> {
    solids
        .into_iter()
        .filter_map(Solid::bounding_box)
        .reduce(|acc, bb| acc.merged(&bb))
}

impl CSG for Solid {
    fn new() -> Self {
        Solid::Empty
    }

    fn union(&self, other: &Self) -> Self {
        match (self, other) {
            (Solid::Empty, _) => other.clone(),
            (_, Solid::Empty) => self.clone(),
            (Solid::Union(children), _) => {
                let mut children = children.clone();
                children.push(other.clone());
                Solid::Union(children)
            },
            _ => Solid::Union(vec![self.clone(), other.clone()]),
        }
    }

    fn difference(&self, other: &Self) -> Self {
        self.difference_all([other.clone()])
    }

    fn hull(&self, other: &Self) -> Self {
        Solid::hull_all([self.clone(), other.clone()])
    }

    fn translate_vector(&self, vector: Vector3<Real>) -> Self {
        if self.is_empty() {
            return Solid::Empty;
        }
        Solid::Translate {
            offset: vector,
            child: Box::new(self.clone()),
        }
    }

    fn rotate_axis(&self, axis: Unit<Vector3<Real>>, angle: Real) -> Self {
        if self.is_empty() {
            return Solid::Empty;
        }
        Solid::Rotate {
            axis,
            angle,
            child: Box::new(self.clone()),
        }
    }

    fn mirror(&self, normal: Vector3<Real>) -> Self {
        // a zero normal has no plane to reflect across
        let Some(normal) = Unit::try_new(normal, EPSILON) else {
            return self.clone();
        };
        if self.is_empty() {
            return Solid::Empty;
        }
        Solid::Mirror {
            normal,
            child: Box::new(self.clone()),
        }
    }

    fn bounding_box(&self) -> Option<Aabb> {
        match self {
            Solid::Empty => None,
            Solid::Cuboid { size } => Some(Aabb::from_half_extents(size * 0.5)),
            Solid::Cylinder {
                bottom_radius,
                top_radius,
                height,
                ..
            } => {
                let r = bottom_radius.max(*top_radius);
                Some(Aabb::from_half_extents(Vector3::new(r, r, height * 0.5)))
            },
            Solid::Sphere { radius, .. } => {
                Some(Aabb::from_half_extents(Vector3::repeat(*radius)))
            },
            Solid::LinearExtrude { outline, height } => {
                let rect = outline.bounding_rect()?;
                Some(Aabb::new(
                    nalgebra::Point3::new(rect.min().x, rect.min().y, -height * 0.5),
                    nalgebra::Point3::new(rect.max().x, rect.max().y, height * 0.5),
                ))
            },
            Solid::Translate { offset, child } => child
                .bounding_box()
                .map(|bb| Aabb::new(bb.mins + *offset, bb.maxs + *offset)),
            Solid::Rotate { axis, angle, child } => {
                let matrix = Rotation3::from_axis_angle(axis, *angle).to_homogeneous();
                child.bounding_box().map(|bb| bb.transformed(&matrix))
            },
            Solid::Mirror { normal, child } => child
                .bounding_box()
                .map(|bb| bb.transformed(&reflection(normal))),
            Solid::Union(children) | Solid::Hull(children) => merge_boxes(children),
            Solid::Difference { base, .. } => base.bounding_box(),
        }
    }
}
