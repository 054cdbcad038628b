mod support;

use dactyl_csg::{
    CSG, Solid,
    aabb::Aabb,
    float_types::{FRAC_PI_2, Real},
};
use nalgebra::{Point3, Vector3};

#[test]
fn empty_is_the_union_identity() {
    let cube = Solid::cube(2.0);
    assert_eq!(Solid::new(), Solid::Empty);
    assert_eq!(Solid::Empty.union(&cube), cube);
    assert_eq!(cube.union(&Solid::Empty), cube);
    assert_eq!(Solid::union_all([Solid::Empty, Solid::Empty]), Solid::Empty);
    assert_eq!(Solid::union_all([Solid::Empty, cube.clone()]), cube);
    assert_eq!(Solid::hull_all(Vec::new()), Solid::Empty);
    assert!(Solid::Empty.bounding_box().is_none());
}

#[test]
fn transforms_of_empty_stay_empty() {
    let empty = Solid::Empty;
    assert!(empty.translate(1.0, 2.0, 3.0).is_empty());
    assert!(empty.rotate_x(1.0).is_empty());
    assert!(empty.mirror(Vector3::x()).is_empty());
    assert!(empty.difference(&Solid::cube(1.0)).is_empty());
}

#[test]
fn union_flattens_into_an_existing_union() {
    let a = Solid::cube(1.0);
    let b = Solid::sphere(1.0, 8);
    let c = Solid::cylinder(1.0, 2.0, 8);
    let union = a.union(&b).union(&c);
    match union {
        Solid::Union(children) => assert_eq!(children.len(), 3),
        other => panic!("expected a flat union, got {:?}", other),
    }
}

#[test]
fn difference_without_cutters_is_the_base() {
    let base = Solid::cube(3.0);
    assert_eq!(base.difference_all(Vec::new()), base);
    assert_eq!(base.difference(&Solid::Empty), base);

    let cut = base.difference(&Solid::cube(1.0));
    // cutters never grow the box
    assert_eq!(cut.bounding_box(), base.bounding_box());
}

#[test]
fn primitive_boxes() {
    let cuboid = support::bounding_box(&Solid::cuboid(2.0, 4.0, 6.0));
    assert_eq!(cuboid, [-1.0, -2.0, -3.0, 1.0, 2.0, 3.0]);

    let frustum = support::bounding_box(&Solid::frustum(2.0, 1.0, 4.0, 16));
    assert_eq!(frustum, [-2.0, -2.0, -2.0, 2.0, 2.0, 2.0]);

    let sphere = support::bounding_box(&Solid::sphere(1.5, 16));
    assert_eq!(sphere, [-1.5, -1.5, -1.5, 1.5, 1.5, 1.5]);

    let prism = support::bounding_box(&Solid::extrude_polygon(
        &[[0.0, 0.0], [2.0, 0.0], [1.0, 1.5]],
        0.2,
    ));
    assert!(support::approx_eq(prism[0], 0.0, 1e-12));
    assert!(support::approx_eq(prism[3], 2.0, 1e-12));
    assert!(support::approx_eq(prism[4], 1.5, 1e-12));
    assert!(support::approx_eq(prism[2], -0.1, 1e-12));
}

#[test]
fn degenerate_extrusion_is_empty() {
    assert!(Solid::extrude_polygon(&[[0.0, 0.0], [1.0, 1.0]], 1.0).is_empty());
}

#[test]
fn quarter_turn_swaps_extents() {
    let bar = Solid::cuboid(6.0, 2.0, 1.0).rotate_z(FRAC_PI_2);
    let bb = support::bounding_box(&bar);
    assert!(support::approx_eq(bb[3] - bb[0], 2.0, 1e-9));
    assert!(support::approx_eq(bb[4] - bb[1], 6.0, 1e-9));
}

#[test]
fn mirror_reflects_the_box() {
    let cube = Solid::cube(1.0).translate(3.0, 0.0, 0.0);
    let bb = support::bounding_box(&cube.mirror(Vector3::new(2.0, 0.0, 0.0)));
    assert!(support::approx_eq(bb[0], -3.5, 1e-12));
    assert!(support::approx_eq(bb[3], -2.5, 1e-12));

    // a zero normal has no plane to reflect across
    assert_eq!(cube.mirror(Vector3::zeros()), cube);
}

#[test]
fn center_and_float() {
    let moved = Solid::cuboid(2.0, 2.0, 4.0).translate(5.0, -3.0, 7.0);
    let centered = support::bounding_box(&moved.center());
    for (min, max) in [(centered[0], centered[3]), (centered[1], centered[4]), (centered[2], centered[5])] {
        assert!(support::approx_eq(min + max, 0.0, 1e-12));
    }

    let floated = support::bounding_box(&Solid::sphere(2.0, 16).float());
    assert!(support::approx_eq(floated[2], 0.0, 1e-12));
    assert!(support::approx_eq(floated[5], 4.0, 1e-12));

    assert!(Solid::Empty.center().is_empty());
    assert!(Solid::Empty.float().is_empty());
}

#[test]
fn node_count_walks_the_tree() {
    let tree = Solid::cube(1.0)
        .translate(1.0, 0.0, 0.0)
        .hull(&Solid::sphere(1.0, 8))
        .difference(&Solid::cube(0.5));
    // difference, hull, translate, cube, sphere, cutter cube
    assert_eq!(tree.node_count(), 6);
}

#[test]
fn aabb_helpers() {
    let a = Aabb::from_half_extents(Vector3::new(1.0, 1.0, 1.0));
    let b = Aabb::new(Point3::new(0.5, 0.5, 0.5), Point3::new(3.0, 3.0, 3.0));
    let far = Aabb::new(Point3::new(5.0, 5.0, 5.0), Point3::new(6.0, 6.0, 6.0));

    assert!(a.intersects(&b));
    assert!(!a.intersects(&far));

    let merged = a.merged(&far);
    assert_eq!(merged.mins, Point3::new(-1.0, -1.0, -1.0));
    assert_eq!(merged.maxs, Point3::new(6.0, 6.0, 6.0));
    assert_eq!(merged.extents(), Vector3::new(7.0, 7.0, 7.0));
    assert_eq!(merged.center(), Point3::new(2.5, 2.5, 2.5));

    let points = [Point3::new(1.0, -2.0, 0.0), Point3::new(-1.0, 4.0, 2.0)];
    let fitted = Aabb::from_points(points).unwrap();
    assert_eq!(fitted.mins, Point3::new(-1.0, -2.0, 0.0));
    assert_eq!(fitted.maxs, Point3::new(1.0, 4.0, 2.0));
    assert!(Aabb::from_points(Vec::<Point3<Real>>::new()).is_none());
}
