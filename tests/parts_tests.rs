mod support;

use dactyl_csg::{
    BoardConfig, BoardError, Solid,
    anchors::{Edge, Facing, index_key_position, left_key_place, left_key_position, wall_locate1, wall_locate2, wall_locate3},
    parts::{
        InsertKind, KeycapSize,
        connectors::{RJ9_SIZE, rj9_housing},
        inserts::{SCREW_INSERT_HEIGHT, hex_bolt_hole, plate_screw_hole},
        keycap::{CAP_CLEARANCE, CAP_HEIGHT},
        sa_cap,
        web::{POST_SIZE, corner_offset, web_post, web_post_bl, web_post_br, web_post_tl, web_post_tr},
        Corner,
    },
    placement::key_position,
};
use nalgebra::Vector3;

#[test]
fn web_post_hangs_from_the_plate_top() {
    let config = BoardConfig::default();
    let bb = support::bounding_box(&web_post(&config));
    assert!(support::approx_eq(bb[5], config.plate_thickness(), 1e-12));
    assert!(support::approx_eq(bb[2], config.plate_thickness() - config.web_thickness, 1e-12));
    assert!(support::approx_eq(bb[3] - bb[0], POST_SIZE, 1e-12));
}

#[test]
fn corner_posts_are_symmetric() {
    let config = BoardConfig::default();
    let edge_x = config.mount_width() / 2.0;
    let edge_y = config.mount_height() / 2.0;

    let tr = support::bounding_box(&web_post_tr(&config));
    assert!(support::approx_eq(tr[3], edge_x, 1e-12));
    assert!(support::approx_eq(tr[4], edge_y, 1e-12));

    let bl = support::bounding_box(&web_post_bl(&config));
    assert!(support::approx_eq(bl[0], -edge_x, 1e-12));
    assert!(support::approx_eq(bl[1], -edge_y, 1e-12));

    let tl = support::bounding_box(&web_post_tl(&config));
    let br = support::bounding_box(&web_post_br(&config));
    assert!(support::approx_eq(tl[0], -br[3], 1e-12));
    assert!(support::approx_eq(tl[4], -br[1], 1e-12));

    assert_eq!(
        corner_offset(&config, Corner::TopLeft),
        Vector3::new(-corner_offset(&config, Corner::TopRight).x, corner_offset(&config, Corner::TopRight).y, 0.0)
    );
}

#[test]
fn wall_offsets_step_outward() {
    let thickness = 5.0;
    assert_eq!(wall_locate1(thickness, Facing::Back), Vector3::new(0.0, 5.0, -1.0));
    assert_eq!(wall_locate2(Facing::Left), Vector3::new(-5.0, 0.0, -15.0));
    assert_eq!(wall_locate3(thickness, Facing::FrontRight), Vector3::new(10.0, -10.0, -15.0));
}

#[test]
fn left_wall_anchor_sits_outside_column_zero() {
    let config = support::reference_config();
    let corner = key_position(
        &config,
        0,
        1,
        Vector3::new(-config.mount_width() / 2.0, config.mount_height() / 2.0, 0.0),
    )
    .unwrap();
    let anchor = left_key_position(&config, 1, Edge::Back).unwrap();
    assert!(support::approx_eq(anchor.x, corner.x - 10.0, 1e-9));
    assert!(support::approx_eq(anchor.y, corner.y, 1e-9));
    assert!(support::approx_eq(anchor.z, corner.z - 3.0, 1e-9));

    let middle = left_key_position(&config, 1, Edge::Middle).unwrap();
    let front = left_key_position(&config, 1, Edge::Front).unwrap();
    assert!(front.y < middle.y && middle.y < anchor.y);

    let index = index_key_position(&config, 1, Edge::Back).unwrap();
    assert!(index.x > anchor.x);

    let placed = support::bounding_box(&left_key_place(&config, 1, Edge::Back, &Solid::cube(0.0)).unwrap());
    assert!(support::approx_eq(placed[0], anchor.x, 1e-12));
}

#[test]
fn keycap_presets() {
    assert_eq!(KeycapSize::from_units(1.0), Ok(KeycapSize::One));
    assert_eq!(KeycapSize::from_units(1.5), Ok(KeycapSize::OneAndHalf));
    assert_eq!(KeycapSize::from_units(2.0), Ok(KeycapSize::Two));
    assert_eq!(
        KeycapSize::from_units(1.25),
        Err(BoardError::UnsupportedKeycapWidth(1.25))
    );
}

#[test]
fn keycap_floats_above_the_plate() {
    let plate_thickness = 4.0;
    let cap = support::bounding_box(&sa_cap(KeycapSize::One, plate_thickness));
    assert!(support::approx_eq(cap[2], CAP_CLEARANCE + plate_thickness, 1e-9));
    assert!(cap[5] > CAP_CLEARANCE + plate_thickness + CAP_HEIGHT);
    assert!(support::approx_eq(cap[3], 9.25, 1e-9));

    let wide = support::bounding_box(&sa_cap(KeycapSize::OneAndHalf, plate_thickness));
    assert!(wide[3] - wide[0] > cap[3] - cap[0]);
    let tall = support::bounding_box(&sa_cap(KeycapSize::Two, plate_thickness));
    assert!(tall[4] - tall[1] > cap[4] - cap[1]);
}

#[test]
fn insert_shapes() {
    assert_eq!(InsertKind::BoltHole.height(), SCREW_INSERT_HEIGHT);
    assert!(InsertKind::Outer.height() > InsertKind::BoltHole.height());

    let boss = support::bounding_box(&InsertKind::Outer.shape(16));
    let void = support::bounding_box(&InsertKind::BoltHole.shape(16));
    assert!(boss[3] > void[3], "boss should be wider than the pocket it holds");

    // three slits, a dome and the shaft
    let Solid::Union(pieces) = hex_bolt_hole(SCREW_INSERT_HEIGHT, 16) else {
        panic!("expected a union");
    };
    assert_eq!(pieces.len(), 5);
    let bolt = support::bounding_box(&Solid::Union(pieces));
    assert!(support::approx_eq(bolt[2], -SCREW_INSERT_HEIGHT / 2.0, 1e-9));
    assert!(support::approx_eq(bolt[5], 2.0 * SCREW_INSERT_HEIGHT, 1e-9));

    let plate_hole = support::bounding_box(&plate_screw_hole(16));
    assert!(support::approx_eq(plate_hole[2], -1.5, 1e-9));
    assert!(support::approx_eq(plate_hole[5], 1.5, 1e-9));
    assert!(support::approx_eq(plate_hole[3], 3.0, 1e-9));
}

#[test]
fn rj9_housing_is_hollowed_from_its_envelope() {
    let housing = rj9_housing();
    let Solid::Difference { base, cutters } = &housing else {
        panic!("expected a difference");
    };
    assert_eq!(cutters.len(), 2);
    let bb = support::bounding_box(base);
    assert!(support::approx_eq(bb[3] - bb[0], RJ9_SIZE[0], 1e-12));
    assert!(support::approx_eq(bb[5] - bb[2], RJ9_SIZE[2], 1e-12));
}
