mod support;

use dactyl_csg::{
    BoardConfig, CSG, Side, Solid,
    anchors::{Edge, Facing, index_anchor, wall_locate2, wall_locate3},
    float_types::Real,
    assembly::{
        WallShift, caps, case_walls, connectors, for_side, key_holes, rj9_holder, rj9_space,
        rj9_start, sbc_holes, screw_insert, screw_insert_all_shapes, screw_insert_outers,
        screw_insert_position, screw_insert_positions, triangle_hulls, usb_holder,
        usb_holder_hole, usb_holder_position, wall_shift,
    },
    parts::{InsertKind, sbc::sbc_mount_holes},
    placement::{Anchor, key_position, on_floor},
};
use nalgebra::{Point3, Vector3};

#[test]
fn column_edges_win_over_row_edges() {
    let config = support::reference_config();
    let (last_col, last_row) = (config.last_col(), config.last_row());

    assert_eq!(wall_shift(&config, last_col, 0), WallShift::Right);
    assert_eq!(wall_shift(&config, last_col, last_row), WallShift::Right);
    assert_eq!(wall_shift(&config, 0, 0), WallShift::Left);
    assert_eq!(wall_shift(&config, 0, last_row), WallShift::Left);
    assert_eq!(wall_shift(&config, 2, 0), WallShift::Up);
    assert_eq!(wall_shift(&config, 3, last_row), WallShift::Down);
    // interior keys fall through to the right-shift branch
    assert_eq!(wall_shift(&config, 2, 1), WallShift::Right);
}

#[test]
fn screw_insert_positions_follow_their_wall() {
    let config = support::reference_config();
    let half_width = config.mount_width() / 2.0;
    let half_height = config.mount_height() / 2.0;
    let last_col = config.last_col();

    let right = screw_insert_position(&config, last_col, 0).unwrap();
    let expected = key_position(
        &config,
        last_col,
        0,
        wall_locate2(Facing::Right) + Vector3::new(half_width, 0.0, 0.0),
    )
    .unwrap();
    assert!(support::approx_eq_point(&right, &expected, 1e-9));

    let up = screw_insert_position(&config, 3, 0).unwrap();
    let expected = key_position(
        &config,
        3,
        0,
        wall_locate2(Facing::Back) + Vector3::new(0.0, half_height, 0.0),
    )
    .unwrap();
    assert!(support::approx_eq_point(&up, &expected, 1e-9));

    let left = screw_insert_position(&config, 0, 1).unwrap();
    let expected = dactyl_csg::anchors::left_key_position(&config, 1, Edge::Middle).unwrap()
        + wall_locate3(config.wall_thickness, Facing::Left);
    assert!(support::approx_eq_point(&left, &expected, 1e-9));
}

#[test]
fn screw_inserts_stand_on_the_floor() {
    let config = support::reference_config();
    for kind in [InsertKind::Outer, InsertKind::BoltHole] {
        let shape = kind.shape(config.resolution);
        let insert = screw_insert(&config, 0, 0, &shape, kind.height()).unwrap();
        let bb = support::bounding_box(&insert);
        assert!(support::approx_eq(bb[2], 0.0, 1e-9), "{:?}", kind);

        let position = screw_insert_position(&config, 0, 0).unwrap();
        let center = (bb[0] + bb[3]) / 2.0;
        assert!(support::approx_eq(center, position.x, 1e-9));
    }
}

#[test]
fn default_screw_insert_set() {
    let config = support::reference_config();
    let positions = screw_insert_positions(&config);
    assert_eq!(positions.len(), 5);
    for expected in [(0, 0), (0, 3), (3, 4), (3, 0), (5, 1)] {
        assert!(positions.contains(&expected), "{:?}", expected);
    }

    let outers = screw_insert_outers(&config).unwrap();
    let Solid::Union(bosses) = outers else {
        panic!("expected one boss per position");
    };
    assert_eq!(bosses.len(), 5);
}

#[test]
fn narrow_boards_keep_inserts_on_existing_columns() {
    let config = BoardConfig {
        ncols: 3,
        centercol: 1,
        ..BoardConfig::default()
    };
    let positions = screw_insert_positions(&config);
    assert!(positions.iter().all(|&(column, _)| column <= config.last_col()));
    assert!(screw_insert_all_shapes(&config, InsertKind::PlateHole).is_ok());
}

#[test]
fn left_half_is_mirrored() {
    let right = BoardConfig::default();
    let left = BoardConfig {
        is_right: false,
        ..BoardConfig::default()
    };
    let part = Solid::cube(1.0).translate(10.0, 3.0, 2.0);

    assert_eq!(for_side(&right, &part), part);
    let mirrored = support::bounding_box(&for_side(&left, &part));
    assert!(support::approx_eq(mirrored[0], -10.5, 1e-9));
    assert!(support::approx_eq(mirrored[3], -9.5, 1e-9));
    assert!(support::approx_eq(mirrored[1], 2.5, 1e-9));
}

#[test]
fn key_grid_has_one_part_per_key() {
    let config = BoardConfig::default();
    let expected = config.key_coordinates().len();

    let Solid::Union(plates) = key_holes(&config).unwrap() else {
        panic!("expected a union of plates");
    };
    assert_eq!(plates.len(), expected);

    let Solid::Union(keycaps) = caps(&config).unwrap() else {
        panic!("expected a union of caps");
    };
    assert_eq!(keycaps.len(), expected);
}

#[test]
fn triangle_hulls_slide_a_window_of_three() {
    let posts: Vec<Solid> = (0..4)
        .map(|i| Solid::cube(0.1).translate(i as Real, 0.0, 0.0))
        .collect();
    let Solid::Union(hulls) = triangle_hulls(&posts) else {
        panic!("expected a union of hulls");
    };
    assert_eq!(hulls.len(), 2);
    assert!(hulls.iter().all(|h| matches!(h, Solid::Hull(parts) if parts.len() == 3)));

    assert!(triangle_hulls(&posts[..2]).is_empty());
}

#[test]
fn connectors_and_walls_surround_the_keys() {
    let config = support::reference_config();
    assert!(!connectors(&config).unwrap().is_empty());

    let holes = support::bounding_box(&key_holes(&config).unwrap());
    let walls = support::bounding_box(&case_walls(&config).unwrap());
    assert!(walls[0] < holes[0], "left wall should sit outside column 0");
    assert!(walls[3] > holes[3], "right wall should sit outside the last column");
    assert!(walls[2] < holes[2], "walls should drop below the keys");
}

#[test]
fn connector_housings() {
    let config = support::reference_config();

    let start = rj9_start(&config).unwrap();
    let corner = key_position(
        &config,
        0,
        0,
        wall_locate3(config.wall_thickness, Facing::Back)
            + Vector3::new(0.0, config.mount_height() / 2.0, 0.0),
    )
    .unwrap();
    assert!(support::approx_eq(start.position.y, corner.y - 3.0, 1e-9));

    let space = support::bounding_box(&rj9_space(&config).unwrap());
    assert!(support::approx_eq((space[2] + space[5]) / 2.0, 11.0, 1e-9));
    assert_eq!(
        support::bounding_box(&rj9_holder(&config).unwrap()),
        space,
        "holder and space share an envelope"
    );

    let holder = support::bounding_box(&usb_holder(&config).unwrap());
    let hole = support::bounding_box(&usb_holder_hole(&config).unwrap());
    assert!(support::approx_eq(holder[2], 0.0, 1e-9));
    assert!(hole[0] > holder[0] && hole[3] < holder[3]);
    assert!(hole[2] > holder[2] && hole[5] < holder[5]);

    let usb = usb_holder_position(&config).unwrap();
    assert!(support::approx_eq((holder[0] + holder[3]) / 2.0, usb.position.x, 1e-9));
}

#[test]
fn sbc_holes_follow_the_anchor() {
    let config = support::reference_config();
    let anchor = Anchor::at(Point3::new(10.0, 20.0, 5.0));
    let bb = support::bounding_box(&sbc_holes(&config, &anchor, on_floor, 4.0));
    assert!(support::approx_eq((bb[0] + bb[3]) / 2.0, 10.0, 1e-9));
    assert!(support::approx_eq((bb[1] + bb[4]) / 2.0, 20.0, 1e-9));
    assert!(support::approx_eq(bb[2], -2.0, 1e-9));

    assert!(index_anchor(&config, 0, Edge::Back).is_ok());
}

#[test]
fn sbc_reset_hole_flips_with_the_side() {
    for (side, sign) in [(Side::Right, 1.0), (Side::Left, -1.0)] {
        let Solid::Union(holes) = sbc_mount_holes(side, 4.0, 16) else {
            panic!("expected a union of holes");
        };
        assert_eq!(holes.len(), 5);
        let reset = support::bounding_box(&holes[4]);
        assert!(support::approx_eq((reset[0] + reset[3]) / 2.0, sign * 3.75, 1e-9));
    }
}
