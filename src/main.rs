// main.rs
//
// Builds every part of one board half from a JSON configuration (or the
// built-in default) and reports the size of each part's tree and its extent.

use dactyl_csg::aabb::Aabb;
use dactyl_csg::anchors::{Edge, index_anchor};
use dactyl_csg::assembly;
use dactyl_csg::float_types::Real;
use dactyl_csg::placement::on_floor;
use dactyl_csg::{BoardConfig, BoardError, CSG, Solid};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How far the controller holes are cut into the bottom plate.
const SBC_HOLE_DEPTH: Real = 10.0;

fn load_config() -> Result<BoardConfig, BoardError> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .map_err(|e| BoardError::Config(format!("{}: {}", path, e)))?;
            BoardConfig::from_json_str(&json)
        },
        None => {
            let config = BoardConfig::default();
            config.validate()?;
            Ok(config)
        },
    }
}

fn report(name: &str, solid: &Solid) {
    match solid.bounding_box() {
        Some(Aabb { mins, maxs }) => tracing::info!(
            part = name,
            nodes = solid.node_count(),
            min = ?[mins.x, mins.y, mins.z],
            max = ?[maxs.x, maxs.y, maxs.z],
            "built"
        ),
        None => tracing::info!(part = name, nodes = solid.node_count(), "built (empty)"),
    }
}

fn run() -> Result<(), BoardError> {
    let config = load_config()?;
    tracing::info!(
        rows = config.nrows,
        columns = config.ncols,
        switch = config.switch_type.name(),
        side = ?config.side(),
        "generating board half"
    );

    let key_holes = assembly::key_holes(&config)?;
    let connectors = assembly::connectors(&config)?;
    let walls = assembly::case_walls(&config)?;
    let caps = assembly::caps(&config)?;

    let sbc_anchor = index_anchor(&config, 0, Edge::Back)?;
    let sbc_holes = assembly::sbc_holes(&config, &sbc_anchor, on_floor, SBC_HOLE_DEPTH);

    let shell = Solid::union_all([
        key_holes.clone(),
        connectors.clone(),
        walls.clone(),
        assembly::screw_insert_outers(&config)?,
        assembly::usb_holder(&config)?,
        assembly::rj9_holder(&config)?,
    ])
    .difference_all([
        assembly::rj9_space(&config)?,
        assembly::usb_holder_hole(&config)?,
        assembly::screw_insert_holes(&config)?,
    ]);
    let case = assembly::for_side(&config, &shell);
    let bottom_holes = assembly::for_side(
        &config,
        &assembly::screw_insert_screw_holes(&config)?.union(&sbc_holes),
    );

    for (name, solid) in [
        ("key holes", &key_holes),
        ("connectors", &connectors),
        ("walls", &walls),
        ("caps", &caps),
        ("case", &case),
        ("bottom plate holes", &bottom_holes),
    ] {
        report(name, solid);
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        },
    }
}
