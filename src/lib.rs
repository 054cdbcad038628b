//! A parametric generator for **split ergonomic keyboard cases**: a curved,
//! tented well of key switch plates, hulled web between them, a stepped skirt
//! wall, and the screw bosses, connector housings and controller holes that
//! hang off the walls.
//!
//! Everything is built as a [`solid::Solid`] tree of primitives, rigid
//! transforms and Boolean/hull operations; evaluating the tree into a mesh is
//! left to whatever consumes it.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to place key parts in parallel

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod aabb;
pub mod anchors;
pub mod assembly;
pub mod config;
pub mod curvature;
pub mod errors;
pub mod float_types;
pub mod parts;
pub mod placement;
pub mod solid;
pub mod switch;
pub mod traits;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use config::{BoardConfig, Side};
pub use errors::BoardError;
pub use placement::{Anchor, Placement, Positioner};
pub use solid::Solid;
pub use switch::SwitchType;
pub use traits::CSG;
