//! Fixed-dimension parts, all built at the origin. Positioning them is the
//! job of [`crate::placement`] and [`crate::assembly`].

pub mod connectors;
pub mod inserts;
pub mod keycap;
pub mod plate;
pub mod sbc;
pub mod web;

pub use inserts::InsertKind;
pub use keycap::{KeycapSize, sa_cap};
pub use plate::single_plate;
pub use web::{Corner, web_post, web_post_at};
