// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Tolerance used when comparing derived geometry (angles, coordinates).
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// Tolerance used when comparing derived geometry (angles, coordinates).
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-8;

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 2
/// π/2
#[cfg(feature = "f32")]
pub const FRAC_PI_2: Real = core::f32::consts::FRAC_PI_2;
/// π/2
#[cfg(feature = "f64")]
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

// Frac Pi 3
/// π/3, the spacing of the three slits that make up a hex pocket
#[cfg(feature = "f32")]
pub const FRAC_PI_3: Real = core::f32::consts::FRAC_PI_3;
/// π/3, the spacing of the three slits that make up a hex pocket
#[cfg(feature = "f64")]
pub const FRAC_PI_3: Real = core::f64::consts::FRAC_PI_3;

