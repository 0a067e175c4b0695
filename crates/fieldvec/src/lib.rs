//! Generic vector algebra over interchangeable concrete types.
//!
//! This crate bundles [`fieldvec_linalg`] (the [`Field`] and [`Vector`] traits and the macros that
//! implement them) with [`fieldvec_geom`] (concrete points, sizes, displacements, 3D/4D vectors
//! and rectangles).
//!
//! # Coordinates
//!
//! 3D types use a right-handed coordinate system: X points to the right, Y points up, and Z points
//! towards the viewer.
//!
//! # Environment Variables
//!
//! * `RUST_LOG`: overrides the log filter installed by [`init_logger!`], using the syntax of
//!   [`env_logger`].
//! * `FIELDVEC_SAMPLE_WIDTH`: read by the `scene_layout` demo, sets the edge length of the sample
//!   objects it lays out. Defaults to `0.8`.

use log::LevelFilter;

pub use fieldvec_geom::*;
pub use fieldvec_linalg::{
    approx, impl_approx_eq, impl_vector2d, impl_vector3d, impl_vector4d, ArityError, Field, Zero,
};

#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and this crate will log at *trace*
/// level. Otherwise, they will log at *debug* level. `RUST_LOG` is applied on top.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
