//! Computes the placement of a small demo scene and logs it.
//!
//! Nothing is rendered. Run with `RUST_LOG=debug` to see every sample position.

use std::{env, f32::consts::PI};

use anyhow::Context;
use fieldvec::{Displacement, Point, Rect, Vec3, Vec4, Vector3D};

const DEFAULT_SAMPLE_WIDTH: f32 = 0.8;

fn main() -> anyhow::Result<()> {
    fieldvec::init_logger!();

    let w = sample_width()?;
    log::info!("sample width: {w}");

    let camera = Vec3::from_literal(&[0.0, 0.0, 15.0]);
    let light = Vec3::from_literal(&[0.0, 10.0, 10.0]);
    log::info!("camera at {camera:?}, omni light at {light:?}");
    log::debug!("light relative to camera: {:?}", light - camera);

    // The floor plane lies in the XZ plane, so it is rotated -90° around the X axis.
    let floor_rotation = Vec4::new(1.0, 0.0, 0.0, -PI / 2.0);
    log::info!("floor rotation (axis, angle): {floor_rotation:?}");

    for (i, pos) in sample_positions(w).iter().enumerate() {
        match pos {
            Some(pos) => log::debug!("sample {i} at {pos:?}"),
            None => log::debug!("sample {i} at origin"),
        }
    }

    // Shifting the whole row of samples mixes a displacement into a point.
    let row_start = Point::new(-3.0, 0.0);
    let shifted = row_start + Displacement::new(0.5, w as f64 / 2.0);
    log::info!("row start shifted to {shifted:?}");

    let mut viewport = Rect::from([10.0, 10.0, 40.0, 30.0]);
    viewport.set_center(Point::from([0.0, 0.0]));
    log::info!("viewport centered on origin: {viewport:?}");

    Ok(())
}

fn sample_width() -> anyhow::Result<f32> {
    match env::var("FIELDVEC_SAMPLE_WIDTH") {
        Ok(s) => s
            .parse()
            .with_context(|| format!("invalid FIELDVEC_SAMPLE_WIDTH value '{s}'")),
        Err(env::VarError::NotPresent) => Ok(DEFAULT_SAMPLE_WIDTH),
        Err(e) => Err(e).context("failed to read FIELDVEC_SAMPLE_WIDTH"),
    }
}

/// Positions of the nine sample objects. The first one (the floor) stays at the origin.
fn sample_positions(w: f32) -> [Option<Vec3>; 9] {
    let half = w / 2.0;
    [
        None,
        Some([-3.0, half, 0.0].into()),
        Some([-2.0, half, 0.0].into()),
        Some([-1.0, 0.0, 0.0].into()),
        Some([0.0, half, 0.0].into()),
        Some([1.0, half, 0.0].into()),
        Some([2.0, w, 0.0].into()),
        Some([3.0, half, 0.0].into()),
        Some([0.0, w, -w * 2.0].into()),
    ]
}
