//! Primitive shape builders.
//!
//! Pure functions that turn geometric parameters into flat position
//! buffers, three `f32` per vertex, whole triangles only. Winding is the
//! caller's responsibility; none of the builders normalize or validate
//! their inputs, so degenerate parameters produce degenerate (zero-area or
//! mirrored) triangles rather than errors.

use crate::records::{CollisionEntity, SlopeKind};

/// Number of triangles used to approximate a circle or ellipse.
pub const CIRCLE_SEGMENTS: usize = 8;

/// A single vertex position.
pub type Position = [f32; 3];

/// Build a rectangle from four corners as two triangles.
///
/// The corners must be supplied in perimeter order; the split runs along
/// the `c1`–`c3` diagonal, emitting `(c1, c2, c3)` and `(c1, c4, c3)`.
/// Corners given out of order render as a bowtie.
pub fn rectangle(c1: Position, c2: Position, c3: Position, c4: Position) -> Vec<f32> {
    let mut buffer = Vec::with_capacity(18);
    buffer.extend_from_slice(&c1);
    buffer.extend_from_slice(&c2);
    buffer.extend_from_slice(&c3);

    buffer.extend_from_slice(&c1);
    buffer.extend_from_slice(&c4);
    buffer.extend_from_slice(&c3);
    buffer
}

/// Build a single triangle; corners are emitted verbatim, in input order.
pub fn triangle(c1: Position, c2: Position, c3: Position) -> Vec<f32> {
    let mut buffer = Vec::with_capacity(9);
    buffer.extend_from_slice(&c1);
    buffer.extend_from_slice(&c2);
    buffer.extend_from_slice(&c3);
    buffer
}

/// Build a sloped rectangle for a ramp or stairs record.
///
/// The entity's slope type selects which edge pair is elevated to
/// `slope_height`; corner assembly is delegated to [`rectangle`]. An
/// undecodable slope type yields an empty buffer.
pub fn sloped_rectangle(entity: &CollisionEntity) -> Vec<f32> {
    let CollisionEntity {
        x,
        z,
        width,
        density,
        slope_height,
        ..
    } = *entity;

    match SlopeKind::from_code(entity.slope_type) {
        Some(SlopeKind::RisesAlongX) => rectangle(
            [x, 0.0, z],
            [x, 0.0, z + density],
            [x + width, slope_height, z + density],
            [x + width, slope_height, z],
        ),
        Some(SlopeKind::FallsAlongX) => rectangle(
            [x, slope_height, z],
            [x, slope_height, z + density],
            [x + width, 0.0, z + density],
            [x + width, 0.0, z],
        ),
        Some(SlopeKind::RisesAlongZ) => rectangle(
            [x, 0.0, z],
            [x, slope_height, z + density],
            [x + width, slope_height, z + density],
            [x + width, 0.0, z],
        ),
        Some(SlopeKind::FallsAlongZ) => rectangle(
            [x, slope_height, z],
            [x, 0.0, z + density],
            [x + width, 0.0, z + density],
            [x + width, slope_height, z],
        ),
        None => {
            log::debug!(
                "sloped_rectangle: unknown slope type {}, skipping",
                entity.slope_type
            );
            Vec::new()
        }
    }
}

/// Build a disc on the X/Z plane as a fan of [`CIRCLE_SEGMENTS`] triangles.
///
/// Every triangle starts at `center`; Y is taken from the center for all
/// vertices. A negative radius mirrors the fan instead of erroring.
pub fn circle(center: Position, radius: f32) -> Vec<f32> {
    let mut buffer = Vec::with_capacity(CIRCLE_SEGMENTS * 9);
    for i in 0..CIRCLE_SEGMENTS {
        let angle1 = (i as f32 * 360.0 / CIRCLE_SEGMENTS as f32).to_radians();
        let angle2 = ((i + 1) as f32 * 360.0 / CIRCLE_SEGMENTS as f32).to_radians();

        buffer.extend_from_slice(&center);
        buffer.extend_from_slice(&[
            center[0] + radius * angle1.cos(),
            center[1],
            center[2] + radius * angle1.sin(),
        ]);
        buffer.extend_from_slice(&[
            center[0] + radius * angle2.cos(),
            center[1],
            center[2] + radius * angle2.sin(),
        ]);
    }
    buffer
}

/// Build an axis-aligned ellipse as a fan of [`CIRCLE_SEGMENTS`] triangles.
///
/// When `x_axis_major` is set, X-displacement follows the major axis and
/// Z-displacement the minor; otherwise the axes swap roles. The ellipse is
/// never rotated.
pub fn ellipse(center: Position, major_axis: f32, minor_axis: f32, x_axis_major: bool) -> Vec<f32> {
    let (x_radius, z_radius) = if x_axis_major {
        (major_axis, minor_axis)
    } else {
        (minor_axis, major_axis)
    };

    let mut buffer = Vec::with_capacity(CIRCLE_SEGMENTS * 9);
    for i in 0..CIRCLE_SEGMENTS {
        let angle1 = (i as f32 * 360.0 / CIRCLE_SEGMENTS as f32).to_radians();
        let angle2 = ((i + 1) as f32 * 360.0 / CIRCLE_SEGMENTS as f32).to_radians();

        buffer.extend_from_slice(&center);
        buffer.extend_from_slice(&[
            center[0] + x_radius * angle1.cos(),
            center[1],
            center[2] + z_radius * angle1.sin(),
        ]);
        buffer.extend_from_slice(&[
            center[0] + x_radius * angle2.cos(),
            center[1],
            center[2] + z_radius * angle2.sin(),
        ]);
    }
    buffer
}
