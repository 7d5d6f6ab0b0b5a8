//! Entity-to-geometry translators.
//!
//! One function per overlay category. Each walks its input records in
//! order, dispatches on the decoded discriminant, and concatenates the
//! shape builders' output into a single flat buffer. Records whose
//! discriminant doesn't decode contribute nothing; the rest of the input
//! is unaffected.
//!
//! These functions are pure (no device, no GPU resource allocation), so
//! the dispatch tables can be tested directly against expected
//! coordinates.

use std::collections::HashMap;

use crate::records::{CameraSwitchRegion, CollisionEntity, ShapeKind, TriggerVolume};
use crate::shapes;

/// Translate collision records into footprint geometry.
///
/// Sloped kinds (ramps, stairs) are left to [`sloped_surface_vertices`];
/// everything here is drawn flat at Y = 0.
pub fn collision_vertices(entities: &[CollisionEntity]) -> Vec<f32> {
    let mut buffer = Vec::new();
    for entity in entities {
        let CollisionEntity {
            x,
            z,
            width,
            density,
            ..
        } = *entity;

        match ShapeKind::from_code(entity.shape) {
            Some(ShapeKind::Rectangle) => {
                buffer.extend(shapes::rectangle(
                    [x, 0.0, z],
                    [x, 0.0, z + density],
                    [x + width, 0.0, z + density],
                    [x + width, 0.0, z],
                ));
            }
            Some(ShapeKind::TriangleFarRight) => {
                buffer.extend(shapes::triangle(
                    [x, 0.0, z + density],
                    [x + width, 0.0, z + density],
                    [x + width, 0.0, z],
                ));
            }
            Some(ShapeKind::TriangleFarLeft) => {
                buffer.extend(shapes::triangle(
                    [x, 0.0, z],
                    [x, 0.0, z + density],
                    [x + width, 0.0, z + density],
                ));
            }
            Some(ShapeKind::TriangleNearRight) => {
                buffer.extend(shapes::triangle(
                    [x, 0.0, z],
                    [x + width, 0.0, z + density],
                    [x + width, 0.0, z],
                ));
            }
            Some(ShapeKind::Circle) => {
                let radius = width / 2.0;
                buffer.extend(shapes::circle([x + radius, 0.0, z + radius], radius));
            }
            Some(ShapeKind::EllipseX) => {
                let major_axis = width / 2.0;
                let minor_axis = density / 2.0;
                buffer.extend(shapes::ellipse(
                    [x + major_axis, 0.0, z + minor_axis],
                    major_axis,
                    minor_axis,
                    true,
                ));
            }
            Some(ShapeKind::EllipseZ) => {
                let major_axis = density / 2.0;
                let minor_axis = width / 2.0;
                buffer.extend(shapes::ellipse(
                    [x + minor_axis, 0.0, z + major_axis],
                    major_axis,
                    minor_axis,
                    false,
                ));
            }
            Some(ShapeKind::Ramp) | Some(ShapeKind::Stairs) => {}
            None => {
                log::debug!(
                    "collision_vertices: unknown shape code {}, skipping",
                    entity.shape
                );
            }
        }
    }
    buffer
}

/// Translate collision records into sloped-surface geometry.
///
/// Only ramps and stairs contribute; the two kinds draw identically (the
/// distinction matters to movement, not to the overlay).
pub fn sloped_surface_vertices(entities: &[CollisionEntity]) -> Vec<f32> {
    let mut buffer = Vec::new();
    for entity in entities {
        if ShapeKind::from_code(entity.shape).is_some_and(|kind| kind.is_sloped()) {
            buffer.extend(shapes::sloped_rectangle(entity));
        }
    }
    buffer
}

/// Translate the camera-switch regions reachable from the active camera.
///
/// Region corners are stored data, not derived footprints. An active
/// camera with no transition entry yields an empty buffer; a transition
/// index with no backing region is skipped.
pub fn camera_switch_vertices(
    active_camera: u32,
    regions: &[CameraSwitchRegion],
    transitions: &HashMap<u32, Vec<usize>>,
) -> Vec<f32> {
    let mut buffer = Vec::new();
    let Some(indices) = transitions.get(&active_camera) else {
        return buffer;
    };

    for &region_index in indices {
        let Some(region) = regions.get(region_index) else {
            log::debug!(
                "camera_switch_vertices: region index {} out of range ({} regions), skipping",
                region_index,
                regions.len()
            );
            continue;
        };
        buffer.extend(shapes::rectangle(
            [region.x1, 0.0, region.z1],
            [region.x2, 0.0, region.z2],
            [region.x3, 0.0, region.z3],
            [region.x4, 0.0, region.z4],
        ));
    }
    buffer
}

/// Translate trigger volumes (doors, item pickups) into footprint
/// rectangles.
///
/// The record's Y origin maps onto world Z; the rectangles are drawn flat
/// at world Y = 0.
pub fn trigger_vertices(triggers: &[TriggerVolume]) -> Vec<f32> {
    let mut buffer = Vec::new();
    for trigger in triggers {
        let TriggerVolume {
            x,
            y,
            width,
            height,
        } = *trigger;
        buffer.extend(shapes::rectangle(
            [x, 0.0, y],
            [x, 0.0, y + height],
            [x + width, 0.0, y + height],
            [x + width, 0.0, y],
        ));
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(shape: u32) -> CollisionEntity {
        CollisionEntity {
            shape,
            slope_type: 0,
            x: 0.0,
            z: 0.0,
            width: 2.0,
            density: 3.0,
            slope_height: 1.0,
        }
    }

    #[test]
    fn test_rectangle_record() {
        // Shape 0 at the origin, 2 wide, 3 deep.
        let buffer = collision_vertices(&[entity(0)]);
        assert_eq!(
            buffer,
            vec![
                0.0, 0.0, 0.0, 0.0, 0.0, 3.0, 2.0, 0.0, 3.0, //
                0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 2.0, 0.0, 3.0,
            ]
        );
    }

    #[test]
    fn test_triangle_records() {
        let far_right = collision_vertices(&[entity(1)]);
        assert_eq!(
            far_right,
            vec![0.0, 0.0, 3.0, 2.0, 0.0, 3.0, 2.0, 0.0, 0.0]
        );

        let far_left = collision_vertices(&[entity(2)]);
        assert_eq!(far_left, vec![0.0, 0.0, 0.0, 0.0, 0.0, 3.0, 2.0, 0.0, 3.0]);

        let near_right = collision_vertices(&[entity(3)]);
        assert_eq!(
            near_right,
            vec![0.0, 0.0, 0.0, 2.0, 0.0, 3.0, 2.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_circle_record() {
        let mut record = entity(6);
        record.width = 4.0;
        let buffer = collision_vertices(&[record]);
        assert_eq!(buffer.len(), 72);
        // Every triangle fans out from the center (2, 0, 2).
        for tri in buffer.chunks_exact(9) {
            assert_eq!(&tri[0..3], &[2.0, 0.0, 2.0]);
        }
    }

    #[test]
    fn test_ellipse_records_share_center() {
        // Shape 7 and shape 8 with swapped extents describe the same
        // ellipse, approached from different axes.
        let mut x_major = entity(7);
        x_major.width = 4.0;
        x_major.density = 2.0;
        let mut z_major = entity(8);
        z_major.width = 2.0;
        z_major.density = 4.0;

        let a = collision_vertices(&[x_major]);
        let b = collision_vertices(&[z_major]);
        assert_eq!(a.len(), 72);
        assert_eq!(b.len(), 72);
        assert_eq!(&a[0..3], &[2.0, 0.0, 1.0]);
        assert_eq!(&b[0..3], &[1.0, 0.0, 2.0]);
    }

    #[test]
    fn test_unknown_shape_is_isolated() {
        // An unknown discriminant drops its record without disturbing
        // the neighbors.
        let buffer = collision_vertices(&[entity(0), entity(99), entity(3)]);
        assert_eq!(buffer.len(), 18 + 9);
    }

    #[test]
    fn test_sloped_kinds_skipped_by_collision_translator() {
        assert!(collision_vertices(&[entity(11), entity(12)]).is_empty());
    }

    #[test]
    fn test_sloped_translator_takes_only_ramps_and_stairs() {
        let buffer = sloped_surface_vertices(&[entity(0), entity(11), entity(6), entity(12)]);
        assert_eq!(buffer.len(), 2 * 18);
    }

    #[test]
    fn test_camera_switch_lookup() {
        let regions = vec![
            CameraSwitchRegion {
                x1: 0.0,
                z1: 0.0,
                x2: 0.0,
                z2: 1.0,
                x3: 1.0,
                z3: 1.0,
                x4: 1.0,
                z4: 0.0,
            },
            CameraSwitchRegion {
                x1: 5.0,
                z1: 5.0,
                x2: 5.0,
                z2: 6.0,
                x3: 6.0,
                z3: 6.0,
                x4: 6.0,
                z4: 5.0,
            },
        ];
        let transitions = HashMap::from([(0u32, vec![1usize])]);

        let buffer = camera_switch_vertices(0, &regions, &transitions);
        assert_eq!(buffer.len(), 18);
        assert_eq!(&buffer[0..3], &[5.0, 0.0, 5.0]);
    }

    #[test]
    fn test_camera_switch_missing_camera() {
        let transitions = HashMap::from([(0u32, vec![0usize])]);
        assert!(camera_switch_vertices(7, &[], &transitions).is_empty());
    }

    #[test]
    fn test_camera_switch_out_of_range_index() {
        let regions = vec![CameraSwitchRegion {
            x1: 0.0,
            z1: 0.0,
            x2: 0.0,
            z2: 1.0,
            x3: 1.0,
            z3: 1.0,
            x4: 1.0,
            z4: 0.0,
        }];
        let transitions = HashMap::from([(0u32, vec![0usize, 9usize])]);
        // The dangling index is dropped; the valid one still draws.
        let buffer = camera_switch_vertices(0, &regions, &transitions);
        assert_eq!(buffer.len(), 18);
    }

    #[test]
    fn test_trigger_rectangle() {
        // A door at (5, 10), 2 wide, 1 high.
        let buffer = trigger_vertices(&[TriggerVolume {
            x: 5.0,
            y: 10.0,
            width: 2.0,
            height: 1.0,
        }]);
        assert_eq!(
            buffer,
            vec![
                5.0, 0.0, 10.0, 5.0, 0.0, 11.0, 7.0, 0.0, 11.0, //
                5.0, 0.0, 10.0, 7.0, 0.0, 10.0, 7.0, 0.0, 11.0,
            ]
        );
    }
}
