//! Debug overlay drawables.
//!
//! A [`DebugOverlay`] is one category of debug geometry (collisions,
//! camera switches, door triggers, item triggers, sloped surfaces) ready
//! for the renderer: the flat position buffer, the category's fixed
//! translucent color, and freshly allocated GPU handles. Construction is
//! a single step; the value never changes afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use revenant_graphics::device::GraphicsDevice;
use revenant_graphics::error::GraphicsError;
use revenant_graphics::resources::{Buffer, VertexArray};
use revenant_graphics::types::{BufferDescriptor, BufferUsage, VertexLayout};

use crate::geometry;
use crate::records::{CameraSwitchRegion, CollisionEntity, TriggerVolume};
use crate::vertex::OverlayVertex;

/// Collision shapes draw in translucent red.
pub const COLLISION_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 0.3];
/// Sloped surfaces draw in translucent magenta.
pub const SLOPED_SURFACE_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 0.3];
/// Camera-switch regions draw in translucent green.
pub const CAMERA_SWITCH_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 0.3];
/// Door triggers draw in translucent blue.
pub const DOOR_TRIGGER_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 0.3];
/// Item triggers draw in translucent cyan.
pub const ITEM_TRIGGER_COLOR: [f32; 4] = [0.0, 1.0, 1.0, 0.3];

/// Minimum vertex capacity to allocate per overlay buffer.
///
/// Keeps the handle valid for categories that happen to be empty (an
/// active camera with no switch regions still gets a well-formed
/// drawable) and leaves headroom for small rooms without reallocation.
pub const MIN_VERTEX_CAPACITY: u32 = 1024;

/// One renderable category of debug geometry.
pub struct DebugOverlay {
    color: [f32; 4],
    vertices: Vec<f32>,
    gpu_buffer: Arc<Buffer>,
    gpu_vertex_array: Arc<VertexArray>,
}

impl DebugOverlay {
    /// Wrap a finished vertex buffer with its color and GPU handles.
    fn assemble(
        device: &Arc<GraphicsDevice>,
        color: [f32; 4],
        vertices: Vec<f32>,
        label: &str,
    ) -> Result<Self, GraphicsError> {
        debug_assert_eq!(
            vertices.len() % 9,
            0,
            "overlay buffers hold whole triangles"
        );

        let vertex_count = (vertices.len() / 3) as u32;
        let capacity = vertex_count.max(MIN_VERTEX_CAPACITY);
        let gpu_buffer = device.create_buffer(
            &BufferDescriptor::new(
                capacity as u64 * OverlayVertex::STRIDE as u64,
                BufferUsage::VERTEX | BufferUsage::COPY_DST,
            )
            .with_label(label),
        )?;
        let gpu_vertex_array = device.create_vertex_array(VertexLayout::position_only())?;

        log::trace!(
            "DebugOverlay: assembled {} with {} vertices",
            label,
            vertex_count
        );

        Ok(Self {
            color,
            vertices,
            gpu_buffer,
            gpu_vertex_array,
        })
    }

    /// Build the collision-shapes overlay (red).
    pub fn collision(
        device: &Arc<GraphicsDevice>,
        entities: &[CollisionEntity],
    ) -> Result<Self, GraphicsError> {
        Self::assemble(
            device,
            COLLISION_COLOR,
            geometry::collision_vertices(entities),
            "debug_collision",
        )
    }

    /// Build the sloped-surfaces overlay (magenta).
    pub fn sloped_surfaces(
        device: &Arc<GraphicsDevice>,
        entities: &[CollisionEntity],
    ) -> Result<Self, GraphicsError> {
        Self::assemble(
            device,
            SLOPED_SURFACE_COLOR,
            geometry::sloped_surface_vertices(entities),
            "debug_sloped_surfaces",
        )
    }

    /// Build the camera-switch overlay (green) for the active camera.
    pub fn camera_switches(
        device: &Arc<GraphicsDevice>,
        active_camera: u32,
        regions: &[CameraSwitchRegion],
        transitions: &HashMap<u32, Vec<usize>>,
    ) -> Result<Self, GraphicsError> {
        Self::assemble(
            device,
            CAMERA_SWITCH_COLOR,
            geometry::camera_switch_vertices(active_camera, regions, transitions),
            "debug_camera_switches",
        )
    }

    /// Build the door-trigger overlay (blue).
    pub fn door_triggers(
        device: &Arc<GraphicsDevice>,
        doors: &[TriggerVolume],
    ) -> Result<Self, GraphicsError> {
        Self::assemble(
            device,
            DOOR_TRIGGER_COLOR,
            geometry::trigger_vertices(doors),
            "debug_door_triggers",
        )
    }

    /// Build the item-trigger overlay (cyan).
    pub fn item_triggers(
        device: &Arc<GraphicsDevice>,
        items: &[TriggerVolume],
    ) -> Result<Self, GraphicsError> {
        Self::assemble(
            device,
            ITEM_TRIGGER_COLOR,
            geometry::trigger_vertices(items),
            "debug_item_triggers",
        )
    }

    /// The overlay's fixed RGBA color.
    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    /// The flat position buffer, three scalars per vertex.
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Number of vertices in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of whole triangles in the buffer.
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 9
    }

    /// Whether the overlay draws nothing.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The allocated (not yet populated) GPU vertex buffer.
    pub fn gpu_buffer(&self) -> &Arc<Buffer> {
        &self.gpu_buffer
    }

    /// The allocated vertex-input state object.
    pub fn gpu_vertex_array(&self) -> &Arc<VertexArray> {
        &self.gpu_vertex_array
    }
}

impl std::fmt::Debug for DebugOverlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebugOverlay")
            .field("color", &self.color)
            .field("triangle_count", &self.triangle_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revenant_graphics::instance::GraphicsInstance;

    fn create_test_device() -> Arc<GraphicsDevice> {
        let instance = GraphicsInstance::new().unwrap();
        instance.create_device().unwrap()
    }

    fn rect_entity() -> CollisionEntity {
        CollisionEntity {
            shape: 0,
            slope_type: 0,
            x: 0.0,
            z: 0.0,
            width: 2.0,
            density: 3.0,
            slope_height: 0.0,
        }
    }

    #[test]
    fn test_collision_overlay() {
        let device = create_test_device();
        let overlay = DebugOverlay::collision(&device, &[rect_entity()]).unwrap();
        assert_eq!(overlay.color(), COLLISION_COLOR);
        assert_eq!(overlay.vertex_count(), 6);
        assert_eq!(overlay.triangle_count(), 2);
        assert!(!overlay.is_empty());
    }

    #[test]
    fn test_overlay_allocates_handles() {
        let device = create_test_device();
        let overlay = DebugOverlay::collision(&device, &[rect_entity()]).unwrap();
        assert_eq!(device.buffer_count(), 1);
        assert_eq!(device.vertex_array_count(), 1);
        // Capacity-sized, never smaller than the floor.
        assert_eq!(
            overlay.gpu_buffer().size(),
            MIN_VERTEX_CAPACITY as u64 * OverlayVertex::STRIDE as u64
        );
        assert_eq!(overlay.gpu_vertex_array().layout().stride(), 12);
    }

    #[test]
    fn test_empty_overlay_is_well_formed() {
        let device = create_test_device();
        let transitions = HashMap::new();
        let overlay = DebugOverlay::camera_switches(&device, 3, &[], &transitions).unwrap();
        assert_eq!(overlay.color(), CAMERA_SWITCH_COLOR);
        assert!(overlay.is_empty());
        assert!(overlay.gpu_buffer().size() > 0);
    }

    #[test]
    fn test_category_colors() {
        let device = create_test_device();
        let doors = DebugOverlay::door_triggers(&device, &[]).unwrap();
        let items = DebugOverlay::item_triggers(&device, &[]).unwrap();
        let slopes = DebugOverlay::sloped_surfaces(&device, &[]).unwrap();
        assert_eq!(doors.color(), DOOR_TRIGGER_COLOR);
        assert_eq!(items.color(), ITEM_TRIGGER_COLOR);
        assert_eq!(slopes.color(), SLOPED_SURFACE_COLOR);
    }

    #[test]
    fn test_large_overlay_grows_past_floor() {
        let device = create_test_device();
        // 500 circles at 24 vertices each overflow the capacity floor.
        let entities: Vec<CollisionEntity> = (0..500)
            .map(|i| CollisionEntity {
                shape: 6,
                slope_type: 0,
                x: i as f32,
                z: 0.0,
                width: 1.0,
                density: 1.0,
                slope_height: 0.0,
            })
            .collect();
        let overlay = DebugOverlay::collision(&device, &entities).unwrap();
        assert_eq!(overlay.vertex_count(), 500 * 24);
        assert_eq!(
            overlay.gpu_buffer().size(),
            500u64 * 24 * OverlayVertex::STRIDE as u64
        );
    }
}
