//! Vertex-array resource.

use std::sync::{Arc, Weak};

use crate::backend::GpuVertexArray;
use crate::device::GraphicsDevice;
use crate::types::VertexLayout;

/// A vertex-input state object.
///
/// Created by [`GraphicsDevice::create_vertex_array`]. Records which
/// [`VertexLayout`] the bound vertex buffer uses, so the renderer can
/// configure vertex attributes when it binds the array. Like
/// [`Buffer`](crate::resources::Buffer), the raw handle is allocated
/// empty; attribute setup happens at bind time, outside this crate.
pub struct VertexArray {
    device: Weak<GraphicsDevice>,
    layout: Arc<VertexLayout>,
    raw: GpuVertexArray,
}

impl VertexArray {
    /// Create a new vertex array (called by GraphicsDevice).
    pub(crate) fn new(
        device: Weak<GraphicsDevice>,
        layout: Arc<VertexLayout>,
        raw: GpuVertexArray,
    ) -> Self {
        Self {
            device,
            layout,
            raw,
        }
    }

    /// Get the parent device, if it still exists.
    pub fn device(&self) -> Option<Arc<GraphicsDevice>> {
        self.device.upgrade()
    }

    /// Get the vertex layout this array was created with.
    pub fn layout(&self) -> &Arc<VertexLayout> {
        &self.layout
    }

    /// Get the raw backend handle.
    pub fn raw(&self) -> &GpuVertexArray {
        &self.raw
    }
}

impl std::fmt::Debug for VertexArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VertexArray")
            .field("stride", &self.layout.stride())
            .field("label", &self.layout.label)
            .finish()
    }
}

static_assertions::assert_impl_all!(VertexArray: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_array_layout() {
        let layout = VertexLayout::position_only();
        let va = VertexArray::new(Weak::new(), layout.clone(), GpuVertexArray::Dummy(1));
        assert_eq!(va.layout().stride(), 12);
        assert!(va.device().is_none());
    }
}
