//! Graphics device.
//!
//! The [`GraphicsDevice`] is the main interface for creating GPU resources.
//! It is created by [`GraphicsInstance::create_device`].

use std::sync::{Arc, RwLock, Weak};

use crate::error::GraphicsError;
use crate::instance::GraphicsInstance;
use crate::resources::{Buffer, VertexArray};
use crate::types::{BufferDescriptor, VertexLayout};

/// Capabilities of a graphics device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceCapabilities {
    /// Maximum buffer size in bytes.
    pub max_buffer_size: u64,
    /// Maximum number of vertex attributes per layout.
    pub max_vertex_attributes: u32,
}

impl Default for DeviceCapabilities {
    fn default() -> Self {
        Self {
            max_buffer_size: 1 << 30, // 1 GB
            max_vertex_attributes: 16,
        }
    }
}

/// A graphics device for creating GPU resources.
///
/// # Thread Safety
///
/// `GraphicsDevice` is `Send + Sync` and can be safely shared across threads.
/// All resource creation methods use interior mutability where needed.
///
/// # Example
///
/// ```ignore
/// let instance = GraphicsInstance::new()?;
/// let device = instance.create_device()?;
///
/// let buffer = device.create_buffer(&BufferDescriptor::new(1024, BufferUsage::VERTEX))?;
/// let vao = device.create_vertex_array(VertexLayout::position_only())?;
/// ```
pub struct GraphicsDevice {
    instance: Arc<GraphicsInstance>,
    name: String,
    capabilities: DeviceCapabilities,
    // Track allocated resources (weak references for cleanup/debugging)
    buffers: RwLock<Vec<Weak<Buffer>>>,
    vertex_arrays: RwLock<Vec<Weak<VertexArray>>>,
}

impl GraphicsDevice {
    /// Create a new graphics device (called by GraphicsInstance).
    pub(crate) fn new(instance: Arc<GraphicsInstance>, name: String) -> Self {
        Self {
            instance,
            name,
            capabilities: DeviceCapabilities::default(),
            buffers: RwLock::new(Vec::new()),
            vertex_arrays: RwLock::new(Vec::new()),
        }
    }

    /// Get the parent instance.
    pub fn instance(&self) -> &Arc<GraphicsInstance> {
        &self.instance
    }

    /// Get the device name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the device capabilities.
    pub fn capabilities(&self) -> &DeviceCapabilities {
        &self.capabilities
    }

    /// Create a GPU buffer.
    ///
    /// The buffer is allocated but not populated; fill it with
    /// [`write_buffer`](Self::write_buffer).
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer size is zero or exceeds device limits.
    pub fn create_buffer(
        self: &Arc<Self>,
        descriptor: &BufferDescriptor,
    ) -> Result<Arc<Buffer>, GraphicsError> {
        if descriptor.size > self.capabilities.max_buffer_size {
            return Err(GraphicsError::InvalidParameter(format!(
                "buffer size {} exceeds maximum {}",
                descriptor.size, self.capabilities.max_buffer_size
            )));
        }

        if descriptor.size == 0 {
            return Err(GraphicsError::InvalidParameter(
                "buffer size cannot be zero".to_string(),
            ));
        }

        let raw = self.instance.backend().create_buffer(descriptor)?;
        let buffer = Arc::new(Buffer::new(
            Arc::downgrade(self),
            descriptor.clone(),
            raw,
        ));

        if let Ok(mut buffers) = self.buffers.write() {
            buffers.push(Arc::downgrade(&buffer));
        }

        log::trace!(
            "GraphicsDevice: created buffer {:?}, size={}",
            descriptor.label,
            descriptor.size
        );

        Ok(buffer)
    }

    /// Create a vertex-input state object for the given layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is invalid or exceeds device limits.
    pub fn create_vertex_array(
        self: &Arc<Self>,
        layout: Arc<VertexLayout>,
    ) -> Result<Arc<VertexArray>, GraphicsError> {
        if layout.attributes.len() as u32 > self.capabilities.max_vertex_attributes {
            return Err(GraphicsError::InvalidParameter(format!(
                "layout has {} attributes, maximum is {}",
                layout.attributes.len(),
                self.capabilities.max_vertex_attributes
            )));
        }
        layout.validate().map_err(GraphicsError::InvalidParameter)?;

        let raw = self.instance.backend().create_vertex_array(&layout)?;
        let vertex_array = Arc::new(VertexArray::new(Arc::downgrade(self), layout, raw));

        if let Ok(mut vertex_arrays) = self.vertex_arrays.write() {
            vertex_arrays.push(Arc::downgrade(&vertex_array));
        }

        log::trace!(
            "GraphicsDevice: created vertex array {:?}",
            vertex_array.layout().label
        );

        Ok(vertex_array)
    }

    /// Write data into a buffer at the given byte offset.
    ///
    /// # Errors
    ///
    /// Returns an error if the write range falls outside the buffer.
    pub fn write_buffer(
        &self,
        buffer: &Buffer,
        offset: u64,
        data: &[u8],
    ) -> Result<(), GraphicsError> {
        let end = offset
            .checked_add(data.len() as u64)
            .ok_or_else(|| GraphicsError::InvalidParameter("write range overflows".to_string()))?;
        if end > buffer.size() {
            return Err(GraphicsError::InvalidParameter(format!(
                "write of {} bytes at offset {} overruns buffer of size {}",
                data.len(),
                offset,
                buffer.size()
            )));
        }

        self.instance.backend().write_buffer(buffer.raw(), offset, data)
    }

    /// Get the number of live buffers created by this device.
    pub fn buffer_count(&self) -> usize {
        self.buffers
            .read()
            .map(|b| b.iter().filter(|w| w.strong_count() > 0).count())
            .unwrap_or(0)
    }

    /// Get the number of live vertex arrays created by this device.
    pub fn vertex_array_count(&self) -> usize {
        self.vertex_arrays
            .read()
            .map(|v| v.iter().filter(|w| w.strong_count() > 0).count())
            .unwrap_or(0)
    }

    /// Clean up dead weak references to released resources.
    pub fn cleanup_dead_resources(&self) {
        if let Ok(mut buffers) = self.buffers.write() {
            buffers.retain(|w| w.strong_count() > 0);
        }
        if let Ok(mut vertex_arrays) = self.vertex_arrays.write() {
            vertex_arrays.retain(|w| w.strong_count() > 0);
        }
    }
}

impl std::fmt::Debug for GraphicsDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphicsDevice")
            .field("name", &self.name)
            .field("capabilities", &self.capabilities)
            .finish()
    }
}

static_assertions::assert_impl_all!(GraphicsDevice: Send, Sync);
