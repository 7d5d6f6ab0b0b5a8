//! Dummy GPU backend for testing and development.
//!
//! This backend doesn't perform actual GPU operations but provides
//! a valid implementation for testing the graphics API without
//! requiring GPU hardware.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::GraphicsError;
use crate::types::{BufferDescriptor, VertexLayout};

use super::{GpuBackend, GpuBuffer, GpuVertexArray};

/// Dummy GPU backend.
///
/// Hands out monotonically increasing ids in place of real GPU objects
/// and treats every write as a no-op.
#[derive(Debug)]
pub struct DummyBackend {
    next_id: AtomicU64,
}

impl Default for DummyBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DummyBackend {
    /// Create a new dummy backend.
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
        }
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

impl GpuBackend for DummyBackend {
    fn name(&self) -> &'static str {
        "Dummy Backend"
    }

    fn create_buffer(&self, descriptor: &BufferDescriptor) -> Result<GpuBuffer, GraphicsError> {
        log::trace!(
            "DummyBackend: creating buffer {:?} (size: {})",
            descriptor.label,
            descriptor.size
        );
        Ok(GpuBuffer::Dummy(self.next_id()))
    }

    fn create_vertex_array(&self, layout: &VertexLayout) -> Result<GpuVertexArray, GraphicsError> {
        log::trace!(
            "DummyBackend: creating vertex array {:?} (stride: {})",
            layout.label,
            layout.stride()
        );
        Ok(GpuVertexArray::Dummy(self.next_id()))
    }

    fn write_buffer(
        &self,
        _buffer: &GpuBuffer,
        offset: u64,
        data: &[u8],
    ) -> Result<(), GraphicsError> {
        log::trace!(
            "DummyBackend: write_buffer offset={} len={}",
            offset,
            data.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BufferUsage;

    #[test]
    fn test_handles_are_unique() {
        let backend = DummyBackend::new();
        let desc = BufferDescriptor::new(64, BufferUsage::VERTEX);
        let a = backend.create_buffer(&desc).unwrap();
        let b = backend.create_buffer(&desc).unwrap();
        let (GpuBuffer::Dummy(id_a), GpuBuffer::Dummy(id_b)) = (a, b);
        assert_ne!(id_a, id_b);
    }

    #[test]
    fn test_write_is_noop() {
        let backend = DummyBackend::new();
        let desc = BufferDescriptor::new(64, BufferUsage::VERTEX);
        let buffer = backend.create_buffer(&desc).unwrap();
        assert!(backend.write_buffer(&buffer, 0, &[0u8; 64]).is_ok());
    }
}
