//! GPU backend abstraction layer.
//!
//! Each backend implements the [`GpuBackend`] trait, which covers raw
//! resource allocation and data upload. The crate ships a single no-op
//! [`DummyBackend`] so resource handles can be allocated in tests and
//! headless tools; real backends plug in as additional enum variants
//! behind feature gates.

pub mod dummy;

use std::sync::Arc;

use crate::error::GraphicsError;
use crate::types::{BufferDescriptor, VertexLayout};

pub use dummy::DummyBackend;

/// Handle to a raw GPU buffer resource.
#[derive(Debug, Clone)]
pub enum GpuBuffer {
    /// Dummy backend (no GPU allocation), tagged with a backend-local id.
    Dummy(u64),
}

/// Handle to a raw vertex-input state object.
#[derive(Debug, Clone)]
pub enum GpuVertexArray {
    /// Dummy backend (no GPU allocation), tagged with a backend-local id.
    Dummy(u64),
}

/// Trait implemented by GPU backends.
///
/// All methods take `&self`; backends use interior mutability where needed
/// so they can be shared behind an `Arc`.
pub trait GpuBackend: Send + Sync {
    /// Get the backend name.
    fn name(&self) -> &'static str;

    /// Allocate a raw buffer. The buffer's contents are undefined until
    /// written with [`write_buffer`](Self::write_buffer).
    fn create_buffer(&self, descriptor: &BufferDescriptor) -> Result<GpuBuffer, GraphicsError>;

    /// Allocate a raw vertex-input state object for the given layout.
    fn create_vertex_array(&self, layout: &VertexLayout) -> Result<GpuVertexArray, GraphicsError>;

    /// Write data into a buffer at the given byte offset.
    fn write_buffer(
        &self,
        buffer: &GpuBuffer,
        offset: u64,
        data: &[u8],
    ) -> Result<(), GraphicsError>;
}

/// Create the default backend for this build.
pub fn create_backend() -> Result<Arc<dyn GpuBackend>, GraphicsError> {
    Ok(Arc::new(DummyBackend::new()))
}
