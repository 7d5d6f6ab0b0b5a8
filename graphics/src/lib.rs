//! # Revenant Graphics
//!
//! Thin GPU resource layer for the Revenant scene viewer.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`GraphicsInstance`] - Entry point that selects a backend and creates devices
//! - [`GraphicsDevice`] - Creates and tracks GPU resources
//! - [`Buffer`] / [`VertexArray`] - Logical resources wrapping opaque backend handles
//! - [`GpuBackend`](backend::GpuBackend) - Trait for backend implementations,
//!   with a no-op dummy backend for testing and headless runs
//!
//! Resource handles are allocated here but never populated; uploading data
//! into them is the caller's job via [`GraphicsDevice::write_buffer`].
//!
//! ## Example
//!
//! ```ignore
//! let instance = GraphicsInstance::new()?;
//! let device = instance.create_device()?;
//! let buffer = device.create_buffer(&BufferDescriptor::new(1024, BufferUsage::VERTEX))?;
//! ```

pub mod backend;
pub mod device;
pub mod error;
pub mod instance;
pub mod resources;
pub mod types;

pub use device::{DeviceCapabilities, GraphicsDevice};
pub use error::GraphicsError;
pub use instance::{AdapterInfo, AdapterType, GraphicsInstance};
pub use resources::{Buffer, VertexArray};
pub use types::{
    BufferDescriptor, BufferUsage, VertexAttribute, VertexAttributeFormat,
    VertexAttributeSemantic, VertexBufferLayout, VertexLayout,
};

/// Graphics library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the graphics subsystem.
///
/// This should be called before using any graphics functionality.
pub fn init() {
    log::info!("Revenant Graphics v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
