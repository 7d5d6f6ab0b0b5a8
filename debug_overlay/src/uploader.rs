//! Overlay upload seam.
//!
//! Geometry generation and GPU population are deliberately separate: the
//! overlay constructors only allocate handles, and this routine is the one
//! place the vertex data actually crosses to the device.

use revenant_graphics::device::GraphicsDevice;
use revenant_graphics::error::GraphicsError;

use crate::overlay::DebugOverlay;

/// Write an overlay's vertex data into its GPU buffer.
///
/// An empty overlay uploads nothing and succeeds.
///
/// # Errors
///
/// Returns an error if the device rejects the write.
pub fn upload_overlay(device: &GraphicsDevice, overlay: &DebugOverlay) -> Result<(), GraphicsError> {
    if overlay.is_empty() {
        return Ok(());
    }
    let bytes: &[u8] = bytemuck::cast_slice(overlay.vertices());
    device.write_buffer(overlay.gpu_buffer(), 0, bytes)
}
