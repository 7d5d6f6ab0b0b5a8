//! Overlay vertex type.

/// A debug overlay vertex: position only.
///
/// The flat buffers produced by [`geometry`](crate::geometry) are
/// reinterpreted as tightly packed `OverlayVertex` values at upload time;
/// the struct exists so the stride and the GPU-side layout agree on the
/// same definition.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct OverlayVertex {
    pub position: [f32; 3],
}

impl OverlayVertex {
    /// Size of one vertex in bytes.
    pub const STRIDE: u32 = std::mem::size_of::<Self>() as u32;
}

static_assertions::const_assert_eq!(std::mem::size_of::<OverlayVertex>(), 12);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stride_matches_three_floats() {
        assert_eq!(OverlayVertex::STRIDE, 12);
    }

    #[test]
    fn test_flat_buffer_cast() {
        let flat: Vec<f32> = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let vertices: &[OverlayVertex] = bytemuck::cast_slice(&flat);
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(vertices[1].position, [4.0, 5.0, 6.0]);
    }
}
