//! Common graphics types and descriptors.

mod buffer;
mod vertex;

pub use buffer::{BufferDescriptor, BufferUsage};
pub use vertex::{
    VertexAttribute, VertexAttributeFormat, VertexAttributeSemantic, VertexBufferLayout,
    VertexLayout,
};
