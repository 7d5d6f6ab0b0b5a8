//! Vertex layout descriptions.
//!
//! A [`VertexLayout`] describes how vertex data is packed in a buffer so the
//! renderer can configure vertex attributes when it binds a
//! [`VertexArray`](crate::resources::VertexArray). Layouts are shared via
//! `Arc` since only a few combinations exist across many drawables.

use std::sync::Arc;

/// Semantic meaning of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeSemantic {
    /// Vertex position (typically float3).
    Position,
    /// Vertex color (typically float4).
    Color,
    /// Texture coordinates (typically float2).
    TexCoord,
}

/// Format of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeFormat {
    /// Single 32-bit float.
    Float,
    /// Two 32-bit floats.
    Float2,
    /// Three 32-bit floats.
    Float3,
    /// Four 32-bit floats.
    Float4,
}

impl VertexAttributeFormat {
    /// Get the size in bytes of this format.
    pub fn size(&self) -> u32 {
        match self {
            Self::Float => 4,
            Self::Float2 => 8,
            Self::Float3 => 12,
            Self::Float4 => 16,
        }
    }
}

/// Describes a single vertex buffer binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexBufferLayout {
    /// Stride in bytes between consecutive vertices.
    pub stride: u32,
}

impl VertexBufferLayout {
    /// Create a new vertex buffer layout with the given stride.
    pub fn new(stride: u32) -> Self {
        Self { stride }
    }
}

/// A single vertex attribute description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    /// Semantic meaning of this attribute.
    pub semantic: VertexAttributeSemantic,
    /// Data format of this attribute.
    pub format: VertexAttributeFormat,
    /// Byte offset within the vertex.
    pub offset: u32,
}

impl VertexAttribute {
    /// Create a new vertex attribute.
    pub fn new(semantic: VertexAttributeSemantic, format: VertexAttributeFormat, offset: u32) -> Self {
        Self {
            semantic,
            format,
            offset,
        }
    }

    /// Create a position attribute (float3).
    pub fn position(offset: u32) -> Self {
        Self::new(
            VertexAttributeSemantic::Position,
            VertexAttributeFormat::Float3,
            offset,
        )
    }

    /// Create a color attribute (float4).
    pub fn color(offset: u32) -> Self {
        Self::new(
            VertexAttributeSemantic::Color,
            VertexAttributeFormat::Float4,
            offset,
        )
    }
}

/// Describes the layout of vertex data in a single buffer.
///
/// Typically wrapped in `Arc` and shared between drawables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexLayout {
    /// The vertex buffer binding description.
    pub buffer: VertexBufferLayout,
    /// The vertex attributes.
    pub attributes: Vec<VertexAttribute>,
    /// Optional label for debugging.
    pub label: Option<String>,
}

impl VertexLayout {
    /// Create a new vertex layout with the given stride and no attributes.
    pub fn new(stride: u32) -> Self {
        Self {
            buffer: VertexBufferLayout::new(stride),
            attributes: Vec::new(),
            label: None,
        }
    }

    /// Add a vertex attribute.
    pub fn with_attribute(mut self, attribute: VertexAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the stride in bytes between consecutive vertices.
    pub fn stride(&self) -> u32 {
        self.buffer.stride
    }

    /// Check if this layout has a specific semantic.
    pub fn has_semantic(&self, semantic: VertexAttributeSemantic) -> bool {
        self.attributes.iter().any(|attr| attr.semantic == semantic)
    }

    /// Validate the layout (attributes must fit within the stride).
    pub fn validate(&self) -> Result<(), String> {
        for attr in &self.attributes {
            if attr.offset + attr.format.size() > self.buffer.stride {
                return Err(format!(
                    "attribute {:?} at offset {} overruns stride {}",
                    attr.semantic, attr.offset, self.buffer.stride
                ));
            }
        }
        Ok(())
    }

    /// Position-only layout (12 bytes per vertex, tightly packed).
    pub fn position_only() -> Arc<Self> {
        Arc::new(
            Self::new(12)
                .with_attribute(VertexAttribute::position(0))
                .with_label("position_only"),
        )
    }
}
