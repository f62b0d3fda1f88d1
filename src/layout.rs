//! Describing how a flat vertex buffer splits into attributes.

/// A scalar type that can back a vertex attribute.
pub trait VertexAttribute: bytemuck::Pod {
    /// GL enum for the component type.
    const GL_TYPE: u32;
    /// Whether integer components are mapped into `[0, 1]`.
    const NORMALIZED: bool;
}

impl VertexAttribute for f32 {
    const GL_TYPE: u32 = glow::FLOAT;
    const NORMALIZED: bool = false;
}

impl VertexAttribute for u32 {
    const GL_TYPE: u32 = glow::UNSIGNED_INT;
    const NORMALIZED: bool = false;
}

impl VertexAttribute for u8 {
    const GL_TYPE: u32 = glow::UNSIGNED_BYTE;
    const NORMALIZED: bool = true;
}

/// One attribute: `count` components of one scalar type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexBufferElement {
    /// Components per vertex (1 to 4).
    pub count: i32,
    /// GL enum for the component type.
    pub data_type: u32,
    /// Whether integer components are normalized.
    pub normalized: bool,
    /// Size in bytes of one component.
    pub component_size: i32,
}

impl VertexBufferElement {
    /// Bytes this attribute occupies in one vertex.
    #[must_use]
    pub fn size(&self) -> i32 {
        self.count * self.component_size
    }
}

/// Ordered attribute list plus the resulting vertex stride.
///
/// ```
/// # use glow_primer::VertexBufferLayout;
/// let mut layout = VertexBufferLayout::new();
/// layout.push::<f32>(2); // position
/// layout.push::<u8>(4);  // color
/// assert_eq!(layout.stride(), 12);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexBufferLayout {
    elements: Vec<VertexBufferElement>,
    stride: i32,
}

impl VertexBufferLayout {
    /// An empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute of `count` components of type `T`.
    pub fn push<T: VertexAttribute>(&mut self, count: i32) -> &mut Self {
        // Scalars are at most 4 bytes.
        #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let component_size = std::mem::size_of::<T>() as i32;
        let element = VertexBufferElement {
            count,
            data_type: T::GL_TYPE,
            normalized: T::NORMALIZED,
            component_size,
        };
        self.stride += element.size();
        self.elements.push(element);
        self
    }

    /// Attributes in declaration order.
    #[must_use]
    pub fn elements(&self) -> &[VertexBufferElement] {
        &self.elements
    }

    /// Bytes from one vertex to the next.
    #[must_use]
    pub fn stride(&self) -> i32 {
        self.stride
    }

    /// Each element paired with its byte offset within a vertex.
    pub fn offsets(&self) -> impl Iterator<Item = (i32, &VertexBufferElement)> {
        self.elements.iter().scan(0, |offset, element| {
            let current = *offset;
            *offset += element.size();
            Some((current, element))
        })
    }
}
