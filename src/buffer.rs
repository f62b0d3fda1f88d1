//! Vertex and index buffer objects.

use std::sync::Arc;

use bytemuck::Pod;

use crate::driver::Driver;
use crate::error::{Error, Result};
use crate::gl_call;

/// A `GL_ARRAY_BUFFER` holding static vertex data.
///
/// The buffer name is created and filled in [`new`](Self::new) and deleted
/// when the value is dropped.
pub struct VertexBuffer<D: Driver> {
    driver: Arc<D>,
    handle: D::Buffer,
}

impl<D: Driver> VertexBuffer<D> {
    /// Create a buffer and upload `data` into it.
    ///
    /// Leaves the new buffer bound to `GL_ARRAY_BUFFER`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Create`] if the driver cannot allocate a buffer.
    pub fn new<T: Pod>(driver: Arc<D>, data: &[T]) -> Result<Self> {
        let handle = gl_call!(driver, driver.create_buffer()).map_err(Error::create("vertex buffer"))?;
        gl_call!(driver, driver.bind_buffer(glow::ARRAY_BUFFER, Some(handle)));
        gl_call!(
            driver,
            driver.buffer_data(glow::ARRAY_BUFFER, bytemuck::cast_slice(data), glow::STATIC_DRAW)
        );
        Ok(Self { driver, handle })
    }

    /// Make this buffer current for `GL_ARRAY_BUFFER`.
    pub fn bind(&self) {
        gl_call!(self.driver, self.driver.bind_buffer(glow::ARRAY_BUFFER, Some(self.handle)));
    }

    /// Clear the `GL_ARRAY_BUFFER` binding.
    pub fn unbind(&self) {
        gl_call!(self.driver, self.driver.bind_buffer(glow::ARRAY_BUFFER, None));
    }

    /// The driver's name for this buffer.
    #[must_use]
    pub fn handle(&self) -> D::Buffer {
        self.handle
    }
}

impl<D: Driver> Drop for VertexBuffer<D> {
    fn drop(&mut self) {
        gl_call!(self.driver, self.driver.delete_buffer(self.handle));
    }
}

/// A `GL_ELEMENT_ARRAY_BUFFER` of `u32` indices.
///
/// Remembers how many indices it holds, since the draw call needs the count.
pub struct IndexBuffer<D: Driver> {
    driver: Arc<D>,
    handle: D::Buffer,
    count: usize,
}

impl<D: Driver> IndexBuffer<D> {
    /// Create a buffer and upload `indices` into it.
    ///
    /// Leaves the new buffer bound to `GL_ELEMENT_ARRAY_BUFFER`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexCount`] if there are more indices than a single
    /// draw call can consume, or [`Error::Create`] if the driver cannot
    /// allocate a buffer.
    pub fn new(driver: Arc<D>, indices: &[u32]) -> Result<Self> {
        let count = indices.len();
        if i32::try_from(count).is_err() {
            return Err(Error::IndexCount(count));
        }

        let handle = gl_call!(driver, driver.create_buffer()).map_err(Error::create("index buffer"))?;
        gl_call!(driver, driver.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(handle)));
        gl_call!(
            driver,
            driver.buffer_data(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(indices),
                glow::STATIC_DRAW
            )
        );
        Ok(Self {
            driver,
            handle,
            count,
        })
    }

    /// Make this buffer current for `GL_ELEMENT_ARRAY_BUFFER`.
    pub fn bind(&self) {
        gl_call!(
            self.driver,
            self.driver.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(self.handle))
        );
    }

    /// Clear the `GL_ELEMENT_ARRAY_BUFFER` binding.
    pub fn unbind(&self) {
        gl_call!(self.driver, self.driver.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None));
    }

    /// Number of indices uploaded at construction.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// The count as the `GLsizei` a draw call takes. Checked in
    /// [`new`](Self::new).
    pub(crate) fn draw_count(&self) -> i32 {
        i32::try_from(self.count).unwrap_or(i32::MAX)
    }

    /// The driver's name for this buffer.
    #[must_use]
    pub fn handle(&self) -> D::Buffer {
        self.handle
    }
}

impl<D: Driver> Drop for IndexBuffer<D> {
    fn drop(&mut self) {
        gl_call!(self.driver, self.driver.delete_buffer(self.handle));
    }
}
