//! Vertex array objects.

use std::sync::Arc;

use crate::buffer::VertexBuffer;
use crate::driver::Driver;
use crate::error::{Error, Result};
use crate::gl_call;
use crate::layout::VertexBufferLayout;

/// A vertex array object.
///
/// Holds no attribute state of its own: [`add_buffer`](Self::add_buffer)
/// issues the enable/pointer calls immediately and the driver records them
/// in the VAO.
pub struct VertexArray<D: Driver> {
    driver: Arc<D>,
    handle: D::VertexArray,
}

impl<D: Driver> VertexArray<D> {
    /// Create an empty vertex array.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Create`] if the driver cannot allocate one.
    pub fn new(driver: Arc<D>) -> Result<Self> {
        let handle =
            gl_call!(driver, driver.create_vertex_array()).map_err(Error::create("vertex array"))?;
        Ok(Self { driver, handle })
    }

    /// Attach `buffer` to this array, one attribute per layout element.
    ///
    /// Attribute indices follow element order, starting at 0. Leaves both
    /// this array and `buffer` bound.
    pub fn add_buffer(&self, buffer: &VertexBuffer<D>, layout: &VertexBufferLayout) {
        self.bind();
        buffer.bind();
        for (index, (offset, element)) in (0u32..).zip(layout.offsets()) {
            gl_call!(self.driver, self.driver.enable_vertex_attrib_array(index));
            gl_call!(
                self.driver,
                self.driver.vertex_attrib_pointer(
                    index,
                    element.count,
                    element.data_type,
                    element.normalized,
                    layout.stride(),
                    offset,
                )
            );
        }
    }

    /// Make this array current.
    pub fn bind(&self) {
        gl_call!(self.driver, self.driver.bind_vertex_array(Some(self.handle)));
    }

    /// Clear the vertex array binding.
    pub fn unbind(&self) {
        gl_call!(self.driver, self.driver.bind_vertex_array(None));
    }

    /// The driver's name for this array.
    #[must_use]
    pub fn handle(&self) -> D::VertexArray {
        self.handle
    }
}

impl<D: Driver> Drop for VertexArray<D> {
    fn drop(&mut self) {
        gl_call!(self.driver, self.driver.delete_vertex_array(self.handle));
    }
}
