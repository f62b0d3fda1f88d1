//! A thin draw facade.

use std::sync::Arc;

use crate::buffer::IndexBuffer;
use crate::driver::Driver;
use crate::gl_call;
use crate::shader::Shader;
use crate::vertex_array::VertexArray;

/// Clears the framebuffer and issues indexed draws.
///
/// Every draw binds its inputs itself; no state is tracked between calls.
pub struct Renderer<D: Driver> {
    driver: Arc<D>,
}

impl<D: Driver> Renderer<D> {
    /// A renderer issuing calls through `driver`.
    pub fn new(driver: Arc<D>) -> Self {
        Self { driver }
    }

    /// Set the color [`clear`](Self::clear) fills with.
    pub fn set_clear_color(&self, [red, green, blue, alpha]: [f32; 4]) {
        gl_call!(self.driver, self.driver.clear_color(red, green, blue, alpha));
    }

    /// Resize the viewport to cover a `width` × `height` pixel surface.
    pub fn set_viewport(&self, width: u32, height: u32) {
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let height = i32::try_from(height).unwrap_or(i32::MAX);
        gl_call!(self.driver, self.driver.viewport(0, 0, width, height));
    }

    /// Clear the color buffer.
    pub fn clear(&self) {
        gl_call!(self.driver, self.driver.clear(glow::COLOR_BUFFER_BIT));
    }

    /// Draw every index in `index_buffer` as triangles, using `vertex_array`
    /// for attributes and `shader` for shading.
    pub fn draw(&self, vertex_array: &VertexArray<D>, index_buffer: &IndexBuffer<D>, shader: &Shader<D>) {
        shader.bind();
        vertex_array.bind();
        index_buffer.bind();
        gl_call!(
            self.driver,
            self.driver.draw_elements(
                glow::TRIANGLES,
                index_buffer.draw_count(),
                glow::UNSIGNED_INT,
                0
            )
        );
    }
}
