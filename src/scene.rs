//! The static scene drawn every frame: one flat-colored quad.

use std::path::Path;
use std::sync::Arc;

use crate::animation::ColorPulse;
use crate::buffer::{IndexBuffer, VertexBuffer};
use crate::driver::Driver;
use crate::error::Result;
use crate::layout::VertexBufferLayout;
use crate::renderer::Renderer;
use crate::shader::Shader;
use crate::vertex_array::VertexArray;

/// Quad corners in model space, two floats per vertex.
const POSITIONS: [f32; 8] = [
    -0.5, -0.5, //
    0.5, -0.5, //
    0.5, 0.5, //
    -0.5, 0.5,
];

/// Two counter-clockwise triangles covering the quad.
const INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// Half the visible height in model units.
const VIEW_HALF_HEIGHT: f32 = 1.5;

/// Color channels other than the animated red one.
const BASE_COLOR: [f32; 3] = [0.3, 0.8, 1.0];

/// Orthographic projection showing `±VIEW_HALF_HEIGHT` vertically and the
/// matching width for a `width` × `height` surface.
#[must_use]
pub fn projection(width: u32, height: u32) -> glam::Mat4 {
    #[expect(clippy::cast_precision_loss)]
    let aspect = if height == 0 { 1.0 } else { width as f32 / height as f32 };
    let half_width = VIEW_HALF_HEIGHT * aspect;
    glam::Mat4::orthographic_rh_gl(
        -half_width,
        half_width,
        -VIEW_HALF_HEIGHT,
        VIEW_HALF_HEIGHT,
        -1.0,
        1.0,
    )
}

/// GPU resources for the quad plus its color animation.
pub struct Scene<D: Driver> {
    vertex_array: VertexArray<D>,
    // Kept alive for the vertex array's attribute bindings.
    _vertex_buffer: VertexBuffer<D>,
    index_buffer: IndexBuffer<D>,
    shader: Shader<D>,
    pulse: ColorPulse,
}

impl<D: Driver> Scene<D> {
    /// Upload the quad and build the program from `shader_path`.
    ///
    /// `[width, height]` is the initial surface size in pixels, used for the
    /// projection. All bindings are cleared before returning.
    ///
    /// # Errors
    ///
    /// Propagates buffer, vertex array and shader creation failures.
    pub fn new(driver: &Arc<D>, shader_path: &Path, [width, height]: [u32; 2]) -> Result<Self> {
        let vertex_array = VertexArray::new(Arc::clone(driver))?;
        let vertex_buffer = VertexBuffer::new(Arc::clone(driver), &POSITIONS)?;

        let mut layout = VertexBufferLayout::new();
        layout.push::<f32>(2);
        vertex_array.add_buffer(&vertex_buffer, &layout);

        let index_buffer = IndexBuffer::new(Arc::clone(driver), &INDICES)?;

        let mut shader = Shader::from_file(Arc::clone(driver), shader_path)?;
        shader.bind();
        shader.set_uniform_mat4("u_MVP", &projection(width, height));

        let pulse = ColorPulse::default();
        let [g, b, a] = BASE_COLOR;
        shader.set_uniform_4f("u_Color", pulse.value(), g, b, a);

        vertex_array.unbind();
        vertex_buffer.unbind();
        index_buffer.unbind();
        shader.unbind();

        Ok(Self {
            vertex_array,
            _vertex_buffer: vertex_buffer,
            index_buffer,
            shader,
            pulse,
        })
    }

    /// Recompute the projection for a resized surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.shader.bind();
        self.shader.set_uniform_mat4("u_MVP", &projection(width, height));
    }

    /// Draw one frame: upload the current color, draw the quad, then
    /// advance the animation.
    pub fn render(&mut self, renderer: &Renderer<D>) {
        let [g, b, a] = BASE_COLOR;
        self.shader.bind();
        self.shader.set_uniform_4f("u_Color", self.pulse.value(), g, b, a);

        renderer.draw(&self.vertex_array, &self.index_buffer, &self.shader);

        self.pulse.step();
    }
}
