//! The graphics-driver seam.
//!
//! Every GPU wrapper in this crate talks to the driver through [`Driver`]
//! instead of calling GL entry points directly. The trait mirrors the subset
//! of [`glow::HasContext`] the crate needs, with one difference: its methods
//! are safe. The `unsafe` obligation (a current, valid context on the calling
//! thread) is discharged once, when a [`GlowDriver`] is constructed.
//!
//! Passing the driver explicitly (as an `Arc<D>`) makes the context that
//! each bind and draw mutates visible in the signatures, and lets tests swap
//! in a recording double.

use std::fmt::Debug;

mod native;

#[cfg(test)]
pub(crate) mod fake;

pub use native::GlowDriver;

/// Handle-based access to a graphics driver.
///
/// Enum-typed parameters (`target`, `usage`, `mode`, ...) take the raw GL
/// constants from [`glow`], e.g. [`glow::ARRAY_BUFFER`].
pub trait Driver {
    /// Buffer object name.
    type Buffer: Copy + Eq + Debug;
    /// Vertex array object name.
    type VertexArray: Copy + Eq + Debug;
    /// Shader object name.
    type Shader: Copy + Eq + Debug;
    /// Program object name.
    type Program: Copy + Eq + Debug;
    /// Resolved uniform location.
    type UniformLocation: Clone + Debug;

    /// Pop the oldest pending error code, or [`glow::NO_ERROR`].
    fn get_error(&self) -> u32;

    /// Human-readable driver version string.
    fn version(&self) -> String;

    // Buffers

    /// Allocate a new buffer name.
    ///
    /// # Errors
    ///
    /// Returns the driver's message if no name could be allocated.
    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    /// Release a buffer name.
    fn delete_buffer(&self, buffer: Self::Buffer);
    /// Make `buffer` current for `target`, or clear the binding.
    fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>);
    /// Upload `data` into the buffer currently bound to `target`.
    fn buffer_data(&self, target: u32, data: &[u8], usage: u32);

    // Vertex arrays

    /// Allocate a new vertex array name.
    ///
    /// # Errors
    ///
    /// Returns the driver's message if no name could be allocated.
    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    /// Release a vertex array name.
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);
    /// Make `vertex_array` current, or clear the binding.
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    /// Enable attribute `index` on the current vertex array.
    fn enable_vertex_attrib_array(&self, index: u32);
    /// Describe attribute `index` of the current vertex array, reading from
    /// the buffer bound to `ARRAY_BUFFER`.
    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );

    // Shaders and programs

    /// Allocate a shader object of the given stage.
    ///
    /// # Errors
    ///
    /// Returns the driver's message if no name could be allocated.
    fn create_shader(&self, stage: u32) -> Result<Self::Shader, String>;
    /// Replace the source of `shader`.
    fn shader_source(&self, shader: Self::Shader, source: &str);
    /// Compile `shader`.
    fn compile_shader(&self, shader: Self::Shader);
    /// Whether the last compile of `shader` succeeded.
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    /// Compiler diagnostics for `shader`.
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    /// Release a shader object.
    fn delete_shader(&self, shader: Self::Shader);

    /// Allocate a program object.
    ///
    /// # Errors
    ///
    /// Returns the driver's message if no name could be allocated.
    fn create_program(&self) -> Result<Self::Program, String>;
    /// Attach a compiled stage to `program`.
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    /// Detach a stage from `program`.
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    /// Link `program`.
    fn link_program(&self, program: Self::Program);
    /// Whether the last link of `program` succeeded.
    fn program_link_status(&self, program: Self::Program) -> bool;
    /// Validate `program` against the current state.
    fn validate_program(&self, program: Self::Program);
    /// Whether the last validation of `program` succeeded.
    fn program_validate_status(&self, program: Self::Program) -> bool;
    /// Linker/validator diagnostics for `program`.
    fn program_info_log(&self, program: Self::Program) -> String;
    /// Release a program object.
    fn delete_program(&self, program: Self::Program);
    /// Make `program` current, or clear the binding.
    fn use_program(&self, program: Option<Self::Program>);

    // Uniforms

    /// Look up a uniform by name. `None` if the program has no active
    /// uniform of that name.
    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::UniformLocation>;
    /// Upload an `int`/`sampler` uniform to the current program.
    fn uniform_1_i32(&self, location: Option<&Self::UniformLocation>, x: i32);
    /// Upload a `float` uniform to the current program.
    fn uniform_1_f32(&self, location: Option<&Self::UniformLocation>, x: f32);
    /// Upload a `vec4` uniform to the current program.
    fn uniform_4_f32(&self, location: Option<&Self::UniformLocation>, x: f32, y: f32, z: f32, w: f32);
    /// Upload a column-major `mat4` uniform to the current program.
    fn uniform_matrix_4_f32(
        &self,
        location: Option<&Self::UniformLocation>,
        transpose: bool,
        value: &[f32],
    );

    // Framebuffer

    /// Set the color used by [`clear`](Self::clear).
    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32);
    /// Clear the buffers selected by `mask`.
    fn clear(&self, mask: u32);
    /// Set the viewport rectangle in window pixels.
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    /// Draw `count` indices from the bound element buffer.
    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32);
}
