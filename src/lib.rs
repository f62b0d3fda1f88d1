//! A minimal OpenGL walkthrough built on [glow].
//!
//! The crate wraps the handful of GL objects needed to put a flat-colored
//! quad on screen, each one tied to the lifetime of a Rust value:
//!
//! - [`VertexBuffer`] and [`IndexBuffer`] own buffer objects,
//! - [`VertexArray`] owns a vertex array object and attaches buffers to it
//!   according to a [`VertexBufferLayout`],
//! - [`Shader`] owns a linked program built from a single file split by
//!   [`ShaderProgramSource`], and caches uniform locations,
//! - [`Renderer`] clears the framebuffer and issues indexed draws.
//!
//! All of them talk to the GPU through the [`Driver`] trait. [`GlowDriver`]
//! implements it on top of a current OpenGL context; every call goes through
//! [`gl_call!`], which logs any GL error the call raised.
//!
//! # Features
//!
//! - **`window`** (default): the [`app`] module and the `glow-primer`
//!   binary, which open a window with winit and glutin and run the frame
//!   loop.
//!
//! [glow]: https://docs.rs/glow

pub mod animation;
#[cfg(feature = "window")]
pub mod app;
mod buffer;
pub mod config;
pub mod debug;
mod driver;
mod error;
mod layout;
pub mod logging;
mod renderer;
pub mod scene;
mod shader;
mod shader_source;
mod vertex_array;

#[cfg(test)]
mod testing;

pub use buffer::{IndexBuffer, VertexBuffer};
pub use driver::{Driver, GlowDriver};
pub use error::{Error, Result};
pub use layout::{VertexAttribute, VertexBufferElement, VertexBufferLayout};
pub use renderer::Renderer;
pub use shader::Shader;
pub use shader_source::{ShaderProgramSource, ShaderStage};
pub use vertex_array::VertexArray;
