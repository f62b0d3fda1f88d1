//! Shader programs built from a combined source file.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::driver::Driver;
use crate::error::{Error, Result};
use crate::gl_call;
use crate::shader_source::{ShaderProgramSource, ShaderStage};

/// A linked vertex + fragment program.
///
/// Uniform locations are looked up lazily and cached by name for the life
/// of the program, including names the program does not have.
pub struct Shader<D: Driver> {
    driver: Arc<D>,
    program: D::Program,
    uniform_cache: HashMap<String, Option<D::UniformLocation>>,
}

impl<D: Driver> Shader<D> {
    /// Build a program from a `#shader`-sectioned file.
    ///
    /// # Errors
    ///
    /// See [`from_source`](Self::from_source). An unreadable file shows up
    /// as a compile error for the vertex stage.
    pub fn from_file(driver: Arc<D>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading shader {}", path.display());
        Self::from_source(driver, &ShaderProgramSource::from_file(path))
    }

    /// Compile both stages, link and validate.
    ///
    /// The stage objects are detached and deleted once the program links,
    /// so only the program handle outlives this call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Compile`] naming the first stage that fails,
    /// [`Error::Link`] if linking fails, or [`Error::Create`] if the driver
    /// cannot allocate an object. Nothing allocated here is leaked on
    /// failure. A failed validation is only logged.
    pub fn from_source(driver: Arc<D>, source: &ShaderProgramSource) -> Result<Self> {
        let program = gl_call!(driver, driver.create_program()).map_err(Error::create("program"))?;

        let stages = match compile_stages(&*driver, source) {
            Ok(stages) => stages,
            Err(e) => {
                gl_call!(driver, driver.delete_program(program));
                return Err(e);
            }
        };

        for &shader in &stages {
            gl_call!(driver, driver.attach_shader(program, shader));
        }
        gl_call!(driver, driver.link_program(program));

        if !gl_call!(driver, driver.program_link_status(program)) {
            let log = gl_call!(driver, driver.program_info_log(program));
            log::error!("failed to link shader program:\n{log}");
            for &shader in &stages {
                gl_call!(driver, driver.delete_shader(shader));
            }
            gl_call!(driver, driver.delete_program(program));
            return Err(Error::Link { log });
        }

        gl_call!(driver, driver.validate_program(program));
        if !gl_call!(driver, driver.program_validate_status(program)) {
            let log = gl_call!(driver, driver.program_info_log(program));
            log::warn!("shader program failed validation: {log}");
        }

        for &shader in &stages {
            gl_call!(driver, driver.detach_shader(program, shader));
            gl_call!(driver, driver.delete_shader(shader));
        }

        Ok(Self {
            driver,
            program,
            uniform_cache: HashMap::new(),
        })
    }

    /// Make this program current.
    pub fn bind(&self) {
        gl_call!(self.driver, self.driver.use_program(Some(self.program)));
    }

    /// Clear the current program.
    pub fn unbind(&self) {
        gl_call!(self.driver, self.driver.use_program(None));
    }

    /// The driver's name for this program.
    #[must_use]
    pub fn handle(&self) -> D::Program {
        self.program
    }

    /// Location of the uniform `name`, or `None` if the program has no such
    /// active uniform.
    ///
    /// The driver is queried once per name; later calls hit the cache.
    pub fn uniform_location(&mut self, name: &str) -> Option<D::UniformLocation> {
        if let Some(location) = self.uniform_cache.get(name) {
            return location.clone();
        }

        let location = gl_call!(self.driver, self.driver.uniform_location(self.program, name));
        if location.is_none() {
            log::warn!("uniform '{name}' doesn't exist");
        }
        self.uniform_cache.insert(name.to_string(), location.clone());
        location
    }

    /// Set an `int` (or sampler) uniform on this program.
    ///
    /// The program must be bound.
    pub fn set_uniform_1i(&mut self, name: &str, value: i32) {
        let location = self.uniform_location(name);
        gl_call!(self.driver, self.driver.uniform_1_i32(location.as_ref(), value));
    }

    /// Set a `float` uniform on this program.
    ///
    /// The program must be bound.
    pub fn set_uniform_1f(&mut self, name: &str, value: f32) {
        let location = self.uniform_location(name);
        gl_call!(self.driver, self.driver.uniform_1_f32(location.as_ref(), value));
    }

    /// Set a `vec4` uniform on this program.
    ///
    /// The program must be bound.
    pub fn set_uniform_4f(&mut self, name: &str, v0: f32, v1: f32, v2: f32, v3: f32) {
        let location = self.uniform_location(name);
        gl_call!(
            self.driver,
            self.driver.uniform_4_f32(location.as_ref(), v0, v1, v2, v3)
        );
    }

    /// Set a `mat4` uniform on this program.
    ///
    /// The program must be bound.
    pub fn set_uniform_mat4(&mut self, name: &str, matrix: &glam::Mat4) {
        let location = self.uniform_location(name);
        gl_call!(
            self.driver,
            self.driver
                .uniform_matrix_4_f32(location.as_ref(), false, &matrix.to_cols_array())
        );
    }
}

impl<D: Driver> Drop for Shader<D> {
    fn drop(&mut self) {
        gl_call!(self.driver, self.driver.delete_program(self.program));
    }
}

/// Compile the vertex then the fragment stage.
///
/// On failure every stage object created so far is deleted.
fn compile_stages<D: Driver>(driver: &D, source: &ShaderProgramSource) -> Result<[D::Shader; 2]> {
    let vertex = compile_shader(driver, ShaderStage::Vertex, &source.vertex)?;
    match compile_shader(driver, ShaderStage::Fragment, &source.fragment) {
        Ok(fragment) => Ok([vertex, fragment]),
        Err(e) => {
            gl_call!(driver, driver.delete_shader(vertex));
            Err(e)
        }
    }
}

/// Compile a single stage from source.
fn compile_shader<D: Driver>(driver: &D, stage: ShaderStage, source: &str) -> Result<D::Shader> {
    let shader = gl_call!(driver, driver.create_shader(stage.gl_enum()))
        .map_err(Error::create("shader"))?;
    gl_call!(driver, driver.shader_source(shader, source));
    gl_call!(driver, driver.compile_shader(shader));

    if !gl_call!(driver, driver.shader_compile_status(shader)) {
        let log = gl_call!(driver, driver.shader_info_log(shader));
        log::error!("failed to compile {stage} shader:\n{log}");
        gl_call!(driver, driver.delete_shader(shader));
        return Err(Error::Compile { stage, log });
    }

    Ok(shader)
}
