//! A recording [`Driver`] for unit tests.
//!
//! Handles are issued from a single counter and never reused. Every state
//! changing call is appended to a log so tests can assert on ordering and
//! call counts. Shader "compilation" succeeds when the source defines
//! `main`, and linking assigns locations to every `uniform` declared in the
//! attached stages.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Mutex, MutexGuard};

use super::Driver;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    CreateBuffer(u32),
    DeleteBuffer(u32),
    BindBuffer(u32, Option<u32>),
    BufferData { target: u32, len: usize, usage: u32 },
    CreateVertexArray(u32),
    DeleteVertexArray(u32),
    BindVertexArray(Option<u32>),
    EnableAttrib(u32),
    AttribPointer {
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    CreateShader(u32, u32),
    DeleteShader(u32),
    CreateProgram(u32),
    DeleteProgram(u32),
    AttachShader(u32, u32),
    DetachShader(u32, u32),
    LinkProgram(u32),
    ValidateProgram(u32),
    UseProgram(Option<u32>),
    UniformLocation(String),
    Uniform1i(Option<i32>, i32),
    Uniform1f(Option<i32>, f32),
    Uniform4f(Option<i32>, [f32; 4]),
    UniformMat4(Option<i32>, Vec<f32>),
    ClearColor([f32; 4]),
    Clear(u32),
    Viewport(i32, i32, i32, i32),
    DrawElements { mode: u32, count: i32, element_type: u32, offset: i32 },
}

#[derive(Default)]
struct Program {
    attached: Vec<u32>,
    linked: bool,
    uniforms: HashMap<String, i32>,
}

#[derive(Default)]
struct State {
    next_handle: u32,
    calls: Vec<Call>,
    errors: VecDeque<u32>,
    fail_allocations: bool,
    fail_link: bool,
    buffers: HashSet<u32>,
    vertex_arrays: HashSet<u32>,
    shaders: HashMap<u32, (String, bool)>,
    programs: HashMap<u32, Program>,
}

impl State {
    fn allocate(&mut self) -> Result<u32, String> {
        if self.fail_allocations {
            return Err("out of memory".to_string());
        }
        self.next_handle += 1;
        Ok(self.next_handle)
    }
}

#[derive(Default)]
pub(crate) struct FakeDriver {
    state: Mutex<State>,
}

impl FakeDriver {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("fake driver state poisoned")
    }

    fn record(&self, call: Call) {
        self.state().calls.push(call);
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.state().calls.clear();
    }

    pub(crate) fn count_calls(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.state().calls.iter().filter(|c| pred(c)).count()
    }

    /// Queue an error code to be reported by the next `get_error`.
    pub(crate) fn push_error(&self, code: u32) {
        self.state().errors.push_back(code);
    }

    pub(crate) fn pending_errors(&self) -> usize {
        self.state().errors.len()
    }

    pub(crate) fn fail_allocations(&self, fail: bool) {
        self.state().fail_allocations = fail;
    }

    pub(crate) fn fail_link(&self, fail: bool) {
        self.state().fail_link = fail;
    }

    pub(crate) fn live_buffers(&self) -> usize {
        self.state().buffers.len()
    }

    pub(crate) fn live_vertex_arrays(&self) -> usize {
        self.state().vertex_arrays.len()
    }

    pub(crate) fn live_shaders(&self) -> usize {
        self.state().shaders.len()
    }

    pub(crate) fn live_programs(&self) -> usize {
        self.state().programs.len()
    }
}

/// Names declared as `uniform <type> <name>;` in a GLSL source.
fn declared_uniforms(source: &str) -> impl Iterator<Item = &str> {
    source.lines().filter_map(|line| {
        let rest = line.trim().strip_prefix("uniform ")?;
        let name = rest.split_whitespace().last()?;
        Some(name.trim_end_matches(';'))
    })
}

impl Driver for FakeDriver {
    type Buffer = u32;
    type VertexArray = u32;
    type Shader = u32;
    type Program = u32;
    type UniformLocation = i32;

    fn get_error(&self) -> u32 {
        self.state().errors.pop_front().unwrap_or(glow::NO_ERROR)
    }

    fn version(&self) -> String {
        "3.3.0 FakeDriver".to_string()
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let mut state = self.state();
        let handle = state.allocate()?;
        state.buffers.insert(handle);
        state.calls.push(Call::CreateBuffer(handle));
        Ok(handle)
    }

    fn delete_buffer(&self, buffer: u32) {
        let mut state = self.state();
        assert!(state.buffers.remove(&buffer), "deleted unknown buffer {buffer}");
        state.calls.push(Call::DeleteBuffer(buffer));
    }

    fn bind_buffer(&self, target: u32, buffer: Option<u32>) {
        self.record(Call::BindBuffer(target, buffer));
    }

    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        self.record(Call::BufferData { target, len: data.len(), usage });
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let mut state = self.state();
        let handle = state.allocate()?;
        state.vertex_arrays.insert(handle);
        state.calls.push(Call::CreateVertexArray(handle));
        Ok(handle)
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        let mut state = self.state();
        assert!(
            state.vertex_arrays.remove(&vertex_array),
            "deleted unknown vertex array {vertex_array}"
        );
        state.calls.push(Call::DeleteVertexArray(vertex_array));
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(Call::BindVertexArray(vertex_array));
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::EnableAttrib(index));
    }

    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.record(Call::AttribPointer {
            index,
            size,
            data_type,
            normalized,
            stride,
            offset,
        });
    }

    fn create_shader(&self, stage: u32) -> Result<u32, String> {
        let mut state = self.state();
        let handle = state.allocate()?;
        state.shaders.insert(handle, (String::new(), false));
        state.calls.push(Call::CreateShader(handle, stage));
        Ok(handle)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        if let Some(entry) = self.state().shaders.get_mut(&shader) {
            entry.0 = source.to_string();
        }
    }

    fn compile_shader(&self, shader: u32) {
        if let Some(entry) = self.state().shaders.get_mut(&shader) {
            entry.1 = entry.0.contains("void main");
        }
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.state().shaders.get(&shader).is_some_and(|entry| entry.1)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        if self.shader_compile_status(shader) {
            String::new()
        } else {
            "ERROR: 0:1: 'main' : function not defined".to_string()
        }
    }

    fn delete_shader(&self, shader: u32) {
        let mut state = self.state();
        assert!(state.shaders.remove(&shader).is_some(), "deleted unknown shader {shader}");
        state.calls.push(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let mut state = self.state();
        let handle = state.allocate()?;
        state.programs.insert(handle, Program::default());
        state.calls.push(Call::CreateProgram(handle));
        Ok(handle)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        let mut state = self.state();
        if let Some(p) = state.programs.get_mut(&program) {
            p.attached.push(shader);
        }
        state.calls.push(Call::AttachShader(program, shader));
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        let mut state = self.state();
        if let Some(p) = state.programs.get_mut(&program) {
            p.attached.retain(|&s| s != shader);
        }
        state.calls.push(Call::DetachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        let mut state = self.state();
        state.calls.push(Call::LinkProgram(program));
        let Some(attached) = state.programs.get(&program).map(|p| p.attached.clone()) else {
            return;
        };
        let mut linked = !state.fail_link && !attached.is_empty();
        let mut uniforms = HashMap::new();
        for shader in &attached {
            match state.shaders.get(shader) {
                Some((source, true)) => {
                    for name in declared_uniforms(source) {
                        let next = i32::try_from(uniforms.len()).unwrap_or(i32::MAX);
                        uniforms.entry(name.to_string()).or_insert(next);
                    }
                }
                _ => linked = false,
            }
        }
        if let Some(p) = state.programs.get_mut(&program) {
            p.linked = linked;
            p.uniforms = uniforms;
        }
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.state().programs.get(&program).is_some_and(|p| p.linked)
    }

    fn validate_program(&self, program: u32) {
        self.record(Call::ValidateProgram(program));
    }

    fn program_validate_status(&self, program: u32) -> bool {
        self.program_link_status(program)
    }

    fn program_info_log(&self, program: u32) -> String {
        if self.program_link_status(program) {
            String::new()
        } else {
            "error: linking with uncompiled/unspecialized shader".to_string()
        }
    }

    fn delete_program(&self, program: u32) {
        let mut state = self.state();
        assert!(state.programs.remove(&program).is_some(), "deleted unknown program {program}");
        state.calls.push(Call::DeleteProgram(program));
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn uniform_location(&self, program: u32, name: &str) -> Option<i32> {
        let mut state = self.state();
        state.calls.push(Call::UniformLocation(name.to_string()));
        state
            .programs
            .get(&program)
            .and_then(|p| p.uniforms.get(name).copied())
    }

    fn uniform_1_i32(&self, location: Option<&i32>, x: i32) {
        self.record(Call::Uniform1i(location.copied(), x));
    }

    fn uniform_1_f32(&self, location: Option<&i32>, x: f32) {
        self.record(Call::Uniform1f(location.copied(), x));
    }

    fn uniform_4_f32(&self, location: Option<&i32>, x: f32, y: f32, z: f32, w: f32) {
        self.record(Call::Uniform4f(location.copied(), [x, y, z, w]));
    }

    fn uniform_matrix_4_f32(&self, location: Option<&i32>, _transpose: bool, value: &[f32]) {
        self.record(Call::UniformMat4(location.copied(), value.to_vec()));
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.record(Call::ClearColor([red, green, blue, alpha]));
    }

    fn clear(&self, mask: u32) {
        self.record(Call::Clear(mask));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport(x, y, width, height));
    }

    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32) {
        self.record(Call::DrawElements {
            mode,
            count,
            element_type,
            offset,
        });
    }
}
