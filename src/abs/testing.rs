//! A recording [`GlContext`] for tests.
//!
//! Handles are plain `u32`s handed out from a counter. A shader fails to compile when its source
//! contains `#error`, mirroring what a real driver does with that directive.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use super::GlContext;

/// One recorded GL call (or window event, see [`MockGl::log`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateShader { id: u32, stage: u32 },
    ShaderSource(u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader { program: u32, shader: u32 },
    DetachShader { program: u32, shader: u32 },
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    CreateBuffer(u32),
    BindBuffer { target: u32, buffer: Option<u32> },
    BufferData { target: u32, len: usize, usage: u32 },
    DeleteBuffer(u32),
    EnableVertexAttribArray(u32),
    VertexAttribPointer { index: u32, size: i32, data_type: u32, stride: i32, offset: i32 },
    DrawElements { mode: u32, count: i32, element_type: u32 },
    ClearColor([f32; 4]),
    Clear(u32),
    Present,
    DestroyWindow,
}

#[derive(Default)]
pub struct MockGl {
    log: Rc<RefCell<Vec<Call>>>,
    next_id: Cell<u32>,
    sources: RefCell<HashMap<u32, String>>,
    pub fail_link: Cell<bool>,
    /// `Some(n)`: the first `n` buffer creations succeed, later ones fail.
    pub fail_buffer_after: Cell<Option<u32>>,
    pub pending_error: Cell<u32>,
}

impl MockGl {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared call log, so a mock window can append its own events in order.
    pub fn log(&self) -> Rc<RefCell<Vec<Call>>> {
        Rc::clone(&self.log)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.log.borrow_mut().clear();
    }

    fn record(&self, call: Call) {
        self.log.borrow_mut().push(call);
    }

    fn next(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn compiles(&self, shader: u32) -> bool {
        self.sources
            .borrow()
            .get(&shader)
            .is_some_and(|source| !source.contains("#error"))
    }
}

impl GlContext for MockGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;

    unsafe fn create_shader(&self, shader_type: u32) -> Result<u32, String> {
        let id = self.next();
        self.record(Call::CreateShader { id, stage: shader_type });
        Ok(id)
    }

    unsafe fn shader_source(&self, shader: u32, source: &str) {
        self.sources.borrow_mut().insert(shader, source.to_string());
        self.record(Call::ShaderSource(shader));
    }

    unsafe fn compile_shader(&self, shader: u32) {
        self.record(Call::CompileShader(shader));
    }

    unsafe fn get_shader_compile_status(&self, shader: u32) -> bool {
        self.compiles(shader)
    }

    unsafe fn get_shader_info_log(&self, shader: u32) -> String {
        if self.compiles(shader) {
            String::new()
        } else {
            "0:1(1): error: #error directive encountered".to_string()
        }
    }

    unsafe fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
    }

    unsafe fn create_program(&self) -> Result<u32, String> {
        let id = self.next();
        self.record(Call::CreateProgram(id));
        Ok(id)
    }

    unsafe fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::AttachShader { program, shader });
    }

    unsafe fn detach_shader(&self, program: u32, shader: u32) {
        self.record(Call::DetachShader { program, shader });
    }

    unsafe fn link_program(&self, program: u32) {
        self.record(Call::LinkProgram(program));
    }

    unsafe fn get_program_link_status(&self, _program: u32) -> bool {
        !self.fail_link.get()
    }

    unsafe fn get_program_info_log(&self, _program: u32) -> String {
        if self.fail_link.get() {
            "error: vertex shader output `color` not written".repeat(40)
        } else {
            String::new()
        }
    }

    unsafe fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    unsafe fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
    }

    unsafe fn create_vertex_array(&self) -> Result<u32, String> {
        let id = self.next();
        self.record(Call::CreateVertexArray(id));
        Ok(id)
    }

    unsafe fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(Call::BindVertexArray(vertex_array));
    }

    unsafe fn delete_vertex_array(&self, vertex_array: u32) {
        self.record(Call::DeleteVertexArray(vertex_array));
    }

    unsafe fn create_buffer(&self) -> Result<u32, String> {
        if let Some(remaining) = self.fail_buffer_after.get() {
            if remaining == 0 {
                return Err("out of buffer objects".to_string());
            }
            self.fail_buffer_after.set(Some(remaining - 1));
        }
        let id = self.next();
        self.record(Call::CreateBuffer(id));
        Ok(id)
    }

    unsafe fn bind_buffer(&self, target: u32, buffer: Option<u32>) {
        self.record(Call::BindBuffer { target, buffer });
    }

    unsafe fn buffer_data_u8_slice(&self, target: u32, data: &[u8], usage: u32) {
        self.record(Call::BufferData {
            target,
            len: data.len(),
            usage,
        });
    }

    unsafe fn delete_buffer(&self, buffer: u32) {
        self.record(Call::DeleteBuffer(buffer));
    }

    unsafe fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::EnableVertexAttribArray(index));
    }

    unsafe fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        _normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.record(Call::VertexAttribPointer {
            index,
            size,
            data_type,
            stride,
            offset,
        });
    }

    unsafe fn draw_elements(&self, mode: u32, count: i32, element_type: u32, _offset: i32) {
        self.record(Call::DrawElements {
            mode,
            count,
            element_type,
        });
    }

    unsafe fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.record(Call::ClearColor([red, green, blue, alpha]));
    }

    unsafe fn clear(&self, mask: u32) {
        self.record(Call::Clear(mask));
    }

    unsafe fn get_error(&self) -> u32 {
        self.pending_error.replace(glow::NO_ERROR)
    }
}
