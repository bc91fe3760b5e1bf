//! OpenGL Shaders
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs for managing OpenGL shaders,
//! and the [`ShaderError`] they fail with.

use std::{fmt, sync::Arc};

use super::GlContext;

/// The most bytes of a compiler or linker log that are kept.
pub const INFO_LOG_LIMIT: usize = 512;

/// The pipeline stage a [`Shader`] is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// The OpenGL enum for this stage.
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Errors raised while compiling shaders or linking a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderError {
    /// The GL object could not be created.
    Create(String),
    /// A stage failed to compile. `log` holds at most [`INFO_LOG_LIMIT`] bytes.
    Compile { stage: ShaderStage, log: String },
    /// The program failed to link. Holds at most [`INFO_LOG_LIMIT`] bytes of log.
    Link(String),
    /// A program was given a shader in the wrong slot.
    StageMismatch {
        expected: ShaderStage,
        found: ShaderStage,
    },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Create(e) => write!(f, "Failed to create GL object: {}", e),
            ShaderError::Compile { stage, log } => {
                write!(f, "Failed to compile {} shader: {}", stage, log)
            }
            ShaderError::Link(log) => write!(f, "Failed to link shader program: {}", log),
            ShaderError::StageMismatch { expected, found } => write!(
                f,
                "Expected a {} shader but got a {} shader",
                expected, found
            ),
        }
    }
}

impl std::error::Error for ShaderError {}

/// Cuts an info log down to [`INFO_LOG_LIMIT`] bytes without splitting a character.
pub fn truncate_info_log(mut log: String) -> String {
    if log.len() > INFO_LOG_LIMIT {
        let mut end = INFO_LOG_LIMIT;
        while !log.is_char_boundary(end) {
            end -= 1;
        }
        log.truncate(end);
    }
    log
}

/// Represents an individual OpenGL shader.
pub struct Shader<G: GlContext> {
    gl: Arc<G>,
    id: G::Shader,
    stage: ShaderStage,
}

impl<G: GlContext> Shader<G> {
    /// Compiles a new shader from the given source code.
    pub fn new(gl: &Arc<G>, stage: ShaderStage, source: &str) -> Result<Self, ShaderError> {
        unsafe {
            let shader = gl
                .create_shader(stage.gl_enum())
                .map_err(ShaderError::Create)?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let log = truncate_info_log(gl.get_shader_info_log(shader));
                gl.delete_shader(shader);
                return Err(ShaderError::Compile { stage, log });
            }

            log::debug!("Compiled {} shader {:?}", stage, shader);

            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
                stage,
            })
        }
    }
}

impl<G: GlContext> Drop for Shader<G> {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// Represents an OpenGL shader program linked from one vertex and one fragment shader.
///
/// The program does not own its shaders; they are deleted when the [`Shader`] values drop.
pub struct ShaderProgram<G: GlContext> {
    gl: Arc<G>,
    id: G::Program,
}

impl<G: GlContext> ShaderProgram<G> {
    /// Links a new shader program from the given shaders.
    pub fn new(gl: &Arc<G>, vertex: &Shader<G>, fragment: &Shader<G>) -> Result<Self, ShaderError> {
        for (shader, expected) in [
            (vertex, ShaderStage::Vertex),
            (fragment, ShaderStage::Fragment),
        ] {
            if shader.stage != expected {
                return Err(ShaderError::StageMismatch {
                    expected,
                    found: shader.stage,
                });
            }
        }

        unsafe {
            let program = gl.create_program().map_err(ShaderError::Create)?;

            gl.attach_shader(program, vertex.id);
            gl.attach_shader(program, fragment.id);

            gl.link_program(program);

            if !gl.get_program_link_status(program) {
                let log = truncate_info_log(gl.get_program_info_log(program));
                gl.delete_program(program);
                return Err(ShaderError::Link(log));
            }

            gl.detach_shader(program, vertex.id);
            gl.detach_shader(program, fragment.id);

            log::debug!("Linked shader program {:?}", program);

            Ok(Self {
                gl: Arc::clone(gl),
                id: program,
            })
        }
    }

    /// Compiles both stages and links them.
    ///
    /// Stops at the first failure: a broken vertex stage means the fragment stage is never
    /// compiled, and a broken fragment stage means no program is created.
    pub fn from_sources(
        gl: &Arc<G>,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, ShaderError> {
        let vertex = Shader::new(gl, ShaderStage::Vertex, vertex_source)?;
        let fragment = Shader::new(gl, ShaderStage::Fragment, fragment_source)?;
        Self::new(gl, &vertex, &fragment)
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }
}

impl<G: GlContext> Drop for ShaderProgram<G> {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}
