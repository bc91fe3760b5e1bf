//! Application level errors.
//!
//! Every failure is fatal. [`AppError::exit_code`] gives each kind its own process exit status.

use std::fmt;

use crate::abs::{ShaderError, ShaderStage};

#[derive(Debug)]
pub enum AppError {
    /// SDL or its video subsystem failed to initialize.
    Init(String),
    /// The window or its GL context could not be created.
    WindowCreation(String),
    /// A required GL entry point did not resolve.
    FunctionLoad(&'static str),
    VertexCompile(String),
    FragmentCompile(String),
    Link(String),
    /// A GL object could not be created, or mesh data was rejected.
    Resource(String),
}

impl AppError {
    /// The process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Init(_) => 1,
            AppError::WindowCreation(_) => 2,
            AppError::FunctionLoad(_) => 3,
            AppError::VertexCompile(_) => 4,
            AppError::FragmentCompile(_) => 5,
            AppError::Link(_) => 6,
            AppError::Resource(_) => 7,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Init(e) => write!(f, "Failed to initialize SDL: {}", e),
            AppError::WindowCreation(e) => write!(f, "Failed to create window: {}", e),
            AppError::FunctionLoad(name) => write!(f, "Failed to load OpenGL function {}", name),
            AppError::VertexCompile(log) => {
                write!(f, "Vertex shader compilation failed: {}", log)
            }
            AppError::FragmentCompile(log) => {
                write!(f, "Fragment shader compilation failed: {}", log)
            }
            AppError::Link(log) => write!(f, "Shader program linking failed: {}", log),
            AppError::Resource(e) => write!(f, "Failed to create GPU resource: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ShaderError> for AppError {
    fn from(e: ShaderError) -> Self {
        match e {
            ShaderError::Compile {
                stage: ShaderStage::Vertex,
                log,
            } => AppError::VertexCompile(log),
            ShaderError::Compile {
                stage: ShaderStage::Fragment,
                log,
            } => AppError::FragmentCompile(log),
            ShaderError::Link(log) => AppError::Link(log),
            other => AppError::Resource(other.to_string()),
        }
    }
}
