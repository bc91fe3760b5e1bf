//! This module contains the core GPU abstractions: application and window setup,
//! the GL capability handle, shader management and mesh handling.

pub mod app;
pub mod gl;
pub mod mesh;
pub mod shader;

#[cfg(test)]
pub mod testing;

pub use app::*;
pub use gl::*;
pub use mesh::*;
pub use shader::*;
