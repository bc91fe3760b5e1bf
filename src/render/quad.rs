//! The fixed quad: its geometry and its shaders.

use std::sync::Arc;

use glam::Vec3;

use crate::{
    abs::{GlContext, Mesh, Vertex},
    config::ShaderSource,
};

#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct QuadVertex {
    pub position: Vec3,
}

impl Vertex for QuadVertex {
    fn vertex_attribs<G: GlContext>(gl: &G) {
        unsafe {
            let stride = std::mem::size_of::<QuadVertex>() as i32;

            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
        }
    }
}

pub const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex {
        position: Vec3::new(0.5, 0.5, 0.0),
    },
    QuadVertex {
        position: Vec3::new(0.5, -0.5, 0.0),
    },
    QuadVertex {
        position: Vec3::new(-0.5, -0.5, 0.0),
    },
    QuadVertex {
        position: Vec3::new(-0.5, 0.5, 0.0),
    },
];

/// Two triangles sharing the top-left to bottom-right diagonal.
pub const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

const EMBEDDED_VERTEX: &str = "#version 330 core
layout (location = 0) in vec3 a_position;
void main() {
    gl_Position = vec4(a_position.x, a_position.y, a_position.z, 1.0);
}";

const EMBEDDED_FRAGMENT: &str = "#version 330 core
out vec4 frag_color;
void main() {
    frag_color = vec4(1.0, 0.5, 0.2, 1.0);
}";

/// Returns the `(vertex, fragment)` source pair for the quad.
pub fn shader_sources(source: ShaderSource) -> (&'static str, &'static str) {
    match source {
        ShaderSource::Embedded => (EMBEDDED_VERTEX, EMBEDDED_FRAGMENT),
        ShaderSource::Bundled => (
            include_str!("shaders/quad/vert.glsl"),
            include_str!("shaders/quad/frag.glsl"),
        ),
    }
}

/// Uploads the quad to the GPU.
pub fn quad_mesh<G: GlContext>(gl: &Arc<G>) -> Result<Mesh<G>, String> {
    Mesh::new(gl, &QUAD_VERTICES, &QUAD_INDICES, glow::TRIANGLES)
}
