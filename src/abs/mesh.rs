//! Mesh management module.
//!
//! This module defines the [`Mesh`] struct for managing mesh data on the GPU side.
//! Vertices should implement the [`Vertex`] trait.

use std::sync::Arc;

use super::GlContext;

/// Trait that defines the necessary methods for a vertex.
pub trait Vertex: bytemuck::Pod {
    /// Sets up the vertex attribute pointers for the vertex.
    fn vertex_attribs<G: GlContext>(gl: &G);
}

/// Represents a static mesh stored on the GPU side.
///
/// Vertex and index data are uploaded once, at exactly the size given, and never modified.
pub struct Mesh<G: GlContext> {
    gl: Arc<G>,
    draw_mode: u32,
    vao: G::VertexArray,
    vbo: G::Buffer,
    ebo: G::Buffer,
    vertex_count: usize,
    index_count: i32,
}

/// Converts an index list length to the count `glDrawElements` takes.
fn draw_count(len: usize) -> Result<i32, String> {
    i32::try_from(len).map_err(|_| format!("{} indices are too many for one draw call", len))
}

impl<G: GlContext> Mesh<G> {
    /// Creates a new mesh from the given vertex and index data.
    ///
    /// Fails if there are no indices, if there are more than `i32::MAX`, or if an index points
    /// past the last vertex. GL objects created before a failure are deleted again.
    pub fn new<V: Vertex>(
        gl: &Arc<G>,
        vertices: &[V],
        indices: &[u32],
        draw_mode: u32,
    ) -> Result<Self, String> {
        if indices.is_empty() {
            return Err("Mesh has no indices".to_string());
        }
        let index_count = draw_count(indices.len())?;
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(format!(
                "Index {} is out of range for {} vertices",
                index,
                vertices.len()
            ));
        }

        unsafe {
            let vao = gl.create_vertex_array()?;
            let vbo = match gl.create_buffer() {
                Ok(vbo) => vbo,
                Err(e) => {
                    gl.delete_vertex_array(vao);
                    return Err(e);
                }
            };
            let ebo = match gl.create_buffer() {
                Ok(ebo) => ebo,
                Err(e) => {
                    gl.delete_vertex_array(vao);
                    gl.delete_buffer(vbo);
                    return Err(e);
                }
            };

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );

            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(indices),
                glow::STATIC_DRAW,
            );

            V::vertex_attribs(gl.as_ref());

            // the element buffer binding is part of the VAO state, so unbind the VAO first
            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);

            log::debug!(
                "Uploaded mesh with {} vertices and {} indices",
                vertices.len(),
                indices.len()
            );

            Ok(Self {
                gl: Arc::clone(gl),
                draw_mode,
                vao,
                vbo,
                ebo,
                vertex_count: vertices.len(),
                index_count,
            })
        }
    }

    /// Draws the mesh.
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            self.gl.draw_elements(
                self.draw_mode,
                self.index_count,
                glow::UNSIGNED_INT,
                0,
            );
            self.gl.bind_vertex_array(None);
        }
    }

    /// Returns the amount of vertices uploaded.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the amount of indices used in the mesh.
    pub fn index_count(&self) -> usize {
        self.index_count as usize
    }
}

impl<G: GlContext> Drop for Mesh<G> {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_vertex_array(self.vao);
            self.gl.delete_buffer(self.vbo);
            self.gl.delete_buffer(self.ebo);
        }
    }
}
