//! The frame loop.
//!
//! [`run_frames`] drives the `Running -> Closing` state machine and [`run_session`] wraps it with
//! the setup and ordered teardown of the program and mesh.

use std::sync::Arc;

use glam::Vec4;

use crate::{
    abs::{GlContext, Mesh, ShaderProgram},
    config::AppConfig,
    error::AppError,
    render::quad,
};

/// What the window reported at the start of a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// The window system asked to close the window.
    pub close_requested: bool,
    /// The escape key is currently held down.
    pub escape_down: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Closing,
}

impl FrameInput {
    pub fn next_state(&self) -> LoopState {
        if self.close_requested || self.escape_down {
            LoopState::Closing
        } else {
            LoopState::Running
        }
    }
}

/// The window side of the frame loop.
pub trait Surface {
    /// Processes pending window events and samples the input state.
    fn poll_input(&mut self) -> FrameInput;
    /// Swaps the back buffer to the screen.
    fn present(&mut self);
}

/// Renders until the surface asks to close. Returns the number of frames presented.
pub fn run_frames<G, S>(
    gl: &G,
    surface: &mut S,
    program: &ShaderProgram<G>,
    mesh: &Mesh<G>,
    clear_color: Vec4,
) -> u64
where
    G: GlContext,
    S: Surface,
{
    let mut frames = 0;

    loop {
        let input = surface.poll_input();
        if input.next_state() == LoopState::Closing {
            log::info!("Closing after {} frames", frames);
            break;
        }

        unsafe {
            gl.clear_color(clear_color.x, clear_color.y, clear_color.z, clear_color.w);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }
        program.use_program();
        mesh.draw();

        let error = unsafe { gl.get_error() };
        if error != glow::NO_ERROR {
            log::warn!("GL error 0x{:04X} in frame {}", error, frames);
        }

        surface.present();
        frames += 1;
    }

    frames
}

/// Builds the quad's program and mesh, renders until closed, then releases everything.
///
/// Teardown runs in reverse order of acquisition: mesh, program, then the surface (the window).
/// The shaders are already gone by the time the first frame runs.
pub fn run_session<G, S>(gl: &Arc<G>, mut surface: S, config: &AppConfig) -> Result<u64, AppError>
where
    G: GlContext,
    S: Surface,
{
    let (vertex_source, fragment_source) = quad::shader_sources(config.shader_source);
    let program = ShaderProgram::from_sources(gl, vertex_source, fragment_source)?;
    log::info!("Built quad shader program from {:?} sources", config.shader_source);

    let mesh = quad::quad_mesh(gl).map_err(AppError::Resource)?;
    log::debug!(
        "Quad mesh ready: {} vertices, {} indices",
        mesh.vertex_count(),
        mesh.index_count()
    );

    let frames = run_frames(
        gl.as_ref(),
        &mut surface,
        &program,
        &mesh,
        config.clear_color,
    );

    drop(mesh);
    drop(program);
    drop(surface);

    Ok(frames)
}
