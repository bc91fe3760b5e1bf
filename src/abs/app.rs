//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context necessary for creating a windowed application.

use std::sync::Arc;

use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Scancode,
    log::{Category, Priority},
};

use crate::{
    config::WindowConfig,
    error::AppError,
    frame::{FrameInput, Surface},
};

/// Every GL entry point the renderer calls. Context creation fails if one is missing.
pub const REQUIRED_GL_FUNCTIONS: &[&str] = &[
    "glCreateShader",
    "glShaderSource",
    "glCompileShader",
    "glGetShaderiv",
    "glGetShaderInfoLog",
    "glDeleteShader",
    "glCreateProgram",
    "glAttachShader",
    "glDetachShader",
    "glLinkProgram",
    "glGetProgramiv",
    "glGetProgramInfoLog",
    "glUseProgram",
    "glDeleteProgram",
    "glGenVertexArrays",
    "glBindVertexArray",
    "glDeleteVertexArrays",
    "glGenBuffers",
    "glBindBuffer",
    "glBufferData",
    "glDeleteBuffers",
    "glEnableVertexAttribArray",
    "glVertexAttribPointer",
    "glDrawElements",
    "glClearColor",
    "glClear",
    "glGetError",
];

/// Returns the first required function the loader cannot resolve.
pub fn first_missing_function<F>(load: F) -> Option<&'static str>
where
    F: Fn(&str) -> *const (),
{
    REQUIRED_GL_FUNCTIONS
        .iter()
        .copied()
        .find(|name| load(name).is_null())
}

/// The [`log`] level an SDL message of the given priority is logged at.
pub fn sdl_log_level(priority: Priority) -> log::Level {
    match priority {
        Priority::Critical | Priority::Error => log::Level::Error,
        Priority::Warn => log::Level::Warn,
        Priority::Info => log::Level::Info,
        Priority::Debug => log::Level::Debug,
        Priority::Verbose => log::Level::Trace,
    }
}

/// SDL's log output function. Routes every SDL message through the logger, and so to stderr.
pub fn forward_sdl_log(priority: Priority, _category: Category, message: &str) {
    log::log!(target: "sdl2", sdl_log_level(priority), "{}", message);
}

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
///
/// Fields drop in declaration order, which tears things down in reverse order of creation.
pub struct App {
    pub event_pump: sdl2::EventPump,
    pub gl: Arc<glow::Context>,
    pub gl_context: sdl2::video::GLContext,
    pub window: sdl2::video::Window,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub sdl: sdl2::Sdl,
}

impl App {
    /// Creates a new [`App`] with a fixed-size window described by `config`.
    pub fn new(config: &WindowConfig) -> Result<Self, AppError> {
        let sdl = sdl2::init().map_err(AppError::Init)?;
        sdl2::log::set_output_function(forward_sdl_log);
        let video_subsystem = sdl.video().map_err(AppError::Init)?;
        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(3, 3);
        gl_attr.set_double_buffer(true);

        let window = video_subsystem
            .window(&config.title, config.width, config.height)
            .opengl()
            .position_centered()
            .build()
            .map_err(|e| AppError::WindowCreation(e.to_string()))?;
        let gl_context = window
            .gl_create_context()
            .map_err(AppError::WindowCreation)?;
        window
            .gl_make_current(&gl_context)
            .map_err(AppError::WindowCreation)?;

        if let Some(name) = first_missing_function(|s| video_subsystem.gl_get_proc_address(s)) {
            return Err(AppError::FunctionLoad(name));
        }
        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };

        if let Err(e) = video_subsystem.gl_set_swap_interval(sdl2::video::SwapInterval::VSync) {
            log::warn!("Could not enable vsync: {}", e);
        }

        let event_pump = sdl.event_pump().map_err(AppError::Init)?;

        log::info!(
            "Opened {}x{} window \"{}\"",
            config.width,
            config.height,
            config.title
        );

        Ok(Self {
            event_pump,
            gl: Arc::new(gl),
            gl_context,
            window,
            video_subsystem,
            sdl,
        })
    }
}

impl Surface for App {
    fn poll_input(&mut self) -> FrameInput {
        let mut close_requested = false;
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::Window {
                    win_event: WindowEvent::Close,
                    ..
                } => close_requested = true,
                _ => {}
            }
        }

        let escape_down = self
            .event_pump
            .keyboard_state()
            .is_scancode_pressed(Scancode::Escape);

        FrameInput {
            close_requested,
            escape_down,
        }
    }

    fn present(&mut self) {
        self.window.gl_swap_window();
    }
}

impl Drop for App {
    fn drop(&mut self) {
        log::debug!("Destroying window and shutting down SDL");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdl_priorities_map_to_log_levels() {
        assert_eq!(sdl_log_level(Priority::Critical), log::Level::Error);
        assert_eq!(sdl_log_level(Priority::Error), log::Level::Error);
        assert_eq!(sdl_log_level(Priority::Warn), log::Level::Warn);
        assert_eq!(sdl_log_level(Priority::Info), log::Level::Info);
        assert_eq!(sdl_log_level(Priority::Debug), log::Level::Debug);
        assert_eq!(sdl_log_level(Priority::Verbose), log::Level::Trace);

        forward_sdl_log(Priority::Error, Category::Video, "No available video device");
    }

    #[test]
    fn test_all_functions_present() {
        let found = first_missing_function(|_| 1 as *const ());
        assert_eq!(found, None);
    }

    #[test]
    fn test_reports_first_missing_function() {
        let found = first_missing_function(|name| {
            if name == "glGenVertexArrays" || name == "glClear" {
                std::ptr::null()
            } else {
                1 as *const ()
            }
        });
        assert_eq!(found, Some("glGenVertexArrays"));
    }
}
