//! Program configuration.
//!
//! There is no config file and no command line. [`AppConfig::default`] describes the program,
//! and [`AppConfig::from_env`] only lets `RUST_LOG` pick the log level.

use glam::Vec4;
use log::LevelFilter;

/// Where the quad's shader text comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShaderSource {
    /// Literal strings compiled into the program.
    Embedded,
    /// The `.glsl` files under `src/render/shaders/quad`, bundled at build time.
    #[default]
    Bundled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "glquad".to_string(),
            width: 640,
            height: 480,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub clear_color: Vec4,
    pub shader_source: ShaderSource,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            clear_color: Vec4::new(0.0, 1.0, 0.0, 1.0),
            shader_source: ShaderSource::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// The default config, with the log level taken from `RUST_LOG` when it names one.
    pub fn from_env() -> Self {
        Self::default().with_log_override(std::env::var("RUST_LOG").ok().as_deref())
    }

    /// Applies a log level name such as `"debug"`. Unknown names are ignored.
    pub fn with_log_override(mut self, level: Option<&str>) -> Self {
        if let Some(level) = level.and_then(|l| l.trim().parse::<LevelFilter>().ok()) {
            self.log_level = level;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 480);
        assert_eq!(config.clear_color, Vec4::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(config.shader_source, ShaderSource::Bundled);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_log_override() {
        let config = AppConfig::default().with_log_override(Some("debug"));
        assert_eq!(config.log_level, LevelFilter::Debug);

        let config = AppConfig::default().with_log_override(Some("WARN "));
        assert_eq!(config.log_level, LevelFilter::Warn);

        let config = AppConfig::default().with_log_override(Some("glquad=trace"));
        assert_eq!(config.log_level, LevelFilter::Info);

        let config = AppConfig::default().with_log_override(None);
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
