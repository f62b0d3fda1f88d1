//! Application configuration.

use std::path::PathBuf;

use crate::logging::LoggingConfig;

/// Shader file shipped with the crate.
pub const DEFAULT_SHADER_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/res/shaders/basic.shader");

/// Window creation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    /// Title bar text.
    pub title: String,
    /// Initial inner width in logical pixels.
    pub width: u32,
    /// Initial inner height in logical pixels.
    pub height: u32,
    /// Synchronize buffer swaps with the display refresh.
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hello World".to_string(),
            width: 640,
            height: 480,
            vsync: true,
        }
    }
}

/// Requested OpenGL context. Always a core profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlConfig {
    /// Major version.
    pub major: u8,
    /// Minor version.
    pub minor: u8,
}

impl Default for GlConfig {
    fn default() -> Self {
        Self { major: 3, minor: 3 }
    }
}

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Window settings.
    pub window: WindowConfig,
    /// Context version.
    pub gl: GlConfig,
    /// Combined `#shader vertex` / `#shader fragment` source file.
    pub shader_path: PathBuf,
    /// Background color, RGBA.
    pub clear_color: [f32; 4],
    /// Logger settings.
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            gl: GlConfig::default(),
            shader_path: PathBuf::from(DEFAULT_SHADER_PATH),
            clear_color: [0.0, 0.0, 0.0, 1.0],
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Use a different shader file.
    #[must_use]
    pub fn with_shader_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.shader_path = path.into();
        self
    }
}
