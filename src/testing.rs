//! Test helpers.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A shader file in the system temp directory, removed on drop.
pub(crate) struct TempShaderFile {
    path: PathBuf,
}

impl TempShaderFile {
    pub(crate) fn new(contents: &str) -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "glow-primer-{}-{id}.shader",
            std::process::id()
        ));
        std::fs::write(&path, contents).expect("write temp shader file");
        Self { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempShaderFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Vertex stage passes the position through; fragment stage writes a
/// uniform color.
pub(crate) const FLAT_COLOR_SHADER: &str = "\
#shader vertex
#version 330 core

layout(location = 0) in vec4 position;

void main()
{
    gl_Position = position;
}

#shader fragment
#version 330 core

layout(location = 0) out vec4 color;

uniform vec4 u_Color;

void main()
{
    color = u_Color;
}
";
