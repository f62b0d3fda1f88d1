//! Splitting a combined shader file into per-stage sources.
//!
//! A single file carries both stages. A line containing `#shader vertex` or
//! `#shader fragment` starts the corresponding section:
//!
//! ```text
//! #shader vertex
//! #version 330 core
//! ...
//! #shader fragment
//! #version 330 core
//! ...
//! ```
//!
//! Lines before the first marker are dropped.

use std::fmt;
use std::path::Path;

const MARKER: &str = "#shader";

/// A programmable pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Per-vertex stage.
    Vertex,
    /// Per-fragment stage.
    Fragment,
}

impl ShaderStage {
    /// The GL enum used to create a shader object of this stage.
    #[must_use]
    pub fn gl_enum(self) -> u32 {
        match self {
            Self::Vertex => glow::VERTEX_SHADER,
            Self::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    /// Stage named by a marker line, if any.
    fn from_marker(line: &str) -> Option<Self> {
        if line.contains("vertex") {
            Some(Self::Vertex)
        } else if line.contains("fragment") {
            Some(Self::Fragment)
        } else {
            None
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        })
    }
}

/// Vertex and fragment sources read from one shader file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderProgramSource {
    /// Vertex stage source, one `\n`-terminated line per source line.
    pub vertex: String,
    /// Fragment stage source, one `\n`-terminated line per source line.
    pub fragment: String,
}

impl ShaderProgramSource {
    /// Split `text` into its two sections.
    ///
    /// A section that never appears comes back empty; the problem then
    /// surfaces when that stage fails to compile.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut source = Self::default();
        let mut current = None;

        for line in text.lines() {
            if line.contains(MARKER) {
                match ShaderStage::from_marker(line) {
                    Some(stage) => current = Some(stage),
                    None => log::debug!("ignoring unrecognised shader marker: {line:?}"),
                }
                continue;
            }

            let Some(stage) = current else { continue };
            let section = source.section_mut(stage);
            section.push_str(line);
            section.push('\n');
        }

        source
    }

    /// Read and split the file at `path`.
    ///
    /// An unreadable file yields two empty sections (and a warning), so the
    /// failure is reported by the compiler rather than here.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(e) => {
                log::warn!("could not read shader file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Source of the given stage.
    #[must_use]
    pub fn section(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }

    fn section_mut(&mut self, stage: ShaderStage) -> &mut String {
        match stage {
            ShaderStage::Vertex => &mut self.vertex,
            ShaderStage::Fragment => &mut self.fragment,
        }
    }
}
