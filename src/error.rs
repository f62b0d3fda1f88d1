//! Error type shared by the GPU wrappers.

use crate::shader_source::ShaderStage;

/// Failures surfaced while creating GPU objects.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The driver refused to allocate a name for a GPU object.
    #[error("failed to create {object}: {reason}")]
    Create {
        /// What was being created ("buffer", "program", ...).
        object: &'static str,
        /// The driver's message.
        reason: String,
    },
    /// A shader stage did not compile.
    #[error("failed to compile {stage} shader:\n{log}")]
    Compile {
        /// The stage that failed.
        stage: ShaderStage,
        /// The driver's info log.
        log: String,
    },
    /// The program did not link.
    #[error("failed to link shader program:\n{log}")]
    Link {
        /// The driver's info log.
        log: String,
    },
    /// An index buffer too large to be drawn with a single call.
    #[error("{0} indices exceed the range of a single draw call")]
    IndexCount(usize),
}

/// Shorthand for results carrying [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn create(object: &'static str) -> impl FnOnce(String) -> Self {
        move |reason| Self::Create { object, reason }
    }
}
