//! Error types surfaced by the render orchestration layer.
//!
//! Only programming errors are typed here. Failures that belong to external
//! collaborators (texture decoding, geometry upload, config files) travel as
//! `anyhow::Error` from the functions that call into those collaborators.

use thiserror::Error;

use crate::pipelines::program::ShaderId;

/// Raised when a shader program is used before it was registered with the
/// [`ShaderManager`](crate::pipelines::manager::ShaderManager).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShaderError {
    #[error("shader {0} was used but never registered")]
    Unregistered(ShaderId),
}
