//! Error types for the geometry kernel

use thiserror::Error;

/// Kernel error taxonomy
///
/// The kernel has no I/O, so only two faults exist: a bad configuration
/// caught at setup time, and a zero-norm orientation that can only come
/// from a prior logic error. Per-point projection faults are handled
/// locally by skipping the point, never through this type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("orientation quaternion has zero norm and cannot be renormalized")]
    InvalidOrientation,
}

/// Result type alias for kernel operations
pub type Result<T> = std::result::Result<T, Error>;
