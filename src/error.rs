use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the shapekern geometry kernel.
#[derive(Debug, Error)]
pub enum ShapekernError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    MeshFile(#[from] MeshFileError),
}

/// Errors raised when requested geometry would have no extent.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to primitive construction.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors reported by [`KernelConfig::validate`](crate::kernel::KernelConfig::validate).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tolerance {name} must be finite and positive, got {value}")]
    InvalidTolerance { name: &'static str, value: f64 },

    #[error("coplanar sampling step must lie in [1e-6, 1], got {0}")]
    InvalidSampleStep(f64),
}

/// Errors related to reading ASCII mesh files.
#[derive(Debug, Error)]
pub enum MeshFileError {
    #[error("cannot open mesh file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read mesh data: {0}")]
    Read(#[from] std::io::Error),
}

/// Convenience type alias for results using [`ShapekernError`].
pub type Result<T> = std::result::Result<T, ShapekernError>;
