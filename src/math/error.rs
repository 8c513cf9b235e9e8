// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MathError {
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Mesh assembly failed: {reason}")]
    MeshAssembly { reason: String },

    #[error("Surface extraction failed: {reason}")]
    SurfaceExtraction { reason: String },
}

pub type MathResult<T> = Result<T, MathError>;
