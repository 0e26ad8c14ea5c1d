use std::io;

use thiserror::Error;

/// Failures outside the render core: loading scenes and writing images.
///
/// Rendering itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read scene: {0}")]
    Io(#[from] io::Error),
    #[error("malformed scene description: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid mesh: {0}")]
    InvalidMesh(String),
    #[error("raster of {0}x{1} does not fit an image")]
    RasterTooLarge(usize, usize),
}
