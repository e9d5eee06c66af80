use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Not a valid image: {}", .0.display())]
    InvalidImage(PathBuf),

    #[error("Image encoding failed: {0}")]
    EncodingError(String),

    #[error("An error has occurred generating and saving the final image, no image was saved: {0}")]
    FileStorageError(String),

    #[error("Underlying image library error")]
    ImageLibError(#[from] image::ImageError), // image::ImageError をラップ

    #[error("Underlying I/O error")]
    IoError(#[from] std::io::Error),
}
