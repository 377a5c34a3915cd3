use std::path::PathBuf;
use thiserror::Error;

/// Failure while converting a single annotation document.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// None of the image resolution strategies produced a readable image
    #[error("no image file or embedded imageData found for {}", .0.display())]
    ImageNotFound(PathBuf),

    /// The resolved image already is the file it would be copied to
    #[error("{} and its copy in the output images directory are the same file", .0.display())]
    SameFile(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid annotation JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
