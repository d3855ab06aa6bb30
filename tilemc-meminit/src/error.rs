use thiserror::Error;

/// Errors of the image to hex-table conversion.
#[derive(Error, Debug)]
pub enum MemInitError {
    /// Writing the output file failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// The input image could not be opened or decoded.
    #[error("{0}")]
    Image(#[from] image::ImageError),
    /// The input image is not single-channel grayscale.
    #[error("unsupported color type {0:?}, expected single-channel grayscale")]
    UnsupportedColor(image::ColorType),
}
