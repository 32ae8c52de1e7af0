use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid JPEG stream: {0}")]
    FormatError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Failed to encode JPEG image: {0}")]
    EncodeError(String),
}

pub type Result<T> = std::result::Result<T, ImageError>;
