//! Error types for the logo-background-removal crate.

/// Errors that can occur while classifying and stripping background pixels.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A background sampling coordinate lies outside the image.
    #[error("sample coordinate ({x},{y}) outside image bounds {width}x{height}")]
    SampleOutOfBounds {
        /// X coordinate of the offending sample point.
        x: u32,
        /// Y coordinate of the offending sample point.
        y: u32,
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
    },

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The output format cannot carry an alpha channel (or is unknown).
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// An error occurred while decoding or encoding an image.
    #[error("image processing error: {0}")]
    Image(#[from] image::ImageError),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
