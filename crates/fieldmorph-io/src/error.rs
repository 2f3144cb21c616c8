/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] fieldmorph_image::ImageError),

    /// Error to decode or encode the image.
    #[error("Failed to decode or encode the image. {0}")]
    ImageCodecError(#[from] image::ImageError),

    /// The pixel buffer does not fit the image dimensions.
    #[error("Pixel buffer does not match the image size")]
    InvalidImageBuffer,

    /// A control line entry is not four integers.
    #[error("Invalid control line at line {line}: {content:?}")]
    InvalidControlLine {
        /// 1-based line number in the file
        line: usize,
        /// the offending text
        content: String,
    },

    /// A meta entry is not `tag image_file lines_file`.
    #[error("Invalid meta entry at line {line}: {content:?}")]
    InvalidMetaEntry {
        /// 1-based line number in the file
        line: usize,
        /// the offending text
        content: String,
    },

    /// A requested tag is not listed in the meta file.
    #[error("Unknown image tag: {0}")]
    UnknownTag(String),
}
