use std::path::Path;

use fieldmorph_image::{Image, ImageSize};

use crate::error::IoError;

/// Reads an image from the given file path and converts it to RGB8.
///
/// The format is guessed from the file content, so any format supported by the
/// `image` crate with the enabled features can be read. Grayscale and RGBA
/// inputs are expanded or flattened to three channels.
///
/// # Arguments
///
/// * `file_path` - The path to the image.
///
/// # Returns
///
/// An RGB image with three channels (rgb8).
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref().to_owned();

    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::ImageReader::open(&file_path)?
        .with_guessed_format()?
        .decode()?
        .into_rgb8();

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    log::debug!("read {} image from {}", size, file_path.display());

    Ok(Image::new(size, img.into_raw())?)
}

/// Writes an RGB8 image to the given file path.
///
/// The encoder is chosen from the file extension.
///
/// # Arguments
///
/// * `file_path` - The path to write to.
/// * `image` - The image to write.
pub fn write_image_rgb8(file_path: impl AsRef<Path>, image: &Image<u8, 3>) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let [width, height]: [u32; 2] = image.size().into();
    let buf = image::RgbImage::from_raw(width, height, image.as_slice().to_vec())
        .ok_or(IoError::InvalidImageBuffer)?;

    buf.save(file_path)?;

    log::debug!("wrote {} image to {}", image.size(), file_path.display());

    Ok(())
}
