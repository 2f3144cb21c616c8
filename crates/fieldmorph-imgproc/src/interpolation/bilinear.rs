use fieldmorph_image::{Image, ImageDtype, ImageError};

use crate::padding::BorderMode;

/// Kernel for bilinear interpolation
///
/// The four neighbours are `floor(x)`, `floor(x) + 1`, `floor(y)` and
/// `floor(y) + 1`, each mapped into the image independently with `border`.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `x` - The x coordinate of the pixel to interpolate.
/// * `y` - The y coordinate of the pixel to interpolate.
/// * `border` - The border policy for neighbours outside of the image.
///
/// # Returns
///
/// The interpolated pixel values, rounded and saturated to the channel type.
///
/// # Errors
///
/// [`ImageError::EmptyImage`] if the image has no pixels.
///
/// # Example
///
/// ```
/// use fieldmorph_image::{Image, ImageSize};
/// use fieldmorph_imgproc::interpolation::bilinear_sample;
/// use fieldmorph_imgproc::padding::BorderMode;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize { width: 2, height: 1 },
///     vec![0, 100],
/// ).unwrap();
///
/// let pixel = bilinear_sample(&image, 0.25, 0.0, BorderMode::Replicate).unwrap();
/// assert_eq!(pixel, [25]);
/// ```
pub fn bilinear_sample<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    x: f64,
    y: f64,
    border: BorderMode,
) -> Result<[T; C], ImageError> {
    let (rows, cols) = (image.rows(), image.cols());

    let (fx, fy) = (x.floor(), y.floor());
    let (ix, iy) = (fx as isize, fy as isize);

    let map = |i: isize, len: usize| border.map_index(i, len).ok_or(ImageError::EmptyImage);
    let x0 = map(ix, cols)?;
    let x1 = map(ix.saturating_add(1), cols)?;
    let y0 = map(iy, rows)?;
    let y1 = map(iy.saturating_add(1), rows)?;

    let tx = x - fx;
    let ty = y - fy;

    let w00 = (1.0 - tx) * (1.0 - ty);
    let w01 = tx * (1.0 - ty);
    let w10 = (1.0 - tx) * ty;
    let w11 = tx * ty;

    let p00 = image.pixel(x0, y0)?;
    let p01 = image.pixel(x1, y0)?;
    let p10 = image.pixel(x0, y1)?;
    let p11 = image.pixel(x1, y1)?;

    let f = |v: T| -> f64 { v.into() };

    let mut pixel = [T::default(); C];
    for (k, out) in pixel.iter_mut().enumerate() {
        let value = f(p00[k]) * w00 + f(p01[k]) * w01 + f(p10[k]) * w10 + f(p11[k]) * w11;
        *out = T::from_f64(value);
    }

    Ok(pixel)
}
