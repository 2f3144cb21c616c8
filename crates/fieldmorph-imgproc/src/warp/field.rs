use fieldmorph_geometry::{warp_position, FieldWeights, GeometryError, LinePair, Vector2};
use fieldmorph_image::{Image, ImageDtype, ImageError};

use crate::error::MorphError;
use crate::interpolation::bilinear_sample;
use crate::padding::BorderMode;
use crate::parallel::{self, ExecutionStrategy};

/// Warps an image with the field defined by a set of line pairs.
///
/// For every pixel `X` of `dst` the source position is computed with
/// [`warp_position`] and `src` is sampled there with bilinear interpolation.
///
/// # Arguments
///
/// * `src` - The input image with shape (height, width, channels).
/// * `dst` - The output image; its size defines the sampled grid.
/// * `pairs` - Line pairs, `from` in the geometry of `dst` and `to` in the geometry of `src`.
/// * `weights` - The field weighting parameters.
/// * `border` - The border policy for samples outside of `src`.
/// * `strategy` - How the rows of `dst` are scheduled.
///
/// # Errors
///
/// * [`GeometryError::NoControlLines`] if `pairs` is empty.
/// * [`GeometryError::DegenerateLine`] if any line has zero length.
/// * [`GeometryError::InvalidWeight`] if the weights are out of range.
/// * [`ImageError::EmptyImage`] if `src` is empty and `dst` is not.
///
/// All checks happen before any pixel of `dst` is written.
pub fn warp_field<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    pairs: &[LinePair],
    weights: &FieldWeights,
    border: BorderMode,
    strategy: ExecutionStrategy,
) -> Result<(), MorphError> {
    if pairs.is_empty() {
        return Err(GeometryError::NoControlLines.into());
    }
    pairs.iter().try_for_each(LinePair::validate)?;
    weights.validate()?;

    if dst.as_slice().is_empty() {
        return Ok(());
    }
    if src.as_slice().is_empty() {
        return Err(ImageError::EmptyImage.into());
    }

    log::debug!(
        "warping {} -> {} with {} line pairs ({:?})",
        src.size(),
        dst.size(),
        pairs.len(),
        strategy
    );

    parallel::try_par_iter_pixels(dst, strategy, |x, y, dst_pixel| {
        let pos = warp_position(Vector2::new(x as f64, y as f64), pairs, weights)?;
        let pixel = bilinear_sample(src, pos.x, pos.y, border)?;
        dst_pixel.copy_from_slice(&pixel);
        Ok::<(), MorphError>(())
    })
}
