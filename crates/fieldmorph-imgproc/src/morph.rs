use std::time::Instant;

use fieldmorph_geometry::{
    interpolate_pairs, FieldWeights, GeometryError, Line, LineInterpolation, LinePair,
};
use fieldmorph_image::{Image, ImageDtype};

use crate::error::MorphError;
use crate::padding::BorderMode;
use crate::parallel::{self, ExecutionStrategy};
use crate::warp::warp_field;

/// An image together with its ordered control lines.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotatedImage<T, const C: usize> {
    /// the pixel data
    pub image: Image<T, C>,
    /// the control lines drawn on the image
    pub lines: Vec<Line>,
}

impl<T, const C: usize> AnnotatedImage<T, C> {
    /// Attach control lines to an image.
    pub fn new(image: Image<T, C>, lines: Vec<Line>) -> Self {
        Self { image, lines }
    }
}

/// Parameters of a morph between two annotated images.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphParams {
    /// blend factor in [0, 1]; 0 reproduces the first image, 1 the second
    pub t: f64,
    /// distance floor of the line weights
    pub a: f64,
    /// distance exponent of the line weights
    pub b: f64,
    /// length exponent of the line weights
    pub p: f64,
    /// how the intermediate control lines are derived
    pub method: LineInterpolation,
    /// border policy used when sampling outside of an image
    pub border: BorderMode,
    /// how the per-pixel work is scheduled
    pub strategy: ExecutionStrategy,
}

impl Default for MorphParams {
    fn default() -> Self {
        let weights = FieldWeights::default();
        Self {
            t: 0.5,
            a: weights.a,
            b: weights.b,
            p: weights.p,
            method: LineInterpolation::default(),
            border: BorderMode::default(),
            strategy: ExecutionStrategy::default(),
        }
    }
}

impl MorphParams {
    /// Parameters with the default weights at blend factor `t`.
    pub fn with_t(t: f64) -> Self {
        Self {
            t,
            ..Default::default()
        }
    }

    /// The line weighting part of the parameters.
    pub fn weights(&self) -> FieldWeights {
        FieldWeights {
            a: self.a,
            b: self.b,
            p: self.p,
        }
    }

    /// Check every parameter is in range.
    pub fn validate(&self) -> Result<(), MorphError> {
        check_blend_factor(self.t)?;
        self.weights().validate()?;
        Ok(())
    }
}

fn check_blend_factor(t: f64) -> Result<(), MorphError> {
    if !(0.0..=1.0).contains(&t) {
        return Err(MorphError::InvalidBlendFactor(t));
    }
    Ok(())
}

/// The images produced by [`morph`].
#[derive(Clone, Debug, PartialEq)]
pub struct MorphOutput<T, const C: usize> {
    /// cross-dissolve of the two warped images
    pub blended: Image<T, C>,
    /// the first image warped to the intermediate geometry
    pub warped_src: Image<T, C>,
    /// the second image warped to the intermediate geometry
    pub warped_dst: Image<T, C>,
    /// the intermediate control lines both images were warped to
    pub lines: Vec<Line>,
}

/// Blend two images with factor `t`: `dst = src1 * (1 - t) + src2 * t`.
///
/// The sum is rounded once and saturated to the channel type.
///
/// # Errors
///
/// * [`MorphError::InvalidBlendFactor`] if `t` is outside of [0, 1].
/// * [`MorphError::Parallel`] if the three images differ in size.
///
/// # Example
///
/// ```
/// use fieldmorph_image::{Image, ImageSize};
/// use fieldmorph_imgproc::morph::cross_dissolve;
/// use fieldmorph_imgproc::parallel::ExecutionStrategy;
///
/// let size = ImageSize { width: 2, height: 1 };
/// let a = Image::<u8, 1>::new(size, vec![0, 100]).unwrap();
/// let b = Image::<u8, 1>::new(size, vec![200, 101]).unwrap();
/// let mut out = Image::<u8, 1>::from_size_val(size, 0).unwrap();
///
/// cross_dissolve(&a, &b, &mut out, 0.25, ExecutionStrategy::Serial).unwrap();
/// assert_eq!(out.as_slice(), &[50, 100]);
/// ```
pub fn cross_dissolve<T: ImageDtype, const C: usize>(
    src1: &Image<T, C>,
    src2: &Image<T, C>,
    dst: &mut Image<T, C>,
    t: f64,
    strategy: ExecutionStrategy,
) -> Result<(), MorphError> {
    check_blend_factor(t)?;
    parallel::par_iter_rows_val_two(src1, src2, dst, strategy, |&a, &b, out| {
        let (a, b): (f64, f64) = (a.into(), b.into());
        *out = T::from_f64(a * (1.0 - t) + b * t);
    })?;
    Ok(())
}

/// Check a set of lines can be used as warp frames.
fn check_lines(lines: &[Line]) -> Result<(), GeometryError> {
    lines.iter().try_for_each(Line::validate)
}

/// Morph between two annotated images.
///
/// The control lines of both images are interpolated at `params.t`; each image
/// is then warped from its own lines to the interpolated ones and the two
/// results are cross-dissolved with the same factor.
///
/// # Arguments
///
/// * `src` - The image shown at `t = 0`.
/// * `dst` - The image shown at `t = 1`, with lines index-aligned to `src`.
/// * `params` - The morph parameters.
///
/// # Returns
///
/// The blended frame, both warped images and the intermediate lines.
///
/// # Errors
///
/// * [`MorphError::DimensionMismatch`] if the images differ in size.
/// * [`GeometryError::GeometryMismatch`] if the line counts differ.
/// * [`GeometryError::NoControlLines`] if there are no lines.
/// * [`GeometryError::DegenerateLine`] if any input or intermediate line has zero length.
/// * [`GeometryError::UnsupportedMethod`] if `params.method` is not implemented.
///
/// Inputs are only read; on error no output is produced.
///
/// # Example
///
/// ```
/// use fieldmorph_geometry::Line;
/// use fieldmorph_image::{Image, ImageSize};
/// use fieldmorph_imgproc::morph::{morph, AnnotatedImage, MorphParams};
///
/// let size = ImageSize { width: 8, height: 8 };
/// let a = AnnotatedImage::new(
///     Image::<u8, 3>::from_size_val(size, 10).unwrap(),
///     vec![Line::from([1, 1, 6, 1])],
/// );
/// let b = AnnotatedImage::new(
///     Image::<u8, 3>::from_size_val(size, 30).unwrap(),
///     vec![Line::from([1, 5, 6, 5])],
/// );
///
/// let out = morph(&a, &b, &MorphParams::with_t(0.5)).unwrap();
/// assert_eq!(out.lines, vec![Line::from([1, 3, 6, 3])]);
/// assert!(out.blended.as_slice().iter().all(|&v| v == 20));
/// ```
pub fn morph<T: ImageDtype, const C: usize>(
    src: &AnnotatedImage<T, C>,
    dst: &AnnotatedImage<T, C>,
    params: &MorphParams,
) -> Result<MorphOutput<T, C>, MorphError> {
    params.validate()?;

    let size = src.image.size();
    if size != dst.image.size() {
        return Err(MorphError::DimensionMismatch(size, dst.image.size()));
    }

    let pairs = LinePair::zip(&src.lines, &dst.lines)?;
    if pairs.is_empty() {
        return Err(GeometryError::NoControlLines.into());
    }
    check_lines(&src.lines)?;
    check_lines(&dst.lines)?;

    let lines = interpolate_pairs(&pairs, params.t, params.method)?;
    check_lines(&lines)?;

    let src_pairs = LinePair::zip(&lines, &src.lines)?;
    let dst_pairs = LinePair::zip(&lines, &dst.lines)?;
    let weights = params.weights();

    log::debug!(
        "morphing {} with {} line pairs at t={}",
        size,
        pairs.len(),
        params.t
    );
    let start = Instant::now();

    let (warped_src, warped_dst, blended) = parallel::install(params.strategy, |strategy| {
        let mut warped_src = Image::from_size_val(size, T::default())?;
        warp_field(
            &src.image,
            &mut warped_src,
            &src_pairs,
            &weights,
            params.border,
            strategy,
        )?;

        let mut warped_dst = Image::from_size_val(size, T::default())?;
        warp_field(
            &dst.image,
            &mut warped_dst,
            &dst_pairs,
            &weights,
            params.border,
            strategy,
        )?;

        let mut blended = Image::from_size_val(size, T::default())?;
        cross_dissolve(&warped_src, &warped_dst, &mut blended, params.t, strategy)?;

        Ok::<_, MorphError>((warped_src, warped_dst, blended))
    })??;

    log::debug!("morph done in {:?}", start.elapsed());

    Ok(MorphOutput {
        blended,
        warped_src,
        warped_dst,
        lines,
    })
}
