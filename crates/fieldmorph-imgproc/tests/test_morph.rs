use fieldmorph_geometry::{GeometryError, Line, LineInterpolation};
use fieldmorph_image::{Image, ImageSize};
use fieldmorph_imgproc::morph::{morph, AnnotatedImage, MorphParams};
use fieldmorph_imgproc::parallel::ExecutionStrategy;
use fieldmorph_imgproc::MorphError;

/// A 4x4 single channel image whose rows are `base, base + 10, base + 20, base + 30`.
fn rows_image(base: u8) -> Result<Image<u8, 1>, MorphError> {
    let size = ImageSize {
        width: 4,
        height: 4,
    };
    let data = (0..4u8)
        .flat_map(|y| std::iter::repeat(base + 10 * y).take(4))
        .collect();
    Ok(Image::new(size, data)?)
}

/// A textured three channel image.
fn pattern_image(size: ImageSize, seed: usize) -> Result<Image<u8, 3>, MorphError> {
    let mut data = Vec::with_capacity(size.area() * 3);
    for y in 0..size.height {
        for x in 0..size.width {
            data.push(((x * 31 + y * 17 + seed) % 256) as u8);
            data.push(((x * x + y * 3 + seed * 7) % 256) as u8);
            data.push(if (x / 5 + y / 5) % 2 == 0 { 240 } else { 16 });
        }
    }
    Ok(Image::new(size, data)?)
}

#[test]
fn test_vertical_shift_half_way() -> Result<(), MorphError> {
    let a = AnnotatedImage::new(rows_image(0)?, vec![Line::from([0, 0, 3, 0])]);
    let b = AnnotatedImage::new(rows_image(100)?, vec![Line::from([0, 3, 3, 3])]);

    let params = MorphParams {
        t: 0.5,
        a: 1e-4,
        b: 1.0,
        p: 1.0,
        ..Default::default()
    };
    let out = morph(&a, &b, &params)?;

    // the intermediate line sits at row 1.5, rounded to row 2
    assert_eq!(out.lines, vec![Line::from([0, 2, 3, 2])]);

    // a is pulled down two rows, b is pushed up one row, edges replicate
    #[rustfmt::skip]
    let warped_a: [u8; 16] = [
        0, 0, 0, 0,
        0, 0, 0, 0,
        0, 0, 0, 0,
        10, 10, 10, 10,
    ];
    #[rustfmt::skip]
    let warped_b: [u8; 16] = [
        110, 110, 110, 110,
        120, 120, 120, 120,
        130, 130, 130, 130,
        130, 130, 130, 130,
    ];
    #[rustfmt::skip]
    let blended: [u8; 16] = [
        55, 55, 55, 55,
        60, 60, 60, 60,
        65, 65, 65, 65,
        70, 70, 70, 70,
    ];
    assert_eq!(out.warped_src.as_slice(), &warped_a);
    assert_eq!(out.warped_dst.as_slice(), &warped_b);
    assert_eq!(out.blended.as_slice(), &blended);
    Ok(())
}

#[test]
fn test_endpoints_reproduce_inputs() -> Result<(), MorphError> {
    let size = ImageSize {
        width: 32,
        height: 24,
    };
    let a = AnnotatedImage::new(
        pattern_image(size, 3)?,
        vec![
            Line::from([4, 4, 28, 6]),
            Line::from([6, 20, 6, 9]),
            Line::from([30, 22, 18, 14]),
        ],
    );
    let b = AnnotatedImage::new(
        pattern_image(size, 91)?,
        vec![
            Line::from([2, 8, 25, 3]),
            Line::from([10, 21, 4, 12]),
            Line::from([29, 18, 15, 20]),
        ],
    );

    let at_zero = morph(&a, &b, &MorphParams::with_t(0.0))?;
    assert_eq!(at_zero.lines, a.lines);
    assert_eq!(at_zero.warped_src, a.image);
    assert_eq!(at_zero.blended, a.image);

    let at_one = morph(&a, &b, &MorphParams::with_t(1.0))?;
    assert_eq!(at_one.lines, b.lines);
    assert_eq!(at_one.warped_dst, b.image);
    assert_eq!(at_one.blended, b.image);
    Ok(())
}

#[test]
fn test_strategies_agree_and_inputs_untouched() -> Result<(), MorphError> {
    let size = ImageSize {
        width: 21,
        height: 13,
    };
    let a = AnnotatedImage::new(
        pattern_image(size, 5)?,
        vec![Line::from([1, 1, 19, 2]), Line::from([3, 12, 15, 8])],
    );
    let b = AnnotatedImage::new(
        pattern_image(size, 77)?,
        vec![Line::from([2, 4, 18, 1]), Line::from([1, 10, 17, 11])],
    );
    let (a_before, b_before) = (a.clone(), b.clone());

    let run = |strategy| {
        let params = MorphParams {
            t: 0.3,
            b: 2.0,
            strategy,
            ..Default::default()
        };
        morph(&a, &b, &params)
    };

    let serial = run(ExecutionStrategy::Serial)?;
    assert_eq!(run(ExecutionStrategy::ParallelRows)?, serial);
    assert_eq!(run(ExecutionStrategy::Fixed(3))?, serial);

    assert_eq!(serial.blended.size(), size);
    assert_eq!(serial.warped_src.size(), size);
    assert_eq!(serial.warped_dst.size(), size);
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
    Ok(())
}

#[test]
fn test_line_count_mismatch() -> Result<(), MorphError> {
    let size = ImageSize {
        width: 8,
        height: 8,
    };
    let a = AnnotatedImage::new(
        Image::<u8, 3>::from_size_val(size, 0)?,
        vec![
            Line::from([0, 0, 7, 0]),
            Line::from([0, 3, 7, 3]),
            Line::from([0, 6, 7, 6]),
        ],
    );
    let b = AnnotatedImage::new(
        Image::<u8, 3>::from_size_val(size, 0)?,
        vec![Line::from([0, 0, 7, 0]), Line::from([0, 3, 7, 3])],
    );
    assert_eq!(
        morph(&a, &b, &MorphParams::default()),
        Err(MorphError::Geometry(GeometryError::GeometryMismatch(3, 2)))
    );
    Ok(())
}

#[test]
fn test_precondition_failures() -> Result<(), MorphError> {
    let size = ImageSize {
        width: 4,
        height: 4,
    };
    let empty = AnnotatedImage::new(Image::<u8, 1>::from_size_val(size, 0)?, vec![]);
    assert_eq!(
        morph(&empty, &empty, &MorphParams::default()),
        Err(MorphError::Geometry(GeometryError::NoControlLines))
    );

    let degenerate = Line::from([2, 2, 2, 2]);
    let a = AnnotatedImage::new(Image::<u8, 1>::from_size_val(size, 0)?, vec![degenerate]);
    let b = AnnotatedImage::new(
        Image::<u8, 1>::from_size_val(size, 0)?,
        vec![Line::from([0, 0, 3, 0])],
    );
    assert_eq!(
        morph(&a, &b, &MorphParams::default()),
        Err(MorphError::Geometry(GeometryError::DegenerateLine(
            degenerate
        )))
    );

    let params = MorphParams {
        method: LineInterpolation::Center,
        ..Default::default()
    };
    assert_eq!(
        morph(&b, &b, &params),
        Err(MorphError::Geometry(GeometryError::UnsupportedMethod(
            "center".to_string()
        )))
    );
    Ok(())
}

#[test]
fn test_morph_float_images() -> Result<(), MorphError> {
    let size = ImageSize {
        width: 6,
        height: 5,
    };
    let lines = vec![Line::from([0, 0, 5, 4])];
    let a = AnnotatedImage::new(Image::<f32, 2>::from_size_val(size, 0.0)?, lines.clone());
    let b = AnnotatedImage::new(Image::<f32, 2>::from_size_val(size, 1.0)?, lines);

    let out = morph(&a, &b, &MorphParams::with_t(0.25))?;
    assert!(out
        .blended
        .as_slice()
        .iter()
        .all(|&v| (v - 0.25).abs() < 1e-6));
    Ok(())
}
