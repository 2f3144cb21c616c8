use argh::FromArgs;
use std::path::PathBuf;

use fieldmorph::geometry::LineInterpolation;
use fieldmorph::imgproc::morph::{morph, MorphParams};
use fieldmorph::io::functional as F;
use fieldmorph::io::meta;

#[derive(FromArgs)]
/// Render the morph animation between consecutive tagged images of a dataset
struct Args {
    /// dataset directory holding meta.txt
    #[argh(option, short = 'd')]
    data_dir: PathBuf,

    /// directory the frames are written to
    #[argh(option, short = 'o')]
    out_dir: PathBuf,

    /// image tags to morph through, in order
    #[argh(option, short = 'i')]
    image_tags: Vec<String>,

    /// number of frames per transition, including both ends
    #[argh(option, default = "101")]
    frames: usize,

    /// distance floor of the line weights
    #[argh(option, default = "1e-4")]
    weight_a: f64,

    /// distance exponent of the line weights
    #[argh(option, default = "1.0")]
    weight_b: f64,

    /// length exponent of the line weights
    #[argh(option, default = "1.0")]
    weight_p: f64,

    /// line interpolation method
    #[argh(option, default = "LineInterpolation::Endpoint")]
    method: LineInterpolation,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    if args.image_tags.len() < 2 {
        return Err("at least two image tags are required".into());
    }
    if args.frames < 2 {
        return Err("at least two frames are required".into());
    }

    let entries = meta::read_meta_file(&args.data_dir)?;
    let images = args
        .image_tags
        .iter()
        .map(|tag| meta::find_entry(&entries, tag)?.load())
        .collect::<Result<Vec<_>, _>>()?;

    std::fs::create_dir_all(&args.out_dir)?;

    let tags = args.image_tags.windows(2);
    for (tags, images) in tags.zip(images.windows(2)) {
        let (src_tag, dst_tag) = (&tags[0], &tags[1]);
        log::info!("morphing {src_tag} -> {dst_tag}");

        for k in 0..args.frames {
            let params = MorphParams {
                t: k as f64 / (args.frames - 1) as f64,
                a: args.weight_a,
                b: args.weight_b,
                p: args.weight_p,
                method: args.method,
                ..Default::default()
            };
            let out = morph(&images[0], &images[1], &params)?;

            let file_path = args.out_dir.join(format!("{src_tag}_{dst_tag}_{k}.jpg"));
            F::write_image_rgb8(&file_path, &out.blended)?;
            log::info!("frame {}/{} -> {}", k + 1, args.frames, file_path.display());
        }
    }

    Ok(())
}
