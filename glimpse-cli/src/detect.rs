// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use std::path::PathBuf;

use clap::Args;

use glimpse_core::cv;
use glimpse_core::error::GlimpseError;
use glimpse_core::im;
use glimpse_core::ut;

use crate::display::Viewer;

#[derive(Debug, Args)]
#[command(about = "Mask an image by fixed color ranges and show each result beside the original.")]
pub struct DetectColorArgs {
    #[arg(short = 'i', long, help = "Path to the image.")]
    pub image: PathBuf,

    #[arg(
        short = 'o',
        long,
        help = "Output directory for frames.",
        default_value = "detections"
    )]
    pub output: PathBuf,

    #[arg(short = 'w', long, help = "Wait for Enter between frames.")]
    pub wait: bool,

    #[arg(short = 'm', long, help = "Also save each binary mask.")]
    pub masks: bool,

    #[arg(short = 'v', long, help = "Verbose output.")]
    pub verbose: bool,
}

pub fn detect_color(args: &DetectColorArgs) {
    match run(args) {
        Ok(n_frames) => ut::track::progress_log(
            &format!("Complete. {} frames written.", n_frames),
            args.verbose,
        ),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

/// Threshold the image by every default boundary and show each frame
fn run(args: &DetectColorArgs) -> Result<usize, GlimpseError> {
    let image = im::open_image(&args.image)?;

    ut::track::progress_log(
        &format!(
            "Loaded {} ({} x {}).",
            args.image.display(),
            image.width(),
            image.height()
        ),
        args.verbose,
    );

    let stem = args
        .image
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());

    let mut viewer = Viewer::new(&args.output, args.wait)?;
    let boundaries = cv::default_boundaries();

    let mut n_frames = 0;
    for (idx, detection) in cv::detect_colors(&image, &boundaries).enumerate() {
        let detection = detection?;

        ut::track::progress_log(
            &format!(
                "Range {} lower {:?} upper {:?}: {} pixels selected.",
                idx,
                detection.boundary.lower,
                detection.boundary.upper,
                ut::track::thousands_format(detection.mask.count())
            ),
            args.verbose,
        );

        if args.masks {
            detection
                .mask
                .save(viewer.output().join(format!("{}_{}_mask.png", stem, idx)))?;
        }

        viewer.show(&format!("{}_{}", stem, idx), &detection.frame(&image)?)?;
        n_frames += 1;
    }

    Ok(n_frames)
}
