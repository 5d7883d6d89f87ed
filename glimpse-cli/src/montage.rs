// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use std::path::PathBuf;

use clap::Args;
use image::RgbImage;
use kdam::TqdmParallelIterator;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use glimpse_core::constant;
use glimpse_core::cv::MontageLayout;
use glimpse_core::error::GlimpseError;
use glimpse_core::im;
use glimpse_core::ut;

use crate::display::Viewer;

#[derive(Debug, Args)]
#[command(about = "Tile a random sample of images from a directory into montage pages.")]
pub struct MontageArgs {
    #[arg(short = 'i', long, help = "Path to input directory of images.")]
    pub images: PathBuf,

    #[arg(
        short = 's',
        long,
        help = "Number of images to sample.",
        default_value_t = constant::MONTAGE_SAMPLE
    )]
    pub sample: usize,

    #[arg(
        short = 'o',
        long,
        help = "Output directory for montage pages.",
        default_value = "montages"
    )]
    pub output: PathBuf,

    #[arg(long, help = "Width of each montage cell.", default_value_t = constant::MONTAGE_CELL_WIDTH)]
    pub cell_width: u32,

    #[arg(long, help = "Height of each montage cell.", default_value_t = constant::MONTAGE_CELL_HEIGHT)]
    pub cell_height: u32,

    #[arg(long, help = "Number of cells per row.", default_value_t = constant::MONTAGE_COLUMNS)]
    pub columns: u32,

    #[arg(long, help = "Number of rows per page.", default_value_t = constant::MONTAGE_ROWS)]
    pub rows: u32,

    #[arg(long, help = "Only use images whose file name contains this substring.")]
    pub substring: Option<String>,

    #[arg(long, help = "Skip images that fail to decode instead of stopping.")]
    pub skip_errors: bool,

    #[arg(short = 'w', long, help = "Wait for Enter between pages.")]
    pub wait: bool,

    #[arg(short = 'v', long, help = "Verbose output.")]
    pub verbose: bool,

    #[arg(short = 't', long, help = "Number of threads.")]
    pub threads: Option<usize>,
}

pub fn montage(args: &MontageArgs) {
    if let Some(threads) = args.threads {
        if threads < 1 {
            eprintln!(
                "[glimpse::montage] ERROR: Threads must be set to a positive integer if provided."
            );
            std::process::exit(1);
        }

        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .unwrap_or_else(|err| {
                eprintln!("[glimpse::montage] ERROR: Could not build thread pool. {}", err);
                std::process::exit(1);
            });
    }

    match run(args) {
        Ok((n_images, n_pages)) => ut::track::progress_log(
            &format!(
                "Complete. {} images placed across {} montages.",
                ut::track::thousands_format(n_images),
                ut::track::thousands_format(n_pages)
            ),
            args.verbose,
        ),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

/// Sample, decode and tile images, returning the image and page counts
fn run(args: &MontageArgs) -> Result<(usize, usize), GlimpseError> {
    let layout = MontageLayout::new(args.cell_width, args.cell_height, args.columns, args.rows)?;

    let image_paths = ut::path::collect_image_paths(&args.images, args.substring.as_deref())?;

    ut::track::progress_log(
        &format!(
            "Detected {} images.",
            ut::track::thousands_format(image_paths.len())
        ),
        args.verbose,
    );

    let image_paths = ut::sample::sample(image_paths, args.sample, &mut rand::thread_rng());
    let images = load_images(&image_paths, args.skip_errors, args.verbose)?;

    if images.is_empty() {
        ut::track::progress_log("No images available for a montage.", args.verbose);
        return Ok((0, 0));
    }

    let mut viewer = Viewer::new(&args.output, args.wait)?;

    let mut n_pages = 0;
    for (idx, page) in layout.pages(&images).enumerate() {
        let path = viewer.show(&format!("montage_{}", idx), &page?)?;
        ut::track::progress_log(&format!("Wrote {}.", path.display()), args.verbose);
        n_pages += 1;
    }

    Ok((images.len(), n_pages))
}

/// Decode images in parallel while preserving their sampled order
fn load_images(
    image_paths: &[PathBuf],
    skip_errors: bool,
    verbose: bool,
) -> Result<Vec<RgbImage>, GlimpseError> {
    let pb = ut::track::progress_bar(image_paths.len(), "Loading images", verbose);

    let mut results: Vec<(usize, Result<RgbImage, GlimpseError>)> = (0..image_paths.len())
        .into_par_iter()
        .tqdm_with_bar(pb)
        .map(|idx| (idx, im::open_image(&image_paths[idx])))
        .collect();

    if verbose {
        println!();
    }

    results.sort_unstable_by_key(|(idx, _)| *idx);

    let mut images = Vec::with_capacity(results.len());
    for (_, result) in results {
        match result {
            Ok(image) => images.push(image),
            Err(err) if skip_errors => {
                eprintln!("[glimpse::montage] WARNING: Skipping image. {}", err);
            }
            Err(err) => return Err(err),
        }
    }

    Ok(images)
}
