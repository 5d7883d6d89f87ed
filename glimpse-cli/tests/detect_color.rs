use std::path::Path;

use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;

fn write_fixture(path: &Path) -> RgbImage {
    // Red-ish pixel inside the first range followed by a white pixel
    let mut image = RgbImage::new(2, 1);
    image.put_pixel(0, 0, Rgb([150, 30, 40]));
    image.put_pixel(1, 0, Rgb([255, 255, 255]));
    image.save(path).unwrap();
    image
}

#[test]
fn test_detect_color_writes_one_frame_per_range() {
    let root = tempfile::tempdir().unwrap();
    let input = root.path().join("pokemon.png");
    let output = root.path().join("frames");
    let image = write_fixture(&input);

    Command::cargo_bin("glimpse")
        .unwrap()
        .args(["detect-color", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    for idx in 0..4 {
        let frame = image::open(output.join(format!("pokemon_{}.png", idx)))
            .unwrap()
            .to_rgb8();

        assert_eq!(frame.dimensions(), (4, 1));
        assert_eq!(frame.get_pixel(0, 0), image.get_pixel(0, 0));
        assert_eq!(frame.get_pixel(1, 0), image.get_pixel(1, 0));
        assert_eq!(frame.get_pixel(3, 0), &Rgb([0, 0, 0]));
    }

    let first = image::open(output.join("pokemon_0.png")).unwrap().to_rgb8();
    assert_eq!(first.get_pixel(2, 0), &Rgb([150, 30, 40]));

    let second = image::open(output.join("pokemon_1.png")).unwrap().to_rgb8();
    assert_eq!(second.get_pixel(2, 0), &Rgb([0, 0, 0]));
}

#[test]
fn test_detect_color_saves_masks() {
    let root = tempfile::tempdir().unwrap();
    let input = root.path().join("pokemon.png");
    let output = root.path().join("frames");
    write_fixture(&input);

    Command::cargo_bin("glimpse")
        .unwrap()
        .args(["detect-color", "--masks", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let mask = image::open(output.join("pokemon_0_mask.png"))
        .unwrap()
        .to_luma8();

    assert_eq!(mask.as_raw(), &vec![255, 0]);
    assert!(output.join("pokemon_3_mask.png").exists());
}

#[test]
fn test_detect_color_wait_reads_enter() {
    let root = tempfile::tempdir().unwrap();
    let input = root.path().join("pokemon.png");
    let output = root.path().join("frames");
    write_fixture(&input);

    Command::cargo_bin("glimpse")
        .unwrap()
        .args(["detect-color", "--wait", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .write_stdin("\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Press Enter to continue"));

    assert!(output.join("pokemon_3.png").exists());
}

#[test]
fn test_detect_color_missing_image() {
    let root = tempfile::tempdir().unwrap();

    Command::cargo_bin("glimpse")
        .unwrap()
        .args(["detect-color", "-i"])
        .arg(root.path().join("missing.png"))
        .arg("-o")
        .arg(root.path().join("frames"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("NoFileError"));

    assert!(!root.path().join("frames").exists());
}

#[test]
fn test_detect_color_undecodable_image() {
    let root = tempfile::tempdir().unwrap();
    let input = root.path().join("broken.jpg");
    std::fs::write(&input, b"definitely not a jpeg").unwrap();

    Command::cargo_bin("glimpse")
        .unwrap()
        .args(["detect-color", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(root.path().join("frames"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("ImageReadError"));
}
