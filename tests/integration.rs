use std::path::PathBuf;

use image::{Rgba, RgbaImage};

use logo_background_removal::{
    Error, process_file, ProcessOptions, Profile, strip_image, TRANSPARENT_WHITE,
};

/// A logo-ish fixture: white background with a navy square in the middle.
fn white_backed_logo(size: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 255]));
    for y in size / 4..size * 3 / 4 {
        for x in size / 4..size * 3 / 4 {
            img.put_pixel(x, y, Rgba([29, 61, 107, 255]));
        }
    }
    img
}

/// A checkerboard of white and grey 16px tiles with a green square on top.
fn checkerboard_backed_logo(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    for (x, y, px) in img.enumerate_pixels_mut() {
        *px = if (x / 16 + y / 16) % 2 == 0 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([204, 204, 204, 255])
        };
    }
    for y in size / 2..size * 3 / 4 {
        for x in size / 2..size * 3 / 4 {
            img.put_pixel(x, y, Rgba([89, 195, 72, 255]));
        }
    }
    img
}

fn opts_for(profile: Profile) -> ProcessOptions {
    ProcessOptions {
        profile,
        thresholds: profile.default_thresholds(),
        ..ProcessOptions::default()
    }
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("logo-bg-removal-{}-{name}", std::process::id()))
}

#[test]
fn aggressive_profile_clears_white_background_only() {
    let mut img = white_backed_logo(32);
    let cleared = strip_image(&mut img, &opts_for(Profile::Aggressive)).unwrap();

    // 32x32 with a 16x16 logo square
    assert_eq!(cleared, 32 * 32 - 16 * 16);
    assert_eq!(img.get_pixel(0, 0).0, TRANSPARENT_WHITE);
    assert_eq!(img.get_pixel(16, 16).0, [29, 61, 107, 255]);
    assert_eq!(img.dimensions(), (32, 32));
}

#[test]
fn sampled_profile_clears_both_checkerboard_tiles() {
    let mut img = checkerboard_backed_logo(128);
    let cleared = strip_image(&mut img, &opts_for(Profile::Sampled)).unwrap();

    assert!(cleared > 0);
    // Both tile colors gone, logo square intact
    assert_eq!(img.get_pixel(0, 0).0, TRANSPARENT_WHITE);
    assert_eq!(img.get_pixel(16, 0).0, TRANSPARENT_WHITE);
    assert_eq!(img.get_pixel(80, 80).0, [89, 195, 72, 255]);
}

#[test]
fn sampled_profile_fails_on_image_smaller_than_grid() {
    let mut img = RgbaImage::new(1, 1);
    let err = strip_image(&mut img, &opts_for(Profile::Sampled)).unwrap_err();
    assert!(matches!(err, Error::SampleOutOfBounds { .. }));
}

#[test]
fn grid_profile_clears_both_tile_shades_in_one_band() {
    let mut img = checkerboard_backed_logo(64);
    let cleared = strip_image(&mut img, &opts_for(Profile::Grid)).unwrap();

    // Everything except the 16x16 logo square is background
    assert_eq!(cleared, 64 * 64 - 16 * 16);
    assert_eq!(img.get_pixel(0, 0).0, TRANSPARENT_WHITE);
    assert_eq!(img.get_pixel(16, 0).0, TRANSPARENT_WHITE);
    assert_eq!(img.get_pixel(40, 40).0, [89, 195, 72, 255]);
}

#[test]
fn white_profile_ignores_checkerboard_greys() {
    let mut img = checkerboard_backed_logo(64);
    strip_image(&mut img, &opts_for(Profile::White)).unwrap();

    // White tiles cleared, grey tiles untouched
    assert_eq!(img.get_pixel(0, 0).0, TRANSPARENT_WHITE);
    assert_eq!(img.get_pixel(16, 0).0, [204, 204, 204, 255]);
}

#[test]
fn stripping_is_idempotent() {
    let mut img = white_backed_logo(32);
    let opts = opts_for(Profile::Aggressive);
    let first = strip_image(&mut img, &opts).unwrap();
    let snapshot = img.clone();

    let second = strip_image(&mut img, &opts).unwrap();
    assert_eq!(first, second);
    assert_eq!(img, snapshot);
}

#[test]
fn process_file_round_trips_through_png() {
    let input = temp_path("roundtrip-in.png");
    let output = temp_path("roundtrip-out.png");
    white_backed_logo(32).save(&input).unwrap();

    let result = process_file(&input, &output, &ProcessOptions::default());
    assert!(result.success, "{}", result.message);
    assert_eq!(result.total, 32 * 32);
    assert_eq!(result.cleared, 32 * 32 - 16 * 16);

    let reloaded = image::open(&output).unwrap().to_rgba8();
    assert_eq!(reloaded.dimensions(), (32, 32));
    assert_eq!(reloaded.get_pixel(0, 0).0, TRANSPARENT_WHITE);
    assert_eq!(reloaded.get_pixel(16, 16).0, [29, 61, 107, 255]);

    std::fs::remove_file(&input).ok();
    std::fs::remove_file(&output).ok();
}

#[test]
fn process_file_rejects_non_alpha_output() {
    let input = temp_path("badout-in.png");
    let output = temp_path("badout-out.jpg");
    white_backed_logo(16).save(&input).unwrap();

    let result = process_file(&input, &output, &ProcessOptions::default());
    assert!(!result.success);
    assert!(result.message.contains("Failed to save"));
    assert!(!output.exists(), "no partial output may be left behind");

    std::fs::remove_file(&input).ok();
}

#[test]
fn process_file_reports_undecodable_input() {
    let input = temp_path("garbage.png");
    std::fs::write(&input, b"not a png").unwrap();

    let result = process_file(
        &input,
        &temp_path("garbage-out.png"),
        &ProcessOptions::default(),
    );
    assert!(!result.success);
    assert!(result.message.contains("Failed to load"));

    std::fs::remove_file(&input).ok();
}

#[test]
fn unmatched_pixels_survive_bit_identical() {
    let mut img = RgbaImage::from_pixel(4, 4, Rgba([78, 174, 229, 180]));
    let cleared = strip_image(&mut img, &opts_for(Profile::Aggressive)).unwrap();

    assert_eq!(cleared, 0);
    for px in img.pixels() {
        assert_eq!(px.0, [78, 174, 229, 180]);
    }
}
