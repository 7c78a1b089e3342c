//! Background color sampling.
//!
//! The sampled-match profile assumes the top-left corner of the image is
//! covered by background tiles (the checkerboard placeholder). A small fixed
//! grid of points is read before the main pass and the distinct colors found
//! there become the palette to strip.

use image::RgbaImage;

use crate::error::{Error, Result};

/// Build the ordered sample coordinate grid.
///
/// Produces a `side` x `side` grid of points spaced `stride` pixels apart,
/// starting at the origin: (0,0), (stride,0), ... in row-major order. The
/// default is a 4x4 grid with a 16 pixel stride, matching the tile size of
/// common checkerboard renderings.
#[must_use]
pub fn sample_grid(stride: u32, side: u32) -> Vec<(u32, u32)> {
    let mut coords = Vec::with_capacity((side * side) as usize);
    for y in 0..side {
        for x in 0..side {
            coords.push((x * stride, y * stride));
        }
    }
    coords
}

/// Collect the distinct RGB triples at the given coordinates.
///
/// Colors are returned in first-seen order; duplicates are dropped. The
/// palette is frozen before classification starts, so the main pass never
/// re-reads the sample points.
///
/// # Errors
///
/// Returns [`Error::SampleOutOfBounds`] if any coordinate falls outside the
/// image. An image smaller than the sample grid cannot use this profile.
pub fn collect_palette(image: &RgbaImage, coords: &[(u32, u32)]) -> Result<Vec<[u8; 3]>> {
    let (width, height) = image.dimensions();
    let mut palette: Vec<[u8; 3]> = Vec::new();

    for &(x, y) in coords {
        if x >= width || y >= height {
            return Err(Error::SampleOutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        let px = image.get_pixel(x, y);
        let rgb = [px[0], px[1], px[2]];
        if !palette.contains(&rgb) {
            palette.push(rgb);
        }
    }

    Ok(palette)
}
