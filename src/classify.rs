//! The background classification and substitution pass.
//!
//! Every pixel is decided independently: evaluate the configured rules in
//! order against its RGB channels and, on the first match, overwrite the
//! whole pixel with transparent white. Unmatched pixels pass through
//! untouched, alpha included.

use image::RgbaImage;

use crate::rules::BackgroundRule;

/// The value substituted for every matched pixel.
///
/// White with zero alpha: invisible when composited, and still near-white if
/// the output is ever re-classified, so a second pass maps it to itself.
pub const TRANSPARENT_WHITE: [u8; 4] = [255, 255, 255, 0];

/// Strip background pixels from an image in-place.
///
/// Rules are evaluated in the order given and short-circuit on the first
/// match. An empty rule list leaves the image untouched. Returns the number
/// of substituted pixels.
///
/// With the `cli` feature the scan runs in parallel over disjoint pixel
/// chunks via rayon; each output pixel depends only on its own input pixel,
/// so the result is identical to the sequential scan.
pub fn strip_background(image: &mut RgbaImage, rules: &[BackgroundRule]) -> u64 {
    if rules.is_empty() {
        return 0;
    }

    let raw: &mut [u8] = image;
    let substitute = |px: &mut [u8]| -> u64 {
        if rules.iter().any(|rule| rule.matches(px[0], px[1], px[2])) {
            px.copy_from_slice(&TRANSPARENT_WHITE);
            1
        } else {
            0
        }
    };

    #[cfg(feature = "cli")]
    {
        use rayon::prelude::*;
        raw.par_chunks_exact_mut(4).map(substitute).sum()
    }

    #[cfg(not(feature = "cli"))]
    {
        raw.chunks_exact_mut(4).map(substitute).sum()
    }
}
