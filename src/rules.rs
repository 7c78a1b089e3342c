//! Background classification rules.
//!
//! A pixel is background when any configured rule matches its RGB channels.
//! Rules are pure predicates over a single pixel; alpha is never consulted.
//! The rule set is ordered and evaluation short-circuits on the first match.

use image::RgbaImage;

use crate::error::Result;
use crate::sampling;

/// Numeric knobs shared by the rule profiles.
///
/// No single set of constants fits every export (white cutoffs of 230, 235
/// and 240 all occur in practice, as do grey bands of \[180, 215\] and
/// \[180, 220\]), so every value is explicit configuration.
/// [`Profile::default_thresholds`] returns the constants each profile is
/// tuned with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thresholds {
    /// All channels must exceed this for a pixel to count as near-white.
    pub white_cutoff: u8,
    /// Lower bound (inclusive) of the grey checkerboard band.
    pub grey_low: u8,
    /// Upper bound (inclusive) of the grey checkerboard band.
    pub grey_high: u8,
    /// Maximum mutual channel difference for a pixel to count as neutral.
    pub neutral_delta: u8,
    /// Channel sum above which a neutral pixel counts as compression residue.
    pub sum_threshold: u16,
    /// Spacing between background sample points, in pixels.
    pub sample_stride: u32,
    /// Side length of the square background sample grid, in points.
    pub sample_side: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            white_cutoff: 240,
            grey_low: 180,
            grey_high: 220,
            neutral_delta: 15,
            sum_threshold: 650,
            sample_stride: 16,
            sample_side: 4,
        }
    }
}

/// A single background classification rule.
///
/// Variants correspond to the pixel classes the cleanup passes remove:
/// plain white fills, desaturated checkerboard greys, bright JPEG
/// compression residue, and exact matches against sampled background tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundRule {
    /// All three channels strictly above a brightness cutoff.
    NearWhite {
        /// Brightness cutoff each channel must exceed.
        cutoff: u8,
    },
    /// All three channels inside a band, with low mutual saturation.
    NeutralBand {
        /// Inclusive lower bound of the band.
        low: u8,
        /// Inclusive upper bound of the band.
        high: u8,
        /// Mutual channel differences must stay strictly below this.
        delta: u8,
    },
    /// Channel sum above a total, with low mutual saturation.
    SumResidue {
        /// Sum of the three channels must strictly exceed this.
        min_sum: u16,
        /// Mutual channel differences must stay strictly below this.
        delta: u8,
    },
    /// Channel triple exactly equals one of the sampled background colors.
    SampledMatch {
        /// Distinct RGB triples collected from the sample grid.
        palette: Vec<[u8; 3]>,
    },
}

/// Mutual channel differences all strictly below `delta`.
fn is_neutral(r: u8, g: u8, b: u8, delta: u8) -> bool {
    r.abs_diff(g) < delta && g.abs_diff(b) < delta && r.abs_diff(b) < delta
}

impl BackgroundRule {
    /// Evaluate the rule against a pixel's RGB channels.
    #[must_use]
    pub fn matches(&self, r: u8, g: u8, b: u8) -> bool {
        match self {
            Self::NearWhite { cutoff } => r > *cutoff && g > *cutoff && b > *cutoff,
            Self::NeutralBand { low, high, delta } => {
                let band = *low..=*high;
                band.contains(&r)
                    && band.contains(&g)
                    && band.contains(&b)
                    && is_neutral(r, g, b, *delta)
            }
            Self::SumResidue { min_sum, delta } => {
                let sum = u16::from(r) + u16::from(g) + u16::from(b);
                sum > *min_sum && is_neutral(r, g, b, *delta)
            }
            Self::SampledMatch { palette } => palette.contains(&[r, g, b]),
        }
    }
}

/// Selectable rule profile.
///
/// Each profile targets one background style; the rule order within a
/// profile is fixed and significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Plain near-white fill removal.
    White,
    /// White squares plus the grey checkerboard band.
    Checkerboard,
    /// White fills, grey band, and bright neutral compression residue.
    Aggressive,
    /// One wide bright-neutral band covering white and grey tiles alike.
    Grid,
    /// Exact matches against colors sampled from a corner grid.
    Sampled,
}

impl Profile {
    /// The constants this profile is tuned with.
    #[must_use]
    pub fn default_thresholds(self) -> Thresholds {
        let base = Thresholds::default();
        match self {
            Self::White | Self::Sampled => base,
            Self::Checkerboard => Thresholds {
                white_cutoff: 230,
                grey_high: 215,
                ..base
            },
            Self::Aggressive => Thresholds {
                white_cutoff: 235,
                ..base
            },
            Self::Grid => Thresholds {
                grey_low: 181,
                grey_high: 255,
                neutral_delta: 10,
                ..base
            },
        }
    }

    /// Build the ordered rule list for this profile.
    ///
    /// The image is only consulted by [`Profile::Sampled`], which collects
    /// its palette from the configured sample grid before the pass runs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SampleOutOfBounds`](crate::Error::SampleOutOfBounds)
    /// if a sample coordinate falls outside the image.
    pub fn rules(self, thresholds: &Thresholds, image: &RgbaImage) -> Result<Vec<BackgroundRule>> {
        let white = BackgroundRule::NearWhite {
            cutoff: thresholds.white_cutoff,
        };
        let grey = BackgroundRule::NeutralBand {
            low: thresholds.grey_low,
            high: thresholds.grey_high,
            delta: thresholds.neutral_delta,
        };
        let residue = BackgroundRule::SumResidue {
            min_sum: thresholds.sum_threshold,
            delta: thresholds.neutral_delta,
        };

        Ok(match self {
            Self::White => vec![white],
            Self::Checkerboard => vec![white, grey],
            Self::Aggressive => vec![white, grey, residue],
            Self::Grid => vec![grey],
            Self::Sampled => {
                let grid = sampling::sample_grid(thresholds.sample_stride, thresholds.sample_side);
                let palette = sampling::collect_palette(image, &grid)?;
                vec![BackgroundRule::SampledMatch { palette }]
            }
        })
    }
}
