//! File-level orchestration: load, classify, strip, save.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::classify;
use crate::error::{Error, Result};
use crate::rules::{Profile, Thresholds};

/// Options controlling a cleanup run.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Which rule profile to apply.
    pub profile: Profile,
    /// Numeric thresholds for the profile's rules.
    pub thresholds: Thresholds,
    /// Enable verbose logging.
    pub verbose: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            profile: Profile::Aggressive,
            thresholds: Profile::Aggressive.default_thresholds(),
            verbose: false,
            quiet: false,
        }
    }
}

/// Result of processing a single image file.
#[derive(Debug)]
pub struct ProcessResult {
    /// Path of the processed file.
    pub path: PathBuf,
    /// Whether processing succeeded.
    pub success: bool,
    /// Number of pixels substituted with transparent white.
    pub cleared: u64,
    /// Total number of pixels in the image.
    pub total: u64,
    /// Human-readable status message.
    pub message: String,
}

/// Strip the background from a decoded image in-place.
///
/// Builds the rule list for the options' profile (sampling the image first
/// for [`Profile::Sampled`]) and runs the substitution pass. Returns the
/// number of cleared pixels.
///
/// # Errors
///
/// Returns [`Error::SampleOutOfBounds`] if the sampled profile's grid does
/// not fit the image.
pub fn strip_image(image: &mut RgbaImage, opts: &ProcessOptions) -> Result<u64> {
    let rules = opts.profile.rules(&opts.thresholds, image)?;
    Ok(classify::strip_background(image, &rules))
}

/// Process a single image file: load, classify, strip, save.
///
/// The source is normalized to RGBA8, so alpha-less inputs (JPEG) become
/// fully opaque before classification. Returns a [`ProcessResult`]
/// describing success or failure; never panics on bad input.
#[must_use]
pub fn process_file(input: &Path, output: &Path, opts: &ProcessOptions) -> ProcessResult {
    let mut result = ProcessResult {
        path: input.to_path_buf(),
        success: false,
        cleared: 0,
        total: 0,
        message: String::new(),
    };

    let dyn_img = match image::open(input) {
        Ok(img) => img,
        Err(e) => {
            result.message = format!("Failed to load: {e}");
            return result;
        }
    };

    let mut rgba_img = dyn_img.to_rgba8();
    result.total = u64::from(rgba_img.width()) * u64::from(rgba_img.height());

    match strip_image(&mut rgba_img, opts) {
        Ok(cleared) => result.cleared = cleared,
        Err(e) => {
            result.message = format!("Failed to classify: {e}");
            return result;
        }
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                result.message = format!("Failed to create output directory: {e}");
                return result;
            }
        }
    }

    match save_image(&rgba_img, output) {
        Ok(()) => {
            result.success = true;
            result.message = format!(
                "Cleared {} of {} pixels",
                result.cleared, result.total
            );
        }
        Err(e) => {
            result.message = format!("Failed to save: {e}");
        }
    }

    result
}

/// Process all supported images in a directory.
///
/// Output files keep the input stem with a `.png` extension. Uses parallel
/// iteration when the `cli` feature is enabled (via rayon). Returns a
/// [`ProcessResult`] for each image found.
#[must_use]
pub fn process_directory(
    input_dir: &Path,
    output_dir: &Path,
    opts: &ProcessOptions,
) -> Vec<ProcessResult> {
    let entries: Vec<_> = match std::fs::read_dir(input_dir) {
        Ok(rd) => rd
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().map(|ft| ft.is_file()).unwrap_or(false))
            .filter(|e| is_supported_image(e.path().as_path()))
            .collect(),
        Err(e) => {
            return vec![ProcessResult {
                path: input_dir.to_path_buf(),
                success: false,
                cleared: 0,
                total: 0,
                message: format!("Failed to read directory: {e}"),
            }];
        }
    };

    if !output_dir.exists() {
        if let Err(e) = std::fs::create_dir_all(output_dir) {
            return vec![ProcessResult {
                path: output_dir.to_path_buf(),
                success: false,
                cleared: 0,
                total: 0,
                message: format!("Failed to create output directory: {e}"),
            }];
        }
    }

    let output_path_for = |input_path: &Path| {
        let stem = input_path.file_stem().unwrap_or_default().to_string_lossy();
        output_dir.join(format!("{stem}.png"))
    };

    #[cfg(feature = "cli")]
    {
        use rayon::prelude::*;
        entries
            .par_iter()
            .map(|entry| {
                let input_path = entry.path();
                process_file(&input_path, &output_path_for(&input_path), opts)
            })
            .collect()
    }

    #[cfg(not(feature = "cli"))]
    {
        entries
            .iter()
            .map(|entry| {
                let input_path = entry.path();
                process_file(&input_path, &output_path_for(&input_path), opts)
            })
            .collect()
    }
}

/// Check if a file has a supported input image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => matches!(
            ext.to_lowercase().as_str(),
            "jpg" | "jpeg" | "png" | "webp" | "bmp"
        ),
        None => false,
    }
}

/// Save an RGBA image to an alpha-capable format.
///
/// Only PNG and WebP keep the alpha channel, so anything else is rejected.
/// The image is encoded to memory first and written in a single call, so an
/// encoding failure leaves no truncated file on disk.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] if the path's extension is unknown
/// or maps to a format without alpha support, or an encode/write error.
pub fn save_image(img: &RgbaImage, path: &Path) -> Result<()> {
    let format =
        ImageFormat::from_path(path).map_err(|e| Error::UnsupportedFormat(e.to_string()))?;

    match format {
        ImageFormat::Png | ImageFormat::WebP => {
            let mut buf = Vec::new();
            img.write_to(&mut Cursor::new(&mut buf), format)?;
            std::fs::write(path, buf)?;
        }
        _ => {
            return Err(Error::UnsupportedFormat(format!(
                "{format:?} cannot store an alpha channel"
            )));
        }
    }

    Ok(())
}

/// Generate a default output path from an input path.
///
/// Example: `"logo.jpg"` becomes `"logo_transparent.png"`. The extension is
/// always `.png` so the alpha channel survives.
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let parent = input.parent().unwrap_or(Path::new("."));
    parent.join(format!("{stem}_transparent.png"))
}
