//! Strip background pixels from logo images.
//!
//! Logos exported from design tools often arrive with a baked-in background:
//! a flat white fill, a grey checkerboard "transparency" placeholder, or the
//! bright neutral noise JPEG compression smears around both. This crate
//! classifies those pixels with a small set of ordered RGB threshold rules
//! and replaces every match with transparent white, producing a PNG with a
//! real alpha channel.
//!
//! # Quick Start
//!
//! ```no_run
//! use logo_background_removal::{process_file, ProcessOptions};
//!
//! let opts = ProcessOptions::default();
//! let result = process_file(
//!     "logo.jpg".as_ref(),
//!     "logo_transparent.png".as_ref(),
//!     &opts,
//! );
//! assert!(result.success, "{}", result.message);
//! ```
//!
//! # Working on decoded images
//!
//! The classification pass is exposed directly for callers that already hold
//! a decoded image:
//!
//! ```no_run
//! use logo_background_removal::{strip_background, BackgroundRule};
//!
//! let mut img = image::open("logo.jpg").unwrap().to_rgba8();
//! let cleared = strip_background(&mut img, &[BackgroundRule::NearWhite { cutoff: 240 }]);
//! println!("cleared {cleared} pixels");
//! img.save("logo_transparent.png").unwrap();
//! ```
//!
//! # Profiles
//!
//! Five rule profiles cover the observed background styles: [`Profile::White`]
//! for plain white fills, [`Profile::Checkerboard`] for white plus grey
//! squares, [`Profile::Aggressive`] (the default) adding a compression-residue
//! rule, [`Profile::Grid`] casting one wide bright-neutral band over both tile
//! shades, and [`Profile::Sampled`] which matches colors sampled from a corner
//! grid assumed to lie on background tiles. Every numeric threshold is
//! explicit configuration via [`Thresholds`].

#![deny(missing_docs)]

pub mod classify;
mod engine;
pub mod error;
pub mod rules;
pub mod sampling;

pub use classify::{strip_background, TRANSPARENT_WHITE};
pub use engine::{
    default_output_path, is_supported_image, process_directory, process_file, ProcessOptions,
    ProcessResult, save_image, strip_image,
};
pub use error::{Error, Result};
pub use rules::{BackgroundRule, Profile, Thresholds};
