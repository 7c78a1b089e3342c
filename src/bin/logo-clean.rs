use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use logo_background_removal::{
    default_output_path, process_directory, process_file, ProcessOptions, ProcessResult, Profile,
};

#[derive(Parser)]
#[command(
    name = "logo-clean",
    about = "Strip white fills and checkerboard placeholders from logo images",
    version,
    after_help = "Simple usage: logo-clean <image>  (writes <image>_transparent.png)\n\n\
                  Profiles: white, checkerboard, aggressive (default), grid, sampled.\n\
                  Unset threshold flags fall back to the profile's defaults."
)]
struct Cli {
    /// Input image file or directory
    input: String,

    /// Output file or directory (default: {name}_transparent.png)
    #[arg(short, long)]
    output: Option<String>,

    /// Rule profile: white, checkerboard, aggressive, grid, sampled
    #[arg(short, long, default_value = "aggressive")]
    profile: String,

    /// Brightness cutoff for the near-white rule
    #[arg(long)]
    white_cutoff: Option<u8>,

    /// Lower bound of the grey checkerboard band
    #[arg(long)]
    grey_low: Option<u8>,

    /// Upper bound of the grey checkerboard band
    #[arg(long)]
    grey_high: Option<u8>,

    /// Maximum mutual channel difference for neutral pixels
    #[arg(long)]
    neutral_delta: Option<u8>,

    /// Channel sum above which neutral pixels count as residue
    #[arg(long)]
    sum_threshold: Option<u16>,

    /// Spacing between background sample points, in pixels
    #[arg(long)]
    sample_stride: Option<u32>,

    /// Side length of the background sample grid, in points
    #[arg(long)]
    sample_side: Option<u32>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long)]
    quiet: bool,
}

fn parse_profile(name: &str) -> Option<Profile> {
    match name.to_lowercase().as_str() {
        "white" => Some(Profile::White),
        "checkerboard" => Some(Profile::Checkerboard),
        "aggressive" => Some(Profile::Aggressive),
        "grid" => Some(Profile::Grid),
        "sampled" => Some(Profile::Sampled),
        _ => None,
    }
}

fn main() {
    let cli = Cli::parse();

    let Some(profile) = parse_profile(&cli.profile) else {
        eprintln!(
            "Error: Unknown profile '{}' (expected white, checkerboard, aggressive, grid or sampled)",
            cli.profile
        );
        process::exit(1);
    };

    let mut thresholds = profile.default_thresholds();
    if let Some(v) = cli.white_cutoff {
        thresholds.white_cutoff = v;
    }
    if let Some(v) = cli.grey_low {
        thresholds.grey_low = v;
    }
    if let Some(v) = cli.grey_high {
        thresholds.grey_high = v;
    }
    if let Some(v) = cli.neutral_delta {
        thresholds.neutral_delta = v;
    }
    if let Some(v) = cli.sum_threshold {
        thresholds.sum_threshold = v;
    }
    if let Some(v) = cli.sample_stride {
        thresholds.sample_stride = v;
    }
    if let Some(v) = cli.sample_side {
        thresholds.sample_side = v;
    }

    if thresholds.grey_low > thresholds.grey_high {
        eprintln!(
            "Error: Grey band lower bound {} exceeds upper bound {}",
            thresholds.grey_low, thresholds.grey_high
        );
        process::exit(1);
    }

    if profile == Profile::Sampled && thresholds.sample_side == 0 {
        eprintln!("Error: Sample grid must contain at least one point");
        process::exit(1);
    }

    let opts = ProcessOptions {
        profile,
        thresholds,
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let input_path = Path::new(&cli.input);
    if !input_path.exists() {
        eprintln!("Error: Input path does not exist: {}", cli.input);
        process::exit(1);
    }

    if !opts.quiet {
        match opts.profile {
            Profile::Sampled => eprintln!(
                "Profile: sampled ({side}x{side} grid, stride {stride})",
                side = opts.thresholds.sample_side,
                stride = opts.thresholds.sample_stride,
            ),
            Profile::Grid => eprintln!(
                "Profile: grid (grey band {}-{}, neutral delta {})",
                opts.thresholds.grey_low,
                opts.thresholds.grey_high,
                opts.thresholds.neutral_delta,
            ),
            _ => eprintln!(
                "Profile: {} (white cutoff {}, grey band {}-{}, neutral delta {}, sum threshold {})",
                cli.profile.to_lowercase(),
                opts.thresholds.white_cutoff,
                opts.thresholds.grey_low,
                opts.thresholds.grey_high,
                opts.thresholds.neutral_delta,
                opts.thresholds.sum_threshold,
            ),
        }
        eprintln!();
    }

    let results = if input_path.is_dir() {
        let output_dir = if let Some(o) = &cli.output {
            PathBuf::from(o)
        } else {
            eprintln!("Error: Output directory is required for batch processing");
            eprintln!("Usage: logo-clean <input_dir> -o <output_dir>");
            process::exit(1);
        };
        process_directory(input_path, &output_dir, &opts)
    } else {
        let output_path = match &cli.output {
            Some(o) => PathBuf::from(o),
            None => default_output_path(input_path),
        };
        vec![process_file(input_path, &output_path, &opts)]
    };

    let mut success_count = 0u32;
    let mut fail_count = 0u32;

    for r in &results {
        print_result(r, &opts);
        if r.success {
            success_count += 1;
        } else {
            fail_count += 1;
        }
    }

    if results.len() > 1 && !opts.quiet {
        eprintln!();
        eprint!("[Summary] Processed: {success_count}");
        if fail_count > 0 {
            eprint!(", Failed: {fail_count}");
        }
        eprintln!(" (Total: {})", results.len());
    }

    if fail_count > 0 {
        process::exit(1);
    }
}

fn print_result(result: &ProcessResult, opts: &ProcessOptions) {
    if opts.quiet && result.success {
        return;
    }

    let filename = result.path.file_name().map_or_else(
        || result.path.display().to_string(),
        |f| f.to_string_lossy().to_string(),
    );

    if result.success {
        if !opts.quiet {
            #[allow(clippy::cast_precision_loss)]
            let ratio = if result.total == 0 {
                0.0
            } else {
                result.cleared as f64 / result.total as f64 * 100.0
            };
            eprintln!(
                "[OK] {filename}: cleared {}/{} pixels ({ratio:.1}%)",
                result.cleared, result.total
            );
        }
    } else {
        eprintln!("[FAIL] {filename}: {}", result.message);
    }

    if opts.verbose && !result.message.is_empty() {
        eprintln!("  -> {}", result.message);
    }
}
