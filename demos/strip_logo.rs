//! Strip the background from a single logo image.
//!
//! Usage:
//! ```sh
//! cargo run --example strip_logo -- input.jpg output.png
//! ```

use std::env;
use std::process;

use logo_background_removal::{process_file, ProcessOptions};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <input> <output>", args[0]);
        process::exit(1);
    }

    let input = &args[1];
    let output = &args[2];

    let opts = ProcessOptions::default();
    let result = process_file(input.as_ref(), output.as_ref(), &opts);

    if result.success {
        println!("Done: {}", result.message);
    } else {
        eprintln!("Error: {}", result.message);
        process::exit(1);
    }
}
