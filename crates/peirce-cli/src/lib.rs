//! CLI logic for the Peirce graph tool.
//!
//! This module contains the core CLI logic for the Peirce graph tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use log::info;

use peirce::{AegError, persist};

/// Run the Peirce CLI application
///
/// Loads the input graph file, verifies it, and prints its formula
/// projection to stdout. With `--output`, the verified graph is re-exported
/// as normalized JSON.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `AegError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed graph files
/// - Structural verification failures
pub fn run(args: &Args) -> Result<(), AegError> {
    info!(input_path = args.input; "Processing graph");

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Load and verify the graph
    let tree = persist::load(&args.input)?;

    // Print the formula projection
    println!("{tree}");

    // Optionally re-export normalized JSON
    if let Some(output) = &args.output {
        persist::save(&tree, output, app_config.output().pretty())?;
        info!(output_file = output.as_str(); "Graph exported");
    }

    Ok(())
}
