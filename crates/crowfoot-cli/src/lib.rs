//! CLI logic for the Crowfoot ERD tool.
//!
//! This module contains the core CLI logic for the Crowfoot draw-order tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use crowfoot::{CrowfootError, DiagramBuilder, export::plan::PlanSurface};

/// Run the Crowfoot CLI application
///
/// This function processes the input file through the Crowfoot pipeline
/// and writes the resulting draw plan to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CrowfootError` for:
/// - File I/O errors
/// - Configuration loading errors
pub fn run(args: &Args) -> Result<(), CrowfootError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Process the diagram using the DiagramBuilder API
    let builder = DiagramBuilder::new(app_config);
    let relations = builder.parse(&source);
    let ordered = builder.order(relations);

    let mut surface = PlanSurface::new();
    builder.draw(&ordered, &mut surface);

    // Write output file
    fs::write(&args.output, surface.into_plan())?;

    info!(output_file = args.output; "Draw plan exported successfully");

    Ok(())
}
