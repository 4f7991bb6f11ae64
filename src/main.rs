#![allow(dead_code)]

use anyhow::{Context, Result};
use pico_args::Arguments;
use rayon::prelude::*;
use std::time::Instant;

mod analysis;
mod config;
mod convert;
mod help;
mod processing;
mod types;
mod utils;

use analysis::analyze_file;
use config::parse_args;
use help::show_help;
use processing::write_outputs;
use types::{DEFAULT_BASE_HEIGHT, DEFAULT_BASE_WIDTH, DEFAULT_OUTPUT_SUFFIX};
use utils::get_paths_matching_glob;

fn main() -> Result<()> {
    // Parse command line arguments
    let mut p_args = Arguments::from_env();

    // special handling of help
    if p_args.contains(["-h", "--help"]) {
        show_help();
        return Ok(());
    }

    let config = parse_args(p_args)?;

    let start_time = Instant::now();

    // expand glob patterns and get stylesheet paths
    let expanded_paths =
        get_paths_matching_glob(&config).with_context(|| "Failed to expand glob patterns")?;

    if expanded_paths.is_empty() {
        return Err(anyhow::anyhow!("No input stylesheets found"));
    }

    // Build configuration display, only showing non-default/active options
    let mut config_parts = Vec::new();

    // Always show folder if not current directory
    if let Some(folder) = &config.folder
        && folder != "."
    {
        config_parts.push(format!("Folder: {folder}"));
    }

    // Only show boolean flags if they are true
    if config.case_sensitive {
        config_parts.push("Case sensitive: true".to_string());
    }
    if config.recursive {
        config_parts.push("Recursive: true".to_string());
    }

    // Only show the reference viewport if it differs from the default
    if config.base_width != DEFAULT_BASE_WIDTH || config.base_height != DEFAULT_BASE_HEIGHT {
        config_parts.push(format!(
            "Reference viewport: {}x{}",
            config.base_width, config.base_height
        ));
    }

    // Only show the output mode if it differs from the default suffix
    if config.in_place {
        config_parts.push("In place: true".to_string());
    } else if config.suffix != DEFAULT_OUTPUT_SUFFIX {
        config_parts.push(format!("Output suffix: {}", config.suffix));
    }

    // Display configuration if there are any non-default options
    if !config_parts.is_empty() {
        println!("{}", config_parts.join(", "));
    }

    // Convert all stylesheets in parallel using rayon
    let conversion_start = Instant::now();
    let results: Vec<_> = expanded_paths
        .par_iter()
        .map(|path| analyze_file(path, &config))
        .collect();
    let conversion_duration = conversion_start.elapsed();

    // Print any errors and categorize them
    let mut missing_files = 0usize;
    let mut failed_files = 0usize;
    let mut converted_files = 0usize;
    let mut unchanged_files = 0usize;
    let mut total_px = 0usize;
    let mut total_rem = 0usize;
    let mut total_em = 0usize;
    let mut total_vw = 0usize;
    let mut total_vh = 0usize;

    for result in &results {
        if let Some(error) = &result.error {
            println!("\nFile: {}\terror: {error}", result.path.display());
            if result.is_missing_file() {
                missing_files += 1;
            } else {
                failed_files += 1;
            }
        } else {
            converted_files += 1;
            total_px += result.stats.px_count;
            total_rem += result.stats.rem_count;
            total_em += result.stats.em_count;
            total_vw += result.stats.vw_count;
            total_vh += result.stats.vh_count;
            if !result.changed {
                unchanged_files += 1;
            }
        }
    }

    // bail before writing anything if an input was missing or unreadable
    if missing_files > 0 {
        return Err(anyhow::anyhow!("Input file(s) not found: {missing_files}"));
    }
    if failed_files > 0 {
        return Err(anyhow::anyhow!("  Files with errors: {failed_files}"));
    }

    // write converted stylesheets to disk
    write_outputs(&config, &results)?;

    // Print summary statistics
    let total_duration = start_time.elapsed();
    println!("\n--- Summary ---");
    println!("Total stylesheets converted: {converted_files}");
    if unchanged_files > 0 {
        println!("Stylesheets without conversions: {unchanged_files}");
    }
    println!("Absolute tokens found: px {total_px}, rem {total_rem}, em {total_em}");
    println!("Viewport tokens written: vw {total_vw}, vh {total_vh}");
    println!("Conversion time: {:.3}s", conversion_duration.as_secs_f64());
    println!("Total time: {:.3}s", total_duration.as_secs_f64());

    Ok(())
}
