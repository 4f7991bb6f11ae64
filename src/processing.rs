use anyhow::Result;
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::types::{ConfigSettings, FileConversion, WriteResult};

/// Writes converted stylesheets out according to the configuration settings.
///
/// # Errors
///
/// Returns an error if any output file cannot be written.
pub fn write_outputs(config: &ConfigSettings, results: &[FileConversion]) -> Result<()> {
    println!();

    // Process files in parallel using rayon
    let write_results: Vec<WriteResult> = results
        .par_iter()
        .map(|result| process_file_for_write(result, config))
        .collect();

    // Process results sequentially for consistent output and counting
    let mut written_files = 0usize;
    let mut skipped_files = 0usize;

    for write_result in &write_results {
        if let Some(error) = &write_result.error {
            return Err(anyhow::anyhow!(
                "Failed to write converted file: {}: {}",
                write_result.path.display(),
                error
            ));
        }

        match &write_result.output_path {
            Some(output_path) if config.in_place => {
                println!("\"{}\"\trewritten in place", output_path.display());
                written_files += 1;
            }
            Some(output_path) => {
                println!(
                    "\"{}\"\t-> \"{}\"",
                    write_result.path.display(),
                    output_path.display()
                );
                written_files += 1;
            }
            None => {
                println!("\"{}\"\twrite skipped", write_result.path.display());
                skipped_files += 1;
            }
        }
    }

    println!("Wrote {written_files} converted stylesheet(s), skipped {skipped_files}");

    Ok(())
}

/// Picks the destination for a single converted stylesheet and writes it
#[must_use]
pub fn process_file_for_write(result: &FileConversion, config: &ConfigSettings) -> WriteResult {
    // nothing to write for files that failed to read
    let Some(converted) = &result.converted else {
        return WriteResult {
            path: result.path.clone(),
            output_path: None,
            error: None,
        };
    };

    if config.in_place {
        // skip files the conversion left untouched
        if !result.changed {
            return WriteResult {
                path: result.path.clone(),
                output_path: None,
                error: None,
            };
        }
        match replace_file_in_place(&result.path, converted) {
            Ok(()) => WriteResult {
                path: result.path.clone(),
                output_path: Some(result.path.clone()),
                error: None,
            },
            Err(e) => WriteResult {
                path: result.path.clone(),
                output_path: None,
                error: Some(e.to_string()),
            },
        }
    } else {
        let output_path = suffixed_output_path(&result.path, &config.suffix);
        match fs::write(&output_path, converted) {
            Ok(()) => WriteResult {
                path: result.path.clone(),
                output_path: Some(output_path),
                error: None,
            },
            Err(e) => WriteResult {
                path: result.path.clone(),
                output_path: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Builds the output path by inserting the suffix before the extension,
/// `style.css` -> `style_adaptive.css`
#[must_use]
pub fn suffixed_output_path(input_path: &Path, suffix: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default().to_string_lossy();
    let file_name = match input_path.extension() {
        Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };
    input_path.with_file_name(file_name)
}

/// Replaces a stylesheet with its converted form.
/// Creates a backup of the original file with .bak extension (if not already
/// created), stages the new content next to the original and swaps it in
/// with a rename.
///
/// # Errors
///
/// Returns an error if file operations (backup creation, writing, or renaming) fail.
pub fn replace_file_in_place(input_path: &Path, converted: &str) -> io::Result<()> {
    // Create backup if needed
    create_backup_if_needed(input_path)?;

    // Create the staging path by prepending an underscore to the filename
    let parent = input_path.parent().unwrap_or_else(|| Path::new(""));
    let file_name = input_path.file_name().unwrap_or_default();
    let mut staging_name = String::from("_");
    staging_name.push_str(&file_name.to_string_lossy());
    let staging_path = parent.join(staging_name);

    fs::write(&staging_path, converted)?;

    // Replace the original file with the new one
    fs::rename(staging_path, input_path)?;

    Ok(())
}

/// Creates a backup of a file if it doesn't already exist
fn create_backup_if_needed(input_path: &Path) -> io::Result<()> {
    let backup_path = get_backup_path(input_path);

    // Only create backup if it doesn't exist yet
    if !backup_path.exists() {
        fs::copy(input_path, &backup_path)?;
    }
    Ok(())
}

/// Gets the backup path for a given file
fn get_backup_path(input_path: &Path) -> PathBuf {
    input_path.with_extension(format!(
        "{}.bak",
        input_path
            .extension()
            .map(|ext| ext.to_string_lossy().to_string())
            .unwrap_or_default()
    ))
}
