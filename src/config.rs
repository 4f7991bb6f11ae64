use anyhow::Result;
use pico_args::Arguments;

use crate::types::{
    ConfigSettings, DEFAULT_BASE_HEIGHT, DEFAULT_BASE_WIDTH, DEFAULT_OUTPUT_SUFFIX,
};

/// Parses command line arguments and returns configuration settings.
///
/// # Errors
///
/// Returns an error if invalid arguments are provided or conflicting options are specified.
pub fn parse_args(mut args: Arguments) -> Result<ConfigSettings> {
    // Parse flags
    let case_sensitive = args.contains(["-c", "--case-sensitive"]);
    let recursive = args.contains(["-r", "--recursive"]);
    let in_place = args.contains(["-i", "--in-place"]);

    let folder: Option<String> = args.opt_value_from_str(["-f", "--folder"])?;
    let width: Option<f64> = args.opt_value_from_str(["-W", "--width"])?;
    let height: Option<f64> = args.opt_value_from_str(["-H", "--height"])?;
    let suffix: Option<String> = args.opt_value_from_str(["-s", "--suffix"])?;

    let base_width = width.unwrap_or(DEFAULT_BASE_WIDTH);
    let base_height = height.unwrap_or(DEFAULT_BASE_HEIGHT);

    let valid_dimension = |value: f64| value.is_finite() && value > 0.0;
    if !valid_dimension(base_width) || !valid_dimension(base_height) {
        return Err(anyhow::anyhow!(
            "Reference viewport dimensions must be positive numbers"
        ));
    }

    if in_place && suffix.is_some() {
        return Err(anyhow::anyhow!(
            "Cannot set both in-place rewriting and an output suffix at the same time"
        ));
    }

    // Get all stylesheet patterns from the command line
    let mut supplied_paths = Vec::new();
    let mut unrecognized_switches = Vec::new();

    while let Ok(path) = args.free_from_str::<String>() {
        // Check if the argument starts with "-", which indicates it's likely a switch
        if path.starts_with('-') {
            unrecognized_switches.push(path);
        } else {
            supplied_paths.push(path);
        }
    }

    // check for switches collected by the free_from_str loop
    if !unrecognized_switches.is_empty() {
        return Err(anyhow::anyhow!(format!(
            "Unrecognized switches: {unrecognized_switches:?}"
        )));
    }

    // Check for any remaining unparsed arguments (extra switches)
    let extras = args.finish();
    if !extras.is_empty() {
        return Err(anyhow::anyhow!(format!(
            "Unrecognized switches: {extras:?}"
        )));
    }

    Ok(ConfigSettings {
        case_sensitive,
        recursive,
        in_place,
        base_width,
        base_height,
        suffix: suffix.unwrap_or_else(|| String::from(DEFAULT_OUTPUT_SUFFIX)),
        supplied_paths,
        folder,
    })
}
