use anyhow::Result;

use crate::types::ConfigSettings;

/// Expands the supplied glob patterns into stylesheet paths.
///
/// Matches are sorted within each pattern, but the overall order follows the
/// order the patterns were given on the command line.
///
/// # Errors
///
/// Returns an error if glob pattern matching fails.
pub fn get_paths_matching_glob(config: &ConfigSettings) -> Result<Vec<String>> {
    let glob_settings = glob::MatchOptions {
        case_sensitive: config.case_sensitive,
        require_literal_separator: false,
        require_literal_leading_dot: false,
    };

    let mut result = Vec::with_capacity(config.supplied_paths.len());

    for pattern in &config.supplied_paths {
        let search_pattern = compose_search_pattern(pattern, config);

        let mut glob_matches: Vec<_> = glob::glob_with(&search_pattern, glob_settings)?
            .filter_map(|entry| match entry {
                Ok(path) if path.is_file() => Some(path.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        if glob_matches.is_empty() && !has_glob_metacharacters(&search_pattern) {
            // A literal path is kept even when nothing matched, so the
            // conversion step can report the missing file by name
            result.push(search_pattern);
        } else {
            glob_matches.sort_by_key(|x| x.to_lowercase()); // Sorts in case-insensitive order
            result.extend(glob_matches);
        }
    }

    Ok(result)
}

/// Builds the full search pattern from a supplied pattern, the optional
/// folder prefix and the recursive flag
fn compose_search_pattern(pattern: &str, config: &ConfigSettings) -> String {
    // "." means the current directory and needs no prefix
    let folder = config
        .folder
        .as_deref()
        .filter(|folder| *folder != ".")
        .map(|folder| folder.trim_end_matches('/'));

    let recurse = config.recursive && !pattern.contains("**/");

    match (folder, recurse) {
        (Some(folder), true) => format!("{folder}/**/{pattern}"),
        (Some(folder), false) => format!("{folder}/{pattern}"),
        (None, true) => format!("**/{pattern}"),
        (None, false) => pattern.to_string(),
    }
}

/// check if a pattern contains glob wildcards
fn has_glob_metacharacters(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}
