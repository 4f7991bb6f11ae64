use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use crate::convert::{convert_stylesheet, token_pattern};
use crate::types::{ConfigSettings, ConversionStats, FileConversion, SourceUnit};

// Converted tokens always carry a fractional part, so a digits-dot-digits
// pattern is enough to pick them out of the output text.
static VW_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+vw").expect("valid pattern"));
static VH_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+vh").expect("valid pattern"));

/// Converts a single stylesheet in memory and gathers its token statistics.
/// Read failures are captured in the result instead of aborting the run.
pub fn analyze_file(path: impl AsRef<Path>, config: &ConfigSettings) -> FileConversion {
    let path_ref = path.as_ref();

    let source = match fs::read_to_string(path_ref) {
        Ok(text) => text,
        Err(e) => {
            let message = if e.kind() == io::ErrorKind::NotFound {
                String::from("File not found")
            } else {
                format!("Failed to read: {e}")
            };
            return FileConversion {
                path: path_ref.to_path_buf(),
                converted: None,
                changed: false,
                stats: ConversionStats::default(),
                error: Some(message),
            };
        }
    };

    let ctx = config.viewport_context();
    let converted = convert_stylesheet(&source, &ctx);
    let stats = conversion_stats(&source, &converted);
    let changed = converted != source;

    // display results immediately, as Rayon is still running tasks in parallel
    // needs to be a single println! to avoid interleaving output
    println!(
        "\"{}\"\tpx {}, rem {}, em {} -> vw {}, vh {}",
        path_ref.display(),
        stats.px_count,
        stats.rem_count,
        stats.em_count,
        stats.vw_count,
        stats.vh_count
    );

    FileConversion {
        path: path_ref.to_path_buf(),
        converted: Some(converted),
        changed,
        stats,
        error: None,
    }
}

/// Counts absolute-length tokens in the source text and viewport tokens in
/// the converted text
#[must_use]
pub fn conversion_stats(source: &str, converted: &str) -> ConversionStats {
    ConversionStats {
        px_count: token_pattern(SourceUnit::Px).find_iter(source).count(),
        rem_count: token_pattern(SourceUnit::Rem).find_iter(source).count(),
        em_count: token_pattern(SourceUnit::Em).find_iter(source).count(),
        vw_count: VW_TOKEN.find_iter(converted).count(),
        vh_count: VH_TOKEN.find_iter(converted).count(),
    }
}
