use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use viewport_units::analysis::analyze_file;
use viewport_units::processing::{process_file_for_write, write_outputs};
use viewport_units::types::{ConfigSettings, DEFAULT_BASE_HEIGHT, DEFAULT_BASE_WIDTH};
use viewport_units::utils::get_paths_matching_glob;

/// Helper function to create a stylesheet fixture inside the sandbox
fn write_stylesheet(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// Helper function to create test config with default settings
fn create_test_config() -> ConfigSettings {
    ConfigSettings {
        case_sensitive: false,
        recursive: false,
        in_place: false,
        base_width: DEFAULT_BASE_WIDTH,
        base_height: DEFAULT_BASE_HEIGHT,
        suffix: String::from("_adaptive"),
        supplied_paths: vec![],
        folder: None,
    }
}

const FIXTURE_CSS: &str = "\
.header {
    width: 960px;
    height: 540px;
    font-size: 1rem;
    box-shadow: 0 4px 8px rgba(0, 0, 0, 0.3);
}
";

const FIXTURE_CONVERTED: &str = "\
.header {
    width: 50.0000vw;
    height: 50.0000vh;
    font-size: 0.8333vw;
    box-shadow: 0 4px 8px rgba(0, 0, 0, 0.3);
}
";

#[test]
fn test_analyze_file_converts_and_counts() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = write_stylesheet(temp_dir.path(), "style.css", FIXTURE_CSS);
    let config = create_test_config();

    let result = analyze_file(&path, &config);
    assert!(result.error.is_none(), "Analysis should not have errors");
    assert!(result.changed, "Conversion should have rewritten tokens");
    assert_eq!(result.converted.as_deref(), Some(FIXTURE_CONVERTED));
    assert_eq!(result.stats.px_count, 4);
    assert_eq!(result.stats.rem_count, 1);
    assert_eq!(result.stats.em_count, 0);
    assert_eq!(result.stats.vw_count, 2);
    assert_eq!(result.stats.vh_count, 1);
}

#[test]
fn test_suffix_output_written_next_to_input() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = write_stylesheet(temp_dir.path(), "style.css", FIXTURE_CSS);
    let config = create_test_config();

    let result = analyze_file(&path, &config);
    let write_result = process_file_for_write(&result, &config);
    assert!(write_result.error.is_none(), "Write should not have errors");

    let output_path = temp_dir.path().join("style_adaptive.css");
    assert_eq!(write_result.output_path.as_deref(), Some(output_path.as_path()));
    let written = fs::read_to_string(&output_path).expect("Output file should exist");
    assert_eq!(written, FIXTURE_CONVERTED);

    // the original is untouched in suffix mode
    let original = fs::read_to_string(&path).expect("Original should still exist");
    assert_eq!(original, FIXTURE_CSS);
}

#[test]
fn test_in_place_rewrite_keeps_backup() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = write_stylesheet(temp_dir.path(), "style.css", FIXTURE_CSS);
    let mut config = create_test_config();
    config.in_place = true;

    let result = analyze_file(&path, &config);
    let write_result = process_file_for_write(&result, &config);
    assert!(write_result.error.is_none(), "Write should not have errors");
    assert_eq!(write_result.output_path.as_deref(), Some(path.as_path()));

    let rewritten = fs::read_to_string(&path).expect("Original should still exist");
    assert_eq!(rewritten, FIXTURE_CONVERTED);

    let backup_path = temp_dir.path().join("style.css.bak");
    let backup = fs::read_to_string(&backup_path).expect("Backup should exist");
    assert_eq!(backup, FIXTURE_CSS);
}

#[test]
fn test_in_place_skips_unchanged_files() {
    let css = ".a { color: red; border-radius: 8px; }\n";
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = write_stylesheet(temp_dir.path(), "style.css", css);
    let mut config = create_test_config();
    config.in_place = true;

    let result = analyze_file(&path, &config);
    assert!(result.error.is_none(), "Analysis should not have errors");
    assert!(!result.changed, "Nothing should have been converted");

    let write_result = process_file_for_write(&result, &config);
    assert!(write_result.error.is_none(), "Skipping is not an error");
    assert!(
        write_result.output_path.is_none(),
        "Unchanged file should be skipped"
    );
    assert!(
        !temp_dir.path().join("style.css.bak").exists(),
        "No backup for skipped files"
    );
    let untouched = fs::read_to_string(&path).expect("Original should still exist");
    assert_eq!(untouched, css);
}

#[test]
fn test_missing_file_reported_without_output() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("missing.css");
    let config = create_test_config();

    let result = analyze_file(&path, &config);
    assert!(result.is_missing_file(), "Missing file should be flagged");
    assert_eq!(result.error.as_deref(), Some("File not found"));
    assert!(result.converted.is_none());

    let write_result = process_file_for_write(&result, &config);
    assert!(write_result.output_path.is_none());
    assert!(write_result.error.is_none());
    assert!(
        !temp_dir.path().join("missing_adaptive.css").exists(),
        "No output for missing input"
    );
}

#[test]
fn test_glob_expansion_finds_stylesheets() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    write_stylesheet(temp_dir.path(), "b.css", FIXTURE_CSS);
    write_stylesheet(temp_dir.path(), "a.css", FIXTURE_CSS);
    write_stylesheet(temp_dir.path(), "notes.txt", "not a stylesheet");

    let mut config = create_test_config();
    config.folder = Some(temp_dir.path().to_string_lossy().into_owned());
    config.supplied_paths = vec![String::from("*.css")];

    let paths = get_paths_matching_glob(&config).expect("Glob expansion should succeed");
    assert_eq!(paths.len(), 2);
    assert!(paths[0].ends_with("a.css"));
    assert!(paths[1].ends_with("b.css"));
}

/// A literal path that doesn't exist is kept, so the conversion step can
/// report it by name
#[test]
fn test_literal_missing_path_survives_expansion() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");

    let mut config = create_test_config();
    config.folder = Some(temp_dir.path().to_string_lossy().into_owned());
    config.supplied_paths = vec![String::from("missing.css")];

    let paths = get_paths_matching_glob(&config).expect("Glob expansion should succeed");
    assert_eq!(paths.len(), 1);
    assert!(paths[0].ends_with("missing.css"));
}

#[test]
fn test_write_outputs_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let first = write_stylesheet(temp_dir.path(), "a.css", FIXTURE_CSS);
    let second = write_stylesheet(temp_dir.path(), "b.css", ".b { margin-top: 54px; }\n");
    let config = create_test_config();

    let results = vec![
        analyze_file(&first, &config),
        analyze_file(&second, &config),
    ];
    write_outputs(&config, &results).expect("Writing should succeed");

    assert!(temp_dir.path().join("a_adaptive.css").exists());
    let second_output = fs::read_to_string(temp_dir.path().join("b_adaptive.css"))
        .expect("Output file should exist");
    assert_eq!(second_output, ".b { margin-top: 5.0000vh; }\n");
}
