pub const HELP: &str = "\
USAGE:
    viewport_units [options] stylesheet_pattern...

OPTIONS:
    -h, --help               Prints help information
    -f, --folder <FOLDER>    Specify the folder to search in (default: current directory)
    -c, --case-sensitive     Case-sensitive glob matching
    -r, --recursive          Recursively search subdirectories
    -W, --width <PIXELS>     Reference viewport width in pixels (default: 1920)
    -H, --height <PIXELS>    Reference viewport height in pixels (default: 1080)

OUTPUT:
    -s, --suffix <SUFFIX>    File name suffix for converted copies (default: _adaptive)
    -i, --in-place           Rewrite stylesheets in place, keeping a .bak backup";

/// Show help message
pub fn show_help() {
    println!("{HELP}");
}
