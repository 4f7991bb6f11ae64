use std::path::PathBuf;

/// Default reference viewport dimensions (a full HD desktop layout)
pub const DEFAULT_BASE_WIDTH: f64 = 1920.0;
pub const DEFAULT_BASE_HEIGHT: f64 = 1080.0;

/// Default suffix inserted into converted file names
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_adaptive";

/// Conversion target assigned to a property name
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Bucket {
    /// Lengths scale with the viewport height
    Height,
    /// Lengths scale with the viewport width; also the default for
    /// unclassified properties
    Width,
    /// Fine-detail lengths left in their original units
    Passthrough,
}

impl Bucket {
    /// Returns the target unit for this bucket, None for passthrough
    #[must_use]
    pub fn target_unit(self) -> Option<TargetUnit> {
        match self {
            Bucket::Height => Some(TargetUnit::Vh),
            Bucket::Width => Some(TargetUnit::Vw),
            Bucket::Passthrough => None,
        }
    }
}

/// Absolute length units recognised in declaration values
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SourceUnit {
    Px,
    Rem,
    Em,
}

/// Viewport-relative units produced by the conversion
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TargetUnit {
    Vw,
    Vh,
}

impl std::fmt::Display for TargetUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetUnit::Vw => write!(f, "vw"),
            TargetUnit::Vh => write!(f, "vh"),
        }
    }
}

/// Reference viewport dimensions that converted percentages are computed
/// against
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportContext {
    pub base_width: f64,
    pub base_height: f64,
}

impl ViewportContext {
    /// Returns the reference dimension a target unit is measured against
    #[must_use]
    pub fn base_for(&self, target: TargetUnit) -> f64 {
        match target {
            TargetUnit::Vw => self.base_width,
            TargetUnit::Vh => self.base_height,
        }
    }
}

impl Default for ViewportContext {
    fn default() -> Self {
        Self {
            base_width: DEFAULT_BASE_WIDTH,
            base_height: DEFAULT_BASE_HEIGHT,
        }
    }
}

/// Configuration settings parsed from command line arguments
pub struct ConfigSettings {
    pub case_sensitive: bool,
    pub recursive: bool,
    pub in_place: bool,
    pub base_width: f64,
    pub base_height: f64,
    pub suffix: String,
    pub supplied_paths: Vec<String>,
    pub folder: Option<String>,
}

impl ConfigSettings {
    /// Returns the conversion context for this run
    #[must_use]
    pub fn viewport_context(&self) -> ViewportContext {
        ViewportContext {
            base_width: self.base_width,
            base_height: self.base_height,
        }
    }
}

/// Token counts gathered while converting one stylesheet
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub px_count: usize,
    pub rem_count: usize,
    pub em_count: usize,
    pub vw_count: usize,
    pub vh_count: usize,
}

impl ConversionStats {
    /// Total absolute-length tokens seen in the source text
    #[must_use]
    pub fn absolute_total(&self) -> usize {
        self.px_count + self.rem_count + self.em_count
    }

    /// Total viewport tokens present in the converted text
    #[must_use]
    pub fn viewport_total(&self) -> usize {
        self.vw_count + self.vh_count
    }
}

/// Stores the results of converting one stylesheet in memory
#[derive(Debug, Clone)]
pub struct FileConversion {
    pub path: PathBuf,
    pub converted: Option<String>,
    pub changed: bool,
    pub stats: ConversionStats,
    pub error: Option<String>,
}

impl FileConversion {
    /// Returns true if the input file did not exist at all
    #[must_use]
    pub fn is_missing_file(&self) -> bool {
        matches!(&self.error, Some(error) if error.contains("File not found"))
    }
}

/// Stores the result of writing one converted stylesheet
#[derive(Debug, Clone)]
pub struct WriteResult {
    pub path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub error: Option<String>,
}
