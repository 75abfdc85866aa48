use std::fmt;

/// License directories scanned by default, in this order
pub const DEFAULT_LICENSE_DIRS: [&str; 2] = ["apache", "ofl"];
/// Per-family metadata sidecar
pub const DEFAULT_METADATA_FILE: &str = "METADATA.json";
/// Per-family description sidecar
pub const DEFAULT_DESCRIPTION_FILE: &str = "DESCRIPTION.en_us.html";

/// Configuration for an audit run
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Enable debug output
    pub debug_mode: bool,
    /// Only log errors; ignored in debug mode
    pub quiet: bool,
    /// License roots below the sources directory, scanned in order
    pub license_dirs: Vec<String>,
    /// Name of the JSON metadata sidecar inside each family
    pub metadata_file: String,
    /// Name of the description sidecar inside each family
    pub description_file: String,
    /// Encoding of the report rows
    pub format: OutputFormat,
    /// Number of families processed concurrently; 1 runs sequentially
    pub jobs: usize,
}

/// Report encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fully quoted CSV with a header row
    #[default]
    Csv,
    /// One JSON object per line
    JsonLines,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::JsonLines => write!(f, "jsonl"),
        }
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self::new(false)
    }
}

impl AuditConfig {
    /// Create a new configuration with default settings
    pub fn new(debug_mode: bool) -> Self {
        Self {
            debug_mode,
            quiet: false,
            license_dirs: DEFAULT_LICENSE_DIRS.iter().map(|d| d.to_string()).collect(),
            metadata_file: DEFAULT_METADATA_FILE.to_string(),
            description_file: DEFAULT_DESCRIPTION_FILE.to_string(),
            format: OutputFormat::Csv,
            jobs: 1,
        }
    }

    /// Check the settings that can't be expressed in the type
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::Error;

        if self.license_dirs.is_empty() {
            return Err(Error::Config("at least one license directory is required".to_string()));
        }
        if let Some(bad) = self
            .license_dirs
            .iter()
            .find(|d| d.is_empty() || d.contains('/') || d.contains('\\'))
        {
            return Err(Error::Config(format!(
                "license directory '{}' must be a single path component",
                bad
            )));
        }
        if self.metadata_file.is_empty() || self.description_file.is_empty() {
            return Err(Error::Config("sidecar file names must not be empty".to_string()));
        }
        if self.jobs == 0 {
            return Err(Error::Config("--jobs must be at least 1".to_string()));
        }
        Ok(())
    }
}
