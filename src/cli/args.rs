use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::models::{AuditConfig, OutputFormat};

/// FontSrcAudit CLI arguments
///
/// Examples:
///   fontsrc-audit report ~/fonts                       # CSV report of apache/ and ofl/
///   fontsrc-audit report ~/fonts --format jsonl -j 8   # JSON lines, eight workers
///   fontsrc-audit sources ~/fonts ofl/abel             # list one family's sources
///   fontsrc-audit metadata ~/fonts ofl/abel            # derived metadata as JSON
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "fontsrc-audit",
    version,
    about = "Audit font family source repositories",
    long_about = "Walks the license directories of a font sources checkout, finds the editable sources of every family and extracts designer, copyright and contact facts from each family's METADATA.json."
)]
pub struct CliArgs {
    /// Enable debug output
    #[clap(long, global = true)]
    pub debug: bool,

    /// Only log errors
    #[clap(long, short = 'q', global = true)]
    pub quiet: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print one report row per family
    Report(ReportArgs),
    /// List the source artifacts of one family
    Sources(FamilyArgs),
    /// Print the metadata derived for one family
    Metadata(FamilyArgs),
}

/// Options shared by every command that reads a sources checkout
#[derive(Args, Debug, Clone)]
pub struct SourceOptions {
    /// License directory to scan, in order; repeat to give several
    #[clap(long = "license-dir", value_name = "DIR")]
    pub license_dirs: Vec<String>,

    /// Name of the metadata sidecar inside each family
    #[clap(long, default_value = crate::models::config::DEFAULT_METADATA_FILE)]
    pub metadata_file: String,

    /// Name of the description sidecar inside each family
    #[clap(long, default_value = crate::models::config::DEFAULT_DESCRIPTION_FILE)]
    pub description_file: String,
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Root of the sources checkout (contains apache/ and ofl/)
    pub sources_dir: PathBuf,

    /// Output encoding
    #[clap(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,

    /// Number of families processed concurrently
    #[clap(long, short = 'j', default_value_t = 1)]
    pub jobs: usize,

    /// Exit with an error when any family has corrupt or unreadable metadata
    #[clap(long)]
    pub strict: bool,

    #[clap(flatten)]
    pub options: SourceOptions,
}

#[derive(Args, Debug, Clone)]
pub struct FamilyArgs {
    /// Root of the sources checkout
    pub sources_dir: PathBuf,

    /// Family directory relative to the root, e.g. ofl/abel
    pub family: String,

    #[clap(flatten)]
    pub options: SourceOptions,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Csv,
    Jsonl,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Jsonl => OutputFormat::JsonLines,
        }
    }
}

impl CliArgs {
    /// Run configuration for the selected command, carrying the global flags
    pub fn to_config(&self) -> AuditConfig {
        let mut config = match &self.command {
            Command::Report(report) => report.to_config(self.debug),
            Command::Sources(family) | Command::Metadata(family) => {
                family.options.to_config(self.debug)
            }
        };
        config.quiet = self.quiet;
        config
    }
}

impl SourceOptions {
    /// Build the run configuration from these options
    pub fn to_config(&self, debug_mode: bool) -> AuditConfig {
        let mut config = AuditConfig::new(debug_mode);
        if !self.license_dirs.is_empty() {
            config.license_dirs = self.license_dirs.clone();
        }
        config.metadata_file = self.metadata_file.clone();
        config.description_file = self.description_file.clone();
        config
    }
}

impl ReportArgs {
    pub fn to_config(&self, debug_mode: bool) -> AuditConfig {
        let mut config = self.options.to_config(debug_mode);
        config.format = self.format.into();
        config.jobs = self.jobs;
        config
    }
}
