//! Command-line interface definitions

mod args;

pub use args::{CliArgs, Command, FamilyArgs, FormatArg, ReportArgs, SourceOptions};
