//! Audit of font family source repositories.
//!
//! For every family directory below the license roots of a sources
//! checkout, finds the editable font sources (`.ufo`, `.sfdir`, `.vfb`,
//! `.sfd`, `.glyphs`) and derives designer, copyright and contact facts
//! from the family's `METADATA.json`.

pub mod cli;
pub mod error;
pub mod metadata;
pub mod models;
pub mod report;
pub mod sources;
pub mod utils;

pub use error::{Error, Result};
pub use metadata::extract_metadata;
pub use models::{AuditConfig, FamilyDirectory, Metadata, MetadataRecord, SourceArtifact};
pub use report::{run_report, ReportWriter, RunSummary};
pub use sources::{enumerate_families, walk_family};
