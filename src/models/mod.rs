//! Data types shared across the audit pipeline

pub mod config;
pub mod metadata;
pub mod report;
pub mod source;

pub use config::{AuditConfig, OutputFormat};
pub use metadata::{FamilySidecar, FontEntry, Metadata, MetadataRecord};
pub use report::{MetadataStatus, ReportRow};
pub use source::{ExtensionTag, FamilyDirectory, SourceArtifact, SourceKind};
