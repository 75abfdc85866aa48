use serde::Serialize;
use std::collections::BTreeSet;

use super::metadata::MetadataRecord;
use super::source::ExtensionTag;

/// How the metadata cells of a row were obtained
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "lowercase")]
pub enum MetadataStatus {
    Loaded,
    Missing,
    /// The sidecar is present but does not parse
    Corrupt(String),
    /// The sidecar is present but could not be read
    Unreadable(String),
}

/// One report line, covering a single family
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    /// Family path relative to the sources root, `/`-separated
    pub family: String,
    pub source_count: usize,
    /// Distinct directories holding the sources; anything but 1 needs review
    pub source_dir_count: usize,
    pub source_types: BTreeSet<ExtensionTag>,
    /// Source paths relative to the sources root, sorted
    pub source_files: Vec<String>,
    pub metadata: MetadataRecord,
    pub metadata_status: MetadataStatus,
    /// Set when the tree walk failed and `source_files` is incomplete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traversal_error: Option<String>,
}

impl ReportRow {
    /// More than one source directory: the family needs a human decision
    pub fn is_ambiguous(&self) -> bool {
        self.source_dir_count > 1
    }
}
