use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Facts derived from a family's metadata sidecar
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    pub name: Option<String>,
    pub font_count: usize,
    pub designer: Option<String>,
    pub date_added: Option<String>,
    /// Distinct copyright strings across all fonts
    pub copyrights: BTreeSet<String>,
    pub emails: BTreeSet<String>,
    pub urls: BTreeSet<String>,
    pub copyright_name: Option<String>,
    pub copyright_year: Option<String>,
    /// Contact address picked for the copyright holder, empty if none
    pub copyright_email: String,
    /// Reserved Font Name clause, ready to splice into a sentence
    #[serde(rename = "RFN")]
    pub reserved_font_name: Option<String>,
    pub description: Option<String>,
}

/// Outcome of reading a family's metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Metadata {
    Available(MetadataRecord),
    /// The sidecar file does not exist
    Unavailable { path: PathBuf },
}

impl Metadata {
    pub fn is_available(&self) -> bool {
        matches!(self, Metadata::Available(_))
    }

    /// The record, or a blank one when the sidecar is missing
    pub fn into_record(self) -> MetadataRecord {
        match self {
            Metadata::Available(record) => record,
            Metadata::Unavailable { .. } => MetadataRecord::default(),
        }
    }
}

/// The consumed subset of `METADATA.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FamilySidecar {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub designer: Option<String>,
    #[serde(default, rename = "dateAdded")]
    pub date_added: Option<String>,
    #[serde(default)]
    pub fonts: Vec<FontEntry>,
}

/// One entry of the sidecar's `fonts` list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FontEntry {
    #[serde(default)]
    pub copyright: Option<String>,
}
