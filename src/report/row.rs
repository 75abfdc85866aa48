use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::Result;
use crate::metadata::{extract_metadata, resolve_metadata};
use crate::models::{
    AuditConfig, FamilyDirectory, MetadataRecord, MetadataStatus, ReportRow, SourceArtifact,
};
use crate::sources::walk_family;
use crate::utils::display_relative;

/// Column labels, in the order of [`ReportRow::cells`]
pub const LABELS: [&str; 12] = [
    "Family Dir",
    "# Source Files",
    "# Source Dirs",
    "Source Types",
    "Source Files",
    "Family Name",
    "# Fonts",
    "Designer",
    "Emails",
    "URLs",
    "Copyrights",
    "Date Added",
];

fn join_sorted<'a>(items: impl IntoIterator<Item = &'a str>, separator: &str) -> String {
    let mut items: Vec<&str> = items.into_iter().collect();
    items.sort_unstable();
    items.join(separator)
}

/// Combine a family's artifacts and metadata into one row
pub fn assemble_row(
    family: &FamilyDirectory,
    artifacts: &[SourceArtifact],
    metadata: MetadataRecord,
    metadata_status: MetadataStatus,
) -> ReportRow {
    let source_dirs: BTreeSet<&PathBuf> = artifacts.iter().map(|a| &a.containing_dir).collect();
    let mut source_files: Vec<String> = artifacts
        .iter()
        .map(|a| display_relative(&a.relative_path))
        .collect();
    source_files.sort();

    ReportRow {
        family: family.to_string(),
        source_count: artifacts.len(),
        source_dir_count: source_dirs.len(),
        source_types: artifacts.iter().map(|a| a.extension).collect(),
        source_files,
        metadata,
        metadata_status,
        traversal_error: None,
    }
}

/// Walk and read one family, isolating its failures from the rest of the run
pub fn build_row(config: &AuditConfig, sources_dir: &Path, family: &FamilyDirectory) -> ReportRow {
    let (artifacts, traversal_error) = match walk_family(sources_dir, family).collect::<Result<Vec<_>>>() {
        Ok(artifacts) => (artifacts, None),
        Err(e) => {
            warn!("Could not walk {}: {}", family, e);
            (Vec::new(), Some(e.to_string()))
        }
    };

    let (metadata, status) = resolve_metadata(family, extract_metadata(config, sources_dir, family));

    let mut row = assemble_row(family, &artifacts, metadata, status);
    row.traversal_error = traversal_error;
    row
}

impl ReportRow {
    /// Display-ready cells in [`LABELS`] order
    pub fn cells(&self) -> Vec<String> {
        let mut cells = vec![
            self.family.clone(),
            self.source_count.to_string(),
            self.source_dir_count.to_string(),
            join_sorted(self.source_types.iter().map(|t| t.as_str()), ", "),
            join_sorted(self.source_files.iter().map(String::as_str), "\n"),
        ];

        if self.metadata_status == MetadataStatus::Loaded {
            let meta = &self.metadata;
            cells.extend([
                meta.name.clone().unwrap_or_default(),
                meta.font_count.to_string(),
                meta.designer.clone().unwrap_or_default(),
                join_sorted(meta.emails.iter().map(String::as_str), "\n"),
                join_sorted(meta.urls.iter().map(String::as_str), "\n"),
                join_sorted(meta.copyrights.iter().map(String::as_str), "\n"),
                meta.date_added.clone().unwrap_or_default(),
            ]);
        } else {
            cells.extend(std::iter::repeat(String::new()).take(7));
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExtensionTag;
    use std::fs;
    use tempfile::TempDir;

    fn artifact(path: &str, dir: &str, extension: ExtensionTag) -> SourceArtifact {
        SourceArtifact {
            relative_path: PathBuf::from(path),
            containing_dir: PathBuf::from(dir),
            extension,
        }
    }

    #[test]
    fn counts_distinct_containing_dirs() {
        let family = FamilyDirectory::new("ofl", "fam");
        let artifacts = vec![
            artifact("ofl/fam/src/B.ufo", "ofl/fam/src", ExtensionTag::Ufo),
            artifact("ofl/fam/src/A.ufo", "ofl/fam/src", ExtensionTag::Ufo),
            artifact("ofl/fam/old/A.vfb", "ofl/fam/old", ExtensionTag::Vfb),
        ];
        let row = assemble_row(&family, &artifacts, MetadataRecord::default(), MetadataStatus::Missing);
        assert_eq!(row.source_count, 3);
        assert_eq!(row.source_dir_count, 2);
        assert!(row.is_ambiguous());
        assert_eq!(row.source_files[0], "ofl/fam/old/A.vfb");

        let cells = row.cells();
        assert_eq!(cells.len(), LABELS.len());
        assert_eq!(cells[3], ".ufo, .vfb");
        assert_eq!(cells[4], "ofl/fam/old/A.vfb\nofl/fam/src/A.ufo\nofl/fam/src/B.ufo");
        assert!(cells[5..].iter().all(String::is_empty));
    }

    #[test]
    fn empty_family_has_zero_dirs() {
        let family = FamilyDirectory::new("apache", "none");
        let row = assemble_row(&family, &[], MetadataRecord::default(), MetadataStatus::Missing);
        assert_eq!(row.source_dir_count, 0);
        assert!(!row.is_ambiguous());
        assert_eq!(&row.cells()[..5], &["apache/none", "0", "0", "", ""]);
    }

    #[test]
    fn loaded_metadata_fills_cells_in_order() {
        let family = FamilyDirectory::new("ofl", "fam");
        let record = MetadataRecord {
            name: Some("Fam".to_string()),
            font_count: 2,
            designer: Some("Jane Doe".to_string()),
            date_added: Some("2014-05-01".to_string()),
            emails: ["b@x.org", "a@x.org"].iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        };
        let cells = assemble_row(&family, &[], record, MetadataStatus::Loaded).cells();
        assert_eq!(cells[5], "Fam");
        assert_eq!(cells[6], "2");
        assert_eq!(cells[7], "Jane Doe");
        assert_eq!(cells[8], "a@x.org\nb@x.org");
        assert_eq!(cells[11], "2014-05-01");
    }

    #[test]
    fn walk_failure_still_yields_a_row_with_metadata() {
        let tmp = TempDir::new().unwrap();
        let family = FamilyDirectory::new("ofl", "gone");

        let row = build_row(&AuditConfig::default(), tmp.path(), &family);
        assert_eq!(row.family, "ofl/gone");
        assert_eq!(row.source_count, 0);
        assert_eq!(row.source_dir_count, 0);
        assert!(row.source_files.is_empty());
        assert!(row.traversal_error.as_deref().unwrap().contains("ofl"));
        assert_eq!(row.metadata_status, MetadataStatus::Missing);
        assert_eq!(row.cells().len(), LABELS.len());
    }

    #[test]
    fn unreadable_description_does_not_blank_metadata() {
        let tmp = TempDir::new().unwrap();
        let family = FamilyDirectory::new("ofl", "abel");
        let dir = family.path_in(tmp.path());
        fs::create_dir_all(dir.join("Abel.ufo")).unwrap();
        fs::write(
            dir.join("METADATA.json"),
            r#"{"name": "Abel", "fonts": [{"copyright": "Copyright (c) 2011, Matthew Desmond (matt@madtype.com)"}]}"#,
        )
        .unwrap();
        fs::write(dir.join("DESCRIPTION.en_us.html"), b"<p>Caf\xe9</p>").unwrap();

        let row = build_row(&AuditConfig::default(), tmp.path(), &family);
        assert_eq!(row.metadata_status, MetadataStatus::Loaded);
        let cells = row.cells();
        assert_eq!(cells[1], "1");
        assert_eq!(cells[5], "Abel");
        assert_eq!(cells[6], "1");
        assert_eq!(cells[8], "matt@madtype.com");
    }
}
