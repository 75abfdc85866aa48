use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, error, warn};

use crate::error::{Error, Result};
use crate::models::{
    AuditConfig, FamilyDirectory, FamilySidecar, Metadata, MetadataRecord, MetadataStatus,
};
use super::facts::derive_copyright_facts;

/// Read a file, mapping "not found" to `None`
fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(Error::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Parse the metadata sidecar of a family, if it exists
pub fn read_sidecar(path: &Path) -> Result<Option<FamilySidecar>> {
    let Some(content) = read_optional(path)? else {
        return Ok(None);
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| Error::MetadataCorrupt {
            path: path.to_path_buf(),
            source,
        })
}

/// Read the optional description sidecar of a family.
///
/// Never fails: invalid UTF-8 is decoded lossily and an unreadable file
/// is logged and treated as absent.
pub fn read_description(path: &Path) -> Option<String> {
    match fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            warn!("Ignoring description {}: {}", path.display(), e);
            None
        }
    }
}

/// Build a record from an already parsed sidecar
pub fn record_from_sidecar(sidecar: FamilySidecar, description: Option<String>) -> MetadataRecord {
    // a font without a notice still contributes an empty string
    let copyrights: BTreeSet<String> = sidecar
        .fonts
        .iter()
        .map(|font| font.copyright.clone().unwrap_or_default())
        .collect();
    let facts = derive_copyright_facts(&copyrights);
    let (copyright_year, copyright_name) = match facts.holder {
        Some(holder) => (Some(holder.year), Some(holder.name)),
        None => (None, None),
    };

    MetadataRecord {
        name: sidecar.name,
        font_count: sidecar.fonts.len(),
        designer: sidecar.designer,
        date_added: sidecar.date_added,
        copyrights,
        emails: facts.emails,
        urls: facts.urls,
        copyright_name,
        copyright_year,
        copyright_email: facts.email,
        reserved_font_name: facts.reserved_font_name,
        description,
    }
}

/// Extract the metadata of one family.
///
/// A missing sidecar is reported as [`Metadata::Unavailable`], not as an
/// error; a sidecar that fails to parse is [`Error::MetadataCorrupt`].
pub fn extract_metadata(
    config: &AuditConfig,
    sources_dir: &Path,
    family: &FamilyDirectory,
) -> Result<Metadata> {
    let family_dir = family.path_in(sources_dir);
    let sidecar_path = family_dir.join(&config.metadata_file);

    let Some(sidecar) = read_sidecar(&sidecar_path)? else {
        return Ok(Metadata::Unavailable { path: sidecar_path });
    };
    debug!("Read {} font entries from {}", sidecar.fonts.len(), sidecar_path.display());

    let description = read_description(&family_dir.join(&config.description_file));
    Ok(Metadata::Available(record_from_sidecar(sidecar, description)))
}

/// Turn a metadata lookup into the record to report and its status.
///
/// Anything short of a clean load is logged and yields a blank record.
pub fn resolve_metadata(
    family: &FamilyDirectory,
    outcome: Result<Metadata>,
) -> (MetadataRecord, MetadataStatus) {
    match outcome {
        Ok(Metadata::Available(record)) => (record, MetadataStatus::Loaded),
        Ok(Metadata::Unavailable { path }) => {
            warn!("No metadata for {}: {} is missing", family, path.display());
            (MetadataRecord::default(), MetadataStatus::Missing)
        }
        Err(e @ Error::MetadataCorrupt { .. }) => {
            error!("Metadata for {} is corrupt: {}", family, e);
            (MetadataRecord::default(), MetadataStatus::Corrupt(e.to_string()))
        }
        Err(e) => {
            error!("Metadata for {} is unreadable: {}", family, e);
            (MetadataRecord::default(), MetadataStatus::Unreadable(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn family_with(files: &[(&str, &str)]) -> (TempDir, FamilyDirectory) {
        let tmp = TempDir::new().unwrap();
        let family = FamilyDirectory::new("ofl", "examplefont");
        let dir = family.path_in(tmp.path());
        fs::create_dir_all(&dir).unwrap();
        for (name, content) in files {
            fs::write(dir.join(name), content).unwrap();
        }
        (tmp, family)
    }

    #[test]
    fn extracts_record_from_sidecar() {
        let (tmp, family) = family_with(&[
            (
                "METADATA.json",
                r#"{
                    "name": "Example Font",
                    "designer": "Jane Doe",
                    "dateAdded": "2014-05-01",
                    "fonts": [
                        {"copyright": "Copyright (c) 2014, Jane Doe (jane@example.com), with Reserved Font Name ExampleFont."},
                        {"copyright": "Copyright (c) 2014, Jane Doe (jane@example.com), with Reserved Font Name ExampleFont."}
                    ]
                }"#,
            ),
            ("DESCRIPTION.en_us.html", "<p>An example.</p>"),
        ]);

        let record = extract_metadata(&AuditConfig::default(), tmp.path(), &family)
            .unwrap()
            .into_record();
        assert_eq!(record.name.as_deref(), Some("Example Font"));
        assert_eq!(record.designer.as_deref(), Some("Jane Doe"));
        assert_eq!(record.date_added.as_deref(), Some("2014-05-01"));
        assert_eq!(record.font_count, 2);
        assert_eq!(record.copyrights.len(), 1);
        assert_eq!(record.copyright_year.as_deref(), Some("2014"));
        assert_eq!(record.copyright_name.as_deref(), Some("Jane Doe"));
        assert_eq!(record.copyright_email, "jane@example.com");
        assert_eq!(
            record.reserved_font_name.as_deref(),
            Some(", with Reserved Font Name ExampleFont")
        );
        assert_eq!(record.description.as_deref(), Some("<p>An example.</p>"));
    }

    #[test]
    fn missing_sidecar_is_unavailable_not_an_error() {
        let (tmp, family) = family_with(&[]);
        let metadata = extract_metadata(&AuditConfig::default(), tmp.path(), &family).unwrap();
        match &metadata {
            Metadata::Unavailable { path } => assert!(path.ends_with("METADATA.json")),
            other => panic!("expected unavailable, got {:?}", other),
        }
        assert_eq!(metadata.into_record(), MetadataRecord::default());
    }

    #[test]
    fn corrupt_sidecar_is_surfaced() {
        let (tmp, family) = family_with(&[("METADATA.json", "{\"name\": ")]);
        let result = extract_metadata(&AuditConfig::default(), tmp.path(), &family);
        assert!(matches!(result, Err(Error::MetadataCorrupt { .. })));
    }

    #[test]
    fn description_is_optional() {
        let (tmp, family) = family_with(&[("METADATA.json", r#"{"name": "X"}"#)]);
        let record = extract_metadata(&AuditConfig::default(), tmp.path(), &family)
            .unwrap()
            .into_record();
        assert_eq!(record.description, None);
        assert_eq!(record.font_count, 0);
        assert!(record.copyrights.is_empty());
        assert_eq!(record.copyright_email, "");
    }

    #[test]
    fn non_utf8_description_keeps_the_record() {
        let (tmp, family) = family_with(&[(
            "METADATA.json",
            r#"{"name": "Abel", "designer": "MADType",
                "fonts": [{"copyright": "Copyright (c) 2011, Matthew Desmond (matt@madtype.com)"}]}"#,
        )]);
        fs::write(
            family.path_in(tmp.path()).join("DESCRIPTION.en_us.html"),
            b"<p>Caf\xe9</p>",
        )
        .unwrap();

        let outcome = extract_metadata(&AuditConfig::default(), tmp.path(), &family);
        let (record, status) = resolve_metadata(&family, outcome);
        assert_eq!(status, MetadataStatus::Loaded);
        assert_eq!(record.name.as_deref(), Some("Abel"));
        assert_eq!(record.font_count, 1);
        assert_eq!(record.copyright_email, "matt@madtype.com");
        assert_eq!(record.description.as_deref(), Some("<p>Caf\u{fffd}</p>"));
    }

    #[test]
    fn unreadable_description_is_absent() {
        let tmp = TempDir::new().unwrap();
        // a directory can't be read as a file
        fs::create_dir(tmp.path().join("DESCRIPTION.en_us.html")).unwrap();
        assert_eq!(read_description(&tmp.path().join("DESCRIPTION.en_us.html")), None);
        assert_eq!(read_description(&tmp.path().join("missing.html")), None);
    }

    #[test]
    fn unreadable_sidecar_is_not_reported_as_corrupt() {
        let (tmp, family) = family_with(&[]);
        fs::create_dir(family.path_in(tmp.path()).join("METADATA.json")).unwrap();

        let outcome = extract_metadata(&AuditConfig::default(), tmp.path(), &family);
        assert!(matches!(outcome, Err(Error::Read { .. })));
        let (record, status) = resolve_metadata(&family, outcome);
        assert!(matches!(status, MetadataStatus::Unreadable(_)));
        assert_eq!(record, MetadataRecord::default());
    }

    #[test]
    fn resolve_maps_each_outcome_to_a_status() {
        let family = FamilyDirectory::new("ofl", "x");
        let (_, status) = resolve_metadata(
            &family,
            Ok(Metadata::Unavailable {
                path: "ofl/x/METADATA.json".into(),
            }),
        );
        assert_eq!(status, MetadataStatus::Missing);

        let corrupt = serde_json::from_str::<FamilySidecar>("{").unwrap_err();
        let (_, status) = resolve_metadata(
            &family,
            Err(Error::MetadataCorrupt {
                path: "ofl/x/METADATA.json".into(),
                source: corrupt,
            }),
        );
        assert!(matches!(status, MetadataStatus::Corrupt(_)));
    }

    #[test]
    fn font_without_copyright_contributes_empty_string() {
        let sidecar: FamilySidecar = serde_json::from_str(
            r#"{"fonts": [{}, {"copyright": "Copyright 2012, Ana Paula (ana@x.com)"}]}"#,
        )
        .unwrap();
        let record = record_from_sidecar(sidecar, None);
        assert!(record.copyrights.contains(""));
        assert_eq!(record.copyrights.len(), 2);
        assert_eq!(record.copyright_name.as_deref(), Some("Ana Paula"));
        assert_eq!(record.copyright_email, "ana@x.com");
    }

    #[test]
    fn contact_follows_the_representative_notice() {
        let sidecar: FamilySidecar = serde_json::from_str(
            r#"{"fonts": [
                {"copyright": "Copyright 2013, Zed Zulu (zed@z.org) and Amy Alpha (amy@a.org)"},
                {"copyright": "Copyright 2012, Amy Alpha (amy@a.org) and Zed Zulu (zed@z.org)"}
            ]}"#,
        )
        .unwrap();
        let record = record_from_sidecar(sidecar, None);
        assert_eq!(record.emails.len(), 2);
        assert_eq!(record.copyright_year.as_deref(), Some("2012"));
        assert_eq!(record.copyright_email, "amy@a.org");
    }
}
