use std::path::Path;

use crate::models::{ExtensionTag, SourceKind};

/// The extension of a base name, from its last `.` to the end
pub fn extension_of(name: &str) -> Option<&str> {
    let base = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(name);
    base.rfind('.').map(|idx| &base[idx..])
}

/// Classify a directory entry as a font source.
///
/// Directories are only matched against the package formats (`.ufo`,
/// `.sfdir`) and regular files only against single-file formats (`.vfb`,
/// `.sfd`, `.glyphs`). Matching is case-sensitive.
pub fn classify(name: &str, kind: SourceKind) -> Option<ExtensionTag> {
    let extension = extension_of(name)?;
    let candidates: &[ExtensionTag] = match kind {
        SourceKind::Directory => &ExtensionTag::DIRECTORY_KINDS,
        SourceKind::File => &ExtensionTag::FILE_KINDS,
    };
    candidates
        .iter()
        .copied()
        .find(|tag| tag.as_str() == extension)
}
