use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Recognized font source extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ExtensionTag {
    /// Unified Font Object package
    #[serde(rename = ".ufo")]
    Ufo,
    /// FontForge directory format
    #[serde(rename = ".sfdir")]
    Sfdir,
    /// FontLab binary source
    #[serde(rename = ".vfb")]
    Vfb,
    /// FontForge single-file format
    #[serde(rename = ".sfd")]
    Sfd,
    /// Glyphs app source
    #[serde(rename = ".glyphs")]
    Glyphs,
}

/// Whether a source format is a directory package or a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Directory,
    File,
}

impl ExtensionTag {
    pub const DIRECTORY_KINDS: [ExtensionTag; 2] = [ExtensionTag::Ufo, ExtensionTag::Sfdir];
    pub const FILE_KINDS: [ExtensionTag; 3] =
        [ExtensionTag::Vfb, ExtensionTag::Sfd, ExtensionTag::Glyphs];

    /// The extension including its leading dot, as seen on disk
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtensionTag::Ufo => ".ufo",
            ExtensionTag::Sfdir => ".sfdir",
            ExtensionTag::Vfb => ".vfb",
            ExtensionTag::Sfd => ".sfd",
            ExtensionTag::Glyphs => ".glyphs",
        }
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            ExtensionTag::Ufo | ExtensionTag::Sfdir => SourceKind::Directory,
            ExtensionTag::Vfb | ExtensionTag::Sfd | ExtensionTag::Glyphs => SourceKind::File,
        }
    }
}

impl fmt::Display for ExtensionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One family directory, relative to the sources root (e.g. `ofl/examplefont`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FamilyDirectory {
    /// License root the family was found under
    pub license: String,
    /// Directory name of the family inside the license root
    pub name: String,
}

impl FamilyDirectory {
    pub fn new(license: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            license: license.into(),
            name: name.into(),
        }
    }

    /// Path relative to the sources root
    pub fn relative_path(&self) -> PathBuf {
        Path::new(&self.license).join(&self.name)
    }

    /// Absolute (or caller-rooted) path of the family
    pub fn path_in(&self, sources_dir: &Path) -> PathBuf {
        sources_dir.join(self.relative_path())
    }

    /// Parse a `license/name` argument as typed on the command line
    pub fn parse(relative: &str) -> Option<Self> {
        let trimmed = relative.trim_matches('/');
        let (license, name) = trimmed.split_once('/')?;
        if license.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }
        Some(Self::new(license, name))
    }
}

impl fmt::Display for FamilyDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.license, self.name)
    }
}

/// A recognized source directory or source file inside a family
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceArtifact {
    /// Path relative to the sources root
    pub relative_path: PathBuf,
    /// Directory holding the artifact, relative to the sources root
    pub containing_dir: PathBuf,
    pub extension: ExtensionTag,
}

impl SourceArtifact {
    pub fn kind(&self) -> SourceKind {
        self.extension.kind()
    }
}
