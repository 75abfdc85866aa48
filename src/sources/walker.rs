use std::collections::VecDeque;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{FamilyDirectory, SourceArtifact, SourceKind};
use super::classify::classify;

/// Depth-first walk over one family, yielding its source artifacts.
///
/// Directory packages (`.ufo`, `.sfdir`) are reported and never entered,
/// so nothing inside a package is ever yielded. Other directories are
/// entered in name order. The first filesystem error ends the walk.
pub struct SourceWalker {
    sources_dir: PathBuf,
    /// Directories still to visit, relative to `sources_dir`; top is next
    stack: Vec<PathBuf>,
    ready: VecDeque<SourceArtifact>,
    failed: bool,
}

/// Walk the family tree rooted at `sources_dir/family`
pub fn walk_family(sources_dir: &Path, family: &FamilyDirectory) -> SourceWalker {
    SourceWalker {
        sources_dir: sources_dir.to_path_buf(),
        stack: vec![family.relative_path()],
        ready: VecDeque::new(),
        failed: false,
    }
}

/// Directory entries of one level, split by kind
struct Listing {
    /// (name, may descend); symlinked directories are classified but not entered
    dirs: Vec<(OsString, bool)>,
    files: Vec<OsString>,
}

fn list_dir(dir: &Path) -> io::Result<Listing> {
    let mut listing = Listing {
        dirs: Vec::new(),
        files: Vec::new(),
    };
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            listing.dirs.push((entry.file_name(), true));
        } else if file_type.is_file() {
            listing.files.push(entry.file_name());
        } else if file_type.is_symlink() {
            match fs::metadata(entry.path()) {
                Ok(target) if target.is_dir() => listing.dirs.push((entry.file_name(), false)),
                Ok(target) if target.is_file() => listing.files.push(entry.file_name()),
                Ok(_) => {}
                Err(e) => debug!("Ignoring dangling link {}: {}", entry.path().display(), e),
            }
        }
    }
    listing.dirs.sort();
    listing.files.sort();
    Ok(listing)
}

impl SourceWalker {
    /// Read one directory, queue its artifacts and schedule its subdirectories
    fn visit(&mut self, relative_dir: PathBuf) -> Result<()> {
        let absolute = self.sources_dir.join(&relative_dir);
        let listing = list_dir(&absolute).map_err(|source| Error::Traversal {
            path: absolute.clone(),
            source,
        })?;

        let mut descend = Vec::new();
        for (name, may_descend) in listing.dirs {
            let relative_path = relative_dir.join(&name);
            match classify(&name.to_string_lossy(), SourceKind::Directory) {
                Some(extension) => {
                    debug!("Source directory {} (not descending)", relative_path.display());
                    self.ready.push_back(SourceArtifact {
                        relative_path,
                        containing_dir: relative_dir.clone(),
                        extension,
                    });
                }
                None if may_descend => descend.push(relative_path),
                None => debug!("Not following linked directory {}", relative_path.display()),
            }
        }

        for name in listing.files {
            if let Some(extension) = classify(&name.to_string_lossy(), SourceKind::File) {
                let relative_path = relative_dir.join(&name);
                debug!("Source file {}", relative_path.display());
                self.ready.push_back(SourceArtifact {
                    relative_path,
                    containing_dir: relative_dir.clone(),
                    extension,
                });
            }
        }

        // reversed so the smallest name is popped first
        self.stack.extend(descend.into_iter().rev());
        Ok(())
    }
}

impl Iterator for SourceWalker {
    type Item = Result<SourceArtifact>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(artifact) = self.ready.pop_front() {
                return Some(Ok(artifact));
            }
            if self.failed {
                return None;
            }
            let dir = self.stack.pop()?;
            if let Err(e) = self.visit(dir) {
                self.failed = true;
                self.stack.clear();
                return Some(Err(e));
            }
        }
    }
}
