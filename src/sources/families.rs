use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::FamilyDirectory;

/// Lazily yields the family directories below each license root.
///
/// License roots are visited in the given order; families inside a root
/// come out sorted by name. Each call to [`enumerate_families`] starts a
/// fresh pass, so two passes over an unchanged tree are identical.
pub struct FamilyEnumerator {
    sources_dir: PathBuf,
    licenses: VecDeque<String>,
    pending: VecDeque<FamilyDirectory>,
}

/// Start enumerating families of `sources_dir`.
///
/// Fails only when the sources root itself is missing or not a directory.
pub fn enumerate_families(sources_dir: &Path, license_dirs: &[String]) -> Result<FamilyEnumerator> {
    if !sources_dir.is_dir() {
        return Err(Error::InvalidPath(sources_dir.to_path_buf()));
    }
    Ok(FamilyEnumerator {
        sources_dir: sources_dir.to_path_buf(),
        licenses: license_dirs.iter().cloned().collect(),
        pending: VecDeque::new(),
    })
}

/// Sorted names of the immediate child directories of `license_root`
fn family_names(license_root: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(license_root)? {
        let entry = entry?;
        // follows symlinks so a linked family still counts as a directory
        if !entry.path().is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => warn!("Skipping family with non UTF-8 name: {:?}", raw),
        }
    }
    names.sort();
    Ok(names)
}

impl Iterator for FamilyEnumerator {
    type Item = Result<FamilyDirectory>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(family) = self.pending.pop_front() {
                return Some(Ok(family));
            }

            let license = self.licenses.pop_front()?;
            let license_root = self.sources_dir.join(&license);
            if !license_root.exists() {
                warn!("License directory {} does not exist, skipping", license_root.display());
                continue;
            }

            match family_names(&license_root) {
                Ok(names) => {
                    debug!("Found {} families under {}", names.len(), license);
                    self.pending = names
                        .into_iter()
                        .map(|name| FamilyDirectory::new(license.clone(), name))
                        .collect();
                }
                Err(source) => {
                    // the remaining roots are dropped, an unreadable root ends the run
                    self.licenses.clear();
                    return Some(Err(Error::Traversal {
                        path: license_root,
                        source,
                    }));
                }
            }
        }
    }
}
