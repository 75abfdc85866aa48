//! Discovery of families and their font source artifacts

pub mod classify;
pub mod families;
pub mod walker;

pub use classify::{classify, extension_of};
pub use families::{enumerate_families, FamilyEnumerator};
pub use walker::{walk_family, SourceWalker};
