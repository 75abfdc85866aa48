//! Metadata sidecar reading and free-text fact extraction

pub mod facts;
pub mod sidecar;
pub mod template;

pub use facts::{derive_copyright_facts, CopyrightFacts, CopyrightHolder};
pub use sidecar::{
    extract_metadata, read_description, read_sidecar, record_from_sidecar, resolve_metadata,
};
pub use template::{template_fields, TemplateFields};
