//! Report assembly and the multi-family run loop

pub mod row;
pub mod writer;

pub use row::{assemble_row, build_row, LABELS};
pub use writer::{format_cell, format_line, ReportWriter};

use rayon::prelude::*;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{AuditConfig, FamilyDirectory, MetadataStatus, ReportRow};
use crate::sources::enumerate_families;

/// Families handed to the worker pool at once when running in parallel
const CHUNK_SIZE: usize = 64;

/// Counters collected over one report run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub families: usize,
    pub missing_metadata: usize,
    pub corrupt_metadata: usize,
    pub unreadable_metadata: usize,
    pub traversal_errors: usize,
    /// Families whose sources live in more than one directory
    pub ambiguous: usize,
    /// Families without any source artifact
    pub without_sources: usize,
}

impl RunSummary {
    fn record(&mut self, row: &ReportRow) {
        self.families += 1;
        match row.metadata_status {
            MetadataStatus::Loaded => {}
            MetadataStatus::Missing => self.missing_metadata += 1,
            MetadataStatus::Corrupt(_) => self.corrupt_metadata += 1,
            MetadataStatus::Unreadable(_) => self.unreadable_metadata += 1,
        }
        if row.traversal_error.is_some() {
            self.traversal_errors += 1;
        }
        if row.is_ambiguous() {
            self.ambiguous += 1;
        }
        if row.source_count == 0 {
            self.without_sources += 1;
        }
    }
}

/// Produce the full report for `sources_dir`, writing each row as soon as it is ready.
///
/// With `config.jobs > 1` families are processed in chunks on a rayon pool;
/// rows are still written in enumeration order.
pub fn run_report<W: Write>(
    config: &AuditConfig,
    sources_dir: &Path,
    writer: &mut ReportWriter<W>,
) -> Result<RunSummary> {
    config.validate()?;
    let mut families = enumerate_families(sources_dir, &config.license_dirs)?;
    let mut summary = RunSummary::default();
    writer.write_header()?;

    let pool = if config.jobs > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.jobs)
            .build()
            .map_err(|e| Error::Config(format!("could not start worker pool: {}", e)))?;
        Some(pool)
    } else {
        None
    };

    loop {
        let chunk_size = if pool.is_some() { CHUNK_SIZE } else { 1 };
        let chunk: Vec<FamilyDirectory> = families
            .by_ref()
            .take(chunk_size)
            .collect::<Result<Vec<_>>>()?;
        if chunk.is_empty() {
            break;
        }

        let rows: Vec<ReportRow> = match &pool {
            Some(pool) => pool.install(|| {
                chunk
                    .par_iter()
                    .map(|family| build_row(config, sources_dir, family))
                    .collect()
            }),
            None => chunk
                .iter()
                .map(|family| build_row(config, sources_dir, family))
                .collect(),
        };

        for row in &rows {
            debug!("{}: {} sources in {} dirs", row.family, row.source_count, row.source_dir_count);
            writer.write_row(row)?;
            summary.record(row);
        }
    }

    info!(
        "Audited {} families: {} without metadata, {} with corrupt metadata, {} with unreadable metadata, {} walk errors, {} ambiguous, {} without sources",
        summary.families,
        summary.missing_metadata,
        summary.corrupt_metadata,
        summary.unreadable_metadata,
        summary.traversal_errors,
        summary.ambiguous,
        summary.without_sources
    );
    Ok(summary)
}
