use anyhow::{bail, Context};
use clap::Parser;
use std::io::{self, Write};
use tracing::{debug, warn};

use fontsrc_audit::cli::{CliArgs, Command, FamilyArgs};
use fontsrc_audit::metadata::{resolve_metadata, template_fields};
use fontsrc_audit::models::{AuditConfig, FamilyDirectory};
use fontsrc_audit::utils::{display_relative, init_logging};
use fontsrc_audit::{extract_metadata, run_report, walk_family, ReportWriter};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let config = args.to_config();
    init_logging(&config);
    debug!("Debug mode enabled");

    match &args.command {
        Command::Report(report) => {
            let stdout = io::stdout();
            let mut writer = ReportWriter::new(stdout.lock(), config.format);
            let summary = run_report(&config, &report.sources_dir, &mut writer)
                .with_context(|| format!("report over {} failed", report.sources_dir.display()))?;
            let unusable = summary.corrupt_metadata + summary.unreadable_metadata;
            if report.strict && unusable > 0 {
                bail!("{} families have corrupt or unreadable metadata", unusable);
            }
        }
        Command::Sources(family_args) => list_sources(&config, family_args)?,
        Command::Metadata(family_args) => show_metadata(&config, family_args)?,
    }
    Ok(())
}

fn parse_family(family_args: &FamilyArgs) -> anyhow::Result<FamilyDirectory> {
    let family = FamilyDirectory::parse(&family_args.family)
        .with_context(|| format!("'{}' is not of the form <license>/<family>", family_args.family))?;
    let path = family.path_in(&family_args.sources_dir);
    if !path.is_dir() {
        bail!("family directory {} does not exist", path.display());
    }
    Ok(family)
}

fn list_sources(config: &AuditConfig, family_args: &FamilyArgs) -> anyhow::Result<()> {
    config.validate()?;
    let family = parse_family(family_args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for artifact in walk_family(&family_args.sources_dir, &family) {
        let artifact = artifact?;
        writeln!(out, "{}\t{}", artifact.extension, display_relative(&artifact.relative_path))?;
    }
    Ok(())
}

fn show_metadata(config: &AuditConfig, family_args: &FamilyArgs) -> anyhow::Result<()> {
    config.validate()?;
    let family = parse_family(family_args)?;

    // a broken sidecar fails this command outright
    let metadata = extract_metadata(config, &family_args.sources_dir, &family)?;
    let (record, status) = resolve_metadata(&family, Ok(metadata));
    let fields = template_fields(&record);
    if !fields.is_valid() {
        warn!("Missing data: {}", fields.missing.join(", "));
    }

    let output = serde_json::json!({
        "family": family.to_string(),
        "metadataStatus": status,
        "metadata": record,
        "template": fields,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
