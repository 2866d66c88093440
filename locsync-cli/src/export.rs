use std::fs;
use std::path::{Path, PathBuf};

use locsync::formats::{AuthoringRecord, PlatformRecord};
use locsync::{Catalog, MergeReport, Parser, merge_into};
use serde_json::json;

use crate::walk::collect_csv_files;

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub original: PathBuf,
    pub weblate: PathBuf,
    pub dry_run: bool,
    pub report_json: Option<PathBuf>,
}

enum FileOutcome {
    /// No platform table existed at the destination; a fresh export.
    Fresh { entries: usize },
    /// Merged into an existing platform table.
    Merged(MergeReport),
    /// No valid entries to write; no file created.
    SkippedEmpty,
}

/// Run the export command: convert every authoring table under the
/// original root into the platform schema, merging non-destructively into
/// any table already present at the destination.
pub fn run_export_command(opts: ExportOptions) -> Result<(), String> {
    let files = collect_csv_files(&opts.original)?;
    if files.is_empty() {
        println!("No CSV files found in {}", opts.original.display());
        return Ok(());
    }
    println!("Found {} CSV files to process", files.len());

    let mut file_reports = Vec::new();
    let mut written = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for rel in &files {
        let input = opts.original.join(rel);
        let output = opts.weblate.join(rel);
        println!("Processing {} -> {}", input.display(), output.display());

        match export_file(&input, &output, opts.dry_run) {
            Ok(FileOutcome::Fresh { entries }) => {
                written += 1;
                println!("  Exported {} entries", entries);
                file_reports.push(json!({
                    "path": rel,
                    "status": "exported",
                    "entries": entries,
                }));
            }
            Ok(FileOutcome::Merged(report)) => {
                written += 1;
                println!(
                    "  Merged: {} new, {} filled, {} unchanged, {} retained",
                    report.inserted, report.updated, report.unchanged, report.retained
                );
                file_reports.push(json!({
                    "path": rel,
                    "status": "merged",
                    "summary": report,
                }));
            }
            Ok(FileOutcome::SkippedEmpty) => {
                skipped += 1;
                println!("  No valid entries, skipping");
                file_reports.push(json!({
                    "path": rel,
                    "status": "skipped_empty",
                }));
            }
            Err(e) => {
                failed += 1;
                eprintln!("Error processing {}: {}", input.display(), e);
                file_reports.push(json!({
                    "path": rel,
                    "status": "failed",
                    "error": e.to_string(),
                }));
            }
        }
    }

    if let Some(report_path) = &opts.report_json {
        write_report(report_path, &opts, written, skipped, failed, file_reports)?;
        println!("Report JSON written: {}", report_path.display());
    }

    if opts.dry_run {
        println!("Dry-run mode: no files were written");
    }
    println!(
        "Export complete: {} written, {} skipped, {} failed",
        written, skipped, failed
    );
    Ok(())
}

fn export_file(
    input: &Path,
    output: &Path,
    dry_run: bool,
) -> Result<FileOutcome, locsync::Error> {
    let incoming = Catalog::from(Vec::<AuthoringRecord>::read_from(input)?);

    if output.exists() {
        // An unreadable existing table fails this file instead of being
        // treated as empty: a fresh export over it could clobber
        // translations.
        let mut merged = Catalog::from(Vec::<PlatformRecord>::read_from(output)?);
        let report = merge_into(&mut merged, incoming);
        if merged.is_empty() {
            return Ok(FileOutcome::SkippedEmpty);
        }
        if !dry_run {
            write_platform(&merged, output)?;
        }
        Ok(FileOutcome::Merged(report))
    } else {
        if incoming.is_empty() {
            return Ok(FileOutcome::SkippedEmpty);
        }
        if !dry_run {
            write_platform(&incoming, output)?;
        }
        Ok(FileOutcome::Fresh {
            entries: incoming.len(),
        })
    }
}

fn write_platform(catalog: &Catalog, output: &Path) -> Result<(), locsync::Error> {
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    Vec::<PlatformRecord>::from(catalog).write_to(output)
}

fn write_report(
    path: &Path,
    opts: &ExportOptions,
    written: usize,
    skipped: usize,
    failed: usize,
    files: Vec<serde_json::Value>,
) -> Result<(), String> {
    let payload = json!({
        "original": opts.original,
        "weblate": opts.weblate,
        "dry_run": opts.dry_run,
        "summary": {
            "written": written,
            "skipped": skipped,
            "failed": failed,
        },
        "files": files,
    });

    let text = serde_json::to_string_pretty(&payload)
        .map_err(|e| format!("Failed to serialize report JSON: {}", e))?;
    fs::write(path, text)
        .map_err(|e| format!("Failed to write report JSON '{}': {}", path.display(), e))
}
