use std::fs;
use std::path::{Path, PathBuf};

use locsync::formats::{AuthoringRecord, PlatformRecord};
use locsync::{ApplyReport, Catalog, Entry, Parser, apply_translations};
use serde_json::json;

use crate::walk::collect_csv_files;

#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub original: PathBuf,
    pub weblate: PathBuf,
    pub target: PathBuf,
    pub dry_run: bool,
    pub report_json: Option<PathBuf>,
}

/// Run the import command: apply returned translations onto every
/// authoring table under the original root and write the result under the
/// target root.
pub fn run_import_command(opts: ImportOptions) -> Result<(), String> {
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
        let weblate_file = opts.weblate.join(rel);
        let output = opts.target.join(rel);
        println!("Processing {}", input.display());

        // Best-effort translation source: a missing or unreadable platform
        // table means "no translations yet", never a fatal error.
        let translations = if weblate_file.exists() {
            match Vec::<PlatformRecord>::read_from(&weblate_file) {
                Ok(records) => {
                    println!("  Loaded translation data from {}", weblate_file.display());
                    Catalog::from(records)
                }
                Err(e) => {
                    eprintln!(
                        "Error reading translation file {}: {}",
                        weblate_file.display(),
                        e
                    );
                    Catalog::new()
                }
            }
        } else {
            println!("  No translation file found at {}", weblate_file.display());
            Catalog::new()
        };

        match import_file(&input, &translations, &output, opts.dry_run) {
            Ok(Some(report)) => {
                written += 1;
                println!("Applied translation to file: {}", output.display());
                file_reports.push(json!({
                    "path": rel,
                    "status": "applied",
                    "summary": report,
                }));
            }
            Ok(None) => {
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
        "Import complete: {} written, {} skipped, {} failed",
        written, skipped, failed
    );
    Ok(())
}

fn import_file(
    input: &Path,
    translations: &Catalog,
    output: &Path,
    dry_run: bool,
) -> Result<Option<ApplyReport>, locsync::Error> {
    let records = Vec::<AuthoringRecord>::read_from(input)?;
    let mut entries: Vec<Entry> = records
        .into_iter()
        .map(Entry::from)
        .filter(Entry::is_valid)
        .collect();

    if entries.is_empty() {
        return Ok(None);
    }

    let report = apply_translations(&mut entries, translations);

    if !dry_run {
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)?;
        }
        let records: Vec<AuthoringRecord> =
            entries.into_iter().map(AuthoringRecord::from).collect();
        records.write_to(output)?;
    }

    Ok(Some(report))
}

fn write_report(
    path: &Path,
    opts: &ImportOptions,
    written: usize,
    skipped: usize,
    failed: usize,
    files: Vec<serde_json::Value>,
) -> Result<(), String> {
    let payload = json!({
        "original": opts.original,
        "weblate": opts.weblate,
        "target": opts.target,
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
