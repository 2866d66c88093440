use std::fs;
use std::path::{Path, PathBuf};

use locsync::Parser;
use locsync::formats::{HeaderStatus, RawTable};

use crate::walk::collect_csv_files;

#[derive(Debug, Clone)]
pub struct RelabelOptions {
    pub original: PathBuf,
    pub weblate: PathBuf,
}

/// Run the relabel command: the legacy header-only conversion. Rows are
/// copied positionally; only a row 0 that exactly matches the authoring
/// header is rewritten, anything else is copied verbatim under a warning.
pub fn run_relabel_command(opts: RelabelOptions) -> Result<(), String> {
    let files = collect_csv_files(&opts.original)?;
    if files.is_empty() {
        println!("No CSV files found in {}", opts.original.display());
        return Ok(());
    }
    println!("Found {} CSV files to process", files.len());

    let mut written = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for rel in &files {
        let input = opts.original.join(rel);
        let output = opts.weblate.join(rel);
        println!("Processing {} -> {}", input.display(), output.display());

        match relabel_file(&input, &output) {
            Ok(Some(status)) => {
                written += 1;
                if let HeaderStatus::Mismatched(header) = &status {
                    println!(
                        "Warning: header doesn't match expected format in {}",
                        input.display()
                    );
                    println!("Header found: {:?}", header);
                }
                println!("Successfully processed: {}", output.display());
            }
            Ok(None) => {
                skipped += 1;
                println!("  Empty file, skipping");
            }
            Err(e) => {
                failed += 1;
                eprintln!("Error processing {}: {}", input.display(), e);
            }
        }
    }

    println!(
        "Relabel complete: {} written, {} skipped, {} failed",
        written, skipped, failed
    );
    Ok(())
}

fn relabel_file(input: &Path, output: &Path) -> Result<Option<HeaderStatus>, locsync::Error> {
    let mut table = RawTable::read_from(input)?;
    let status = table.relabel();
    if status == HeaderStatus::Empty {
        return Ok(None);
    }

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    table.write_to(output)?;
    Ok(Some(status))
}
