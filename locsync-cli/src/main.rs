mod export;
mod import;
mod relabel;
mod walk;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::export::{ExportOptions, run_export_command};
use crate::import::{ImportOptions, run_import_command};
use crate::relabel::{RelabelOptions, run_relabel_command};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Export authoring tables to the platform schema, merging into any
    /// existing platform table without overwriting translations.
    Export {
        /// Root directory of the authoring-schema tables
        #[arg(long, default_value = "original", value_name = "DIR")]
        original: PathBuf,

        /// Root directory of the platform-schema tables
        #[arg(long, default_value = "weblate", value_name = "DIR")]
        weblate: PathBuf,

        /// Run the full transform without writing any files
        #[arg(long)]
        dry_run: bool,

        /// Write a JSON report of per-file outcomes to this path
        #[arg(long, value_name = "FILE")]
        report_json: Option<PathBuf>,
    },

    /// Apply platform-schema translations back onto the authoring tables.
    Import {
        /// Root directory of the authoring-schema tables
        #[arg(long, default_value = "original", value_name = "DIR")]
        original: PathBuf,

        /// Root directory of the platform-schema tables
        #[arg(long, default_value = "weblate", value_name = "DIR")]
        weblate: PathBuf,

        /// Root directory for the translated authoring-schema output
        #[arg(long, default_value = "target", value_name = "DIR")]
        target: PathBuf,

        /// Run the full transform without writing any files
        #[arg(long)]
        dry_run: bool,

        /// Write a JSON report of per-file outcomes to this path
        #[arg(long, value_name = "FILE")]
        report_json: Option<PathBuf>,
    },

    /// Rewrite authoring-schema headers to the platform schema without
    /// merging (legacy positional conversion).
    Relabel {
        /// Root directory of the authoring-schema tables
        #[arg(long, default_value = "original", value_name = "DIR")]
        original: PathBuf,

        /// Root directory for the relabeled output
        #[arg(long, default_value = "weblate", value_name = "DIR")]
        weblate: PathBuf,
    },
}

fn main() {
    let args = Args::parse();

    let result = match args.commands {
        Commands::Export {
            original,
            weblate,
            dry_run,
            report_json,
        } => run_export_command(ExportOptions {
            original,
            weblate,
            dry_run,
            report_json,
        }),
        Commands::Import {
            original,
            weblate,
            target,
            dry_run,
            report_json,
        } => run_import_command(ImportOptions {
            original,
            weblate,
            target,
            dry_run,
            report_json,
        }),
        Commands::Relabel { original, weblate } => {
            run_relabel_command(RelabelOptions { original, weblate })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
