#![forbid(unsafe_code)]
//! Localization CSV table synchronization toolkit.
//!
//! Converts string tables between the authoring schema
//! (`Key,SourceString,Comment`) and the translation-platform schema
//! (`source,target,developer_comments`), and merges returned translations
//! back into the authoring schema. All conversion happens through the
//! schema-agnostic [`Entry`]/[`Catalog`] model.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use locsync::{Catalog, Parser, formats::{AuthoringRecord, PlatformRecord}, merge_into};
//!
//! // Merge a fresh source export into an already-translated platform table.
//! let incoming = Catalog::from(Vec::<AuthoringRecord>::read_from("original/ui.csv")?);
//! let mut existing = Catalog::from(Vec::<PlatformRecord>::read_from("weblate/ui.csv")?);
//! let report = merge_into(&mut existing, incoming);
//! println!("{} new keys", report.inserted);
//! Vec::<PlatformRecord>::from(&existing).write_to("weblate/ui.csv")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The merge is non-destructive: a non-empty `target` or
//! `developer_comments` in the existing table is never overwritten, and
//! keys that disappeared from the source are retained.

pub mod error;
pub mod formats;
pub mod operations;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    error::Error,
    operations::{ApplyReport, MergeReport, apply_translations, merge_into},
    traits::Parser,
    types::{Catalog, Entry},
};
