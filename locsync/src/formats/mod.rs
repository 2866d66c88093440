//! The two CSV row schemas handled by locsync.
//!
//! This module re-exports the record types for each schema and the exact
//! header sequences they serialize to, plus [`raw::RawTable`] for the
//! positional header relabel path.

pub mod authoring;
pub mod platform;
pub mod raw;

pub use authoring::AuthoringRecord;
pub use platform::PlatformRecord;
pub use raw::{HeaderStatus, RawTable};

/// Header of the authoring schema used by the string-table pipeline.
pub const AUTHORING_HEADER: [&str; 3] = ["Key", "SourceString", "Comment"];

/// Header of the schema consumed by the translation platform.
pub const PLATFORM_HEADER: [&str; 3] = ["source", "target", "developer_comments"];
