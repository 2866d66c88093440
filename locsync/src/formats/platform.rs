//! Support for the translation-platform CSV schema
//! (`source,target,developer_comments`).
//!
//! This is the schema Weblate serves and returns. Columns are matched by
//! header name; missing columns read as empty strings. A platform file
//! collected into a [`Catalog`] acts as the translation map: keys are
//! unique, the last occurrence of a duplicate key wins.

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    traits::Parser,
    types::{Catalog, Entry},
};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PlatformRecord {
    #[serde(default)]
    pub source: String,

    #[serde(default)]
    pub target: String,

    #[serde(default)]
    pub developer_comments: String,
}

impl Parser for Vec<PlatformRecord> {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);
        let mut records = Vec::new();
        for result in rdr.deserialize() {
            records.push(result?);
        }
        Ok(records)
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: std::io::Write>(&self, writer: W) -> Result<(), Error> {
        let mut wtr = csv::WriterBuilder::new().from_writer(writer);
        for record in self {
            wtr.serialize(record)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl From<PlatformRecord> for Entry {
    fn from(record: PlatformRecord) -> Self {
        Entry {
            key: record.source,
            value: record.target,
            comment: record.developer_comments,
        }
    }
}

impl From<Entry> for PlatformRecord {
    fn from(entry: Entry) -> Self {
        PlatformRecord {
            source: entry.key,
            target: entry.value,
            developer_comments: entry.comment,
        }
    }
}

impl From<Vec<PlatformRecord>> for Catalog {
    fn from(records: Vec<PlatformRecord>) -> Self {
        records.into_iter().map(Entry::from).collect()
    }
}

impl From<&Catalog> for Vec<PlatformRecord> {
    fn from(catalog: &Catalog) -> Self {
        catalog.iter().cloned().map(PlatformRecord::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_parse_platform_schema() {
        let csv_content = indoc! {"
            source,target,developer_comments
            greet,Bonjour,greeting
            bye,,
        "};
        let records = Vec::<PlatformRecord>::from_str(csv_content).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].source, "greet");
        assert_eq!(records[0].target, "Bonjour");
        assert_eq!(records[1].target, "");
    }

    #[test]
    fn test_write_emits_platform_header() {
        let records = vec![PlatformRecord {
            source: "greet".to_string(),
            target: "Hello".to_string(),
            developer_comments: "".to_string(),
        }];

        let mut output = Vec::new();
        records.to_writer(&mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output, "source,target,developer_comments\ngreet,Hello,\n");
    }

    #[test]
    fn test_translation_map_last_occurrence_wins() {
        let csv_content = indoc! {"
            source,target,developer_comments
            greet,Bonjour,
            greet,Salut,updated
        "};
        let records = Vec::<PlatformRecord>::from_str(csv_content).unwrap();
        let map = Catalog::from(records);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("greet").unwrap().value, "Salut");
        assert_eq!(map.get("greet").unwrap().comment, "updated");
    }

    #[test]
    fn test_translation_map_skips_rows_without_source() {
        let csv_content = indoc! {"
            source,target,developer_comments
            ,Bonjour,
            greet,Salut,
        "};
        let records = Vec::<PlatformRecord>::from_str(csv_content).unwrap();
        let map = Catalog::from(records);
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("greet"));
    }
}
