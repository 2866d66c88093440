//! Support for the authoring CSV schema (`Key,SourceString,Comment`).
//!
//! Columns are matched by header name, not position. Missing columns read
//! as empty strings so that partially-formed tables still contribute their
//! valid rows. Provides parsing, serialization, and conversion to/from the
//! schema-agnostic [`Entry`]/[`Catalog`] model.

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    traits::Parser,
    types::{Catalog, Entry},
};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AuthoringRecord {
    #[serde(rename = "Key", default)]
    pub key: String,

    #[serde(rename = "SourceString", default)]
    pub source_string: String,

    #[serde(rename = "Comment", default)]
    pub comment: String,
}

impl Parser for Vec<AuthoringRecord> {
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

impl From<AuthoringRecord> for Entry {
    fn from(record: AuthoringRecord) -> Self {
        Entry {
            key: record.key,
            value: record.source_string,
            comment: record.comment,
        }
    }
}

impl From<Entry> for AuthoringRecord {
    fn from(entry: Entry) -> Self {
        AuthoringRecord {
            key: entry.key,
            source_string: entry.value,
            comment: entry.comment,
        }
    }
}

impl From<Vec<AuthoringRecord>> for Catalog {
    fn from(records: Vec<AuthoringRecord>) -> Self {
        records.into_iter().map(Entry::from).collect()
    }
}

impl From<&Catalog> for Vec<AuthoringRecord> {
    fn from(catalog: &Catalog) -> Self {
        catalog
            .iter()
            .cloned()
            .map(AuthoringRecord::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_parse_by_header_name() {
        let csv_content = indoc! {"
            Key,SourceString,Comment
            greet,Hello,greeting shown on launch
            bye,Goodbye,
        "};
        let records = Vec::<AuthoringRecord>::from_str(csv_content).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].key, "greet");
        assert_eq!(records[0].source_string, "Hello");
        assert_eq!(records[0].comment, "greeting shown on launch");
        assert_eq!(records[1].comment, "");
    }

    #[test]
    fn test_parse_tolerates_missing_comment_column() {
        let csv_content = "Key,SourceString\ngreet,Hello\n";
        let records = Vec::<AuthoringRecord>::from_str(csv_content).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].key, "greet");
        assert_eq!(records[0].comment, "");
    }

    #[test]
    fn test_parse_reordered_columns() {
        let csv_content = indoc! {"
            Comment,Key,SourceString
            greeting,greet,Hello
        "};
        let records = Vec::<AuthoringRecord>::from_str(csv_content).unwrap();
        assert_eq!(records[0].key, "greet");
        assert_eq!(records[0].source_string, "Hello");
        assert_eq!(records[0].comment, "greeting");
    }

    #[test]
    fn test_write_emits_authoring_header_with_minimal_quoting() {
        let records = vec![
            AuthoringRecord {
                key: "greet".to_string(),
                source_string: "Hello, world".to_string(),
                comment: "".to_string(),
            },
            AuthoringRecord {
                key: "bye".to_string(),
                source_string: "Goodbye".to_string(),
                comment: "farewell".to_string(),
            },
        ];

        let mut output = Vec::new();
        records.to_writer(&mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "Key,SourceString,Comment\ngreet,\"Hello, world\",\nbye,Goodbye,farewell\n"
        );
    }

    #[test]
    fn test_catalog_conversion_drops_empty_keys() {
        let records = vec![
            AuthoringRecord {
                key: "".to_string(),
                source_string: "orphan".to_string(),
                comment: "".to_string(),
            },
            AuthoringRecord {
                key: "greet".to_string(),
                source_string: "Hello".to_string(),
                comment: "".to_string(),
            },
        ];
        let catalog = Catalog::from(records);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("greet").unwrap().value, "Hello");
    }

    #[test]
    fn test_read_write_file_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("strings.csv");

        let records = vec![AuthoringRecord {
            key: "greet".to_string(),
            source_string: "Hello".to_string(),
            comment: "greeting".to_string(),
        }];
        records.write_to(&path).unwrap();

        let reread = Vec::<AuthoringRecord>::read_from(&path).unwrap();
        assert_eq!(reread, records);
    }
}
