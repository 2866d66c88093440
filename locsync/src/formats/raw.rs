//! Positional row access for the legacy header relabel.
//!
//! Unlike [`authoring`](super::authoring) and [`platform`](super::platform),
//! which match columns by header name, this path trusts column order: rows
//! are kept verbatim and only row 0 is inspected. Ragged rows are allowed.

use std::io::BufRead;

use csv::StringRecord;

use crate::{
    error::Error,
    formats::{AUTHORING_HEADER, PLATFORM_HEADER},
    traits::Parser,
};

/// Outcome of a [`RawTable::relabel`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderStatus {
    /// Row 0 matched the authoring header and was replaced.
    Matched,
    /// Row 0 did not match; rows were left untouched. Carries the header
    /// that was found.
    Mismatched(Vec<String>),
    /// The table has no rows at all.
    Empty,
}

/// A CSV table held as raw rows, header included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub rows: Vec<StringRecord>,
}

impl RawTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replaces the authoring header with the platform header, if and only
    /// if row 0 matches the authoring header exactly. On a mismatch the
    /// rows are left as read; the caller decides whether to warn.
    pub fn relabel(&mut self) -> HeaderStatus {
        let Some(first) = self.rows.first_mut() else {
            return HeaderStatus::Empty;
        };
        if first.iter().eq(AUTHORING_HEADER.iter().copied()) {
            *first = StringRecord::from(PLATFORM_HEADER.to_vec());
            HeaderStatus::Matched
        } else {
            HeaderStatus::Mismatched(first.iter().map(String::from).collect())
        }
    }
}

impl Parser for RawTable {
    /// Parse from any reader, keeping every row verbatim.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut rows = Vec::new();
        for result in rdr.records() {
            rows.push(result?);
        }
        Ok(RawTable { rows })
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: std::io::Write>(&self, writer: W) -> Result<(), Error> {
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(writer);
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_relabel_matching_header() {
        let csv_content = indoc! {"
            Key,SourceString,Comment
            greet,Hello,greeting
        "};
        let mut table = RawTable::from_str(csv_content).unwrap();
        assert_eq!(table.relabel(), HeaderStatus::Matched);

        let mut output = Vec::new();
        table.to_writer(&mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "source,target,developer_comments\ngreet,Hello,greeting\n"
        );
    }

    #[test]
    fn test_relabel_mismatched_header_leaves_rows_untouched() {
        let csv_content = indoc! {"
            Identifier,Text,Note
            greet,Hello,greeting
        "};
        let mut table = RawTable::from_str(csv_content).unwrap();
        let status = table.relabel();
        assert_eq!(
            status,
            HeaderStatus::Mismatched(vec![
                "Identifier".to_string(),
                "Text".to_string(),
                "Note".to_string()
            ])
        );

        let mut output = Vec::new();
        table.to_writer(&mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), csv_content);
    }

    #[test]
    fn test_relabel_empty_table() {
        let mut table = RawTable::from_str("").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.relabel(), HeaderStatus::Empty);
    }

    #[test]
    fn test_ragged_rows_are_preserved() {
        let csv_content = "Key,SourceString,Comment\ngreet,Hello\nbye,Goodbye,farewell,extra\n";
        let mut table = RawTable::from_str(csv_content).unwrap();
        assert_eq!(table.relabel(), HeaderStatus::Matched);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[1].len(), 2);
        assert_eq!(table.rows[2].len(), 4);

        let mut output = Vec::new();
        table.to_writer(&mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "source,target,developer_comments\ngreet,Hello\nbye,Goodbye,farewell,extra\n"
        );
    }
}
