// src/report/writer.rs
// =============================================================================
// Writes OutputRows as CSV.
//
// - The header goes out as soon as the report is created
// - Each row is flushed right after it is written, so if the run dies
//   halfway the file still holds every row finished so far
// - There is no rollback: a failed run leaves a partial file behind
// =============================================================================

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{Writer, WriterBuilder};

use super::row::OutputRow;

/// Output columns, in order
pub const COLUMNS: [&str; 26] = [
    "name",
    "description",
    "readme_content",
    "url",
    "clone_url",
    "ssh_url",
    "homepage",
    "language",
    "languages_used",
    "stars",
    "forks",
    "watchers",
    "size_kb",
    "created_at",
    "updated_at",
    "pushed_at",
    "is_private",
    "is_fork",
    "is_archived",
    "has_issues",
    "has_wiki",
    "has_pages",
    "open_issues_count",
    "default_branch",
    "category",
    "topics",
];

pub struct CsvReport<W: Write> {
    writer: Writer<W>,
    rows: usize,
}

impl CsvReport<File> {
    /// Creates (or truncates) the file at `path` and writes the header
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file {}", path.display()))?;
        Self::new(file)
    }
}

impl<W: Write> CsvReport<W> {
    pub fn new(inner: W) -> Result<Self> {
        // Header is written by hand so it is there even with zero rows
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(inner);
        writer.write_record(COLUMNS).context("Failed to write CSV header")?;
        writer.flush().context("Failed to write CSV header")?;

        Ok(Self { writer, rows: 0 })
    }

    pub fn write_row(&mut self, row: &OutputRow) -> Result<()> {
        self.writer
            .serialize(row)
            .with_context(|| format!("Failed to write row for {}", row.name))?;
        self.writer
            .flush()
            .with_context(|| format!("Failed to write row for {}", row.name))?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Flushes and hands back the underlying writer
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| e.into_error())
            .context("Failed to flush CSV output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{EnrichmentResult, RepositorySummary};

    fn row(name: &str, description: &str) -> OutputRow {
        let repo = RepositorySummary {
            name: name.to_string(),
            description: Some(description.to_string()),
            fork: true,
            ..Default::default()
        };
        let enrichment = EnrichmentResult {
            readme_excerpt: "No README found".to_string(),
            languages_used: "Rust, Shell".to_string(),
        };
        OutputRow::new(repo, enrichment, "Tools/Utilities".to_string())
    }

    fn read_back(bytes: Vec<u8>) -> (csv::StringRecord, Vec<csv::StringRecord>) {
        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let headers = reader.headers().unwrap().clone();
        let records = reader.records().map(|r| r.unwrap()).collect();
        (headers, records)
    }

    #[test]
    fn test_header_only_when_no_rows() {
        let report = CsvReport::new(Vec::new()).unwrap();
        let (headers, records) = read_back(report.finish().unwrap());

        assert_eq!(headers.iter().collect::<Vec<_>>(), COLUMNS.to_vec());
        assert!(records.is_empty());
    }

    #[test]
    fn test_one_line_per_row_in_order() {
        let mut report = CsvReport::new(Vec::new()).unwrap();
        for i in 0..5 {
            report.write_row(&row(&format!("repo-{}", i), "x")).unwrap();
        }
        assert_eq!(report.rows_written(), 5);

        let (_, records) = read_back(report.finish().unwrap());
        assert_eq!(records.len(), 5);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.len(), COLUMNS.len());
            assert_eq!(&record[0], format!("repo-{}", i));
        }
    }

    #[test]
    fn test_values_with_commas_and_quotes_survive() {
        let mut report = CsvReport::new(Vec::new()).unwrap();
        report
            .write_row(&row("tricky", "fast, \"safe\", and\nmultiline"))
            .unwrap();

        let (_, records) = read_back(report.finish().unwrap());
        let record = &records[0];
        assert_eq!(&record[1], "fast, \"safe\", and\nmultiline");
        assert_eq!(&record[8], "Rust, Shell");
        assert_eq!(&record[16], "false"); // is_private
        assert_eq!(&record[17], "true"); // is_fork
        assert_eq!(&record[24], "Tools/Utilities");
    }

    #[test]
    fn test_column_names_match_row_fields() {
        // serialize with headers on and compare against our header list
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(row("a", "b")).unwrap();
        let bytes = writer.into_inner().unwrap();

        let (headers, _) = read_back(bytes);
        assert_eq!(headers.iter().collect::<Vec<_>>(), COLUMNS.to_vec());
    }

    #[test]
    fn test_create_writes_header_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repos.csv");
        {
            let mut report = CsvReport::create(&path).unwrap();
            report.write_row(&row("on-disk", "")).unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();

        let mut lines = contents.lines();
        assert!(lines.next().unwrap().starts_with("name,description,readme_content,url"));
        assert!(lines.next().unwrap().starts_with("on-disk,"));
    }
}
