//! Single-pass flow log classification.
//!
//! Every line is split on whitespace. Lines that are too short or carry a
//! version other than 2 are skipped. For the rest, the destination port and
//! protocol form a [`LookupKey`]; the matching tag (or [`UNTAGGED`]) is
//! counted, and keys found in the lookup table are counted separately.
//!
//! A record that passes the shape check but has a non-numeric destination
//! port aborts the whole run with [`FlowLogError::InvalidPort`].

use super::lookup::LookupTable;
use super::parser::{is_valid_port, parse_line, protocol_name};
use super::types::{FlowCounts, FlowRecord, LookupKey, UNTAGGED};
use crate::error::{FlowLogError, InputFile, Result};
use crate::utils::format::format_number;
use crate::utils::progress::ProgressBar;
use crate::utils::reader::open_file;
use log::debug;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Statistics collected during one pass over a flow log
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessStats {
    /// Physical lines read, skipped ones included
    pub total_lines: usize,
    /// Version 2 records that were classified
    pub processed_records: usize,
    /// Lines ignored for being short or another version
    pub skipped_lines: usize,
    /// Classified records with no lookup entry
    pub untagged_records: usize,
}

impl ProcessStats {
    /// Print a summary of processing statistics
    pub fn report(&self) {
        eprintln!("\nProcessing Summary:");
        eprintln!("  Total lines: {}", format_number(self.total_lines));
        eprintln!("  Processed records: {}", format_number(self.processed_records));
        eprintln!("  Untagged records: {}", format_number(self.untagged_records));
        if self.skipped_lines > 0 {
            let skip_percentage = (self.skipped_lines as f64 / self.total_lines as f64) * 100.0;
            eprintln!(
                "  Skipped lines: {} ({:.2}%)",
                format_number(self.skipped_lines),
                skip_percentage
            );
        }
    }
}

/// Classifies flow log records against a lookup table
pub struct FlowLogProcessor<'a> {
    lookup: &'a LookupTable,
    progress_label: Option<String>,
}

impl<'a> FlowLogProcessor<'a> {
    pub fn new(lookup: &'a LookupTable) -> Self {
        Self {
            lookup,
            progress_label: None,
        }
    }

    /// Show a progress bar with the given label while reading
    #[must_use]
    pub fn progress(mut self, label: &str) -> Self {
        self.progress_label = Some(label.to_string());
        self
    }

    /// Reads the flow log at `path` and returns both count tables.
    ///
    /// # Errors
    ///
    /// - [`FlowLogError::NotFound`] if `path` does not exist
    /// - [`FlowLogError::InvalidPort`] on the first version 2 record whose
    ///   destination port is not all digits; no partial counts are returned
    /// - [`FlowLogError::Read`] if the file cannot be read
    pub fn process(&self, path: impl AsRef<Path>) -> Result<(FlowCounts, ProcessStats)> {
        let path = path.as_ref();
        let file = open_file(path)
            .map_err(|e| FlowLogError::open(InputFile::FlowLog, path.to_path_buf(), e))?;
        let reader = BufReader::new(file);

        let file_size = std::fs::metadata(path).map_or(0, |m| m.len() as usize);
        let progress = match &self.progress_label {
            Some(label) => ProgressBar::new(file_size, label),
            None => ProgressBar::hidden(),
        };

        let mut counts = FlowCounts::default();
        let mut stats = ProcessStats::default();
        let mut bytes_read = 0;

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            stats.total_lines += 1;

            let line = line.map_err(|source| {
                progress.abandon();
                FlowLogError::Read {
                    file: InputFile::FlowLog,
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            bytes_read += line.len() + 1; // +1 for newline

            if line_number % 10_000 == 0 {
                progress.update(bytes_read.min(file_size));
            }

            let Some(record) = parse_line(&line) else {
                debug!("Skipping line {}: not a version 2 record", line_number);
                stats.skipped_lines += 1;
                continue;
            };

            if let Err(e) = self.classify(record, line_number, &mut counts, &mut stats) {
                progress.abandon();
                return Err(e);
            }
        }

        progress.finish();
        debug!(
            "Processed {} of {} lines from {}",
            stats.processed_records,
            stats.total_lines,
            path.display()
        );

        Ok((counts, stats))
    }

    fn classify(
        &self,
        record: FlowRecord<'_>,
        line_number: usize,
        counts: &mut FlowCounts,
        stats: &mut ProcessStats,
    ) -> Result<()> {
        let protocol = protocol_name(record.protocol);

        if !is_valid_port(record.dst_port) {
            return Err(FlowLogError::InvalidPort {
                value: record.dst_port.to_string(),
                line: line_number,
            });
        }

        let key = LookupKey::new(record.dst_port, protocol);
        stats.processed_records += 1;

        match self.lookup.get(&key) {
            Some(tag) => {
                *counts.tag_counts.entry(tag.to_string()).or_insert(0) += 1;
                *counts.port_protocol_counts.entry(key).or_insert(0) += 1;
            }
            None => {
                stats.untagged_records += 1;
                *counts.tag_counts.entry(UNTAGGED.to_string()).or_insert(0) += 1;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_table() -> LookupTable {
        [
            (LookupKey::new("25", "tcp"), "email".to_string()),
            (LookupKey::new("443", "tcp"), "secure".to_string()),
            (LookupKey::new("23", "tcp"), "management".to_string()),
            (LookupKey::new("68", "udp"), "dhcp".to_string()),
        ]
        .into_iter()
        .collect()
    }

    fn record(dst_port: &str, protocol: &str) -> String {
        format!(
            "2 123 eni-abc 10.0.0.1 192.0.2.1 12345 {} {} 10 5000 1620140761 1620140821 ACCEPT OK",
            dst_port, protocol
        )
    }

    fn log_file(lines: &[String]) -> NamedTempFile {
        let mut temp = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(temp, "{}", line).unwrap();
        }
        temp.flush().unwrap();
        temp
    }

    #[test]
    fn test_tagged_and_untagged_records() {
        let table = sample_table();
        let temp = log_file(&[record("25", "6"), record("443", "6"), record("9999", "6")]);

        let (counts, stats) = FlowLogProcessor::new(&table).process(temp.path()).unwrap();

        assert_eq!(counts.tag_counts.len(), 3);
        assert_eq!(counts.tag_counts["email"], 1);
        assert_eq!(counts.tag_counts["secure"], 1);
        assert_eq!(counts.tag_counts[UNTAGGED], 1);

        assert_eq!(counts.port_protocol_counts.len(), 2);
        assert_eq!(counts.port_protocol_counts[&LookupKey::new("25", "tcp")], 1);
        assert_eq!(counts.port_protocol_counts[&LookupKey::new("443", "tcp")], 1);
        assert!(!counts
            .port_protocol_counts
            .contains_key(&LookupKey::new("9999", "tcp")));

        assert_eq!(stats.total_lines, 3);
        assert_eq!(stats.processed_records, 3);
        assert_eq!(stats.untagged_records, 1);
    }

    #[test]
    fn test_protocol_numbers_are_translated() {
        let table = sample_table();
        let temp = log_file(&[record("68", "17"), record("68", "6")]);

        let (counts, _) = FlowLogProcessor::new(&table).process(temp.path()).unwrap();

        assert_eq!(counts.tag_counts["dhcp"], 1);
        assert_eq!(counts.tag_counts[UNTAGGED], 1);
        assert_eq!(counts.port_protocol_counts[&LookupKey::new("68", "udp")], 1);
    }

    #[test]
    fn test_unknown_protocol_passes_through_lowercased() {
        let mut table = LookupTable::default();
        table.insert(LookupKey::new("500", "gre"), "tunnel");
        let temp = log_file(&[record("500", "GRE"), record("500", "47")]);

        let (counts, _) = FlowLogProcessor::new(&table).process(temp.path()).unwrap();

        assert_eq!(counts.tag_counts["tunnel"], 1);
        assert_eq!(counts.tag_counts[UNTAGGED], 1);
    }

    #[test]
    fn test_short_and_wrong_version_lines_are_skipped() {
        let table = sample_table();
        let temp = log_file(&[
            "2 123 eni-abc 10.0.0.1 192.0.2.1 12345 25 6 ACCEPT OK".to_string(),
            record("443", "6"),
            "invalid line without proper format".to_string(),
            record("25", "6").replacen('2', "5", 1),
            String::new(),
        ]);

        let (counts, stats) = FlowLogProcessor::new(&table).process(temp.path()).unwrap();

        assert_eq!(counts.tag_counts.len(), 1);
        assert_eq!(counts.tag_counts["secure"], 1);
        assert!(!counts.tag_counts.contains_key(UNTAGGED));
        assert_eq!(stats.total_lines, 5);
        assert_eq!(stats.skipped_lines, 4);
    }

    #[test]
    fn test_crlf_line_endings() {
        let table = sample_table();
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "{}\r\n{}\r\n", record("25", "6"), record("443", "6")).unwrap();
        temp.flush().unwrap();

        let (counts, stats) = FlowLogProcessor::new(&table).process(temp.path()).unwrap();

        assert_eq!(stats.total_lines, 2);
        assert_eq!(counts.tag_counts["email"], 1);
        assert_eq!(counts.tag_counts["secure"], 1);
        assert_eq!(counts.port_protocol_counts[&LookupKey::new("443", "tcp")], 1);
    }

    #[test]
    fn test_invalid_port_reports_line_number() {
        let table = sample_table();
        let temp = log_file(&[
            "short line".to_string(),
            record("25", "6"),
            record("abc", "6"),
            record("443", "6"),
        ]);

        let err = FlowLogProcessor::new(&table)
            .process(temp.path())
            .unwrap_err();

        assert!(matches!(
            err,
            FlowLogError::InvalidPort { ref value, line: 3 } if value == "abc"
        ));
        assert_eq!(err.to_string(), "Invalid port number 'abc' at line 3");
    }

    #[test]
    fn test_invalid_port_on_skipped_line_is_ignored() {
        let table = sample_table();
        let temp = log_file(&[record("abc", "6").replacen('2', "3", 1)]);

        let (counts, stats) = FlowLogProcessor::new(&table).process(temp.path()).unwrap();

        assert!(counts.tag_counts.is_empty());
        assert_eq!(stats.skipped_lines, 1);
    }

    #[test]
    fn test_empty_log() {
        let table = sample_table();
        let temp = NamedTempFile::new().unwrap();

        let (counts, stats) = FlowLogProcessor::new(&table).process(temp.path()).unwrap();

        assert!(counts.tag_counts.is_empty());
        assert!(counts.port_protocol_counts.is_empty());
        assert_eq!(stats, ProcessStats::default());
    }

    #[test]
    fn test_empty_lookup_tags_everything_untagged() {
        let table = LookupTable::default();
        let temp = log_file(&[record("25", "6"), record("443", "6"), record("9999", "6")]);

        let (counts, _) = FlowLogProcessor::new(&table).process(temp.path()).unwrap();

        assert_eq!(counts.tag_counts[UNTAGGED], 3);
        assert!(counts.port_protocol_counts.is_empty());
    }

    #[test]
    fn test_missing_flow_log() {
        let table = sample_table();
        let err = FlowLogProcessor::new(&table)
            .process("nonexistent_flow_logs.txt")
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Flow log file not found: nonexistent_flow_logs.txt"
        );
    }
}
