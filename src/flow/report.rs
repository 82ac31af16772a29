//! Text report rendering.
//!
//! ```text
//! Tag Counts:
//! Tag,Count
//! email,1
//! Untagged,1
//!
//! Port/Protocol Combination Counts:
//! Port,Protocol,Count
//! 25,tcp,1
//! ```
//!
//! Both sections are ordered by descending count. Equal counts fall back to
//! ascending tag or (port, protocol) so repeated runs produce identical files.

use super::types::{LookupKey, PortProtocolCounts, TagCounts};
use crate::error::{FlowLogError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Tag counts sorted for output.
pub fn sorted_tag_counts(tag_counts: &TagCounts) -> Vec<(&str, usize)> {
    let mut sorted: Vec<_> = tag_counts
        .iter()
        .map(|(tag, count)| (tag.as_str(), *count))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    sorted
}

/// Port/protocol counts sorted for output.
pub fn sorted_port_protocol_counts(counts: &PortProtocolCounts) -> Vec<(&LookupKey, usize)> {
    let mut sorted: Vec<_> = counts.iter().map(|(key, count)| (key, *count)).collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    sorted
}

/// Renders the report to any writer.
pub fn render<W: Write>(
    out: &mut W,
    tag_counts: &TagCounts,
    port_protocol_counts: &PortProtocolCounts,
) -> io::Result<()> {
    writeln!(out, "Tag Counts:")?;
    writeln!(out, "Tag,Count")?;
    for (tag, count) in sorted_tag_counts(tag_counts) {
        writeln!(out, "{},{}", tag, count)?;
    }

    writeln!(out)?;
    writeln!(out, "Port/Protocol Combination Counts:")?;
    writeln!(out, "Port,Protocol,Count")?;
    for (key, count) in sorted_port_protocol_counts(port_protocol_counts) {
        writeln!(out, "{},{},{}", key.port, key.protocol, count)?;
    }

    Ok(())
}

/// Writes the report to `path`, replacing any existing file.
pub fn write_report(
    path: impl AsRef<Path>,
    tag_counts: &TagCounts,
    port_protocol_counts: &PortProtocolCounts,
) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| FlowLogError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut out = BufWriter::new(file);
    render(&mut out, tag_counts, port_protocol_counts).map_err(write_error)?;
    out.flush().map_err(write_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_counts() -> (TagCounts, PortProtocolCounts) {
        let tags: TagCounts = [("email", 1), ("secure", 1), ("Untagged", 1)]
            .into_iter()
            .map(|(tag, count)| (tag.to_string(), count))
            .collect();
        let ports: PortProtocolCounts = [
            (LookupKey::new("25", "tcp"), 1),
            (LookupKey::new("443", "tcp"), 1),
        ]
        .into_iter()
        .collect();
        (tags, ports)
    }

    fn render_to_string(tags: &TagCounts, ports: &PortProtocolCounts) -> String {
        let mut buf = Vec::new();
        render(&mut buf, tags, ports).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_report_contains_sections_and_rows() {
        let (tags, ports) = sample_counts();
        let report = render_to_string(&tags, &ports);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Tag Counts:");
        assert_eq!(lines[1], "Tag,Count");
        assert!(lines[2..5].contains(&"email,1"));
        assert!(lines[2..5].contains(&"secure,1"));
        assert!(lines[2..5].contains(&"Untagged,1"));
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "Port/Protocol Combination Counts:");
        assert_eq!(lines[7], "Port,Protocol,Count");
        assert!(lines[8..].contains(&"25,tcp,1"));
        assert!(lines[8..].contains(&"443,tcp,1"));
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_rows_sorted_by_count_descending() {
        let tags: TagCounts = [("low", 1), ("high", 7), ("mid", 3)]
            .into_iter()
            .map(|(tag, count)| (tag.to_string(), count))
            .collect();
        let ports: PortProtocolCounts = [
            (LookupKey::new("80", "tcp"), 2),
            (LookupKey::new("53", "udp"), 9),
        ]
        .into_iter()
        .collect();

        let report = render_to_string(&tags, &ports);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(&lines[2..5], &["high,7", "mid,3", "low,1"]);
        assert_eq!(&lines[8..], &["53,udp,9", "80,tcp,2"]);
    }

    #[test]
    fn test_empty_counts_render_headers_only() {
        let report = render_to_string(&TagCounts::new(), &PortProtocolCounts::new());
        assert_eq!(
            report,
            "Tag Counts:\nTag,Count\n\nPort/Protocol Combination Counts:\nPort,Protocol,Count\n"
        );
    }

    #[test]
    fn test_write_report_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output_results.txt");
        std::fs::write(&path, "stale contents that should disappear\n".repeat(10)).unwrap();

        let (tags, ports) = sample_counts();
        write_report(&path, &tags, &ports).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Tag Counts:\n"));
        assert!(!written.contains("stale"));
    }

    #[test]
    fn test_write_report_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("report.txt");
        let (tags, ports) = sample_counts();

        let err = write_report(&path, &tags, &ports).unwrap_err();
        assert!(matches!(err, FlowLogError::Write { .. }));
    }
}
