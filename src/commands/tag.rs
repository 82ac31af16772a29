//! Tag flow log records and write the count report.
//!
//! # Usage
//!
//! ```bash
//! # Defaults: flow_logs.txt, lookup_table.csv -> output_results.txt
//! flow-log-tagger tag
//!
//! # Explicit paths, compressed logs are decompressed on the fly
//! flow-log-tagger tag --flow-log logs/flow.log.gz --lookup tags.csv -o report.txt
//! ```
//!
//! # Output
//!
//! Writes a report with two sections:
//! - Count of records per tag, `Untagged` included
//! - Count of records per (port, protocol) entry of the lookup table
//!
//! Nothing is written when either input is missing or a record carries an
//! invalid destination port.

use crate::flow::lookup::LookupTable;
use crate::flow::processor::FlowLogProcessor;
use crate::flow::report::write_report;
use crate::utils::format::{format_millis, format_number};
use anyhow::Result;
use log::info;
use std::time::Instant;

pub fn run(flow_log: &str, lookup: &str, output: &str, show_progress: bool) -> Result<()> {
    let start = Instant::now();

    let table = LookupTable::load(lookup)?;
    info!("Loaded {} lookup entries from {}", table.len(), lookup);

    let mut processor = FlowLogProcessor::new(&table);
    if show_progress {
        processor = processor.progress("Tagging");
    }
    let (counts, stats) = processor.process(flow_log)?;

    write_report(output, &counts.tag_counts, &counts.port_protocol_counts)?;
    let elapsed = start.elapsed();

    stats.report();
    eprintln!("  Distinct tags: {}", format_number(counts.tag_counts.len()));
    eprintln!(
        "  Matched port/protocol combinations: {}",
        format_number(counts.port_protocol_counts.len())
    );

    println!("Results written to {}", output);
    println!("Total Execution Time: {}", format_millis(elapsed));

    Ok(())
}
