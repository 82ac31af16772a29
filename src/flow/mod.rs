//! Flow log classification pipeline.
//!
//! ## Key Components
//!
//! - [`types`] - Lookup keys, count tables and the `Untagged` sentinel
//! - [`parser`] - Flow log line parsing and protocol naming
//! - [`lookup`] - CSV lookup table loader
//! - [`processor`] - Single-pass classification of a flow log
//! - [`report`] - Text report rendering
//!
//! ## Example
//!
//! ```no_run
//! use flow_log_tagger::flow::lookup::LookupTable;
//! use flow_log_tagger::flow::processor::FlowLogProcessor;
//! use flow_log_tagger::flow::report::write_report;
//!
//! let table = LookupTable::load("lookup_table.csv").unwrap();
//! let (counts, _stats) = FlowLogProcessor::new(&table)
//!     .process("flow_logs.txt")
//!     .unwrap();
//! write_report(
//!     "output_results.txt",
//!     &counts.tag_counts,
//!     &counts.port_protocol_counts,
//! )
//! .unwrap();
//! ```

pub mod lookup;
pub mod parser;
pub mod processor;
pub mod report;
pub mod types;
