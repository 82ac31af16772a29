//! # Flow Log Tagger
//!
//! Command-line tool that classifies network flow log records by destination
//! port and protocol and reports how often each classification occurs.
//!
//! ## Overview
//!
//! The pipeline runs in three stages, each reading or writing one file:
//!
//! 1. Load a CSV lookup table mapping `(dst_port, protocol)` to a tag
//! 2. Scan a version 2 flow log once, counting records per tag and per
//!    matched port/protocol combination
//! 3. Write both count tables to a text report
//!
//! Records with no lookup entry are counted under the `Untagged` tag.
//! Lines that are too short or of another flow log version are skipped;
//! a well-formed record with a non-numeric destination port aborts the run.
//!
//! ## Architecture
//!
//! - [`flow`] - Lookup loading, record parsing, classification and reporting
//! - [`commands`] - CLI command implementations
//! - [`error`] - Error type shared by the library
//! - [`utils`] - File opening with decompression, progress, formatting
//!
//! ## Example Usage
//!
//! ```bash
//! flow-log-tagger tag --flow-log flow_logs.txt --lookup lookup_table.csv --output output_results.txt
//!
//! # Gzip and zstd compressed logs work directly
//! flow-log-tagger tag --flow-log flow_logs.txt.gz
//!
//! # Debug logging
//! RUST_LOG=debug flow-log-tagger tag
//! ```

pub mod commands;
pub mod error;
pub mod flow;
pub mod utils;

pub use error::{FlowLogError, Result};
