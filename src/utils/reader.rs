//! Input file opener with automatic decompression.
//!
//! Flow logs are often archived compressed, so both inputs go through
//! [`open_file`], which picks a decoder from the file extension:
//!
//! - `.gz` → Gzip
//! - `.zst` → Zstandard
//! - anything else → plain text
//!
//! # Examples
//!
//! ```no_run
//! use flow_log_tagger::utils::reader::open_file;
//! use std::io::{BufRead, BufReader};
//!
//! let reader = open_file("flow_logs.txt.gz").unwrap();
//! for line in BufReader::new(reader).lines() {
//!     let line = line.unwrap();
//!     // Process line...
//! }
//! ```

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Opens `path`, wrapping it in a decoder when the extension calls for one.
///
/// Errors are returned unchanged so callers can tell a missing file
/// (`io::ErrorKind::NotFound`) from other failures.
pub fn open_file(path: impl AsRef<Path>) -> io::Result<Box<dyn Read + Send>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    match path.extension().and_then(|e| e.to_str()).unwrap_or("") {
        "gz" => Ok(Box::new(GzDecoder::new(file))),
        "zst" => Ok(Box::new(zstd::Decoder::new(file)?)),
        _ => Ok(Box::new(file)),
    }
}
