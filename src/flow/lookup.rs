//! Lookup table loading.
//!
//! The lookup file is CSV with a header row followed by
//! `dst_port,protocol,tag` rows:
//!
//! ```text
//! dstport,protocol,tag
//! 25,tcp,email
//! 443,tcp,secure
//! ```
//!
//! The header is always discarded. Rows with fewer than three fields are
//! skipped, columns past the third are ignored, and when a key repeats the
//! last row wins.

use super::types::LookupKey;
use crate::error::{FlowLogError, InputFile, Result};
use crate::utils::reader::open_file;
use log::debug;
use std::collections::HashMap;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Mapping from (port, protocol) to tag, read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    tags: HashMap<LookupKey, String>,
}

impl LookupTable {
    /// Loads a lookup table from a CSV file.
    ///
    /// # Errors
    ///
    /// - [`FlowLogError::NotFound`] if `path` does not exist
    /// - [`FlowLogError::Read`] if the header line cannot be read
    /// - [`FlowLogError::Csv`] if the file is not decodable as CSV
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = open_file(path)
            .map_err(|e| FlowLogError::open(InputFile::Lookup, path.to_path_buf(), e))?;

        // The header is the first physical line, even when it is blank.
        let mut input = BufReader::new(file);
        let mut header = String::new();
        let header_len = input
            .read_line(&mut header)
            .map_err(|source| FlowLogError::Read {
                file: InputFile::Lookup,
                path: path.to_path_buf(),
                source,
            })?;
        if header_len == 0 {
            return Ok(Self::default());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(input);
        let csv_error = |source| FlowLogError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut table = Self::default();
        let mut skipped = 0usize;
        for result in reader.records() {
            let record = result.map_err(csv_error)?;
            match (record.get(0), record.get(1), record.get(2)) {
                (Some(port), Some(protocol), Some(tag)) => {
                    let key = LookupKey::new(port.trim(), protocol.trim().to_lowercase());
                    table.insert(key, tag.trim());
                }
                _ => skipped += 1,
            }
        }

        debug!(
            "Loaded {} lookup entries from {} ({} short rows skipped)",
            table.len(),
            path.display(),
            skipped
        );
        Ok(table)
    }

    /// Adds or replaces the tag for `key`.
    pub fn insert(&mut self, key: LookupKey, tag: impl Into<String>) {
        self.tags.insert(key, tag.into());
    }

    pub fn get(&self, key: &LookupKey) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &LookupKey) -> bool {
        self.tags.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl FromIterator<(LookupKey, String)> for LookupTable {
    fn from_iter<I: IntoIterator<Item = (LookupKey, String)>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().collect(),
        }
    }
}
