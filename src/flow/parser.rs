//! Flow log line parsing and protocol naming.
//!
//! Records are whitespace-separated, VPC flow log style:
//!
//! ```text
//! version account-id interface-id srcaddr dstaddr srcport dstport protocol packets bytes start end action log-status
//! 2       123        eni-abc      10.0.0.1 192.0.2.1 12345  25     6        10      5000  ...
//! ```
//!
//! Only the version, destination port and protocol columns are consulted.

use super::types::FlowRecord;

/// Only records of this version are classified.
pub const SUPPORTED_VERSION: &str = "2";

/// Records with fewer whitespace-separated fields are ignored.
pub const MIN_FIELDS: usize = 13;

const DST_PORT_FIELD: usize = 6;
const PROTOCOL_FIELD: usize = 7;

/// IANA protocol numbers with a well-known name.
pub const PROTOCOL_NAMES: [(&str, &str); 3] = [("6", "tcp"), ("17", "udp"), ("1", "icmp")];

/// Extracts the classified fields from a line.
///
/// Returns `None` for lines that are too short or carry another version;
/// those are skipped rather than treated as errors.
pub fn parse_line(line: &str) -> Option<FlowRecord<'_>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FIELDS || fields[0] != SUPPORTED_VERSION {
        return None;
    }

    Some(FlowRecord {
        dst_port: fields[DST_PORT_FIELD],
        protocol: fields[PROTOCOL_FIELD],
    })
}

/// Lowercase protocol name for a protocol number, or the code itself when unknown.
pub fn protocol_name(code: &str) -> String {
    PROTOCOL_NAMES
        .iter()
        .find(|(number, _)| *number == code)
        .map_or(code, |&(_, name)| name)
        .to_lowercase()
}

/// True when `port` is a non-empty run of ASCII decimal digits.
pub fn is_valid_port(port: &str) -> bool {
    !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())
}
