//! Data structures shared by the lookup loader, processor and report writer.

use std::collections::HashMap;

/// Tag assigned to records whose (port, protocol) has no lookup entry.
pub const UNTAGGED: &str = "Untagged";

/// Join key between the lookup table and flow log records.
///
/// The port is kept as the literal digit string from the input and the
/// protocol is always lowercase, so `("25", "tcp")` and `("025", "tcp")`
/// are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LookupKey {
    pub port: String,
    pub protocol: String,
}

impl LookupKey {
    pub fn new(port: impl Into<String>, protocol: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            protocol: protocol.into(),
        }
    }
}

/// Occurrences per tag, including [`UNTAGGED`].
pub type TagCounts = HashMap<String, usize>;

/// Occurrences per lookup key; only keys present in the lookup table appear.
pub type PortProtocolCounts = HashMap<LookupKey, usize>;

/// The two count tables produced by one pass over a flow log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowCounts {
    pub tag_counts: TagCounts,
    pub port_protocol_counts: PortProtocolCounts,
}

impl FlowCounts {
    /// Splits into `(tag_counts, port_protocol_counts)`.
    pub fn into_parts(self) -> (TagCounts, PortProtocolCounts) {
        (self.tag_counts, self.port_protocol_counts)
    }
}

/// The fields of a version 2 flow log record that classification uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowRecord<'a> {
    /// Destination port as written in the log (field 6)
    pub dst_port: &'a str,
    /// Protocol number as written in the log (field 7)
    pub protocol: &'a str,
}
