//! JSON form of rule records.
//!
//! A rule file is a JSON array of objects with the keys `Name`, `Desc`,
//! `Allow`, `Protocol`, `Port` and `IP`:
//!
//! ```text
//! [
//!   { "Name": "allow HTTPS", "Allow": true, "Protocol": "TCP",
//!     "Port": "443", "IP": "192.168.0.1-192.168.255.255" }
//! ]
//! ```
//!
//! Missing keys default to empty strings and `false`. Rendered output uses
//! the same shape.

use tracing::debug;

use crate::types::{RuleRecord, RuleSet};

pub(crate) fn decode(json: &str) -> Result<RuleSet, crate::Error> {
    let records: Vec<RuleRecord> = serde_json::from_str(json)?;
    debug!(records = records.len(), "decoded rule records");
    Ok(RuleSet::from_records(records)?)
}

pub(crate) fn encode(records: &[RuleRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}
