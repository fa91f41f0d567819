use std::collections::BTreeMap;
use std::net::Ipv4Addr;

use super::span::Span;

/// Which axes of a fragment were cut away by one higher-priority rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trim {
    pub port: bool,
    pub address: bool,
}

impl Trim {
    #[must_use]
    pub fn any(self) -> bool {
        self.port || self.address
    }

    #[must_use]
    pub fn union(self, other: Trim) -> Trim {
        Trim {
            port: self.port || other.port,
            address: self.address || other.address,
        }
    }
}

/// Provenance of a fragment: for each conflicting higher-priority rule (by
/// origin tag), the axes it trimmed.
///
/// Entries only accumulate. Recording the same tag twice ORs the flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exceptions(BTreeMap<usize, Trim>);

impl Exceptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, origin: usize, trim: Trim) {
        let entry = self.0.entry(origin).or_default();
        *entry = entry.union(trim);
    }

    /// Union `other` into this map.
    pub fn merge(&mut self, other: &Exceptions) {
        for (&origin, &trim) in &other.0 {
            self.record(origin, trim);
        }
    }

    #[must_use]
    pub fn get(&self, origin: usize) -> Option<Trim> {
        self.0.get(&origin).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Trim)> + '_ {
        self.0.iter().map(|(&origin, &trim)| (origin, trim))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// A firewall rule: a (port, address) rectangle with a protocol and an
/// allow/deny action.
///
/// `origin` ties every fragment back to the input rule it was split from.
/// `original` stays `true` only while the rule's rectangle is untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    pub name: String,
    pub description: String,
    pub protocol: String,
    pub allow: bool,
    pub ports: Span<u16>,
    pub addresses: Span<Ipv4Addr>,
    pub origin: usize,
    pub original: bool,
    pub exceptions: Exceptions,
}

impl Rule {
    /// Create an untouched rule with origin tag 0 and no description.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        protocol: impl Into<String>,
        allow: bool,
        ports: Span<u16>,
        addresses: Span<Ipv4Addr>,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            protocol: protocol.into(),
            allow,
            ports,
            addresses,
            origin: 0,
            original: true,
            exceptions: Exceptions::new(),
        }
    }

    #[must_use]
    pub fn with_origin(mut self, origin: usize) -> Self {
        self.origin = origin;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn covers(&self, port: u16, address: Ipv4Addr) -> bool {
        self.ports.contains(port) && self.addresses.contains(address)
    }

    /// Whether the two rectangles share a point. Protocol and action are
    /// not considered.
    #[must_use]
    pub fn overlaps(&self, other: &Rule) -> bool {
        self.ports.overlaps(&other.ports) && self.addresses.overlaps(&other.addresses)
    }

    /// Whether `other`'s rectangle lies inside this one.
    #[must_use]
    pub fn contains(&self, other: &Rule) -> bool {
        self.ports.contains_span(&other.ports) && self.addresses.contains_span(&other.addresses)
    }

    /// Same protocol and action: the two can never conflict.
    #[must_use]
    pub fn agrees_with(&self, other: &Rule) -> bool {
        self.protocol == other.protocol && self.allow == other.allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Rule {
        Rule::new(
            "smb",
            "TCP",
            true,
            Span::point(445),
            Span::new(Ipv4Addr::new(192, 168, 200, 1), Ipv4Addr::new(192, 168, 200, 255)),
        )
    }

    #[test]
    fn new_rule_is_original() {
        let rule = sample();
        assert!(rule.original);
        assert_eq!(rule.origin, 0);
        assert!(rule.exceptions.is_empty());
        assert!(rule.description.is_empty());
    }

    #[test]
    fn builders() {
        let rule = sample().with_origin(7).with_description("file shares");
        assert_eq!(rule.origin, 7);
        assert_eq!(rule.description, "file shares");
    }

    #[test]
    fn covers_point() {
        let rule = sample();
        assert!(rule.covers(445, Ipv4Addr::new(192, 168, 200, 9)));
        assert!(!rule.covers(444, Ipv4Addr::new(192, 168, 200, 9)));
        assert!(!rule.covers(445, Ipv4Addr::new(192, 168, 201, 9)));
    }

    #[test]
    fn exceptions_or_merge() {
        let mut ex = Exceptions::new();
        ex.record(3, Trim { port: true, address: false });
        ex.record(3, Trim { port: false, address: true });
        assert_eq!(ex.get(3), Some(Trim { port: true, address: true }));
        assert_eq!(ex.len(), 1);
    }

    #[test]
    fn exceptions_record_is_idempotent() {
        let mut ex = Exceptions::new();
        let trim = Trim { port: true, address: false };
        ex.record(1, trim);
        ex.record(1, trim);
        assert_eq!(ex.get(1), Some(trim));
    }

    #[test]
    fn exceptions_merge_is_order_independent() {
        let mut a = Exceptions::new();
        a.record(1, Trim { port: true, address: false });
        let mut b = Exceptions::new();
        b.record(1, Trim { port: false, address: true });
        b.record(2, Trim { port: true, address: false });

        let mut ab = a.clone();
        ab.merge(&b);
        let mut ba = b.clone();
        ba.merge(&a);
        assert_eq!(ab, ba);
        assert_eq!(ab.iter().map(|(tag, _)| tag).collect::<Vec<_>>(), vec![1, 2]);
    }
}
