use std::fmt;

use tracing::debug;

use super::aggregation::Aggregation;
use super::error::BuildError;
use super::record::RuleRecord;
use super::rule::Rule;
use crate::render::RenderOptions;

/// Builder for constructing a [`RuleSet`] from textual rules.
///
/// Rules are listed highest priority first. Each rule's origin tag is its
/// position in the list.
///
/// # Example
///
/// ```
/// use fwresolve::{Aggregation, RuleSetBuilder};
///
/// let ruleset = RuleSetBuilder::new()
///     .rule("allow HTTPS", |r| {
///         r.allow().protocol("TCP").ports("443").addresses("192.168.0.1-192.168.255.255")
///     })
///     .rule("deny TCP", |r| {
///         r.deny().protocol("TCP").ports("0-65535").addresses("192.168.0.1-192.168.255.255")
///     })
///     .build()
///     .unwrap();
///
/// let resolution = ruleset.resolve(Aggregation::Address);
/// assert_eq!(resolution.rules().len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    records: Vec<RuleRecord>,
}

/// Intermediate builder passed to the rule definition closure.
#[derive(Debug)]
pub struct RuleBuilder {
    record: RuleRecord,
}

impl RuleSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a rule. Rules deny unless `.allow()` is called.
    #[must_use]
    pub fn rule(mut self, name: &str, f: impl FnOnce(RuleBuilder) -> RuleBuilder) -> Self {
        let builder = f(RuleBuilder {
            record: RuleRecord {
                name: name.to_owned(),
                ..RuleRecord::default()
            },
        });
        self.records.push(builder.record);
        self
    }

    /// Append an already-textual rule.
    #[must_use]
    pub fn record(mut self, record: RuleRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Parse every rule's ranges and expand multi-range rules.
    ///
    /// A rule listing several port or address ranges becomes one [`Rule`]
    /// per combination, all sharing its origin tag. Rules whose name starts
    /// with `#` are skipped but still consume a tag.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if a rule lacks a protocol, ports or
    /// addresses, or if a range does not parse.
    pub fn build(self) -> Result<RuleSet, BuildError> {
        let mut rules = Vec::new();
        let mut names = Vec::with_capacity(self.records.len());

        for (origin, record) in self.records.into_iter().enumerate() {
            names.push(record.name.clone());
            if record.is_disabled() {
                continue;
            }
            rules.extend(expand(origin, record)?);
        }

        debug!(records = names.len(), rules = rules.len(), "built rule set");
        Ok(RuleSet { rules, names })
    }
}

impl RuleBuilder {
    #[must_use]
    pub fn allow(mut self) -> Self {
        self.record.allow = true;
        self
    }

    #[must_use]
    pub fn deny(mut self) -> Self {
        self.record.allow = false;
        self
    }

    #[must_use]
    pub fn protocol(mut self, protocol: &str) -> Self {
        protocol.clone_into(&mut self.record.protocol);
        self
    }

    /// Comma-separated ports or port ranges, e.g. `"80,443,8000-8080"`.
    #[must_use]
    pub fn ports(mut self, ports: &str) -> Self {
        ports.clone_into(&mut self.record.ports);
        self
    }

    /// Comma-separated addresses or address ranges, e.g.
    /// `"10.0.0.1-10.0.0.9,10.0.1.5"`.
    #[must_use]
    pub fn addresses(mut self, addresses: &str) -> Self {
        addresses.clone_into(&mut self.record.addresses);
        self
    }

    #[must_use]
    pub fn description(mut self, description: &str) -> Self {
        description.clone_into(&mut self.record.description);
        self
    }
}

fn expand(origin: usize, record: RuleRecord) -> Result<Vec<Rule>, BuildError> {
    let required = |value: &str, field: &'static str| {
        if value.trim().is_empty() {
            Err(BuildError::MissingField {
                rule: record.name.clone(),
                field,
            })
        } else {
            Ok(())
        }
    };
    required(&record.protocol, "protocol")?;
    required(&record.ports, "ports")?;
    required(&record.addresses, "addresses")?;

    let ports = crate::parse::ports(&record.ports).map_err(|source| BuildError::InvalidRange {
        rule: record.name.clone(),
        field: "ports",
        source,
    })?;
    let addresses =
        crate::parse::addresses(&record.addresses).map_err(|source| BuildError::InvalidRange {
            rule: record.name.clone(),
            field: "addresses",
            source,
        })?;

    let mut rules = Vec::with_capacity(ports.len() * addresses.len());
    for &port in &ports {
        for &address in &addresses {
            rules.push(
                Rule::new(
                    record.name.as_str(),
                    record.protocol.trim(),
                    record.allow,
                    port,
                    address,
                )
                .with_origin(origin)
                .with_description(record.description.as_str()),
            );
        }
    }
    Ok(rules)
}

/// Parsed, tagged rules ready for resolution.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    /// Record names indexed by origin tag, disabled records included.
    names: Vec<String>,
}

impl RuleSet {
    /// Build from textual records, highest priority first.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] as [`RuleSetBuilder::build`] does.
    pub fn from_records(records: impl IntoIterator<Item = RuleRecord>) -> Result<Self, BuildError> {
        records
            .into_iter()
            .fold(RuleSetBuilder::new(), RuleSetBuilder::record)
            .build()
    }

    /// The expanded rules in priority order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Name of the record that produced origin tag `origin`.
    #[must_use]
    pub fn name_of(&self, origin: usize) -> Option<&str> {
        self.names.get(origin).map(String::as_str)
    }

    /// Resolve the rule set. See [`resolve`](crate::resolve).
    #[must_use]
    pub fn resolve(&self, aggregation: Aggregation) -> Resolution {
        Resolution {
            rules: crate::resolve(self.rules.clone(), aggregation),
            names: self.names.clone(),
            aggregation,
        }
    }
}

#[cfg(feature = "serde")]
impl RuleSet {
    /// Build from a JSON array of rule records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if the text is not a
    /// record array, or [`Error::Build`](crate::Error::Build) if a record
    /// does not build.
    pub fn from_json(json: &str) -> Result<Self, crate::Error> {
        crate::serial::decode(json)
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RuleSet({} rules from {} records)",
            self.rules.len(),
            self.names.len(),
        )
    }
}

/// The outcome of resolving a [`RuleSet`].
#[derive(Debug, Clone)]
pub struct Resolution {
    rules: Vec<Rule>,
    names: Vec<String>,
    aggregation: Aggregation,
}

impl Resolution {
    /// Resolved rules, ordered by origin tag.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn into_rules(self) -> Vec<Rule> {
        self.rules
    }

    #[must_use]
    pub fn aggregation(&self) -> Aggregation {
        self.aggregation
    }

    /// Render the resolved rules back to textual records, naming the
    /// conflicting rules that trimmed each fragment.
    #[must_use]
    pub fn records(&self, options: &RenderOptions) -> Vec<RuleRecord> {
        crate::render::render(&self.rules, &self.names, self.aggregation, options)
    }
}

#[cfg(feature = "serde")]
impl Resolution {
    /// Render to records and pretty-print them as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if encoding fails.
    pub fn to_json(&self, options: &RenderOptions) -> Result<String, serde_json::Error> {
        crate::serial::encode(&self.records(options))
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Resolution({} rules, aggregation {})",
            self.rules.len(),
            self.aggregation,
        )
    }
}
