use crate::types::{Aggregation, RuleRecord};
use crate::Rule;

/// Options for turning resolved rules back into textual records.
///
/// # Example
///
/// ```
/// use fwresolve::RenderOptions;
///
/// let options = RenderOptions::default()
///     .with_except_format(" [split by %]")
///     .with_join(false);
/// assert!(!options.join);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Suffix appended to the name of a trimmed rule. `%` is replaced by the
    /// comma-joined names of the rules that trimmed it. `None` disables the
    /// suffix.
    pub except_format: Option<String>,

    /// Comma-join records of the same origin, protocol and action that share
    /// their port or address text.
    pub join: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            except_format: Some("(Except: %)".to_owned()),
            join: true,
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn with_except_format(mut self, format: impl Into<String>) -> Self {
        self.except_format = Some(format.into());
        self
    }

    #[must_use]
    pub fn without_exceptions(mut self) -> Self {
        self.except_format = None;
        self
    }

    #[must_use]
    pub fn with_join(mut self, join: bool) -> Self {
        self.join = join;
        self
    }
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Ports,
    Addresses,
}

struct Entry {
    origin: usize,
    record: RuleRecord,
}

pub(crate) fn render(
    rules: &[Rule],
    names: &[String],
    aggregation: Aggregation,
    options: &RenderOptions,
) -> Vec<RuleRecord> {
    let mut entries: Vec<Entry> = rules
        .iter()
        .map(|rule| Entry {
            origin: rule.origin,
            record: RuleRecord {
                name: decorated_name(rule, names, options),
                description: rule.description.clone(),
                allow: rule.allow,
                protocol: rule.protocol.clone(),
                ports: rule.ports.to_string(),
                addresses: rule.addresses.to_string(),
            },
        })
        .collect();

    if options.join {
        let order = match aggregation {
            Aggregation::Address => [Field::Addresses, Field::Ports],
            Aggregation::Port => [Field::Ports, Field::Addresses],
        };
        for fixed in order {
            entries = join(entries, fixed);
        }
    }

    entries.into_iter().map(|e| e.record).collect()
}

fn decorated_name(rule: &Rule, names: &[String], options: &RenderOptions) -> String {
    let Some(format) = &options.except_format else {
        return rule.name.clone();
    };
    let culprits: Vec<&str> = rule
        .exceptions
        .iter()
        .filter(|(_, trim)| trim.any())
        .map(|(origin, _)| names.get(origin).map_or("", String::as_str))
        .collect();
    if culprits.is_empty() {
        return rule.name.clone();
    }
    format!("{}{}", rule.name, format.replacen('%', &culprits.join(", "), 1))
}

/// Fold entries that agree on `fixed` into the first of them, comma-joining
/// the other field.
fn join(entries: Vec<Entry>, fixed: Field) -> Vec<Entry> {
    let mut out: Vec<Entry> = Vec::with_capacity(entries.len());
    for entry in entries {
        let target = out.iter_mut().find(|e| {
            e.origin == entry.origin
                && e.record.protocol == entry.record.protocol
                && e.record.allow == entry.record.allow
                && text(&e.record, fixed) == text(&entry.record, fixed)
        });
        match target {
            Some(target) => {
                let (grown, extra) = match fixed {
                    Field::Ports => (&mut target.record.addresses, entry.record.addresses),
                    Field::Addresses => (&mut target.record.ports, entry.record.ports),
                };
                grown.push(',');
                grown.push_str(&extra);
            }
            None => out.push(entry),
        }
    }
    out
}

fn text(record: &RuleRecord, field: Field) -> &str {
    match field {
        Field::Ports => &record.ports,
        Field::Addresses => &record.addresses,
    }
}
