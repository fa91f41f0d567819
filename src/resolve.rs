use tracing::debug;

use crate::types::{AddressFirst, Aggregation, Orientation, PortFirst};
use crate::Rule;

/// Resolve a priority-ordered rule list into non-overlapping, coalesced
/// rules.
///
/// `rules[0]` has the highest priority. Wherever rules of the same protocol
/// but different action overlap, the higher-priority action wins. The result
/// is ordered by origin tag, then protocol, then rectangle in aggregation
/// order.
///
/// # Example
///
/// ```
/// use std::net::Ipv4Addr;
/// use fwresolve::{Aggregation, Rule, Span, resolve};
///
/// let subnet = Span::new(Ipv4Addr::new(192, 168, 200, 1), Ipv4Addr::new(192, 168, 200, 255));
/// let rules = vec![
///     Rule::new("allow smb", "TCP", true, Span::point(445), subnet).with_origin(0),
///     Rule::new("deny rest", "TCP", false, Span::full(), subnet).with_origin(1),
/// ];
///
/// let resolved = resolve(rules, Aggregation::Port);
/// assert_eq!(resolved.len(), 3);
/// assert_eq!(resolved[1].ports, Span::new(0, 444));
/// assert_eq!(resolved[2].ports, Span::new(446, 65535));
/// ```
#[must_use]
pub fn resolve(rules: Vec<Rule>, aggregation: Aggregation) -> Vec<Rule> {
    debug!(rules = rules.len(), %aggregation, "resolving rules");
    match aggregation {
        Aggregation::Port => run::<PortFirst>(rules),
        Aggregation::Address => run::<AddressFirst>(rules),
    }
}

/// Split lower-priority rules around conflicting higher-priority ones,
/// without pruning or coalescing.
#[must_use]
pub fn overlay(rules: Vec<Rule>, aggregation: Aggregation) -> Vec<Rule> {
    match aggregation {
        Aggregation::Port => crate::overlay::overlay::<PortFirst>(rules),
        Aggregation::Address => crate::overlay::overlay::<AddressFirst>(rules),
    }
}

/// Remove rules fully covered by another rule of the same protocol and
/// action.
#[must_use]
pub fn prune(rules: Vec<Rule>) -> Vec<Rule> {
    crate::overlay::prune(rules)
}

/// Merge adjacent rules of the same origin, protocol and action.
///
/// Coalescing its own output again merges nothing.
#[must_use]
pub fn coalesce(rules: Vec<Rule>, aggregation: Aggregation) -> Vec<Rule> {
    match aggregation {
        Aggregation::Port => crate::coalesce::coalesce::<PortFirst>(rules),
        Aggregation::Address => crate::coalesce::coalesce::<AddressFirst>(rules),
    }
}

fn run<O: Orientation>(rules: Vec<Rule>) -> Vec<Rule> {
    let resolved = crate::overlay::prune(crate::overlay::overlay::<O>(rules));
    debug_assert!(
        !has_conflict(&resolved),
        "overlay left rules of different action overlapping"
    );

    let mut out = crate::coalesce::coalesce::<O>(resolved);
    debug_assert!(
        !has_conflict(&out),
        "coalescing joined rules back over a conflicting rule"
    );
    out.sort_by(|a, b| {
        a.origin
            .cmp(&b.origin)
            .then_with(|| a.protocol.cmp(&b.protocol))
            .then_with(|| O::project(a).cmp(&O::project(b)))
    });
    out
}

fn has_conflict(rules: &[Rule]) -> bool {
    rules.iter().enumerate().any(|(i, a)| {
        rules[i + 1..]
            .iter()
            .any(|b| a.protocol == b.protocol && a.allow != b.allow && a.overlaps(b))
    })
}
