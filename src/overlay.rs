use tracing::{debug, trace};

use crate::types::{Orientation, Rule, trimmed};

/// Resolve conflicts between rules of different action.
///
/// `rules` is in priority order, index 0 winning. Every lower-priority rule
/// that conflicts with a higher-priority one (same protocol, other action)
/// is replaced by the parts of its rectangle the winner does not cover.
/// Same-action overlaps are left alone.
pub(crate) fn overlay<O: Orientation>(rules: Vec<Rule>) -> Vec<Rule> {
    let mut work = rules;
    let input = work.len();

    for i in (0..input.saturating_sub(1)).rev() {
        let tail = work.split_off(i + 1);
        let cutter = &work[i];

        let mut rebuilt = Vec::with_capacity(tail.len());
        for loser in tail {
            if loser.protocol != cutter.protocol || loser.allow == cutter.allow {
                rebuilt.push(loser);
                continue;
            }
            rebuilt.extend(split::<O>(cutter, loser));
        }
        work.extend(rebuilt);
    }

    debug!(input, fragments = work.len(), "overlay resolved");
    work
}

/// Cut `cutter`'s rectangle out of `loser`, recording provenance on the
/// fragments that lost territory.
fn split<O: Orientation>(cutter: &Rule, loser: Rule) -> Vec<Rule> {
    let shape = O::project(&loser);
    let pieces = shape.difference(&O::project(cutter));

    if let [only] = pieces.as_slice()
        && *only == shape
    {
        return vec![loser];
    }

    trace!(
        cutter = cutter.origin,
        loser = loser.origin,
        pieces = pieces.len(),
        "split rule"
    );

    pieces
        .into_iter()
        .map(|piece| {
            let mut fragment = loser.clone();
            O::place(&mut fragment, piece);
            fragment.original = false;

            let trim = trimmed(&fragment, &loser, cutter);
            if cutter.original && trim.any() {
                fragment.exceptions.record(cutter.origin, trim);
            }
            fragment
        })
        .collect()
}

/// Drop every rule whose rectangle lies inside another surviving rule of the
/// same protocol and action.
///
/// Candidates are visited from the back, so of two identical rules the
/// earlier one is kept.
pub(crate) fn prune(rules: Vec<Rule>) -> Vec<Rule> {
    let mut keep = vec![true; rules.len()];

    for i in (0..rules.len()).rev() {
        let covered = rules.iter().enumerate().any(|(k, other)| {
            k != i && keep[k] && other.agrees_with(&rules[i]) && other.contains(&rules[i])
        });
        if covered {
            keep[i] = false;
        }
    }

    let before = rules.len();
    let kept: Vec<Rule> = rules
        .into_iter()
        .zip(keep)
        .filter_map(|(rule, keep)| keep.then_some(rule))
        .collect();
    debug!(before, after = kept.len(), "pruned redundant rules");
    kept
}
