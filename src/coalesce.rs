use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::types::{Orientation, Rect};
use crate::Rule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sweep {
    /// Fix the primary span, grow along the secondary axis.
    Primary,
    /// Fix the secondary span, grow along the primary axis.
    Secondary,
}

/// Merge adjacent rectangles of the same origin, protocol and action.
///
/// Runs a primary sweep then a secondary sweep, each to its own fixed point,
/// and repeats the pair until neither merges anything.
pub(crate) fn coalesce<O: Orientation>(mut rules: Vec<Rule>) -> Vec<Rule> {
    let before = rules.len();
    loop {
        let primary = sweep::<O>(&mut rules, Sweep::Primary);
        let secondary = sweep::<O>(&mut rules, Sweep::Secondary);
        if primary + secondary == 0 {
            break;
        }
    }
    debug!(before, after = rules.len(), "coalesced rules");
    rules
}

/// Merge pairs until none is left. Returns how many merges happened.
fn sweep<O: Orientation>(rules: &mut Vec<Rule>, sweep: Sweep) -> usize {
    let mut merges = 0;
    loop {
        rules.sort_by(|a, b| sweep_order::<O>(a, b, sweep));
        let Some((keep, drop, joined)) = find_join::<O>(rules, sweep) else {
            return merges;
        };

        let gone = rules.swap_remove(drop);
        let survivor = &mut rules[keep];
        trace!(origin = survivor.origin, ?sweep, "merged fragments");
        O::place(survivor, joined);
        survivor.original = survivor.original && gone.original;
        survivor.exceptions.merge(&gone.exceptions);
        merges += 1;
    }
}

/// Sort key: protocol, origin, then the fixed span, then the growing one.
fn sweep_order<O: Orientation>(a: &Rule, b: &Rule, sweep: Sweep) -> Ordering {
    let (ra, rb) = (O::project(a), O::project(b));
    a.protocol
        .cmp(&b.protocol)
        .then(a.origin.cmp(&b.origin))
        .then_with(|| match sweep {
            Sweep::Primary => ra.cmp(&rb),
            Sweep::Secondary => (ra.secondary(), ra.primary()).cmp(&(rb.secondary(), rb.primary())),
        })
}

/// First pair (in sorted order) that can be joined: the index kept, the
/// index dropped, and the joined rectangle.
fn find_join<O: Orientation>(
    rules: &[Rule],
    sweep: Sweep,
) -> Option<(usize, usize, Rect<O::Primary, O::Secondary>)> {
    for (i, a) in rules.iter().enumerate() {
        let ra = O::project(a);
        for (k, b) in rules.iter().enumerate().skip(i + 1) {
            if a.protocol != b.protocol || a.origin != b.origin {
                // Sorted by (protocol, origin): nothing further can match.
                break;
            }
            if a.allow != b.allow {
                continue;
            }
            let rb = O::project(b);
            let joined = match sweep {
                Sweep::Primary => ra.join_secondary(&rb),
                Sweep::Secondary => ra.join_primary(&rb),
            };
            if let Some(joined) = joined {
                return Some((i, k, joined));
            }
        }
    }
    None
}
