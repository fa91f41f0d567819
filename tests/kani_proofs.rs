#![cfg(kani)]
//! Kani proof harnesses for span arithmetic on the port axis.
//!
//! Every cut in the engine reduces to `Span::below`/`Span::above` around an
//! overlap, and every merge to `Span::join`. These harnesses check, for all
//! `u16` bounds, that cuts never reach into the cut point, never leave the
//! original span, and that joined spans cover exactly their parts.
//!
//! Run with: `cargo kani --tests --harness <harness_name>`

use fwresolve::Span;

fn any_span() -> Span<u16> {
    let start: u16 = kani::any();
    let end: u16 = kani::any();
    kani::assume(start <= end);
    Span::new(start, end)
}

#[kani::proof]
fn below_stays_inside_and_under_cut() {
    let span = any_span();
    let at: u16 = kani::any();
    if let Some(below) = span.below(at) {
        assert!(span.contains_span(&below));
        assert!(below.end() < at);
        assert!(below.start() == span.start());
    }
}

#[kani::proof]
fn above_stays_inside_and_over_cut() {
    let span = any_span();
    let at: u16 = kani::any();
    if let Some(above) = span.above(at) {
        assert!(span.contains_span(&above));
        assert!(above.start() > at);
        assert!(above.end() == span.end());
    }
}

#[kani::proof]
fn below_and_above_cover_everything_but_the_cut() {
    let span = any_span();
    let at: u16 = kani::any();
    kani::assume(span.contains(at));
    let x: u16 = kani::any();
    kani::assume(span.contains(x) && x != at);

    let in_below = span.below(at).is_some_and(|s| s.contains(x));
    let in_above = span.above(at).is_some_and(|s| s.contains(x));
    assert!(in_below != in_above);
}

#[kani::proof]
fn join_covers_exactly_both_parts() {
    let a = any_span();
    let b = any_span();
    if let Some(joined) = a.join(&b) {
        let x: u16 = kani::any();
        assert_eq!(joined.contains(x), a.contains(x) || b.contains(x));
        assert!(!a.overlaps(&b));
    }
}
