use super::scalar::Scalar;
use super::span::Span;

/// An axis-aligned rectangle: a primary span paired with a secondary span.
///
/// Which concrete axis sits in which slot is the aggregation mode's choice;
/// all arithmetic here is axis-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "P: Scalar + serde::Deserialize<'de>, S: Scalar + serde::Deserialize<'de>"))
)]
pub struct Rect<P, S> {
    primary: Span<P>,
    secondary: Span<S>,
}

impl<P: Scalar, S: Scalar> Rect<P, S> {
    #[must_use]
    pub fn new(primary: Span<P>, secondary: Span<S>) -> Self {
        Self { primary, secondary }
    }

    #[must_use]
    pub fn primary(&self) -> Span<P> {
        self.primary
    }

    #[must_use]
    pub fn secondary(&self) -> Span<S> {
        self.secondary
    }

    #[must_use]
    pub fn contains_point(&self, primary: P, secondary: S) -> bool {
        self.primary.contains(primary) && self.secondary.contains(secondary)
    }

    /// Whether `other` lies entirely inside this rectangle.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.primary.contains_span(&other.primary) && self.secondary.contains_span(&other.secondary)
    }

    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.primary.overlaps(&other.primary) && self.secondary.overlaps(&other.secondary)
    }

    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        Some(Self::new(
            self.primary.intersection(&other.primary)?,
            self.secondary.intersection(&other.secondary)?,
        ))
    }

    /// Subtract `cutter` from this rectangle.
    ///
    /// Returns `[self]` when the two do not overlap and `[]` when `cutter`
    /// covers `self`. Otherwise returns up to four disjoint pieces, in this
    /// order: below the overlap on the primary axis, above it on the primary
    /// axis, then (restricted to the overlap's primary span) below and above
    /// it on the secondary axis.
    #[must_use]
    pub fn difference(&self, cutter: &Self) -> Vec<Self> {
        let Some(overlap) = self.intersection(cutter) else {
            return vec![*self];
        };
        if cutter.contains(self) {
            return Vec::new();
        }

        let mut pieces = Vec::with_capacity(4);
        if let Some(primary) = self.primary.below(overlap.primary.start()) {
            pieces.push(Self::new(primary, self.secondary));
        }
        if let Some(primary) = self.primary.above(overlap.primary.end()) {
            pieces.push(Self::new(primary, self.secondary));
        }
        if let Some(secondary) = self.secondary.below(overlap.secondary.start()) {
            pieces.push(Self::new(overlap.primary, secondary));
        }
        if let Some(secondary) = self.secondary.above(overlap.secondary.end()) {
            pieces.push(Self::new(overlap.primary, secondary));
        }
        pieces
    }

    /// Join with a rectangle sharing the same primary span whose secondary
    /// span touches this one.
    #[must_use]
    pub fn join_secondary(&self, other: &Self) -> Option<Self> {
        if self.primary != other.primary {
            return None;
        }
        Some(Self::new(self.primary, self.secondary.join(&other.secondary)?))
    }

    /// Join with a rectangle sharing the same secondary span whose primary
    /// span touches this one.
    #[must_use]
    pub fn join_primary(&self, other: &Self) -> Option<Self> {
        if self.secondary != other.secondary {
            return None;
        }
        Some(Self::new(self.primary.join(&other.primary)?, self.secondary))
    }
}
