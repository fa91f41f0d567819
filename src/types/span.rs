use std::fmt;

use super::scalar::Scalar;

/// A closed interval `[start, end]` over one [`Scalar`] axis.
///
/// The bounds are private so that `start <= end` holds for every span in
/// existence. Spans order lexicographically by `(start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawSpan<T>",
        bound(deserialize = "T: Scalar + serde::Deserialize<'de>")
    )
)]
pub struct Span<T> {
    start: T,
    end: T,
}

impl<T: Scalar> Span<T> {
    /// Create a span covering `start..=end`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`. Inverted spans are a caller bug; use
    /// [`Span::try_new`] for untrusted bounds.
    #[must_use]
    pub fn new(start: T, end: T) -> Self {
        assert!(start <= end, "inverted span: {start} > {end}");
        Self { start, end }
    }

    /// Create a span, or `None` if `start > end`.
    #[must_use]
    pub fn try_new(start: T, end: T) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// A span holding a single value.
    #[must_use]
    pub fn point(value: T) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    /// The span covering the whole axis.
    #[must_use]
    pub fn full() -> Self {
        Self {
            start: T::MIN,
            end: T::MAX,
        }
    }

    #[must_use]
    pub fn start(&self) -> T {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> T {
        self.end
    }

    #[must_use]
    pub fn is_point(&self) -> bool {
        self.start == self.end
    }

    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        self.start <= value && value <= self.end
    }

    /// Whether `other` lies entirely inside this span.
    #[must_use]
    pub fn contains_span(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        Self::try_new(self.start.max(other.start), self.end.min(other.end))
    }

    /// The part of this span strictly below `at`.
    #[must_use]
    pub fn below(&self, at: T) -> Option<Self> {
        if at <= self.start {
            return None;
        }
        let end = at.predecessor()?.min(self.end);
        Self::try_new(self.start, end)
    }

    /// The part of this span strictly above `at`.
    #[must_use]
    pub fn above(&self, at: T) -> Option<Self> {
        if at >= self.end {
            return None;
        }
        let start = at.successor()?.max(self.start);
        Self::try_new(start, self.end)
    }

    /// Whether `other` starts right after this span ends, with no gap.
    /// Values that [`Scalar::successor`] skips still count as a gap.
    #[must_use]
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        self.end.next() == Some(other.start)
    }

    /// Join two spans that touch end-to-start in either order.
    #[must_use]
    pub fn join(&self, other: &Self) -> Option<Self> {
        if self.is_adjacent_to(other) {
            Some(Self::new(self.start, other.end))
        } else if other.is_adjacent_to(self) {
            Some(Self::new(other.start, self.end))
        } else {
            None
        }
    }
}

impl<T: Scalar> fmt::Display for Span<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_point() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Unchecked bounds as they arrive from a deserializer.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSpan<T> {
    start: T,
    end: T,
}

#[cfg(feature = "serde")]
impl<T: Scalar> TryFrom<RawSpan<T>> for Span<T> {
    type Error = String;

    fn try_from(raw: RawSpan<T>) -> Result<Self, Self::Error> {
        Span::try_new(raw.start, raw.end)
            .ok_or_else(|| format!("inverted span: {} > {}", raw.start, raw.end))
    }
}
