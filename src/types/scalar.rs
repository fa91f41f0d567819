use std::fmt;
use std::net::Ipv4Addr;

/// A totally ordered axis value with a discrete successor.
///
/// Successors decide where cuts land. Adjacency uses [`Scalar::next`]: two
/// spans touch when the start of one is the value right after the end of the
/// other.
pub trait Scalar: Copy + Ord + fmt::Debug + fmt::Display {
    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;

    /// The next value in order, or `None` at [`Scalar::MAX`].
    fn successor(self) -> Option<Self>;

    /// The previous value in order, or `None` at [`Scalar::MIN`].
    fn predecessor(self) -> Option<Self>;

    /// The value immediately after this one, skipping nothing. Used for
    /// adjacency, where a skipped value would be claimed by the join.
    fn next(self) -> Option<Self> {
        self.successor()
    }
}

impl Scalar for u16 {
    const MIN: Self = u16::MIN;
    const MAX: Self = u16::MAX;

    fn successor(self) -> Option<Self> {
        self.checked_add(1)
    }

    fn predecessor(self) -> Option<Self> {
        self.checked_sub(1)
    }
}

/// Addresses step through host addresses only. An address whose final octet
/// is zero names a network, so stepping skips over it: the successor of
/// `192.168.200.255` is `192.168.201.1`.
impl Scalar for Ipv4Addr {
    const MIN: Self = Ipv4Addr::new(0, 0, 0, 0);
    const MAX: Self = Ipv4Addr::new(255, 255, 255, 255);

    fn successor(self) -> Option<Self> {
        let mut next = u32::from(self).checked_add(1)?;
        if is_network(next) {
            next = next.checked_add(1)?;
        }
        Some(Ipv4Addr::from(next))
    }

    fn predecessor(self) -> Option<Self> {
        let mut prev = u32::from(self).checked_sub(1)?;
        if is_network(prev) {
            prev = prev.checked_sub(1)?;
        }
        Some(Ipv4Addr::from(prev))
    }

    fn next(self) -> Option<Self> {
        u32::from(self).checked_add(1).map(Ipv4Addr::from)
    }
}

fn is_network(addr: u32) -> bool {
    addr & 0xff == 0
}
