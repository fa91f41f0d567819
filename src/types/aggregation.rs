use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use super::rect::Rect;
use super::rule::{Rule, Trim};
use super::scalar::Scalar;

/// Which axis is treated as primary when splitting and coalescing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Aggregation {
    /// Ports are primary, addresses secondary.
    Port,
    /// Addresses are primary, ports secondary.
    #[default]
    Address,
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aggregation::Port => f.write_str("port"),
            Aggregation::Address => f.write_str("ip"),
        }
    }
}

impl FromStr for Aggregation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "port" => Ok(Aggregation::Port),
            "ip" | "address" => Ok(Aggregation::Address),
            other => Err(format!("unknown aggregation '{other}', expected ip or port")),
        }
    }
}

/// Maps a rule's (port, address) pair onto a primary/secondary rectangle and
/// back. One implementation per [`Aggregation`] keeps the engine generic.
pub(crate) trait Orientation {
    type Primary: Scalar;
    type Secondary: Scalar;

    fn project(rule: &Rule) -> Rect<Self::Primary, Self::Secondary>;

    fn place(rule: &mut Rule, rect: Rect<Self::Primary, Self::Secondary>);
}

pub(crate) struct PortFirst;

pub(crate) struct AddressFirst;

impl Orientation for PortFirst {
    type Primary = u16;
    type Secondary = Ipv4Addr;

    fn project(rule: &Rule) -> Rect<u16, Ipv4Addr> {
        Rect::new(rule.ports, rule.addresses)
    }

    fn place(rule: &mut Rule, rect: Rect<u16, Ipv4Addr>) {
        rule.ports = rect.primary();
        rule.addresses = rect.secondary();
    }
}

impl Orientation for AddressFirst {
    type Primary = Ipv4Addr;
    type Secondary = u16;

    fn project(rule: &Rule) -> Rect<Ipv4Addr, u16> {
        Rect::new(rule.addresses, rule.ports)
    }

    fn place(rule: &mut Rule, rect: Rect<Ipv4Addr, u16>) {
        rule.addresses = rect.primary();
        rule.ports = rect.secondary();
    }
}

/// Axes on which `fragment` was genuinely cut: its span differs from both
/// the rule it came from and the rule that cut it.
pub(crate) fn trimmed(fragment: &Rule, loser: &Rule, cutter: &Rule) -> Trim {
    Trim {
        port: fragment.ports != loser.ports && fragment.ports != cutter.ports,
        address: fragment.addresses != loser.addresses && fragment.addresses != cutter.addresses,
    }
}
