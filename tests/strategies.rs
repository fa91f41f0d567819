use std::net::Ipv4Addr;

use fwresolve::{Rule, Span};
use proptest::prelude::*;

// --- Host grid ---
// ports     : 0..PORTS
// addresses : 10.0.0.1..=10.0.0.HOSTS (host addresses only, no .0)
// protocols : TCP, UDP
//
// --- Boundary grid ---
// ports     : 0..BOUNDARY_PORTS
// addresses : 10.0.0.250..=10.0.1.10, crossing the 10.0.1.0 network address

pub const PORTS: u16 = 40;
pub const HOSTS: u8 = 40;
pub const PROTOCOLS: &[&str] = &["TCP", "UDP"];

pub const BOUNDARY_PORTS: u16 = 8;
const BOUNDARY_FIRST: [u8; 4] = [10, 0, 0, 250];
const BOUNDARY_LEN: u32 = 17;

pub fn host(last: u8) -> Ipv4Addr {
    Ipv4Addr::new(10, 0, 0, last)
}

/// The `i`-th address of the boundary grid.
pub fn boundary_address(i: u32) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(Ipv4Addr::from(BOUNDARY_FIRST)) + i)
}

/// Every (port, address) point of the host grid.
pub fn grid() -> impl Iterator<Item = (u16, Ipv4Addr)> {
    (0..PORTS).flat_map(|port| (1..=HOSTS).map(move |last| (port, host(last))))
}

/// Every (port, address) point of the boundary grid.
pub fn boundary_grid() -> impl Iterator<Item = (u16, Ipv4Addr)> {
    (0..BOUNDARY_PORTS)
        .flat_map(|port| (0..BOUNDARY_LEN).map(move |i| (port, boundary_address(i))))
}

fn arb_port_span(ports: u16) -> impl Strategy<Value = Span<u16>> {
    (0..ports, 0..ports).prop_map(|(a, b)| Span::new(a.min(b), a.max(b)))
}

fn arb_host_span() -> impl Strategy<Value = Span<Ipv4Addr>> {
    (1..=HOSTS, 1..=HOSTS).prop_map(|(a, b)| Span::new(host(a.min(b)), host(a.max(b))))
}

fn arb_boundary_span() -> impl Strategy<Value = Span<Ipv4Addr>> {
    (0..BOUNDARY_LEN, 0..BOUNDARY_LEN).prop_map(|(a, b)| {
        Span::new(boundary_address(a.min(b)), boundary_address(a.max(b)))
    })
}

fn arb_rule_in(
    ports: impl Strategy<Value = Span<u16>>,
    addresses: impl Strategy<Value = Span<Ipv4Addr>>,
) -> impl Strategy<Value = Rule> {
    (prop::sample::select(PROTOCOLS), any::<bool>(), ports, addresses).prop_map(
        |(protocol, allow, ports, addresses)| {
            Rule::new(
                if allow { "allow" } else { "deny" },
                protocol,
                allow,
                ports,
                addresses,
            )
        },
    )
}

fn tagged(rules: Vec<Rule>) -> Vec<Rule> {
    rules
        .into_iter()
        .enumerate()
        .map(|(origin, rule)| rule.with_origin(origin))
        .collect()
}

/// Generate a priority-ordered rule list on the host grid, with origin tags
/// 0..n.
pub fn arb_rules() -> impl Strategy<Value = Vec<Rule>> {
    prop::collection::vec(arb_rule_in(arb_port_span(PORTS), arb_host_span()), 1..8)
        .prop_map(tagged)
}

/// Generate a priority-ordered rule list on the boundary grid. Rule bounds
/// may fall on 10.0.1.0.
pub fn arb_boundary_rules() -> impl Strategy<Value = Vec<Rule>> {
    prop::collection::vec(
        arb_rule_in(arb_port_span(BOUNDARY_PORTS), arb_boundary_span()),
        1..8,
    )
    .prop_map(tagged)
}

/// Action of the highest-priority rule covering a point, if any.
pub fn expected_action(rules: &[Rule], protocol: &str, port: u16, address: Ipv4Addr) -> Option<bool> {
    rules
        .iter()
        .find(|r| r.protocol == protocol && r.covers(port, address))
        .map(|r| r.allow)
}
