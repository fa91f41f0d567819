//! Textual port and address range lists.

mod error;
mod grammar;

use std::net::Ipv4Addr;

use winnow::Parser;

pub use error::ParseError;

use crate::Span;

/// Parse a comma-separated list of ports or port ranges, e.g.
/// `"80,443,8000-8080"`.
///
/// # Errors
///
/// Returns [`ParseError`] on malformed input, an out-of-range port, or a
/// range whose start is after its end.
pub fn ports(input: &str) -> Result<Vec<Span<u16>>, ParseError> {
    let bounds = grammar::port_list
        .parse(input)
        .map_err(ParseError::from)?;
    spans(bounds)
}

/// Parse a comma-separated list of IPv4 addresses or address ranges, e.g.
/// `"192.168.0.1-192.168.255.255,10.0.0.1"`.
///
/// # Errors
///
/// Returns [`ParseError`] on malformed input or a range whose start is after
/// its end.
pub fn addresses(input: &str) -> Result<Vec<Span<Ipv4Addr>>, ParseError> {
    let bounds = grammar::address_list
        .parse(input)
        .map_err(ParseError::from)?;
    spans(bounds)
}

fn spans<T: crate::Scalar>(bounds: Vec<(T, T)>) -> Result<Vec<Span<T>>, ParseError> {
    bounds
        .into_iter()
        .map(|(start, end)| {
            Span::try_new(start, end).ok_or_else(|| ParseError::inverted(start, end))
        })
        .collect()
}
