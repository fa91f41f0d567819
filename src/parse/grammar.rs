use std::net::Ipv4Addr;

use winnow::ascii::{dec_uint, space0};
use winnow::combinator::{cut_err, delimited, opt, preceded, separated};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;

// -- Whitespace -------------------------------------------------------------

fn blank(input: &mut &str) -> ModalResult<()> {
    space0.void().parse_next(input)
}

// -- Scalars ----------------------------------------------------------------

fn port(input: &mut &str) -> ModalResult<u16> {
    dec_uint::<_, u16, _>
        .context(StrContext::Expected(StrContextValue::Description(
            "port number",
        )))
        .parse_next(input)
}

fn octet(input: &mut &str) -> ModalResult<u8> {
    dec_uint::<_, u8, _>.parse_next(input)
}

fn address(input: &mut &str) -> ModalResult<Ipv4Addr> {
    (octet, '.', octet, '.', octet, '.', octet)
        .map(|(a, _, b, _, c, _, d)| Ipv4Addr::new(a, b, c, d))
        .context(StrContext::Expected(StrContextValue::Description(
            "IPv4 address",
        )))
        .parse_next(input)
}

// -- Ranges (`a` or `a-b`) --------------------------------------------------

fn port_range(input: &mut &str) -> ModalResult<(u16, u16)> {
    let start = delimited(blank, port, blank).parse_next(input)?;
    let end = opt(preceded('-', cut_err(delimited(blank, port, blank)))).parse_next(input)?;
    Ok((start, end.unwrap_or(start)))
}

fn address_range(input: &mut &str) -> ModalResult<(Ipv4Addr, Ipv4Addr)> {
    let start = delimited(blank, address, blank).parse_next(input)?;
    let end =
        opt(preceded('-', cut_err(delimited(blank, address, blank)))).parse_next(input)?;
    Ok((start, end.unwrap_or(start)))
}

// -- Lists ------------------------------------------------------------------

pub(super) fn port_list(input: &mut &str) -> ModalResult<Vec<(u16, u16)>> {
    separated(1.., port_range, ',').parse_next(input)
}

pub(super) fn address_list(input: &mut &str) -> ModalResult<Vec<(Ipv4Addr, Ipv4Addr)>> {
    separated(1.., address_range, ',').parse_next(input)
}
