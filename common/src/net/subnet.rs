//! # Subnet Arithmetic
//!
//! Conversions between dotted-quad subnet masks, wildcard masks and CIDR
//! prefix lengths, plus the network-address derivation the correlator uses
//! for all of its subnet-membership checks.
//!
//! Router configurations hand these values around as text, so the public
//! functions take and return strings; malformed input surfaces as a
//! [`ParseAnomaly`] and the caller decides whether that means "no match"
//! or something worse.

use std::net::Ipv4Addr;

use crate::error::ParseAnomaly;

fn parse_addr(value: &str) -> Result<Ipv4Addr, ParseAnomaly> {
    value
        .parse()
        .map_err(|_| ParseAnomaly::Address(value.to_string()))
}

/// Parses a prefix length given either bare (`"26"`) or slash-prefixed
/// (`"/26"`), as route tables and interface listings mix both forms.
pub fn parse_prefix(value: &str) -> Result<u8, ParseAnomaly> {
    match value.trim_start_matches('/').parse::<u8>() {
        Ok(p) if p <= 32 => Ok(p),
        _ => Err(ParseAnomaly::Prefix(value.to_string())),
    }
}

fn mask_bits(prefix: u8) -> u32 {
    if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - u32::from(prefix.min(32)))
    }
}

/// Counts the leading run of the first bit value across the 32-bit
/// expansion of `mask`.
///
/// For a normal mask that is the run of 1s; handed a wildcard instead it
/// counts the leading 0s, which yields the same prefix length. Contiguity
/// is not validated. The all-zero mask is prefix 0 by definition.
pub fn mask_to_prefix(mask: &str) -> Result<u8, ParseAnomaly> {
    let bits = u32::from(parse_addr(mask)?);
    if bits == 0 {
        return Ok(0);
    }
    let run = if bits >> 31 == 1 {
        bits.leading_ones()
    } else {
        bits.leading_zeros()
    };
    Ok(run as u8)
}

/// `prefix` set bits followed by clear bits, regrouped as a dotted quad.
pub fn prefix_to_mask(prefix: u8) -> String {
    Ipv4Addr::from(mask_bits(prefix)).to_string()
}

/// Complements each octet, turning a wildcard mask into a subnet mask
/// (and vice versa).
pub fn wildcard_to_mask(wildcard: &str) -> Result<String, ParseAnomaly> {
    let inverted = parse_addr(wildcard)?.octets().map(|octet| 255 - octet);
    Ok(Ipv4Addr::from(inverted).to_string())
}

/// Network address of `addr` at `prefix` in `a.b.c.d/len` form.
///
/// A /32 returns the bare address with no suffix: host routes compare
/// against plain next-hop strings, so the suffix would only get in the
/// way of the correlator's equality checks.
pub fn network_of(addr: Ipv4Addr, prefix: u8) -> String {
    if prefix >= 32 {
        return addr.to_string();
    }
    let network = Ipv4Addr::from(u32::from(addr) & mask_bits(prefix));
    format!("{network}/{prefix}")
}

/// String-in, string-out form of [`network_of`]; `prefix` accepts `"26"`
/// or `"/26"`.
pub fn network_address(ip: &str, prefix: &str) -> Result<String, ParseAnomaly> {
    Ok(network_of(parse_addr(ip)?, parse_prefix(prefix)?))
}

/// True iff both addresses fall in the same network at `prefix`.
pub fn same_subnet(a: &str, b: &str, prefix: &str) -> Result<bool, ParseAnomaly> {
    same_subnet_at(a, b, parse_prefix(prefix)?)
}

/// [`same_subnet`] for callers that already hold a numeric prefix.
pub fn same_subnet_at(a: &str, b: &str, prefix: u8) -> Result<bool, ParseAnomaly> {
    Ok(network_of(parse_addr(a)?, prefix) == network_of(parse_addr(b)?, prefix))
}
