use std::net::Ipv6Addr;

use super::{
    error::ZoneError,
    record::{AddressHostnamePair, RecordKind},
    zone_map::ZoneMap,
};

pub const DEFAULT_IPV4_PREFIX: u32 = 24;
pub const DEFAULT_IPV6_PREFIX: u32 = 64;

const IPV4_SUFFIX: &str = "in-addr.arpa";
const IPV6_SUFFIX: &str = "ip6.arpa";

const IPV4_OCTETS: usize = 4;
const IPV6_NIBBLES: usize = 32;

/// Where an address lands in reverse DNS: its zone and the label inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseSplit {
    pub zone: String,
    pub host: String,
}

impl ReverseSplit {
    /// The full reverse name, e.g. `5.1.168.192.in-addr.arpa`.
    #[cfg(test)]
    pub fn pointer(&self) -> String {
        if self.host.is_empty() {
            self.zone.clone()
        } else {
            format!("{}.{}", self.host, self.zone)
        }
    }
}

/// Octets that make up an IPv4 zone. Anything at or past /32 gets a /24 zone.
const fn ipv4_zone_octets(prefix: u32) -> usize {
    if prefix >= 32 {
        3
    } else {
        (prefix / 8) as usize
    }
}

const fn ipv6_zone_nibbles(prefix: u32) -> usize {
    if prefix >= 128 {
        IPV6_NIBBLES
    } else {
        (prefix / 4) as usize
    }
}

/// The four octets of a dotted quad, kept as written so `001` stays `001`.
fn ipv4_octets(address: &str) -> Result<Vec<&str>, ZoneError> {
    let octets: Vec<&str> = address.split('.').collect();
    let is_octet =
        |octet: &&str| octet.bytes().all(|b| b.is_ascii_digit()) && octet.parse::<u8>().is_ok();

    if octets.len() == IPV4_OCTETS && octets.iter().all(is_octet) {
        Ok(octets)
    } else {
        Err(ZoneError::InvalidAddress {
            kind: RecordKind::A.to_string(),
            address: address.to_string(),
        })
    }
}

fn parse_ipv6(address: &str) -> Result<Ipv6Addr, ZoneError> {
    address.parse().map_err(|_| ZoneError::InvalidAddress {
        kind: RecordKind::AAAA.to_string(),
        address: address.to_string(),
    })
}

/// Splits an IPv4 address on the octet boundary at or below `prefix`.
///
/// `192.168.1.5` at /24 gives zone `1.168.192.in-addr.arpa` and host `5`.
/// Prefixes that are not a multiple of 8 round down, so /20 splits like /16.
pub fn split_ipv4(address: &str, prefix: u32) -> Result<ReverseSplit, ZoneError> {
    let octets = ipv4_octets(address)?;
    let zone_octets = ipv4_zone_octets(prefix);

    let mut zone_labels: Vec<&str> = octets[..zone_octets].iter().rev().copied().collect();
    zone_labels.push(IPV4_SUFFIX);

    let host_labels: Vec<&str> = octets[zone_octets..].iter().rev().copied().collect();

    Ok(ReverseSplit {
        zone: zone_labels.join("."),
        host: host_labels.join("."),
    })
}

/// The 32 nibbles of an IPv6 address in reverse-pointer order.
fn reverse_nibbles(address: &Ipv6Addr) -> Vec<String> {
    address
        .octets()
        .iter()
        .rev()
        .flat_map(|byte| [byte & 0x0f, byte >> 4])
        .map(|nibble| format!("{nibble:x}"))
        .collect()
}

/// Splits an IPv6 address on the nibble boundary at or below `prefix`.
///
/// Both halves are counted from the front of the reverse-pointer nibbles: the
/// zone is everything from index `prefix / 4` onwards plus `ip6.arpa`, the host
/// label is the first `32 - prefix / 4` nibbles. The two meet exactly at /64.
/// Other prefixes produce overlapping halves, and from /128 up the zone is the
/// bare `ip6.arpa` with an empty host label.
pub fn split_ipv6(address: &str, prefix: u32) -> Result<ReverseSplit, ZoneError> {
    let nibbles = reverse_nibbles(&parse_ipv6(address)?);

    let zone_nibbles = ipv6_zone_nibbles(prefix);
    let host_nibbles = IPV6_NIBBLES - zone_nibbles;

    let mut zone_labels: Vec<&str> = nibbles[zone_nibbles..]
        .iter()
        .map(String::as_str)
        .collect();
    zone_labels.push(IPV6_SUFFIX);

    Ok(ReverseSplit {
        zone: zone_labels.join("."),
        host: nibbles[..host_nibbles].join("."),
    })
}

pub fn fqdn(hostname: &str, domain: &str) -> String {
    format!("{hostname}.{domain}.")
}

fn build_zone_map(
    pairs: &[AddressHostnamePair],
    domain: &str,
    split: impl Fn(&str) -> Result<ReverseSplit, ZoneError>,
) -> Result<ZoneMap, ZoneError> {
    let mut zones = ZoneMap::new();
    for pair in pairs {
        let ReverseSplit { zone, host } = split(&pair.address)?;
        zones.insert(zone, host, fqdn(&pair.hostname, domain));
    }
    Ok(zones)
}

/// Groups IPv4 address/hostname pairs into reverse zones.
pub fn map_ipv4(
    pairs: &[AddressHostnamePair],
    domain: &str,
    prefix: u32,
) -> Result<ZoneMap, ZoneError> {
    build_zone_map(pairs, domain, |address| split_ipv4(address, prefix))
}

/// Groups IPv6 address/hostname pairs into reverse zones.
pub fn map_ipv6(
    pairs: &[AddressHostnamePair],
    domain: &str,
    prefix: u32,
) -> Result<ZoneMap, ZoneError> {
    build_zone_map(pairs, domain, |address| split_ipv6(address, prefix))
}
