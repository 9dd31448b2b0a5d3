//! Network address generator.

use datum_core::Datum;
use rand::Rng;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Generate an `inet` value: an IPv4 or IPv6 address with a prefix length
/// valid for its family. Host addresses carry the full-length prefix.
pub fn generate_inet<R: Rng>(rng: &mut R) -> Datum {
    let (addr, max_prefix) = if rng.gen_bool(0.5) {
        (IpAddr::V4(Ipv4Addr::from(rng.gen::<u32>())), 32)
    } else {
        (IpAddr::V6(Ipv6Addr::from(rng.gen::<u128>())), 128)
    };

    let prefix = if rng.gen_bool(0.5) {
        max_prefix
    } else {
        rng.gen_range(0..=max_prefix)
    };

    Datum::Inet { addr, prefix }
}
