//! Network address classification.
//!
//! Provides [`AddressScope`] for naming the range a parsed address belongs to,
//! along with the [`classify`] and [`is_public`] predicates used by the
//! filtering pipeline.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Range category of a raw address string.
///
/// Every variant except [`AddressScope::Public`] is excluded from the export.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AddressScope {
    /// Routable on the general internet.
    Public,
    /// RFC 1918 IPv4 range or RFC 4193 unique-local IPv6 range.
    Private,
    /// IANA special-purpose block (shared space, documentation, benchmarking, future use).
    Reserved,
    /// 127.0.0.0/8 or ::1.
    Loopback,
    /// 169.254.0.0/16 or fe80::/10.
    LinkLocal,
    /// 224.0.0.0/4 or ff00::/8.
    Multicast,
    /// Deprecated IPv6 site-local block fec0::/10.
    SiteLocal,
    /// Not parseable as an IPv4 or IPv6 address.
    Invalid,
}

impl AddressScope {
    /// True only for addresses routable on the public internet.
    pub fn is_public(&self) -> bool {
        matches!(self, AddressScope::Public)
    }

    /// Short label used in verdict lines.
    pub fn label(&self) -> &'static str {
        match self {
            AddressScope::Public => "public",
            AddressScope::Private => "private",
            AddressScope::Reserved => "reserved",
            AddressScope::Loopback => "loopback",
            AddressScope::LinkLocal => "link-local",
            AddressScope::Multicast => "multicast",
            AddressScope::SiteLocal => "site-local",
            AddressScope::Invalid => "invalid",
        }
    }
}

impl std::fmt::Display for AddressScope {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify a raw address string into its range category.
///
/// Surrounding whitespace is trimmed before parsing. A string that does not
/// parse as IPv4 or IPv6 classifies as [`AddressScope::Invalid`], so malformed
/// input is excluded rather than reported as public.
///
/// # Examples
/// ```
/// use public_ip_summary::models::{classify, AddressScope};
/// assert_eq!(classify("8.8.8.8"), AddressScope::Public);
/// assert_eq!(classify("192.168.1.1"), AddressScope::Private);
/// assert_eq!(classify("not-an-ip"), AddressScope::Invalid);
/// ```
pub fn classify(raw: &str) -> AddressScope {
    match raw.trim().parse::<IpAddr>() {
        Ok(IpAddr::V4(addr)) => classify_v4(addr),
        Ok(IpAddr::V6(addr)) => classify_v6(addr),
        Err(_) => AddressScope::Invalid,
    }
}

/// True if `raw` parses as an address routable on the public internet.
pub fn is_public(raw: &str) -> bool {
    classify(raw).is_public()
}

fn classify_v4(addr: Ipv4Addr) -> AddressScope {
    let octets = addr.octets();
    if addr.is_loopback() {
        AddressScope::Loopback
    } else if addr.is_link_local() {
        AddressScope::LinkLocal
    } else if addr.is_multicast() {
        AddressScope::Multicast
    } else if addr.is_private() {
        AddressScope::Private
    } else if addr.is_broadcast()
        || addr.is_documentation()
        || octets[0] == 0                                         // "this network" 0.0.0.0/8
        || (octets[0] == 100 && octets[1] & 0xC0 == 64)           // shared space 100.64.0.0/10
        || (octets[0] == 192 && octets[1] == 0 && octets[2] == 0) // IETF protocol 192.0.0.0/24
        || (octets[0] == 198 && octets[1] & 0xFE == 18)           // benchmarking 198.18.0.0/15
        || octets[0] >= 240                                       // future use 240.0.0.0/4
    {
        AddressScope::Reserved
    } else {
        AddressScope::Public
    }
}

fn classify_v6(addr: Ipv6Addr) -> AddressScope {
    // IPv4-mapped literals carry the semantics of the embedded IPv4 address.
    if let Some(mapped) = addr.to_ipv4_mapped() {
        return classify_v4(mapped);
    }
    let segments = addr.segments();
    if addr.is_loopback() {
        AddressScope::Loopback
    } else if addr.is_multicast() {
        AddressScope::Multicast
    } else if addr.is_unicast_link_local() {
        AddressScope::LinkLocal
    } else if segments[0] & 0xFFC0 == 0xFEC0 {
        // fec0::/10, no std predicate since its deprecation
        AddressScope::SiteLocal
    } else if addr.is_unique_local() {
        AddressScope::Private
    } else if addr.is_unspecified() || (segments[0] == 0x2001 && segments[1] == 0x0DB8) {
        AddressScope::Reserved
    } else {
        AddressScope::Public
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_private_v4() {
        assert_eq!(classify("10.0.0.1"), AddressScope::Private);
        assert_eq!(classify("10.255.255.255"), AddressScope::Private);
        assert_eq!(classify("172.16.0.1"), AddressScope::Private);
        assert_eq!(classify("172.31.255.255"), AddressScope::Private);
        assert_eq!(classify("192.168.1.1"), AddressScope::Private);
        assert_eq!(classify("192.168.100.50"), AddressScope::Private);
        // just outside 172.16.0.0/12
        assert_eq!(classify("172.32.0.1"), AddressScope::Public);
        assert_eq!(classify("172.15.255.255"), AddressScope::Public);
    }

    #[test]
    fn test_classify_public_v4() {
        assert_eq!(classify("8.8.8.8"), AddressScope::Public);
        assert_eq!(classify("1.1.1.1"), AddressScope::Public);
        assert_eq!(classify("93.184.216.34"), AddressScope::Public);
        assert_eq!(classify("208.67.222.222"), AddressScope::Public);
        assert_eq!(classify("142.251.41.14"), AddressScope::Public);
    }

    #[test]
    fn test_classify_loopback_linklocal_multicast_v4() {
        assert_eq!(classify("127.0.0.1"), AddressScope::Loopback);
        assert_eq!(classify("127.255.255.254"), AddressScope::Loopback);
        assert_eq!(classify("169.254.1.1"), AddressScope::LinkLocal);
        assert_eq!(classify("224.0.0.1"), AddressScope::Multicast);
        assert_eq!(classify("239.255.255.255"), AddressScope::Multicast);
    }

    #[test]
    fn test_classify_reserved_v4() {
        assert_eq!(classify("0.0.0.0"), AddressScope::Reserved);
        assert_eq!(classify("0.1.2.3"), AddressScope::Reserved);
        assert_eq!(classify("100.64.0.1"), AddressScope::Reserved);
        assert_eq!(classify("100.127.255.255"), AddressScope::Reserved);
        assert_eq!(classify("100.128.0.1"), AddressScope::Public);
        assert_eq!(classify("192.0.0.1"), AddressScope::Reserved);
        assert_eq!(classify("192.0.2.1"), AddressScope::Reserved);
        assert_eq!(classify("198.51.100.7"), AddressScope::Reserved);
        assert_eq!(classify("203.0.113.9"), AddressScope::Reserved);
        assert_eq!(classify("198.18.0.1"), AddressScope::Reserved);
        assert_eq!(classify("198.19.255.255"), AddressScope::Reserved);
        assert_eq!(classify("198.20.0.1"), AddressScope::Public);
        assert_eq!(classify("240.0.0.1"), AddressScope::Reserved);
        assert_eq!(classify("255.255.255.255"), AddressScope::Reserved);
    }

    #[test]
    fn test_classify_v6() {
        assert_eq!(classify("::1"), AddressScope::Loopback);
        assert_eq!(classify("::"), AddressScope::Reserved);
        assert_eq!(classify("fe80::1"), AddressScope::LinkLocal);
        assert_eq!(classify("ff02::1"), AddressScope::Multicast);
        assert_eq!(classify("fc00::1"), AddressScope::Private);
        assert_eq!(classify("fd12:3456:789a::1"), AddressScope::Private);
        assert_eq!(classify("fec0::1"), AddressScope::SiteLocal);
        assert_eq!(classify("2001:db8::1"), AddressScope::Reserved);
        assert_eq!(classify("2001:4860:4860::8888"), AddressScope::Public);
        assert_eq!(classify("2606:4700:4700::1111"), AddressScope::Public);
    }

    #[test]
    fn test_classify_ipv4_mapped() {
        assert_eq!(classify("::ffff:192.168.1.1"), AddressScope::Private);
        assert_eq!(classify("::ffff:8.8.8.8"), AddressScope::Public);
        assert_eq!(classify("::ffff:127.0.0.1"), AddressScope::Loopback);
    }

    #[test]
    fn test_classify_invalid() {
        assert_eq!(classify(""), AddressScope::Invalid);
        assert_eq!(classify("not-an-ip"), AddressScope::Invalid);
        assert_eq!(classify("256.1.1.1"), AddressScope::Invalid);
        assert_eq!(classify("10.0.0"), AddressScope::Invalid);
        assert_eq!(classify("8.8.8.8/24"), AddressScope::Invalid);
        assert_eq!(classify("example.com"), AddressScope::Invalid);
    }

    #[test]
    fn test_is_public() {
        assert!(is_public("8.8.8.8"));
        assert!(is_public("2001:4860:4860::8888"));
        assert!(!is_public("192.168.1.1"));
        assert!(!is_public("10.0.0.1"));
        assert!(!is_public("172.16.0.1"));
        assert!(!is_public("127.0.0.1"));
        assert!(!is_public("169.254.1.1"));
        assert!(!is_public("224.0.0.1"));
        assert!(!is_public("::1"));
        assert!(!is_public("not-an-ip"));
    }

    #[test]
    fn test_is_public_trims_whitespace() {
        assert!(is_public("  8.8.8.8  "));
        assert!(!is_public("\t10.0.0.1\n"));
        assert!(!is_public("   "));
    }

    #[test]
    fn test_scope_labels() {
        assert_eq!(AddressScope::Public.label(), "public");
        assert_eq!(AddressScope::SiteLocal.label(), "site-local");
        assert_eq!(format!("{}", AddressScope::Invalid), "invalid");
    }
}
