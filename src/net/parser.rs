use std::net::IpAddr;

use ipnet::IpNet;

/// A single destination read from an allow/deny file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// A literal IP address without a prefix, e.g. "192.0.2.5" or "::1"
    Address(IpAddr),
    /// A literal CIDR network, e.g. "10.0.0.0/8"
    Network(IpNet),
    /// Anything else; validity is discovered at resolution time
    Hostname(String),
}

/// Classify one destination token
///
/// The decision order matters: a bare address parses first, then a CIDR
/// network, and everything that is neither is treated as a hostname. Tokens
/// that fail both parses are never rejected here; an unresolvable hostname
/// simply produces no addresses later.
///
/// A network with host bits set is normalized to its true network address
/// ("192.168.0.5/24" becomes "192.168.0.0/24").
///
/// # Arguments
/// * `token` - A trimmed, non-empty, non-comment line from a destination file
///
/// # Examples
/// ```
/// use egressgen::net::{Destination, classify};
///
/// assert!(matches!(classify("10.0.0.1"), Destination::Address(_)));
/// assert!(matches!(classify("10.0.0.0/8"), Destination::Network(_)));
/// assert!(matches!(classify("example.com"), Destination::Hostname(_)));
/// ```
pub fn classify(token: &str) -> Destination {
    if let Ok(addr) = token.parse::<IpAddr>() {
        return Destination::Address(addr);
    }

    if let Ok(net) = token.parse::<IpNet>() {
        return Destination::Network(net.trunc());
    }

    Destination::Hostname(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("192.0.2.5", "IPv4 address")]
    #[case("10.0.0.1", "private IPv4 address")]
    #[case("0.0.0.0", "zero IPv4 address")]
    #[case("255.255.255.255", "max IPv4 address")]
    #[case("::1", "IPv6 loopback")]
    #[case("2001:db8::1", "IPv6 compressed")]
    fn classify_literal_addresses(#[case] token: &str, #[case] _description: &str) {
        let expected = token.parse::<IpAddr>().unwrap();
        assert_eq!(classify(token), Destination::Address(expected));
    }

    #[rstest]
    #[case("10.0.0.0/8", "10.0.0.0/8", "IPv4 network")]
    #[case("192.168.0.0/24", "192.168.0.0/24", "IPv4 /24 network")]
    #[case("192.168.0.5/24", "192.168.0.0/24", "host bits cleared")]
    #[case("0.0.0.0/0", "0.0.0.0/0", "entire IPv4 space")]
    #[case("2001:db8::/32", "2001:db8::/32", "IPv6 network")]
    fn classify_literal_networks(
        #[case] token: &str,
        #[case] canonical: &str,
        #[case] _description: &str,
    ) {
        let expected = canonical.parse::<IpNet>().unwrap();
        assert_eq!(classify(token), Destination::Network(expected));
    }

    #[rstest]
    #[case("example.com", "plain domain")]
    #[case("sub.example.com", "subdomain")]
    #[case("my-host.internal", "domain with hyphen")]
    #[case("localhost", "bare host name")]
    #[case("999.999.999.999", "invalid IP falls through to hostname")]
    #[case("192.168.1", "incomplete IP falls through to hostname")]
    #[case("10.0.0.0/99", "invalid prefix falls through to hostname")]
    fn classify_hostnames(#[case] token: &str, #[case] _description: &str) {
        assert_eq!(classify(token), Destination::Hostname(token.to_string()));
    }
}
