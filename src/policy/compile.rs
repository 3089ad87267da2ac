use ipnet::IpNet;

use crate::net::{Destination, DnsResolver, classify};

use super::model::{EgressNetworkPolicy, EgressRule, Polarity};

/// Compile one destination file's contents into an ordered rule sequence
///
/// Each non-comment, non-blank line yields zero or more rules with the file's
/// polarity: one rule for a literal address (full-length prefix) or network
/// (its own prefix, canonicalized), and one rule per resolved address for a
/// hostname, in resolver order. A hostname that fails to resolve contributes
/// nothing; the failure is logged and compilation continues, so one stale
/// entry cannot abort the whole run.
///
/// The sequence always ends with exactly one catch-all terminal rule of the
/// opposite polarity: an allow file closes with deny-all, a deny file with
/// allow-all.
///
/// # Arguments
/// * `content` - The raw text of one `.allow` or `.deny` file
/// * `polarity` - The polarity declared by the file's extension
/// * `resolver` - DNS resolver used for hostname lines
pub async fn compile_file<R: DnsResolver>(
    content: &str,
    polarity: Polarity,
    resolver: &R,
) -> Vec<EgressRule> {
    let mut rules = Vec::new();

    for line in content.lines() {
        let token = line.trim();
        if token.starts_with('#') || token.split_whitespace().next().is_none() {
            continue;
        }

        match classify(token) {
            Destination::Address(addr) => {
                rules.push(EgressRule::new(IpNet::from(addr), polarity));
            }
            Destination::Network(net) => {
                rules.push(EgressRule::new(net, polarity));
            }
            Destination::Hostname(hostname) => match resolver.resolve(&hostname).await {
                Ok(addrs) => {
                    for addr in addrs {
                        rules.push(EgressRule::new(IpNet::from(addr), polarity));
                    }
                }
                Err(err) => {
                    log::warn!("skipping unresolvable hostname {hostname}: {err}");
                }
            },
        }
    }

    rules.push(EgressRule::terminal(polarity));
    rules
}

/// Assemble per-file rule sequences into the policy document
///
/// Sequences are concatenated in the order given, which must be the file
/// discovery order; terminal rules stay interspersed, one per file. The
/// namespace is taken as-is, validation is left to the platform.
pub fn assemble(
    namespace: &str,
    per_file_rules: Vec<Vec<EgressRule>>,
) -> EgressNetworkPolicy {
    let egress = per_file_rules.into_iter().flatten().collect();
    EgressNetworkPolicy::new(namespace, egress)
}
