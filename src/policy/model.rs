use ipnet::IpNet;
use serde::Serialize;

pub const API_VERSION: &str = "network.openshift.io/v1";
pub const KIND: &str = "EgressNetworkPolicy";

/// The catch-all CIDR used by terminal rules
pub const CATCH_ALL_CIDR: &str = "0.0.0.0/0";

/// Whether a rule permits or blocks traffic to its destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Polarity {
    Allow,
    Deny,
}

impl Polarity {
    /// Polarity of the terminal rule for a file of this polarity
    pub fn opposite(self) -> Self {
        match self {
            Polarity::Allow => Polarity::Deny,
            Polarity::Deny => Polarity::Allow,
        }
    }
}

/// Destination selector of a single egress rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleTarget {
    #[serde(rename = "cidrSelector")]
    pub cidr_selector: IpNet,
}

/// One ordered entry in the egress rule list
///
/// Order is significant: OpenShift evaluates egress rules first-match-wins,
/// so entries must appear exactly as compiled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EgressRule {
    pub to: RuleTarget,
    #[serde(rename = "type")]
    pub polarity: Polarity,
}

impl EgressRule {
    pub fn new(cidr: IpNet, polarity: Polarity) -> Self {
        Self {
            to: RuleTarget {
                cidr_selector: cidr,
            },
            polarity,
        }
    }

    /// The terminal catch-all rule closing a file's contribution, with
    /// polarity opposite to the file's declared polarity
    pub fn terminal(file_polarity: Polarity) -> Self {
        let cidr = CATCH_ALL_CIDR
            .parse()
            .expect("catch-all CIDR is a valid network");
        Self::new(cidr, file_polarity.opposite())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub name: String,
    pub namespace: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicySpec {
    pub egress: Vec<EgressRule>,
}

/// The EgressNetworkPolicy document emitted by the tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EgressNetworkPolicy {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub metadata: Metadata,
    pub spec: PolicySpec,
}

impl EgressNetworkPolicy {
    /// Wrap an ordered rule list in the policy envelope for a namespace
    pub fn new(namespace: &str, egress: Vec<EgressRule>) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: KIND.to_string(),
            metadata: Metadata {
                name: "default".to_string(),
                namespace: namespace.to_string(),
            },
            spec: PolicySpec { egress },
        }
    }
}
