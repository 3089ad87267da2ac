use std::net::IpAddr;

use async_trait::async_trait;
use hickory_resolver::{Resolver, TokioResolver};

#[cfg(test)]
use mockall::automock;

use crate::error::EgressError;

/// DNS resolver abstraction for testing
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, hostname: &str) -> Result<Vec<IpAddr>, EgressError>;
}

/// Production DNS resolver using the system resolver configuration
pub struct HickoryResolver {
    inner: TokioResolver,
}

impl HickoryResolver {
    /// Build a resolver from the system DNS configuration
    pub fn from_system_conf() -> Result<Self, EgressError> {
        let inner = Resolver::builder_tokio()
            .map_err(|source| EgressError::DnsResolverInit { source })?
            .build();
        Ok(Self { inner })
    }
}

#[async_trait]
impl DnsResolver for HickoryResolver {
    /// Resolve a hostname to its IP addresses
    ///
    /// Both IPv4 and IPv6 records are returned, in lookup order. Each call
    /// performs a fresh lookup; there is no caching and no TTL tracking,
    /// because the generated policy is a one-shot snapshot.
    ///
    /// # Arguments
    /// * `hostname` - Domain name to look up
    ///
    /// # Returns
    /// * `Ok(Vec<IpAddr>)` - Resolved addresses, possibly empty
    /// * `Err(EgressError)` - If the lookup fails (NXDOMAIN, timeout, ...)
    async fn resolve(&self, hostname: &str) -> Result<Vec<IpAddr>, EgressError> {
        let response = self
            .inner
            .lookup_ip(hostname)
            .await
            .map_err(|source| EgressError::DnsLookup {
                hostname: hostname.to_string(),
                source,
            })?;

        Ok(response.iter().collect())
    }
}
