use thiserror::Error;

use hickory_resolver::ResolveError;

#[derive(Debug, Error)]
pub enum EgressError {
    #[error("failed to initialize DNS resolver: {source}")]
    DnsResolverInit {
        #[source]
        source: ResolveError,
    },

    #[error("failed to resolve hostname {hostname}: {source}")]
    DnsLookup {
        hostname: String,
        #[source]
        source: ResolveError,
    },

    #[error("invalid glob pattern '{pattern}': {source}")]
    GlobPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to read glob match: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize policy as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialize policy as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
