//! Cluster connection configuration.

use opensearch::cert::CertificateValidation;
use opensearch::http::transport::{
    MultiNodeConnectionPool, SingleNodeConnectionPool, Transport, TransportBuilder,
};
use url::Url;

use crate::errors::EngineError;

/// Default cluster host for local development.
pub const DEFAULT_HOST: &str = "http://localhost:9200";

/// Immutable connection settings for the cluster transport.
///
/// Constructed once at process start and passed by value into the backend
/// factory; nothing reads connection settings from ambient state afterwards.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Cluster node URLs. One host uses a single-node pool, several hosts
    /// a round-robin pool.
    pub hosts: Vec<String>,
    /// Whether to verify TLS certificates. Disable only against
    /// self-signed development clusters.
    pub verify_tls: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            hosts: vec![DEFAULT_HOST.to_string()],
            verify_tls: true,
        }
    }
}

impl ConnectionConfig {
    /// Create a config for the given hosts with TLS verification on.
    pub fn new(hosts: Vec<String>) -> Self {
        Self {
            hosts,
            verify_tls: true,
        }
    }

    /// Toggle TLS certificate verification.
    pub fn with_verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }

    /// Build the HTTP transport for these settings.
    pub(crate) fn build_transport(&self) -> Result<Transport, EngineError> {
        if self.hosts.is_empty() {
            return Err(EngineError::configuration_missing(
                "at least one cluster host is required",
            ));
        }

        let mut urls = Vec::with_capacity(self.hosts.len());
        for host in &self.hosts {
            let url = Url::parse(host).map_err(|e| {
                EngineError::backend_unavailable(format!("invalid host `{}`: {}", host, e))
            })?;
            urls.push(url);
        }

        let builder = if urls.len() == 1 {
            TransportBuilder::new(SingleNodeConnectionPool::new(urls.remove(0)))
        } else {
            TransportBuilder::new(MultiNodeConnectionPool::round_robin(urls, None))
        };

        let builder = builder.disable_proxy();
        let builder = if self.verify_tls {
            builder
        } else {
            builder.cert_validation(CertificateValidation::None)
        };

        builder
            .build()
            .map_err(|e| EngineError::backend_unavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConnectionConfig::default();
        assert_eq!(config.hosts, vec![DEFAULT_HOST.to_string()]);
        assert!(config.verify_tls);
    }

    #[test]
    fn test_single_host_builds() {
        let config = ConnectionConfig::new(vec!["http://localhost:9200".to_string()]);
        assert!(config.build_transport().is_ok());
    }

    #[test]
    fn test_multiple_hosts_build() {
        let config = ConnectionConfig::new(vec![
            "http://node-1:9200".to_string(),
            "http://node-2:9200".to_string(),
        ])
        .with_verify_tls(false);
        assert!(config.build_transport().is_ok());
    }

    #[test]
    fn test_no_hosts_is_a_configuration_error() {
        let config = ConnectionConfig::new(vec![]);
        assert!(matches!(
            config.build_transport().unwrap_err(),
            EngineError::ConfigurationMissing(_)
        ));
    }

    #[test]
    fn test_invalid_host_fails() {
        let config = ConnectionConfig::new(vec!["not a url".to_string()]);
        assert!(config.build_transport().is_err());
    }
}
