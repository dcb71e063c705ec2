//! Dependency initialization and wiring.

use std::env;
use std::fs;
use std::sync::Arc;

use tracing::info;

use crate::AppError;
use elastic_scout_engine::{ConnectionConfig, OpenSearchBackend, SearchEngine};
use elastic_scout_shared::QueryConfig;

/// Default cluster host.
const DEFAULT_HOSTS: &str = "http://localhost:9200";

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The concrete backend, kept for inspection commands that go past the
    /// engine's trait surface (cat APIs, health checks).
    pub backend: Arc<OpenSearchBackend>,
    /// The configured search engine.
    pub engine: SearchEngine,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_HOSTS`: comma-separated cluster node URLs
    ///   (default: http://localhost:9200)
    /// - `OPENSEARCH_VERIFY_TLS`: set to `false` or `0` to skip TLS
    ///   certificate verification (default: verify)
    /// - `QUERY_CONFIG_PATH`: path to a JSON query-method config file
    ///   (default: built-in config)
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AppError)` - If initialization fails
    pub async fn new() -> Result<Self, AppError> {
        let hosts = parse_hosts(&env::var("OPENSEARCH_HOSTS").unwrap_or_else(|_| DEFAULT_HOSTS.to_string()));
        let verify_tls = env::var("OPENSEARCH_VERIFY_TLS")
            .map(|value| !matches!(value.trim(), "false" | "0"))
            .unwrap_or(true);
        let query_config_path = env::var("QUERY_CONFIG_PATH").ok();

        info!(
            hosts = ?hosts,
            verify_tls = verify_tls,
            query_config_path = ?query_config_path,
            "Initializing dependencies"
        );

        let connection = ConnectionConfig::new(hosts).with_verify_tls(verify_tls);
        let backend = Arc::new(
            OpenSearchBackend::new(&connection)
                .map_err(|e| AppError::config(format!("Failed to create backend: {}", e)))?,
        );

        // Verify the cluster is reachable before handing anything out.
        let healthy = backend
            .health_check()
            .await
            .map_err(|e| AppError::config(format!("Cluster health check failed: {}", e)))?;

        if !healthy {
            return Err(AppError::config("Search cluster is unhealthy"));
        }

        info!("Cluster connection verified");

        let query_config = load_query_config(query_config_path.as_deref())?;
        let engine = SearchEngine::with_config(backend.clone(), query_config);

        Ok(Self { backend, engine })
    }
}

/// Split a comma-separated host list, dropping empty segments.
fn parse_hosts(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load the query-method config from a JSON file, or fall back to the
/// built-in default when no path is set.
fn load_query_config(path: Option<&str>) -> Result<QueryConfig, AppError> {
    match path {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            serde_json::from_str(&contents).map_err(|e| {
                AppError::config(format!("Invalid query config at {}: {}", path, e))
            })
        }
        None => Ok(QueryConfig::default()),
    }
}
