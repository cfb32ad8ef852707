//! Collector for one global metrics domain (variables or status).

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use super::schema::SchemaSelector;
use super::server_error::is_server_error;
use super::traits::{MetricSource, SourceError};

/// Error 3167: The 'INFORMATION_SCHEMA.GLOBAL_VARIABLES' feature is disabled;
/// see the documentation for 'show_compatibility_56'
pub const SHOW_COMPATIBILITY_56_ERROR: u16 = 3167;

/// Error 1109: Unknown table 'GLOBAL_VARIABLES' in information_schema
pub const UNKNOWN_TABLE_ERROR: u16 = 1109;

/// Which global metrics table a collector reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricDomain {
    /// Server configuration (`GLOBAL_VARIABLES`).
    Variables,
    /// Runtime counters (`GLOBAL_STATUS`).
    Status,
}

/// Error type for metric collection.
///
/// Every variant is terminal for the process in practice: the caller is
/// expected to log it and exit, there is no partial-degradation mode.
#[derive(Debug)]
pub enum CollectError {
    /// Query execution failed and the one-retry fallback budget is spent
    /// (or the error was never eligible for fallback).
    Query(String),
    /// The result stream broke while reading rows.
    Scan(String),
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::Query(msg) => write!(f, "metrics query failed: {}", msg),
            CollectError::Scan(msg) => write!(f, "metrics row scan failed: {}", msg),
        }
    }
}

impl std::error::Error for CollectError {}

impl From<SourceError> for CollectError {
    fn from(e: SourceError) -> Self {
        match e {
            SourceError::Query(msg) => CollectError::Query(msg),
            SourceError::Scan(msg) => CollectError::Scan(msg),
        }
    }
}

/// Collects one domain of global key/value metrics.
///
/// The variables and status collectors are independent instances of this
/// type sharing one [`SchemaSelector`], so the schema fallback engages once
/// for both. The stored snapshot is replaced wholesale on every successful
/// [`collect_all`](Self::collect_all); on failure the prior snapshot stays
/// visible.
pub struct GlobalCollector<S> {
    domain: MetricDomain,
    schema: Arc<SchemaSelector>,
    source: S,
    metrics: HashMap<String, String>,
}

impl<S: MetricSource> GlobalCollector<S> {
    /// Creates a collector for `domain` over `source`.
    ///
    /// Taking the source by value makes "constructed without a connection"
    /// unrepresentable, so there is no runtime contract check to fail.
    pub fn new(domain: MetricDomain, schema: Arc<SchemaSelector>, source: S) -> Self {
        Self {
            domain,
            schema,
            source,
            metrics: HashMap::new(),
        }
    }

    /// Convenience constructor for the variables domain.
    pub fn variables(schema: Arc<SchemaSelector>, source: S) -> Self {
        Self::new(MetricDomain::Variables, schema, source)
    }

    /// Convenience constructor for the status domain.
    pub fn status(schema: Arc<SchemaSelector>, source: S) -> Self {
        Self::new(MetricDomain::Status, schema, source)
    }

    fn table(&self) -> &'static str {
        match self.domain {
            MetricDomain::Variables => self.schema.variables_table(),
            MetricDomain::Status => self.schema.status_table(),
        }
    }

    fn run_query(&mut self) -> Result<Vec<(String, String)>, SourceError> {
        let query = format!(
            "SELECT VARIABLE_NAME, VARIABLE_VALUE FROM {}",
            self.table()
        );
        debug!(%query, "collecting global metrics");
        self.source.select_key_values(&query)
    }

    /// Collects all metrics of this domain and replaces the stored snapshot.
    ///
    /// On a classified schema-incompatibility failure (codes 3167 / 1109)
    /// before the fallback has been engaged, engages it and retries exactly
    /// once. Any other failure, a failure after the fallback is already
    /// engaged, or a retry failure is returned to the caller.
    pub fn collect_all(&mut self) -> Result<(), CollectError> {
        let rows = match self.run_query() {
            Ok(rows) => rows,
            Err(SourceError::Query(msg))
                if !self.schema.fallback_engaged()
                    && (is_server_error(&msg, SHOW_COMPATIBILITY_56_ERROR)
                        || is_server_error(&msg, UNKNOWN_TABLE_ERROR)) =>
            {
                info!(
                    error = %msg,
                    "INFORMATION_SCHEMA query failed, retrying with performance_schema"
                );
                self.schema.engage_fallback();
                self.run_query()?
            }
            Err(e) => return Err(e.into()),
        };

        let mut fresh = HashMap::with_capacity(rows.len());
        for (name, value) in rows {
            fresh.insert(name.to_lowercase(), value);
        }
        debug!(domain = ?self.domain, rows = fresh.len(), "collected global metrics");
        self.metrics = fresh;
        Ok(())
    }

    /// Returns the value of `key`, or `""` if absent.
    ///
    /// Stored keys are lower-cased on insert and the lookup is exact-match,
    /// so a mixed-case `key` yields the empty sentinel.
    pub fn get(&self, key: &str) -> &str {
        self.metrics.get(key).map(String::as_str).unwrap_or("")
    }

    /// Number of metrics in the current snapshot.
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// True until the first successful collection.
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}
