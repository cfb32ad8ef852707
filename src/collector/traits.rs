//! Abstraction over query execution to enable testing without a server.
//!
//! The `MetricSource` trait is the seam between collectors and the MySQL
//! connection: collectors hand it a `SELECT name, value` statement and get
//! back plain string pairs. Production uses [`MySqlSource`] over a live
//! `mysql::Conn`; tests use `collector::mock::MockSource`.

use mysql::prelude::Queryable;
use mysql::{Conn, Error};

/// Error from a [`MetricSource`].
#[derive(Debug, Clone)]
pub enum SourceError {
    /// Query execution failed. For server-reported errors the message has
    /// the `Error NNNN (sqlstate): ...` shape the classifier understands.
    Query(String),
    /// The result stream broke mid-read or a row did not decode.
    Scan(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Query(msg) => write!(f, "query failed: {}", msg),
            SourceError::Scan(msg) => write!(f, "row scan failed: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {}

/// Executes key/value SELECT statements on behalf of a collector.
pub trait MetricSource: Send {
    /// Runs `query` and returns every row as a `(name, value)` pair.
    fn select_key_values(&mut self, query: &str) -> Result<Vec<(String, String)>, SourceError>;
}

/// Real source backed by an open `mysql::Conn`.
///
/// Owns the connection for the lifetime of the collector; does not manage
/// pooling, authentication, or reconnection.
pub struct MySqlSource {
    conn: Conn,
}

impl MySqlSource {
    /// Wraps an already-open connection.
    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }
}

/// Renders a server error in the `Error NNNN (sqlstate): message` shape
/// expected by [`is_server_error`](crate::collector::is_server_error).
fn format_server_error(code: u16, state: &str, message: &str) -> String {
    format!("Error {} ({}): {}", code, state, message)
}

impl MetricSource for MySqlSource {
    fn select_key_values(&mut self, query: &str) -> Result<Vec<(String, String)>, SourceError> {
        let rows: Vec<mysql::Row> = self.conn.query(query).map_err(|e| match e {
            Error::MySqlError(ref server) => SourceError::Query(format_server_error(
                server.code,
                &server.state,
                &server.message,
            )),
            other => SourceError::Query(other.to_string()),
        })?;

        let mut pairs = Vec::with_capacity(rows.len());
        for row in rows {
            let (name, value) = mysql::from_row_opt::<(String, String)>(row)
                .map_err(|e| SourceError::Scan(e.to_string()))?;
            pairs.push((name, value));
        }
        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::is_server_error;

    #[test]
    fn formatted_server_errors_are_classifiable() {
        let msg = format_server_error(3167, "HY000", "feature is disabled");
        assert!(is_server_error(&msg, 3167));
        assert!(!is_server_error(&msg, 1109));

        let msg = format_server_error(1109, "42S02", "Unknown table 'GLOBAL_VARIABLES'");
        assert!(is_server_error(&msg, 1109));
    }
}
