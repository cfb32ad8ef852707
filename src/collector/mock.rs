//! Scripted metric source for testing collectors without a live server.

use std::collections::VecDeque;

use super::traits::{MetricSource, SourceError};

/// In-memory [`MetricSource`] returning pre-scripted outcomes.
///
/// Outcomes are consumed in FIFO order, one per query; every issued query
/// is recorded so tests can assert the exact statements and the retry
/// budget. Running past the script is a test bug and panics.
#[derive(Debug, Default)]
pub struct MockSource {
    outcomes: VecDeque<Result<Vec<(String, String)>, SourceError>>,
    queries: Vec<String>,
}

impl MockSource {
    /// Creates an empty source with no scripted outcomes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a successful result with the given rows.
    pub fn push_rows(&mut self, rows: &[(&str, &str)]) {
        let rows = rows
            .iter()
            .map(|&(name, value)| (name.to_string(), value.to_string()))
            .collect();
        self.outcomes.push_back(Ok(rows));
    }

    /// Scripts a failed query.
    pub fn push_error(&mut self, err: SourceError) {
        self.outcomes.push_back(Err(err));
    }

    /// Every query issued so far, in order.
    pub fn queries(&self) -> &[String] {
        &self.queries
    }
}

impl MetricSource for MockSource {
    fn select_key_values(&mut self, query: &str) -> Result<Vec<(String, String)>, SourceError> {
        self.queries.push(query.to_string());
        self.outcomes
            .pop_front()
            .unwrap_or_else(|| panic!("MockSource: no scripted outcome for query {query:?}"))
    }
}
