//! Selection of the schema holding the global metrics tables.
//!
//! We expect to read global metrics from `INFORMATION_SCHEMA`. MySQL 5.7+
//! moved them to `performance_schema` and, with `show_compatibility_56`
//! disabled, rejects the old location. One selector instance is shared by
//! the variables and status collectors so that a single classified failure
//! switches both domains together.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

const INFORMATION_SCHEMA_GLOBAL_VARIABLES: &str = "INFORMATION_SCHEMA.GLOBAL_VARIABLES";
const INFORMATION_SCHEMA_GLOBAL_STATUS: &str = "INFORMATION_SCHEMA.GLOBAL_STATUS";
const PERFORMANCE_SCHEMA_GLOBAL_VARIABLES: &str = "performance_schema.global_variables";
const PERFORMANCE_SCHEMA_GLOBAL_STATUS: &str = "performance_schema.global_status";

/// Tracks which schema currently serves the global metrics tables.
///
/// Both table names derive from one flag, so they always flip together and
/// [`engage_fallback`](Self::engage_fallback) is idempotent by construction.
/// The flag is never reset: `performance_schema` is terminal.
///
/// Ordering is `Relaxed` on purpose. The switch happens at most once, near
/// startup; a collector racing it may read the stale table name and waste
/// one failed query before observing the new state. That is an accepted
/// race, not worth a lock.
#[derive(Debug, Default)]
pub struct SchemaSelector {
    use_performance_schema: AtomicBool,
}

impl SchemaSelector {
    /// Creates a selector starting on `INFORMATION_SCHEMA`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once the `performance_schema` fallback has been engaged.
    pub fn fallback_engaged(&self) -> bool {
        self.use_performance_schema.load(Ordering::Relaxed)
    }

    /// Switches both global metrics tables to `performance_schema`.
    ///
    /// Safe to call repeatedly; later calls change nothing.
    pub fn engage_fallback(&self) {
        if !self.use_performance_schema.swap(true, Ordering::Relaxed) {
            info!(
                variables = PERFORMANCE_SCHEMA_GLOBAL_VARIABLES,
                status = PERFORMANCE_SCHEMA_GLOBAL_STATUS,
                "switching global metrics tables to performance_schema"
            );
        }
    }

    /// The currently active table for global variables.
    pub fn variables_table(&self) -> &'static str {
        if self.fallback_engaged() {
            PERFORMANCE_SCHEMA_GLOBAL_VARIABLES
        } else {
            INFORMATION_SCHEMA_GLOBAL_VARIABLES
        }
    }

    /// The currently active table for global status counters.
    pub fn status_table(&self) -> &'static str {
        if self.fallback_engaged() {
            PERFORMANCE_SCHEMA_GLOBAL_STATUS
        } else {
            INFORMATION_SCHEMA_GLOBAL_STATUS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_information_schema() {
        let schema = SchemaSelector::new();
        assert!(!schema.fallback_engaged());
        assert_eq!(schema.variables_table(), "INFORMATION_SCHEMA.GLOBAL_VARIABLES");
        assert_eq!(schema.status_table(), "INFORMATION_SCHEMA.GLOBAL_STATUS");
    }

    #[test]
    fn fallback_switches_both_tables() {
        let schema = SchemaSelector::new();
        schema.engage_fallback();
        assert!(schema.fallback_engaged());
        assert_eq!(schema.variables_table(), "performance_schema.global_variables");
        assert_eq!(schema.status_table(), "performance_schema.global_status");
    }

    #[test]
    fn fallback_is_idempotent() {
        let schema = SchemaSelector::new();
        schema.engage_fallback();
        let variables = schema.variables_table();
        let status = schema.status_table();
        schema.engage_fallback();
        assert_eq!(schema.variables_table(), variables);
        assert_eq!(schema.status_table(), status);
        assert!(schema.fallback_engaged());
    }
}
