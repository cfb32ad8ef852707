//! MySQL global metrics collectors.
//!
//! Retrieves server key/value metrics from two domains:
//! - `GLOBAL_VARIABLES` — server configuration
//! - `GLOBAL_STATUS` — runtime counters
//!
//! Both domains read `INFORMATION_SCHEMA` by default. MySQL 5.7+ with
//! `show_compatibility_56 = OFF` rejects those views, so on the first
//! classified failure the collectors switch to `performance_schema` —
//! once per process, for both domains together — and retry exactly once.
//! See [`schema::SchemaSelector`].

pub mod global;
pub mod mock;
pub mod schema;
pub mod server_error;
pub mod traits;

pub use global::{CollectError, GlobalCollector, MetricDomain};
pub use schema::SchemaSelector;
pub use server_error::is_server_error;
pub use traits::{MetricSource, MySqlSource, SourceError};
