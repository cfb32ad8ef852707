//! rmytop-core - MySQL global metrics collection library.
//!
//! This library provides the core functionality shared by the rmytop viewer:
//! - `collector` - retrieval of GLOBAL_VARIABLES / GLOBAL_STATUS key/value
//!   metrics, with the one-shot `show_compatibility_56` schema fallback
//! - `fmt` - fixed-width numeric and time formatting for tabular display

pub mod collector;
pub mod fmt;
