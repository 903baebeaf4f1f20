//! Sample datasets for grid-suite.
//!
//! Two static datasets ship with the application, each with its column model
//! and detail renderers:
//!
//! - [`vulnerabilities`]: accessibility/security scan findings
//! - [`logs`]: application log entries
//!
//! The JSON is embedded at compile time and parsed into typed records.
//!
//! # Example
//!
//! ```
//! let registry = gs_datasets::default_registry().unwrap();
//! assert_eq!(registry.len(), 2);
//! assert_eq!(registry.title_of("logs"), Some("Application Logs"));
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
pub mod logs;
pub mod vulnerabilities;

pub use error::DatasetError;
pub use logs::{LogEntry, LogLevel, LogUser};
pub use vulnerabilities::Vulnerability;

use gs_grid::DatasetRegistry;
use tracing::debug;

/// Builds a registry holding every bundled dataset, in navigation order.
pub fn default_registry() -> Result<DatasetRegistry, DatasetError> {
    let mut registry = DatasetRegistry::new();
    registry.register(vulnerabilities::dataset()?)?;
    registry.register(logs::dataset()?)?;
    debug!(datasets = registry.len(), "bundled datasets loaded");
    Ok(registry)
}
