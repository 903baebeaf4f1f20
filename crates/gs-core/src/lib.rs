//! Core types, errors, and configuration for grid-suite.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - [`Record`] - the trait every grid row implements
//! - [`RecordId`] and [`FieldValue`] - identifiers and cell values
//! - [`Config`] and its sections, plus [`ConfigError`]
//! - The `FxHashMap` alias used for string-keyed state

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod hash;
pub mod types;

pub use config::{ColorScheme, Config, GridConfig, MIN_FILTER_DEBOUNCE_MS, TuiConfig};
pub use error::{ConfigError, RecordError};
pub use hash::{FxHashMap, fx_hash_map};
pub use types::{FieldValue, JsonRecord, Record, RecordId, SharedRecord};
