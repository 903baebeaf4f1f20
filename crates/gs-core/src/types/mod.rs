//! Domain types shared by every grid-suite crate.
//!
//! # Module Organization
//!
//! - [`id`] - Record identifiers
//! - [`value`] - Cell values and text collation
//! - [`record`] - The [`Record`] trait and the JSON-backed [`JsonRecord`]
//!
//! All public types are re-exported here and at the crate root:
//!
//! ```
//! use gs_core::{FieldValue, Record, RecordId};
//! ```

pub mod id;
pub mod record;
pub mod value;

pub use id::RecordId;
pub use record::{JsonRecord, Record, SharedRecord};
pub use value::{FieldValue, collate};
