//! Error types for the gs-grid crate.
//!
//! [`GridError`] covers invalid grid operations and registry misuse.
//! [`DetailError`] is the outcome of a failed detail lookup; every variant
//! carries the [`Recovery`] the front end offers the user.

use gs_core::RecordId;

use crate::registry::DatasetId;

/// Errors returned by grid and registry operations.
///
/// None of these are fatal. Out-of-range paging is clamped silently and never
/// surfaces here.
///
/// # Examples
///
/// ```
/// use gs_grid::GridError;
///
/// let error = GridError::NotSortable { key: "timestamp".to_owned() };
/// assert_eq!(error.to_string(), "column 'timestamp' is not sortable");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GridError {
    /// No column reads the given field key.
    #[error("unknown column '{key}'")]
    UnknownColumn {
        /// The requested field key.
        key: String,
    },

    /// The column exists but does not take part in sorting.
    #[error("column '{key}' is not sortable")]
    NotSortable {
        /// The requested field key.
        key: String,
    },

    /// The column exists but does not take part in filtering.
    #[error("column '{key}' is not filterable")]
    NotFilterable {
        /// The requested field key.
        key: String,
    },

    /// A dataset with this identifier is already registered.
    #[error("dataset '{0}' is already registered")]
    DuplicateDataset(DatasetId),

    /// No dataset is registered under this identifier.
    #[error("unknown dataset '{0}'")]
    UnknownDataset(String),
}

/// Where the user is sent to recover from a failed detail lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovery {
    /// Return to the home view.
    GoHome,
    /// Return to the grid at this path.
    BackToGrid(String),
}

impl Recovery {
    /// Label of the recovery action.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::GoHome => "Go to Home",
            Self::BackToGrid(_) => "Back to Grid",
        }
    }
}

/// Why a record could not be shown in the detail view.
///
/// # Examples
///
/// ```
/// use gs_grid::{DetailError, Recovery};
///
/// let error = DetailError::MissingContext;
/// assert_eq!(error.title(), "Navigation Error");
/// assert_eq!(error.recovery(), Recovery::GoHome);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DetailError {
    /// The detail view was reached without a navigation context.
    #[error("detail view reached without navigation context")]
    MissingContext,

    /// The navigation context names a dataset that is not registered.
    #[error("navigation context names unknown dataset '{dataset_id}'")]
    UnknownDataset {
        /// The dataset named by the context.
        dataset_id: DatasetId,
    },

    /// No record in the dataset has the requested identifier.
    #[error("no record with id '{record_id}' in dataset '{dataset_id}'")]
    RecordNotFound {
        /// The requested identifier.
        record_id: RecordId,
        /// The dataset that was searched.
        dataset_id: DatasetId,
        /// Path of the grid the user came from.
        origin_path: String,
    },
}

impl DetailError {
    /// Heading shown for this error state.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::MissingContext | Self::UnknownDataset { .. } => "Navigation Error",
            Self::RecordNotFound { .. } => "Item Not Found",
        }
    }

    /// Explanation shown under the heading.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingContext | Self::UnknownDataset { .. } => {
                "This page was accessed without the necessary context. \
                 Please return to a grid and select a row."
            }
            Self::RecordNotFound { .. } => "The requested item could not be found in the dataset.",
        }
    }

    /// The recovery action for this error state.
    #[must_use]
    pub fn recovery(&self) -> Recovery {
        match self {
            Self::MissingContext | Self::UnknownDataset { .. } => Recovery::GoHome,
            Self::RecordNotFound { origin_path, .. } => Recovery::BackToGrid(origin_path.clone()),
        }
    }
}
