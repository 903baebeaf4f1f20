//! Error types for the gs-datasets crate.

use gs_grid::GridError;

/// Errors that can occur while loading the bundled datasets.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The embedded JSON for a dataset failed to parse.
    #[error("failed to parse dataset '{dataset}': {source}")]
    Parse {
        /// The dataset being loaded.
        dataset: &'static str,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The dataset could not be registered.
    #[error(transparent)]
    Registry(#[from] GridError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let error = DatasetError::Parse {
            dataset: "logs",
            source,
        };
        assert!(error.to_string().starts_with("failed to parse dataset 'logs'"));
    }

    #[test]
    fn test_registry_error_is_transparent() {
        let error = DatasetError::from(GridError::UnknownDataset("x".to_owned()));
        assert_eq!(error.to_string(), "unknown dataset 'x'");
    }
}
