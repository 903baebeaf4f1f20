//! TUI-specific error types.

use gs_grid::GridError;
use thiserror::Error;

/// Errors that can occur in the TUI.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TuiError {
    /// Terminal initialization or operation failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Event channel was closed unexpectedly.
    #[error("event channel closed unexpectedly")]
    ChannelClosed,

    /// A grid or registry operation failed.
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl TuiError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns `true` if this error is recoverable.
    ///
    /// Grid errors (an unknown column, an unknown start dataset) leave the
    /// terminal usable; the rest require restarting the TUI.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Grid(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = TuiError::config("tick rate must be positive");
        assert!(matches!(err, TuiError::Config(_)));
        assert_eq!(
            err.to_string(),
            "configuration error: tick rate must be positive"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            TuiError::ChannelClosed.to_string(),
            "event channel closed unexpectedly"
        );
        assert_eq!(
            TuiError::from(GridError::UnknownDataset("reports".to_owned())).to_string(),
            "grid error: unknown dataset 'reports'"
        );
    }

    #[test]
    fn test_is_recoverable() {
        let unknown = GridError::UnknownColumn {
            key: "nope".to_owned(),
        };
        assert!(TuiError::from(unknown).is_recoverable());
        assert!(!TuiError::ChannelClosed.is_recoverable());
        assert!(!TuiError::config("test").is_recoverable());
    }
}
