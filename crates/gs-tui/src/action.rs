//! User actions for the TUI.
//!
//! Key events are mapped to an [`Action`] by [`App::handle_key`], and
//! [`App::update`] applies it to application state.
//!
//! ```text
//! KeyEvent → App::handle_key → Action → App::update → GridView / Navigator
//! ```
//!
//! [`App::handle_key`]: crate::App::handle_key
//! [`App::update`]: crate::App::update

use gs_grid::RowKey;

/// User-initiated actions in the TUI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Action {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Go to the home view.
    GoHome,

    /// Open the grid of the dataset at this registry position.
    OpenDataset(usize),

    /// Move the home selection down.
    SelectNextDataset,

    /// Move the home selection up.
    SelectPreviousDataset,

    /// Open the dataset selected on the home view.
    OpenSelectedDataset,

    /// Leave the detail view for the grid it was opened from.
    Back,

    /// Take the recovery action of the current error state.
    Recover,

    // =========================================================================
    // Grid Body
    // =========================================================================
    /// Row focus and activation.
    Row(RowKey),

    /// Go to the next page.
    NextPage,

    /// Go to the previous page.
    PreviousPage,

    /// Switch to the next larger page size.
    GrowPageSize,

    /// Switch to the next smaller page size.
    ShrinkPageSize,

    // =========================================================================
    // Grid Header
    // =========================================================================
    /// Select the column to the right.
    NextColumn,

    /// Select the column to the left.
    PreviousColumn,

    /// Toggle sorting on the selected column.
    ToggleSort,

    /// Start editing the selected column's filter.
    EnterFilterMode,

    /// Stop editing; pending text still commits when its timer fires.
    ExitFilterMode,

    /// The filter text changed while typing.
    FilterInput(String),

    /// Commit the filter being edited now.
    CommitFilter,

    /// Remove every filter.
    ClearFilters,

    // =========================================================================
    // Detail View
    // =========================================================================
    /// Scroll the detail view down.
    ScrollDown,

    /// Scroll the detail view up.
    ScrollUp,

    // =========================================================================
    // UI State
    // =========================================================================
    /// Toggle the help panel.
    ToggleHelp,

    /// Hide the help panel.
    HideHelp,

    /// Show a status message.
    ShowStatus(String),

    /// Clear the status message.
    ClearStatus,

    // =========================================================================
    // Application Control
    // =========================================================================
    /// Quit the application.
    Quit,

    /// Render the UI.
    Render,

    /// No operation.
    #[default]
    None,
}

impl Action {
    /// Returns `true` if this action requires a re-render.
    #[must_use]
    pub const fn needs_render(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns `true` if this action changes the route.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::GoHome
                | Self::OpenDataset(_)
                | Self::OpenSelectedDataset
                | Self::Back
                | Self::Recover
                | Self::Row(RowKey::Enter | RowKey::Space)
        )
    }

    /// Returns `true` if this action touches filter state.
    #[must_use]
    pub const fn is_filter(&self) -> bool {
        matches!(
            self,
            Self::EnterFilterMode
                | Self::ExitFilterMode
                | Self::FilterInput(_)
                | Self::CommitFilter
                | Self::ClearFilters
        )
    }
}
