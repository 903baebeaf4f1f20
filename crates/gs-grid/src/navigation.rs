//! Routes and navigation state.
//!
//! Forward navigation from a grid row carries a [`NavigationContext`]; the way
//! back carries a [`ReturnRequest`]. Both are plain, serializable data. The
//! [`Navigator`] stores at most one of them as the state of the current
//! location and drops it on the next navigation, so neither outlives a single
//! forward/back round trip.

use std::fmt;

use gs_core::RecordId;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::registry::DatasetId;

/// Path segment that prefixes detail routes.
const DETAILS_SEGMENT: &str = "details";

// ============================================================================
// Routes
// ============================================================================

/// A location in the application.
///
/// # Examples
///
/// ```
/// use gs_core::RecordId;
/// use gs_grid::Route;
///
/// assert_eq!(Route::parse("/"), Route::Home);
/// assert_eq!(Route::parse("/logs").path(), "/logs");
/// assert_eq!(Route::parse("/details/3"), Route::Detail(RecordId::from(3)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The home view.
    Home,
    /// The grid of one dataset.
    Grid(DatasetId),
    /// The detail view of one record.
    Detail(RecordId),
    /// A path that matches no route.
    NotFound(String),
}

impl Route {
    /// Parses a path such as `/vulnerabilities` or `/details/3`.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home,
            [DETAILS_SEGMENT, id] => Self::Detail(RecordId::parse(id)),
            [DETAILS_SEGMENT, ..] => Self::NotFound(path.to_owned()),
            [dataset] => Self::Grid(DatasetId::from(*dataset)),
            _ => Self::NotFound(path.to_owned()),
        }
    }

    /// The path of this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Grid(id) => id.grid_path(),
            Self::Detail(id) => format!("/{DETAILS_SEGMENT}/{id}"),
            Self::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

// ============================================================================
// Navigation Payloads
// ============================================================================

/// Context handed from an activated grid row to the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationContext {
    /// The activated record.
    pub record_id: RecordId,
    /// The dataset that owns the record.
    pub dataset_id: DatasetId,
    /// Path of the grid the row was activated on.
    pub origin_path: String,
}

impl NavigationContext {
    /// The request that returns to the origin grid with this record focused.
    #[must_use]
    pub fn return_request(&self) -> ReturnRequest {
        ReturnRequest {
            focus_id: self.record_id.clone(),
        }
    }
}

/// One-shot request to focus a row when returning to a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    /// The row to focus.
    pub focus_id: RecordId,
}

/// State attached to the current location.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocationState {
    /// Nothing attached.
    #[default]
    None,
    /// Arrived at a detail view from a grid row.
    Forward(NavigationContext),
    /// Returned to a grid from a detail view.
    Return(ReturnRequest),
}

// ============================================================================
// Navigator
// ============================================================================

/// Owns the current route and the one-shot state attached to it.
///
/// Only the current location is kept. Returning to a grid goes through
/// [`Navigator::return_to_origin`], which rebuilds the origin route from the
/// navigation context.
///
/// # Examples
///
/// ```
/// use gs_core::RecordId;
/// use gs_grid::{DatasetId, NavigationContext, Navigator, Route};
///
/// let mut nav = Navigator::new();
/// nav.navigate(Route::parse("/vulnerabilities"));
/// nav.open_record(NavigationContext {
///     record_id: RecordId::from(3),
///     dataset_id: DatasetId::from("vulnerabilities"),
///     origin_path: "/vulnerabilities".to_owned(),
/// });
/// assert_eq!(nav.path(), "/details/3");
///
/// nav.return_to_origin();
/// assert_eq!(nav.path(), "/vulnerabilities");
/// assert_eq!(nav.take_return_request().map(|r| r.focus_id), Some(RecordId::from(3)));
/// assert!(nav.take_return_request().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Navigator {
    route: Route,
    state: LocationState,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Starts at the home route.
    #[must_use]
    pub const fn new() -> Self {
        Self::at(Route::Home)
    }

    /// Starts at `route` with no state.
    #[must_use]
    pub const fn at(route: Route) -> Self {
        Self {
            route,
            state: LocationState::None,
        }
    }

    /// The current route.
    #[must_use]
    pub const fn route(&self) -> &Route {
        &self.route
    }

    /// The current path.
    #[must_use]
    pub fn path(&self) -> String {
        self.route.path()
    }

    /// State attached to the current location.
    #[must_use]
    pub const fn state(&self) -> &LocationState {
        &self.state
    }

    /// The navigation context, if the current location was entered from a
    /// grid row.
    #[must_use]
    pub const fn context(&self) -> Option<&NavigationContext> {
        match &self.state {
            LocationState::Forward(context) => Some(context),
            LocationState::None | LocationState::Return(_) => None,
        }
    }

    /// Navigates to `route` without state.
    pub fn navigate(&mut self, route: Route) {
        self.push(route, LocationState::None);
    }

    /// Navigates to the detail route of the context's record.
    pub fn open_record(&mut self, context: NavigationContext) {
        info!(
            record = %context.record_id,
            dataset = %context.dataset_id,
            origin = %context.origin_path,
            "Opening record detail"
        );
        let route = Route::Detail(context.record_id.clone());
        self.push(route, LocationState::Forward(context));
    }

    /// Returns to the grid the current detail view was entered from, asking
    /// it to focus the record.
    ///
    /// Without a navigation context this goes home. Returns `false` if the
    /// current location is not a detail view.
    pub fn return_to_origin(&mut self) -> bool {
        if !matches!(self.route, Route::Detail(_)) {
            return false;
        }
        match self.context().cloned() {
            Some(context) => {
                let request = context.return_request();
                self.push(
                    Route::parse(&context.origin_path),
                    LocationState::Return(request),
                );
            }
            None => self.navigate(Route::Home),
        }
        true
    }

    /// Takes the pending return request, leaving none behind.
    pub fn take_return_request(&mut self) -> Option<ReturnRequest> {
        match std::mem::take(&mut self.state) {
            LocationState::Return(request) => Some(request),
            other => {
                self.state = other;
                None
            }
        }
    }

    fn push(&mut self, route: Route, state: LocationState) {
        debug!(from = %self.route, to = %route, "Navigating");
        self.route = route;
        self.state = state;
    }
}
