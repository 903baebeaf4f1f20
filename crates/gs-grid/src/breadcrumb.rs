//! Breadcrumb trails.
//!
//! A trail always starts at `Home`. Grid routes add the dataset title; detail
//! routes add the origin grid's title (linking back with a [`ReturnRequest`])
//! and `Item <id>`. Labels come from the registry, never from the path text.

use std::fmt;

use smallvec::SmallVec;

use crate::navigation::{NavigationContext, ReturnRequest, Route};
use crate::registry::DatasetRegistry;

/// One entry of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    /// Visible label.
    pub label: String,
    /// Where the crumb links to; `None` for the current page.
    pub target: Option<Route>,
    /// Return request attached to the link.
    pub return_request: Option<ReturnRequest>,
}

impl Crumb {
    fn link(label: impl Into<String>, target: Route) -> Self {
        Self {
            label: label.into(),
            target: Some(target),
            return_request: None,
        }
    }

    fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: None,
            return_request: None,
        }
    }

    /// Whether this crumb is the current page.
    #[must_use]
    pub const fn is_current(&self) -> bool {
        self.target.is_none()
    }
}

/// An ordered breadcrumb trail.
///
/// # Examples
///
/// ```
/// use gs_grid::{Breadcrumbs, DatasetRegistry, Route};
///
/// let trail = Breadcrumbs::for_route(&Route::Home, None, &DatasetRegistry::new());
/// assert_eq!(trail.to_string(), "Home");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Breadcrumbs {
    crumbs: SmallVec<[Crumb; 4]>,
}

impl Breadcrumbs {
    /// Separator used by the [`Display`](fmt::Display) form.
    pub const SEPARATOR: &'static str = " / ";

    /// Builds the trail for `route`.
    ///
    /// `context` is the navigation context of the current location, used on
    /// detail routes to link back to the grid the record was opened from.
    #[must_use]
    pub fn for_route(
        route: &Route,
        context: Option<&NavigationContext>,
        registry: &DatasetRegistry,
    ) -> Self {
        let mut crumbs: SmallVec<[Crumb; 4]> = SmallVec::new();
        if matches!(route, Route::Home) {
            crumbs.push(Crumb::current("Home"));
            return Self { crumbs };
        }
        crumbs.push(Crumb::link("Home", Route::Home));

        match route {
            Route::Home => {}
            Route::Grid(id) => {
                let label = registry.title_of(id.as_str()).unwrap_or("Not Found");
                crumbs.push(Crumb::current(label));
            }
            Route::Detail(record_id) => {
                if let Some(context) = context {
                    let label = registry
                        .title_of(context.dataset_id.as_str())
                        .unwrap_or_else(|| context.dataset_id.as_str());
                    crumbs.push(Crumb {
                        label: label.to_owned(),
                        target: Some(Route::parse(&context.origin_path)),
                        return_request: Some(ReturnRequest {
                            focus_id: record_id.clone(),
                        }),
                    });
                }
                crumbs.push(Crumb::current(format!("Item {record_id}")));
            }
            Route::NotFound(_) => crumbs.push(Crumb::current("Not Found")),
        }
        Self { crumbs }
    }

    /// Iterates over the crumbs.
    pub fn iter(&self) -> std::slice::Iter<'_, Crumb> {
        self.crumbs.iter()
    }

    /// Number of crumbs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.crumbs.len()
    }

    /// Whether the trail is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.crumbs.is_empty()
    }
}

impl fmt::Display for Breadcrumbs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, crumb) in self.crumbs.iter().enumerate() {
            if i > 0 {
                f.write_str(Self::SEPARATOR)?;
            }
            f.write_str(&crumb.label)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Breadcrumbs {
    type Item = &'a Crumb;
    type IntoIter = std::slice::Iter<'a, Crumb>;

    fn into_iter(self) -> Self::IntoIter {
        self.crumbs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnModel;
    use crate::registry::{Dataset, DatasetId};
    use gs_core::RecordId;

    fn registry() -> DatasetRegistry {
        let mut registry = DatasetRegistry::new();
        for (id, title) in [
            ("vulnerabilities", "Vulnerability Scanner Results"),
            ("logs", "Application Logs"),
        ] {
            registry
                .register(Dataset::new(id, title, Vec::new(), ColumnModel::new(Vec::new())))
                .unwrap();
        }
        registry
    }

    #[test]
    fn test_grid_trail_uses_registry_title() {
        let trail = Breadcrumbs::for_route(&Route::parse("/logs"), None, &registry());
        insta::assert_snapshot!(trail, @"Home / Application Logs");
        assert!(trail.iter().last().unwrap().is_current());
    }

    #[test]
    fn test_detail_trail_links_back_with_focus() {
        let context = NavigationContext {
            record_id: RecordId::from(3),
            dataset_id: DatasetId::from("vulnerabilities"),
            origin_path: "/vulnerabilities".to_owned(),
        };
        let trail = Breadcrumbs::for_route(&Route::parse("/details/3"), Some(&context), &registry());
        insta::assert_snapshot!(trail, @"Home / Vulnerability Scanner Results / Item 3");

        let parent = trail.iter().nth_back(1).unwrap();
        assert_eq!(parent.target, Some(Route::parse("/vulnerabilities")));
        assert_eq!(
            parent.return_request,
            Some(ReturnRequest {
                focus_id: RecordId::from(3)
            })
        );
    }

    #[test]
    fn test_detail_trail_without_context() {
        let trail = Breadcrumbs::for_route(&Route::parse("/details/9"), None, &registry());
        insta::assert_snapshot!(trail, @"Home / Item 9");
    }

    #[test]
    fn test_unknown_paths() {
        let registry = registry();
        assert_eq!(
            Breadcrumbs::for_route(&Route::parse("/reports"), None, &registry).to_string(),
            "Home / Not Found"
        );
        assert_eq!(
            Breadcrumbs::for_route(&Route::parse("/a/b"), None, &registry).to_string(),
            "Home / Not Found"
        );
    }
}
