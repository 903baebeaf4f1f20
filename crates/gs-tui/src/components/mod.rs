//! UI components for the TUI.
//!
//! # Component Types
//!
//! - **Widgets** (`Widget` trait): `NavHeader`, `BreadcrumbBar`, `HomeView`,
//!   `PaginationBar`, `DetailView`, `StatusBar`
//! - **Stateful Widgets** (`StatefulWidget` trait): `GridTable`, which marks
//!   the focused row through a `TableState`
//! - **Overlays**: `HelpPanel`, `FilterInput`

mod breadcrumb_bar;
mod detail_view;
mod filter_input;
mod grid_table;
mod help;
mod home;
mod nav_header;
mod pagination_bar;
mod status_bar;

pub use breadcrumb_bar::BreadcrumbBar;
pub use detail_view::DetailView;
pub use filter_input::FilterInput;
pub use grid_table::GridTable;
pub use help::HelpPanel;
pub use home::HomeView;
pub use nav_header::NavHeader;
pub use pagination_bar::PaginationBar;
pub use status_bar::StatusBar;
