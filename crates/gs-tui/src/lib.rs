//! Terminal front end for grid-suite using Ratatui.
//!
//! The TUI drives the grid engine from the keyboard: dataset cards on the
//! home view, a sortable and filterable paged grid per dataset, and a detail
//! view for the activated row, with breadcrumbs and focus restoration on the
//! way back.
//!
//! # Architecture
//!
//! ```text
//! crates/gs-tui/src/
//!   lib.rs           # Public API exports, run() and the event loop
//!   app.rs           # Application state, key mapping, updates
//!   event.rs         # Event types (Key, Resize, Tick, Render)
//!   tui.rs           # Terminal wrapper with async event streaming
//!   action.rs        # User actions (commands from key bindings)
//!   ui.rs            # Main layout rendering orchestration
//!   theme.rs         # Colors and badge tones
//!   error.rs         # TUI-specific error types
//!   components/
//!     nav_header.rs      # Title and dataset tabs
//!     breadcrumb_bar.rs  # Breadcrumb trail
//!     home.rs            # Dataset cards
//!     grid_table.rs      # Header, filters, page rows
//!     pagination_bar.rs  # Page size, page buttons, summary
//!     detail_view.rs     # Record fields or error state
//!     filter_input.rs    # Filter overlay
//!     help.rs            # Key bindings overlay
//!     status_bar.rs      # Mode, status message, counts
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use gs_core::Config;
//! use gs_tui::run;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = gs_datasets::default_registry()?;
//!     run(Config::default(), registry, Some("logs")).await?;
//!     Ok(())
//! }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod action;
pub mod app;
pub mod components;
pub mod error;
pub mod event;
pub mod theme;
pub mod tui;
pub mod ui;

use std::time::Instant;

use gs_core::Config;
use gs_grid::{DatasetRegistry, Route};
use ratatui::layout::Rect;
use tracing::{debug, info};

// Public re-exports
pub use action::Action;
pub use app::{App, AppMode, StatusMessage, View};
pub use error::TuiError;
pub use event::Event;
pub use theme::Theme;
pub use tui::Tui;

/// Runs the TUI over `registry`.
///
/// Starts at the grid of the dataset `start` when given, otherwise at the
/// home view.
///
/// # Errors
///
/// Returns an error if:
/// - `start` names no registered dataset
/// - the configured tick rate is zero
/// - the terminal cannot be initialized or drawn to
pub async fn run(
    config: Config,
    registry: DatasetRegistry,
    start: Option<&str>,
) -> Result<(), TuiError> {
    let start_route = match start {
        Some(id) => Route::Grid(registry.resolve(id)?.id().clone()),
        None => Route::Home,
    };

    if config.tui.tick_rate_ms == 0 {
        return Err(TuiError::config("tui.tick_rate_ms must be positive"));
    }
    #[allow(clippy::cast_precision_loss)]
    let tick_rate = 1000.0 / config.tui.tick_rate_ms as f64;
    let frame_rate = f64::from(config.tui.frame_rate);

    let mut tui = Tui::new(tick_rate)?.with_frame_rate(frame_rate);
    let theme = Theme::from_scheme(config.tui.color_scheme);

    let mut app = App::new(config, registry);
    if start_route != Route::Home {
        app.navigate(start_route);
    }

    tui.enter()?;

    info!("Entering main event loop");
    let result = run_event_loop(&mut tui, &mut app, &theme).await;

    tui.exit()?;
    result
}

/// Runs the main event loop until the app asks to quit.
async fn run_event_loop(tui: &mut Tui, app: &mut App, theme: &Theme) -> Result<(), TuiError> {
    tui.draw(|frame| ui::render(app, frame, theme))?;

    loop {
        let event = tui.next_event().await?;

        let action = match event {
            Event::Key(key) => app.handle_key(key),
            Event::Resize { width, height } => {
                app.set_terminal_size(Rect::new(0, 0, width, height));
                Action::Render
            }
            Event::Tick => {
                app.tick(Instant::now());
                Action::None
            }
            Event::Render => Action::Render,
            Event::FocusGained | Event::FocusLost => Action::None,
        };

        let needs_render = action.needs_render();
        app.update(action);

        if app.should_quit {
            debug!("Quit requested");
            break;
        }

        if needs_render {
            tui.draw(|frame| ui::render(app, frame, theme))?;
        }
    }

    Ok(())
}
