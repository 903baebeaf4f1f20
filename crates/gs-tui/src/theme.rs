//! Theme and styling for the TUI.
//!
//! # Example
//!
//! ```
//! use gs_grid::Tone;
//! use gs_tui::Theme;
//!
//! let theme = Theme::dark();
//! let style = theme.tone_style(Tone::Danger);
//! ```

use gs_core::ColorScheme;
use gs_grid::Tone;
use ratatui::style::{Color, Modifier, Style};

/// Colors and styles used throughout the interface.
///
/// Use [`Theme::dark()`] or [`Theme::light()`], or [`Theme::from_scheme()`]
/// to pick one from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // =========================================================================
    // Tone Colors (badges)
    // =========================================================================
    /// Badge color for [`Tone::Neutral`].
    pub neutral_fg: Color,

    /// Badge color for [`Tone::Success`].
    pub success_fg: Color,

    /// Badge color for [`Tone::Info`].
    pub info_fg: Color,

    /// Badge color for [`Tone::Warning`].
    pub warning_fg: Color,

    /// Badge color for [`Tone::Danger`].
    pub danger_fg: Color,

    // =========================================================================
    // Base Colors
    // =========================================================================
    /// Primary foreground color.
    pub fg: Color,

    /// Dimmed/secondary text color.
    pub dimmed_fg: Color,

    /// Accent color for highlights and links.
    pub accent: Color,

    /// Error color.
    pub error_fg: Color,

    /// Background of modal overlays.
    pub overlay_bg: Color,

    // =========================================================================
    // Component Styles
    // =========================================================================
    /// Style for normal borders.
    pub border_style: Style,

    /// Style for focused borders and overlays.
    pub focused_border_style: Style,

    /// Style for the focused row and the selected home card.
    pub highlight_style: Style,

    /// Style for titles and column headers.
    pub header_style: Style,

    /// Style for the status bar.
    pub status_bar_style: Style,
}

impl Theme {
    /// Light text on a dark background.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            neutral_fg: Color::Rgb(158, 158, 158),
            success_fg: Color::Rgb(102, 187, 106),
            info_fg: Color::Rgb(100, 150, 255),
            warning_fg: Color::Rgb(251, 192, 45),
            danger_fg: Color::Rgb(239, 83, 80),

            fg: Color::Rgb(220, 220, 220),
            dimmed_fg: Color::Rgb(128, 128, 128),
            accent: Color::Rgb(100, 150, 255),
            error_fg: Color::Rgb(255, 80, 80),
            overlay_bg: Color::Rgb(25, 25, 35),

            border_style: Style::default().fg(Color::Rgb(80, 80, 100)),
            focused_border_style: Style::default().fg(Color::Rgb(100, 150, 255)),
            highlight_style: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(60, 60, 80))
                .add_modifier(Modifier::BOLD),
            header_style: Style::default()
                .fg(Color::Rgb(100, 150, 255))
                .add_modifier(Modifier::BOLD),
            status_bar_style: Style::default()
                .fg(Color::Rgb(180, 180, 180))
                .bg(Color::Rgb(40, 40, 50)),
        }
    }

    /// Dark text on a light background.
    #[must_use]
    pub fn light() -> Self {
        Self {
            neutral_fg: Color::Rgb(97, 97, 97),
            success_fg: Color::Rgb(46, 125, 50),
            info_fg: Color::Rgb(25, 118, 210),
            warning_fg: Color::Rgb(180, 130, 20),
            danger_fg: Color::Rgb(211, 47, 47),

            fg: Color::Rgb(30, 30, 30),
            dimmed_fg: Color::Rgb(100, 100, 100),
            accent: Color::Rgb(50, 100, 200),
            error_fg: Color::Rgb(180, 50, 50),
            overlay_bg: Color::Rgb(235, 235, 242),

            border_style: Style::default().fg(Color::Rgb(150, 150, 170)),
            focused_border_style: Style::default().fg(Color::Rgb(50, 100, 200)),
            highlight_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(200, 200, 220))
                .add_modifier(Modifier::BOLD),
            header_style: Style::default()
                .fg(Color::Rgb(50, 100, 200))
                .add_modifier(Modifier::BOLD),
            status_bar_style: Style::default()
                .fg(Color::Rgb(60, 60, 60))
                .bg(Color::Rgb(220, 220, 230)),
        }
    }

    /// Creates a theme from a [`ColorScheme`]. `Auto` picks the dark theme.
    #[must_use]
    pub fn from_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            _ => Self::dark(),
        }
    }

    /// The badge color for `tone`.
    #[must_use]
    pub const fn tone_color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Success => self.success_fg,
            Tone::Info => self.info_fg,
            Tone::Warning => self.warning_fg,
            Tone::Danger => self.danger_fg,
            _ => self.neutral_fg,
        }
    }

    /// Bold badge style for `tone`.
    #[must_use]
    pub fn tone_style(&self, tone: Tone) -> Style {
        Style::default()
            .fg(self.tone_color(tone))
            .add_modifier(Modifier::BOLD)
    }

    /// Base foreground style.
    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Dimmed/secondary text.
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed_fg)
    }

    /// Accent text.
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Underlined accent text for links.
    #[must_use]
    pub fn link_style(&self) -> Style {
        self.accent_style().add_modifier(Modifier::UNDERLINED)
    }

    /// Error text.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error_fg)
    }

    /// Key hints such as `[Enter]`.
    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default()
            .fg(self.warning_fg)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
