//! Centralized theme and styling for the interactive selector
//!
//! Single source of truth for colors and pre-built styles, so the UI code
//! never hardcodes them inline.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Default foreground for list rows
    pub const FG_PRIMARY: Color = Color::Rgb(205, 214, 244);
    /// Dimmed foreground for annotations (dependency hints, counters)
    pub const FG_DIM: Color = Color::Rgb(127, 132, 156);
    /// Highlight color for the cursor row
    pub const ACCENT: Color = Color::Cyan;
    /// Checked-entry marker color
    pub const SELECTED: Color = Color::Green;
    /// Border and title color
    pub const BORDER: Color = Color::Rgb(88, 91, 112);
}

/// Pre-built styles used by the selector screens
pub struct Styles;

impl Styles {
    /// Style for the row under the cursor
    pub fn cursor_row() -> Style {
        Style::default()
            .fg(Colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for rows whose component is in the selection set
    pub fn selected_row() -> Style {
        Style::default().fg(Colors::SELECTED)
    }

    /// Style for plain rows
    pub fn plain_row() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Style for footer hints and inline annotations
    pub fn hint() -> Style {
        Style::default().fg(Colors::FG_DIM)
    }

    /// Style for block titles
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }
}
