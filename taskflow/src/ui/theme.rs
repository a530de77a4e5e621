//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};

use taskflow_model::Priority;

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Highlight color for focused elements.
pub const HIGHLIGHT: Color = Color::Cyan;

/// Success indicator color (completed work).
pub const SUCCESS: Color = Color::Green;

/// Warning/badge color.
pub const WARNING: Color = Color::Yellow;

/// Error indicator color.
pub const ERROR: Color = Color::Red;

/// Panel title color for the task list panel.
pub const TASKS_TITLE: Color = Color::Green;

/// Panel title color for the sidebar panel.
pub const SIDEBAR_TITLE: Color = Color::Blue;

/// Fallback color for categories with an unparsable stored color.
pub const CATEGORY_FALLBACK: Color = Color::DarkGray;

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (timestamps, metadata, completed tasks).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Highlighted text style (focused panel borders).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Selected item style (in lists).
#[must_use]
pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Style for completed task rows (dim, struck through).
#[must_use]
pub fn completed() -> Style {
    Style::default()
        .fg(FG_SECONDARY)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Style for the status bar background.
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}

/// Style for panel titles with a given color (bold).
#[must_use]
pub fn panel_title(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Style for count badges in the sidebar.
#[must_use]
pub fn count_badge() -> Style {
    Style::default().fg(WARNING)
}

/// Marker color for a priority level.
#[must_use]
pub const fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => ERROR,
        Priority::Medium => WARNING,
        Priority::Low => SUCCESS,
    }
}

/// Parses a `#RRGGBB` category color into a terminal color, falling back
/// to a neutral gray on malformed input.
#[must_use]
pub fn category_color(hex: &str) -> Color {
    let parsed = hex.strip_prefix('#').and_then(|rest| {
        if rest.len() != 6 || !rest.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&rest[0..2], 16).ok()?;
        let g = u8::from_str_radix(&rest[2..4], 16).ok()?;
        let b = u8::from_str_radix(&rest[4..6], 16).ok()?;
        Some(Color::Rgb(r, g, b))
    });
    parsed.unwrap_or(CATEGORY_FALLBACK)
}
