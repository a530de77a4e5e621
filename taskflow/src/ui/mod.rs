//! Terminal UI rendering.

pub mod header;
pub mod sidebar;
pub mod status_bar;
pub mod task_list;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    // Header on top, status bar at the bottom.
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let header_area = main_chunks[0];
    let content_area = main_chunks[1];
    let status_area = main_chunks[2];

    // Sidebar on the left, task list filling the rest.
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(20)])
        .split(content_area);

    header::render(frame, header_area, app);
    sidebar::render(frame, content_chunks[0], app);
    task_list::render(frame, content_chunks[1], app);
    status_bar::render(frame, status_area, app);
}
