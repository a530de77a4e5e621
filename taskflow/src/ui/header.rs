//! Header rendering: search box, sort key, and overall progress.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::{App, InputPurpose, PanelFocus};

/// Render the header line with the input box, sort key, and progress.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let input_focused = app.focus == PanelFocus::Input;

    let mut spans = Vec::new();
    if input_focused && app.input_purpose == InputPurpose::NewTask {
        spans.push(Span::styled("New task: ", theme::bold()));
        spans.push(Span::styled(app.input.as_str(), theme::normal()));
        spans.push(Span::styled("█", theme::highlighted()));
    } else {
        spans.push(Span::styled("Search: ", theme::bold()));
        let query = if input_focused {
            &app.input
        } else {
            &app.search_query
        };
        if query.is_empty() && !input_focused {
            spans.push(Span::styled("(press / to search)", theme::dimmed()));
        } else {
            spans.push(Span::styled(query.as_str(), theme::normal()));
        }
        if input_focused {
            spans.push(Span::styled("█", theme::highlighted()));
        }
    }

    spans.push(Span::raw("   "));
    spans.push(Span::styled("Sort: ", theme::bold()));
    spans.push(Span::styled(app.sort_key.label(), theme::normal()));

    let progress = app.view.progress;
    spans.push(Span::raw("   "));
    spans.push(Span::styled("Progress: ", theme::bold()));
    spans.push(Span::styled(
        format!(
            "{}/{} ({:.0}%)",
            progress.completed,
            progress.total,
            progress.percentage()
        ),
        theme::normal().fg(theme::SUCCESS),
    ));

    let block = Block::default()
        .title(Span::styled("TaskFlow", theme::panel_title(theme::HIGHLIGHT)))
        .borders(Borders::ALL)
        .border_style(if input_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
