//! Sidebar rendering: category filter list and completion stats.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the sidebar with the category list and progress stats.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Sidebar;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(4)])
        .split(area);

    render_category_list(frame, chunks[0], app, is_focused);
    render_stats(frame, chunks[1], app);
}

fn render_category_list(frame: &mut Frame, area: Rect, app: &App, is_focused: bool) {
    let mut items = Vec::with_capacity(app.counts.categories.len() + 1);

    items.push(category_row(
        "All Tasks",
        theme::FG_PRIMARY,
        app.counts.all,
        app.selected_category == 0,
        is_focused,
    ));

    for (idx, tally) in app.counts.categories.iter().enumerate() {
        items.push(category_row(
            &tally.name,
            theme::category_color(&tally.color),
            tally.count,
            app.selected_category == idx + 1,
            is_focused,
        ));
    }

    let block = Block::default()
        .title(Span::styled(
            "Categories",
            theme::panel_title(theme::SIDEBAR_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn category_row(
    name: &str,
    bullet_color: ratatui::style::Color,
    count: usize,
    is_selected: bool,
    is_focused: bool,
) -> ListItem<'static> {
    let line = Line::from(vec![
        Span::styled("● ", ratatui::style::Style::default().fg(bullet_color)),
        Span::raw(name.to_string()),
        Span::raw(" "),
        Span::styled(format!("({count})"), theme::count_badge()),
    ]);

    let style = if is_selected && is_focused {
        theme::selected()
    } else if is_selected {
        theme::highlighted()
    } else {
        theme::normal()
    };

    ListItem::new(line).style(style)
}

fn render_stats(frame: &mut Frame, area: Rect, app: &App) {
    let progress = app.view.progress;
    let lines = vec![
        Line::from(vec![
            Span::styled("Completed ", theme::dimmed()),
            Span::styled(progress.completed.to_string(), theme::normal().fg(theme::SUCCESS)),
        ]),
        Line::from(vec![
            Span::styled("Remaining ", theme::dimmed()),
            Span::styled(progress.remaining().to_string(), theme::bold()),
        ]),
    ];

    let block = Block::default()
        .title(Span::styled("Today", theme::dimmed()))
        .borders(Borders::ALL)
        .border_style(theme::normal());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
