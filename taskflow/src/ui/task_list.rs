//! Task list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use taskflow_model::Task;

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the visible task list, or an empty-state hint.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Tasks;

    let title = match app.category_selection().label() {
        "all" => "Tasks".to_string(),
        name => format!("Tasks — {name}"),
    };
    let block = Block::default()
        .title(Span::styled(title, theme::panel_title(theme::TASKS_TITLE)))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    if app.view.tasks.is_empty() {
        let hint = if app.search_query.is_empty() {
            "No tasks here yet — press n to add one"
        } else {
            "No tasks match your search"
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(hint, theme::dimmed()))).block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .view
        .tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            task_row(task, &app.date_format, idx == app.selected_task, is_focused)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn task_row(
    task: &Task,
    date_format: &str,
    is_selected: bool,
    is_focused: bool,
) -> ListItem<'static> {
    let checkbox = if task.completed { "[✓] " } else { "[ ] " };
    let body_style = if task.completed {
        theme::completed()
    } else {
        theme::normal()
    };

    let mut spans = vec![
        Span::styled(checkbox, body_style),
        Span::styled(
            "● ",
            ratatui::style::Style::default().fg(theme::priority_color(task.priority)),
        ),
        Span::styled(task.title.clone(), body_style),
    ];

    if let Some(due) = task.due_date {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("due {}", due.format(date_format)),
            theme::dimmed(),
        ));
    }

    spans.push(Span::raw(" "));
    spans.push(Span::styled(format!("#{}", task.category), theme::dimmed()));

    let line = Line::from(spans);
    let style = if is_selected && is_focused {
        theme::selected()
    } else if is_selected {
        theme::highlighted()
    } else {
        theme::normal()
    };

    ListItem::new(line).style(style)
}
