//! Status bar rendering: transient messages and key hints.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, PanelFocus};

const TASK_HINTS: &str =
    " n new · / search · space done · a archive · d delete · s sort · tab panel · q quit";
const SIDEBAR_HINTS: &str = " j/k select category · enter back to tasks · tab panel · q quit";
const INPUT_HINTS: &str = " enter confirm · esc cancel";

/// Render the status bar: a transient message when one is set, key
/// hints for the focused panel otherwise.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let line = app.status.as_ref().map_or_else(
        || {
            let hints = match app.focus {
                PanelFocus::Tasks => TASK_HINTS,
                PanelFocus::Sidebar => SIDEBAR_HINTS,
                PanelFocus::Input => INPUT_HINTS,
            };
            Line::from(Span::raw(hints))
        },
        |message| Line::from(Span::styled(format!(" {message}"), theme::bold())),
    );

    frame.render_widget(Paragraph::new(line).style(theme::status_bar_bg()), area);
}
