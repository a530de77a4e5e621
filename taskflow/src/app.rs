//! Application state and event handling.
//!
//! [`App`] owns the UI state and cached store snapshots; it never talks
//! to the stores directly. Key handling returns an [`AppCommand`] when a
//! key press requires a store mutation, and the runtime loop dispatches
//! it and feeds fresh snapshots back via [`App::set_data`]. The dashboard
//! view is recomputed on every change to its inputs.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use taskflow_model::{Category, Task, TaskDraft, TaskId};

use crate::dashboard::{
    CategoryCounts, CategorySelection, DashboardQuery, DashboardView, SortKey, build_view,
};

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Task list is focused (default).
    Tasks,
    /// Category sidebar is focused.
    Sidebar,
    /// Input box is focused.
    Input,
}

/// What the input box is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPurpose {
    /// Free-text search over titles and categories.
    Search,
    /// Title for a new task.
    NewTask,
}

/// A store mutation requested by a key press.
///
/// The runtime loop dispatches these against the stores; at most one is
/// ever in flight because the loop awaits the dispatch before polling
/// for the next key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Create a task from the given draft.
    CreateTask(TaskDraft),
    /// Flip a task's completion state.
    ToggleComplete(TaskId),
    /// Hard-delete a task.
    DeleteTask(TaskId),
    /// Archive a task (hide it from all views and counts).
    ArchiveTask(TaskId),
}

/// Main application state.
pub struct App {
    // -- Store snapshots --
    tasks: Vec<Task>,
    categories: Vec<Category>,

    // -- Computed dashboard output --
    /// Visible task list and progress aggregates.
    pub view: DashboardView,
    /// Live sidebar counts.
    pub counts: CategoryCounts,

    // -- UI state --
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Current text input.
    pub input: String,
    /// Cursor position in input (character index).
    pub cursor_position: usize,
    /// What the input box is editing.
    pub input_purpose: InputPurpose,
    /// Committed search query (live-updated while typing a search).
    pub search_query: String,
    /// Ordering within each completion partition.
    pub sort_key: SortKey,
    /// Selected sidebar row: 0 is "all", then one row per category.
    pub selected_category: usize,
    /// Selected row in the visible task list.
    pub selected_task: usize,
    /// Transient status line message.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Due date display format (chrono).
    pub date_format: String,
    max_title_len: usize,
}

impl App {
    /// Creates an application with empty snapshots.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            categories: Vec::new(),
            view: DashboardView::default(),
            counts: CategoryCounts::default(),
            focus: PanelFocus::Tasks,
            input: String::new(),
            cursor_position: 0,
            input_purpose: InputPurpose::Search,
            search_query: String::new(),
            sort_key: SortKey::default(),
            selected_category: 0,
            selected_task: 0,
            status: None,
            should_quit: false,
            date_format: "%Y-%m-%d".to_string(),
            max_title_len: taskflow_model::MAX_TITLE_LENGTH,
        }
    }

    /// Sets the maximum accepted input length for new task titles.
    #[must_use]
    pub fn with_max_title_len(mut self, len: usize) -> Self {
        self.max_title_len = len;
        self
    }

    /// Sets the due date display format.
    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Replaces the store snapshots and recomputes the dashboard.
    pub fn set_data(&mut self, tasks: Vec<Task>, categories: Vec<Category>) {
        self.tasks = tasks;
        self.categories = categories;
        self.refresh();
    }

    /// The category names currently listed in the sidebar.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The current filter/sort selections as a dashboard query.
    #[must_use]
    pub fn query(&self) -> DashboardQuery {
        DashboardQuery {
            category: self.category_selection(),
            search: self.search_query.clone(),
            sort: self.sort_key,
        }
    }

    /// The sidebar selection as a category filter.
    #[must_use]
    pub fn category_selection(&self) -> CategorySelection {
        if self.selected_category == 0 {
            CategorySelection::All
        } else {
            self.categories
                .get(self.selected_category - 1)
                .map_or(CategorySelection::All, |c| {
                    CategorySelection::Named(c.name.clone())
                })
        }
    }

    /// The task currently highlighted in the list, if any.
    #[must_use]
    pub fn current_task(&self) -> Option<&Task> {
        self.view.tasks.get(self.selected_task)
    }

    /// Sets a transient status line message.
    pub fn push_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Recomputes the dashboard view and counts from the current
    /// snapshots and selections, clamping list cursors.
    fn refresh(&mut self) {
        self.view = build_view(&self.tasks, &self.query());
        self.counts = CategoryCounts::tally(&self.categories, &self.tasks);
        let max_task = self.view.tasks.len().saturating_sub(1);
        self.selected_task = self.selected_task.min(max_task);
        let max_category = self.categories.len();
        self.selected_category = self.selected_category.min(max_category);
    }

    /// Handle a key event, returning a store command when one is needed.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<AppCommand> {
        self.status = None;

        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return None;
            }
            (KeyCode::Tab, _) => {
                self.cycle_focus();
                return None;
            }
            _ => {}
        }

        match self.focus {
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::Tasks => self.handle_tasks_key(key),
            PanelFocus::Sidebar => {
                self.handle_sidebar_key(key);
                None
            }
        }
    }

    /// Cycle focus: Tasks -> Sidebar -> Input -> Tasks.
    const fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Tasks => PanelFocus::Sidebar,
            PanelFocus::Sidebar => PanelFocus::Input,
            PanelFocus::Input => PanelFocus::Tasks,
        };
    }

    /// Handle key event when the task list is focused.
    fn handle_tasks_key(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_task = self.selected_task.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_task + 1 < self.view.tasks.len() {
                    self.selected_task += 1;
                }
                None
            }
            KeyCode::Char(' ') | KeyCode::Char('x') => self
                .current_task()
                .map(|t| AppCommand::ToggleComplete(t.id.clone())),
            KeyCode::Char('d') => self
                .current_task()
                .map(|t| AppCommand::DeleteTask(t.id.clone())),
            KeyCode::Char('a') => self
                .current_task()
                .map(|t| AppCommand::ArchiveTask(t.id.clone())),
            KeyCode::Char('s') => {
                self.sort_key = self.sort_key.next();
                self.refresh();
                None
            }
            KeyCode::Char('n') => {
                self.open_input(InputPurpose::NewTask);
                None
            }
            KeyCode::Char('/') => {
                self.open_input(InputPurpose::Search);
                None
            }
            _ => None,
        }
    }

    /// Handle key event when the sidebar is focused.
    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_category = self.selected_category.saturating_sub(1);
                self.refresh();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_category < self.categories.len() {
                    self.selected_category += 1;
                }
                self.refresh();
            }
            KeyCode::Enter => self.focus = PanelFocus::Tasks,
            _ => {}
        }
    }

    /// Handle key event when the input box is focused.
    fn handle_input_key(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match key.code {
            KeyCode::Esc => {
                self.cancel_input();
                None
            }
            KeyCode::Enter => self.submit_input(),
            KeyCode::Char(c) => {
                self.enter_char(c);
                None
            }
            KeyCode::Backspace => {
                self.delete_char();
                None
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if self.cursor_position < self.input.chars().count() {
                    self.cursor_position += 1;
                }
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.input.chars().count();
                None
            }
            _ => None,
        }
    }

    /// Focus the input box for the given purpose.
    fn open_input(&mut self, purpose: InputPurpose) {
        self.focus = PanelFocus::Input;
        self.input_purpose = purpose;
        self.input = match purpose {
            InputPurpose::Search => self.search_query.clone(),
            InputPurpose::NewTask => String::new(),
        };
        self.cursor_position = self.input.chars().count();
    }

    /// Leave the input box, clearing an in-progress search.
    fn cancel_input(&mut self) {
        if self.input_purpose == InputPurpose::Search {
            self.search_query.clear();
            self.refresh();
        }
        self.input.clear();
        self.cursor_position = 0;
        self.focus = PanelFocus::Tasks;
    }

    /// Commit the input box contents.
    fn submit_input(&mut self) -> Option<AppCommand> {
        match self.input_purpose {
            InputPurpose::Search => {
                // The query already tracks the input live; Enter just
                // returns focus to the list.
                self.focus = PanelFocus::Tasks;
                None
            }
            InputPurpose::NewTask => {
                let title = self.input.trim().to_string();
                if title.is_empty() {
                    self.push_status("Task title cannot be empty");
                    return None;
                }
                let category = match self.category_selection() {
                    CategorySelection::All => None,
                    CategorySelection::Named(name) => Some(name),
                };
                self.input.clear();
                self.cursor_position = 0;
                self.focus = PanelFocus::Tasks;
                Some(AppCommand::CreateTask(TaskDraft {
                    title,
                    category,
                    ..TaskDraft::default()
                }))
            }
        }
    }

    /// Insert a character at the cursor position.
    fn enter_char(&mut self, c: char) {
        if self.input_purpose == InputPurpose::NewTask
            && self.input.chars().count() >= self.max_title_len
        {
            return;
        }
        let byte_index = self
            .input
            .char_indices()
            .nth(self.cursor_position)
            .map_or(self.input.len(), |(i, _)| i);
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
        self.after_input_change();
    }

    /// Delete the character before the cursor.
    fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let byte_index = self
            .input
            .char_indices()
            .nth(self.cursor_position - 1)
            .map(|(i, _)| i);
        if let Some(i) = byte_index {
            self.input.remove(i);
            self.cursor_position -= 1;
            self.after_input_change();
        }
    }

    /// A search re-runs the dashboard transform on every keystroke.
    fn after_input_change(&mut self) {
        if self.input_purpose == InputPurpose::Search {
            self.search_query = self.input.clone();
            self.refresh();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
