use crate::domain::query;
use crate::domain::task::{Task, TaskId};
use crate::store::TaskStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// The three task views rendered side by side. One pane holds keyboard
/// focus; the cursor always indexes into that pane's visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    All,
    Active,
    Completed,
}

impl Pane {
    pub fn next(self) -> Self {
        match self {
            Pane::All => Pane::Active,
            Pane::Active => Pane::Completed,
            Pane::Completed => Pane::All,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Pane::All => Pane::Completed,
            Pane::Active => Pane::All,
            Pane::Completed => Pane::Active,
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            Pane::All => "No tasks",
            Pane::Active => "No active tasks",
            Pane::Completed => "No completed tasks",
        }
    }
}

pub struct App {
    store: TaskStore,
    pub tasks: Vec<Task>,
    pub pane: Pane,
    pub selected: usize,
    pub mode: InputMode,
    pub input: String,
    pub status: Option<String>,
}

impl App {
    pub fn new(store: TaskStore) -> Self {
        let tasks = store.all();
        Self {
            store,
            tasks,
            pane: Pane::All,
            selected: 0,
            mode: InputMode::Normal,
            input: String::new(),
            status: None,
        }
    }

    /// Re-read the store snapshot after a transition and keep the cursor
    /// inside the focused pane's list.
    pub fn reload(&mut self) {
        self.tasks = self.store.all();
        let len = self.visible().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// The focused pane's tasks, derived from the current snapshot.
    pub fn visible(&self) -> Vec<&Task> {
        match self.pane {
            Pane::All => self.tasks.iter().collect(),
            Pane::Active => query::active_tasks(&self.tasks),
            Pane::Completed => query::completed_tasks(&self.tasks),
        }
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn focus_next_pane(&mut self) {
        self.pane = self.pane.next();
        self.selected = 0;
    }

    pub fn focus_previous_pane(&mut self) {
        self.pane = self.pane.previous();
        self.selected = 0;
    }

    fn selected_id(&self) -> Option<TaskId> {
        self.visible().get(self.selected).map(|t| t.id)
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            let toggled = self.store.toggle_status(id);
            self.reload();
            match toggled {
                Some(task) if task.completed => self.set_status("Marked completed"),
                Some(_) => self.set_status("Marked active"),
                None => {}
            }
        }
    }

    pub fn add_task(&mut self) {
        if self.input.trim().is_empty() {
            self.set_status("Cannot add an empty task");
            return;
        }
        self.store.add(&self.input);
        self.input.clear();
        self.mode = InputMode::Normal;
        self.reload();
        // Jump the cursor to the new task; it never shows up in Completed.
        if self.pane != Pane::Completed {
            self.selected = self.visible().len().saturating_sub(1);
        }
        self.set_status("Added");
    }

    pub fn clear_completed(&mut self) {
        let removed = self.store.clear_completed();
        self.reload();
        if removed > 0 {
            self.set_status(&format!("Cleared {removed} completed"));
        } else {
            self.set_status("No completed items");
        }
    }

    pub fn set_status(&mut self, msg: &str) {
        self.status = Some(msg.to_string());
    }
}
