use crate::domain::task::{Task, TaskId};

/// Sole owner of the task collection. Every change goes through `add`,
/// `toggle_status` or `clear_completed`; readers only ever get cloned
/// snapshots, so a view mid-render can never see a half-applied change.
#[derive(Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: impl IntoIterator<Item = Task>) -> Self {
        let mut store = Self::default();
        store.tasks.extend(seed);
        store
    }

    pub fn all(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new open task with the trimmed text. Input that trims to
    /// empty is rejected silently and the collection stays untouched.
    pub fn add(&mut self, raw_text: &str) -> Option<Task> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }
        let task = Task::new(text);
        self.tasks.push(task.clone());
        Some(task)
    }

    /// Flip completion on the matching task, leaving every other task and
    /// the collection order as they were. Unknown ids are a no-op, which
    /// keeps stale ids (e.g. raced with clear_completed) harmless.
    pub fn toggle_status(&mut self, id: TaskId) -> Option<Task> {
        for task in &mut self.tasks {
            if task.id == id {
                task.completed = !task.completed;
                return Some(task.clone());
            }
        }
        None
    }

    /// Drop every completed task, keeping the remaining order. Returns how
    /// many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        before - self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query;

    #[test]
    fn add_appends_an_open_task() {
        let mut store = TaskStore::new();
        let task = store.add("Buy milk").unwrap();

        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
        assert!(!task.id.is_nil());

        let tasks = store.all();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0], task);
    }

    #[test]
    fn add_trims_surrounding_whitespace() {
        let mut store = TaskStore::new();
        let task = store.add("  water the plants \t").unwrap();
        assert_eq!(task.text, "water the plants");
    }

    #[test]
    fn add_rejects_empty_and_whitespace_input() {
        let mut store = TaskStore::new();
        assert!(store.add("").is_none());
        assert!(store.add("   ").is_none());
        assert!(store.add("\t\n").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn add_preserves_existing_entries_and_order() {
        let mut store = TaskStore::new();
        store.add("first").unwrap();
        store.add("second").unwrap();
        store.add("third").unwrap();

        assert_eq!(store.len(), 3);
        let texts: Vec<String> = store.all().into_iter().map(|t| t.text).collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn ids_are_unique_across_adds() {
        let mut store = TaskStore::new();
        let a = store.add("a").unwrap();
        let b = store.add("b").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn toggle_flips_only_the_matching_task() {
        let mut store = TaskStore::new();
        let a = store.add("a").unwrap();
        let b = store.add("b").unwrap();
        let c = store.add("c").unwrap();

        let toggled = store.toggle_status(b.id).unwrap();
        assert!(toggled.completed);

        let tasks = store.all();
        assert_eq!(tasks[0], a);
        assert!(tasks[1].completed);
        assert_eq!(tasks[1].id, b.id);
        assert_eq!(tasks[1].text, b.text);
        assert_eq!(tasks[2], c);
    }

    #[test]
    fn toggle_twice_restores_the_task() {
        let mut store = TaskStore::new();
        let a = store.add("a").unwrap();
        store.toggle_status(a.id);
        let back = store.toggle_status(a.id).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn toggle_unknown_id_leaves_collection_unchanged() {
        let mut store = TaskStore::new();
        store.add("a").unwrap();
        store.add("b").unwrap();
        let before = store.all();

        assert!(store.toggle_status(TaskId::new_v4()).is_none());
        assert_eq!(store.all(), before);
    }

    #[test]
    fn clear_completed_keeps_open_tasks_in_order() {
        let mut store = TaskStore::new();
        let first = store.add("keep first").unwrap();
        let second = store.add("done one").unwrap();
        let third = store.add("done two").unwrap();
        let fourth = store.add("keep last").unwrap();
        store.toggle_status(second.id);
        store.toggle_status(third.id);

        assert_eq!(store.clear_completed(), 2);

        let tasks = store.all();
        assert_eq!(tasks, vec![first, fourth]);
        assert_eq!(query::completed_count(&tasks), 0);
    }

    #[test]
    fn clear_completed_with_nothing_done_is_a_noop() {
        let mut store = TaskStore::new();
        store.add("a").unwrap();
        let before = store.all();

        assert_eq!(store.clear_completed(), 0);
        assert_eq!(store.all(), before);
    }

    #[test]
    fn add_toggle_clear_scenario() {
        let mut store = TaskStore::new();
        let a = store.add("Task A").unwrap();
        let b = store.add("Task B").unwrap();

        store.toggle_status(a.id);

        let tasks = store.all();
        assert_eq!(query::active_count(&tasks), 1);
        assert_eq!(query::completed_count(&tasks), 1);
        assert_eq!(query::active_tasks(&tasks)[0].id, b.id);
        assert_eq!(query::completed_tasks(&tasks)[0].id, a.id);

        store.clear_completed();
        let tasks = store.all();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, b.id);
        assert_eq!(tasks[0].text, "Task B");
    }
}
