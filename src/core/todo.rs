//! In-memory task list.

/// A single task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub value: String,
    pub done: bool,
}

impl Task {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            done: false,
        }
    }
}

/// Ordered list of tasks plus the panel visibility flag.
///
/// Index-based operations ignore out-of-range indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    /// Whether the task panel is shown.
    pub open: bool,
}

impl TaskList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// Appends a task and returns its index.
    pub fn add(&mut self, value: impl Into<String>) -> usize {
        self.tasks.push(Task::new(value));
        self.tasks.len() - 1
    }

    /// Inserts an empty task right after `index` and returns the new index.
    ///
    /// On an empty list the task becomes the first one.
    pub fn insert_below(&mut self, index: usize) -> usize {
        let at = if self.tasks.is_empty() {
            0
        } else {
            (index + 1).min(self.tasks.len())
        };
        self.tasks.insert(at, Task::new(String::new()));
        at
    }

    /// Copies the task at `index` right below it. Returns the copy's index.
    pub fn duplicate(&mut self, index: usize) -> Option<usize> {
        let copy = self.tasks.get(index)?.clone();
        self.tasks.insert(index + 1, copy);
        Some(index + 1)
    }

    pub fn edit(&mut self, index: usize, value: impl Into<String>) {
        if let Some(task) = self.tasks.get_mut(index) {
            task.value = value.into();
        }
    }

    pub fn toggle_done(&mut self, index: usize) {
        if let Some(task) = self.tasks.get_mut(index) {
            task.done = !task.done;
        }
    }

    pub fn delete(&mut self, index: usize) -> Option<Task> {
        (index < self.tasks.len()).then(|| self.tasks.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[&str]) -> TaskList {
        let mut list = TaskList::new();
        for v in values {
            list.add(*v);
        }
        list
    }

    fn values(list: &TaskList) -> Vec<&str> {
        list.tasks().iter().map(|t| t.value.as_str()).collect()
    }

    #[test]
    fn add_returns_index() {
        let mut list = TaskList::new();
        assert_eq!(list.add("a"), 0);
        assert_eq!(list.add("b"), 1);
        assert_eq!(values(&list), vec!["a", "b"]);
    }

    #[test]
    fn insert_below_places_empty_task_after_index() {
        let mut list = list_of(&["a", "b"]);
        assert_eq!(list.insert_below(0), 1);
        assert_eq!(values(&list), vec!["a", "", "b"]);
    }

    #[test]
    fn insert_below_on_empty_list() {
        let mut list = TaskList::new();
        assert_eq!(list.insert_below(5), 0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn insert_below_out_of_range_appends() {
        let mut list = list_of(&["a"]);
        assert_eq!(list.insert_below(9), 1);
    }

    #[test]
    fn duplicate_copies_below() {
        let mut list = list_of(&["a", "b"]);
        list.toggle_done(0);
        assert_eq!(list.duplicate(0), Some(1));
        assert_eq!(values(&list), vec!["a", "a", "b"]);
        assert!(list.tasks()[1].done);
    }

    #[test]
    fn duplicate_out_of_range_is_noop() {
        let mut list = list_of(&["a"]);
        assert_eq!(list.duplicate(3), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn edit_and_toggle() {
        let mut list = list_of(&["a"]);
        list.edit(0, "changed");
        list.toggle_done(0);
        assert_eq!(list.get(0), Some(&Task { value: "changed".into(), done: true }));
        list.edit(7, "ignored");
        list.toggle_done(7);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn delete_removes_task() {
        let mut list = list_of(&["a", "b"]);
        assert_eq!(list.delete(0).map(|t| t.value), Some("a".to_string()));
        assert_eq!(values(&list), vec!["b"]);
        assert_eq!(list.delete(4), None);
    }

    #[test]
    fn toggle_open_flips_visibility() {
        let mut list = TaskList::new();
        assert!(!list.open);
        list.toggle_open();
        assert!(list.open);
    }
}
