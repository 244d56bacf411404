//! Task list container - ordered items with completed/selected flags

/// A single to-do entry. Selection is transient UI state and is never saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub text: String,
    pub completed: bool,
    pub selected: bool,
}

impl TaskItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
            selected: false,
        }
    }
}

/// Ordered task collection. Display order is insertion order; indices are
/// dense and removal compacts immediately.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    items: Vec<TaskItem>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<TaskItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskItem> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&TaskItem> {
        self.items.get(index)
    }

    /// Append a new pending task.
    pub fn add(&mut self, text: impl Into<String>) {
        self.items.push(TaskItem::new(text));
    }

    /// Erase by index. Out-of-range is a no-op.
    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Flip the selection flag. Out-of-range is a no-op.
    pub fn toggle_selected(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.selected = !item.selected;
        }
    }

    /// Flip the completion flag. Out-of-range is a no-op.
    pub fn toggle_completed(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.completed = !item.completed;
        }
    }

    /// Ascending indices of currently selected tasks.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.selected)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|item| item.selected).count()
    }

    /// Toggle completion of every selected task, then deselect it.
    pub fn complete_selected(&mut self) {
        for item in self.items.iter_mut().filter(|item| item.selected) {
            item.completed = !item.completed;
            item.selected = false;
        }
    }

    /// Remove all selected tasks, compacting the remainder.
    pub fn delete_selected(&mut self) {
        // Reverse order so earlier removals don't shift pending indices
        for index in self.selected_indices().into_iter().rev() {
            self.remove(index);
        }
    }

    pub fn clear_selection(&mut self) {
        for item in &mut self.items {
            item.selected = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskList {
        let mut list = TaskList::new();
        list.add("buy milk");
        list.add("water plants");
        list.add("file taxes");
        list
    }

    #[test]
    fn add_appends_in_order() {
        let list = sample();
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(0).unwrap().text, "buy milk");
        assert_eq!(list.get(2).unwrap().text, "file taxes");
        assert!(!list.get(0).unwrap().completed);
        assert!(!list.get(0).unwrap().selected);
    }

    #[test]
    fn remove_compacts_indices() {
        let mut list = sample();
        list.remove(1);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().text, "buy milk");
        assert_eq!(list.get(1).unwrap().text, "file taxes");
    }

    #[test]
    fn out_of_range_ops_are_noops() {
        let mut list = sample();
        list.remove(99);
        list.toggle_selected(99);
        list.toggle_completed(99);
        assert_eq!(list.len(), 3);
        assert!(list.selected_indices().is_empty());
    }

    #[test]
    fn toggle_flags_flip_in_place() {
        let mut list = sample();
        list.toggle_completed(0);
        assert!(list.get(0).unwrap().completed);
        list.toggle_completed(0);
        assert!(!list.get(0).unwrap().completed);

        list.toggle_selected(2);
        assert_eq!(list.selected_indices(), vec![2]);
        list.toggle_selected(2);
        assert!(list.selected_indices().is_empty());
    }

    #[test]
    fn complete_selected_toggles_and_deselects() {
        let mut list = sample();
        list.toggle_completed(0); // already done once
        list.toggle_selected(0);
        list.toggle_selected(1);
        list.complete_selected();
        // Toggled, not forced: index 0 flips back to pending
        assert!(!list.get(0).unwrap().completed);
        assert!(list.get(1).unwrap().completed);
        assert!(list.selected_indices().is_empty());
    }

    #[test]
    fn delete_selected_removes_all_marked() {
        let mut list = sample();
        list.toggle_selected(0);
        list.toggle_selected(2);
        list.delete_selected();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().text, "water plants");
    }

    #[test]
    fn delete_selected_on_empty_selection_keeps_list() {
        let mut list = sample();
        list.delete_selected();
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn clear_selection_unmarks_everything() {
        let mut list = sample();
        list.toggle_selected(0);
        list.toggle_selected(1);
        list.clear_selection();
        assert!(list.selected_indices().is_empty());
    }
}
