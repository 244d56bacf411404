//! Checklist file format - one task per line, checkbox prefix
//!
//! Completed tasks are written as `[x] <text>`, pending tasks as `[ ] <text>`.
//! Loading is lenient: unknown non-empty lines become pending tasks so plain
//! text lists can be imported.

use crate::list::{TaskItem, TaskList};
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

const DONE_PREFIX: &str = "[x] ";
const PENDING_PREFIX: &str = "[ ] ";

fn format_line(item: &TaskItem) -> String {
    if item.completed {
        format!("{}{}", DONE_PREFIX, item.text)
    } else {
        format!("{}{}", PENDING_PREFIX, item.text)
    }
}

fn parse_line(line: &str) -> Option<TaskItem> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return None;
    }
    if let Some(text) = line.strip_prefix(DONE_PREFIX).or_else(|| line.strip_prefix("[X] ")) {
        let mut item = TaskItem::new(text);
        item.completed = true;
        Some(item)
    } else if let Some(text) = line.strip_prefix(PENDING_PREFIX) {
        Some(TaskItem::new(text))
    } else {
        Some(TaskItem::new(line))
    }
}

/// Write the list as checkbox-style text. Failures are the caller's to
/// ignore; nothing is retried.
pub fn save(path: &Path, list: &TaskList) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    for item in list.iter() {
        writeln!(file, "{}", format_line(item))?;
    }
    debug!(path = %path.display(), tasks = list.len(), "Checklist saved");
    Ok(())
}

/// Read a checklist back. Selection state always starts cleared.
pub fn load(path: &Path) -> std::io::Result<TaskList> {
    let contents = std::fs::read_to_string(path)?;
    let items: Vec<TaskItem> = contents.lines().filter_map(parse_line).collect();
    if items.is_empty() {
        warn!(path = %path.display(), "Checklist file had no tasks");
    } else {
        debug!(path = %path.display(), tasks = items.len(), "Checklist loaded");
    }
    Ok(TaskList::from_items(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("notepad-todo-test-{}-{}", std::process::id(), name))
    }

    #[test]
    fn format_line_uses_checkbox_prefixes() {
        let pending = TaskItem::new("water plants");
        assert_eq!(format_line(&pending), "[ ] water plants");

        let mut done = TaskItem::new("buy milk");
        done.completed = true;
        assert_eq!(format_line(&done), "[x] buy milk");
    }

    #[test]
    fn parse_line_round_trips_both_states() {
        let done = parse_line("[x] buy milk").unwrap();
        assert!(done.completed);
        assert_eq!(done.text, "buy milk");

        let pending = parse_line("[ ] water plants").unwrap();
        assert!(!pending.completed);
        assert_eq!(pending.text, "water plants");
    }

    #[test]
    fn parse_line_accepts_uppercase_x_and_plain_text() {
        assert!(parse_line("[X] shipped").unwrap().completed);

        let plain = parse_line("just a note").unwrap();
        assert!(!plain.completed);
        assert_eq!(plain.text, "just a note");
    }

    #[test]
    fn parse_line_skips_blank_lines() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   ").is_none());
    }

    #[test]
    fn save_then_load_preserves_order_and_completion() {
        let mut list = TaskList::new();
        list.add("first");
        list.add("second");
        list.add("third");
        list.toggle_completed(1);
        list.toggle_selected(0); // selection must not survive the round trip

        let path = scratch_path("roundtrip.txt");
        save(&path, &list).unwrap();
        let loaded = load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded.get(0).unwrap().text, "first");
        assert!(!loaded.get(0).unwrap().completed);
        assert!(loaded.get(1).unwrap().completed);
        assert!(loaded.selected_indices().is_empty());
    }

    #[test]
    fn load_missing_file_is_an_error() {
        assert!(load(&scratch_path("does-not-exist.txt")).is_err());
    }
}
