//! Task commands - everything the keyboard shortcuts and prompts trigger

use super::App;
use crate::store;
use crate::types::{Prompt, PromptKind};
use crate::utils::{default_save_title, title_to_filename};
use std::path::PathBuf;
use tracing::{info, warn};

impl App {
    /// Confirmed text from the add prompt. Blank entries are dropped.
    pub(crate) fn add_task(&mut self, text: String) {
        let text = text.trim().to_string();
        if text.is_empty() {
            return;
        }
        info!(task = %text, "Task added");
        self.tasks.add(text);
    }

    /// Toggle completion of every selected task and deselect it.
    pub(crate) fn complete_selected(&mut self) {
        if self.tasks.selected_count() == 0 {
            return;
        }
        self.tasks.complete_selected();
    }

    pub(crate) fn delete_selected(&mut self) {
        let count = self.tasks.selected_count();
        if count == 0 {
            return;
        }
        self.tasks.delete_selected();
        info!(count, "Deleted selected tasks");
    }

    /// Open the add-task prompt.
    pub(crate) fn open_add_prompt(&mut self) {
        self.prompt = Some(Prompt::new(PromptKind::AddTask));
    }

    /// Open the quit-time save prompt, prefilled with the last used title
    /// or a dated default.
    pub(crate) fn open_save_prompt(&mut self) {
        let title = self
            .last_title
            .clone()
            .unwrap_or_else(default_save_title);
        self.prompt = Some(Prompt::with_input(PromptKind::SaveList, title));
    }

    /// Write the list to `<save_dir>/<title>.txt`. A failed write is logged
    /// and otherwise ignored; the quit flow proceeds either way.
    pub(crate) fn save_list(&mut self, title: &str) {
        let filename = title_to_filename(title);
        let path = self.save_dir.join(&filename);
        match store::save(&path, &self.tasks) {
            Ok(()) => {
                info!(path = %path.display(), tasks = self.tasks.len(), "Task list saved");
                self.last_title = Some(filename.trim_end_matches(".txt").to_string());
            }
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Failed to save task list");
            }
        }
    }

    /// Browse for a save location with a native dialog. Returns true if the
    /// list was written.
    pub(crate) fn save_list_via_dialog(&mut self, title: &str) -> bool {
        std::fs::create_dir_all(&self.save_dir).ok();
        let picked = rfd::FileDialog::new()
            .set_directory(&self.save_dir)
            .set_file_name(title_to_filename(title))
            .save_file();
        let Some(path) = picked else {
            return false;
        };
        if let Some(dir) = path.parent() {
            self.save_dir = PathBuf::from(dir);
        }
        match store::save(&path, &self.tasks) {
            Ok(()) => {
                info!(path = %path.display(), tasks = self.tasks.len(), "Task list saved");
                true
            }
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Failed to save task list");
                false
            }
        }
    }

    /// Pick an existing checklist file and replace the current list with it.
    pub(crate) fn open_list_via_dialog(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Text files", &["txt"])
            .set_directory(&self.save_dir)
            .pick_file();
        let Some(path) = picked else {
            return;
        };
        match store::load(&path) {
            Ok(list) => {
                info!(path = %path.display(), tasks = list.len(), "Task list opened");
                self.show_toast(format!("Opened {} tasks", list.len()));
                self.tasks = list;
                self.last_title = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string());
                if let Some(dir) = path.parent() {
                    self.save_dir = PathBuf::from(dir);
                }
            }
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Failed to open task list");
                self.show_toast("Could not open that file");
            }
        }
    }
}
