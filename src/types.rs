//! Common types and data structures

/// Which text prompt is currently open.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Enter the text of a new task.
    AddTask,
    /// Title the list before writing it out at quit time.
    SaveList,
}

/// Transient text-entry state for the modal prompts. Enter confirms,
/// Escape cancels; the buffer itself lives in an egui `TextEdit`.
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
    pub needs_focus: bool,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
            needs_focus: true,
        }
    }

    pub fn with_input(kind: PromptKind, input: String) -> Self {
        Self {
            kind,
            input,
            needs_focus: true,
        }
    }
}
