//! Application constants and configuration

pub const APP_NAME: &str = "Notepad To-Do";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extension appended to interactively entered save titles.
pub const SAVE_EXTENSION: &str = "txt";
