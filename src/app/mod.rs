//! App module - contains the main application state and logic

mod modals;
mod tasks;

use crate::list::TaskList;
use crate::settings::Settings;
use crate::theme;
use crate::types::Prompt;
use eframe::egui;
use std::path::PathBuf;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) tasks: TaskList,
    // Open text prompt, if any (add task / title the list at quit)
    pub(crate) prompt: Option<Prompt>,
    // Quit flow: set once the save prompt has been answered
    pub(crate) allow_close: bool,
    // Paths
    pub(crate) save_dir: PathBuf,
    pub(crate) data_dir: PathBuf,
    // Title prefill for the save prompt (taken from an opened file)
    pub(crate) last_title: Option<String>,
    // Toast notification
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_start: Option<std::time::Instant>,
    // Window geometry tracking for settings
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Light);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        let save_dir = settings.save_dir_or_default();

        Self {
            tasks: TaskList::new(),
            prompt: None,
            allow_close: false,
            save_dir,
            data_dir,
            last_title: None,
            toast_message: None,
            toast_start: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            save_dir: Some(self.save_dir.to_string_lossy().to_string()),
        };
        settings.save(&self.data_dir);
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_start = Some(std::time::Instant::now());
    }
}
