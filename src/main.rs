#![windows_subsystem = "windows"]
//! Notepad To-Do - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod list;
mod settings;
mod store;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use tracing::info;
use ui::components::{instruction_line, task_checkbox};
use utils::rasterize_icon_square;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "notepad-todo.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,notepad_todo=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = utils::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Notepad To-Do starting");

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(760.0, 620.0)))
        .with_min_inner_size([460.0, 380.0])
        .with_title(APP_NAME);

    // Set window/taskbar icon from the inline SVG
    {
        let (rgba, w, h) = rasterize_icon_square(64);
        let icon = egui::IconData { rgba, width: w, height: h };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Route the window close button through the save prompt so the list
        // isn't silently lost
        if ctx.input(|i| i.viewport().close_requested()) && !self.allow_close {
            if self.tasks.is_empty() {
                self.allow_close = true;
            } else {
                ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
                self.open_save_prompt();
            }
        }

        // Global shortcuts, inactive while a prompt is up. Keys are read
        // first so handlers (file dialogs block) run outside the input lock.
        if self.prompt.is_none() && !ctx.wants_keyboard_input() {
            let [add, complete, delete, open, quit, escape] = ctx.input(|i| {
                [
                    i.key_pressed(egui::Key::A),
                    i.key_pressed(egui::Key::C),
                    i.key_pressed(egui::Key::D),
                    i.key_pressed(egui::Key::O),
                    i.key_pressed(egui::Key::Q),
                    i.key_pressed(egui::Key::Escape),
                ]
            });
            if add {
                self.open_add_prompt();
            } else if complete {
                self.complete_selected();
            } else if delete {
                self.delete_selected();
            } else if open {
                self.open_list_via_dialog();
            } else if quit {
                self.open_save_prompt();
            } else if escape {
                self.tasks.clear_selection();
            }
        }

        self.render_header(ctx);
        self.render_task_panel(ctx);
        self.render_prompt(ctx);
        self.render_toast(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}

// ============================================================================
// VIEW RENDERING (header, task rows, toast)
// ============================================================================

impl App {
    fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .exact_height(theme::HEADER_HEIGHT)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!(
                                "{}  TO-DO LIST",
                                egui_phosphor::regular::LIST_CHECKS
                            ))
                            .size(theme::FONT_TITLE)
                            .color(theme::INK)
                            .strong(),
                        )
                        .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let done = self.tasks.iter().filter(|t| t.completed).count();
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!(
                                    "{} / {} done",
                                    done,
                                    self.tasks.len()
                                ))
                                .size(theme::FONT_LABEL)
                                .color(theme::TEXT_MUTED),
                            )
                            .selectable(false),
                        );
                    });
                });
                ui.add_space(theme::SPACING_SM);

                instruction_line(ui, "A", "add a task   (click a box to select)");
                instruction_line(ui, "C", "complete selected tasks");
                instruction_line(ui, "D", "delete selected tasks");
                instruction_line(ui, "Q", "quit and title the task list");
            });
    }

    fn render_task_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                if self.tasks.is_empty() {
                    ui.add_space(48.0);
                    ui.vertical_centered(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new("Nothing to do yet")
                                    .size(theme::FONT_BODY)
                                    .color(theme::TEXT_DIM),
                            )
                            .selectable(false),
                        );
                        ui.add_space(theme::SPACING_SM);
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new("Press A to add your first task, O to open a saved list")
                                    .size(theme::FONT_LABEL)
                                    .color(theme::TEXT_DIM),
                            )
                            .selectable(false),
                        );
                    });
                    return;
                }

                egui::ScrollArea::vertical().show(ui, |ui| {
                    let mut toggled: Option<usize> = None;

                    for index in 0..self.tasks.len() {
                        // In range: the loop bound is the list length and
                        // nothing mutates the list inside the loop
                        let (text, completed, selected) = {
                            let item = self.tasks.get(index).unwrap();
                            (item.text.clone(), item.completed, item.selected)
                        };

                        let row_size =
                            egui::vec2(ui.available_width(), theme::TASK_ROW_HEIGHT);
                        let row_rect = egui::Rect::from_min_size(ui.cursor().min, row_size);
                        if ui.rect_contains_pointer(row_rect) {
                            ui.painter().rect_filled(
                                row_rect,
                                theme::RADIUS_DEFAULT,
                                theme::BG_HOVER,
                            );
                        }

                        ui.allocate_ui_with_layout(
                            row_size,
                            egui::Layout::left_to_right(egui::Align::Center),
                            |ui| {
                                ui.add_space(theme::SPACING_SM);
                                if task_checkbox(ui, selected, completed).clicked() {
                                    toggled = Some(index);
                                }
                                ui.add_space(theme::SPACING_MD);

                                let mut rich = egui::RichText::new(&text)
                                    .size(theme::FONT_BODY)
                                    .color(theme::INK);
                                if completed {
                                    rich = rich.strikethrough().color(theme::TEXT_MUTED);
                                }
                                ui.add(egui::Label::new(rich).selectable(false));
                            },
                        );
                        ui.add_space(theme::TASK_ROW_SPACING);
                    }

                    if let Some(index) = toggled {
                        self.tasks.toggle_selected(index);
                    }
                });
            });
    }

    fn render_toast(&mut self, ctx: &egui::Context) {
        const TOAST_SECS: f32 = 2.5;
        let Some(start) = self.toast_start else {
            return;
        };
        if start.elapsed().as_secs_f32() > TOAST_SECS {
            self.toast_message = None;
            self.toast_start = None;
            return;
        }
        if let Some(message) = self.toast_message.clone() {
            egui::Area::new(egui::Id::new("toast"))
                .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
                .show(ctx, |ui| {
                    egui::Frame::new()
                        .fill(theme::INK)
                        .corner_radius(theme::RADIUS_LARGE)
                        .inner_margin(egui::Margin::symmetric(14, 8))
                        .show(ui, |ui| {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(message)
                                        .size(theme::FONT_LABEL)
                                        .color(egui::Color32::WHITE),
                                )
                                .selectable(false),
                            );
                        });
                });
            // Keep repainting so the toast disappears on schedule
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }
    }
}
