//! Modal text prompts (add task, quit-time save)

use super::App;
use crate::theme;
use crate::types::PromptKind;
use eframe::egui;

enum PromptAction {
    None,
    Confirm,
    Cancel,
    Browse,
}

impl App {
    /// Render the open prompt, if any, and apply whatever the user decided.
    pub(crate) fn render_prompt(&mut self, ctx: &egui::Context) {
        let Some(mut prompt) = self.prompt.take() else {
            return;
        };

        let mut action = PromptAction::None;

        let (title, hint, confirm_label) = match prompt.kind {
            PromptKind::AddTask => ("Enter new task:", "e.g. water the plants", "Add"),
            PromptKind::SaveList => (
                "Enter a title for the task list:",
                "tasks",
                "Save & Quit",
            ),
        };

        let modal_response = egui::Modal::new(egui::Id::new("text_prompt"))
            .backdrop_color(egui::Color32::from_black_alpha(90))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(340.0);

                ui.add(
                    egui::Label::new(
                        egui::RichText::new(title)
                            .size(theme::FONT_TITLE)
                            .color(theme::INK)
                            .strong(),
                    )
                    .selectable(false),
                );
                ui.add_space(theme::SPACING_LG);

                let text_response = theme::input_frame()
                    .show(ui, |ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut prompt.input)
                                .hint_text(hint)
                                .frame(false)
                                .desired_width(ui.available_width())
                                .font(egui::FontId::proportional(theme::FONT_BODY)),
                        )
                    })
                    .inner;

                if prompt.needs_focus {
                    prompt.needs_focus = false;
                    text_response.request_focus();
                }
                let enter = text_response.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if enter {
                    action = PromptAction::Confirm;
                }

                ui.add_space(theme::SPACING_XL);

                ui.horizontal(|ui| {
                    let btn = egui::vec2(110.0, theme::BUTTON_HEIGHT);
                    let confirm_text = format!(
                        "{}  {}",
                        egui_phosphor::regular::CHECK,
                        confirm_label
                    );
                    if theme::paint_button(
                        ui,
                        btn,
                        theme::BTN_ACCENT,
                        egui::Color32::WHITE,
                        &confirm_text,
                    ) {
                        action = PromptAction::Confirm;
                    }

                    if prompt.kind == PromptKind::SaveList {
                        let browse_text = format!(
                            "{}  Browse...",
                            egui_phosphor::regular::FOLDER_OPEN
                        );
                        if theme::paint_button(
                            ui,
                            btn,
                            theme::BTN_DEFAULT,
                            theme::INK,
                            &browse_text,
                        ) {
                            action = PromptAction::Browse;
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let cancel_label = match prompt.kind {
                            PromptKind::AddTask => "Cancel".to_string(),
                            PromptKind::SaveList => {
                                format!("{}  Skip", egui_phosphor::regular::X)
                            }
                        };
                        let fill = match prompt.kind {
                            PromptKind::AddTask => theme::BTN_DEFAULT,
                            PromptKind::SaveList => theme::BTN_DANGER,
                        };
                        let text = match prompt.kind {
                            PromptKind::AddTask => theme::INK,
                            PromptKind::SaveList => egui::Color32::WHITE,
                        };
                        if theme::paint_button(ui, egui::vec2(90.0, theme::BUTTON_HEIGHT), fill, text, &cancel_label) {
                            action = PromptAction::Cancel;
                        }
                    });
                });

                if prompt.kind == PromptKind::SaveList {
                    ui.add_space(theme::SPACING_MD);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!(
                                "Saved to {}",
                                self.save_dir.display()
                            ))
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                }
            });

        // Escape or a backdrop click behaves like Cancel / Skip
        if matches!(action, PromptAction::None) && modal_response.should_close() {
            action = PromptAction::Cancel;
        }

        match (prompt.kind, action) {
            (PromptKind::AddTask, PromptAction::Confirm) => {
                self.add_task(prompt.input);
            }
            (PromptKind::AddTask, PromptAction::Cancel) => {}
            (PromptKind::SaveList, PromptAction::Confirm) => {
                self.save_list(&prompt.input);
                self.allow_close = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            (PromptKind::SaveList, PromptAction::Browse) => {
                if self.save_list_via_dialog(&prompt.input) {
                    self.allow_close = true;
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                } else {
                    // Dialog dismissed: keep the prompt up
                    self.prompt = Some(prompt);
                }
            }
            (PromptKind::SaveList, PromptAction::Cancel) => {
                // Quit without saving, matching the original escape-key abort
                self.allow_close = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            (_, PromptAction::None) => {
                self.prompt = Some(prompt);
            }
            // No browse button on the add prompt
            (PromptKind::AddTask, PromptAction::Browse) => {}
        }
    }
}
