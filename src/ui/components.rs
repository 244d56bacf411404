//! Reusable UI components

use crate::theme;
use eframe::egui;

/// The per-task checkbox: outlined box, filled when the task is selected,
/// with a smaller red marker inside once the task is completed. Clicking it
/// toggles selection.
pub fn task_checkbox(ui: &mut egui::Ui, selected: bool, completed: bool) -> egui::Response {
    let size = theme::CHECKBOX_SIZE;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();

        if selected {
            painter.rect_filled(rect, theme::RADIUS_SMALL, theme::SELECTION_FILL);
        }
        painter.rect_stroke(
            rect,
            theme::RADIUS_SMALL,
            egui::Stroke::new(theme::CHECKBOX_STROKE, theme::BORDER_DEFAULT),
            egui::StrokeKind::Inside,
        );
        if completed {
            painter.rect_filled(
                rect.shrink(theme::DONE_MARKER_INSET),
                theme::RADIUS_SMALL,
                theme::COMPLETED_FILL,
            );
        }
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

/// One instruction line for the header: dim key cap, normal text.
pub fn instruction_line(ui: &mut egui::Ui, key: &str, text: &str) {
    ui.horizontal(|ui| {
        ui.add(
            egui::Label::new(
                egui::RichText::new(format!("[{}]", key))
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_MUTED)
                    .monospace(),
            )
            .selectable(false),
        );
        ui.add(
            egui::Label::new(
                egui::RichText::new(text)
                    .size(theme::FONT_LABEL)
                    .color(theme::INK),
            )
            .selectable(false),
        );
    });
}
