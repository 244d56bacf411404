//! Centralized theme constants for Notepad To-Do
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0xfe, 0xf9, 0xd1); // notepad yellow
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0xfd, 0xf3, 0xb8); // slightly deeper yellow
pub const BG_INPUT: Color32 = Color32::from_rgb(0xff, 0xfd, 0xee); // near-white input field
pub const BG_HOVER: Color32 = Color32::from_rgb(0xf6, 0xee, 0xb4); // row hover

// =============================================================================
// COLORS - Text
// =============================================================================
pub const INK: Color32 = Color32::from_rgb(0x1a, 0x1a, 0x1a); // pencil black
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x6b, 0x64, 0x4a);
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x9a, 0x92, 0x72);

// =============================================================================
// COLORS - Task markers
// =============================================================================
pub const SELECTION_FILL: Color32 = Color32::from_rgb(0x00, 0x00, 0xff); // selected checkbox
pub const COMPLETED_FILL: Color32 = Color32::from_rgb(0xff, 0x00, 0x00); // done marker

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0xe4, 0xdc, 0xae);
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x1a, 0x1a, 0x1a); // checkbox outline

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0xef, 0xe5, 0xb0);
pub const BTN_ACCENT: Color32 = Color32::from_rgb(0x2d, 0x6c, 0xdf); // confirm actions
pub const BTN_DANGER: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26); // red-600

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_BODY: f32 = 16.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const HEADER_HEIGHT: f32 = 96.0;
pub const TASK_ROW_HEIGHT: f32 = 40.0;
pub const TASK_ROW_SPACING: f32 = 8.0;
pub const CHECKBOX_SIZE: f32 = 26.0;
pub const CHECKBOX_STROKE: f32 = 2.0;
pub const DONE_MARKER_INSET: f32 = 6.0;
pub const BUTTON_HEIGHT: f32 = 28.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_SMALL: f32 = 2.0;
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: false,
        panel_fill: BG_BASE,
        window_fill: BG_INPUT,
        extreme_bg_color: BG_INPUT,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: BTN_ACCENT,
        override_text_color: Some(INK),
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0xbf, 0xd4, 0xff), // text highlight
            stroke: egui::Stroke::NONE,
        },
        striped: false,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: egui::Stroke::new(1.0, BORDER_SUBTLE),
        window_corner_radius: egui::CornerRadius::same(8),
        menu_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Modal frame
// =============================================================================
pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_INPUT)
        .stroke(egui::Stroke::new(1.0, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(20))
}

// =============================================================================
// HELPER - Input frame (bordered text field)
// =============================================================================
pub fn input_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_INPUT)
        .stroke(egui::Stroke::new(1.0, BORDER_DEFAULT))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(8, 8))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Returns (fill, draw_rect) for a custom-painted button with hover/press effects.
/// Lightens on hover, slightly lightens + shrinks on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (lighten(base_fill, 0.06), rect.shrink(1.5))
    } else if response.hovered() {
        (lighten(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

/// Paint a fixed-size text button and report clicks.
pub fn paint_button(
    ui: &mut egui::Ui,
    size: egui::Vec2,
    base_fill: Color32,
    text_color: Color32,
    label: &str,
) -> bool {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    let (fill, draw_rect) = button_visual(&response, base_fill, rect);
    ui.painter().rect_filled(draw_rect, RADIUS_DEFAULT, fill);
    ui.painter().text(
        draw_rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(FONT_LABEL),
        text_color,
    );
    response.clicked()
}
