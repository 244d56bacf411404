//! Utility functions

use crate::constants::{APP_NAME, SAVE_EXTENSION};
use std::path::PathBuf;

// Square viewBox — rasterized for window/taskbar icons
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect x="4" y="2" width="56" height="60" rx="6" fill="#fef9d1" stroke="#1a1a1a" stroke-width="3"/><rect x="12" y="12" width="12" height="12" rx="2" fill="#0000ff" stroke="#1a1a1a" stroke-width="2"/><rect x="15" y="15" width="6" height="6" fill="#ff0000"/><line x1="30" y1="18" x2="52" y2="18" stroke="#1a1a1a" stroke-width="3" stroke-linecap="round"/><rect x="12" y="32" width="12" height="12" rx="2" fill="none" stroke="#1a1a1a" stroke-width="2"/><line x1="30" y1="38" x2="52" y2="38" stroke="#1a1a1a" stroke-width="3" stroke-linecap="round"/><line x1="12" y1="54" x2="44" y2="54" stroke="#9a9272" stroke-width="3" stroke-linecap="round"/></svg>"##;

/// Rasterize the icon SVG to a square image (for window/taskbar icons).
pub fn rasterize_icon_square(size: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).unwrap();
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), size, size)
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Get the application data directory path
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Default title for a freshly saved list, e.g. "tasks-2026-08-30".
pub fn default_save_title() -> String {
    format!("tasks-{}", chrono::Local::now().format("%Y-%m-%d"))
}

/// Turn a user-entered title into a usable filename: strip path separators
/// and other characters that upset filesystems, append the extension if the
/// user didn't type one.
pub fn title_to_filename(title: &str) -> String {
    let cleaned: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let cleaned = if cleaned.is_empty() {
        default_save_title()
    } else {
        cleaned
    };
    if cleaned.to_ascii_lowercase().ends_with(&format!(".{}", SAVE_EXTENSION)) {
        cleaned
    } else {
        format!("{}.{}", cleaned, SAVE_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_gets_txt_extension() {
        assert_eq!(title_to_filename("groceries"), "groceries.txt");
        assert_eq!(title_to_filename("groceries.txt"), "groceries.txt");
        assert_eq!(title_to_filename("Groceries.TXT"), "Groceries.TXT");
    }

    #[test]
    fn separators_are_replaced() {
        assert_eq!(title_to_filename("a/b\\c:d"), "a_b_c_d.txt");
    }

    #[test]
    fn empty_title_falls_back_to_dated_default() {
        let name = title_to_filename("   ");
        assert!(name.starts_with("tasks-"));
        assert!(name.ends_with(".txt"));
    }
}
