//! Helper functions for collapsible sections in the settings panel.
//!
//! Provides consistent styling and behavior for settings sections.

use std::collections::HashSet;

/// Standard width for slider controls
pub const SLIDER_WIDTH: f32 = 180.0;

/// Standard slider height
pub const SLIDER_HEIGHT: f32 = 18.0;

/// Helper to show a collapsible section with persistent state tracking.
///
/// The `collapsed_sections` set stores section IDs that have been toggled from
/// their default state, so the collapse state survives closing and reopening
/// the panel.
pub fn collapsing_section<R>(
    ui: &mut egui::Ui,
    title: &str,
    id: &str,
    default_open: bool,
    collapsed_sections: &mut HashSet<String>,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::CollapsingResponse<R> {
    // XOR logic: toggled + default_open => closed, toggled + !default_open => open
    let is_toggled = collapsed_sections.contains(id);
    let should_be_open = is_toggled != default_open;

    let response = egui::CollapsingHeader::new(title)
        .id_salt(id)
        .default_open(should_be_open)
        .show(ui, add_contents);

    if response.header_response.clicked() {
        let section_id = id.to_string();
        if !collapsed_sections.remove(&section_id) {
            collapsed_sections.insert(section_id);
        }
    }

    response
}

/// Helper to show a section heading with consistent styling.
pub fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.add_space(8.0);
    ui.heading(title);
    ui.add_space(4.0);
}

/// Labeled slider row; returns true when the value changed this frame.
pub fn slider_row<N: egui::emath::Numeric>(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut N,
    range: std::ops::RangeInclusive<N>,
    suffix: &str,
    hover: &str,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add_sized(
            [SLIDER_WIDTH, SLIDER_HEIGHT],
            egui::Slider::new(value, range).suffix(suffix),
        )
        .on_hover_text(hover)
        .changed()
    })
    .inner
}

/// Labeled color picker row; returns true when the color changed this frame.
pub fn color_row(ui: &mut egui::Ui, label: &str, rgb: &mut [u8; 3]) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.color_edit_button_srgb(rgb).changed()
    })
    .inner
}
