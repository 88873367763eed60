//! Theme section: preset radio buttons and the four color pickers.

use crate::PanelEdits;
use crate::section::{collapsing_section, color_row};
use hand_clock_config::{Color, Config, ThemePreset};
use std::collections::HashSet;

pub(crate) fn show_theme_section(
    ui: &mut egui::Ui,
    draft: &mut Config,
    edits: &mut PanelEdits,
    collapsed: &mut HashSet<String>,
) {
    collapsing_section(ui, "Theme", "theme_presets", true, collapsed, |ui| {
        let active = draft.active_preset();
        ui.horizontal_wrapped(|ui| {
            for preset in ThemePreset::ALL {
                if ui
                    .radio(active == Some(preset), preset.label())
                    .on_hover_text(format!(
                        "Background {}, hands {}",
                        preset.colors().bg_color,
                        preset.colors().hand_color
                    ))
                    .clicked()
                {
                    edits.preset = Some(preset);
                }
            }
        });
    });

    collapsing_section(ui, "Colors", "theme_colors", true, collapsed, |ui| {
        edits.changed |= color_field(ui, "Background:", &mut draft.bg_color);
        edits.changed |= color_field(ui, "Hands:", &mut draft.hand_color);
        edits.changed |= color_field(ui, "Cell fill:", &mut draft.unit_bg);
        edits.changed |= color_field(ui, "Cell border:", &mut draft.unit_border);
    });
}

fn color_field(ui: &mut egui::Ui, label: &str, color: &mut Color) -> bool {
    let mut rgb = color.as_array();
    if color_row(ui, label, &mut rgb) {
        *color = Color::from(rgb);
        true
    } else {
        false
    }
}
