//! Shape section: border treatment, face size and animation speed sliders.

use crate::PanelEdits;
use crate::section::{collapsing_section, slider_row};
use hand_clock_config::Config;
use std::collections::HashSet;

pub(crate) fn show_layout_section(
    ui: &mut egui::Ui,
    draft: &mut Config,
    edits: &mut PanelEdits,
    collapsed: &mut HashSet<String>,
) {
    collapsing_section(ui, "Shape", "layout_shape", true, collapsed, |ui| {
        edits.changed |= slider_row(
            ui,
            "Border radius:",
            &mut draft.border_radius,
            Config::BORDER_RADIUS_RANGE,
            "%",
            "Corner rounding of each cell (50% draws circles)",
        );
        edits.changed |= slider_row(
            ui,
            "Border width:",
            &mut draft.border_width,
            Config::BORDER_WIDTH_RANGE,
            "px",
            "Outline width of each cell",
        );
    });

    collapsing_section(ui, "Size & Motion", "layout_motion", true, collapsed, |ui| {
        edits.changed |= slider_row(
            ui,
            "Clock size:",
            &mut draft.size,
            Config::SIZE_RANGE,
            "%",
            "Scale of the whole clock face",
        );
        edits.changed |= slider_row(
            ui,
            "Animation speed:",
            &mut draft.speed,
            Config::SPEED_RANGE,
            "ms",
            "How long a hand takes to rotate to its new angle",
        );
    });
}
