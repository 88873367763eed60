//! Settings panel for the hand-clock desktop clock.
//!
//! This crate provides the egui side panel that re-themes the clock face:
//! theme presets, the four colors, border treatment, size and animation
//! speed. Every edit is applied through `ConfigManager`, which persists it
//! immediately. The panel also owns the menu button that opens it, because
//! "click outside the panel" has to exclude both.

use hand_clock_config::{Config, ConfigManager, ThemePreset, UiPalette};
use std::collections::HashSet;

mod layout_section;
pub mod section;
mod theme_section;

/// Width of the settings side panel
pub const PANEL_WIDTH: f32 = 320.0;

/// Visibility change reported by the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    Opened,
    Closed,
}

/// Edits collected while drawing one frame of the panel
#[derive(Debug, Default)]
pub(crate) struct PanelEdits {
    pub changed: bool,
    pub preset: Option<ThemePreset>,
    pub reset: bool,
}

/// Settings panel state that survives across frames
#[derive(Debug, Default)]
pub struct SettingsPanel {
    open: bool,
    collapsed_sections: HashSet<String>,
    last_error: Option<String>,
}

impl SettingsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the panel; returns `Some(Opened)` only if it was closed.
    pub fn open(&mut self) -> Option<PanelEvent> {
        if self.open {
            return None;
        }
        self.open = true;
        Some(PanelEvent::Opened)
    }

    /// Close the panel; returns `Some(Closed)` only if it was open.
    pub fn close(&mut self) -> Option<PanelEvent> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(PanelEvent::Closed)
    }

    pub fn toggle(&mut self) -> PanelEvent {
        if self.open {
            self.open = false;
            PanelEvent::Closed
        } else {
            self.open = true;
            PanelEvent::Opened
        }
    }

    /// Draw the menu button and, when open, the panel.
    ///
    /// Returns the visibility change caused by this frame's input: the menu
    /// button, the close button, Escape, or a primary click that lands outside
    /// the panel, the menu button and any popup (color pickers).
    pub fn show(&mut self, ctx: &egui::Context, manager: &mut ConfigManager) -> Option<PanelEvent> {
        let palette = manager.palette();
        let (menu_rect, menu_event) = self.show_menu_button(ctx, &palette);
        if menu_event.is_some() {
            return menu_event;
        }

        if !self.open {
            return None;
        }

        let mut edits = PanelEdits::default();
        let mut close_clicked = false;
        let mut draft = manager.config().clone();

        let panel = egui::SidePanel::right("hand_clock_settings")
            .resizable(false)
            .exact_width(PANEL_WIDTH)
            .frame(
                egui::Frame::NONE
                    .fill(palette_color(palette.panel_bg))
                    .stroke(egui::Stroke::new(1.0, palette_color(palette.border)))
                    .inner_margin(egui::Margin::same(12)),
            )
            .show(ctx, |ui| {
                ui.visuals_mut().override_text_color = Some(palette_color(palette.text));

                ui.horizontal(|ui| {
                    ui.heading("Settings");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Close").on_hover_text("Close settings").clicked() {
                            close_clicked = true;
                        }
                    });
                });
                ui.separator();

                egui::ScrollArea::vertical().show(ui, |ui| {
                    theme_section::show_theme_section(
                        ui,
                        &mut draft,
                        &mut edits,
                        &mut self.collapsed_sections,
                    );
                    layout_section::show_layout_section(
                        ui,
                        &mut draft,
                        &mut edits,
                        &mut self.collapsed_sections,
                    );

                    section::section_heading(ui, "Reset");
                    if ui
                        .button("Reset to defaults")
                        .on_hover_text("Restore the default theme, size and speed")
                        .clicked()
                    {
                        edits.reset = true;
                    }

                    if let Some(error) = &self.last_error {
                        ui.add_space(8.0);
                        ui.colored_label(egui::Color32::from_rgb(220, 60, 60), error);
                    }
                });
            });

        self.apply_edits(manager, draft, edits);

        let escape = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if close_clicked || escape || clicked_outside(ctx, panel.response.rect, menu_rect) {
            return self.close();
        }
        None
    }

    /// Draw the settings button in the top-left corner.
    ///
    /// Returns the button rect and the toggle event if it was clicked.
    fn show_menu_button(
        &mut self,
        ctx: &egui::Context,
        palette: &UiPalette,
    ) -> (egui::Rect, Option<PanelEvent>) {
        let response = egui::Area::new(egui::Id::new("hand_clock_menu_button"))
            .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 12.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let button = egui::Button::new(
                    egui::RichText::new("⚙")
                        .size(18.0)
                        .color(palette_color(palette.text_solid)),
                )
                .fill(palette_color(palette.panel_bg))
                .stroke(egui::Stroke::new(1.0, palette_color(palette.border)));
                ui.add(button).on_hover_text("Settings")
            });

        let event = response.inner.clicked().then(|| self.toggle());
        (response.response.rect, event)
    }

    fn apply_edits(
        &mut self,
        manager: &mut ConfigManager,
        draft: Config,
        edits: PanelEdits,
    ) {
        let result = if edits.reset {
            manager.reset()
        } else if let Some(preset) = edits.preset {
            manager.apply_preset(preset)
        } else if edits.changed {
            manager.replace(draft).map(|_| ())
        } else {
            return;
        };

        match result {
            Ok(()) => self.last_error = None,
            Err(e) => {
                log::error!("Failed to save settings: {}", e);
                self.last_error = Some(format!("Could not save settings: {e}"));
            }
        }
    }
}

/// A primary click this frame that hit neither the panel, the menu button,
/// nor a foreground layer such as an open color picker.
fn clicked_outside(ctx: &egui::Context, panel_rect: egui::Rect, menu_rect: egui::Rect) -> bool {
    let Some(pos) = ctx.input(|i| {
        if i.pointer.primary_clicked() {
            i.pointer.interact_pos()
        } else {
            None
        }
    }) else {
        return false;
    };

    if panel_rect.contains(pos) || menu_rect.contains(pos) {
        return false;
    }
    ctx.layer_id_at(pos)
        .is_none_or(|layer| layer.order == egui::Order::Background)
}

/// Convert an unmultiplied RGBA palette entry to an egui color.
pub fn palette_color(rgba: [u8; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3])
}

#[cfg(test)]
mod tests {
    use super::*;
    use hand_clock_config::MemoryStore;

    fn manager() -> ConfigManager {
        ConfigManager::load(Box::new(MemoryStore::new()))
    }

    fn run_frame(
        ctx: &egui::Context,
        panel: &mut SettingsPanel,
        manager: &mut ConfigManager,
        events: Vec<egui::Event>,
    ) -> Option<PanelEvent> {
        let input = egui::RawInput {
            screen_rect: Some(screen()),
            events,
            ..Default::default()
        };
        let mut result = None;
        let _ = ctx.run(input, |ctx| {
            result = panel.show(ctx, manager);
        });
        result
    }

    fn screen() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0))
    }

    /// Point just inside the menu button anchored at (12, 12)
    const MENU_POS: egui::Pos2 = egui::pos2(18.0, 18.0);

    /// Move, press and release the primary button at `pos` over three frames.
    ///
    /// Returns the first visibility change reported.
    fn click_at(
        ctx: &egui::Context,
        panel: &mut SettingsPanel,
        manager: &mut ConfigManager,
        pos: egui::Pos2,
    ) -> Option<PanelEvent> {
        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        };
        [egui::Event::PointerMoved(pos), button(true), button(false)]
            .into_iter()
            .fold(None, |first, event| {
                let reported = run_frame(ctx, panel, manager, vec![event]);
                first.or(reported)
            })
    }

    #[test]
    fn test_click_outside_closes_panel() {
        let ctx = egui::Context::default();
        let mut panel = SettingsPanel::new();
        let mut manager = manager();
        panel.open();
        run_frame(&ctx, &mut panel, &mut manager, Vec::new());

        let event = click_at(&ctx, &mut panel, &mut manager, egui::pos2(200.0, 300.0));
        assert_eq!(event, Some(PanelEvent::Closed));
        assert!(!panel.is_open());
    }

    #[test]
    fn test_click_inside_panel_keeps_it_open() {
        let ctx = egui::Context::default();
        let mut panel = SettingsPanel::new();
        let mut manager = manager();
        panel.open();
        run_frame(&ctx, &mut panel, &mut manager, Vec::new());

        let inside = egui::pos2(800.0 - PANEL_WIDTH / 2.0, 590.0);
        assert_eq!(click_at(&ctx, &mut panel, &mut manager, inside), None);
        assert!(panel.is_open());
        assert_eq!(manager.config(), &Config::default());
    }

    #[test]
    fn test_menu_button_toggles_panel() {
        let ctx = egui::Context::default();
        let mut panel = SettingsPanel::new();
        let mut manager = manager();
        run_frame(&ctx, &mut panel, &mut manager, Vec::new());

        assert_eq!(
            click_at(&ctx, &mut panel, &mut manager, MENU_POS),
            Some(PanelEvent::Opened)
        );
        assert!(panel.is_open());
        assert_eq!(
            click_at(&ctx, &mut panel, &mut manager, MENU_POS),
            Some(PanelEvent::Closed)
        );
        assert!(!panel.is_open());
    }

    #[test]
    fn test_open_close_report_only_transitions() {
        let mut panel = SettingsPanel::new();
        assert_eq!(panel.close(), None);
        assert_eq!(panel.open(), Some(PanelEvent::Opened));
        assert_eq!(panel.open(), None);
        assert!(panel.is_open());
        assert_eq!(panel.close(), Some(PanelEvent::Closed));
        assert!(!panel.is_open());
    }

    #[test]
    fn test_toggle_alternates() {
        let mut panel = SettingsPanel::new();
        assert_eq!(panel.toggle(), PanelEvent::Opened);
        assert_eq!(panel.toggle(), PanelEvent::Closed);
    }

    #[test]
    fn test_idle_frame_reports_nothing() {
        let ctx = egui::Context::default();
        let mut panel = SettingsPanel::new();
        let mut manager = manager();
        panel.open();
        assert_eq!(run_frame(&ctx, &mut panel, &mut manager, Vec::new()), None);
        assert!(panel.is_open());
        assert_eq!(manager.stored_record().unwrap(), None);
    }

    #[test]
    fn test_escape_closes_open_panel() {
        let ctx = egui::Context::default();
        let mut panel = SettingsPanel::new();
        let mut manager = manager();
        panel.open();
        let escape = egui::Event::Key {
            key: egui::Key::Escape,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        };
        assert_eq!(
            run_frame(&ctx, &mut panel, &mut manager, vec![escape]),
            Some(PanelEvent::Closed)
        );
        assert!(!panel.is_open());
    }

    #[test]
    fn test_escape_on_closed_panel_is_ignored() {
        let ctx = egui::Context::default();
        let mut panel = SettingsPanel::new();
        let mut manager = manager();
        let escape = egui::Event::Key {
            key: egui::Key::Escape,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        };
        assert_eq!(run_frame(&ctx, &mut panel, &mut manager, vec![escape]), None);
    }

    #[test]
    fn test_preset_edit_is_persisted() {
        let mut panel = SettingsPanel::new();
        let mut manager = manager();
        let draft = manager.config().clone();
        panel.apply_edits(
            &mut manager,
            draft,
            PanelEdits {
                preset: Some(ThemePreset::Dream),
                ..Default::default()
            },
        );
        assert_eq!(manager.config().active_preset(), Some(ThemePreset::Dream));
        assert!(manager.stored_record().unwrap().is_some());
    }

    #[test]
    fn test_reset_edit_wins_over_slider_changes() {
        let mut panel = SettingsPanel::new();
        let mut manager = manager();
        manager.set_speed(60).unwrap();
        let mut draft = manager.config().clone();
        draft.size = 140;
        panel.apply_edits(
            &mut manager,
            draft,
            PanelEdits {
                changed: true,
                reset: true,
                ..Default::default()
            },
        );
        assert_eq!(manager.config(), &Config::default());
    }

    #[test]
    fn test_palette_color_keeps_alpha() {
        let color = palette_color([255, 255, 255, 26]);
        assert_eq!(color.a(), 26);
    }
}
