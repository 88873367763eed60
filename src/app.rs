use crate::cli::RuntimeOptions;
use crate::clock::Clock;
use crate::clock_face::{ClockFace, FaceLayout, color32};
use crate::poller::Poller;
use crate::time_source::{SystemTimeSource, TimeSource};
use anyhow::{Result, anyhow};
use hand_clock_config::ConfigManager;
use hand_clock_settings_ui::{PanelEvent, SettingsPanel};
use std::time::Instant;

/// Window title
pub const APP_TITLE: &str = "Hand Clock";

/// Main application
pub struct App {
    config: ConfigManager,
}

impl App {
    /// Create a new application from CLI options
    pub fn new(options: &RuntimeOptions) -> Result<Self> {
        let config = crate::cli::open_config_or_memory(options.config_dir.as_deref());
        Ok(Self { config })
    }

    /// Open the clock window and block until it is closed
    pub fn run(self) -> Result<()> {
        let layout = FaceLayout::for_scale(self.config.config().scale());
        let face_size = layout.face_size();
        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(APP_TITLE)
                .with_inner_size([face_size.x + 96.0, face_size.y + 160.0])
                .with_min_inner_size([320.0, 200.0]),
            ..Default::default()
        };

        let state = AppState::new(SystemTimeSource, self.config);
        eframe::run_native(
            APP_TITLE,
            native_options,
            Box::new(move |_cc| Ok(Box::new(state))),
        )
        .map_err(|e| anyhow!("Failed to run the clock window: {e}"))
    }
}

/// Per-window state driven by egui frames
pub struct AppState<T: TimeSource> {
    clock: Clock<T>,
    face: ClockFace,
    config: ConfigManager,
    settings: SettingsPanel,
    poller: Poller,
}

impl<T: TimeSource> AppState<T> {
    /// Build the face and show the current time right away
    pub fn new(source: T, config: ConfigManager) -> Self {
        let mut clock = Clock::new(source);
        let mut face = ClockFace::new();
        clock.start(&mut face);
        Self {
            clock,
            face,
            config,
            settings: SettingsPanel::new(),
            poller: Poller::default(),
        }
    }

    pub fn clock(&self) -> &Clock<T> {
        &self.clock
    }

    pub fn face(&self) -> &ClockFace {
        &self.face
    }

    pub fn config(&self) -> &ConfigManager {
        &self.config
    }

    pub fn settings_open(&self) -> bool {
        self.settings.is_open()
    }

    /// Open the settings panel as if the menu button had been clicked
    pub fn open_settings(&mut self) {
        if let Some(event) = self.settings.open() {
            self.handle_panel_event(event);
        }
    }

    fn handle_panel_event(&mut self, event: PanelEvent) {
        match event {
            PanelEvent::Opened => self.clock.pause(),
            PanelEvent::Closed => {
                self.clock.resume(&mut self.face);
            }
        }
    }

    /// Run one UI frame: panel input, clock tick, face paint, repaint schedule
    pub fn frame(&mut self, ctx: &egui::Context) {
        if let Some(event) = self.settings.show(ctx, &mut self.config) {
            self.handle_panel_event(event);
        }

        let now = Instant::now();
        if self.poller.poll(now) {
            self.clock.tick(&mut self.face);
        }

        let config = self.config.config();
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(color32(config.bg_color)))
            .show(ctx, |ui| {
                self.face.paint(ui, config);
            });

        ctx.request_repaint_after(self.poller.time_until_due(now));
    }
}

impl<T: TimeSource> eframe::App for AppState<T> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DigitPosition, Field};
    use crate::time_source::{ClockTime, ManualTimeSource};
    use hand_clock_config::MemoryStore;

    fn app_at(time: ClockTime) -> (AppState<ManualTimeSource>, ManualTimeSource) {
        let source = ManualTimeSource::new(time);
        let config = ConfigManager::load(Box::new(MemoryStore::new()));
        (AppState::new(source.clone(), config), source)
    }

    fn run_frame(ctx: &egui::Context, app: &mut AppState<ManualTimeSource>, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(800.0, 600.0),
            )),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.frame(ctx));
    }

    /// Move, press and release the primary button at `pos` over three frames.
    fn click_at(ctx: &egui::Context, app: &mut AppState<ManualTimeSource>, pos: egui::Pos2) {
        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        };
        for event in [egui::Event::PointerMoved(pos), button(true), button(false)] {
            run_frame(ctx, app, vec![event]);
        }
    }

    fn escape() -> egui::Event {
        egui::Event::Key {
            key: egui::Key::Escape,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_new_app_shows_current_time() {
        let (app, _) = app_at(ClockTime::from_hms(10, 0, 0));
        assert!(app.face().is_built());
        assert_eq!(
            app.face().target(Field::Hours, DigitPosition::Tens, 0).as_tuple(),
            (0, 90)
        );
    }

    #[test]
    fn test_frame_ticks_to_new_time() {
        let ctx = egui::Context::default();
        let (mut app, source) = app_at(ClockTime::from_hms(12, 0, 0));
        source.set(ClockTime::from_hms(12, 0, 1));
        run_frame(&ctx, &mut app, Vec::new());
        assert_eq!(app.clock().current_time(), &ClockTime::from_hms(12, 0, 1));
    }

    #[test]
    fn test_open_settings_pauses_and_escape_resumes() {
        let ctx = egui::Context::default();
        let (mut app, source) = app_at(ClockTime::from_hms(8, 15, 0));
        app.open_settings();
        assert!(app.settings_open());
        assert!(app.clock().is_paused());

        source.set(ClockTime::from_hms(8, 15, 7));
        run_frame(&ctx, &mut app, Vec::new());
        assert_eq!(app.clock().current_time(), &ClockTime::from_hms(8, 15, 0));

        run_frame(&ctx, &mut app, vec![escape()]);
        assert!(!app.settings_open());
        assert!(!app.clock().is_paused());
        assert_eq!(app.clock().current_time(), &ClockTime::from_hms(8, 15, 7));
    }

    #[test]
    fn test_click_on_face_closes_settings_and_resumes() {
        let ctx = egui::Context::default();
        let (mut app, source) = app_at(ClockTime::from_hms(21, 0, 0));
        app.open_settings();
        run_frame(&ctx, &mut app, Vec::new());

        source.set(ClockTime::from_hms(21, 0, 3));
        click_at(&ctx, &mut app, egui::pos2(200.0, 300.0));
        assert!(!app.settings_open());
        assert!(!app.clock().is_paused());
        assert_eq!(app.clock().current_time(), &ClockTime::from_hms(21, 0, 3));
    }

    #[test]
    fn test_menu_button_pauses_then_resumes() {
        let ctx = egui::Context::default();
        let (mut app, source) = app_at(ClockTime::from_hms(6, 30, 0));
        run_frame(&ctx, &mut app, Vec::new());
        let menu = egui::pos2(18.0, 18.0);

        click_at(&ctx, &mut app, menu);
        assert!(app.settings_open());
        assert!(app.clock().is_paused());

        source.set(ClockTime::from_hms(6, 30, 9));
        run_frame(&ctx, &mut app, Vec::new());
        assert_eq!(app.clock().current_time(), &ClockTime::from_hms(6, 30, 0));

        click_at(&ctx, &mut app, menu);
        assert!(!app.settings_open());
        assert!(!app.clock().is_paused());
        assert_eq!(app.clock().current_time(), &ClockTime::from_hms(6, 30, 9));
    }
}
