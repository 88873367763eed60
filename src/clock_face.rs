//! egui clock face: paints the 6 x 24 two-hand cells and animates the hands.
//!
//! `ClockFace` only remembers the target angle of every hand. Painting asks
//! egui to animate from the last painted angle towards the target over the
//! configured speed, so a new render turns into a smooth rotation.

use crate::glyph::{BLANK_ANGLES, CELLS_PER_DIGIT, GRID_COLUMNS, GRID_ROWS, HandAngles, cell_position};
use crate::surface::{ClockSurface, DigitPosition, Field};
use hand_clock_config::{Color, Config};

/// Cell side at 100% size, in logical pixels
pub const BASE_CELL_SIZE: f32 = 26.0;
/// Space between cells of one digit
pub const BASE_CELL_GAP: f32 = 2.0;
/// Space between the two digits of a field
pub const BASE_DIGIT_GAP: f32 = 8.0;
/// Space between fields
pub const BASE_FIELD_GAP: f32 = 28.0;

/// Hand stroke width relative to the cell side
const HAND_WIDTH_RATIO: f32 = 0.1;

/// Pixel geometry of the face at a given scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceLayout {
    pub cell_size: f32,
    pub cell_gap: f32,
    pub digit_gap: f32,
    pub field_gap: f32,
}

impl FaceLayout {
    pub fn for_scale(scale: f32) -> Self {
        Self {
            cell_size: BASE_CELL_SIZE * scale,
            cell_gap: BASE_CELL_GAP * scale,
            digit_gap: BASE_DIGIT_GAP * scale,
            field_gap: BASE_FIELD_GAP * scale,
        }
    }

    pub fn digit_size(&self) -> egui::Vec2 {
        let span = |count: usize| {
            count as f32 * self.cell_size + count.saturating_sub(1) as f32 * self.cell_gap
        };
        egui::vec2(span(GRID_COLUMNS), span(GRID_ROWS))
    }

    fn field_width(&self) -> f32 {
        2.0 * self.digit_size().x + self.digit_gap
    }

    pub fn face_size(&self) -> egui::Vec2 {
        let fields = Field::ALL.len() as f32;
        egui::vec2(
            fields * self.field_width() + (fields - 1.0) * self.field_gap,
            self.digit_size().y,
        )
    }

    /// Top-left corner of one digit slot, relative to the face's top-left.
    pub fn digit_offset(&self, field: Field, position: DigitPosition) -> egui::Vec2 {
        let field_x = field.index() as f32 * (self.field_width() + self.field_gap);
        let digit_x = position.index() as f32 * (self.digit_size().x + self.digit_gap);
        egui::vec2(field_x + digit_x, 0.0)
    }

    pub fn cell_rect(
        &self,
        face_min: egui::Pos2,
        field: Field,
        position: DigitPosition,
        cell: usize,
    ) -> egui::Rect {
        let (row, column) = cell_position(cell);
        let step = self.cell_size + self.cell_gap;
        let min = face_min
            + self.digit_offset(field, position)
            + egui::vec2(column as f32 * step, row as f32 * step);
        egui::Rect::from_min_size(min, egui::Vec2::splat(self.cell_size))
    }
}

/// Target hand angles for every cell on the face
#[derive(Debug, Clone)]
pub struct ClockFace {
    targets: [[[HandAngles; CELLS_PER_DIGIT]; 2]; 3],
    built: bool,
}

impl Default for ClockFace {
    fn default() -> Self {
        Self {
            targets: [[[BLANK_ANGLES; CELLS_PER_DIGIT]; 2]; 3],
            built: false,
        }
    }
}

impl ClockFace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Target angles of one cell; the blank pair for an out-of-range cell.
    pub fn target(&self, field: Field, position: DigitPosition, cell: usize) -> HandAngles {
        self.targets[field.index()][position.index()]
            .get(cell)
            .copied()
            .unwrap_or(BLANK_ANGLES)
    }

    /// Paint the face centered in the remaining space of `ui`.
    pub fn paint(&self, ui: &mut egui::Ui, config: &Config) -> egui::Response {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        if !self.built {
            return response;
        }

        let scale = config.scale();
        let layout = FaceLayout::for_scale(scale);
        let face_min = response.rect.center() - layout.face_size() / 2.0;
        let style = CellStyle::new(config, layout.cell_size);
        let ctx = ui.ctx();

        for field in Field::ALL {
            for position in DigitPosition::ALL {
                for cell in 0..CELLS_PER_DIGIT {
                    let rect = layout.cell_rect(face_min, field, position, cell);
                    let target = self.target(field, position, cell);
                    let first = animate_hand(ctx, (field, position, cell, 0), target.first, config);
                    let second = animate_hand(ctx, (field, position, cell, 1), target.second, config);
                    style.paint_cell(&painter, rect, first, second);
                }
            }
        }

        response
    }
}

impl ClockSurface for ClockFace {
    fn build(&mut self) {
        self.targets = [[[BLANK_ANGLES; CELLS_PER_DIGIT]; 2]; 3];
        self.built = true;
        log::debug!(
            "Built clock face: {} fields x 2 digits x {} cells",
            Field::ALL.len(),
            CELLS_PER_DIGIT
        );
    }

    fn set_cell(&mut self, field: Field, position: DigitPosition, cell: usize, angles: HandAngles) {
        match self.targets[field.index()][position.index()].get_mut(cell) {
            Some(slot) => *slot = angles,
            None => log::warn!("Ignoring out-of-range cell {} of {}", cell, field.name()),
        }
    }
}

/// Current on-screen angle (degrees) of one hand, easing towards `target`.
fn animate_hand(
    ctx: &egui::Context,
    key: (Field, DigitPosition, usize, usize),
    target: u16,
    config: &Config,
) -> f32 {
    let id = egui::Id::new(("hand_clock_hand", key));
    ctx.animate_value_with_time(id, target as f32, config.animation_secs())
}

/// Resolved colors and stroke sizes for painting cells
struct CellStyle {
    fill: egui::Color32,
    border: egui::Stroke,
    hand: egui::Stroke,
    corner_radius: egui::CornerRadius,
    hand_inset: f32,
}

impl CellStyle {
    fn new(config: &Config, cell_size: f32) -> Self {
        let border_width = config.border_width * config.scale();
        let hand_width = (cell_size * HAND_WIDTH_RATIO).max(1.0);
        Self {
            fill: color32(config.unit_bg),
            border: egui::Stroke::new(border_width, color32(config.unit_border)),
            hand: egui::Stroke::new(hand_width, color32(config.hand_color)),
            corner_radius: egui::CornerRadius::from(
                cell_size * config.border_radius as f32 / 100.0,
            ),
            hand_inset: border_width + hand_width / 2.0,
        }
    }

    fn paint_cell(&self, painter: &egui::Painter, rect: egui::Rect, first: f32, second: f32) {
        painter.rect(
            rect,
            self.corner_radius,
            self.fill,
            self.border,
            egui::StrokeKind::Inside,
        );

        let center = rect.center();
        let length = (rect.width() / 2.0 - self.hand_inset).max(0.0);
        for degrees in [first, second] {
            painter.line_segment([center, hand_tip(center, length, degrees)], self.hand);
        }
        painter.circle_filled(center, self.hand.width * 0.6, self.hand.color);
    }
}

/// End point of a hand; 0° points right and angles grow clockwise on screen.
pub fn hand_tip(center: egui::Pos2, length: f32, degrees: f32) -> egui::Pos2 {
    let radians = degrees.to_radians();
    center + length * egui::vec2(radians.cos(), radians.sin())
}

pub fn color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}
