use egui::{Color32, DragValue, Ui};

use super::{AXIS_BLUE, BLACK, FAINT_RED, GRID_BLUE};

/// colors and widths of the canvas, user adjustable and persisted with the app
#[derive(Clone, Copy, PartialEq, Debug, serde::Deserialize, serde::Serialize)]
pub struct CanvasStyle {
    pub grid_color: Color32,
    pub axis_color: Color32,
    pub line_color: Color32,
    pub target_color: Color32,
    pub line_width: f32,
}

impl CanvasStyle {
    pub const DEFAULT: Self = Self {
        grid_color: GRID_BLUE,
        axis_color: AXIS_BLUE,
        line_color: BLACK,
        target_color: FAINT_RED,
        line_width: 3.0,
    };

    pub fn draw_options(&mut self, ui: &mut Ui) {
        fn color_row(ui: &mut Ui, name: &str, color: &mut Color32, default: Color32) {
            ui.horizontal(|ui| {
                ui.label(name);
                ui.color_edit_button_srgba(color);
                if ui.button("reset").clicked() {
                    *color = default;
                }
            });
        }
        ui.collapsing("canvas style", |ui| {
            color_row(ui, "grid: ", &mut self.grid_color, Self::DEFAULT.grid_color);
            color_row(ui, "axes: ", &mut self.axis_color, Self::DEFAULT.axis_color);
            color_row(ui, "line: ", &mut self.line_color, Self::DEFAULT.line_color);
            color_row(ui, "target: ", &mut self.target_color, Self::DEFAULT.target_color);
            ui.horizontal(|ui| {
                ui.label("line width: ");
                ui.add(DragValue::new(&mut self.line_width).range(1.0..=8.0).speed(0.1));
            });
        });
    }
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}
